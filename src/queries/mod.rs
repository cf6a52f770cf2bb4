//! Domain queries composed from [`ObjectSet`](crate::object_set::ObjectSet) calls.

pub mod first_or_last;
pub mod playlist;
pub mod services;

pub use first_or_last::{
    first_broadcast_day, first_broadcast_event, first_or_last_broadcast_day, first_or_last_broadcast_event,
    last_broadcast_day, last_broadcast_event, FirstOrLast,
};
pub use playlist::{playlist, playlist_for_day};
pub use services::broadcast_services;
