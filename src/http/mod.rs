//! HTTP API module
//!
//! Provides REST endpoints for:
//! - SPARQL queries against the configured engine
//! - Broadcast services, their first and last broadcast days, and daily playlists

pub mod server;

pub use server::{create_server, start_server, ApiError, AppState, BroadcastDaysResponse, ErrorResponse, SuccessResponse};
