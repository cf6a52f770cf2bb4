//! Typed projections of graph nodes.
//!
//! Every entity type has a stub projection (identifier plus the handful of
//! fields needed to display or sort it) and a full projection. Models are
//! materialized from the triples surrounding a node through [`Resource`] and
//! serialize to JSON with an `"@id"` key holding the canonical identifier.

use crate::core::Identifier;
use crate::error::Result;
use serde::{Deserialize, Serialize};

pub mod broadcast_day;
pub mod creative_work;
pub mod event;
pub mod label;
pub mod playlist;
pub mod resource;
pub mod stub;
pub mod thing;
pub mod vocab;

pub use broadcast_day::BroadcastDay;
pub use creative_work::{MusicComposition, MusicRecording, RadioEpisode};
pub use event::{BroadcastEvent, Event};
pub use label::{compare, Labeled};
pub use playlist::Playlist;
pub use resource::Resource;
pub use stub::{ArtistStub, BroadcastServiceStub, EventStub, MusicArtistRoleStub, PersonStub, ThingStub};
pub use thing::{BroadcastService, Organization, Person, ThingProperties};

use vocab::schema;

/// Entity types known to the object layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelKind {
    Thing,
    Person,
    Organization,
    MusicGroup,
    Event,
    BroadcastEvent,
    BroadcastService,
    CreativeWork,
    RadioEpisode,
    RadioSeries,
    MusicRecording,
    MusicComposition,
    MusicAlbum,
}

const ALL_CLASSES: &[&str] = &[
    schema::THING,
    schema::PERSON,
    schema::ORGANIZATION,
    schema::MUSIC_GROUP,
    schema::EVENT,
    schema::BROADCAST_EVENT,
    schema::PUBLICATION_EVENT,
    schema::BROADCAST_SERVICE,
    schema::RADIO_BROADCAST_SERVICE,
    schema::CREATIVE_WORK,
    schema::RADIO_EPISODE,
    schema::RADIO_SERIES,
    schema::MUSIC_RECORDING,
    schema::MUSIC_COMPOSITION,
    schema::MUSIC_ALBUM,
    schema::MUSIC_PLAYLIST,
];

impl ModelKind {
    /// The class IRI of this kind
    pub fn rdf_type(self) -> &'static str {
        match self {
            ModelKind::Thing => schema::THING,
            ModelKind::Person => schema::PERSON,
            ModelKind::Organization => schema::ORGANIZATION,
            ModelKind::MusicGroup => schema::MUSIC_GROUP,
            ModelKind::Event => schema::EVENT,
            ModelKind::BroadcastEvent => schema::BROADCAST_EVENT,
            ModelKind::BroadcastService => schema::BROADCAST_SERVICE,
            ModelKind::CreativeWork => schema::CREATIVE_WORK,
            ModelKind::RadioEpisode => schema::RADIO_EPISODE,
            ModelKind::RadioSeries => schema::RADIO_SERIES,
            ModelKind::MusicRecording => schema::MUSIC_RECORDING,
            ModelKind::MusicComposition => schema::MUSIC_COMPOSITION,
            ModelKind::MusicAlbum => schema::MUSIC_ALBUM,
        }
    }

    /// The class IRI of this kind and of its known subclasses.
    ///
    /// An instance of any of these classes is an instance of the kind.
    pub fn rdf_types(self) -> &'static [&'static str] {
        match self {
            ModelKind::Thing => ALL_CLASSES,
            ModelKind::Organization => &[schema::ORGANIZATION, schema::MUSIC_GROUP],
            ModelKind::Event => &[schema::EVENT, schema::BROADCAST_EVENT, schema::PUBLICATION_EVENT],
            ModelKind::BroadcastService => &[schema::BROADCAST_SERVICE, schema::RADIO_BROADCAST_SERVICE],
            ModelKind::CreativeWork => &[
                schema::CREATIVE_WORK,
                schema::RADIO_EPISODE,
                schema::RADIO_SERIES,
                schema::MUSIC_RECORDING,
                schema::MUSIC_COMPOSITION,
                schema::MUSIC_ALBUM,
                schema::MUSIC_PLAYLIST,
            ],
            ModelKind::Person => &[schema::PERSON],
            ModelKind::MusicGroup => &[schema::MUSIC_GROUP],
            ModelKind::BroadcastEvent => &[schema::BROADCAST_EVENT],
            ModelKind::RadioEpisode => &[schema::RADIO_EPISODE],
            ModelKind::RadioSeries => &[schema::RADIO_SERIES],
            ModelKind::MusicRecording => &[schema::MUSIC_RECORDING],
            ModelKind::MusicComposition => &[schema::MUSIC_COMPOSITION],
            ModelKind::MusicAlbum => &[schema::MUSIC_ALBUM],
        }
    }
}

/// A projection that can be materialized from the triples around a node
pub trait Model: Sized + Send + Sync + 'static {
    /// Kind an identifier must be typed as for this projection to apply
    const KIND: ModelKind;

    /// Hops of related nodes required to materialize nested stubs
    const DEPTH: usize = 1;

    fn identifier(&self) -> &Identifier;

    fn from_resource(resource: &Resource<'_>) -> Result<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_includes_subclasses() {
        assert!(ModelKind::Event.rdf_types().contains(&schema::BROADCAST_EVENT));
        assert!(ModelKind::Thing.rdf_types().contains(&schema::MUSIC_RECORDING));
        assert_eq!(ModelKind::BroadcastEvent.rdf_types(), &[schema::BROADCAST_EVENT]);
    }

    #[test]
    fn test_rdf_type_is_first_of_rdf_types() {
        let kinds = [
            ModelKind::Person,
            ModelKind::Organization,
            ModelKind::Event,
            ModelKind::BroadcastService,
            ModelKind::CreativeWork,
            ModelKind::MusicRecording,
        ];
        for kind in kinds {
            assert_eq!(kind.rdf_types()[0], kind.rdf_type());
        }
    }
}
