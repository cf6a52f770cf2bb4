//! Denormalized playlist of a broadcast service over a time range

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    pub artists_by_identifier: BTreeMap<String, PlaylistArtist>,
    pub composers_by_identifier: BTreeMap<String, PlaylistArtist>,
    pub compositions_by_identifier: BTreeMap<String, PlaylistComposition>,
    pub episodes: Vec<PlaylistEpisode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<PlaylistWarning>,
}

impl Playlist {
    pub fn items(&self) -> impl Iterator<Item = &PlaylistItem> {
        self.episodes.iter().flat_map(|episode| episode.items.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistArtist {
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistComposition {
    pub composer_identifiers: Vec<String>,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistEpisode {
    pub identifier: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<FixedOffset>>,
    pub items: Vec<PlaylistItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItem {
    pub artist_identifiers: BTreeMap<ArtistRole, Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composition_identifier: Option<String>,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<FixedOffset>>,
}

/// Role an artist played on a recording; unqualified artists are performers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArtistRole {
    #[serde(rename = "")]
    Performer,
    Conductor,
    Ensemble,
    Soloist,
}

/// Content-completeness problem found while assembling a playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PlaylistWarning {
    /// The recording a broadcast event performs could not be materialized
    #[serde(rename_all = "camelCase")]
    MissingRecording { broadcast_event: String, recording: String },
    /// A broadcast event performs more than one work
    #[serde(rename_all = "camelCase")]
    AmbiguousWorksPerformed { broadcast_event: String },
    /// A composition has no composer
    #[serde(rename_all = "camelCase")]
    CompositionWithoutComposers { composition: String },
    /// An episode lists no item with a known composition
    #[serde(rename_all = "camelCase")]
    EpisodeWithoutCompositions { episode: String },
}
