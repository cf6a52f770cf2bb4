//! Creative works: radio episodes, music recordings and compositions

use crate::core::Identifier;
use crate::error::Result;
use crate::model::label::{compare, Labeled};
use crate::model::resource::Resource;
use crate::model::stub::{ArtistStub, EventStub, PersonStub, ThingStub};
use crate::model::thing::ThingProperties;
use crate::model::vocab::schema;
use crate::model::{Model, ModelKind};
use serde::{Deserialize, Serialize};

macro_rules! impl_labeled {
    ($model:ty) => {
        impl Labeled for $model {
            fn identifier(&self) -> &Identifier {
                &self.thing.identifier
            }

            fn name(&self) -> Option<&str> {
                self.thing.name.as_deref()
            }

            fn order(&self) -> Option<i64> {
                self.thing.order
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadioEpisode {
    #[serde(flatten)]
    pub thing: ThingProperties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_of_series: Option<ThingStub>,
    /// Broadcasts of this episode, earliest first
    #[serde(default)]
    pub publications: Vec<EventStub>,
}

impl Model for RadioEpisode {
    const KIND: ModelKind = ModelKind::RadioEpisode;

    fn identifier(&self) -> &Identifier {
        &self.thing.identifier
    }

    fn from_resource(resource: &Resource<'_>) -> Result<Self> {
        let mut publications = resource.related_each(schema::PUBLICATION, EventStub::from_resource)?;
        publications.sort_by(|left, right| compare(left, right));
        Ok(Self {
            thing: ThingProperties::from_resource(resource)?,
            part_of_series: resource.related_one(schema::PART_OF_SERIES, ThingStub::from_resource)?,
            publications,
        })
    }
}

impl_labeled!(RadioEpisode);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicRecording {
    #[serde(flatten)]
    pub thing: ThingProperties,
    #[serde(default)]
    pub by_artists: Vec<ArtistStub>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recording_of: Option<ThingStub>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_album: Option<ThingStub>,
    /// ISO 8601 duration, as stored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

impl Model for MusicRecording {
    const KIND: ModelKind = ModelKind::MusicRecording;
    const DEPTH: usize = 2;

    fn identifier(&self) -> &Identifier {
        &self.thing.identifier
    }

    fn from_resource(resource: &Resource<'_>) -> Result<Self> {
        Ok(Self {
            thing: ThingProperties::from_resource(resource)?,
            by_artists: resource.related_each(schema::BY_ARTIST, ArtistStub::from_resource)?,
            recording_of: resource.related_one(schema::RECORDING_OF, ThingStub::from_resource)?,
            in_album: resource.related_one(schema::IN_ALBUM, ThingStub::from_resource)?,
            duration: resource.string(schema::DURATION)?,
        })
    }
}

impl_labeled!(MusicRecording);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicComposition {
    #[serde(flatten)]
    pub thing: ThingProperties,
    #[serde(default)]
    pub composers: Vec<PersonStub>,
}

impl Model for MusicComposition {
    const KIND: ModelKind = ModelKind::MusicComposition;

    fn identifier(&self) -> &Identifier {
        &self.thing.identifier
    }

    fn from_resource(resource: &Resource<'_>) -> Result<Self> {
        Ok(Self {
            thing: ThingProperties::from_resource(resource)?,
            composers: resource.related_each(schema::COMPOSER, PersonStub::from_resource)?,
        })
    }
}

impl_labeled!(MusicComposition);
