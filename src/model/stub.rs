//! Stub projections: identifier plus display-critical fields

use crate::core::Identifier;
use crate::error::Result;
use crate::model::label::Labeled;
use crate::model::resource::Resource;
use crate::model::vocab::schema;
use crate::model::{Model, ModelKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThingStub {
    #[serde(rename = "@id")]
    pub identifier: Identifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl Model for ThingStub {
    const KIND: ModelKind = ModelKind::Thing;
    const DEPTH: usize = 0;

    fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    fn from_resource(resource: &Resource<'_>) -> Result<Self> {
        Ok(Self {
            identifier: resource.identifier().clone(),
            name: resource.string(schema::NAME)?,
            order: resource.integer(schema::POSITION)?,
        })
    }
}

impl Labeled for ThingStub {
    fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn order(&self) -> Option<i64> {
        self.order
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonStub {
    #[serde(rename = "@id")]
    pub identifier: Identifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
}

impl Model for PersonStub {
    const KIND: ModelKind = ModelKind::Person;
    const DEPTH: usize = 0;

    fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    fn from_resource(resource: &Resource<'_>) -> Result<Self> {
        Ok(Self {
            identifier: resource.identifier().clone(),
            name: resource.string(schema::NAME)?,
            order: resource.integer(schema::POSITION)?,
            job_title: resource.string(schema::JOB_TITLE)?,
        })
    }
}

impl Labeled for PersonStub {
    fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn job_title(&self) -> Option<&str> {
        self.job_title.as_deref()
    }

    fn order(&self) -> Option<i64> {
        self.order
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStub {
    #[serde(rename = "@id")]
    pub identifier: Identifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
}

impl Model for EventStub {
    const KIND: ModelKind = ModelKind::Event;
    const DEPTH: usize = 0;

    fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    fn from_resource(resource: &Resource<'_>) -> Result<Self> {
        Ok(Self {
            identifier: resource.identifier().clone(),
            name: resource.string(schema::NAME)?,
            order: resource.integer(schema::POSITION)?,
            start_date: resource.date_time(schema::START_DATE)?,
            end_date: resource.date_time(schema::END_DATE)?,
        })
    }
}

impl Labeled for EventStub {
    fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn order(&self) -> Option<i64> {
        self.order
    }

    fn start_date(&self) -> Option<DateTime<Utc>> {
        self.start_date
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastServiceStub {
    #[serde(rename = "@id")]
    pub identifier: Identifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_sign: Option<String>,
    /// IANA time zone name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broadcast_timezone: Option<String>,
}

impl Model for BroadcastServiceStub {
    const KIND: ModelKind = ModelKind::BroadcastService;
    const DEPTH: usize = 0;

    fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    fn from_resource(resource: &Resource<'_>) -> Result<Self> {
        Ok(Self {
            identifier: resource.identifier().clone(),
            name: resource.string(schema::NAME)?,
            order: resource.integer(schema::POSITION)?,
            call_sign: resource.string(schema::CALL_SIGN)?,
            broadcast_timezone: resource.string(schema::BROADCAST_TIMEZONE)?,
        })
    }
}

impl Labeled for BroadcastServiceStub {
    fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn call_sign(&self) -> Option<&str> {
        self.call_sign.as_deref()
    }

    fn order(&self) -> Option<i64> {
        self.order
    }
}

/// An artist qualified by the role they played on a recording
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicArtistRoleStub {
    #[serde(rename = "@id")]
    pub identifier: Identifier,
    pub by_artist: ThingStub,
    pub role_name: Identifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl MusicArtistRoleStub {
    pub fn from_resource(resource: &Resource<'_>) -> Result<Self> {
        let by_artist = resource.related_one(schema::BY_ARTIST, ThingStub::from_resource)?;
        let role_name = resource.identifier_value(schema::ROLE_NAME)?;
        Ok(Self {
            identifier: resource.identifier().clone(),
            by_artist: resource.required(schema::BY_ARTIST, by_artist)?,
            role_name: resource.required(schema::ROLE_NAME, role_name)?,
            order: resource.integer(schema::POSITION)?,
        })
    }
}

/// A performer of a recording, optionally qualified by a role
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ArtistStub {
    Artist(ThingStub),
    Role(MusicArtistRoleStub),
}

impl ArtistStub {
    pub fn from_resource(resource: &Resource<'_>) -> Result<Self> {
        if resource.values(schema::ROLE_NAME).is_empty() {
            Ok(ArtistStub::Artist(ThingStub::from_resource(resource)?))
        } else {
            Ok(ArtistStub::Role(MusicArtistRoleStub::from_resource(resource)?))
        }
    }

    pub fn identifier(&self) -> &Identifier {
        match self {
            ArtistStub::Artist(stub) => &stub.identifier,
            ArtistStub::Role(stub) => &stub.identifier,
        }
    }
}
