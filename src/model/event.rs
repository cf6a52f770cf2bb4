//! Events and broadcast events

use crate::core::Identifier;
use crate::error::Result;
use crate::model::label::{compare, Labeled};
use crate::model::resource::Resource;
use crate::model::stub::{BroadcastServiceStub, EventStub, ThingStub};
use crate::model::thing::ThingProperties;
use crate::model::vocab::schema;
use crate::model::{Model, ModelKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(flatten)]
    pub thing: ThingProperties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub super_event: Option<EventStub>,
    /// Sub-events in presentation order
    #[serde(default)]
    pub sub_events: Vec<EventStub>,
}

impl Event {
    pub fn to_stub(&self) -> EventStub {
        EventStub {
            identifier: self.thing.identifier.clone(),
            name: self.thing.name.clone(),
            order: self.thing.order,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

impl Model for Event {
    const KIND: ModelKind = ModelKind::Event;

    fn identifier(&self) -> &Identifier {
        &self.thing.identifier
    }

    fn from_resource(resource: &Resource<'_>) -> Result<Self> {
        let mut sub_events = resource.related_each(schema::SUB_EVENT, EventStub::from_resource)?;
        sub_events.sort_by(|left, right| compare(left, right));
        Ok(Self {
            thing: ThingProperties::from_resource(resource)?,
            start_date: resource.date_time(schema::START_DATE)?,
            end_date: resource.date_time(schema::END_DATE)?,
            super_event: resource.related_one(schema::SUPER_EVENT, EventStub::from_resource)?,
            sub_events,
        })
    }
}

impl Labeled for Event {
    fn identifier(&self) -> &Identifier {
        &self.thing.identifier
    }

    fn name(&self) -> Option<&str> {
        self.thing.name.as_deref()
    }

    fn order(&self) -> Option<i64> {
        self.thing.order
    }

    fn start_date(&self) -> Option<DateTime<Utc>> {
        self.start_date
    }
}

/// An airing of one or more works on a broadcast service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastEvent {
    #[serde(flatten)]
    pub event: Event,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_on: Option<BroadcastServiceStub>,
    #[serde(default)]
    pub works_performed: Vec<ThingStub>,
}

impl BroadcastEvent {
    pub fn to_stub(&self) -> EventStub {
        self.event.to_stub()
    }
}

impl Model for BroadcastEvent {
    const KIND: ModelKind = ModelKind::BroadcastEvent;

    fn identifier(&self) -> &Identifier {
        &self.event.thing.identifier
    }

    fn from_resource(resource: &Resource<'_>) -> Result<Self> {
        Ok(Self {
            event: Event::from_resource(resource)?,
            published_on: resource.related_one(schema::PUBLISHED_ON, BroadcastServiceStub::from_resource)?,
            works_performed: resource.related_each(schema::WORK_PERFORMED, ThingStub::from_resource)?,
        })
    }
}

impl Labeled for BroadcastEvent {
    fn identifier(&self) -> &Identifier {
        &self.event.thing.identifier
    }

    fn name(&self) -> Option<&str> {
        self.event.thing.name.as_deref()
    }

    fn order(&self) -> Option<i64> {
        self.event.thing.order
    }

    fn start_date(&self) -> Option<DateTime<Utc>> {
        self.event.start_date
    }
}
