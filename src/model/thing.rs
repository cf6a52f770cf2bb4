//! Full projections of agents and services

use crate::core::Identifier;
use crate::error::Result;
use crate::model::label::Labeled;
use crate::model::resource::Resource;
use crate::model::stub::{BroadcastServiceStub, PersonStub, ThingStub};
use crate::model::vocab::schema;
use crate::model::{Model, ModelKind};
use serde::{Deserialize, Serialize};

/// Properties every full model carries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThingProperties {
    #[serde(rename = "@id")]
    pub identifier: Identifier,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub same_as: Vec<Identifier>,
}

impl ThingProperties {
    pub fn from_resource(resource: &Resource<'_>) -> Result<Self> {
        Ok(Self {
            identifier: resource.identifier().clone(),
            name: resource.string(schema::NAME)?,
            description: resource.string(schema::DESCRIPTION)?,
            order: resource.integer(schema::POSITION)?,
            same_as: resource.identifiers(schema::SAME_AS)?,
        })
    }

    pub fn to_stub(&self) -> ThingStub {
        ThingStub { identifier: self.identifier.clone(), name: self.name.clone(), order: self.order }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(flatten)]
    pub thing: ThingProperties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default)]
    pub member_of: Vec<ThingStub>,
}

impl Person {
    pub fn to_stub(&self) -> PersonStub {
        PersonStub {
            identifier: self.thing.identifier.clone(),
            name: self.thing.name.clone(),
            order: self.thing.order,
            job_title: self.job_title.clone(),
        }
    }
}

impl Model for Person {
    const KIND: ModelKind = ModelKind::Person;

    fn identifier(&self) -> &Identifier {
        &self.thing.identifier
    }

    fn from_resource(resource: &Resource<'_>) -> Result<Self> {
        Ok(Self {
            thing: ThingProperties::from_resource(resource)?,
            given_name: resource.string(schema::GIVEN_NAME)?,
            family_name: resource.string(schema::FAMILY_NAME)?,
            job_title: resource.string(schema::JOB_TITLE)?,
            member_of: resource.related_each(schema::MEMBER_OF, ThingStub::from_resource)?,
        })
    }
}

impl Labeled for Person {
    fn identifier(&self) -> &Identifier {
        &self.thing.identifier
    }

    fn name(&self) -> Option<&str> {
        self.thing.name.as_deref()
    }

    fn job_title(&self) -> Option<&str> {
        self.job_title.as_deref()
    }

    fn order(&self) -> Option<i64> {
        self.thing.order
    }
}

/// An organization, including music groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(flatten)]
    pub thing: ThingProperties,
    #[serde(default)]
    pub members: Vec<PersonStub>,
}

impl Model for Organization {
    const KIND: ModelKind = ModelKind::Organization;

    fn identifier(&self) -> &Identifier {
        &self.thing.identifier
    }

    fn from_resource(resource: &Resource<'_>) -> Result<Self> {
        Ok(Self {
            thing: ThingProperties::from_resource(resource)?,
            members: resource.related_each(schema::MEMBER, PersonStub::from_resource)?,
        })
    }
}

impl Labeled for Organization {
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

/// A (radio) broadcast service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BroadcastService {
    #[serde(flatten)]
    pub thing: ThingProperties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_sign: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broadcast_timezone: Option<String>,
}

impl BroadcastService {
    pub fn to_stub(&self) -> BroadcastServiceStub {
        BroadcastServiceStub {
            identifier: self.thing.identifier.clone(),
            name: self.thing.name.clone(),
            order: self.thing.order,
            call_sign: self.call_sign.clone(),
            broadcast_timezone: self.broadcast_timezone.clone(),
        }
    }
}

impl Model for BroadcastService {
    const KIND: ModelKind = ModelKind::BroadcastService;
    const DEPTH: usize = 0;

    fn identifier(&self) -> &Identifier {
        &self.thing.identifier
    }

    fn from_resource(resource: &Resource<'_>) -> Result<Self> {
        Ok(Self {
            thing: ThingProperties::from_resource(resource)?,
            call_sign: resource.string(schema::CALL_SIGN)?,
            broadcast_timezone: resource.string(schema::BROADCAST_TIMEZONE)?,
        })
    }
}

impl Labeled for BroadcastService {
    fn identifier(&self) -> &Identifier {
        &self.thing.identifier
    }

    fn name(&self) -> Option<&str> {
        self.thing.name.as_deref()
    }

    fn call_sign(&self) -> Option<&str> {
        self.call_sign.as_deref()
    }

    fn order(&self) -> Option<i64> {
        self.thing.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dataset, Literal, Triple};

    #[test]
    fn test_person_json_round_trip() {
        let person = Person {
            thing: ThingProperties {
                identifier: Identifier::Named("http://example.com/jane".to_string()),
                name: Some("Jane Doe".to_string()),
                description: None,
                order: None,
                same_as: vec![Identifier::Named("http://www.wikidata.org/entity/Q1".to_string())],
            },
            given_name: Some("Jane".to_string()),
            family_name: Some("Doe".to_string()),
            job_title: None,
            member_of: vec![],
        };
        let json = serde_json::to_value(&person).unwrap();
        assert_eq!(json["@id"], "http://example.com/jane");
        assert_eq!(json["givenName"], "Jane");
        assert!(json.get("jobTitle").is_none());

        let back: Person = serde_json::from_value(json).unwrap();
        assert_eq!(back, person);
    }

    #[test]
    fn test_service_stub_matches_full() {
        let service = Identifier::Named("http://example.com/wxyz".to_string());
        let dataset = Dataset::from_triples(vec![
            Triple::new(service.clone(), schema::NAME, Literal::new_simple("WXYZ Radio")),
            Triple::new(service.clone(), schema::BROADCAST_TIMEZONE, Literal::new_simple("America/New_York")),
        ])
        .unwrap();
        let resource = Resource::new(&dataset, service);
        let full = BroadcastService::from_resource(&resource).unwrap();
        let stub = BroadcastServiceStub::from_resource(&resource).unwrap();
        assert_eq!(full.to_stub(), stub);
        assert_eq!(stub.broadcast_timezone.as_deref(), Some("America/New_York"));
    }
}
