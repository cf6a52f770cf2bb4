//! Node identifiers.
//!
//! An identifier is either a named node (an IRI) or an anonymous node (a blank
//! node label). The canonical string form is the IRI itself for named nodes and
//! `_:label` for anonymous nodes, so the two kinds can never collide.
//!
//! Anonymous identifiers are only meaningful within the snapshot that produced
//! them.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

const ANONYMOUS_PREFIX: &str = "_:";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Identifier {
    Named(String),
    Anonymous(String),
}

impl Identifier {
    /// Create a named identifier, validating the IRI
    pub fn named(iri: impl Into<String>) -> Result<Self> {
        let iri = iri.into();
        oxigraph::model::NamedNode::new(iri.as_str())
            .map_err(|e| Error::InvalidIdentifier(format!("{}: {}", iri, e)))?;
        Ok(Identifier::Named(iri))
    }

    /// Create an anonymous identifier from a blank node label (without `_:`)
    pub fn anonymous(label: impl Into<String>) -> Result<Self> {
        let label = label.into();
        oxigraph::model::BlankNode::new(label.as_str())
            .map_err(|e| Error::InvalidIdentifier(format!("_:{}: {}", label, e)))?;
        Ok(Identifier::Anonymous(label))
    }

    /// Parse a canonical string: `_:label`, `<iri>` or a bare IRI
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        if value.is_empty() {
            return Err(Error::InvalidIdentifier("empty identifier".to_string()));
        }
        if let Some(label) = value.strip_prefix(ANONYMOUS_PREFIX) {
            return Self::anonymous(label);
        }
        if let Some(iri) = value.strip_prefix('<').and_then(|v| v.strip_suffix('>')) {
            return Self::named(iri);
        }
        Self::named(value)
    }

    pub fn to_canonical_string(&self) -> String {
        match self {
            Identifier::Named(iri) => iri.clone(),
            Identifier::Anonymous(label) => format!("{}{}", ANONYMOUS_PREFIX, label),
        }
    }

    /// IRI or blank node label, without any prefix
    pub fn as_str(&self) -> &str {
        match self {
            Identifier::Named(value) | Identifier::Anonymous(value) => value,
        }
    }

    pub fn is_named(&self) -> bool {
        matches!(self, Identifier::Named(_))
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Named(iri) => write!(f, "{}", iri),
            Identifier::Anonymous(label) => write!(f, "{}{}", ANONYMOUS_PREFIX, label),
        }
    }
}

impl std::str::FromStr for Identifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Identifier::parse(s)
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_canonical_string())
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Identifier::parse(&value).map_err(serde::de::Error::custom)
    }
}
