//! RDF terms, literals and triples

use crate::core::identifier::Identifier;
use crate::error::{Error, Result};
use crate::model::vocab::{rdf, xsd};
use chrono::{DateTime, SecondsFormat, Utc};
use oxigraph::model::{LiteralRef, NamedNodeRef};
use std::fmt;

/// Literal value with datatype IRI and optional language tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    value: String,
    datatype: String,
    language: Option<String>,
}

impl Literal {
    /// `xsd:string` literal
    pub fn new_simple(value: impl Into<String>) -> Self {
        Self::new_typed(value, xsd::STRING)
    }

    pub fn new_typed(value: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self { value: value.into(), datatype: datatype.into(), language: None }
    }

    pub fn new_language_tagged(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            datatype: rdf::LANG_STRING.to_string(),
            language: Some(language.into().to_ascii_lowercase()),
        }
    }

    pub fn integer(value: i64) -> Self {
        Self::new_typed(value.to_string(), xsd::INTEGER)
    }

    pub fn boolean(value: bool) -> Self {
        Self::new_typed(value.to_string(), xsd::BOOLEAN)
    }

    /// `xsd:dateTime` literal in canonical UTC form, e.g. `2025-08-08T10:00:00Z`
    pub fn date_time(value: DateTime<Utc>) -> Self {
        Self::new_typed(value.to_rfc3339_opts(SecondsFormat::AutoSi, true), xsd::DATE_TIME)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn datatype(&self) -> &str {
        &self.datatype
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub(crate) fn to_oxigraph(&self) -> Result<oxigraph::model::Literal> {
        let literal = match &self.language {
            Some(language) => {
                oxigraph::model::Literal::new_language_tagged_literal(self.value.as_str(), language.as_str())
                    .map_err(|e| Error::InvalidIdentifier(format!("language tag {}: {}", language, e)))?
            }
            None => {
                let datatype = oxigraph::model::NamedNode::new(self.datatype.as_str())
                    .map_err(|e| Error::InvalidIdentifier(format!("{}: {}", self.datatype, e)))?;
                oxigraph::model::Literal::new_typed_literal(self.value.as_str(), datatype)
            }
        };
        Ok(literal)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let literal = match &self.language {
            Some(language) => LiteralRef::new_language_tagged_literal_unchecked(&self.value, language),
            None => LiteralRef::new_typed_literal(&self.value, NamedNodeRef::new_unchecked(&self.datatype)),
        };
        write!(f, "{}", literal)
    }
}

/// An RDF term: named node, blank node or literal
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    NamedNode(String),
    BlankNode(String),
    Literal(Literal),
}

impl Term {
    pub fn named(iri: impl Into<String>) -> Self {
        Term::NamedNode(iri.into())
    }

    /// The identifier this term denotes, if it is not a literal
    pub fn as_identifier(&self) -> Option<Identifier> {
        match self {
            Term::NamedNode(iri) => Some(Identifier::Named(iri.clone())),
            Term::BlankNode(label) => Some(Identifier::Anonymous(label.clone())),
            Term::Literal(_) => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    pub(crate) fn to_oxigraph(&self) -> Result<oxigraph::model::Term> {
        Ok(match self {
            Term::NamedNode(iri) => oxigraph::model::NamedNode::new(iri.as_str())
                .map_err(|e| Error::InvalidIdentifier(format!("{}: {}", iri, e)))?
                .into(),
            Term::BlankNode(label) => oxigraph::model::BlankNode::new(label.as_str())
                .map_err(|e| Error::InvalidIdentifier(format!("_:{}: {}", label, e)))?
                .into(),
            Term::Literal(literal) => literal.to_oxigraph()?.into(),
        })
    }

    /// Convert an oxigraph term; embedded triples are not representable and yield `None`
    pub(crate) fn from_oxigraph(term: &oxigraph::model::Term) -> Option<Self> {
        #[allow(unreachable_patterns)]
        match term {
            oxigraph::model::Term::NamedNode(node) => Some(Term::NamedNode(node.as_str().to_string())),
            oxigraph::model::Term::BlankNode(node) => Some(Term::BlankNode(node.as_str().to_string())),
            oxigraph::model::Term::Literal(literal) => Some(Term::Literal(Literal {
                value: literal.value().to_string(),
                datatype: literal.datatype().as_str().to_string(),
                language: literal.language().map(str::to_string),
            })),
            _ => None,
        }
    }
}

impl From<Identifier> for Term {
    fn from(identifier: Identifier) -> Self {
        match identifier {
            Identifier::Named(iri) => Term::NamedNode(iri),
            Identifier::Anonymous(label) => Term::BlankNode(label),
        }
    }
}

impl From<&Identifier> for Term {
    fn from(identifier: &Identifier) -> Self {
        identifier.clone().into()
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Term::Literal(literal)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::NamedNode(iri) => write!(f, "<{}>", iri),
            Term::BlankNode(label) => write!(f, "_:{}", label),
            Term::Literal(literal) => write!(f, "{}", literal),
        }
    }
}

/// A single statement of the graph
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    pub subject: Identifier,
    pub predicate: String,
    pub object: Term,
}

impl Triple {
    pub fn new(subject: Identifier, predicate: impl Into<String>, object: impl Into<Term>) -> Self {
        Self { subject, predicate: predicate.into(), object: object.into() }
    }

    /// Build the oxigraph quad in the default graph
    pub(crate) fn to_oxigraph_quad(&self) -> Result<oxigraph::model::Quad> {
        use oxigraph::model::{BlankNode, GraphName, NamedNode, Quad};

        let predicate = NamedNode::new(self.predicate.as_str())
            .map_err(|e| Error::InvalidIdentifier(format!("{}: {}", self.predicate, e)))?;
        let object = self.object.to_oxigraph()?;
        let quad = match &self.subject {
            Identifier::Named(iri) => {
                let subject = NamedNode::new(iri.as_str())
                    .map_err(|e| Error::InvalidIdentifier(format!("{}: {}", iri, e)))?;
                Quad::new(subject, predicate, object, GraphName::DefaultGraph)
            }
            Identifier::Anonymous(label) => {
                let subject = BlankNode::new(label.as_str())
                    .map_err(|e| Error::InvalidIdentifier(format!("_:{}: {}", label, e)))?;
                Quad::new(subject, predicate, object, GraphName::DefaultGraph)
            }
        };
        Ok(quad)
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> {} .", Term::from(&self.subject), self.predicate, self.object)
    }
}
