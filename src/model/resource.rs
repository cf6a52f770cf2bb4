//! Read-only view of one node's triples, with typed property accessors.
//!
//! Accessors return `Ok(None)` / an empty vector when a property is absent and
//! `Error::TypeMismatch` when a value has the wrong shape. Multi-valued
//! properties are returned in canonical term order so both backends
//! materialize identical models.

use crate::core::{Dataset, Identifier, Term};
use crate::error::{Error, Result};
use crate::model::vocab::{rdf, xsd};
use crate::model::ModelKind;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

#[derive(Debug, Clone)]
pub struct Resource<'a> {
    dataset: &'a Dataset,
    identifier: Identifier,
}

impl<'a> Resource<'a> {
    pub fn new(dataset: &'a Dataset, identifier: Identifier) -> Self {
        Self { dataset, identifier }
    }

    pub fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    /// View of another node in the same dataset
    pub fn related(&self, identifier: Identifier) -> Resource<'a> {
        Resource::new(self.dataset, identifier)
    }

    /// Whether the node is typed as `kind` or one of its subclasses
    pub fn has_type(&self, kind: ModelKind) -> bool {
        self.values(rdf::TYPE).into_iter().any(|value| match value {
            Term::NamedNode(iri) => kind.rdf_types().contains(&iri.as_str()),
            _ => false,
        })
    }

    pub fn values(&self, predicate: &str) -> Vec<&'a Term> {
        let mut values = self.dataset.objects(&self.identifier, predicate);
        values.sort_by_cached_key(|term| term.to_string());
        values
    }

    pub fn string(&self, predicate: &str) -> Result<Option<String>> {
        match self.values(predicate).first() {
            None => Ok(None),
            Some(Term::Literal(literal)) => Ok(Some(literal.value().to_string())),
            Some(other) => Err(self.mismatch(predicate, format!("expected a literal, found {}", other))),
        }
    }

    pub fn integer(&self, predicate: &str) -> Result<Option<i64>> {
        match self.values(predicate).first() {
            None => Ok(None),
            Some(Term::Literal(literal)) => literal
                .value()
                .trim()
                .parse::<i64>()
                .map(Some)
                .map_err(|_| self.mismatch(predicate, format!("{} is not an integer", literal))),
            Some(other) => Err(self.mismatch(predicate, format!("expected an integer, found {}", other))),
        }
    }

    pub fn date_time(&self, predicate: &str) -> Result<Option<DateTime<Utc>>> {
        match self.values(predicate).first() {
            None => Ok(None),
            Some(Term::Literal(literal)) => parse_date_time(literal.value(), literal.datatype())
                .map(Some)
                .ok_or_else(|| self.mismatch(predicate, format!("{} is not a date", literal))),
            Some(other) => Err(self.mismatch(predicate, format!("expected a date, found {}", other))),
        }
    }

    pub fn identifier_value(&self, predicate: &str) -> Result<Option<Identifier>> {
        Ok(self.identifiers(predicate)?.into_iter().next())
    }

    pub fn identifiers(&self, predicate: &str) -> Result<Vec<Identifier>> {
        self.values(predicate)
            .into_iter()
            .map(|term| {
                term.as_identifier()
                    .ok_or_else(|| self.mismatch(predicate, format!("expected a node, found {}", term)))
            })
            .collect()
    }

    /// Map every related node of `predicate` through `materialize`
    pub fn related_each<T>(
        &self,
        predicate: &str,
        materialize: impl Fn(&Resource<'a>) -> Result<T>,
    ) -> Result<Vec<T>> {
        self.identifiers(predicate)?
            .into_iter()
            .map(|identifier| materialize(&self.related(identifier)))
            .collect()
    }

    pub fn related_one<T>(
        &self,
        predicate: &str,
        materialize: impl Fn(&Resource<'a>) -> Result<T>,
    ) -> Result<Option<T>> {
        self.identifier_value(predicate)?
            .map(|identifier| materialize(&self.related(identifier)))
            .transpose()
    }

    pub fn required<T>(&self, predicate: &str, value: Option<T>) -> Result<T> {
        value.ok_or_else(|| self.mismatch(predicate, "required property is missing"))
    }

    fn mismatch(&self, predicate: &str, message: impl std::fmt::Display) -> Error {
        Error::type_mismatch(&self.identifier, format!("<{}>: {}", predicate, message))
    }
}

/// Parse an `xsd:dateTime` or `xsd:date` lexical form as a UTC instant.
///
/// Date-times without an offset are read as UTC; dates map to midnight UTC.
pub fn parse_date_time(value: &str, datatype: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if datatype == xsd::DATE {
        let date = value.get(..10).and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())?;
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    if datatype != xsd::DATE_TIME && datatype != xsd::STRING {
        return None;
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Some(instant.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
