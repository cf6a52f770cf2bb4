//! Object set answered by a SPARQL engine.
//!
//! Every call compiles the descriptor with [`compiler`] and issues exactly
//! one `SELECT` through the configured [`SparqlClient`].

use crate::core::{Dataset, Identifier, Term, Triple};
use crate::error::{Error, Result};
use crate::model::ModelKind;
use crate::object_set::ObjectSet;
use crate::query::{compiler, Query, SUBJECT_VARIABLE};
use crate::querying::SparqlClient;
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Clone)]
pub struct SparqlObjectSet {
    client: Arc<dyn SparqlClient>,
}

impl SparqlObjectSet {
    pub fn new(client: Arc<dyn SparqlClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ObjectSet for SparqlObjectSet {
    async fn count(&self, kind: ModelKind, query: &Query) -> Result<usize> {
        let sparql = compiler::count(kind, query)?;
        log::debug!("Count query:\n{}", sparql);
        let results = self.client.select(&sparql).await?;

        let value = results
            .column(compiler::COUNT_VARIABLE)
            .next()
            .and_then(Term::as_literal)
            .ok_or_else(|| Error::TransportFailure("count query returned no count".to_string()))?;
        value
            .value()
            .parse::<usize>()
            .map_err(|_| Error::TransportFailure(format!("count is not an integer: {}", value)))
    }

    async fn identifiers(&self, kind: ModelKind, query: &Query) -> Result<Vec<Identifier>> {
        let sparql = compiler::select_identifiers(kind, query)?;
        log::debug!("Identifier query:\n{}", sparql);
        let results = self.client.select(&sparql).await?;

        Ok(results.column(SUBJECT_VARIABLE).filter_map(Term::as_identifier).collect())
    }

    async fn describe(&self, identifier: &Identifier, depth: usize) -> Result<Dataset> {
        let sparql = compiler::describe(identifier, depth)?;
        log::debug!("Describe query:\n{}", sparql);
        let results = self.client.select(&sparql).await?;

        let mut dataset = Dataset::new();
        for solution in &results.solutions {
            let (Some(subject), Some(Term::NamedNode(predicate)), Some(object)) =
                (solution.get("s").and_then(Term::as_identifier), solution.get("p"), solution.get("o"))
            else {
                return Err(Error::TransportFailure(format!("incomplete triple in describe result: {:?}", solution)));
            };
            dataset.insert(Triple::new(subject, predicate.as_str(), object.clone()))?;
        }
        Ok(dataset)
    }
}
