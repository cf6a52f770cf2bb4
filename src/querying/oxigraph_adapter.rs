//! Embedded SPARQL engine backed by an Oxigraph [`Store`].
//!
//! # Example
//!
//! ```ignore
//! use sdgraph::core::{Dataset, Identifier, Term, Triple};
//! use sdgraph::querying::{OxigraphClient, SparqlClient};
//!
//! let mut dataset = Dataset::new();
//! dataset.insert(Triple::new(
//!     Identifier::named("http://example.org/alice")?,
//!     "http://example.org/knows",
//!     Term::named("http://example.org/bob"),
//! ))?;
//!
//! let client = OxigraphClient::from_dataset(&dataset)?;
//! let results = client.select("SELECT ?o WHERE { ?s ?p ?o }").await?;
//! assert_eq!(results.solutions.len(), 1);
//! ```

use crate::core::{Dataset, Term};
use crate::error::{Error, Result};
use crate::querying::sparql_client::{SelectResults, Solution, SparqlClient};
use async_trait::async_trait;
use oxigraph::sparql::{QueryResults, SparqlEvaluator};
use oxigraph::store::Store;

#[derive(Clone)]
pub struct OxigraphClient {
    store: Store,
}

impl OxigraphClient {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Copy every triple of `dataset` into a fresh in-memory store
    pub fn from_dataset(dataset: &Dataset) -> Result<Self> {
        let store = Store::new()?;
        for triple in dataset.iter() {
            if let Some(triple) = triple.to_triple() {
                store.insert(&triple.to_oxigraph_quad()?)?;
            }
        }
        log::debug!("Loaded {} triples into embedded store", dataset.len());
        Ok(Self { store })
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Evaluate a `SELECT` query on the calling thread
    pub fn select_blocking(&self, query: &str) -> Result<SelectResults> {
        let parsed = SparqlEvaluator::new()
            .parse_query(query)
            .map_err(|e| Error::MalformedQuery(e.to_string()))?;
        let results = parsed.on_store(&self.store).execute()?;

        let QueryResults::Solutions(solutions) = results else {
            return Err(Error::MalformedQuery("only SELECT queries are supported".to_string()));
        };

        let variables = solutions.variables().iter().map(|v| v.as_str().to_string()).collect();
        let mut rows = Vec::new();
        for solution in solutions {
            let solution = solution?;
            let mut row = Solution::new();
            for (variable, term) in solution.iter() {
                if let Some(term) = Term::from_oxigraph(term) {
                    row.insert(variable.as_str().to_string(), term);
                }
            }
            rows.push(row);
        }
        Ok(SelectResults { variables, solutions: rows })
    }
}

#[async_trait]
impl SparqlClient for OxigraphClient {
    async fn select(&self, query: &str) -> Result<SelectResults> {
        let client = self.clone();
        let query = query.to_string();
        tokio::task::spawn_blocking(move || client.select_blocking(&query))
            .await
            .map_err(|e| Error::TransportFailure(format!("query task failed: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Identifier, Literal, Triple};

    fn client() -> OxigraphClient {
        let alice = Identifier::Named("http://example.org/alice".to_string());
        let mut dataset = Dataset::new();
        dataset.insert(Triple::new(alice.clone(), "http://example.org/knows", Term::named("http://example.org/bob"))).unwrap();
        dataset.insert(Triple::new(alice, "http://schema.org/name", Literal::new_language_tagged("Alice", "en"))).unwrap();
        OxigraphClient::from_dataset(&dataset).unwrap()
    }

    #[tokio::test]
    async fn test_select_bindings() {
        let results = client()
            .select("SELECT ?s ?o WHERE { ?s <http://example.org/knows> ?o }")
            .await
            .unwrap();
        assert_eq!(results.variables, vec!["s", "o"]);
        assert_eq!(results.solutions.len(), 1);
        assert_eq!(results.solutions[0]["o"], Term::named("http://example.org/bob"));
    }

    #[tokio::test]
    async fn test_literals_keep_language() {
        let results = client().select("SELECT ?name WHERE { ?s <http://schema.org/name> ?name }").await.unwrap();
        let name = results.solutions[0]["name"].as_literal().unwrap();
        assert_eq!(name.value(), "Alice");
        assert_eq!(name.language(), Some("en"));
    }

    #[tokio::test]
    async fn test_invalid_query_is_malformed() {
        let err = client().select("SELECT WHERE {").await.unwrap_err();
        assert!(matches!(err, Error::MalformedQuery(_)));
    }

    #[test]
    fn test_ask_is_rejected() {
        let err = client().select_blocking("ASK { ?s ?p ?o }").unwrap_err();
        assert!(matches!(err, Error::MalformedQuery(_)));
    }
}
