//! The seam between SPARQL object sets and the engines that answer them.

use crate::core::Term;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// One row of a `SELECT` result: variable name (without `?`) to bound term.
/// Unbound variables are absent.
pub type Solution = HashMap<String, Term>;

/// Result of a `SELECT` query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectResults {
    pub variables: Vec<String>,
    pub solutions: Vec<Solution>,
}

impl SelectResults {
    /// Bindings of `variable` in solution order, skipping rows where it is unbound
    pub fn column<'a>(&'a self, variable: &'a str) -> impl Iterator<Item = &'a Term> + 'a {
        self.solutions.iter().filter_map(move |solution| solution.get(variable))
    }
}

/// A SPARQL 1.1 query engine, local or remote.
///
/// Only `SELECT` queries are issued through this trait. Engines report
/// unreachable endpoints and unparseable responses as
/// [`Error::TransportFailure`](crate::Error::TransportFailure) and rejected
/// query strings as [`Error::MalformedQuery`](crate::Error::MalformedQuery).
#[async_trait]
pub trait SparqlClient: Send + Sync {
    async fn select(&self, query: &str) -> Result<SelectResults>;
}
