//! # sdgraph
//!
//! sdgraph is a read-only object layer over RDF graphs described with the
//! schema.org vocabulary, aimed at radio broadcast data: services, broadcast
//! events, episodes, recordings, compositions and the people behind them.
//!
//! The same typed queries run against two interchangeable backends:
//!
//! - an in-memory [`Dataset`](core::Dataset) evaluated directly, and
//! - any SPARQL 1.1 engine, embedded (Oxigraph) or remote over HTTP.
//!
//! ## Example
//!
//! ```rust
//! use sdgraph::core::Dataset;
//! use sdgraph::object_set::{DatasetObjectSet, ObjectSet};
//! use sdgraph::model::ModelKind;
//! use sdgraph::query::Query;
//!
//! # async fn example() -> sdgraph::Result<()> {
//! let object_set = DatasetObjectSet::from(Dataset::new());
//! assert_eq!(object_set.count(ModelKind::Person, &Query::new()).await?, 0);
//! # Ok(())
//! # }
//! ```

#![warn(clippy::pedantic)]
#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::new_without_default)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::too_many_lines)]

/// Process configuration
pub mod config;

/// Backend selection and shared handles
pub mod context;

/// Identifiers, terms and the in-memory triple store
pub mod core;

/// Error types
pub mod error;

/// HTTP API
pub mod http;

/// Typed schema.org models
pub mod model;

/// The object set abstraction and its backends
pub mod object_set;

/// RDF file loading
pub mod parsing;

/// Broadcast domain queries
pub mod queries;

/// Backend-neutral query descriptors
pub mod query;

/// SPARQL clients
pub mod querying;

pub use error::{Error, Result};
