//! Core RDF data structures: identifiers, terms, triples and the in-memory triple collection

pub mod dataset;
pub mod dictionary;
pub mod identifier;
pub mod term;

pub use dataset::{Dataset, TripleRef};
pub use dictionary::Dictionary;
pub use identifier::Identifier;
pub use term::{Literal, Term, Triple};
