//! SPARQL engines: the embedded Oxigraph store and remote endpoints.

pub mod http_client;
pub mod oxigraph_adapter;
pub mod results;
pub mod sparql_client;

pub use http_client::{HttpSparqlClient, SparqlEndpoint, StoreType};
pub use oxigraph_adapter::OxigraphClient;
pub use sparql_client::{SelectResults, Solution, SparqlClient};
