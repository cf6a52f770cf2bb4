//! Process configuration from command-line flags and `SDGRAPH_*` environment variables

use crate::error::{Error, Result};
use crate::querying::{SparqlEndpoint, StoreType};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where object set queries are evaluated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Pattern matching over the loaded dataset
    #[default]
    Memory,
    /// SPARQL over an in-process Oxigraph store holding the loaded dataset
    Embedded,
    /// SPARQL over HTTP against `sparql_endpoint`
    Remote,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, clap::Args)]
pub struct Settings {
    /// RDF files or directories to load (comma separated in the environment)
    #[arg(long = "data", env = "SDGRAPH_DATA_PATHS", value_delimiter = ',')]
    pub data_paths: Vec<PathBuf>,

    #[arg(long, env = "SDGRAPH_BACKEND", value_enum, default_value_t = Backend::Memory)]
    pub backend: Backend,

    /// Base URL of the SPARQL service for the remote backend
    #[arg(long, env = "SDGRAPH_SPARQL_ENDPOINT")]
    pub sparql_endpoint: Option<String>,

    #[arg(long, env = "SDGRAPH_SPARQL_STORE_TYPE", value_enum, default_value_t = StoreType::Oxigraph)]
    pub sparql_store_type: StoreType,

    #[arg(long, env = "SDGRAPH_SPARQL_TIMEOUT_SECS", default_value_t = 30)]
    pub sparql_timeout_secs: u64,

    #[arg(long, env = "SDGRAPH_SPARQL_AUTH_TOKEN", hide_env_values = true)]
    #[serde(skip_serializing)]
    pub sparql_auth_token: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_paths: Vec::new(),
            backend: Backend::Memory,
            sparql_endpoint: None,
            sparql_store_type: StoreType::Oxigraph,
            sparql_timeout_secs: 30,
            sparql_auth_token: None,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        if self.backend == Backend::Remote && self.sparql_endpoint.is_none() {
            return Err(Error::Config("the remote backend requires a SPARQL endpoint URL".to_string()));
        }
        if self.sparql_timeout_secs == 0 {
            return Err(Error::Config("SPARQL timeout must be at least one second".to_string()));
        }
        Ok(())
    }

    /// Endpoint configuration of the remote backend
    pub fn endpoint(&self) -> Option<SparqlEndpoint> {
        let url = self.sparql_endpoint.as_ref()?;
        let mut endpoint =
            SparqlEndpoint::new(url.as_str(), self.sparql_store_type).with_timeout_secs(self.sparql_timeout_secs);
        endpoint.auth_token = self.sparql_auth_token.clone();
        Some(endpoint)
    }
}
