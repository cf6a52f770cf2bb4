//! HTTP client for external SPARQL endpoints (Apache Jena Fuseki, Oxigraph server, etc.)

use crate::error::{Error, Result};
use crate::querying::results;
use crate::querying::sparql_client::{SelectResults, SparqlClient};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Protocol flavour of a remote store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StoreType {
    /// Form-encoded `query` parameter posted to `{url}/sparql`
    Jena,
    /// `application/sparql-query` body posted to `{url}/query`
    Oxigraph,
}

impl FromStr for StoreType {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "jena" => Ok(StoreType::Jena),
            "oxigraph" => Ok(StoreType::Oxigraph),
            other => Err(Error::Config(format!("Unsupported store type: {}", other))),
        }
    }
}

impl fmt::Display for StoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StoreType::Jena => "jena",
            StoreType::Oxigraph => "oxigraph",
        })
    }
}

/// Configuration for a SPARQL endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SparqlEndpoint {
    pub url: String,
    pub store_type: StoreType,
    pub auth_token: Option<String>,
    pub timeout_secs: u64,
}

impl SparqlEndpoint {
    pub fn new(url: impl Into<String>, store_type: StoreType) -> Self {
        Self { url: url.into(), store_type, auth_token: None, timeout_secs: 30 }
    }

    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn query_url(&self) -> String {
        let base = self.url.trim_end_matches('/');
        match self.store_type {
            StoreType::Jena => format!("{}/sparql", base),
            StoreType::Oxigraph => format!("{}/query", base),
        }
    }
}

/// SPARQL protocol client
pub struct HttpSparqlClient {
    endpoint: SparqlEndpoint,
    client: Client,
}

impl HttpSparqlClient {
    pub fn new(endpoint: SparqlEndpoint) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(endpoint.timeout_secs))
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { endpoint, client })
    }

    pub fn endpoint(&self) -> &SparqlEndpoint {
        &self.endpoint
    }

    /// Check if the endpoint answers a trivial query
    pub async fn ping(&self) -> Result<bool> {
        Ok(self.select("SELECT * WHERE { } LIMIT 1").await.is_ok())
    }

    fn add_auth_header(&self, request: RequestBuilder) -> RequestBuilder {
        if let Some(token) = &self.endpoint.auth_token {
            request.header("Authorization", format!("Bearer {}", token))
        } else {
            request
        }
    }
}

#[async_trait]
impl SparqlClient for HttpSparqlClient {
    async fn select(&self, query: &str) -> Result<SelectResults> {
        let url = self.endpoint.query_url();
        log::debug!("POST {} ({})", url, self.endpoint.store_type);

        let request = self.add_auth_header(self.client.post(&url)).header("Accept", results::MEDIA_TYPE);
        let request = match self.endpoint.store_type {
            StoreType::Jena => request.form(&[("query", query)]),
            StoreType::Oxigraph => {
                request.header("Content-Type", "application/sparql-query").body(query.to_string())
            }
        };
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            // 400 is how the protocol reports a query the endpoint refused to parse
            if status == reqwest::StatusCode::BAD_REQUEST {
                return Err(Error::MalformedQuery(error_body));
            }
            return Err(Error::TransportFailure(format!(
                "Query failed with status {}: {}",
                status, error_body
            )));
        }

        let body = response.text().await?;
        results::parse(&body)
    }
}
