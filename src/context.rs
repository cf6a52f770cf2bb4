//! The loaded graph and the object set built from it, constructed once per process.

use crate::config::{Backend, Settings};
use crate::core::Dataset;
use crate::error::{Error, Result};
use crate::object_set::{DatasetObjectSet, ObjectSet, SparqlObjectSet};
use crate::parsing::rdf_loader;
use crate::querying::{HttpSparqlClient, OxigraphClient, SparqlClient};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    object_set: Arc<dyn ObjectSet>,
    /// Engine behind the object set, when it is SPARQL based
    sparql: Option<Arc<dyn SparqlClient>>,
}

impl AppContext {
    pub fn new(object_set: Arc<dyn ObjectSet>, sparql: Option<Arc<dyn SparqlClient>>) -> Self {
        Self { object_set, sparql }
    }

    pub fn from_settings(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        log::info!("Starting with the {:?} backend", settings.backend);

        match settings.backend {
            Backend::Remote => {
                if !settings.data_paths.is_empty() {
                    log::warn!("Data paths are ignored by the remote backend");
                }
                let endpoint = settings
                    .endpoint()
                    .ok_or_else(|| Error::Config("missing SPARQL endpoint".to_string()))?;
                log::info!("Querying {}", endpoint.query_url());
                let client: Arc<dyn SparqlClient> = Arc::new(HttpSparqlClient::new(endpoint)?);
                Ok(Self::new(Arc::new(SparqlObjectSet::new(Arc::clone(&client))), Some(client)))
            }
            backend => Self::with_dataset(rdf_loader::load_paths(&settings.data_paths)?, backend),
        }
    }

    /// Context over an already loaded dataset
    pub fn with_dataset(dataset: Dataset, backend: Backend) -> Result<Self> {
        match backend {
            Backend::Memory => Ok(Self::new(Arc::new(DatasetObjectSet::from(dataset)), None)),
            Backend::Embedded => {
                let client: Arc<dyn SparqlClient> = Arc::new(OxigraphClient::from_dataset(&dataset)?);
                Ok(Self::new(Arc::new(SparqlObjectSet::new(Arc::clone(&client))), Some(client)))
            }
            Backend::Remote => Err(Error::Config("the remote backend cannot be built from a dataset".to_string())),
        }
    }

    pub fn object_set(&self) -> &dyn ObjectSet {
        self.object_set.as_ref()
    }

    /// Owned handle on the object set, for tasks that outlive the context borrow
    pub fn shared_object_set(&self) -> Arc<dyn ObjectSet> {
        Arc::clone(&self.object_set)
    }

    pub fn sparql(&self) -> Option<&Arc<dyn SparqlClient>> {
        self.sparql.as_ref()
    }
}
