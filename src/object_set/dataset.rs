//! Object set over an in-memory [`Dataset`].

use crate::core::{Dataset, Identifier};
use crate::error::Result;
use crate::model::ModelKind;
use crate::object_set::ObjectSet;
use crate::query::{evaluator, Query};
use async_trait::async_trait;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct DatasetObjectSet {
    dataset: Arc<Dataset>,
}

impl DatasetObjectSet {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }
}

impl From<Dataset> for DatasetObjectSet {
    fn from(dataset: Dataset) -> Self {
        Self::new(Arc::new(dataset))
    }
}

#[async_trait]
impl ObjectSet for DatasetObjectSet {
    async fn count(&self, kind: ModelKind, query: &Query) -> Result<usize> {
        evaluator::count(&self.dataset, kind, query)
    }

    async fn identifiers(&self, kind: ModelKind, query: &Query) -> Result<Vec<Identifier>> {
        let identifiers = evaluator::identifiers(&self.dataset, kind, query)?;
        log::debug!("{:?} query matched {} identifiers", kind, identifiers.len());
        Ok(identifiers)
    }

    async fn describe(&self, identifier: &Identifier, depth: usize) -> Result<Dataset> {
        self.dataset.describe(identifier, depth)
    }
}
