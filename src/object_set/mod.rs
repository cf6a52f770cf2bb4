//! Uniform read access to the typed entities of a graph.
//!
//! An [`ObjectSet`] answers three primitive questions about a snapshot:
//! how many identifiers of a kind match a [`Query`], which ones (ordered and
//! paginated), and which triples surround a node. Everything else, model
//! materialization included, is built on those three calls in
//! [`ObjectSetExt`], so the in-memory and SPARQL backends only differ in how
//! they evaluate a descriptor.

pub mod dataset;
pub mod sparql;

pub use dataset::DatasetObjectSet;
pub use sparql::SparqlObjectSet;

use crate::core::{Dataset, Identifier};
use crate::error::Result;
use crate::model::{Model, ModelKind, Resource};
use crate::query::Query;
use async_trait::async_trait;
use futures_util::future::try_join_all;

#[async_trait]
pub trait ObjectSet: Send + Sync {
    /// Number of distinct identifiers of `kind` matching `query`, ignoring `limit` and `offset`
    async fn count(&self, kind: ModelKind, query: &Query) -> Result<usize>;

    /// Identifiers of `kind` matching `query`, ordered and paginated
    async fn identifiers(&self, kind: ModelKind, query: &Query) -> Result<Vec<Identifier>>;

    /// Triples reachable from `identifier` within `depth` hops
    async fn describe(&self, identifier: &Identifier, depth: usize) -> Result<Dataset>;
}

/// Materialization helpers available on every object set
#[async_trait]
pub trait ObjectSetExt: ObjectSet {
    /// Full model of `identifier`, or `None` when it is not typed as `M::KIND`
    async fn fetch<M: Model>(&self, identifier: &Identifier) -> Result<Option<M>> {
        let dataset = self.describe(identifier, M::DEPTH).await?;
        let resource = Resource::new(&dataset, identifier.clone());
        if !resource.has_type(M::KIND) {
            return Ok(None);
        }
        M::from_resource(&resource).map(Some)
    }

    /// Stub projection of `identifier`
    async fn fetch_stub<S: Model>(&self, identifier: &Identifier) -> Result<Option<S>> {
        self.fetch::<S>(identifier).await
    }

    /// Models of every identifier matching `query`, in query order
    async fn fetch_all<M: Model>(&self, query: &Query) -> Result<Vec<M>> {
        let identifiers = self.identifiers(M::KIND, query).await?;
        let models = try_join_all(identifiers.iter().map(|identifier| self.fetch::<M>(identifier))).await?;
        Ok(models.into_iter().flatten().collect())
    }
}

impl<T: ObjectSet + ?Sized> ObjectSetExt for T {}
