use crate::error::Result;
use crate::model::BroadcastServiceStub;
use crate::object_set::{ObjectSet, ObjectSetExt};
use crate::query::Query;

/// Every broadcast service, ordered by name and then identifier
pub async fn broadcast_services(object_set: &dyn ObjectSet) -> Result<Vec<BroadcastServiceStub>> {
    let mut services: Vec<BroadcastServiceStub> = object_set.fetch_all(&Query::new()).await?;
    services.sort_by(|left, right| {
        left.name.cmp(&right.name).then_with(|| left.identifier.cmp(&right.identifier))
    });
    Ok(services)
}
