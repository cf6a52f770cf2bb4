//! Earliest and latest broadcasts of a service

use crate::core::Identifier;
use crate::error::{Error, Result};
use crate::model::vocab::schema;
use crate::model::{BroadcastDay, BroadcastEvent, BroadcastServiceStub, EventStub, ModelKind};
use crate::object_set::{ObjectSet, ObjectSetExt};
use crate::query::{GraphPattern, Query, TermPattern, Variable};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstOrLast {
    First,
    Last,
}

/// Broadcast event of `service` with the earliest or latest start date.
///
/// Events sharing that start date are ordered by identifier.
pub async fn first_or_last_broadcast_event_identifier(
    object_set: &dyn ObjectSet,
    service: &Identifier,
    first_or_last: FirstOrLast,
) -> Result<Option<Identifier>> {
    let start_date = Variable::new_unchecked("broadcastEventStartDate");
    let query = Query::pattern(
        GraphPattern::new()
            .triple(Query::subject(), TermPattern::iri(schema::PUBLISHED_ON), service)
            .triple(Query::subject(), TermPattern::iri(schema::START_DATE), &start_date),
    );
    let query = match first_or_last {
        FirstOrLast::First => query.order_ascending(&start_date),
        FirstOrLast::Last => query.order_descending(&start_date),
    }
    .with_limit(1);

    let mut identifiers = object_set.identifiers(ModelKind::BroadcastEvent, &query).await?;
    match identifiers.len() {
        0 => Ok(None),
        1 => Ok(identifiers.pop()),
        n => Err(Error::InvariantViolation(format!(
            "{:?} broadcast event query with limit 1 returned {} identifiers",
            first_or_last, n
        ))),
    }
}

/// Local day of the service's first or last broadcast
pub async fn first_or_last_broadcast_day(
    object_set: &dyn ObjectSet,
    service: &BroadcastServiceStub,
    first_or_last: FirstOrLast,
) -> Result<Option<BroadcastDay>> {
    let Some(identifier) =
        first_or_last_broadcast_event_identifier(object_set, &service.identifier, first_or_last).await?
    else {
        return Ok(None);
    };

    let Some(event) = object_set.fetch_stub::<EventStub>(&identifier).await? else {
        return Ok(None);
    };
    event
        .start_date
        .map(|start_date| BroadcastDay::from_instant(start_date, service.broadcast_timezone.as_deref()))
        .transpose()
}

pub async fn first_broadcast_day(
    object_set: &dyn ObjectSet,
    service: &BroadcastServiceStub,
) -> Result<Option<BroadcastDay>> {
    first_or_last_broadcast_day(object_set, service, FirstOrLast::First).await
}

pub async fn last_broadcast_day(
    object_set: &dyn ObjectSet,
    service: &BroadcastServiceStub,
) -> Result<Option<BroadcastDay>> {
    first_or_last_broadcast_day(object_set, service, FirstOrLast::Last).await
}

pub async fn first_or_last_broadcast_event(
    object_set: &dyn ObjectSet,
    service: &Identifier,
    first_or_last: FirstOrLast,
) -> Result<Option<BroadcastEvent>> {
    match first_or_last_broadcast_event_identifier(object_set, service, first_or_last).await? {
        Some(identifier) => object_set.fetch::<BroadcastEvent>(&identifier).await,
        None => Ok(None),
    }
}

pub async fn first_broadcast_event(object_set: &dyn ObjectSet, service: &Identifier) -> Result<Option<BroadcastEvent>> {
    first_or_last_broadcast_event(object_set, service, FirstOrLast::First).await
}

pub async fn last_broadcast_event(object_set: &dyn ObjectSet, service: &Identifier) -> Result<Option<BroadcastEvent>> {
    first_or_last_broadcast_event(object_set, service, FirstOrLast::Last).await
}
