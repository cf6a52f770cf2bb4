//! The same queries against every backend over the radio graph

mod common;

use chrono::{TimeZone, Utc};
use common::{all_backends, backends_over, ex};
use sdgraph::core::{Dataset, Identifier, Literal, Term, Triple};
use sdgraph::model::vocab::{rdf, schema, sdapps};
use sdgraph::model::{
    ArtistStub, BroadcastEvent, BroadcastServiceStub, ModelKind, MusicRecording, Person, PersonStub,
};
use sdgraph::object_set::ObjectSetExt;
use sdgraph::query::{Expression, GraphPattern, Query, TermPattern, Variable};
use sdgraph::Error;

fn published_on_wqxr(start_date: &Variable) -> GraphPattern {
    GraphPattern::new()
        .triple(Query::subject(), TermPattern::iri(schema::PUBLISHED_ON), ex("wqxr"))
        .triple(Query::subject(), TermPattern::iri(schema::START_DATE), start_date)
}

#[tokio::test]
async fn test_count_by_kind() {
    for (name, object_set) in all_backends().await {
        assert_eq!(object_set.count(ModelKind::Person, &Query::new()).await.unwrap(), 4, "{}", name);
        assert_eq!(object_set.count(ModelKind::BroadcastEvent, &Query::new()).await.unwrap(), 6, "{}", name);
        // Subclasses count as instances of the kind
        assert_eq!(object_set.count(ModelKind::Event, &Query::new()).await.unwrap(), 6, "{}", name);
        assert_eq!(object_set.count(ModelKind::BroadcastService, &Query::new()).await.unwrap(), 2, "{}", name);
        assert_eq!(object_set.count(ModelKind::MusicAlbum, &Query::new()).await.unwrap(), 0, "{}", name);
    }
}

#[tokio::test]
async fn test_identifiers_default_to_identifier_order() {
    for (name, object_set) in all_backends().await {
        let identifiers = object_set.identifiers(ModelKind::Person, &Query::new()).await.unwrap();
        assert_eq!(
            identifiers,
            vec![ex("alsop"), ex("beethoven"), ex("debussy"), ex("pianist")],
            "{}",
            name
        );
    }
}

#[tokio::test]
async fn test_ordered_pagination() {
    let start_date = Variable::new("startDate").unwrap();
    let query = Query::pattern(published_on_wqxr(&start_date)).order_descending(&start_date);

    for (name, object_set) in all_backends().await {
        let all = object_set.identifiers(ModelKind::BroadcastEvent, &query).await.unwrap();
        assert_eq!(
            all,
            vec![
                ex("broadcast5"),
                ex("broadcast4"),
                ex("broadcast3"),
                ex("broadcast2"),
                ex("broadcast1"),
                ex("episodeBroadcast1"),
            ],
            "{}",
            name
        );

        let page = object_set
            .identifiers(ModelKind::BroadcastEvent, &query.clone().with_limit(2).with_offset(1))
            .await
            .unwrap();
        assert_eq!(page, vec![ex("broadcast4"), ex("broadcast3")], "{}", name);

        // Pagination does not affect the count
        let count = object_set.count(ModelKind::BroadcastEvent, &query.clone().with_limit(2)).await.unwrap();
        assert_eq!(count, 6, "{}", name);

        let past_the_end = query.clone().with_offset(10);
        assert!(object_set.identifiers(ModelKind::BroadcastEvent, &past_the_end).await.unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_filter_on_start_date() {
    let start_date = Variable::new("startDate").unwrap();
    let range = Expression::between(
        &start_date,
        Literal::date_time(Utc.with_ymd_and_hms(2025, 8, 8, 0, 0, 0).unwrap()),
        Literal::date_time(Utc.with_ymd_and_hms(2025, 8, 8, 23, 59, 59).unwrap()),
    );
    let query = Query::pattern(published_on_wqxr(&start_date).filter(range)).order_ascending(&start_date);

    for (name, object_set) in all_backends().await {
        let identifiers = object_set.identifiers(ModelKind::Event, &query).await.unwrap();
        assert_eq!(
            identifiers,
            vec![ex("episodeBroadcast1"), ex("broadcast1"), ex("broadcast2")],
            "{}",
            name
        );
    }
}

#[tokio::test]
async fn test_explicit_identifiers_keep_existing_instances() {
    let query = Query::identifiers(vec![ex("debussy"), ex("wqxr"), ex("nobody"), ex("beethoven")]);
    for (name, object_set) in all_backends().await {
        let identifiers = object_set.identifiers(ModelKind::Person, &query).await.unwrap();
        assert_eq!(identifiers, vec![ex("beethoven"), ex("debussy")], "{}", name);
        assert_eq!(object_set.count(ModelKind::Person, &query).await.unwrap(), 2, "{}", name);
    }
}

#[tokio::test]
async fn test_values_restricts_variable() {
    let recording = Variable::new("recording").unwrap();
    let pattern = GraphPattern::new()
        .triple(Query::subject(), TermPattern::iri(schema::WORK_PERFORMED), &recording)
        .values(recording.clone(), vec![Term::from(ex("recording3"))]);
    for (name, object_set) in all_backends().await {
        let identifiers = object_set.identifiers(ModelKind::BroadcastEvent, &Query::pattern(pattern.clone())).await.unwrap();
        assert_eq!(identifiers, vec![ex("broadcast4"), ex("broadcast5")], "{}", name);
    }
}

#[tokio::test]
async fn test_fetch_full_models_agree() {
    let backends = all_backends().await;
    let (_, reference) = &backends[0];
    let beethoven: Person = reference.fetch(&ex("beethoven")).await.unwrap().unwrap();
    assert_eq!(beethoven.given_name.as_deref(), Some("Ludwig"));
    let broadcast: BroadcastEvent = reference.fetch(&ex("episodeBroadcast1")).await.unwrap().unwrap();
    assert_eq!(broadcast.event.sub_events.len(), 2);

    for (name, object_set) in &backends[1..] {
        let person: Person = object_set.fetch(&ex("beethoven")).await.unwrap().unwrap();
        assert_eq!(person, beethoven, "{}", name);
        let event: BroadcastEvent = object_set.fetch(&ex("episodeBroadcast1")).await.unwrap().unwrap();
        assert_eq!(event, broadcast, "{}", name);
    }
}

#[tokio::test]
async fn test_fetch_nested_roles() {
    for (name, object_set) in all_backends().await {
        let recording: MusicRecording = object_set.fetch(&ex("recording1")).await.unwrap().unwrap();
        assert_eq!(recording.by_artists.len(), 2, "{}", name);
        let role = recording
            .by_artists
            .iter()
            .find_map(|artist| match artist {
                ArtistStub::Role(role) => Some(role),
                ArtistStub::Artist(_) => None,
            })
            .unwrap();
        assert!(matches!(role.identifier, Identifier::Anonymous(_)), "{}", name);
        assert_eq!(role.by_artist.identifier, ex("alsop"), "{}", name);
        assert_eq!(role.by_artist.name.as_deref(), Some("Marin Alsop"), "{}", name);
        assert_eq!(role.role_name.as_str(), sdapps::MUSIC_CONDUCTOR_ROLE_NAME, "{}", name);
        assert_eq!(recording.recording_of.unwrap().identifier, ex("composition1"), "{}", name);
    }
}

#[tokio::test]
async fn test_fetch_absent_or_mistyped() {
    for (name, object_set) in all_backends().await {
        let missing: Option<Person> = object_set.fetch(&ex("nobody")).await.unwrap();
        assert!(missing.is_none(), "{}", name);
        let mistyped: Option<PersonStub> = object_set.fetch_stub(&ex("wqxr")).await.unwrap();
        assert!(mistyped.is_none(), "{}", name);
    }
}

#[tokio::test]
async fn test_fetch_all_in_query_order() {
    for (name, object_set) in all_backends().await {
        let services: Vec<BroadcastServiceStub> = object_set.fetch_all(&Query::new()).await.unwrap();
        let identifiers: Vec<&Identifier> = services.iter().map(|service| &service.identifier).collect();
        assert_eq!(identifiers, vec![&ex("kusc"), &ex("wqxr")], "{}", name);
        assert_eq!(services[1].broadcast_timezone.as_deref(), Some("America/New_York"), "{}", name);
        assert_eq!(services[1].call_sign.as_deref(), Some("WQXR-FM"), "{}", name);
    }
}

#[tokio::test]
async fn test_malformed_query_rejected_everywhere() {
    let unbound = Variable::new("startDate").unwrap();
    let query = Query::new().order_ascending(&unbound);
    for (name, object_set) in all_backends().await {
        let result = object_set.identifiers(ModelKind::Event, &query).await;
        assert!(matches!(result, Err(Error::MalformedQuery(_))), "{}: {:?}", name, result);
    }
}

#[tokio::test]
async fn test_order_across_literal_types() {
    let positions = [
        ("a", Literal::new_simple("abc")),
        ("z", Literal::integer(5)),
        ("m", Literal::new_simple("5")),
        ("l", Literal::new_language_tagged("abc", "en")),
    ];
    let mut triples = Vec::new();
    for (name, position) in positions {
        triples.push(Triple::new(ex(name), rdf::TYPE, Term::named(schema::PERSON)));
        triples.push(Triple::new(ex(name), schema::POSITION, position));
    }
    let dataset = Dataset::from_triples(triples).unwrap();

    let position = Variable::new("position").unwrap();
    let pattern = GraphPattern::new().triple(Query::subject(), TermPattern::iri(schema::POSITION), &position);
    let ascending = Query::pattern(pattern.clone()).order_ascending(&position);
    let descending = Query::pattern(pattern).order_descending(&position);

    for (name, object_set) in backends_over(dataset).await {
        let identifiers = object_set.identifiers(ModelKind::Person, &ascending).await.unwrap();
        assert_eq!(identifiers, vec![ex("z"), ex("m"), ex("l"), ex("a")], "{}", name);

        let identifiers = object_set.identifiers(ModelKind::Person, &descending).await.unwrap();
        assert_eq!(identifiers, vec![ex("a"), ex("l"), ex("m"), ex("z")], "{}", name);
    }
}
