//! Broadcast day and playlist queries over the radio graph

mod common;

use chrono::{FixedOffset, TimeZone, Utc};
use common::{all_backends, backends_over, ex};
use oxigraph::io::RdfFormat;
use sdgraph::core::Dataset;
use sdgraph::model::playlist::{ArtistRole, PlaylistWarning};
use sdgraph::model::{BroadcastDay, BroadcastServiceStub};
use sdgraph::object_set::{ObjectSet, ObjectSetExt};
use sdgraph::parsing::load_str;
use sdgraph::queries::{self, FirstOrLast};

async fn service(object_set: &dyn ObjectSet, name: &str) -> BroadcastServiceStub {
    object_set.fetch_stub::<BroadcastServiceStub>(&ex(name)).await.unwrap().unwrap()
}

#[tokio::test]
async fn test_broadcast_services_sorted_by_name() {
    for (name, object_set) in all_backends().await {
        let services = queries::broadcast_services(object_set.as_ref()).await.unwrap();
        let names: Vec<Option<&str>> = services.iter().map(|service| service.name.as_deref()).collect();
        assert_eq!(names, vec![Some("KUSC"), Some("WQXR")], "{}", name);
    }
}

#[tokio::test]
async fn test_first_and_last_broadcast_days() {
    for (name, object_set) in all_backends().await {
        let wqxr = service(object_set.as_ref(), "wqxr").await;

        let first = queries::first_broadcast_day(object_set.as_ref(), &wqxr).await.unwrap().unwrap();
        assert_eq!(first, BroadcastDay::new(2025, 8, 8, Some("America/New_York")).unwrap(), "{}", name);

        let last = queries::last_broadcast_day(object_set.as_ref(), &wqxr).await.unwrap().unwrap();
        assert_eq!(last, BroadcastDay::new(2025, 8, 26, Some("America/New_York")).unwrap(), "{}", name);
        assert!(first < last, "{}", name);
    }
}

#[tokio::test]
async fn test_service_without_broadcasts() {
    for (name, object_set) in all_backends().await {
        let kusc = service(object_set.as_ref(), "kusc").await;
        assert_eq!(queries::first_broadcast_day(object_set.as_ref(), &kusc).await.unwrap(), None, "{}", name);
        assert!(queries::last_broadcast_event(object_set.as_ref(), &kusc.identifier).await.unwrap().is_none());
    }
}

#[tokio::test]
async fn test_first_and_last_broadcast_events() {
    for (name, object_set) in all_backends().await {
        let first = queries::first_broadcast_event(object_set.as_ref(), &ex("wqxr")).await.unwrap().unwrap();
        assert_eq!(first.event.thing.identifier, ex("episodeBroadcast1"), "{}", name);
        assert_eq!(first.works_performed[0].identifier, ex("episode1"), "{}", name);

        let last = queries::first_or_last_broadcast_event(object_set.as_ref(), &ex("wqxr"), FirstOrLast::Last)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(last.event.thing.identifier, ex("broadcast5"), "{}", name);
        assert_eq!(last.published_on.unwrap().identifier, ex("wqxr"), "{}", name);
    }
}

#[tokio::test]
async fn test_playlist_for_day() {
    let new_york = FixedOffset::west_opt(4 * 3600).unwrap();

    for (name, object_set) in all_backends().await {
        let wqxr = service(object_set.as_ref(), "wqxr").await;
        let day = BroadcastDay::parse("2025-08-08", wqxr.broadcast_timezone.as_deref()).unwrap();
        let playlist = queries::playlist_for_day(object_set.as_ref(), &wqxr, &day).await.unwrap();

        assert!(playlist.warnings.is_empty(), "{}: {:?}", name, playlist.warnings);
        assert_eq!(playlist.episodes.len(), 2, "{}", name);

        let morning = &playlist.episodes[0];
        assert_eq!(morning.identifier, "http://example.com/episode1", "{}", name);
        assert_eq!(morning.label, "Morning Concert, August 8", "{}", name);
        assert_eq!(
            morning.start_date,
            Some(new_york.with_ymd_and_hms(2025, 8, 8, 6, 0, 0).unwrap()),
            "{}",
            name
        );
        let labels: Vec<&str> = morning.items.iter().map(|item| item.label.as_str()).collect();
        assert_eq!(labels, vec!["Symphony No. 5 in C minor", "Clair de lune"], "{}", name);

        let symphony = &morning.items[0];
        assert_eq!(
            symphony.artist_identifiers.get(&ArtistRole::Conductor),
            Some(&vec!["http://example.com/alsop".to_string()]),
            "{}",
            name
        );
        assert_eq!(
            symphony.artist_identifiers.get(&ArtistRole::Performer),
            Some(&vec!["http://example.com/orchestra".to_string()]),
            "{}",
            name
        );
        assert_eq!(symphony.composition_identifier.as_deref(), Some("http://example.com/composition1"));

        // Aired at 22:30 local time, outside any episode
        let late = &playlist.episodes[1];
        assert_eq!(late.identifier, "http://example.com/broadcast3", "{}", name);
        assert_eq!(late.label, "Symphony No. 5 in C minor", "{}", name);
        assert_eq!(late.items.len(), 1, "{}", name);
        assert_eq!(
            late.start_date,
            Some(new_york.with_ymd_and_hms(2025, 8, 8, 22, 30, 0).unwrap()),
            "{}",
            name
        );

        assert_eq!(playlist.artists_by_identifier["http://example.com/alsop"].label, "Marin Alsop");
        assert_eq!(playlist.composers_by_identifier["http://example.com/beethoven"].label, "Ludwig van Beethoven");
        assert_eq!(
            playlist.compositions_by_identifier["http://example.com/composition2"].composer_identifiers,
            vec!["http://example.com/debussy".to_string()]
        );
        assert_eq!(playlist.items().count(), 3, "{}", name);
    }
}

#[tokio::test]
async fn test_playlist_warnings() {
    for (name, object_set) in all_backends().await {
        let wqxr = service(object_set.as_ref(), "wqxr").await;
        let day = BroadcastDay::new(2025, 8, 26, wqxr.broadcast_timezone.as_deref()).unwrap();
        let playlist = queries::playlist_for_day(object_set.as_ref(), &wqxr, &day).await.unwrap();

        assert_eq!(
            playlist.warnings,
            vec![
                PlaylistWarning::CompositionWithoutComposers { composition: "http://example.com/composition3".to_string() },
                PlaylistWarning::AmbiguousWorksPerformed { broadcast_event: "http://example.com/broadcast5".to_string() },
            ],
            "{}",
            name
        );
        assert_eq!(playlist.episodes.len(), 1, "{}", name);
        assert_eq!(playlist.episodes[0].identifier, "http://example.com/broadcast4", "{}", name);
    }
}

#[tokio::test]
async fn test_playlist_of_empty_day() {
    for (name, object_set) in all_backends().await {
        let wqxr = service(object_set.as_ref(), "wqxr").await;
        let day = BroadcastDay::new(2025, 8, 10, wqxr.broadcast_timezone.as_deref()).unwrap();
        let playlist = queries::playlist_for_day(object_set.as_ref(), &wqxr, &day).await.unwrap();
        assert!(playlist.episodes.is_empty(), "{}", name);
        assert!(playlist.warnings.is_empty(), "{}", name);
    }
}

#[tokio::test]
async fn test_playlist_without_range_covers_every_day() {
    for (name, object_set) in all_backends().await {
        let wqxr = service(object_set.as_ref(), "wqxr").await;
        let playlist = queries::playlist(object_set.as_ref(), &wqxr, None).await.unwrap();
        assert_eq!(playlist.items().count(), 4, "{}", name);
        assert_eq!(playlist.episodes.len(), 3, "{}", name);
    }
}

#[tokio::test]
async fn test_playlist_contains_only_broadcasts_in_range() {
    let start = Utc.with_ymd_and_hms(2025, 8, 8, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2025, 8, 8, 23, 59, 59).unwrap();

    for (name, object_set) in all_backends().await {
        let wqxr = service(object_set.as_ref(), "wqxr").await;
        let playlist = queries::playlist(object_set.as_ref(), &wqxr, Some((start, end))).await.unwrap();
        assert_eq!(playlist.items().count(), 2, "{}", name);
        for item in playlist.items() {
            let start_date = item.start_date.unwrap();
            assert!(start_date >= start && start_date <= end, "{}: {}", name, start_date);
        }
    }
}

/// Two broadcasts written without a timezone next to one written in UTC
const LOCAL_START_DATES: &str = r#"
@prefix schema: <http://schema.org/> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
@prefix ex: <http://example.com/> .

ex:utc a schema:RadioBroadcastService ;
    schema:name "Coordinated" ;
    schema:broadcastTimezone "UTC" .

ex:earlier a schema:BroadcastEvent ;
    schema:publishedOn ex:utc ;
    schema:startDate "2025-08-06T12:00:00"^^xsd:dateTime ;
    schema:workPerformed ex:prelude .

ex:local a schema:BroadcastEvent ;
    schema:publishedOn ex:utc ;
    schema:startDate "2025-08-08T12:00:00"^^xsd:dateTime ;
    schema:workPerformed ex:prelude .

ex:zoned a schema:BroadcastEvent ;
    schema:publishedOn ex:utc ;
    schema:startDate "2025-08-08T13:00:00Z"^^xsd:dateTime ;
    schema:workPerformed ex:fugue .

ex:prelude a schema:MusicRecording ;
    schema:name "Prelude" .

ex:fugue a schema:MusicRecording ;
    schema:name "Fugue" .
"#;

#[tokio::test]
async fn test_start_dates_without_timezone() {
    let mut dataset = Dataset::new();
    load_str(LOCAL_START_DATES, RdfFormat::Turtle, &mut dataset).unwrap();

    for (name, object_set) in backends_over(dataset).await {
        let utc = service(object_set.as_ref(), "utc").await;
        let episodes = |playlist: &sdgraph::model::Playlist| -> Vec<String> {
            playlist.episodes.iter().map(|episode| episode.identifier.clone()).collect()
        };

        // A local 12:00 may lie anywhere within 14 hours of 12:00Z, so it is
        // neither inside nor outside a UTC day and the range filter drops it
        let day = BroadcastDay::new(2025, 8, 8, Some("UTC")).unwrap();
        let playlist = queries::playlist_for_day(object_set.as_ref(), &utc, &day).await.unwrap();
        assert_eq!(episodes(&playlist), vec!["http://example.com/zoned".to_string()], "{}", name);

        let day = BroadcastDay::new(2025, 8, 6, Some("UTC")).unwrap();
        let playlist = queries::playlist_for_day(object_set.as_ref(), &utc, &day).await.unwrap();
        assert!(playlist.episodes.is_empty(), "{}", name);

        // Unfiltered, local and zoned start dates still order deterministically
        let playlist = queries::playlist(object_set.as_ref(), &utc, None).await.unwrap();
        assert_eq!(
            episodes(&playlist),
            vec![
                "http://example.com/earlier".to_string(),
                "http://example.com/local".to_string(),
                "http://example.com/zoned".to_string(),
            ],
            "{}",
            name
        );

        let first = queries::first_broadcast_day(object_set.as_ref(), &utc).await.unwrap().unwrap();
        let last = queries::last_broadcast_day(object_set.as_ref(), &utc).await.unwrap().unwrap();
        assert_eq!(first.to_canonical_string(), "2025-08-06", "{}", name);
        assert_eq!(last.to_canonical_string(), "2025-08-08", "{}", name);
    }
}
