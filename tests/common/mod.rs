//! Shared radio station graph for the integration tests
#![allow(dead_code)]

use oxigraph::io::RdfFormat;
use sdgraph::config::Backend;
use sdgraph::context::AppContext;
use sdgraph::core::{Dataset, Identifier};
use sdgraph::http::create_server;
use sdgraph::object_set::{ObjectSet, SparqlObjectSet};
use sdgraph::parsing::load_str;
use sdgraph::querying::{HttpSparqlClient, SparqlClient, SparqlEndpoint, StoreType};
use std::sync::Arc;

pub const RADIO: &str = r#"
@prefix schema: <http://schema.org/> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
@prefix sdapps: <http://purl.org/sdapps/ontology#> .
@prefix ex: <http://example.com/> .

ex:wqxr a schema:RadioBroadcastService ;
    schema:name "WQXR" ;
    schema:callSign "WQXR-FM" ;
    schema:broadcastTimezone "America/New_York" .

ex:kusc a schema:BroadcastService ;
    schema:name "KUSC" .

ex:series a schema:RadioSeries ;
    schema:name "Morning Concert" .

ex:episode1 a schema:RadioEpisode ;
    schema:name "Morning Concert, August 8" ;
    schema:partOfSeries ex:series ;
    schema:publication ex:episodeBroadcast1 .

ex:episodeBroadcast1 a schema:BroadcastEvent ;
    schema:publishedOn ex:wqxr ;
    schema:startDate "2025-08-08T10:00:00Z"^^xsd:dateTime ;
    schema:endDate "2025-08-08T12:00:00Z"^^xsd:dateTime ;
    schema:workPerformed ex:episode1 ;
    schema:subEvent ex:broadcast1, ex:broadcast2 .

ex:broadcast1 a schema:BroadcastEvent ;
    schema:publishedOn ex:wqxr ;
    schema:superEvent ex:episodeBroadcast1 ;
    schema:startDate "2025-08-08T10:05:00Z"^^xsd:dateTime ;
    schema:endDate "2025-08-08T10:20:00Z"^^xsd:dateTime ;
    schema:workPerformed ex:recording1 .

ex:broadcast2 a schema:BroadcastEvent ;
    schema:publishedOn ex:wqxr ;
    schema:superEvent ex:episodeBroadcast1 ;
    schema:startDate "2025-08-08T10:25:00Z"^^xsd:dateTime ;
    schema:endDate "2025-08-08T10:31:00Z"^^xsd:dateTime ;
    schema:workPerformed ex:recording2 .

ex:broadcast3 a schema:BroadcastEvent ;
    schema:publishedOn ex:wqxr ;
    schema:startDate "2025-08-09T02:30:00Z"^^xsd:dateTime ;
    schema:workPerformed ex:recording1 .

ex:broadcast4 a schema:BroadcastEvent ;
    schema:publishedOn ex:wqxr ;
    schema:startDate "2025-08-26T14:00:00Z"^^xsd:dateTime ;
    schema:workPerformed ex:recording3 .

ex:broadcast5 a schema:BroadcastEvent ;
    schema:publishedOn ex:wqxr ;
    schema:startDate "2025-08-26T15:00:00Z"^^xsd:dateTime ;
    schema:workPerformed ex:recording2, ex:recording3 .

ex:recording1 a schema:MusicRecording ;
    schema:name "Symphony No. 5 in C minor" ;
    schema:byArtist [ schema:byArtist ex:alsop ; schema:roleName sdapps:MusicConductorRoleName ] ;
    schema:byArtist ex:orchestra ;
    schema:recordingOf ex:composition1 .

ex:recording2 a schema:MusicRecording ;
    schema:name "Clair de lune" ;
    schema:byArtist ex:pianist ;
    schema:recordingOf ex:composition2 .

ex:recording3 a schema:MusicRecording ;
    schema:name "Improvisation on a Theme" ;
    schema:byArtist ex:pianist ;
    schema:recordingOf ex:composition3 .

ex:composition1 a schema:MusicComposition ;
    schema:name "Symphony No. 5" ;
    schema:composer ex:beethoven .

ex:composition2 a schema:MusicComposition ;
    schema:name "Suite bergamasque: Clair de lune" ;
    schema:composer ex:debussy .

ex:composition3 a schema:MusicComposition ;
    schema:name "Improvisation" .

ex:alsop a schema:Person ;
    schema:name "Marin Alsop" ;
    schema:jobTitle "Conductor" .

ex:orchestra a schema:MusicGroup ;
    schema:name "Baltimore Symphony Orchestra" .

ex:pianist a schema:Person ;
    schema:name "Alexandre Tharaud" .

ex:beethoven a schema:Person ;
    schema:name "Ludwig van Beethoven" ;
    schema:givenName "Ludwig" ;
    schema:familyName "van Beethoven" .

ex:debussy a schema:Person ;
    schema:name "Claude Debussy" .
"#;

pub fn radio_dataset() -> Dataset {
    let mut dataset = Dataset::new();
    load_str(RADIO, RdfFormat::Turtle, &mut dataset).unwrap();
    dataset
}

pub fn ex(name: &str) -> Identifier {
    Identifier::Named(format!("http://example.com/{}", name))
}

/// The radio graph behind the given backend
pub fn radio_context(backend: Backend) -> AppContext {
    AppContext::with_dataset(radio_dataset(), backend).unwrap()
}

/// Serve `context` on an ephemeral port, returning the base URL
pub async fn spawn_server(context: AppContext) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_server(context);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Object set querying an embedded copy of `dataset` through the HTTP API
pub async fn http_object_set(dataset: Dataset, store_type: StoreType) -> Arc<dyn ObjectSet> {
    let url = spawn_server(AppContext::with_dataset(dataset, Backend::Embedded).unwrap()).await;
    let client: Arc<dyn SparqlClient> =
        Arc::new(HttpSparqlClient::new(SparqlEndpoint::new(url, store_type)).unwrap());
    Arc::new(SparqlObjectSet::new(client))
}

/// Every backend over `dataset`, labelled for assertion messages
pub async fn backends_over(dataset: Dataset) -> Vec<(&'static str, Arc<dyn ObjectSet>)> {
    let context = |backend| AppContext::with_dataset(dataset.clone(), backend).unwrap();
    vec![
        ("memory", context(Backend::Memory).shared_object_set()),
        ("embedded", context(Backend::Embedded).shared_object_set()),
        ("http-jena", http_object_set(dataset.clone(), StoreType::Jena).await),
        ("http-oxigraph", http_object_set(dataset.clone(), StoreType::Oxigraph).await),
    ]
}

/// Every backend over the radio graph
pub async fn all_backends() -> Vec<(&'static str, Arc<dyn ObjectSet>)> {
    backends_over(radio_dataset()).await
}
