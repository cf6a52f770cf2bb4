//! Playlist assembly: what a service played over a time range, grouped by episode.

use crate::core::{Identifier, Literal};
use crate::error::Result;
use crate::model::broadcast_day::parse_time_zone;
use crate::model::playlist::{
    ArtistRole, Playlist, PlaylistArtist, PlaylistComposition, PlaylistEpisode, PlaylistItem, PlaylistWarning,
};
use crate::model::vocab::{rdf, schema, sdapps};
use crate::model::{
    ArtistStub, BroadcastDay, BroadcastEvent, BroadcastServiceStub, Labeled, Model, MusicComposition,
    MusicRecording, RadioEpisode, ThingStub,
};
use crate::object_set::{ObjectSet, ObjectSetExt};
use crate::query::{Expression, GraphPattern, Query, TermPattern, Variable};
use chrono::{DateTime, FixedOffset, Utc};
use chrono_tz::Tz;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Playlist of `service` for broadcasts starting inside the inclusive range.
///
/// Without a range every music broadcast of the service is included.
pub async fn playlist(
    object_set: &dyn ObjectSet,
    service: &BroadcastServiceStub,
    start_date_range: Option<(DateTime<Utc>, DateTime<Utc>)>,
) -> Result<Playlist> {
    let time_zone = parse_time_zone(service.broadcast_timezone.as_deref())?;

    let recording_broadcasts: Vec<BroadcastEvent> =
        object_set.fetch_all(&recording_broadcasts_query(&service.identifier, start_date_range)).await?;
    log::debug!(
        "{} music recording broadcasts on {}",
        recording_broadcasts.len(),
        service.identifier
    );

    let super_event_identifiers: BTreeSet<Identifier> = recording_broadcasts
        .iter()
        .filter_map(|broadcast| broadcast.event.super_event.as_ref())
        .map(|super_event| super_event.identifier.clone())
        .collect();
    let recording_identifiers: BTreeSet<Identifier> = recording_broadcasts
        .iter()
        .flat_map(|broadcast| broadcast.works_performed.iter())
        .map(|work| work.identifier.clone())
        .collect();

    let (episode_broadcasts, recordings) = futures_util::try_join!(
        fetch_by_identifier::<BroadcastEvent>(object_set, super_event_identifiers),
        fetch_by_identifier::<MusicRecording>(object_set, recording_identifiers),
    )?;

    let episode_identifiers: BTreeSet<Identifier> = episode_broadcasts
        .values()
        .flat_map(|broadcast| broadcast.works_performed.iter())
        .map(|work| work.identifier.clone())
        .collect();
    let composition_identifiers: BTreeSet<Identifier> = recordings
        .values()
        .filter_map(|recording| recording.recording_of.as_ref())
        .map(|composition| composition.identifier.clone())
        .collect();

    let (episodes, compositions) = futures_util::try_join!(
        fetch_by_identifier::<RadioEpisode>(object_set, episode_identifiers),
        fetch_by_identifier::<MusicComposition>(object_set, composition_identifiers),
    )?;

    let resolved = Resolved { time_zone, episode_broadcasts, episodes, recordings, compositions };
    Ok(resolved.assemble(&recording_broadcasts))
}

/// Playlist of one local broadcast day
pub async fn playlist_for_day(
    object_set: &dyn ObjectSet,
    service: &BroadcastServiceStub,
    day: &BroadcastDay,
) -> Result<Playlist> {
    playlist(object_set, service, Some(day.to_instant_range())).await
}

fn recording_broadcasts_query(service: &Identifier, start_date_range: Option<(DateTime<Utc>, DateTime<Utc>)>) -> Query {
    let start_date = Variable::new_unchecked("subjectStartDate");
    let recording = Variable::new_unchecked("subjectMusicRecording");

    let mut pattern = GraphPattern::new()
        .triple(Query::subject(), TermPattern::iri(schema::START_DATE), &start_date)
        .triple(Query::subject(), TermPattern::iri(schema::PUBLISHED_ON), service)
        .triple(Query::subject(), TermPattern::iri(schema::WORK_PERFORMED), &recording)
        .triple(&recording, TermPattern::iri(rdf::TYPE), TermPattern::iri(schema::MUSIC_RECORDING));
    if let Some((start, end)) = start_date_range {
        pattern = pattern.filter(Expression::between(&start_date, Literal::date_time(start), Literal::date_time(end)));
    }
    Query::pattern(pattern).order_ascending(&start_date)
}

async fn fetch_by_identifier<M: Model>(
    object_set: &dyn ObjectSet,
    identifiers: BTreeSet<Identifier>,
) -> Result<HashMap<Identifier, M>> {
    if identifiers.is_empty() {
        return Ok(HashMap::new());
    }
    let models: Vec<M> = object_set.fetch_all(&Query::identifiers(identifiers)).await?;
    Ok(models.into_iter().map(|model| (Model::identifier(&model).clone(), model)).collect())
}

struct Resolved {
    time_zone: Tz,
    episode_broadcasts: HashMap<Identifier, BroadcastEvent>,
    episodes: HashMap<Identifier, RadioEpisode>,
    recordings: HashMap<Identifier, MusicRecording>,
    compositions: HashMap<Identifier, MusicComposition>,
}

impl Resolved {
    fn assemble(&self, recording_broadcasts: &[BroadcastEvent]) -> Playlist {
        let mut playlist = Playlist::default();

        for broadcast in recording_broadcasts {
            let broadcast_identifier = broadcast.event.thing.identifier.to_canonical_string();
            let [work] = broadcast.works_performed.as_slice() else {
                warn(&mut playlist, PlaylistWarning::AmbiguousWorksPerformed { broadcast_event: broadcast_identifier });
                continue;
            };
            let Some(recording) = self.recordings.get(&work.identifier) else {
                warn(
                    &mut playlist,
                    PlaylistWarning::MissingRecording {
                        broadcast_event: broadcast_identifier,
                        recording: work.identifier.to_canonical_string(),
                    },
                );
                continue;
            };

            match self.episode_of(broadcast) {
                Some((episode_broadcast, episode)) => {
                    let identifier = episode.thing.identifier.to_canonical_string();
                    if playlist.episodes.last().map(|last| &last.identifier) != Some(&identifier) {
                        let (start_date, end_date) = self.dates(episode_broadcast);
                        playlist.episodes.push(PlaylistEpisode {
                            identifier,
                            label: episode.display_label(),
                            start_date,
                            end_date,
                            items: Vec::new(),
                        });
                    }
                }
                None => {
                    // Recording aired outside any known episode: it gets an episode of its own
                    let (start_date, end_date) = self.dates(broadcast);
                    playlist.episodes.push(PlaylistEpisode {
                        identifier: broadcast_identifier,
                        label: recording.display_label(),
                        start_date,
                        end_date,
                        items: Vec::new(),
                    });
                }
            }

            let item = self.item(&mut playlist, broadcast, recording);
            if let Some(episode) = playlist.episodes.last_mut() {
                episode.items.push(item);
            }
        }

        let empty_episodes: Vec<String> = playlist
            .episodes
            .iter()
            .filter(|episode| episode.items.iter().all(|item| item.composition_identifier.is_none()))
            .map(|episode| episode.identifier.clone())
            .collect();
        for episode in empty_episodes {
            warn(&mut playlist, PlaylistWarning::EpisodeWithoutCompositions { episode });
        }

        playlist
    }

    /// The episode broadcast a recording broadcast is part of, and the episode it airs
    fn episode_of(&self, broadcast: &BroadcastEvent) -> Option<(&BroadcastEvent, &RadioEpisode)> {
        let super_event = broadcast.event.super_event.as_ref()?;
        let episode_broadcast = self.episode_broadcasts.get(&super_event.identifier)?;
        let [work] = episode_broadcast.works_performed.as_slice() else {
            return None;
        };
        Some((episode_broadcast, self.episodes.get(&work.identifier)?))
    }

    fn item(&self, playlist: &mut Playlist, broadcast: &BroadcastEvent, recording: &MusicRecording) -> PlaylistItem {
        let mut artist_identifiers: BTreeMap<ArtistRole, Vec<String>> = BTreeMap::new();
        for artist in &recording.by_artists {
            let (artist_stub, role) = match artist {
                ArtistStub::Artist(stub) => (stub, ArtistRole::Performer),
                ArtistStub::Role(role) => (&role.by_artist, artist_role(&role.role_name)),
            };
            let identifier = artist_stub.identifier.to_canonical_string();
            playlist
                .artists_by_identifier
                .entry(identifier.clone())
                .or_insert_with(|| PlaylistArtist { label: artist_stub.display_label() });
            artist_identifiers.entry(role).or_default().push(identifier);
        }

        let composition_identifier = match &recording.recording_of {
            Some(composition) => Some(self.composition(playlist, composition)),
            None => None,
        };

        let (start_date, end_date) = self.dates(broadcast);
        PlaylistItem {
            artist_identifiers,
            composition_identifier,
            label: recording.display_label(),
            start_date,
            end_date,
        }
    }

    /// Register a composition and its composers, returning its identifier string
    fn composition(&self, playlist: &mut Playlist, composition: &ThingStub) -> String {
        let identifier = composition.identifier.to_canonical_string();
        if playlist.compositions_by_identifier.contains_key(&identifier) {
            return identifier;
        }

        let composers = self
            .compositions
            .get(&composition.identifier)
            .map(|full| full.composers.as_slice())
            .unwrap_or_default();
        let mut composer_identifiers = Vec::with_capacity(composers.len());
        for composer in composers {
            let composer_identifier = composer.identifier.to_canonical_string();
            playlist
                .composers_by_identifier
                .entry(composer_identifier.clone())
                .or_insert_with(|| PlaylistArtist { label: composer.display_label() });
            composer_identifiers.push(composer_identifier);
        }
        if composer_identifiers.is_empty() {
            warn(playlist, PlaylistWarning::CompositionWithoutComposers { composition: identifier.clone() });
        }

        playlist.compositions_by_identifier.insert(
            identifier.clone(),
            PlaylistComposition { composer_identifiers, label: composition.display_label() },
        );
        identifier
    }

    fn dates(&self, broadcast: &BroadcastEvent) -> (Option<DateTime<FixedOffset>>, Option<DateTime<FixedOffset>>) {
        let local = |instant: DateTime<Utc>| instant.with_timezone(&self.time_zone).fixed_offset();
        (broadcast.event.start_date.map(local), broadcast.event.end_date.map(local))
    }
}

fn artist_role(role_name: &Identifier) -> ArtistRole {
    match role_name.as_str() {
        sdapps::MUSIC_CONDUCTOR_ROLE_NAME => ArtistRole::Conductor,
        sdapps::MUSIC_ENSEMBLE_ROLE_NAME => ArtistRole::Ensemble,
        sdapps::MUSIC_SOLOIST_ROLE_NAME => ArtistRole::Soloist,
        other => {
            log::warn!("Unknown artist role name {}, listing artist as performer", other);
            ArtistRole::Performer
        }
    }
}

fn warn(playlist: &mut Playlist, warning: PlaylistWarning) {
    log::warn!("Incomplete playlist content: {:?}", warning);
    playlist.warnings.push(warning);
}
