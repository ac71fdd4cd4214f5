//! Command orchestration over the catalog, playlists, and playback session.
//!
//! Every public operation validates its preconditions in a fixed order,
//! short-circuits on the first failure, and only then mutates. Outcomes are
//! structured data; rendering them is the shell's job. This layer never
//! prints and never reads input.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::Catalog;
use crate::config::MarqueeConfig;
use crate::errors::CommandError;
use crate::playlist::PlaylistRegistry;
use crate::search;
use crate::session::PlayerSession;
use crate::video::{Video, VideoId};

/// Identifying summary of a video, enough for a shell to name it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRef {
    pub id: VideoId,
    pub title: String,
}

impl VideoRef {
    fn of(video: &Video) -> Self {
        Self {
            id: video.id().clone(),
            title: video.title().to_string(),
        }
    }
}

/// Result of a successful play command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    /// The video now occupying the playback slot.
    pub started: VideoRef,
    /// The video that was implicitly stopped to make room, if any.
    pub stopped: Option<VideoRef>,
}

/// Result of a successful flag command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagOutcome {
    pub video: VideoRef,
    /// The reason recorded on the flag (the default sentinel when the
    /// caller supplied none).
    pub reason: String,
    /// True when the flagged video was loaded in the session and playback
    /// was forced to stop.
    pub stopped_playback: bool,
}

/// One search result, in rank order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub id: VideoId,
    pub title: String,
    pub tags: Vec<String>,
}

impl SearchHit {
    fn of(video: &Video) -> Self {
        Self {
            id: video.id().clone(),
            title: video.title().to_string(),
            tags: video.tags().to_vec(),
        }
    }
}

/// A catalog entry annotated with derived display state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedVideo {
    pub id: VideoId,
    pub title: String,
    pub tags: Vec<String>,
    /// The video occupies the playback slot (playing or paused).
    pub playing: bool,
    pub paused: bool,
    pub flag_reason: Option<String>,
}

/// The command-handling layer.
///
/// Owns all process-wide state: catalog, playlist registry, playback
/// session, and the RNG used for random play. Constructed explicitly and
/// passed by reference, never ambient, so tests get a fresh instance each.
#[derive(Debug)]
pub struct PlayerService {
    catalog: Catalog,
    playlists: PlaylistRegistry,
    session: PlayerSession,
    rng: StdRng,
    default_flag_reason: String,
}

impl PlayerService {
    /// Creates a service over a loaded catalog.
    pub fn new(catalog: Catalog, config: &MarqueeConfig) -> Self {
        let rng = match config.playback.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            catalog,
            playlists: PlaylistRegistry::new(),
            session: PlayerSession::new(),
            rng,
            default_flag_reason: config.playback.default_flag_reason.to_string(),
        }
    }

    /// Read access to the catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Read access to the playback session.
    pub fn session(&self) -> &PlayerSession {
        &self.session
    }

    /// Number of videos in the library.
    pub fn video_count(&self) -> usize {
        self.catalog.len()
    }

    /// Plays a video by id, displacing whatever was loaded.
    ///
    /// # Errors
    /// - `CommandError::VideoNotFound` - Unknown id
    /// - `CommandError::VideoFlagged` - The video is flagged
    pub fn play(&mut self, id: &str) -> Result<PlayOutcome, CommandError> {
        let video_id = VideoId::from(id);
        let Some(video) = self.catalog.get(&video_id) else {
            return Err(CommandError::VideoNotFound { video_id });
        };
        if let Some(reason) = video.flag_reason() {
            return Err(CommandError::VideoFlagged {
                video_id,
                reason: reason.to_string(),
            });
        }
        let started = VideoRef::of(video);
        let stopped = self
            .session
            .play(video_id)
            .map(|prev| self.video_ref(&prev));
        tracing::debug!("playing {}", started.id);
        Ok(PlayOutcome { started, stopped })
    }

    /// Plays a uniformly random non-flagged video.
    ///
    /// # Errors
    /// - `CommandError::NoPlayableVideos` - Every video is flagged (or the
    ///   catalog is empty)
    pub fn play_random(&mut self) -> Result<PlayOutcome, CommandError> {
        let available = self.catalog.non_flagged();
        if available.is_empty() {
            return Err(CommandError::NoPlayableVideos);
        }
        let pick = self.rng.random_range(0..available.len());
        let id = available[pick].id().clone();
        self.play(id.as_str())
    }

    /// Stops the loaded video.
    ///
    /// # Errors
    /// - `CommandError::NothingPlaying` - The session is idle
    pub fn stop(&mut self) -> Result<VideoRef, CommandError> {
        let id = self.session.stop()?;
        tracing::debug!("stopped {id}");
        Ok(self.video_ref(&id))
    }

    /// Pauses the playing video.
    ///
    /// # Errors
    /// - `CommandError::NothingPlaying` - The session is idle
    /// - `CommandError::AlreadyPaused` - Already paused
    pub fn pause(&mut self) -> Result<VideoRef, CommandError> {
        let id = self.session.pause()?;
        Ok(self.video_ref(&id))
    }

    /// Resumes the paused video.
    ///
    /// # Errors
    /// - `CommandError::NothingPlaying` - The session is idle
    /// - `CommandError::NotPaused` - The loaded video is not paused
    pub fn resume(&mut self) -> Result<VideoRef, CommandError> {
        let id = self.session.resume()?;
        Ok(self.video_ref(&id))
    }

    /// The video loaded in the playback slot, annotated, or `None` when idle.
    pub fn now_playing(&self) -> Option<ListedVideo> {
        let id = self.session.now_playing()?;
        self.catalog.get(id).map(|video| self.listed(video))
    }

    /// Flags a video, making it unavailable for playback and playlists.
    ///
    /// If the flagged video was loaded in the session (playing or paused),
    /// playback is forced to stop.
    ///
    /// # Errors
    /// - `CommandError::VideoNotFound` - Unknown id
    /// - `CommandError::AlreadyFlagged` - Already flagged
    pub fn flag(&mut self, id: &str, reason: Option<String>) -> Result<FlagOutcome, CommandError> {
        let video_id = VideoId::from(id);
        let reason = reason.unwrap_or_else(|| self.default_flag_reason.clone());
        let Some(video) = self.catalog.get_mut(&video_id) else {
            return Err(CommandError::VideoNotFound { video_id });
        };
        if video.is_flagged() {
            return Err(CommandError::AlreadyFlagged { video_id });
        }
        video.set_flag(reason.clone());
        let video_ref = VideoRef {
            id: video_id.clone(),
            title: video.title().to_string(),
        };

        let stopped_playback = self.session.now_playing() == Some(&video_id);
        if stopped_playback {
            self.session.stop()?;
            tracing::debug!("flagged video {video_id} was loaded, playback stopped");
        }
        tracing::info!("flagged {video_id} (reason: {reason})");
        Ok(FlagOutcome {
            video: video_ref,
            reason,
            stopped_playback,
        })
    }

    /// Clears the flag (and its reason) from a video.
    ///
    /// # Errors
    /// - `CommandError::VideoNotFound` - Unknown id
    /// - `CommandError::NotFlagged` - The video is not flagged
    pub fn unflag(&mut self, id: &str) -> Result<VideoRef, CommandError> {
        let video_id = VideoId::from(id);
        let Some(video) = self.catalog.get_mut(&video_id) else {
            return Err(CommandError::VideoNotFound { video_id });
        };
        if !video.is_flagged() {
            return Err(CommandError::NotFlagged { video_id });
        }
        video.clear_flag();
        tracing::info!("removed flag from {}", video.id());
        Ok(VideoRef {
            id: video_id,
            title: video.title().to_string(),
        })
    }

    /// Creates an empty playlist, preserving the given casing.
    ///
    /// # Errors
    /// - `CommandError::DuplicatePlaylist` - A case-insensitively equal name exists
    pub fn create_playlist(&mut self, name: &str) -> Result<String, CommandError> {
        let playlist = self.playlists.create(name)?;
        Ok(playlist.name().to_string())
    }

    /// Adds a video to a playlist.
    ///
    /// # Errors
    /// - `CommandError::PlaylistNotFound` - Unknown playlist name
    /// - `CommandError::VideoNotFound` - Unknown video id
    /// - `CommandError::VideoFlagged` - The video is flagged
    /// - `CommandError::AlreadyInPlaylist` - Already a member
    pub fn add_to_playlist(&mut self, name: &str, id: &str) -> Result<VideoRef, CommandError> {
        let Some(playlist) = self.playlists.find_mut(name) else {
            return Err(CommandError::PlaylistNotFound {
                name: name.to_string(),
            });
        };
        let video_id = VideoId::from(id);
        let Some(video) = self.catalog.get(&video_id) else {
            return Err(CommandError::VideoNotFound { video_id });
        };
        if let Some(reason) = video.flag_reason() {
            return Err(CommandError::VideoFlagged {
                video_id,
                reason: reason.to_string(),
            });
        }
        let video_ref = VideoRef::of(video);
        if !playlist.add(video_id) {
            return Err(CommandError::AlreadyInPlaylist {
                playlist: name.to_string(),
                video_id: video_ref.id,
            });
        }
        Ok(video_ref)
    }

    /// Removes a video from a playlist.
    ///
    /// # Errors
    /// - `CommandError::PlaylistNotFound` - Unknown playlist name
    /// - `CommandError::VideoNotFound` - Unknown video id
    /// - `CommandError::NotInPlaylist` - Not a member
    pub fn remove_from_playlist(&mut self, name: &str, id: &str) -> Result<VideoRef, CommandError> {
        let Some(playlist) = self.playlists.find_mut(name) else {
            return Err(CommandError::PlaylistNotFound {
                name: name.to_string(),
            });
        };
        let video_id = VideoId::from(id);
        let Some(video) = self.catalog.get(&video_id) else {
            return Err(CommandError::VideoNotFound { video_id });
        };
        let video_ref = VideoRef::of(video);
        if !playlist.remove(&video_ref.id) {
            return Err(CommandError::NotInPlaylist {
                playlist: name.to_string(),
                video_id: video_ref.id,
            });
        }
        Ok(video_ref)
    }

    /// Removes every video from a playlist.
    ///
    /// # Errors
    /// - `CommandError::PlaylistNotFound` - Unknown playlist name
    pub fn clear_playlist(&mut self, name: &str) -> Result<(), CommandError> {
        let Some(playlist) = self.playlists.find_mut(name) else {
            return Err(CommandError::PlaylistNotFound {
                name: name.to_string(),
            });
        };
        playlist.clear();
        Ok(())
    }

    /// Deletes a playlist, freeing its name.
    ///
    /// # Errors
    /// - `CommandError::PlaylistNotFound` - Unknown playlist name
    pub fn delete_playlist(&mut self, name: &str) -> Result<(), CommandError> {
        if self.playlists.delete(name) {
            Ok(())
        } else {
            Err(CommandError::PlaylistNotFound {
                name: name.to_string(),
            })
        }
    }

    /// Display names of all playlists, in unspecified order.
    ///
    /// Shells sort these case-insensitively for display; nothing in the
    /// core relies on the iteration order.
    pub fn playlist_names(&self) -> Vec<String> {
        self.playlists
            .names()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// The videos of a playlist, in insertion order, annotated for display.
    ///
    /// # Errors
    /// - `CommandError::PlaylistNotFound` - Unknown playlist name
    pub fn playlist_videos(&self, name: &str) -> Result<Vec<ListedVideo>, CommandError> {
        let Some(playlist) = self.playlists.find(name) else {
            return Err(CommandError::PlaylistNotFound {
                name: name.to_string(),
            });
        };
        Ok(playlist
            .video_ids()
            .iter()
            .filter_map(|id| self.catalog.get(id))
            .map(|video| self.listed(video))
            .collect())
    }

    /// Case-insensitive substring search over non-flagged video titles.
    ///
    /// Results are sorted case-insensitively by title, catalog order as the
    /// tie-break; the shell numbers them 1-based for follow-up selection.
    pub fn search(&self, term: &str) -> Vec<SearchHit> {
        search::by_title(&self.catalog, term)
            .into_iter()
            .map(SearchHit::of)
            .collect()
    }

    /// Exact case-insensitive tag search over non-flagged videos.
    ///
    /// A query without the leading `#` yields zero results by design.
    pub fn search_by_tag(&self, tag: &str) -> Vec<SearchHit> {
        search::by_tag(&self.catalog, tag)
            .into_iter()
            .map(SearchHit::of)
            .collect()
    }

    /// All videos sorted case-insensitively by title, annotated for display.
    pub fn list_videos(&self) -> Vec<ListedVideo> {
        search::sorted_by_title(self.catalog.all().iter().collect())
            .into_iter()
            .map(|video| self.listed(video))
            .collect()
    }

    fn listed(&self, video: &Video) -> ListedVideo {
        let playing = self.session.now_playing() == Some(video.id());
        ListedVideo {
            id: video.id().clone(),
            title: video.title().to_string(),
            tags: video.tags().to_vec(),
            playing,
            paused: playing && self.session.is_paused(),
            flag_reason: video.flag_reason().map(str::to_string),
        }
    }

    fn video_ref(&self, id: &VideoId) -> VideoRef {
        // Session ids originate from catalog lookups and membership never
        // shrinks, so this resolves.
        let video = self
            .catalog
            .get(id)
            .expect("session video id must exist in catalog");
        VideoRef::of(video)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::PlaybackState;
    use crate::video::VideoRecord;

    fn record(id: &str, title: &str, tags: &[&str]) -> VideoRecord {
        VideoRecord {
            id: VideoId::from(id),
            title: title.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn service() -> PlayerService {
        let catalog = Catalog::from_records(vec![
            record("amazing_cats_video_id", "Amazing Cats", &["#cat", "#animal"]),
            record("funny_dogs_video_id", "Funny Dogs", &["#dog", "#animal"]),
        ])
        .unwrap();
        let config = MarqueeConfig {
            playback: crate::config::PlaybackConfig {
                random_seed: Some(7),
                ..Default::default()
            },
            ..Default::default()
        };
        PlayerService::new(catalog, &config)
    }

    #[test]
    fn test_play_pause_continue_flag_scenario() {
        let mut service = service();

        let outcome = service.play("funny_dogs_video_id").unwrap();
        assert_eq!(outcome.started.title, "Funny Dogs");
        assert_eq!(outcome.stopped, None);
        assert!(!service.session().is_paused());

        service.pause().unwrap();
        assert!(service.session().is_paused());

        service.resume().unwrap();
        assert!(!service.session().is_paused());

        let flagged = service
            .flag("funny_dogs_video_id", Some("inappropriate".to_string()))
            .unwrap();
        assert!(flagged.stopped_playback);
        assert_eq!(flagged.reason, "inappropriate");
        assert_eq!(*service.session().state(), PlaybackState::Idle);
    }

    #[test]
    fn test_play_reports_displaced_video() {
        let mut service = service();
        service.play("amazing_cats_video_id").unwrap();

        let outcome = service.play("funny_dogs_video_id").unwrap();
        assert_eq!(
            outcome.stopped.unwrap().id,
            VideoId::from("amazing_cats_video_id")
        );
    }

    #[test]
    fn test_play_unknown_id() {
        let mut service = service();
        let err = service.play("does_not_exist").unwrap_err();
        assert!(matches!(err, CommandError::VideoNotFound { .. }));
    }

    #[test]
    fn test_play_flagged_video_carries_reason() {
        let mut service = service();
        service
            .flag("amazing_cats_video_id", Some("dont_watch".to_string()))
            .unwrap();

        let err = service.play("amazing_cats_video_id").unwrap_err();
        assert_eq!(
            err,
            CommandError::VideoFlagged {
                video_id: VideoId::from("amazing_cats_video_id"),
                reason: "dont_watch".to_string(),
            }
        );
    }

    #[test]
    fn test_flag_defaults_reason() {
        let mut service = service();
        let outcome = service.flag("amazing_cats_video_id", None).unwrap();
        assert_eq!(outcome.reason, "Not supplied");
        assert!(!outcome.stopped_playback);
    }

    #[test]
    fn test_flag_stops_paused_video_too() {
        let mut service = service();
        service.play("amazing_cats_video_id").unwrap();
        service.pause().unwrap();

        let outcome = service.flag("amazing_cats_video_id", None).unwrap();
        assert!(outcome.stopped_playback);
        assert_eq!(*service.session().state(), PlaybackState::Idle);
    }

    #[test]
    fn test_flag_other_video_leaves_playback_alone() {
        let mut service = service();
        service.play("amazing_cats_video_id").unwrap();

        let outcome = service.flag("funny_dogs_video_id", None).unwrap();
        assert!(!outcome.stopped_playback);
        assert_eq!(
            service.session().now_playing(),
            Some(&VideoId::from("amazing_cats_video_id"))
        );
    }

    #[test]
    fn test_unflag_restores_playability() {
        let mut service = service();
        service.flag("amazing_cats_video_id", None).unwrap();
        service.unflag("amazing_cats_video_id").unwrap();
        assert!(service.play("amazing_cats_video_id").is_ok());
    }

    #[test]
    fn test_unflag_requires_flagged() {
        let mut service = service();
        let err = service.unflag("amazing_cats_video_id").unwrap_err();
        assert!(matches!(err, CommandError::NotFlagged { .. }));
    }

    #[test]
    fn test_play_random_with_everything_flagged() {
        let mut service = service();
        service.flag("amazing_cats_video_id", None).unwrap();
        service.flag("funny_dogs_video_id", None).unwrap();

        assert_eq!(service.play_random(), Err(CommandError::NoPlayableVideos));
    }

    #[test]
    fn test_play_random_skips_flagged_videos() {
        let mut service = service();
        service.flag("funny_dogs_video_id", None).unwrap();

        for _ in 0..10 {
            let outcome = service.play_random().unwrap();
            assert_eq!(outcome.started.id, VideoId::from("amazing_cats_video_id"));
        }
    }

    #[test]
    fn test_add_to_playlist_validation_order() {
        let mut service = service();

        let err = service
            .add_to_playlist("missing", "amazing_cats_video_id")
            .unwrap_err();
        assert!(matches!(err, CommandError::PlaylistNotFound { .. }));

        service.create_playlist("road_trip").unwrap();
        let err = service.add_to_playlist("road_trip", "nope").unwrap_err();
        assert!(matches!(err, CommandError::VideoNotFound { .. }));

        service.flag("amazing_cats_video_id", None).unwrap();
        let err = service
            .add_to_playlist("road_trip", "amazing_cats_video_id")
            .unwrap_err();
        assert!(matches!(err, CommandError::VideoFlagged { .. }));

        service
            .add_to_playlist("road_trip", "funny_dogs_video_id")
            .unwrap();
        let err = service
            .add_to_playlist("road_trip", "funny_dogs_video_id")
            .unwrap_err();
        assert!(matches!(err, CommandError::AlreadyInPlaylist { .. }));
    }

    #[test]
    fn test_playlist_lookup_ignores_case() {
        let mut service = service();
        service.create_playlist("road_trip").unwrap();
        service
            .add_to_playlist("ROAD_TRIP", "amazing_cats_video_id")
            .unwrap();

        let videos = service.playlist_videos("Road_Trip").unwrap();
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].title, "Amazing Cats");
    }

    #[test]
    fn test_remove_clear_delete_playlist() {
        let mut service = service();
        service.create_playlist("mix").unwrap();
        service
            .add_to_playlist("mix", "amazing_cats_video_id")
            .unwrap();
        service
            .add_to_playlist("mix", "funny_dogs_video_id")
            .unwrap();

        service
            .remove_from_playlist("mix", "amazing_cats_video_id")
            .unwrap();
        let err = service
            .remove_from_playlist("mix", "amazing_cats_video_id")
            .unwrap_err();
        assert!(matches!(err, CommandError::NotInPlaylist { .. }));

        service.clear_playlist("mix").unwrap();
        assert!(service.playlist_videos("mix").unwrap().is_empty());

        service.delete_playlist("mix").unwrap();
        assert!(matches!(
            service.playlist_videos("mix"),
            Err(CommandError::PlaylistNotFound { .. })
        ));
    }

    #[test]
    fn test_flagged_membership_survives_in_playlist_listing() {
        let mut service = service();
        service.create_playlist("mix").unwrap();
        service
            .add_to_playlist("mix", "amazing_cats_video_id")
            .unwrap();
        service.flag("amazing_cats_video_id", None).unwrap();

        let videos = service.playlist_videos("mix").unwrap();
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].flag_reason.as_deref(), Some("Not supplied"));
    }

    #[test]
    fn test_search_excludes_flagged() {
        let mut service = service();
        assert_eq!(service.search("s").len(), 2);

        service.flag("funny_dogs_video_id", None).unwrap();
        let hits = service.search("s");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Amazing Cats");
    }

    #[test]
    fn test_search_by_tag_without_hash_is_empty() {
        let service = service();
        assert!(service.search_by_tag("animal").is_empty());
        assert_eq!(service.search_by_tag("#animal").len(), 2);
    }

    #[test]
    fn test_list_videos_sorted_and_annotated() {
        let mut service = service();
        service.play("funny_dogs_video_id").unwrap();
        service.pause().unwrap();
        service.flag("amazing_cats_video_id", None).unwrap();

        let listed = service.list_videos();
        let titles: Vec<&str> = listed.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, vec!["Amazing Cats", "Funny Dogs"]);

        assert_eq!(listed[0].flag_reason.as_deref(), Some("Not supplied"));
        assert!(!listed[0].playing);
        assert!(listed[1].playing);
        assert!(listed[1].paused);
    }

    #[test]
    fn test_now_playing_annotations() {
        let mut service = service();
        assert_eq!(service.now_playing(), None);

        service.play("amazing_cats_video_id").unwrap();
        let playing = service.now_playing().unwrap();
        assert_eq!(playing.title, "Amazing Cats");
        assert!(!playing.paused);

        service.pause().unwrap();
        assert!(service.now_playing().unwrap().paused);
    }
}
