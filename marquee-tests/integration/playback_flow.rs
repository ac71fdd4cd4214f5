//! Playback session flows driven through the service API.

use marquee_core::config::{MarqueeConfig, PlaybackConfig};
use marquee_core::errors::CommandError;
use marquee_core::service::PlayerService;
use marquee_core::session::PlaybackState;
use marquee_core::{library, VideoId};

const LIBRARY: &str = r##"[
    { "id": "amazing_cats_video_id", "title": "Amazing Cats", "tags": ["#cat", "#animal"] },
    { "id": "funny_dogs_video_id", "title": "Funny Dogs", "tags": ["#dog", "#animal"] },
    { "id": "life_at_google_video_id", "title": "Life at Google", "tags": ["#google", "#career"] }
]"##;

fn service() -> PlayerService {
    let catalog = library::load_from_str(LIBRARY).unwrap();
    let config = MarqueeConfig {
        playback: PlaybackConfig {
            random_seed: Some(42),
            ..Default::default()
        },
        ..Default::default()
    };
    PlayerService::new(catalog, &config)
}

#[test]
fn test_play_pause_continue_flag_interrupts() {
    let mut service = service();

    let outcome = service.play("funny_dogs_video_id").unwrap();
    assert_eq!(outcome.started.title, "Funny Dogs");
    assert!(!service.session().is_paused());

    service.pause().unwrap();
    assert!(service.session().is_paused());

    service.resume().unwrap();
    assert!(!service.session().is_paused());

    service
        .flag("funny_dogs_video_id", Some("inappropriate".to_string()))
        .unwrap();
    assert_eq!(*service.session().state(), PlaybackState::Idle);
}

#[test]
fn test_switching_videos_reports_the_stopped_one() {
    let mut service = service();
    service.play("amazing_cats_video_id").unwrap();

    let outcome = service.play("funny_dogs_video_id").unwrap();
    let stopped = outcome.stopped.unwrap();
    assert_eq!(stopped.id, VideoId::from("amazing_cats_video_id"));
    assert_eq!(stopped.title, "Amazing Cats");
    assert_eq!(
        service.session().now_playing(),
        Some(&VideoId::from("funny_dogs_video_id"))
    );
}

#[test]
fn test_play_then_stop_lands_idle_from_any_state() {
    let mut service = service();

    service.play("amazing_cats_video_id").unwrap();
    service.stop().unwrap();
    assert_eq!(*service.session().state(), PlaybackState::Idle);

    service.play("amazing_cats_video_id").unwrap();
    service.pause().unwrap();
    service.play("funny_dogs_video_id").unwrap();
    service.stop().unwrap();
    assert_eq!(*service.session().state(), PlaybackState::Idle);
}

#[test]
fn test_session_commands_require_a_loaded_video() {
    let mut service = service();

    assert_eq!(service.stop(), Err(CommandError::NothingPlaying));
    assert_eq!(service.pause(), Err(CommandError::NothingPlaying));
    assert_eq!(service.resume(), Err(CommandError::NothingPlaying));
    assert_eq!(service.now_playing(), None);
}

#[test]
fn test_pause_is_idempotent_safe() {
    let mut service = service();
    service.play("amazing_cats_video_id").unwrap();

    service.pause().unwrap();
    let err = service.pause().unwrap_err();
    assert_eq!(
        err,
        CommandError::AlreadyPaused {
            video_id: VideoId::from("amazing_cats_video_id"),
        }
    );
    assert!(service.session().is_paused());
}

#[test]
fn test_continue_rejects_unpaused_playback() {
    let mut service = service();
    service.play("amazing_cats_video_id").unwrap();

    let err = service.resume().unwrap_err();
    assert_eq!(
        err,
        CommandError::NotPaused {
            video_id: VideoId::from("amazing_cats_video_id"),
        }
    );
}

#[test]
fn test_play_random_lands_on_an_available_video() {
    let mut service = service();
    service.flag("amazing_cats_video_id", None).unwrap();
    service.flag("life_at_google_video_id", None).unwrap();

    let outcome = service.play_random().unwrap();
    assert_eq!(outcome.started.id, VideoId::from("funny_dogs_video_id"));
}
