//! Flag/unflag moderation and its playback side effects.

use marquee_core::config::MarqueeConfig;
use marquee_core::errors::{CommandError, ErrorKind};
use marquee_core::service::PlayerService;
use marquee_core::session::PlaybackState;
use marquee_core::{library, VideoId};

const LIBRARY: &str = r##"[
    { "id": "amazing_cats_video_id", "title": "Amazing Cats", "tags": ["#cat", "#animal"] },
    { "id": "funny_dogs_video_id", "title": "Funny Dogs", "tags": ["#dog", "#animal"] }
]"##;

fn service() -> PlayerService {
    let catalog = library::load_from_str(LIBRARY).unwrap();
    PlayerService::new(catalog, &MarqueeConfig::default())
}

#[test]
fn test_flag_uses_default_reason_when_none_supplied() {
    let mut service = service();
    let outcome = service.flag("amazing_cats_video_id", None).unwrap();
    assert_eq!(outcome.reason, "Not supplied");

    let err = service.play("amazing_cats_video_id").unwrap_err();
    assert_eq!(
        err,
        CommandError::VideoFlagged {
            video_id: VideoId::from("amazing_cats_video_id"),
            reason: "Not supplied".to_string(),
        }
    );
}

#[test]
fn test_flagging_the_loaded_video_forces_idle() {
    let mut service = service();

    service.play("funny_dogs_video_id").unwrap();
    let outcome = service.flag("funny_dogs_video_id", None).unwrap();
    assert!(outcome.stopped_playback);
    assert_eq!(*service.session().state(), PlaybackState::Idle);

    // The same holds when the video is merely paused.
    service.play("amazing_cats_video_id").unwrap();
    service.pause().unwrap();
    let outcome = service.flag("amazing_cats_video_id", None).unwrap();
    assert!(outcome.stopped_playback);
    assert_eq!(*service.session().state(), PlaybackState::Idle);
}

#[test]
fn test_flagging_another_video_does_not_interrupt() {
    let mut service = service();
    service.play("funny_dogs_video_id").unwrap();

    let outcome = service.flag("amazing_cats_video_id", None).unwrap();
    assert!(!outcome.stopped_playback);
    assert_eq!(
        service.session().now_playing(),
        Some(&VideoId::from("funny_dogs_video_id"))
    );
}

#[test]
fn test_double_flag_and_double_unflag_are_rejected() {
    let mut service = service();

    service.flag("amazing_cats_video_id", None).unwrap();
    let err = service.flag("amazing_cats_video_id", None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyInState);

    service.unflag("amazing_cats_video_id").unwrap();
    let err = service.unflag("amazing_cats_video_id").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyInState);
}

#[test]
fn test_unflag_makes_a_video_playable_again() {
    let mut service = service();
    service
        .flag("amazing_cats_video_id", Some("dont_watch".to_string()))
        .unwrap();
    service.unflag("amazing_cats_video_id").unwrap();

    let outcome = service.play("amazing_cats_video_id").unwrap();
    assert_eq!(outcome.started.title, "Amazing Cats");
}

#[test]
fn test_random_play_with_every_video_flagged() {
    let mut service = service();
    service.flag("amazing_cats_video_id", None).unwrap();
    service.flag("funny_dogs_video_id", None).unwrap();

    let err = service.play_random().unwrap_err();
    assert_eq!(err, CommandError::NoPlayableVideos);
    assert_eq!(err.kind(), ErrorKind::Empty);
}

#[test]
fn test_flag_annotations_show_up_in_listings() {
    let mut service = service();
    service
        .flag("funny_dogs_video_id", Some("barking".to_string()))
        .unwrap();

    let listed = service.list_videos();
    let dogs = listed
        .iter()
        .find(|v| v.id == VideoId::from("funny_dogs_video_id"))
        .unwrap();
    assert_eq!(dogs.flag_reason.as_deref(), Some("barking"));
}
