//! Playlist CRUD against the registry and catalog.

use marquee_core::config::MarqueeConfig;
use marquee_core::errors::{CommandError, ErrorKind};
use marquee_core::service::PlayerService;
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
fn test_create_rejects_case_insensitive_duplicates() {
    let mut service = service();

    assert_eq!(service.create_playlist("Fun").unwrap(), "Fun");
    let err = service.create_playlist("fun").unwrap_err();
    assert_eq!(
        err,
        CommandError::DuplicatePlaylist {
            name: "fun".to_string(),
        }
    );
    assert_eq!(err.kind(), ErrorKind::DuplicateName);

    // The stored playlist keeps its original casing.
    assert_eq!(service.playlist_names(), vec!["Fun".to_string()]);
}

#[test]
fn test_membership_is_by_id_and_idempotent() {
    let mut service = service();
    service.create_playlist("road_trip").unwrap();

    service
        .add_to_playlist("road_trip", "amazing_cats_video_id")
        .unwrap();
    let err = service
        .add_to_playlist("ROAD_TRIP", "amazing_cats_video_id")
        .unwrap_err();
    assert!(matches!(err, CommandError::AlreadyInPlaylist { .. }));

    let videos = service.playlist_videos("road_trip").unwrap();
    assert_eq!(videos.len(), 1);
}

#[test]
fn test_add_preserves_insertion_order() {
    let mut service = service();
    service.create_playlist("mix").unwrap();
    service
        .add_to_playlist("mix", "funny_dogs_video_id")
        .unwrap();
    service
        .add_to_playlist("mix", "amazing_cats_video_id")
        .unwrap();

    let ids: Vec<VideoId> = service
        .playlist_videos("mix")
        .unwrap()
        .into_iter()
        .map(|v| v.id)
        .collect();
    assert_eq!(
        ids,
        vec![
            VideoId::from("funny_dogs_video_id"),
            VideoId::from("amazing_cats_video_id"),
        ]
    );
}

#[test]
fn test_flagged_videos_cannot_be_added() {
    let mut service = service();
    service.create_playlist("mix").unwrap();
    service
        .flag("amazing_cats_video_id", Some("dont_watch".to_string()))
        .unwrap();

    let err = service
        .add_to_playlist("mix", "amazing_cats_video_id")
        .unwrap_err();
    assert_eq!(
        err,
        CommandError::VideoFlagged {
            video_id: VideoId::from("amazing_cats_video_id"),
            reason: "dont_watch".to_string(),
        }
    );
    assert!(service.playlist_videos("mix").unwrap().is_empty());
}

#[test]
fn test_existing_membership_survives_flagging() {
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
fn test_remove_clear_delete_lifecycle() {
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
    let err = service.delete_playlist("mix").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    // Deleting frees the name for re-use.
    service.create_playlist("MIX").unwrap();
}

#[test]
fn test_operations_on_missing_playlists_fail_first() {
    let mut service = service();

    // The playlist check precedes the video check.
    let err = service.add_to_playlist("nope", "also_nope").unwrap_err();
    assert!(matches!(err, CommandError::PlaylistNotFound { .. }));

    let err = service.remove_from_playlist("nope", "also_nope").unwrap_err();
    assert!(matches!(err, CommandError::PlaylistNotFound { .. }));

    assert!(matches!(
        service.clear_playlist("nope"),
        Err(CommandError::PlaylistNotFound { .. })
    ));
    assert!(matches!(
        service.playlist_videos("nope"),
        Err(CommandError::PlaylistNotFound { .. })
    ));
}
