//! Loading the catalog from a library file.

use std::io::Write;

use marquee_core::config::MarqueeConfig;
use marquee_core::errors::LibraryError;
use marquee_core::library;
use marquee_core::service::PlayerService;

#[test]
fn test_catalog_from_file_drives_the_service() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r##"[
            {{ "id": "amazing_cats_video_id", "title": "Amazing Cats", "tags": ["#cat"] }},
            {{ "id": "funny_dogs_video_id", "title": "Funny Dogs", "tags": ["#dog"] }}
        ]"##
    )
    .unwrap();

    let catalog = library::load_from_path(file.path()).unwrap();
    let mut service = PlayerService::new(catalog, &MarqueeConfig::default());

    assert_eq!(service.video_count(), 2);
    let outcome = service.play("amazing_cats_video_id").unwrap();
    assert_eq!(outcome.started.title, "Amazing Cats");
}

#[test]
fn test_duplicate_ids_in_the_source_are_rejected() {
    let data = r#"[
        { "id": "same_id", "title": "First" },
        { "id": "same_id", "title": "Second" }
    ]"#;
    let err = library::load_from_str(data).unwrap_err();
    assert!(matches!(err, LibraryError::DuplicateVideoId { video_id } if video_id.as_str() == "same_id"));
}

#[test]
fn test_malformed_source_is_a_parse_error() {
    assert!(matches!(
        library::load_from_str("{ not a list }"),
        Err(LibraryError::Parse(_))
    ));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    assert!(matches!(
        library::load_from_path(&missing),
        Err(LibraryError::Io(_))
    ));
}
