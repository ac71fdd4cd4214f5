//! Search ranking and the shell's follow-up selection contract.

use marquee_core::config::MarqueeConfig;
use marquee_core::service::PlayerService;
use marquee_core::{library, VideoId};

const LIBRARY: &str = r##"[
    { "id": "another_cat_video_id", "title": "Another Cat Video", "tags": ["#cat", "#animal"] },
    { "id": "amazing_cats_video_id", "title": "Amazing Cats", "tags": ["#cat", "#animal"] },
    { "id": "funny_dogs_video_id", "title": "Funny Dogs", "tags": ["#dog", "#animal"] },
    { "id": "life_at_google_video_id", "title": "Life at Google", "tags": ["#google", "#career"] }
]"##;

fn service() -> PlayerService {
    let catalog = library::load_from_str(LIBRARY).unwrap();
    PlayerService::new(catalog, &MarqueeConfig::default())
}

#[test]
fn test_title_search_ranks_case_insensitively() {
    let service = service();
    let hits = service.search("cat");
    let titles: Vec<&str> = hits.iter().map(|h| h.title.as_str()).collect();
    assert_eq!(titles, vec!["Amazing Cats", "Another Cat Video"]);
}

#[test]
fn test_search_misses_are_empty_not_errors() {
    let service = service();
    assert!(service.search("zebra").is_empty());
    assert!(service.search_by_tag("#zebra").is_empty());
}

#[test]
fn test_tag_search_needs_the_hash_prefix() {
    let service = service();
    assert!(service.search_by_tag("animal").is_empty());

    let hits = service.search_by_tag("#animal");
    let titles: Vec<&str> = hits.iter().map(|h| h.title.as_str()).collect();
    assert_eq!(titles, vec!["Amazing Cats", "Another Cat Video", "Funny Dogs"]);
}

#[test]
fn test_flagged_videos_never_rank() {
    let mut service = service();
    service.flag("amazing_cats_video_id", None).unwrap();

    let hits = service.search("cat");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Another Cat Video");

    let hits = service.search_by_tag("#cat");
    assert_eq!(hits.len(), 1);
}

#[test]
fn test_selection_plays_the_numbered_result() {
    let mut service = service();
    let hits = service.search("cat");

    // The shell maps a 1-based answer onto the hit list and calls play.
    let selection = 2usize;
    let hit = &hits[selection - 1];
    let outcome = service.play(hit.id.as_str()).unwrap();
    assert_eq!(outcome.started.id, VideoId::from("another_cat_video_id"));
}

#[test]
fn test_out_of_range_selection_maps_to_none() {
    let service = service();
    let hits = service.search("cat");

    // Mirrors the shell's index math for a too-large answer.
    let selection = hits.len() + 1;
    assert!(selection.checked_sub(1).and_then(|i| hits.get(i)).is_none());
}
