//! Title and tag search over the available catalog.
//!
//! Flagged videos never appear in results. Results are sorted
//! case-insensitively by title; the sort is stable, so videos with equal
//! titles keep their catalog order.

use crate::catalog::Catalog;
use crate::video::Video;

/// Case-insensitive substring match on titles.
pub fn by_title<'a>(catalog: &'a Catalog, term: &str) -> Vec<&'a Video> {
    let term = term.to_lowercase();
    let hits = catalog
        .non_flagged()
        .into_iter()
        .filter(|v| v.title().to_lowercase().contains(&term))
        .collect();
    sorted_by_title(hits)
}

/// Exact case-insensitive tag match.
///
/// Tags are `#`-prefixed throughout the library, so a query without the
/// leading `#` matches nothing. That is the contract, not an error.
pub fn by_tag<'a>(catalog: &'a Catalog, tag: &str) -> Vec<&'a Video> {
    if !tag.starts_with('#') {
        return Vec::new();
    }
    let hits = catalog
        .non_flagged()
        .into_iter()
        .filter(|v| v.has_tag(tag))
        .collect();
    sorted_by_title(hits)
}

pub(crate) fn sorted_by_title(mut videos: Vec<&Video>) -> Vec<&Video> {
    videos.sort_by_key(|v| v.title().to_lowercase());
    videos
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::video::{VideoId, VideoRecord};

    fn catalog() -> Catalog {
        let records = vec![
            VideoRecord {
                id: VideoId::from("funny_dogs_video_id"),
                title: "Funny Dogs".to_string(),
                tags: vec!["#dog".to_string(), "#animal".to_string()],
            },
            VideoRecord {
                id: VideoId::from("amazing_cats_video_id"),
                title: "Amazing Cats".to_string(),
                tags: vec!["#cat".to_string(), "#animal".to_string()],
            },
            VideoRecord {
                id: VideoId::from("another_cat_video_id"),
                title: "Another Cat Video".to_string(),
                tags: vec!["#cat".to_string()],
            },
        ];
        Catalog::from_records(records).unwrap()
    }

    #[test]
    fn test_title_search_is_case_insensitive_and_sorted() {
        let catalog = catalog();
        let results = by_title(&catalog, "CAT");
        let titles: Vec<&str> = results.iter().map(|v| v.title()).collect();
        assert_eq!(titles, vec!["Amazing Cats", "Another Cat Video"]);
    }

    #[test]
    fn test_title_search_misses_return_empty() {
        let catalog = catalog();
        assert!(by_title(&catalog, "blah").is_empty());
    }

    #[test]
    fn test_tag_search_requires_leading_hash() {
        let catalog = catalog();
        assert_eq!(by_tag(&catalog, "#animal").len(), 2);
        assert!(by_tag(&catalog, "animal").is_empty());
    }

    #[test]
    fn test_tag_search_matches_whole_tags_only() {
        let catalog = catalog();
        assert!(by_tag(&catalog, "#ani").is_empty());
        assert_eq!(by_tag(&catalog, "#ANIMAL").len(), 2);
    }
}
