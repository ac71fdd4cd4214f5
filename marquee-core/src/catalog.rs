//! The fixed, load-time-populated video catalog.

use std::collections::HashMap;

use crate::errors::LibraryError;
use crate::video::{Video, VideoId, VideoRecord};

/// All videos known to the system, keyed by id.
///
/// Membership is immutable after construction; the only mutation that ever
/// reaches a contained video is the flag toggle, and that goes through the
/// crate-internal accessor. Iteration preserves load order, which doubles as
/// the stable tie-break order for search results.
#[derive(Debug, Default)]
pub struct Catalog {
    videos: Vec<Video>,
    index: HashMap<VideoId, usize>,
}

impl Catalog {
    /// Builds a catalog from data-source records.
    ///
    /// # Errors
    /// - `LibraryError::DuplicateVideoId` - Two records share an id
    pub fn from_records(records: Vec<VideoRecord>) -> Result<Self, LibraryError> {
        let mut catalog = Catalog::default();
        for record in records {
            if catalog.index.contains_key(&record.id) {
                return Err(LibraryError::DuplicateVideoId {
                    video_id: record.id,
                });
            }
            catalog
                .index
                .insert(record.id.clone(), catalog.videos.len());
            catalog.videos.push(Video::from_record(record));
        }
        Ok(catalog)
    }

    /// All videos, in load order.
    pub fn all(&self) -> &[Video] {
        &self.videos
    }

    /// Videos currently available for playback, in load order.
    pub fn non_flagged(&self) -> Vec<&Video> {
        self.videos.iter().filter(|v| !v.is_flagged()).collect()
    }

    /// Looks up a video by exact id.
    pub fn get(&self, id: &VideoId) -> Option<&Video> {
        self.index.get(id).map(|&i| &self.videos[i])
    }

    pub(crate) fn get_mut(&mut self, id: &VideoId) -> Option<&mut Video> {
        self.index.get(id).map(|&i| &mut self.videos[i])
    }

    /// Number of videos in the catalog.
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    /// Whether the catalog holds no videos at all.
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, title: &str) -> VideoRecord {
        VideoRecord {
            id: VideoId::from(id),
            title: title.to_string(),
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let catalog =
            Catalog::from_records(vec![record("amazing_cats_video_id", "Amazing Cats")]).unwrap();

        assert!(catalog.get(&VideoId::from("amazing_cats_video_id")).is_some());
        assert!(catalog.get(&VideoId::from("Amazing_Cats_Video_Id")).is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::from_records(vec![
            record("some_id", "First"),
            record("some_id", "Second"),
        ]);
        assert!(matches!(
            result,
            Err(LibraryError::DuplicateVideoId { video_id }) if video_id.as_str() == "some_id"
        ));
    }

    #[test]
    fn test_non_flagged_excludes_flagged() {
        let mut catalog = Catalog::from_records(vec![
            record("cat_id", "Amazing Cats"),
            record("dog_id", "Funny Dogs"),
        ])
        .unwrap();

        assert_eq!(catalog.non_flagged().len(), 2);

        catalog
            .get_mut(&VideoId::from("cat_id"))
            .unwrap()
            .set_flag("dont_watch".to_string());

        let available = catalog.non_flagged();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].id().as_str(), "dog_id");
    }

    #[test]
    fn test_all_preserves_load_order() {
        let catalog = Catalog::from_records(vec![
            record("z_id", "Zebras"),
            record("a_id", "Antelopes"),
        ])
        .unwrap();

        let ids: Vec<&str> = catalog.all().iter().map(|v| v.id().as_str()).collect();
        assert_eq!(ids, vec!["z_id", "a_id"]);
    }
}
