//! Playlists and the registry that owns them.

use std::collections::HashMap;

use crate::errors::CommandError;
use crate::video::VideoId;

/// A named, ordered, duplicate-free collection of video references.
///
/// The playlist holds bare ids; the videos themselves are owned by the
/// catalog and resolved on demand, so a playlist can never hold state that
/// diverges from the library.
#[derive(Debug)]
pub struct Playlist {
    name: String,
    video_ids: Vec<VideoId>,
}

impl Playlist {
    fn new(name: String) -> Self {
        Self {
            name,
            video_ids: Vec::new(),
        }
    }

    /// The name as given at creation time (original casing).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The contained video ids, in insertion order.
    pub fn video_ids(&self) -> &[VideoId] {
        &self.video_ids
    }

    /// Whether the playlist contains the given video.
    pub fn contains(&self, id: &VideoId) -> bool {
        self.video_ids.contains(id)
    }

    /// Appends a video. Returns false (without mutating) if already present.
    pub fn add(&mut self, id: VideoId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.video_ids.push(id);
        true
    }

    /// Removes a video. Returns false if it was not present.
    pub fn remove(&mut self, id: &VideoId) -> bool {
        let before = self.video_ids.len();
        self.video_ids.retain(|existing| existing != id);
        self.video_ids.len() != before
    }

    /// Removes all videos.
    pub fn clear(&mut self) {
        self.video_ids.clear();
    }

    /// Number of videos in the playlist.
    pub fn len(&self) -> usize {
        self.video_ids.len()
    }

    /// Whether the playlist holds no videos.
    pub fn is_empty(&self) -> bool {
        self.video_ids.is_empty()
    }
}

/// Owns all playlists and enforces case-insensitive unique naming.
///
/// Keys are lowercased names; the original casing lives on the playlist for
/// display. Iteration order is unspecified; callers sort for presentation.
#[derive(Debug, Default)]
pub struct PlaylistRegistry {
    playlists: HashMap<String, Playlist>,
}

impl PlaylistRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty playlist under the given name.
    ///
    /// # Errors
    /// - `CommandError::DuplicatePlaylist` - A case-insensitively equal name exists
    pub fn create(&mut self, name: &str) -> Result<&Playlist, CommandError> {
        let key = name.to_lowercase();
        if self.playlists.contains_key(&key) {
            return Err(CommandError::DuplicatePlaylist {
                name: name.to_string(),
            });
        }
        tracing::debug!("created playlist {name}");
        Ok(self
            .playlists
            .entry(key)
            .or_insert_with(|| Playlist::new(name.to_string())))
    }

    /// Case-insensitive lookup.
    pub fn find(&self, name: &str) -> Option<&Playlist> {
        self.playlists.get(&name.to_lowercase())
    }

    /// Case-insensitive lookup, mutable.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Playlist> {
        self.playlists.get_mut(&name.to_lowercase())
    }

    /// Deletes a playlist. Returns false if no such playlist exists.
    pub fn delete(&mut self, name: &str) -> bool {
        let deleted = self.playlists.remove(&name.to_lowercase()).is_some();
        if deleted {
            tracing::debug!("deleted playlist {name}");
        }
        deleted
    }

    /// Display names of all playlists, in unspecified order.
    pub fn names(&self) -> Vec<&str> {
        self.playlists.values().map(Playlist::name).collect()
    }

    /// Number of playlists.
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    /// Whether no playlists exist.
    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent_on_membership() {
        let mut registry = PlaylistRegistry::new();
        registry.create("road_trip").unwrap();

        let playlist = registry.find_mut("road_trip").unwrap();
        assert!(playlist.add(VideoId::from("cat_id")));
        assert!(!playlist.add(VideoId::from("cat_id")));
        assert_eq!(playlist.len(), 1);
    }

    #[test]
    fn test_remove_reports_absence() {
        let mut registry = PlaylistRegistry::new();
        registry.create("road_trip").unwrap();

        let playlist = registry.find_mut("road_trip").unwrap();
        playlist.add(VideoId::from("cat_id"));
        assert!(playlist.remove(&VideoId::from("cat_id")));
        assert!(!playlist.remove(&VideoId::from("cat_id")));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut registry = PlaylistRegistry::new();
        registry.create("mix").unwrap();

        let playlist = registry.find_mut("mix").unwrap();
        playlist.add(VideoId::from("b_id"));
        playlist.add(VideoId::from("a_id"));
        playlist.add(VideoId::from("c_id"));

        let ids: Vec<&str> = playlist.video_ids().iter().map(VideoId::as_str).collect();
        assert_eq!(ids, vec!["b_id", "a_id", "c_id"]);
    }

    #[test]
    fn test_duplicate_names_differ_only_in_case() {
        let mut registry = PlaylistRegistry::new();
        registry.create("Fun").unwrap();

        let err = registry.create("fun").unwrap_err();
        assert!(matches!(err, CommandError::DuplicatePlaylist { .. }));
    }

    #[test]
    fn test_original_casing_preserved_for_display() {
        let mut registry = PlaylistRegistry::new();
        registry.create("RoadTrip").unwrap();

        assert_eq!(registry.find("roadtrip").unwrap().name(), "RoadTrip");
        assert_eq!(registry.names(), vec!["RoadTrip"]);
    }

    #[test]
    fn test_delete_frees_the_name() {
        let mut registry = PlaylistRegistry::new();
        registry.create("Fun").unwrap();
        assert!(registry.delete("FUN"));
        assert!(registry.is_empty());
        assert!(registry.create("fun").is_ok());
    }
}
