//! Error types for catalog commands and library loading.

use thiserror::Error;

use crate::video::VideoId;

/// Broad classification of command failures.
///
/// Every [`CommandError`] maps onto exactly one kind, so shells can branch
/// on the category without matching individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A video id or playlist name did not resolve.
    NotFound,
    /// A playlist with a case-insensitively equal name already exists.
    DuplicateName,
    /// The target is already in the requested state.
    AlreadyInState,
    /// The operation is blocked because the target video is flagged.
    Forbidden,
    /// Nothing to operate on.
    Empty,
}

/// Recoverable failures reported by [`crate::service::PlayerService`].
///
/// These are expected outcomes, not faults: validation always precedes
/// mutation, so a returned error means no state changed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("video {video_id} does not exist")]
    VideoNotFound { video_id: VideoId },

    #[error("playlist {name} does not exist")]
    PlaylistNotFound { name: String },

    #[error("a playlist with the same name already exists")]
    DuplicatePlaylist { name: String },

    #[error("video is currently flagged (reason: {reason})")]
    VideoFlagged { video_id: VideoId, reason: String },

    #[error("video is already flagged")]
    AlreadyFlagged { video_id: VideoId },

    #[error("video is not flagged")]
    NotFlagged { video_id: VideoId },

    #[error("video already added to playlist {playlist}")]
    AlreadyInPlaylist { playlist: String, video_id: VideoId },

    #[error("video is not in playlist {playlist}")]
    NotInPlaylist { playlist: String, video_id: VideoId },

    #[error("no video is currently playing")]
    NothingPlaying,

    #[error("video is already paused")]
    AlreadyPaused { video_id: VideoId },

    #[error("video is not paused")]
    NotPaused { video_id: VideoId },

    #[error("no videos available")]
    NoPlayableVideos,
}

impl CommandError {
    /// Returns the taxonomy bucket this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CommandError::VideoNotFound { .. } | CommandError::PlaylistNotFound { .. } => {
                ErrorKind::NotFound
            }
            CommandError::DuplicatePlaylist { .. } => ErrorKind::DuplicateName,
            CommandError::VideoFlagged { .. } => ErrorKind::Forbidden,
            CommandError::AlreadyFlagged { .. }
            | CommandError::NotFlagged { .. }
            | CommandError::AlreadyInPlaylist { .. }
            | CommandError::NotInPlaylist { .. }
            | CommandError::NothingPlaying
            | CommandError::AlreadyPaused { .. }
            | CommandError::NotPaused { .. } => ErrorKind::AlreadyInState,
            CommandError::NoPlayableVideos => ErrorKind::Empty,
        }
    }
}

/// Failures while reading the library data source into a catalog.
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("failed to read library file")]
    Io(#[from] std::io::Error),

    #[error("failed to parse library data")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate video id {video_id} in library data")]
    DuplicateVideoId { video_id: VideoId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_classification() {
        let err = CommandError::VideoNotFound {
            video_id: VideoId::from("missing_id"),
        };
        assert_eq!(err.kind(), ErrorKind::NotFound);

        let err = CommandError::DuplicatePlaylist {
            name: "fun".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::DuplicateName);

        let err = CommandError::VideoFlagged {
            video_id: VideoId::from("cat_id"),
            reason: "dont_watch".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Forbidden);

        assert_eq!(CommandError::NothingPlaying.kind(), ErrorKind::AlreadyInState);
        assert_eq!(CommandError::NoPlayableVideos.kind(), ErrorKind::Empty);
    }

    #[test]
    fn test_flagged_error_carries_reason() {
        let err = CommandError::VideoFlagged {
            video_id: VideoId::from("cat_id"),
            reason: "Not supplied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "video is currently flagged (reason: Not supplied)"
        );
    }
}
