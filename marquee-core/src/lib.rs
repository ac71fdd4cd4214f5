//! Marquee Core - In-memory video catalog and playback management
//!
//! This crate provides the command-handling layer of Marquee: a fixed
//! catalog of videos, a single-slot playback session, named playlists,
//! title/tag search, and flag/unflag moderation. Everything here is pure
//! decision and mutation logic. Data ingestion, text rendering, and input
//! capture belong to the shell.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod library;
pub mod playlist;
pub mod search;
pub mod service;
pub mod session;
pub mod tracing_setup;
pub mod video;

// Re-export main types for convenient access
pub use catalog::Catalog;
pub use config::MarqueeConfig;
pub use errors::{CommandError, ErrorKind, LibraryError};
pub use playlist::{Playlist, PlaylistRegistry};
pub use service::{FlagOutcome, ListedVideo, PlayOutcome, PlayerService, SearchHit, VideoRef};
pub use session::{PlaybackState, PlayerSession};
pub use video::{Video, VideoId, VideoRecord};

/// Convenience type alias for Results with CommandError.
pub type Result<T> = std::result::Result<T, CommandError>;
