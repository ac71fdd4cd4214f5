//! Centralized configuration for Marquee.
//!
//! All tunable parameters live here rather than as literals scattered
//! through the codebase.

use std::path::PathBuf;

/// Central configuration for all Marquee components.
#[derive(Debug, Clone, Default)]
pub struct MarqueeConfig {
    pub library: LibraryConfig,
    pub playback: PlaybackConfig,
}

/// Library data-source configuration.
#[derive(Debug, Clone, Default)]
pub struct LibraryConfig {
    /// Path to a library JSON file; `None` means the caller's built-in
    /// library is used.
    pub path: Option<PathBuf>,
}

/// Playback behavior configuration.
#[derive(Debug, Clone)]
pub struct PlaybackConfig {
    /// Seed for random-play selection (None = OS entropy). Pinning the seed
    /// makes random play deterministic for tests.
    pub random_seed: Option<u64>,
    /// Reason recorded when a video is flagged without one.
    pub default_flag_reason: &'static str,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            random_seed: None,
            default_flag_reason: "Not supplied",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MarqueeConfig::default();
        assert!(config.library.path.is_none());
        assert!(config.playback.random_seed.is_none());
        assert_eq!(config.playback.default_flag_reason, "Not supplied");
    }
}
