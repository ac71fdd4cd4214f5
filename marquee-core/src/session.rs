//! The single-slot playback session state machine.

use crate::errors::CommandError;
use crate::video::VideoId;

/// Where the session currently is.
///
/// Carrying the video id inside the state makes "paused with nothing
/// playing" unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// Nothing is loaded in the playback slot.
    #[default]
    Idle,
    /// The given video is playing.
    Playing(VideoId),
    /// The given video is loaded but paused.
    Paused(VideoId),
}

/// Tracks the one video (if any) occupying the playback slot.
///
/// Flag validation happens upstream in the service layer, which is the only
/// component that can see both the session and the flag state; by the time
/// `play` is called the video is known to be playable.
#[derive(Debug, Default)]
pub struct PlayerSession {
    state: PlaybackState,
}

impl PlayerSession {
    /// Creates an idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current playback state.
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// The id loaded in the slot, playing or paused.
    pub fn now_playing(&self) -> Option<&VideoId> {
        match &self.state {
            PlaybackState::Idle => None,
            PlaybackState::Playing(id) | PlaybackState::Paused(id) => Some(id),
        }
    }

    /// Whether the loaded video is paused.
    pub fn is_paused(&self) -> bool {
        matches!(self.state, PlaybackState::Paused(_))
    }

    /// Starts playing a video, displacing whatever was loaded.
    ///
    /// Returns the id that was playing or paused before, so the caller can
    /// report the implicit stop.
    pub fn play(&mut self, id: VideoId) -> Option<VideoId> {
        match std::mem::replace(&mut self.state, PlaybackState::Playing(id)) {
            PlaybackState::Idle => None,
            PlaybackState::Playing(prev) | PlaybackState::Paused(prev) => Some(prev),
        }
    }

    /// Stops playback, returning the id that was loaded.
    ///
    /// # Errors
    /// - `CommandError::NothingPlaying` - The session was already idle
    pub fn stop(&mut self) -> Result<VideoId, CommandError> {
        match std::mem::take(&mut self.state) {
            PlaybackState::Idle => Err(CommandError::NothingPlaying),
            PlaybackState::Playing(id) | PlaybackState::Paused(id) => Ok(id),
        }
    }

    /// Pauses the playing video, returning its id.
    ///
    /// # Errors
    /// - `CommandError::NothingPlaying` - The session is idle
    /// - `CommandError::AlreadyPaused` - The loaded video is already paused
    pub fn pause(&mut self) -> Result<VideoId, CommandError> {
        match &self.state {
            PlaybackState::Idle => Err(CommandError::NothingPlaying),
            PlaybackState::Paused(id) => Err(CommandError::AlreadyPaused {
                video_id: id.clone(),
            }),
            PlaybackState::Playing(id) => {
                let id = id.clone();
                self.state = PlaybackState::Paused(id.clone());
                Ok(id)
            }
        }
    }

    /// Resumes the paused video, returning its id.
    ///
    /// # Errors
    /// - `CommandError::NothingPlaying` - The session is idle
    /// - `CommandError::NotPaused` - The loaded video is not paused
    pub fn resume(&mut self) -> Result<VideoId, CommandError> {
        match &self.state {
            PlaybackState::Idle => Err(CommandError::NothingPlaying),
            PlaybackState::Playing(id) => Err(CommandError::NotPaused {
                video_id: id.clone(),
            }),
            PlaybackState::Paused(id) => {
                let id = id.clone();
                self.state = PlaybackState::Playing(id.clone());
                Ok(id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> VideoId {
        VideoId::from(s)
    }

    #[test]
    fn test_starts_idle() {
        let session = PlayerSession::new();
        assert_eq!(*session.state(), PlaybackState::Idle);
        assert_eq!(session.now_playing(), None);
        assert!(!session.is_paused());
    }

    #[test]
    fn test_play_displaces_previous_video() {
        let mut session = PlayerSession::new();
        assert_eq!(session.play(id("cat_id")), None);
        assert_eq!(session.play(id("dog_id")), Some(id("cat_id")));
        assert_eq!(session.now_playing(), Some(&id("dog_id")));
        assert!(!session.is_paused());
    }

    #[test]
    fn test_play_displaces_paused_video_too() {
        let mut session = PlayerSession::new();
        session.play(id("cat_id"));
        session.pause().unwrap();
        assert_eq!(session.play(id("dog_id")), Some(id("cat_id")));
        assert!(!session.is_paused());
    }

    #[test]
    fn test_stop_from_idle_is_signaled() {
        let mut session = PlayerSession::new();
        assert_eq!(session.stop(), Err(CommandError::NothingPlaying));
    }

    #[test]
    fn test_play_then_stop_returns_to_idle() {
        let mut session = PlayerSession::new();
        session.play(id("cat_id"));
        assert_eq!(session.stop(), Ok(id("cat_id")));
        assert_eq!(*session.state(), PlaybackState::Idle);
    }

    #[test]
    fn test_pause_twice_reports_already_paused() {
        let mut session = PlayerSession::new();
        session.play(id("cat_id"));
        assert_eq!(session.pause(), Ok(id("cat_id")));
        assert_eq!(
            session.pause(),
            Err(CommandError::AlreadyPaused {
                video_id: id("cat_id")
            })
        );
        assert!(session.is_paused());
    }

    #[test]
    fn test_resume_requires_paused() {
        let mut session = PlayerSession::new();
        assert_eq!(session.resume(), Err(CommandError::NothingPlaying));

        session.play(id("cat_id"));
        assert_eq!(
            session.resume(),
            Err(CommandError::NotPaused {
                video_id: id("cat_id")
            })
        );

        session.pause().unwrap();
        assert_eq!(session.resume(), Ok(id("cat_id")));
        assert!(!session.is_paused());
    }

    #[test]
    fn test_pause_requires_playing() {
        let mut session = PlayerSession::new();
        assert_eq!(session.pause(), Err(CommandError::NothingPlaying));
    }
}
