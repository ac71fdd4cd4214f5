//! Integration tests for Marquee
//!
//! These tests drive the public service API the way the shell does,
//! covering cross-module flows: playback against the session, playlist
//! management against the catalog, flagging side effects, and search.

#[path = "integration/playback_flow.rs"]
mod playback_flow;

#[path = "integration/flagging.rs"]
mod flagging;

#[path = "integration/playlist_management.rs"]
mod playlist_management;

#[path = "integration/search_and_selection.rs"]
mod search_and_selection;

#[path = "integration/library_loading.rs"]
mod library_loading;

#[path = "integration/properties.rs"]
mod properties;
