//! CLI command implementations and outcome rendering.
//!
//! The core returns structured outcomes; everything human-readable about
//! them is produced here.

use clap::Subcommand;
use marquee_core::service::{ListedVideo, PlayOutcome, PlayerService, SearchHit};

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play a video by id
    Play {
        /// Video id, exactly as listed
        video_id: String,
    },
    /// Play a random available video
    Random,
    /// Stop the current video
    Stop,
    /// Pause the current video
    Pause,
    /// Continue a paused video
    Continue,
    /// Show what is currently playing
    Playing,
    /// List all videos in the library
    List,
    /// Show how many videos the library holds
    Count,
    /// Search videos by title
    Search {
        /// Case-insensitive substring of the title
        term: String,
    },
    /// Search videos by tag
    Tag {
        /// Tag to match, including the leading '#'
        tag: String,
    },
    /// Flag a video as unavailable
    Flag {
        /// Video id, exactly as listed
        video_id: String,
        /// Reason for the flag
        reason: Option<String>,
    },
    /// Remove the flag from a video
    Allow {
        /// Video id, exactly as listed
        video_id: String,
    },
    /// Manage playlists
    #[command(subcommand)]
    Playlist(PlaylistCommands),
}

/// Playlist management subcommands
#[derive(Debug, Subcommand)]
pub enum PlaylistCommands {
    /// Create a new empty playlist
    Create { name: String },
    /// Add a video to a playlist
    Add { name: String, video_id: String },
    /// Remove a video from a playlist
    Remove { name: String, video_id: String },
    /// Remove all videos from a playlist
    Clear { name: String },
    /// Delete a playlist
    Delete { name: String },
    /// Show the videos of a playlist
    Show { name: String },
    /// List all playlists
    List,
}

/// Handle a one-shot CLI command.
pub fn handle_command(service: &mut PlayerService, command: Commands) {
    match command {
        Commands::Play { video_id } => play(service, &video_id),
        Commands::Random => play_random(service),
        Commands::Stop => stop(service),
        Commands::Pause => pause(service),
        Commands::Continue => resume(service),
        Commands::Playing => show_playing(service),
        Commands::List => list_videos(service),
        Commands::Count => println!("{} videos in the library", service.video_count()),
        Commands::Search { term } => {
            search_results(&term, &service.search(&term));
        }
        Commands::Tag { tag } => {
            search_results(&tag, &service.search_by_tag(&tag));
        }
        Commands::Flag { video_id, reason } => flag(service, &video_id, reason),
        Commands::Allow { video_id } => allow(service, &video_id),
        Commands::Playlist(command) => handle_playlist_command(service, command),
    }
}

/// Handle a playlist management subcommand.
pub fn handle_playlist_command(service: &mut PlayerService, command: PlaylistCommands) {
    match command {
        PlaylistCommands::Create { name } => match service.create_playlist(&name) {
            Ok(name) => println!("Successfully created new playlist: {name}"),
            Err(err) => println!("Cannot create playlist: {err}"),
        },
        PlaylistCommands::Add { name, video_id } => {
            match service.add_to_playlist(&name, &video_id) {
                Ok(video) => println!("Added video to {name}: {}", video.title),
                Err(err) => println!("Cannot add video to {name}: {err}"),
            }
        }
        PlaylistCommands::Remove { name, video_id } => {
            match service.remove_from_playlist(&name, &video_id) {
                Ok(video) => println!("Removed video from {name}: {}", video.title),
                Err(err) => println!("Cannot remove video from {name}: {err}"),
            }
        }
        PlaylistCommands::Clear { name } => match service.clear_playlist(&name) {
            Ok(()) => println!("Successfully removed all videos from {name}"),
            Err(err) => println!("Cannot clear playlist {name}: {err}"),
        },
        PlaylistCommands::Delete { name } => match service.delete_playlist(&name) {
            Ok(()) => println!("Deleted playlist: {name}"),
            Err(err) => println!("Cannot delete playlist {name}: {err}"),
        },
        PlaylistCommands::Show { name } => show_playlist(service, &name),
        PlaylistCommands::List => list_playlists(service),
    }
}

pub fn play(service: &mut PlayerService, video_id: &str) {
    match service.play(video_id) {
        Ok(outcome) => print_play_outcome(&outcome),
        Err(err) => println!("Cannot play video: {err}"),
    }
}

pub fn play_random(service: &mut PlayerService) {
    match service.play_random() {
        Ok(outcome) => print_play_outcome(&outcome),
        Err(err) => println!("Cannot play video: {err}"),
    }
}

fn print_play_outcome(outcome: &PlayOutcome) {
    if let Some(stopped) = &outcome.stopped {
        println!("Stopping video: {}", stopped.title);
    }
    println!("Playing video: {}", outcome.started.title);
}

pub fn stop(service: &mut PlayerService) {
    match service.stop() {
        Ok(video) => println!("Stopping video: {}", video.title),
        Err(err) => println!("Cannot stop video: {err}"),
    }
}

pub fn pause(service: &mut PlayerService) {
    match service.pause() {
        Ok(video) => println!("Pausing video: {}", video.title),
        Err(err) => println!("Cannot pause video: {err}"),
    }
}

pub fn resume(service: &mut PlayerService) {
    match service.resume() {
        Ok(video) => println!("Continuing video: {}", video.title),
        Err(err) => println!("Cannot continue video: {err}"),
    }
}

pub fn show_playing(service: &PlayerService) {
    match service.now_playing() {
        Some(video) => println!("Currently playing: {}", video_line(&video)),
        None => println!("No video is currently playing"),
    }
}

pub fn flag(service: &mut PlayerService, video_id: &str, reason: Option<String>) {
    match service.flag(video_id, reason) {
        Ok(outcome) => {
            if outcome.stopped_playback {
                println!("Stopping video: {}", outcome.video.title);
            }
            println!(
                "Successfully flagged video: {} (reason: {})",
                outcome.video.title, outcome.reason
            );
        }
        Err(err) => println!("Cannot flag video: {err}"),
    }
}

pub fn allow(service: &mut PlayerService, video_id: &str) {
    match service.unflag(video_id) {
        Ok(video) => println!("Successfully removed flag from video: {}", video.title),
        Err(err) => println!("Cannot remove flag from video: {err}"),
    }
}

pub fn list_videos(service: &PlayerService) {
    let videos = service.list_videos();
    if videos.is_empty() {
        println!("No videos available");
        return;
    }
    println!("Here's a list of all available videos:");
    for video in &videos {
        println!("  {}", video_line(video));
    }
}

pub fn list_playlists(service: &PlayerService) {
    let mut names = service.playlist_names();
    if names.is_empty() {
        println!("No playlists exist yet");
        return;
    }
    names.sort_by_key(|name| name.to_lowercase());
    println!("Showing all playlists:");
    for name in names {
        println!("  {name}");
    }
}

pub fn show_playlist(service: &PlayerService, name: &str) {
    match service.playlist_videos(name) {
        Ok(videos) => {
            println!("Showing playlist: {name}");
            if videos.is_empty() {
                println!("  No videos here yet");
            }
            for video in &videos {
                println!("  {}", video_line(video));
            }
        }
        Err(err) => println!("Cannot show playlist {name}: {err}"),
    }
}

/// Print numbered search results. Returns true when there was anything to show.
pub fn search_results(query: &str, hits: &[SearchHit]) -> bool {
    if hits.is_empty() {
        println!("No search results for {query}");
        return false;
    }
    println!("Here are the results for {query}:");
    for (position, hit) in hits.iter().enumerate() {
        println!("  {}) {}", position + 1, hit_line(hit));
    }
    true
}

fn hit_line(hit: &SearchHit) -> String {
    format!("{} ({}) [{}]", hit.title, hit.id, hit.tags.join(" "))
}

fn video_line(video: &ListedVideo) -> String {
    let mut line = format!("{} ({}) [{}]", video.title, video.id, video.tags.join(" "));
    if video.paused {
        line.push_str(" - PAUSED");
    }
    if let Some(reason) = &video.flag_reason {
        line.push_str(&format!(" - FLAGGED (reason: {reason})"));
    }
    line
}
