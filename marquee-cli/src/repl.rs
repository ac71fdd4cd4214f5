//! Interactive shell.
//!
//! A line-oriented loop over stdin. All input capture lives here; the core
//! only ever sees parsed arguments. After a search, the shell offers to play
//! one of the numbered results; anything that is not a valid in-range number
//! is a polite no.

use std::io::{self, BufRead, Write};

use marquee_core::service::{PlayerService, SearchHit};

use crate::commands;

/// A parsed REPL line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ReplCommand {
    Play(String),
    Random,
    Stop,
    Pause,
    Continue,
    Playing,
    List,
    Count,
    Search(String),
    Tag(String),
    Flag {
        video_id: String,
        reason: Option<String>,
    },
    Allow(String),
    PlaylistCreate(String),
    PlaylistAdd {
        name: String,
        video_id: String,
    },
    PlaylistRemove {
        name: String,
        video_id: String,
    },
    PlaylistClear(String),
    PlaylistDelete(String),
    PlaylistShow(String),
    Playlists,
    Help,
    Quit,
}

/// Run the interactive shell until EOF or `quit`.
///
/// # Errors
/// Returns an error only on stdin/stdout failures; command failures are
/// rendered, not propagated.
pub fn run(service: &mut PlayerService) -> anyhow::Result<()> {
    println!(
        "Welcome to Marquee! The library holds {} videos.",
        service.video_count()
    );
    println!("Type help for a list of available commands.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        match parse(&line?) {
            Ok(None) => {}
            Ok(Some(ReplCommand::Quit)) => break,
            Ok(Some(command)) => execute(service, command, &mut lines)?,
            Err(message) => println!("{message}"),
        }
    }
    println!("Goodbye!");
    Ok(())
}

fn execute<B: BufRead>(
    service: &mut PlayerService,
    command: ReplCommand,
    lines: &mut io::Lines<B>,
) -> anyhow::Result<()> {
    match command {
        ReplCommand::Play(video_id) => commands::play(service, &video_id),
        ReplCommand::Random => commands::play_random(service),
        ReplCommand::Stop => commands::stop(service),
        ReplCommand::Pause => commands::pause(service),
        ReplCommand::Continue => commands::resume(service),
        ReplCommand::Playing => commands::show_playing(service),
        ReplCommand::List => commands::list_videos(service),
        ReplCommand::Count => println!("{} videos in the library", service.video_count()),
        ReplCommand::Search(term) => {
            let hits = service.search(&term);
            offer_selection(service, &term, &hits, lines)?;
        }
        ReplCommand::Tag(tag) => {
            let hits = service.search_by_tag(&tag);
            offer_selection(service, &tag, &hits, lines)?;
        }
        ReplCommand::Flag { video_id, reason } => commands::flag(service, &video_id, reason),
        ReplCommand::Allow(video_id) => commands::allow(service, &video_id),
        ReplCommand::PlaylistCreate(name) => {
            commands::handle_playlist_command(service, commands::PlaylistCommands::Create { name });
        }
        ReplCommand::PlaylistAdd { name, video_id } => {
            commands::handle_playlist_command(
                service,
                commands::PlaylistCommands::Add { name, video_id },
            );
        }
        ReplCommand::PlaylistRemove { name, video_id } => {
            commands::handle_playlist_command(
                service,
                commands::PlaylistCommands::Remove { name, video_id },
            );
        }
        ReplCommand::PlaylistClear(name) => {
            commands::handle_playlist_command(service, commands::PlaylistCommands::Clear { name });
        }
        ReplCommand::PlaylistDelete(name) => {
            commands::handle_playlist_command(service, commands::PlaylistCommands::Delete { name });
        }
        ReplCommand::PlaylistShow(name) => commands::show_playlist(service, &name),
        ReplCommand::Playlists => commands::list_playlists(service),
        ReplCommand::Help => print_help(),
        // Quit is intercepted by the loop.
        ReplCommand::Quit => {}
    }
    Ok(())
}

/// Offer to play one of the numbered search results.
///
/// A valid in-range 1-based number plays that result; any other input is
/// treated as "no selection" without complaint.
fn offer_selection<B: BufRead>(
    service: &mut PlayerService,
    query: &str,
    hits: &[SearchHit],
    lines: &mut io::Lines<B>,
) -> anyhow::Result<()> {
    if !commands::search_results(query, hits) {
        return Ok(());
    }
    println!("Would you like to play any of the above? If yes, specify the number of the video.");
    println!("If your answer is not a valid number, we will assume it's a no.");
    print!("> ");
    io::stdout().flush()?;

    let Some(line) = lines.next() else {
        return Ok(());
    };
    let selection = line?
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|index| hits.get(index));
    if let Some(hit) = selection {
        commands::play(service, hit.id.as_str());
    }
    Ok(())
}

fn parse(line: &str) -> Result<Option<ReplCommand>, String> {
    let mut tokens = line.split_whitespace();
    let Some(keyword) = tokens.next() else {
        return Ok(None);
    };
    let keyword = keyword.to_lowercase();
    let rest: Vec<&str> = tokens.collect();

    let command = match (keyword.as_str(), rest.as_slice()) {
        ("play", [video_id]) => ReplCommand::Play(video_id.to_string()),
        ("play", _) => return Err("Usage: play <video_id>".to_string()),
        ("random", []) => ReplCommand::Random,
        ("stop", []) => ReplCommand::Stop,
        ("pause", []) => ReplCommand::Pause,
        ("continue", []) => ReplCommand::Continue,
        ("playing", []) => ReplCommand::Playing,
        ("list", []) => ReplCommand::List,
        ("count", []) => ReplCommand::Count,
        ("search", []) => return Err("Usage: search <term>".to_string()),
        ("search", terms) => ReplCommand::Search(terms.join(" ")),
        ("tag", [tag]) => ReplCommand::Tag(tag.to_string()),
        ("tag", _) => return Err("Usage: tag <#tag>".to_string()),
        ("flag", [video_id]) => ReplCommand::Flag {
            video_id: video_id.to_string(),
            reason: None,
        },
        ("flag", [video_id, reason @ ..]) => ReplCommand::Flag {
            video_id: video_id.to_string(),
            reason: Some(reason.join(" ")),
        },
        ("flag", _) => return Err("Usage: flag <video_id> [reason]".to_string()),
        ("allow", [video_id]) => ReplCommand::Allow(video_id.to_string()),
        ("allow", _) => return Err("Usage: allow <video_id>".to_string()),
        ("playlist", rest) => return parse_playlist(rest).map(Some),
        ("playlists", []) => ReplCommand::Playlists,
        ("help", _) => ReplCommand::Help,
        ("quit" | "exit", _) => ReplCommand::Quit,
        _ => {
            return Err(format!(
                "Unknown command: {keyword}. Type help for a list of available commands."
            ));
        }
    };
    Ok(Some(command))
}

fn parse_playlist(rest: &[&str]) -> Result<ReplCommand, String> {
    const USAGE: &str =
        "Usage: playlist <create|add|remove|clear|delete|show> <name> [video_id]";
    let Some(sub) = rest.first() else {
        return Err(USAGE.to_string());
    };
    let command = match (sub.to_lowercase().as_str(), &rest[1..]) {
        ("create", [name]) => ReplCommand::PlaylistCreate(name.to_string()),
        ("add", [name, video_id]) => ReplCommand::PlaylistAdd {
            name: name.to_string(),
            video_id: video_id.to_string(),
        },
        ("remove", [name, video_id]) => ReplCommand::PlaylistRemove {
            name: name.to_string(),
            video_id: video_id.to_string(),
        },
        ("clear", [name]) => ReplCommand::PlaylistClear(name.to_string()),
        ("delete", [name]) => ReplCommand::PlaylistDelete(name.to_string()),
        ("show", [name]) => ReplCommand::PlaylistShow(name.to_string()),
        _ => return Err(USAGE.to_string()),
    };
    Ok(command)
}

fn print_help() {
    println!("Available commands:");
    println!("  play <video_id>                 Play a video by id");
    println!("  random                          Play a random available video");
    println!("  stop                            Stop the current video");
    println!("  pause                           Pause the current video");
    println!("  continue                        Continue a paused video");
    println!("  playing                         Show what is currently playing");
    println!("  list                            List all videos in the library");
    println!("  count                           Show how many videos the library holds");
    println!("  search <term>                   Search videos by title");
    println!("  tag <#tag>                      Search videos by tag");
    println!("  flag <video_id> [reason]        Flag a video as unavailable");
    println!("  allow <video_id>                Remove the flag from a video");
    println!("  playlist create <name>          Create a new playlist");
    println!("  playlist add <name> <video_id>  Add a video to a playlist");
    println!("  playlist remove <name> <video_id>  Remove a video from a playlist");
    println!("  playlist clear <name>           Remove all videos from a playlist");
    println!("  playlist delete <name>          Delete a playlist");
    println!("  playlist show <name>            Show the videos of a playlist");
    println!("  playlists                       List all playlists");
    println!("  quit                            Leave the shell");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_are_ignored() {
        assert_eq!(parse(""), Ok(None));
        assert_eq!(parse("   "), Ok(None));
    }

    #[test]
    fn test_keyword_is_case_insensitive() {
        assert_eq!(
            parse("PLAY some_id"),
            Ok(Some(ReplCommand::Play("some_id".to_string())))
        );
    }

    #[test]
    fn test_flag_reason_joins_remaining_tokens() {
        assert_eq!(
            parse("flag cat_id not a cat"),
            Ok(Some(ReplCommand::Flag {
                video_id: "cat_id".to_string(),
                reason: Some("not a cat".to_string()),
            }))
        );
        assert_eq!(
            parse("flag cat_id"),
            Ok(Some(ReplCommand::Flag {
                video_id: "cat_id".to_string(),
                reason: None,
            }))
        );
    }

    #[test]
    fn test_multi_word_search_term() {
        assert_eq!(
            parse("search life at"),
            Ok(Some(ReplCommand::Search("life at".to_string())))
        );
    }

    #[test]
    fn test_playlist_subcommands() {
        assert_eq!(
            parse("playlist create Fun"),
            Ok(Some(ReplCommand::PlaylistCreate("Fun".to_string())))
        );
        assert_eq!(
            parse("playlist ADD Fun cat_id"),
            Ok(Some(ReplCommand::PlaylistAdd {
                name: "Fun".to_string(),
                video_id: "cat_id".to_string(),
            }))
        );
        assert!(parse("playlist").is_err());
        assert!(parse("playlist frobnicate Fun").is_err());
    }

    #[test]
    fn test_unknown_command_mentions_help() {
        let message = parse("dance").unwrap_err();
        assert!(message.contains("help"));
    }

    #[test]
    fn test_wrong_arity_yields_usage() {
        assert!(parse("play").unwrap_err().starts_with("Usage:"));
        assert!(parse("allow one two").unwrap_err().starts_with("Usage:"));
    }
}
