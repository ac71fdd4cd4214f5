//! Tracing setup for Marquee.
//!
//! Console output stays at the user-chosen level so the shell remains
//! readable; when a logs directory is given, a second layer captures full
//! debug output to `marquee-last-run.log` for troubleshooting.

use std::fs::{File, create_dir_all};
use std::path::Path;

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Initializes tracing with a console layer and an optional debug file layer.
///
/// `RUST_LOG` overrides `console_level` when set. The file layer always
/// records at TRACE, overwriting the previous run's log.
///
/// # Errors
/// - `std::io::Error` - Logs directory could not be created or the log file
///   could not be opened
pub fn init_tracing(console_level: Level, logs_dir: Option<&Path>) -> std::io::Result<()> {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(console_level.to_string()));

    let console_layer = fmt::layer()
        .with_target(false)
        .with_filter(console_filter);

    let file_layer = match logs_dir {
        Some(dir) => {
            create_dir_all(dir)?;
            let log_file = File::create(dir.join("marquee-last-run.log"))?;
            let layer = fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(log_file)
                .with_filter(EnvFilter::new("trace"));
            Some(layer)
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(())
}
