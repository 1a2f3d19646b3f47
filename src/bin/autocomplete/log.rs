use std::{fs, io, path::PathBuf, sync::Mutex};

use tracing::Level;
use tracing_subscriber::{FmtSubscriber, filter::EnvFilter};

const LOG_ENV: &str = "AUTOCOMPLETE_LOG";

/// Configuration of logging
pub fn init_logging(log_file: PathBuf) -> Result<(), io::Error> {
    if let Some(parent) = log_file.parent() {
        fs::create_dir_all(parent)?;
    }
    let log_file = fs::File::create(log_file)?;

    let subscriber = FmtSubscriber::builder()
        // everything from TRACE up ends up in the log file, unless narrowed
        // down through the environment
        .with_max_level(Level::TRACE)
        .with_writer(Mutex::new(log_file))
        .with_thread_ids(true)
        .with_ansi(false)
        .with_line_number(true);

    let result = if let Ok(env_filter) = EnvFilter::try_from_env(LOG_ENV) {
        tracing::subscriber::set_global_default(subscriber.with_env_filter(env_filter).finish())
    } else {
        tracing::subscriber::set_global_default(subscriber.finish())
    };
    result.map_err(io::Error::other)
}

/// Log into the user's cache directory; the terminal belongs to the picker.
pub fn init() -> Result<(), io::Error> {
    let dirs = directories::ProjectDirs::from("", "", "autocomplete")
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?;
    init_logging(dirs.cache_dir().join("autocomplete.log"))
}
