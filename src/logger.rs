//! Append-only text log behind the `log` facade.
//!
//! Every record becomes one line of the form `<timestamp> - <message>`, with
//! the timestamp in UTC.

use std::fs::{File, OpenOptions};
use std::path::Path;

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use time::format_description::FormatItem;
use time::macros::format_description;

use crate::error::LoggerError;

pub const TIMESTAMP_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second],[subsecond digits:3]");

// simplelog puts a single space between the time and the message.
const LINE_PREFIX: &[FormatItem<'static>] = format_description!(
    "[year]-[month]-[day] [hour]:[minute]:[second],[subsecond digits:3] -"
);

/// Time and message only: no level, thread, target or location columns.
pub fn line_config() -> simplelog::Config {
    ConfigBuilder::new()
        .set_time_format_custom(LINE_PREFIX)
        .set_max_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .build()
}

/// A logger appending to `path`, which is created if needed.
pub fn open(path: &Path, level: LevelFilter) -> Result<Box<WriteLogger<File>>, LoggerError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggerError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(WriteLogger::new(level, line_config(), file))
}

/// Installs the file logger for `path` as the global logger.
pub fn init(path: &Path, level: LevelFilter) -> Result<(), LoggerError> {
    let logger = open(path, level)?;
    log::set_boxed_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}
