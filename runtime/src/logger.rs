use std::env;
use std::io::{self, Write};
use std::time::SystemTime;

use log::{Level, LevelFilter, Log};
use nu_ansi_term::ansi::RESET;
use nu_ansi_term::{Color, Style};

use crate::Result;

/// Environment variable holding the maximum level to log.
pub const LEVEL_VAR: &str = "WRAP_LOG";

/// Level used when [`LEVEL_VAR`] is unset or invalid.
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Target of the records written by the fatal accessors.
pub const FATAL_TARGET: &str = "fatal";

static LOGGER: Logger = Logger;

pub struct Logger;

impl Log for Logger {
	fn enabled(&self, metadata: &log::Metadata) -> bool {
		metadata.level() <= log::max_level()
	}

	fn log(&self, record: &log::Record) {
		if !self.enabled(record.metadata()) {
			return;
		}

		let time = humantime::format_rfc3339_nanos(SystemTime::now());

		let dim = Style::new().dimmed().prefix();
		let (color, label) = label(record);

		eprintln!(
			"{dim}{time}{RESET} {}{:5}{RESET} {}{}{RESET}{dim}:{RESET} {}",
			color.bold().prefix(),
			label,
			Style::new().bold().prefix(),
			record.target(),
			record.args()
		);
	}

	fn flush(&self) {
		let _ = io::stderr().flush();
	}
}

/// Colour and level label for a record. Error records aimed at [`FATAL_TARGET`] are shown as `FATAL`.
fn label(record: &log::Record) -> (Color, &'static str) {
	match record.level() {
		Level::Error if record.target() == FATAL_TARGET => (Color::Magenta, "FATAL"),
		Level::Trace => (Color::Purple, "TRACE"),
		Level::Debug => (Color::Blue, "DEBUG"),
		Level::Info => (Color::Green, "INFO"),
		Level::Warn => (Color::Yellow, "WARN"),
		Level::Error => (Color::Red, "ERROR"),
	}
}

/// Parses the value of [`LEVEL_VAR`]. An unset variable yields [`DEFAULT_LEVEL`].
fn parse_level(value: Option<&str>) -> core::result::Result<LevelFilter, String> {
	match value {
		Some(v) => v.trim().parse().map_err(|_| v.to_owned()),
		None => Ok(DEFAULT_LEVEL),
	}
}

/// Installs the logger, taking the maximum level from [`LEVEL_VAR`].
pub fn init() -> Result {
	let value = env::var(LEVEL_VAR).ok();

	match parse_level(value.as_deref()) {
		Ok(level) => init_with(level),
		Err(invalid) => {
			init_with(DEFAULT_LEVEL)?;
			log::warn!("Ignoring invalid {LEVEL_VAR} value {invalid:?}, logging at {DEFAULT_LEVEL}");
			Ok(())
		}
	}
}

/// Installs the logger with an explicit maximum level.
pub fn init_with(level: LevelFilter) -> Result {
	log::set_logger(&LOGGER).map_err(|err| log::error!("Failed to install logger: {err}"))?;
	log::set_max_level(level);
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn fatal_target_gets_its_own_label() {
		let record = log::Record::builder().level(Level::Error).target(FATAL_TARGET).build();
		assert_eq!(label(&record).1, "FATAL");

		let record = log::Record::builder().level(Level::Error).target("wrap::option").build();
		assert_eq!(label(&record).1, "ERROR");

		// Only error records are promoted.
		let record = log::Record::builder().level(Level::Warn).target(FATAL_TARGET).build();
		assert_eq!(label(&record).1, "WARN");
	}

	#[test]
	fn level_from_env_value() {
		assert_eq!(parse_level(None), Ok(DEFAULT_LEVEL));
		assert_eq!(parse_level(Some("debug")), Ok(LevelFilter::Debug));
		assert_eq!(parse_level(Some(" TRACE ")), Ok(LevelFilter::Trace));
		assert_eq!(parse_level(Some("off")), Ok(LevelFilter::Off));
		assert_eq!(parse_level(Some("loud")), Err("loud".to_owned()));
	}
}
