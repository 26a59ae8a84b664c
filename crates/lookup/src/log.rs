use std::{
    fmt,
    io::{Write, stderr},
};

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};

static LOGGER: Logger = Logger;

/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER).map(|()| log::set_max_level(level))
}

pub struct Entry {
    pub time: String,
    pub level: Level,
    pub message: String,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:<5} {}", self.time, self.level, self.message)
    }
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let entry = Entry {
                time: Local::now().format("%b %d %H:%M:%S").to_string(),
                level: record.level(),
                message: record.args().to_string(),
            };
            let _ = writeln!(stderr().lock(), "{entry}");
        }
    }

    fn flush(&self) {
        let _ = stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Context;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_init_twice() {
        let _ = init(LevelFilter::Off);
        let error = init(LevelFilter::Off)
            .context("initializing logger")
            .unwrap_err();

        assert_eq!(
            format!("{error:#}"),
            "initializing logger: attempted to set a logger after the logging system was already initialized"
        );
    }

    #[rstest]
    #[case(Level::Error, "Oct 18 09:15:02 ERROR invalid knowledge base")]
    #[case(Level::Warn, "Oct 18 09:15:02 WARN  invalid knowledge base")]
    #[case(Level::Trace, "Oct 18 09:15:02 TRACE invalid knowledge base")]
    fn test_entry_display(#[case] level: Level, #[case] expected: &str) {
        let entry = Entry {
            time: "Oct 18 09:15:02".to_string(),
            level,
            message: "invalid knowledge base".to_string(),
        };
        assert_eq!(entry.to_string(), expected);
    }
}
