//! Terminal backend for the `log` facade, built on `env_logger`.
//!
//! Every line starts with a local `YYYY-MM-DD HH:MM:SS` timestamp and the
//! level, and goes to stdout.
use chrono::Local;
use env_logger::{Builder, Target};
use log::{Level, LevelFilter, SetLoggerError};
use std::{
    fmt::{Arguments, Display},
    io::Write,
};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Maps the number of `-v` flags to a level filter.
pub fn verbosity(occurrences: u64) -> LevelFilter {
    match occurrences {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn format_line<T: Display>(timestamp: T, level: Level, message: &Arguments) -> String {
    format!("{} [{:<5}] {}", timestamp, level, message)
}

/// Logger configuration for `level`, without touching the environment.
pub fn builder(level: LevelFilter) -> Builder {
    let mut builder = Builder::new();
    builder
        .filter_level(level)
        .target(Target::Stdout)
        .format(|buf, record| {
            let timestamp = Local::now().format(TIMESTAMP_FORMAT);
            writeln!(buf, "{}", format_line(timestamp, record.level(), record.args()))
        });
    builder
}

/// Installs the logger process-wide. `RUST_LOG`, when set, refines the
/// filter given by the `-v` flags. Fails if a logger is already set.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    builder(level).parse_default_env().try_init()
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDate;
    use log::{Log, Metadata};

    #[test]
    fn lines_start_with_timestamp_and_level() {
        // Given
        let timestamp = NaiveDate::from_ymd_opt(2024, 3, 9)
            .and_then(|date| date.and_hms_opt(7, 5, 2))
            .unwrap();

        // When
        let line = format_line(
            timestamp.format(TIMESTAMP_FORMAT),
            Level::Info,
            &format_args!("Blink #{}: LED ON", 1),
        );

        // Then
        assert_eq!("2024-03-09 07:05:02 [INFO ] Blink #1: LED ON", line);
    }

    #[test]
    fn verbosity_flags_raise_the_level() {
        assert_eq!(LevelFilter::Info, verbosity(0));
        assert_eq!(LevelFilter::Debug, verbosity(1));
        assert_eq!(LevelFilter::Trace, verbosity(2));
        assert_eq!(LevelFilter::Trace, verbosity(7));
    }

    #[test]
    fn logger_filters_by_level() {
        // Given
        let logger = builder(verbosity(0)).build();

        // Then
        assert_eq!(LevelFilter::Info, logger.filter());
        assert!(logger.enabled(&Metadata::builder().level(Level::Warn).build()));
        assert!(logger.enabled(&Metadata::builder().level(Level::Info).build()));
        assert!(!logger.enabled(&Metadata::builder().level(Level::Debug).build()));
    }
}
