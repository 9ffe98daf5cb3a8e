//! Adapter from the `log` facade into the output-channel logger.
//!
//! Third-party crates running inside the extension host log through the
//! `log` macros; installing this adapter routes those records into the same
//! sink the extension's own diagnostics use.

use crate::logging::logger::{Level, Logger};

/// `log::Log` implementation backed by a [`Logger`].
#[derive(Debug, Clone)]
pub struct FacadeLogger {
    inner: Logger,
}

impl FacadeLogger {
    pub fn new(inner: Logger) -> Self {
        Self { inner }
    }

    /// Installs this adapter as the global `log` logger.
    ///
    /// Fails if a global logger has already been set.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        log::set_max_level(log::LevelFilter::Trace);
        log::set_boxed_logger(Box::new(self))
    }
}

fn map_level(level: log::Level) -> Level {
    match level {
        log::Level::Error => Level::Error,
        log::Level::Warn => Level::Warning,
        log::Level::Info => Level::Info,
        log::Level::Debug | log::Level::Trace => Level::Debug,
    }
}

impl log::Log for FacadeLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        self.inner
            .log(map_level(record.level()), &record.args().to_string());
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::logging::sink::MemorySink;

    #[test]
    fn test_map_level() {
        assert_eq!(map_level(log::Level::Error), Level::Error);
        assert_eq!(map_level(log::Level::Warn), Level::Warning);
        assert_eq!(map_level(log::Level::Info), Level::Info);
        assert_eq!(map_level(log::Level::Debug), Level::Debug);
        assert_eq!(map_level(log::Level::Trace), Level::Debug);
    }

    #[test]
    fn test_records_reach_the_sink() {
        let sink = Arc::new(MemorySink::new());
        let facade = FacadeLogger::new(Logger::new(sink.clone()));
        log::Log::log(
            &facade,
            &log::Record::builder()
                .level(log::Level::Warn)
                .args(format_args!("channel down"))
                .build(),
        );
        assert_eq!(sink.lines(), vec!["[WARNING] channel down"]);
    }
}
