//! Leveled logger with composable scopes.
//!
//! One [`Logger`] holds the reference to the output sink; [`ScopedLogger`]
//! views prefix every message with a `/`-composed scope label and delegate
//! to the base logger. All writes funnel synchronously through the one sink,
//! so emission order at the sink equals call order.

use std::fmt;
use std::sync::Arc;

use crate::logging::sink::Sink;

/// Severity levels understood by the logger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Debug,
    Warning,
    Error,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logger bound to a single output sink.
///
/// Each leveled call appends exactly one line formatted `[LEVEL] {message}`,
/// unbuffered. Cloning shares the sink reference, never the line content.
#[derive(Clone)]
pub struct Logger {
    sink: Arc<dyn Sink>,
}

impl Logger {
    pub fn new(sink: Arc<dyn Sink>) -> Self {
        Self { sink }
    }

    /// Append one line at the given level.
    pub fn log(&self, level: Level, message: &str) {
        self.sink.append_line(&format!("[{}] {}", level, message));
    }

    /// Logs an informational message.
    pub fn info(&self, message: &str) {
        self.log(Level::Info, message);
    }

    /// Logs a debug message.
    pub fn debug(&self, message: &str) {
        self.log(Level::Debug, message);
    }

    /// Logs a warning message.
    pub fn warning(&self, message: &str) {
        self.log(Level::Warning, message);
    }

    /// Logs an error message.
    pub fn error(&self, message: &str) {
        self.log(Level::Error, message);
    }

    /// Creates a scoped view that prefixes every message with the given
    /// scope label.
    pub fn with_scope(&self, scope: &str) -> ScopedLogger {
        ScopedLogger::new(self.clone(), scope)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").finish_non_exhaustive()
    }
}

/// Logger view that prefixes every message with a contextual scope.
///
/// Nesting flattens: deriving a child view composes the labels into one
/// `parent/child` string bound directly to the base logger, so there is no
/// delegation chain and invocation cost stays constant at any depth.
#[derive(Debug, Clone)]
pub struct ScopedLogger {
    base: Logger,
    scope: String,
}

impl ScopedLogger {
    fn new(base: Logger, scope: impl Into<String>) -> Self {
        Self {
            base,
            scope: scope.into(),
        }
    }

    /// The composed scope label of this view.
    pub fn scope(&self) -> &str {
        &self.scope
    }

    fn format(&self, message: &str) -> String {
        format!("[{}] {}", self.scope, message)
    }

    pub fn info(&self, message: &str) {
        self.base.info(&self.format(message));
    }

    pub fn debug(&self, message: &str) {
        self.base.debug(&self.format(message));
    }

    pub fn warning(&self, message: &str) {
        self.base.warning(&self.format(message));
    }

    pub fn error(&self, message: &str) {
        self.base.error(&self.format(message));
    }

    /// Creates a child view nested under the current scope.
    ///
    /// Labels are joined verbatim with `/`; a label that itself contains `/`
    /// is indistinguishable from two nesting levels in the rendered line.
    pub fn with_scope(&self, scope: &str) -> ScopedLogger {
        ScopedLogger::new(self.base.clone(), format!("{}/{}", self.scope, scope))
    }
}

/// Creates a new logger bound to the given sink.
pub fn create_logger(sink: Arc<dyn Sink>) -> Logger {
    Logger::new(sink)
}
