use colored::Colorize;
use debug_print::debug_println;

/// Logger handed to each stage of a render cycle.
///
/// Stages receive their logger at construction instead of writing to a
/// process-global channel, so a caller embedding the core can route output
/// wherever it wants (or drop it with [`NullLogger`]).
pub trait RenderLogger {
    fn info(&self, message: &str);

    /// Debug chatter, compiled out of release output by default.
    fn debug(&self, message: &str) {
        let _ = message;
    }
}

/// Console logger with a colored subsystem tag, e.g. `[layout]`.
pub struct ConsoleLogger {
    tag: &'static str,
}

impl ConsoleLogger {
    pub const fn new(tag: &'static str) -> Self {
        Self { tag }
    }
}

impl RenderLogger for ConsoleLogger {
    fn info(&self, message: &str) {
        println!("{} {}", format!("[{}]", self.tag).blue().bold(), message);
    }

    fn debug(&self, message: &str) {
        debug_println!("{} {}", format!("[{}]", self.tag).dimmed(), message);
    }
}

/// Discards everything. Used by the test-suite.
pub struct NullLogger;

impl RenderLogger for NullLogger {
    fn info(&self, _message: &str) {}
}
