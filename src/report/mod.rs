use log::{error, info, warn};
use serde_json::Value;

pub mod context;
pub mod format;

pub use self::context::ReportContext;

/// Sink for test narration. Implementations are best effort: a reporter
/// must never fail the operation being reported on.
pub trait Reporter {
    fn info(&self, message: &str);
    fn pass(&self, message: &str);
    fn fail(&self, message: &str);
    fn warning(&self, message: &str);

    fn test_data(&self, label: &str, data: &Value) {
        self.info(&format::render(label, data));
    }
}

/// Prints tagged lines to stdout.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        println!("[INFO] {}", message);
    }

    fn pass(&self, message: &str) {
        println!("[PASS] {}", message);
    }

    fn fail(&self, message: &str) {
        println!("[FAIL] {}", message);
    }

    fn warning(&self, message: &str) {
        println!("[WARN] {}", message);
    }
}

/// Forwards to the `log` facade under the `report` target.
pub struct LogReporter;

impl Reporter for LogReporter {
    fn info(&self, message: &str) {
        info!(target: "report", "{}", message);
    }

    fn pass(&self, message: &str) {
        info!(target: "report", "PASS: {}", message);
    }

    fn fail(&self, message: &str) {
        error!(target: "report", "FAIL: {}", message);
    }

    fn warning(&self, message: &str) {
        warn!(target: "report", "{}", message);
    }
}

pub struct NullReporter;

impl Reporter for NullReporter {
    fn info(&self, _: &str) {}
    fn pass(&self, _: &str) {}
    fn fail(&self, _: &str) {}
    fn warning(&self, _: &str) {}
    fn test_data(&self, _: &str, _: &Value) {}
}
