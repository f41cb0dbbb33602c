use std::collections::HashMap;
use std::time::{Duration, Instant};
use serde::Serialize;

use super::{
    Reporter,
    ConsoleReporter,
    format::Rating,
};

/// Per-run reporting state handed explicitly to whoever narrates a test:
/// the reporter sink, running test timers and a keyed scratch store.
pub struct ReportContext {
    reporter: Box<dyn Reporter>,
    timers: HashMap<String, Instant>,
    stored: HashMap<String, Vec<String>>,
}

impl ReportContext {
    pub fn new(reporter: Box<dyn Reporter>) -> Self {
        Self {
            reporter,
            timers: HashMap::new(),
            stored: HashMap::new(),
        }
    }

    pub fn reporter(&self) -> &dyn Reporter {
        self.reporter.as_ref()
    }

    pub fn info(&self, message: &str) {
        self.reporter.info(message);
    }

    pub fn pass(&self, message: &str) {
        self.reporter.pass(message);
    }

    pub fn fail(&self, message: &str) {
        self.reporter.fail(message);
    }

    pub fn warning(&self, message: &str) {
        self.reporter.warning(message);
    }

    pub fn start_test(&mut self, name: &str) {
        self.info(&format!("Starting Test: {}", name));
        self.timers.insert(name.to_string(), Instant::now());
    }

    /// Stops the timer started by `start_test`. Unknown names are ignored.
    pub fn end_test(&mut self, name: &str) -> Option<Duration> {
        let elapsed = self.timers.remove(name)?.elapsed();
        self.info(&format!("Test '{}' completed in {}ms", name, elapsed.as_millis()));
        Some(elapsed)
    }

    pub fn step(&self, description: &str) {
        self.info(&format!("STEP: {}", description));
    }

    pub fn scenario_setup(&self, scenario: &str) {
        self.info(&format!("SCENARIO SETUP: {}", scenario));
    }

    pub fn data_iteration(&self, iteration: usize, data: &str) {
        self.info(&format!("ITERATION {}: {}", iteration, data));
    }

    pub fn performance_metric(&self, operation: &str, millis: u128) -> Rating {
        let rating = Rating::from_millis(millis);
        self.info(&format!(
            "PERFORMANCE METRIC: {}\n   Time: {} ms\n   Rating: {}",
            operation, millis, rating
        ));
        rating
    }

    pub fn validation_result(&self, validation: &str, success: bool, details: &str) {
        let message = format!(
            "VALIDATION: {}\n   Result: {}\n   Details: {}",
            validation,
            if success { "PASS" } else { "FAIL" },
            details
        );
        match success {
            true => self.pass(&message),
            false => self.fail(&message),
        }
    }

    pub fn data_comparison(&self, expected: &str, actual: &str) -> bool {
        let matched = expected == actual;
        let message = format!(
            "DATA COMPARISON:\n   Expected: {}\n   Actual:   {}\n   Result:   {}",
            expected,
            actual,
            if matched { "MATCH" } else { "MISMATCH" }
        );
        match matched {
            true => self.pass(&message),
            false => self.fail(&message),
        }
        matched
    }

    /// Dumps any serializable value as structured test data. A value that
    /// cannot be serialized is reported as a warning instead.
    pub fn test_data<T: Serialize + ?Sized>(&self, label: &str, data: &T) {
        match serde_json::to_value(data) {
            Ok(value) => self.reporter.test_data(label, &value),
            Err(e) => self.warning(&format!("Unable to render test data {}: {e}", label)),
        }
    }

    pub fn store_test_data(&mut self, key: &str, data: &[&str]) {
        self.stored.insert(
            key.to_string(),
            data.iter().map(|v| v.to_string()).collect()
        );
    }

    pub fn test_data_for(&self, key: &str) -> Option<&[String]> {
        self.stored.get(key).map(|v| v.as_slice())
    }

    pub fn summary(&self, total: usize, passed: usize, failed: usize, skipped: usize) {
        let rate = match total {
            0 => 0.0,
            n => passed as f64 * 100.0 / n as f64,
        };
        self.info(&format!(
            "TEST SUMMARY\n   Total Tests: {}\n   Passed: {}\n   Failed: {}\n   Skipped: {}\n   Success Rate: {:.1}%",
            total, passed, failed, skipped, rate
        ));
    }
}

impl Default for ReportContext {
    fn default() -> Self {
        Self::new(Box::new(ConsoleReporter))
    }
}
