use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    Contact,
    report::{
        Reporter,
        ReportContext,
        NullReporter,
        format::Rating,
    },
};

type Lines = Rc<RefCell<Vec<String>>>;

struct Recorder(Lines);

impl Reporter for Recorder {
    fn info(&self, message: &str) {
        self.0.borrow_mut().push(format!("info:{}", message));
    }
    fn pass(&self, message: &str) {
        self.0.borrow_mut().push(format!("pass:{}", message));
    }
    fn fail(&self, message: &str) {
        self.0.borrow_mut().push(format!("fail:{}", message));
    }
    fn warning(&self, message: &str) {
        self.0.borrow_mut().push(format!("warn:{}", message));
    }
}

fn recorder() -> (ReportContext, Lines) {
    let lines = Lines::default();
    (ReportContext::new(Box::new(Recorder(lines.clone()))), lines)
}

#[test]
fn test_timers() {
    let (mut ctx, lines) = recorder();
    ctx.start_test("Bulk Add");
    assert!(ctx.end_test("Bulk Add").is_some());
    assert!(ctx.end_test("Bulk Add").is_none());
    assert!(ctx.end_test("Never Started").is_none());

    let lines = lines.borrow();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "info:Starting Test: Bulk Add");
    assert!(lines[1].starts_with("info:Test 'Bulk Add' completed in "));
}

#[test]
fn test_validation_and_comparison() {
    let (ctx, lines) = recorder();
    ctx.validation_result("Contact Validation", true, "Contact is valid");
    ctx.validation_result("Contact Validation", false, "too long");
    assert!(ctx.data_comparison("555-0101", "555-0101"));
    assert!(!ctx.data_comparison("555-0101", "555-9999"));

    let lines = lines.borrow();
    assert!(lines[0].starts_with("pass:VALIDATION: Contact Validation"));
    assert!(lines[1].starts_with("fail:VALIDATION: Contact Validation"));
    assert!(lines[1].ends_with("Details: too long"));
    assert!(lines[2].starts_with("pass:") && lines[2].ends_with("MATCH"));
    assert!(lines[3].starts_with("fail:") && lines[3].ends_with("MISMATCH"));
}

#[test]
fn test_performance_metric() {
    let (ctx, lines) = recorder();
    assert_eq!(ctx.performance_metric("Query 10 contacts", 250), Rating::Good);
    assert_eq!(
        lines.borrow()[0],
        "info:PERFORMANCE METRIC: Query 10 contacts\n   Time: 250 ms\n   Rating: GOOD"
    );
}

#[test]
fn test_structured_data() {
    let (ctx, lines) = recorder();
    let contact = Contact::new("John Doe", "555-0101").unwrap();
    ctx.test_data("Sample Contact", &contact);
    ctx.test_data("Contact Sample", &vec![contact.clone()]);

    let lines = lines.borrow();
    assert_eq!(lines[0], "info:Sample Contact:\nKey | Value\n----|------\nname | John Doe\nphoneNumber | 555-0101\n");
    assert!(lines[1].contains("    0 | name=John Doe, phoneNumber=555-0101"));
}

#[test]
fn test_store_and_summary() {
    let (mut ctx, lines) = recorder();
    ctx.store_test_data("names", &["John", "Jane"]);
    assert_eq!(ctx.test_data_for("names").unwrap(), &["John".to_string(), "Jane".to_string()]);
    assert!(ctx.test_data_for("missing").is_none());

    ctx.summary(4, 3, 1, 0);
    assert!(lines.borrow()[0].ends_with("Success Rate: 75.0%"));
}

#[test]
fn test_null_reporter() {
    let mut ctx = ReportContext::new(Box::new(NullReporter));
    ctx.start_test("silent");
    ctx.step("nothing to see");
    ctx.test_data("Sample", &vec![1, 2, 3]);
    assert!(ctx.end_test("silent").is_some());
}
