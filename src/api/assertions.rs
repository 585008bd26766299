//! Explicit reporting seam between verdicts and a test framework.
//!
//! Verifiers return values; whoever owns the test framework decides how a
//! verdict becomes a pass or a failure by handing in an [`AssertionSink`].

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::AlignmentReport;

pub trait AssertionSink {
    fn record(&mut self, name: &str, passed: bool, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionOutcome {
    pub name: String,
    pub passed: bool,
    pub message: String,
}

/// Sink that keeps every outcome, in recording order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingSink {
    pub outcomes: Vec<AssertionOutcome>,
}

impl RecordingSink {
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &AssertionOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.passed)
    }
}

impl AssertionSink for RecordingSink {
    fn record(&mut self, name: &str, passed: bool, message: &str) {
        self.outcomes.push(AssertionOutcome {
            name: name.to_owned(),
            passed,
            message: message.to_owned(),
        });
    }
}

/// Records an alignment verdict for `axis_name` and returns whether it passed.
///
/// A vacuous report (no mark could be compared with the axis) fails.
pub fn assert_alignment<S: AssertionSink + ?Sized>(
    sink: &mut S,
    axis_name: &str,
    report: &AlignmentReport,
) -> bool {
    let passed = report.aligned && !report.is_vacuous();
    let message = report
        .failure_message(axis_name)
        .unwrap_or_else(|| format!("{axis_name}: {} marks aligned", report.checked));
    debug!(axis = axis_name, passed, "alignment assertion");
    sink.record(&format!("{axis_name} alignment"), passed, &message);
    passed
}

/// Records a boolean predicate under `name`.
pub fn assert_predicate<S: AssertionSink + ?Sized>(
    sink: &mut S,
    name: &str,
    passed: bool,
    failure_message: &str,
) -> bool {
    let message = if passed { "ok" } else { failure_message };
    sink.record(name, passed, message);
    passed
}
