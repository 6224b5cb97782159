//! Failure and summary formatting.

use crate::failures::{FailureState, HarnessResult};
use crate::fixture::{Case, CaseKind};
use std::fmt::Write;

/// Format a failed case with its expected and actual text.
pub fn format_failure(
    fixture_name: &str,
    kind: CaseKind,
    case: &Case,
    actual: &str,
    state: FailureState,
) -> String {
    let mut output = String::new();

    let label = match state {
        FailureState::Known => "KNOWN",
        FailureState::Pending => "PENDING",
        FailureState::Regression => "FAIL",
    };
    writeln!(output, "{}: {} [{:?}] {:?}", label, fixture_name, kind, case.input).unwrap();
    if let Some(note) = &case.note {
        writeln!(output, "  note:     {}", note).unwrap();
    }
    writeln!(output, "  expected: {:?}", case.expected).unwrap();
    writeln!(output, "  actual:   {:?}", actual).unwrap();

    output
}

/// One-line summary of a harness run.
pub fn format_summary(result: &HarnessResult) -> String {
    format!(
        "{} cases: {} passed, {} expected failures, {} regressions",
        result.total, result.passed, result.expected_failures, result.regressions
    )
}
