//! Runs fixture cases through the verbalizers.

use crate::config::RunConfig;
use crate::failures::{ExpectedFailures, HarnessResult};
use crate::fixture::{Case, CaseKind, Fixture};
use crate::formatter::format_failure;
use crate::loader::load_all_fixtures;
use crate::{SpecError, SpecResult};
use extenso::to_words;
use extenso_currency::amount_to_text;
use extenso_date::date_to_text;
use std::path::Path;

/// Outcome of a single case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    Passed,
    Failed { actual: String },
}

/// Feed one input to the verbalizer for `kind`.
///
/// Number inputs may use `_` digit separators ("1_000_000").
pub fn verbalize(kind: CaseKind, input: &str) -> SpecResult<String> {
    let unreadable = |message: String| SpecError::Input {
        kind,
        input: input.to_string(),
        message,
    };

    match kind {
        CaseKind::Number => input
            .trim()
            .replace('_', "")
            .parse::<u64>()
            .map(to_words)
            .map_err(|e| unreadable(e.to_string())),
        CaseKind::Amount => input
            .trim()
            .parse::<f64>()
            .map(amount_to_text)
            .map_err(|e| unreadable(e.to_string())),
        CaseKind::Date => Ok(date_to_text(input)),
    }
}

/// Check one case against its expected text.
pub fn run_case(kind: CaseKind, case: &Case) -> SpecResult<CaseOutcome> {
    let actual = verbalize(kind, &case.input)?;
    if actual == case.expected {
        Ok(CaseOutcome::Passed)
    } else {
        Ok(CaseOutcome::Failed { actual })
    }
}

/// Run every case of a fixture, or none if its kind is not configured.
pub fn run_fixture(fixture: &Fixture, config: &RunConfig) -> SpecResult<Vec<CaseOutcome>> {
    if !config.runs(fixture.kind) {
        return Ok(Vec::new());
    }
    fixture
        .cases
        .iter()
        .map(|case| run_case(fixture.kind, case))
        .collect()
}

/// Run all fixtures under `dir` and classify failures against the ledger.
pub fn run_all(
    dir: &Path,
    config: &RunConfig,
    expected: &ExpectedFailures,
) -> SpecResult<HarnessResult> {
    let mut result = HarnessResult::new();

    for (name, fixture) in load_all_fixtures(dir)? {
        tracing::debug!(fixture = %name, cases = fixture.cases.len(), "running fixture");
        let outcomes = run_fixture(&fixture, config)?;

        for (case, outcome) in fixture.cases.iter().zip(outcomes) {
            match outcome {
                CaseOutcome::Passed => result.record_pass(),
                CaseOutcome::Failed { actual } => {
                    let state = expected.state_of(&name, &case.input);
                    let report = format_failure(&name, fixture.kind, case, &actual, state);
                    tracing::warn!(fixture = %name, input = %case.input, ?state, "case failed");
                    result.record_failure(state, report);
                }
            }
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_fixture;

    #[test]
    fn verbalizes_each_kind() {
        assert_eq!(verbalize(CaseKind::Number, "1_000_000").unwrap(), "um milhão");
        assert_eq!(verbalize(CaseKind::Amount, "1.00").unwrap(), "Um real");
        assert_eq!(verbalize(CaseKind::Amount, "NaN").unwrap(), "");
        assert_eq!(
            verbalize(CaseKind::Date, "10/10/2010").unwrap(),
            "Dez de Outubro de dois mil e dez"
        );
    }

    #[test]
    fn unreadable_input() {
        let err = verbalize(CaseKind::Number, "-1").unwrap_err();
        assert!(matches!(
            err,
            SpecError::Input {
                kind: CaseKind::Number,
                ..
            }
        ));
    }

    #[test]
    fn failing_case_reports_actual() {
        let case = Case {
            input: "1200".to_string(),
            expected: "mil, duzentos".to_string(),
            note: None,
        };
        assert_eq!(
            run_case(CaseKind::Number, &case).unwrap(),
            CaseOutcome::Failed {
                actual: "mil e duzentos".to_string()
            }
        );
    }

    #[test]
    fn skipped_kinds_produce_no_outcomes() {
        let fixture = parse_fixture(
            r#"
            kind = "date"

            [[case]]
            input = "01/01/2024"
            expected = "Primeiro de Janeiro de dois mil e vinte e quatro"
            "#,
        )
        .unwrap();

        let only_numbers = RunConfig::with_kinds(vec![CaseKind::Number]);
        assert!(run_fixture(&fixture, &only_numbers).unwrap().is_empty());
        assert_eq!(
            run_fixture(&fixture, &RunConfig::all()).unwrap(),
            vec![CaseOutcome::Passed]
        );
    }
}
