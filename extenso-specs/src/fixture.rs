//! Fixture file format.
//!
//! A fixture is a TOML file holding cases of a single kind:
//!
//! ```toml
//! title = "Amounts in reais"
//! kind = "amount"
//!
//! [[case]]
//! input = "1523.45"
//! expected = "Mil, quinhentos e vinte e três reais e quarenta e cinco centavos"
//! ```

use serde::{Deserialize, Serialize};

use crate::{SpecError, SpecResult};

/// What a case's input is fed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseKind {
    /// Non-negative integer, through `extenso::to_words`.
    Number,
    /// Float amount in reais, through `extenso_currency::amount_to_text`.
    Amount,
    /// `dd/mm/yyyy` string, through `extenso_date::date_to_text`.
    Date,
}

/// A parsed fixture file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub title: Option<String>,
    pub kind: CaseKind,
    #[serde(default, rename = "case")]
    pub cases: Vec<Case>,
}

/// A single input and the exact text it must produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    pub input: String,
    /// Empty for inputs that must be rejected.
    pub expected: String,
    #[serde(default)]
    pub note: Option<String>,
}

/// Parse fixture content.
pub fn parse_fixture(content: &str) -> SpecResult<Fixture> {
    toml::from_str(content).map_err(|e| SpecError::Parse {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cases() {
        let fixture = parse_fixture(
            r#"
            title = "Numbers"
            kind = "number"

            [[case]]
            input = "100"
            expected = "cem"

            [[case]]
            input = "101"
            expected = "cento e um"
            note = "cento once a remainder follows"
            "#,
        )
        .unwrap();

        assert_eq!(fixture.title.as_deref(), Some("Numbers"));
        assert_eq!(fixture.kind, CaseKind::Number);
        assert_eq!(fixture.cases.len(), 2);
        assert_eq!(fixture.cases[1].expected, "cento e um");
        assert!(fixture.cases[1].note.is_some());
    }

    #[test]
    fn rejects_unknown_kind() {
        let err = parse_fixture("kind = \"ordinal\"").unwrap_err();
        assert!(matches!(err, SpecError::Parse { .. }));
    }

    #[test]
    fn cases_are_optional() {
        let fixture = parse_fixture("kind = \"date\"").unwrap();
        assert!(fixture.cases.is_empty());
        assert!(fixture.title.is_none());
    }
}
