//! Harness configuration.

use crate::CaseKind;

/// Which case kinds the harness runs.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Kinds to run. Fixtures of other kinds are skipped.
    pub kinds: Vec<CaseKind>,
}

impl RunConfig {
    /// Run every kind.
    pub fn all() -> Self {
        Self {
            kinds: vec![CaseKind::Number, CaseKind::Amount, CaseKind::Date],
        }
    }

    /// Create with specific kinds.
    pub fn with_kinds(kinds: Vec<CaseKind>) -> Self {
        Self { kinds }
    }

    pub fn runs(&self, kind: CaseKind) -> bool {
        self.kinds.contains(&kind)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::all()
    }
}
