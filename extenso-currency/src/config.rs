//! Verbalizer configuration.

use std::borrow::Cow;

/// A noun with its singular and plural forms ("real" / "reais").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Noun {
    pub singular: Cow<'static, str>,
    pub plural: Cow<'static, str>,
}

impl Noun {
    pub const fn new(singular: &'static str, plural: &'static str) -> Self {
        Self {
            singular: Cow::Borrowed(singular),
            plural: Cow::Borrowed(plural),
        }
    }

    /// Build a noun from owned strings, e.g. read from user settings.
    pub fn owned(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            singular: Cow::Owned(singular.into()),
            plural: Cow::Owned(plural.into()),
        }
    }

    /// Singular for exactly one, plural otherwise (including zero).
    pub fn for_count(&self, count: u64) -> &str {
        if count == 1 {
            &self.singular
        } else {
            &self.plural
        }
    }
}

/// Configuration for the [`CurrencyVerbalizer`](crate::CurrencyVerbalizer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyVerbalizerConfig {
    /// Whole-unit noun (default "real" / "reais")
    pub unit: Noun,
    /// Hundredth noun (default "centavo" / "centavos")
    pub subunit: Noun,
    /// Word placed before negative amounts (default "menos")
    pub negative_prefix: Cow<'static, str>,
}

impl CurrencyVerbalizerConfig {
    /// Brazilian real.
    pub const REAL: CurrencyVerbalizerConfig = CurrencyVerbalizerConfig {
        unit: Noun::new("real", "reais"),
        subunit: Noun::new("centavo", "centavos"),
        negative_prefix: Cow::Borrowed("menos"),
    };

    /// Same wording with different nouns, e.g. "dólar" / "dólares".
    pub fn with_nouns(unit: Noun, subunit: Noun) -> Self {
        Self {
            unit,
            subunit,
            ..Self::REAL
        }
    }
}

impl Default for CurrencyVerbalizerConfig {
    fn default() -> Self {
        Self::REAL
    }
}
