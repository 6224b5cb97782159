//! Spelling out monetary amounts.

use extenso::{capitalize_first, to_words};
use rust_decimal::Decimal;

use crate::{CurrencyResult, CurrencyVerbalizerConfig, MonetaryAmount};

/// Large scale nouns require "de" before the currency noun:
/// "um milhão de reais" but "mil reais".
fn needs_de(words: &str) -> bool {
    words.ends_with("lhão") || words.ends_with("lhões")
}

/// Renders [`MonetaryAmount`]s as Portuguese prose.
///
/// ```
/// use extenso_currency::CurrencyVerbalizer;
///
/// let verbalizer = CurrencyVerbalizer::new();
/// assert_eq!(
///     verbalizer.verbalize_f64(2.5).unwrap(),
///     "Dois reais e cinquenta centavos"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CurrencyVerbalizer {
    config: CurrencyVerbalizerConfig,
}

impl CurrencyVerbalizer {
    /// Create a verbalizer for the Brazilian real.
    pub fn new() -> Self {
        Self::with_config(CurrencyVerbalizerConfig::default())
    }

    /// Create a verbalizer with custom nouns.
    pub fn with_config(config: CurrencyVerbalizerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CurrencyVerbalizerConfig {
        &self.config
    }

    /// Spell out an amount. Only the first letter is capitalized.
    pub fn verbalize(&self, amount: &MonetaryAmount) -> String {
        let config = &self.config;
        let mut parts = Vec::with_capacity(2);

        if amount.whole > 0 {
            let words = to_words(amount.whole);
            let de = if needs_de(&words) { "de " } else { "" };
            parts.push(format!(
                "{} {}{}",
                words,
                de,
                config.unit.for_count(amount.whole)
            ));
        }

        if amount.cents > 0 {
            let cents = u64::from(amount.cents);
            let words = format!("{} {}", to_words(cents), config.subunit.for_count(cents));
            if amount.whole > 0 {
                parts.push(format!("e {}", words));
            } else {
                parts.push(words);
            }
        }

        if parts.is_empty() {
            parts.push(format!("zero {}", config.unit.plural));
        }

        let mut text = parts.join(" ");
        if amount.negative {
            text = format!("{} {}", config.negative_prefix, text);
        }
        capitalize_first(&text)
    }

    pub fn verbalize_f64(&self, value: f64) -> CurrencyResult<String> {
        MonetaryAmount::from_f64(value).map(|amount| self.verbalize(&amount))
    }

    pub fn verbalize_decimal(&self, value: Decimal) -> CurrencyResult<String> {
        MonetaryAmount::from_decimal(value).map(|amount| self.verbalize(&amount))
    }
}

/// Spell out an amount in reais, truncated to centavos.
///
/// Returns an empty string for NaN, infinities, and magnitudes above one
/// quadrillion.
pub fn amount_to_text(value: f64) -> String {
    match CurrencyVerbalizer::new().verbalize_f64(value) {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!(value, %err, "amount rejected");
            String::new()
        }
    }
}

/// Spell out an exact decimal amount in reais, truncated to centavos.
pub fn decimal_to_text(value: Decimal) -> CurrencyResult<String> {
    CurrencyVerbalizer::new().verbalize_decimal(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Noun;

    #[test]
    fn de_only_after_large_scale_nouns() {
        assert!(needs_de("um milhão"));
        assert!(needs_de("dois bilhões"));
        assert!(needs_de("mil trilhões"));
        assert!(!needs_de("mil"));
        assert!(!needs_de("um milhão e quinhentos mil"));
        assert!(!needs_de("um milhão e um"));
    }

    #[test]
    fn custom_nouns() {
        let verbalizer = CurrencyVerbalizer::with_config(CurrencyVerbalizerConfig::with_nouns(
            Noun::new("dólar", "dólares"),
            Noun::new("cent", "cents"),
        ));
        let amount = MonetaryAmount::new(2_000_000, 1, false).unwrap();
        assert_eq!(
            verbalizer.verbalize(&amount),
            "Dois milhões de dólares e um cent"
        );
        assert_eq!(verbalizer.verbalize(&MonetaryAmount::default()), "Zero dólares");
    }

    #[test]
    fn negative_prefix_is_configurable() {
        let config = CurrencyVerbalizerConfig {
            negative_prefix: "débito de".into(),
            ..CurrencyVerbalizerConfig::default()
        };
        let amount = MonetaryAmount::new(1, 0, true).unwrap();
        assert_eq!(
            CurrencyVerbalizer::with_config(config).verbalize(&amount),
            "Débito de um real"
        );
    }
}
