//! Monetary amounts spelled out in Brazilian Portuguese.
//!
//! ```
//! use extenso_currency::amount_to_text;
//!
//! assert_eq!(
//!     amount_to_text(1523.45),
//!     "Mil, quinhentos e vinte e três reais e quarenta e cinco centavos"
//! );
//! assert_eq!(amount_to_text(1_000_000.0), "Um milhão de reais");
//! assert_eq!(amount_to_text(f64::NAN), "");
//! ```
//!
//! ## Pipeline
//!
//! 1. [`MonetaryAmount`] splits the input into reais and centavos,
//!    truncating (never rounding) to two fractional digits
//! 2. [`CurrencyVerbalizer`] spells each part out with `extenso::to_words`
//!    and attaches the nouns from its [`CurrencyVerbalizerConfig`]
//!
//! [`format_currency`] renders the numeric `R$ 1.234,56` form.

mod amount;
mod config;
mod error;
mod format;
mod verbalizer;

pub use amount::{MonetaryAmount, MAX_AMOUNT};
pub use config::{CurrencyVerbalizerConfig, Noun};
pub use error::{CurrencyError, CurrencyResult};
pub use format::format_currency;
pub use verbalizer::{amount_to_text, decimal_to_text, CurrencyVerbalizer};
