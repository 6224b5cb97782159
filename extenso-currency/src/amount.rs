//! Exact reais/centavos split of a monetary value.
//!
//! Values are truncated, never rounded, to two fractional digits. Binary
//! floats are converted through their shortest decimal representation so
//! that `0.29` yields 29 centavos rather than 28.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::{CurrencyError, CurrencyResult};

/// Largest magnitude that can be spelled out: one quadrillion.
pub const MAX_AMOUNT: u64 = 1_000_000_000_000_000;

/// A monetary value split into whole units and hundredths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MonetaryAmount {
    /// Whole units (reais).
    pub whole: u64,
    /// Hundredths (centavos), `0..=99`.
    pub cents: u8,
    /// Set only when the truncated amount is non-zero.
    pub negative: bool,
}

impl MonetaryAmount {
    pub fn new(whole: u64, cents: u8, negative: bool) -> CurrencyResult<Self> {
        if cents > 99 || whole > MAX_AMOUNT || (whole == MAX_AMOUNT && cents > 0) {
            return Err(CurrencyError::OutOfRange {
                value: format!("{}.{:02}", whole, cents),
            });
        }
        Ok(Self {
            whole,
            cents,
            negative: negative && (whole > 0 || cents > 0),
        })
    }

    pub fn is_zero(&self) -> bool {
        self.whole == 0 && self.cents == 0
    }

    /// Split a binary float. Rejects NaN, infinities and magnitudes above
    /// [`MAX_AMOUNT`].
    pub fn from_f64(value: f64) -> CurrencyResult<Self> {
        if !value.is_finite() {
            return Err(CurrencyError::NotFinite);
        }
        if value.abs() > MAX_AMOUNT as f64 {
            return Err(CurrencyError::OutOfRange {
                value: value.to_string(),
            });
        }

        // Display for f64 never uses exponent notation.
        let repr = value.abs().to_string();
        let (whole, fraction) = match repr.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (repr.as_str(), ""),
        };
        let malformed = || CurrencyError::Malformed { repr: repr.clone() };

        let whole: u64 = whole.parse().map_err(|_| malformed())?;
        let cents_digits = fraction.get(..2).unwrap_or(fraction);
        let cents: u8 = format!("{:0<2}", cents_digits)
            .parse()
            .map_err(|_| malformed())?;

        Self::new(whole, cents, value < 0.0)
    }

    /// Split an exact decimal. Rejects magnitudes above [`MAX_AMOUNT`].
    pub fn from_decimal(value: Decimal) -> CurrencyResult<Self> {
        let abs = value.abs();
        if abs > Decimal::from(MAX_AMOUNT) {
            return Err(CurrencyError::OutOfRange {
                value: value.to_string(),
            });
        }

        let malformed = || CurrencyError::Malformed {
            repr: value.to_string(),
        };
        let whole = abs.trunc().to_u64().ok_or_else(malformed)?;
        let cents = (abs.fract() * Decimal::from(100u8))
            .trunc()
            .to_u8()
            .ok_or_else(malformed)?;

        Self::new(whole, cents, value.is_sign_negative())
    }
}

impl TryFrom<f64> for MonetaryAmount {
    type Error = CurrencyError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::from_f64(value)
    }
}

impl TryFrom<Decimal> for MonetaryAmount {
    type Error = CurrencyError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::from_decimal(value)
    }
}
