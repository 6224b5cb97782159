//! Numeric `R$` display formatting.

/// Group integer digits in threes with `.` separators: "1234567" -> "1.234.567".
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Format a value as Brazilian currency, e.g. `R$ 1.234,56`.
///
/// The value is rounded to two fractional digits. Negative values render as
/// `R$ -9.876,54`. Returns an empty string for NaN and infinities.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }

    let fixed = format!("{:.2}", value);
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let (sign, integer) = match integer.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", integer),
    };

    format!("R$ {}{},{}", sign, group_thousands(integer), fraction)
}
