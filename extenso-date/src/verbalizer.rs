//! Spelling out calendar dates: "Primeiro de Janeiro de dois mil e vinte e quatro".

use extenso::{capitalize_first, to_words};

use crate::{parse_date, CalendarDate, DateResult};

const MONTH_NAMES: [&str; 12] = [
    "Janeiro",
    "Fevereiro",
    "Março",
    "Abril",
    "Maio",
    "Junho",
    "Julho",
    "Agosto",
    "Setembro",
    "Outubro",
    "Novembro",
    "Dezembro",
];

/// Capitalized month name for `month` in `1..=12`.
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month).ok()?.checked_sub(1)?;
    MONTH_NAMES.get(index).copied()
}

/// The first of the month is an ordinal; every other day is a cardinal.
fn day_words(day: u32) -> String {
    match day {
        1 => "Primeiro".to_string(),
        _ => capitalize_first(&to_words(u64::from(day))),
    }
}

impl CalendarDate {
    /// Spell the date out as "{Dia} de {Mês} de {ano}".
    pub fn to_text(&self) -> String {
        // CalendarDate only holds real dates with years in 0..=9999
        let month = month_name(self.month()).unwrap_or_default();
        let year = to_words(u64::from(self.year().unsigned_abs()));
        format!("{} de {} de {}", day_words(self.day()), month, year)
    }
}

/// Parse and spell out a `dd/mm/yyyy` date.
pub fn verbalize_date(input: &str) -> DateResult<String> {
    parse_date(input).map(|date| date.to_text())
}

/// Spell out a `dd/mm/yyyy` date, or return an empty string when the input
/// is malformed or names no real day.
pub fn date_to_text(input: &str) -> String {
    match verbalize_date(input) {
        Ok(text) => text,
        Err(err) => {
            tracing::debug!(input, %err, "date rejected");
            String::new()
        }
    }
}

/// Spell out a date given as separate fields, or return an empty string when
/// they name no real day.
pub fn date_parts_to_text(day: u32, month: u32, year: i32) -> String {
    match CalendarDate::new(day, month, year) {
        Ok(date) => date.to_text(),
        Err(err) => {
            tracing::debug!(day, month, year, %err, "date rejected");
            String::new()
        }
    }
}
