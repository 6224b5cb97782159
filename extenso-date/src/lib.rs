//! Calendar dates spelled out in Brazilian Portuguese.
//!
//! ```
//! use extenso_date::{date_parts_to_text, date_to_text};
//!
//! assert_eq!(
//!     date_to_text("01/01/2024"),
//!     "Primeiro de Janeiro de dois mil e vinte e quatro"
//! );
//! assert_eq!(
//!     date_parts_to_text(25, 12, 2000),
//!     "Vinte e cinco de Dezembro de dois mil"
//! );
//! assert_eq!(date_to_text("32/01/2024"), "");
//! ```
//!
//! Dates are validated with `chrono` before anything is spelled out; the
//! day and year go through `extenso::to_words` and the month comes from a
//! fixed name table.

mod calendar;
mod error;
mod verbalizer;

pub use calendar::{parse_date, CalendarDate};
pub use error::{DateError, DateResult};
pub use verbalizer::{date_parts_to_text, date_to_text, month_name, verbalize_date};
