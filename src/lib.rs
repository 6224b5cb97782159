//! Brazilian Portuguese number verbalization ("valores por extenso").
//!
//! This crate turns a non-negative integer into the words a Brazilian
//! speaker would write on a cheque or a contract:
//!
//! ```
//! use extenso::{to_words, ToWords};
//!
//! assert_eq!(to_words(247), "duzentos e quarenta e sete");
//! assert_eq!(to_words(1_500_000), "um milhão e quinhentos mil");
//! assert_eq!(2024u16.to_words(), "dois mil e vinte e quatro");
//! ```
//!
//! ## Architecture
//!
//! A number is processed in three layers:
//! - [`group`]: spells out a single `0..=999` group ("cem" vs "cento")
//! - [`scale`]: splits a number into groups of thousands and attaches the
//!   scale nouns ("mil", "milhão", "bilhões", ...)
//! - [`joiner`]: stitches the groups together, choosing "e" or a comma
//!   before the last one
//!
//! Sibling crates build on [`to_words`]: `extenso-currency` for amounts in
//! reais and `extenso-date` for calendar dates.

pub mod group;
pub mod joiner;
pub mod number;
pub mod scale;
mod text;

pub use group::{verbalize_group, Group};
pub use joiner::join;
pub use number::{to_words, ToWords};
pub use scale::{decompose, GroupPhrase, Scale};
pub use text::capitalize_first;
