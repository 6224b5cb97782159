//! Stitching group phrases into one number phrase.

use crate::scale::GroupPhrase;

/// True when the final phrase is introduced by " e " instead of ", ".
///
/// Portuguese says "mil e um" and "mil e duzentos" but
/// "mil, quinhentos e vinte e três": only a final value below one hundred or
/// a round number of hundreds takes "e".
fn takes_e(last: &GroupPhrase) -> bool {
    last.value < 100 || last.value % 100 == 0
}

/// Join phrases with ", ", except the last boundary which follows
/// [`takes_e`]. Earlier boundaries are always commas.
pub fn join(phrases: &[GroupPhrase]) -> String {
    let (last, init) = match phrases.split_last() {
        Some(split) => split,
        None => return String::new(),
    };
    if init.is_empty() {
        return last.text.clone();
    }

    let mut out = init
        .iter()
        .map(|phrase| phrase.text.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    out.push_str(if takes_e(last) { " e " } else { ", " });
    out.push_str(&last.text);
    out
}
