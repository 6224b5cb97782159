//! Decomposition of a number into scale groups (trilhão, bilhão, milhão, mil).

use crate::group::{verbalize_group, Group};

/// A power of one thousand with its Portuguese noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scale {
    Trillion,
    Billion,
    Million,
    Thousand,
}

impl Scale {
    /// Every scale, largest first. Each value is 1000 times the next.
    pub const DESCENDING: [Scale; 4] = [
        Scale::Trillion,
        Scale::Billion,
        Scale::Million,
        Scale::Thousand,
    ];

    pub fn value(self) -> u64 {
        match self {
            Scale::Trillion => 1_000_000_000_000,
            Scale::Billion => 1_000_000_000,
            Scale::Million => 1_000_000,
            Scale::Thousand => 1_000,
        }
    }

    pub fn singular(self) -> &'static str {
        match self {
            Scale::Trillion => "trilhão",
            Scale::Billion => "bilhão",
            Scale::Million => "milhão",
            Scale::Thousand => "mil",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Scale::Trillion => "trilhões",
            Scale::Billion => "bilhões",
            Scale::Million => "milhões",
            Scale::Thousand => "mil",
        }
    }

    /// Render `count` units of this scale.
    ///
    /// A single thousand is a bare "mil"; the other scales say "um milhão".
    /// Only the largest scale can see a count above 999, which is spelled
    /// out as a full number ("mil trilhões").
    fn phrase(self, count: u64) -> String {
        match (self, count) {
            (Scale::Thousand, 1) => "mil".to_string(),
            (_, 1) => format!("um {}", self.singular()),
            _ => format!("{} {}", count_words(count), self.plural()),
        }
    }
}

fn count_words(count: u64) -> String {
    match Group::try_from(count) {
        Ok(group) => verbalize_group(group),
        Err(count) => crate::number::to_words(count),
    }
}

/// One verbalized piece of a larger number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupPhrase {
    /// The words for this piece, scale noun included.
    pub text: String,
    /// The group's own count (never the scaled total). Drives the connector
    /// placed before the final phrase.
    pub value: u64,
    /// True for the units group that follows every scale group.
    pub is_trailing: bool,
}

impl GroupPhrase {
    fn scaled(scale: Scale, count: u64) -> Self {
        Self {
            text: scale.phrase(count),
            value: count,
            is_trailing: false,
        }
    }

    fn trailing(group: Group) -> Self {
        Self {
            text: verbalize_group(group),
            value: u64::from(group.value()),
            is_trailing: true,
        }
    }
}

/// Split `n` into its non-zero scale groups, largest first.
///
/// Zero decomposes to a single "zero" phrase.
pub fn decompose(mut n: u64) -> Vec<GroupPhrase> {
    if n == 0 {
        return vec![GroupPhrase {
            text: "zero".to_string(),
            value: 0,
            is_trailing: true,
        }];
    }

    let mut phrases = Vec::new();
    for scale in Scale::DESCENDING.iter().copied() {
        let count = n / scale.value();
        n %= scale.value();
        if count > 0 {
            phrases.push(GroupPhrase::scaled(scale, count));
        }
    }

    // n < 1000 after the thousands pass
    let units = Group::low_digits(n);
    if !units.is_zero() {
        phrases.push(GroupPhrase::trailing(units));
    }

    phrases
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(n: u64) -> Vec<(String, u64)> {
        decompose(n)
            .into_iter()
            .map(|phrase| (phrase.text, phrase.value))
            .collect()
    }

    #[test]
    fn scale_table_is_descending_by_thousands() {
        for pair in Scale::DESCENDING.windows(2) {
            assert_eq!(pair[0].value(), pair[1].value() * 1000);
        }
    }

    #[test]
    fn zero_is_a_single_phrase() {
        assert_eq!(
            decompose(0),
            vec![GroupPhrase {
                text: "zero".to_string(),
                value: 0,
                is_trailing: true,
            }]
        );
    }

    #[test]
    fn thousand_has_no_leading_um() {
        assert_eq!(texts(1000), vec![("mil".to_string(), 1)]);
        assert_eq!(texts(2000), vec![("dois mil".to_string(), 2)]);
    }

    #[test]
    fn larger_scales_take_um() {
        assert_eq!(texts(1_000_000), vec![("um milhão".to_string(), 1)]);
        assert_eq!(texts(1_000_000_000), vec![("um bilhão".to_string(), 1)]);
        assert_eq!(texts(1_000_000_000_000), vec![("um trilhão".to_string(), 1)]);
        assert_eq!(texts(3_000_000), vec![("três milhões".to_string(), 3)]);
    }

    #[test]
    fn values_are_group_counts() {
        assert_eq!(
            texts(1_234_567),
            vec![
                ("um milhão".to_string(), 1),
                ("duzentos e trinta e quatro mil".to_string(), 234),
                ("quinhentos e sessenta e sete".to_string(), 567),
            ]
        );
    }

    #[test]
    fn zero_groups_are_skipped() {
        assert_eq!(
            texts(5_000_007),
            vec![("cinco milhões".to_string(), 5), ("sete".to_string(), 7)]
        );
    }

    #[test]
    fn only_the_units_group_trails() {
        let phrases = decompose(2_024);
        assert!(!phrases[0].is_trailing);
        assert!(phrases[1].is_trailing);
    }

    #[test]
    fn trillion_count_above_999_is_spelled_out() {
        assert_eq!(texts(1_000_000_000_000_000), vec![("mil trilhões".to_string(), 1000)]);
        assert_eq!(
            texts(2_500_000_000_000_000),
            vec![("dois mil e quinhentos trilhões".to_string(), 2500)]
        );
    }
}
