//! Verbalization of a single three-digit group (0..=999).
//!
//! Every larger number is spelled out one group at a time, so this is the
//! only place that knows the irregular Portuguese words for units, tens and
//! hundreds.

/// Units and teens. Non-compositional: 15 is "quinze", never "dez e cinco".
const ONES: [&str; 20] = [
    "zero",
    "um",
    "dois",
    "três",
    "quatro",
    "cinco",
    "seis",
    "sete",
    "oito",
    "nove",
    "dez",
    "onze",
    "doze",
    "treze",
    "quatorze",
    "quinze",
    "dezesseis",
    "dezessete",
    "dezoito",
    "dezenove",
];

/// Tens, indexed by the tens digit (2..=9).
const TENS: [&str; 10] = [
    "",
    "",
    "vinte",
    "trinta",
    "quarenta",
    "cinquenta",
    "sessenta",
    "setenta",
    "oitenta",
    "noventa",
];

/// A number in `0..=999`, the unit every scale word counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Group(u16);

impl Group {
    /// Largest value a group can hold.
    pub const MAX: u16 = 999;

    /// Create a group, or `None` if `value` does not fit in three digits.
    pub fn new(value: u16) -> Option<Self> {
        if value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Take the lowest three digits of `n`.
    pub fn low_digits(n: u64) -> Self {
        // n % 1000 < 1000, so the cast is lossless
        Self((n % 1000) as u16)
    }

    pub fn value(self) -> u16 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Spell the group out. Zero yields an empty string, since a zero group
    /// is omitted from any larger number.
    pub fn to_words(self) -> String {
        verbalize_group(self)
    }
}

impl TryFrom<u64> for Group {
    type Error = u64;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if value <= u64::from(Self::MAX) {
            Ok(Self(value as u16))
        } else {
            Err(value)
        }
    }
}

/// The hundreds part of a group.
///
/// "cem" only exists as a whole group; any remainder turns it into "cento".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Hundreds {
    Zero,
    /// Exactly one hundred, nothing after it.
    Cem,
    /// Hundreds digit 1..=9 followed by a non-zero remainder, or 2..=9 alone.
    Digit(u16),
}

impl Hundreds {
    fn of(group: Group) -> Self {
        match (group.0 / 100, group.0 % 100) {
            (0, _) => Hundreds::Zero,
            (1, 0) => Hundreds::Cem,
            (digit, _) => Hundreds::Digit(digit),
        }
    }

    fn word(self) -> Option<&'static str> {
        match self {
            Hundreds::Zero => None,
            Hundreds::Cem => Some("cem"),
            Hundreds::Digit(1) => Some("cento"),
            Hundreds::Digit(2) => Some("duzentos"),
            Hundreds::Digit(3) => Some("trezentos"),
            Hundreds::Digit(4) => Some("quatrocentos"),
            Hundreds::Digit(5) => Some("quinhentos"),
            Hundreds::Digit(6) => Some("seiscentos"),
            Hundreds::Digit(7) => Some("setecentos"),
            Hundreds::Digit(8) => Some("oitocentos"),
            Hundreds::Digit(_) => Some("novecentos"),
        }
    }
}

/// Spell out a group: "duzentos e quarenta e sete" for 247.
///
/// Parts (hundreds, tens, units) are joined with " e ".
pub fn verbalize_group(group: Group) -> String {
    if group.is_zero() {
        return String::new();
    }

    let mut parts: Vec<&'static str> = Vec::with_capacity(3);
    if let Some(word) = Hundreds::of(group).word() {
        parts.push(word);
    }

    let rest = usize::from(group.0 % 100);
    if rest >= 20 {
        parts.push(TENS[rest / 10]);
        if rest % 10 > 0 {
            parts.push(ONES[rest % 10]);
        }
    } else if rest > 0 {
        parts.push(ONES[rest]);
    }

    parts.join(" e ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: u16) -> String {
        verbalize_group(Group::new(n).unwrap())
    }

    #[test]
    fn zero_is_empty() {
        assert_eq!(words(0), "");
    }

    #[test]
    fn units_and_teens() {
        assert_eq!(words(1), "um");
        assert_eq!(words(3), "três");
        assert_eq!(words(10), "dez");
        assert_eq!(words(14), "quatorze");
        assert_eq!(words(15), "quinze");
        assert_eq!(words(19), "dezenove");
    }

    #[test]
    fn tens() {
        assert_eq!(words(20), "vinte");
        assert_eq!(words(21), "vinte e um");
        assert_eq!(words(50), "cinquenta");
        assert_eq!(words(99), "noventa e nove");
    }

    #[test]
    fn cem_versus_cento() {
        assert_eq!(words(100), "cem");
        assert_eq!(words(101), "cento e um");
        assert_eq!(words(110), "cento e dez");
        assert_eq!(words(199), "cento e noventa e nove");
    }

    #[test]
    fn hundreds() {
        assert_eq!(words(200), "duzentos");
        assert_eq!(words(247), "duzentos e quarenta e sete");
        assert_eq!(words(305), "trezentos e cinco");
        assert_eq!(words(515), "quinhentos e quinze");
        assert_eq!(words(999), "novecentos e noventa e nove");
    }

    #[test]
    fn group_bounds() {
        assert_eq!(Group::new(999).map(Group::value), Some(999));
        assert_eq!(Group::new(1000), None);
        assert_eq!(Group::try_from(1000u64), Err(1000));
        assert_eq!(Group::low_digits(1_234_567).value(), 567);
    }
}
