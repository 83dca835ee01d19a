use serde::Serialize;
use std::fmt;

const LOWERCASE_POOL: u32 = 26;
const UPPERCASE_POOL: u32 = 26;
const DIGIT_POOL: u32 = 10;
const OTHER_POOL: u32 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum StrengthLabel {
    Weak,
    Fair,
    Good,
    Strong,
    Secure,
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Fair => "Fair",
            StrengthLabel::Good => "Good",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::Secure => "Secure",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthResult {
    pub score: u8,
    pub label: StrengthLabel,
    pub entropy_bits: u32,
}

/// Sum of the class pools present anywhere in `password`. One symbol earns the
/// full symbol pool; anything outside ASCII letters and digits counts as a symbol.
pub fn charset_size(password: &str) -> u32 {
    let mut lower = false;
    let mut upper = false;
    let mut digit = false;
    let mut other = false;

    for c in password.chars() {
        match c {
            'a'..='z' => lower = true,
            'A'..='Z' => upper = true,
            '0'..='9' => digit = true,
            _ => other = true,
        }
    }

    [
        (lower, LOWERCASE_POOL),
        (upper, UPPERCASE_POOL),
        (digit, DIGIT_POOL),
        (other, OTHER_POOL),
    ]
    .iter()
    .filter(|(present, _)| *present)
    .map(|(_, pool)| pool)
    .sum()
}

/// `round(length * log2(charset_size))`, with length in Unicode scalar values.
///
/// This assumes every character was drawn uniformly from the detected pools, so
/// it overestimates human-chosen passwords.
pub fn entropy_bits(password: &str) -> u32 {
    let pool = charset_size(password);
    if pool == 0 {
        return 0;
    }

    let length = password.chars().count() as f64;
    (length * f64::from(pool).log2()).round() as u32
}

pub fn score_strength(password: &str) -> StrengthResult {
    let entropy = entropy_bits(password);

    let (score, label) = match entropy {
        0..40 => (0, StrengthLabel::Weak),
        40..60 => (1, StrengthLabel::Fair),
        60..80 => (2, StrengthLabel::Good),
        80..100 => (3, StrengthLabel::Strong),
        _ => (4, StrengthLabel::Secure),
    };

    StrengthResult {
        score,
        label,
        entropy_bits: entropy,
    }
}
