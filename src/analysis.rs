use crate::breach::BreachStatus;
use crate::strength::{score_strength, StrengthResult};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::OnceLock;

const RUN_LENGTH: usize = 4;
const LOW_ENTROPY_BITS: u32 = 40;
const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

const COMMON_PASSWORDS: [&str; 25] = [
    "password", "123456", "12345678", "1234", "qwerty", "12345", "dragon", "pussy", "baseball",
    "football", "letmein", "monkey", "696969", "abc123", "mustang", "michael", "shadow", "master",
    "jennifer", "111111", "2000", "jordan", "superman", "harley", "ranger",
];

static COMMON_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();

fn common_passwords() -> &'static HashSet<&'static str> {
    COMMON_SET.get_or_init(|| COMMON_PASSWORDS.iter().copied().collect())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeaknessReport {
    pub is_sequential: bool,
    pub is_repeated: bool,
    pub is_common: bool,
    pub score: u8,
}

/// True when four consecutive code points (case-insensitive) step by +1 or -1.
pub fn has_sequential_run(password: &str) -> bool {
    let codes: Vec<u32> = password.to_lowercase().chars().map(u32::from).collect();

    codes.windows(RUN_LENGTH).any(|w| {
        let ascending = w.windows(2).all(|p| p[0].checked_add(1) == Some(p[1]));
        let descending = w.windows(2).all(|p| p[0].checked_sub(1) == Some(p[1]));
        ascending || descending
    })
}

/// True when one character appears four or more times in a row.
pub fn has_repeated_run(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars
        .windows(RUN_LENGTH)
        .any(|w| w.iter().all(|c| *c == w[0]))
}

pub fn is_common_password(password: &str) -> bool {
    common_passwords().contains(password.to_lowercase().as_str())
}

pub fn analyze_weakness(password: &str) -> WeaknessReport {
    let is_sequential = has_sequential_run(password);
    let is_repeated = has_repeated_run(password);
    let is_common = is_common_password(password);

    let score = u8::from(is_sequential) + u8::from(is_repeated) + 2 * u8::from(is_common);

    WeaknessReport {
        is_sequential,
        is_repeated,
        is_common,
        score,
    }
}

/// Remediation hints, always in the order length, uppercase, lowercase, numbers,
/// symbols, sequential, repeated, common.
pub fn recommendations(password: &str, entropy_bits: u32) -> Vec<String> {
    let mut hints = Vec::new();

    if entropy_bits < LOW_ENTROPY_BITS {
        hints.push("Use a longer password (16+ characters)");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        hints.push("Add uppercase letters");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        hints.push("Add lowercase letters");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        hints.push("Add numbers");
    }
    if !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        hints.push("Add special characters");
    }

    let report = analyze_weakness(password);
    if report.is_sequential {
        hints.push("Avoid sequential characters (abc, 123)");
    }
    if report.is_repeated {
        hints.push("Avoid repeated characters (aaa, 111)");
    }
    if report.is_common {
        hints.push("Avoid common passwords");
    }

    hints.into_iter().map(String::from).collect()
}

/// Everything known about one secret: strength, weak patterns, hints and, when
/// a lookup ran, its breach status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    pub strength: StrengthResult,
    pub weakness: WeaknessReport,
    pub recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breach: Option<BreachStatus>,
}

impl Assessment {
    pub fn new(password: &str, breach: Option<BreachStatus>) -> Self {
        let strength = score_strength(password);
        Self {
            strength,
            weakness: analyze_weakness(password),
            recommendations: recommendations(password, strength.entropy_bits),
            breach,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strength::StrengthLabel;

    #[test]
    fn test_sequential_detection() {
        let report = analyze_weakness("abcd1234");
        assert!(report.is_sequential);
        assert!(has_sequential_run("abcd"));
        assert!(has_sequential_run("1234"));
    }

    #[test]
    fn test_sequential_descending_and_case_insensitive() {
        assert!(has_sequential_run("xx9876"));
        assert!(has_sequential_run("DcBa"));
        assert!(has_sequential_run("aBcD"));
        assert!(has_sequential_run("zyxw"));
    }

    #[test]
    fn test_sequential_needs_four() {
        assert!(!has_sequential_run("abc"));
        assert!(!has_sequential_run("abce"));
        assert!(!has_sequential_run("ab-cd"));
        assert!(!has_sequential_run("1212"));
        assert!(!has_sequential_run(""));
    }

    #[test]
    fn test_repeated_detection() {
        assert!(has_repeated_run("aaaa"));
        assert!(has_repeated_run("x1111y"));
        assert!(!has_repeated_run("aaa"));
        assert!(!has_repeated_run("aaAa"));
        assert!(!has_repeated_run("abab"));
    }

    #[test]
    fn test_common_passwords() {
        assert!(analyze_weakness("password").is_common);
        assert!(analyze_weakness("PassWord").is_common);
        assert!(analyze_weakness("letmein").is_common);
        assert!(!analyze_weakness("password1").is_common);
        assert_eq!(COMMON_PASSWORDS.len(), common_passwords().len());
    }

    #[test]
    fn test_weakness_score() {
        assert_eq!(analyze_weakness("Xq7!vR2#").score, 0);
        assert_eq!(analyze_weakness("abcd").score, 1);
        assert_eq!(analyze_weakness("zzzzabcd").score, 2);
        assert_eq!(analyze_weakness("password").score, 2);

        // "1234" is sequential and common
        let report = analyze_weakness("1234");
        assert!(report.is_sequential && report.is_common && !report.is_repeated);
        assert_eq!(report.score, 3);

        // "111111" is repeated and common
        assert_eq!(analyze_weakness("111111").score, 3);
    }

    #[test]
    fn test_analysis_is_pure() {
        assert_eq!(analyze_weakness("abcd1234"), analyze_weakness("abcd1234"));
    }

    #[test]
    fn test_recommendations_order() {
        let password = "1234";
        let entropy = score_strength(password).entropy_bits;
        let hints = recommendations(password, entropy);

        assert_eq!(
            hints,
            vec![
                "Use a longer password (16+ characters)",
                "Add uppercase letters",
                "Add lowercase letters",
                "Add special characters",
                "Avoid sequential characters (abc, 123)",
                "Avoid common passwords",
            ]
        );
    }

    #[test]
    fn test_recommendations_repeated() {
        let hints = recommendations("aaaaBBBB", 60);
        assert_eq!(
            hints,
            vec![
                "Add numbers",
                "Add special characters",
                "Avoid repeated characters (aaa, 111)",
            ]
        );
    }

    #[test]
    fn test_recommendations_none_for_strong_password() {
        let password = "Xq7!vR2#kP9$mW4&";
        let entropy = score_strength(password).entropy_bits;
        assert!(recommendations(password, entropy).is_empty());
    }

    #[test]
    fn test_recommendations_empty_password() {
        let hints = recommendations("", 0);
        assert_eq!(hints.len(), 5);
        assert_eq!(hints[0], "Use a longer password (16+ characters)");
        assert_eq!(hints[4], "Add special characters");
    }

    #[test]
    fn test_assessment_collects_reports() {
        let assessment = Assessment::new("password", Some(BreachStatus::Found(3)));

        assert_eq!(assessment.strength.label, StrengthLabel::Weak);
        assert!(assessment.weakness.is_common);
        assert_eq!(
            assessment.recommendations,
            recommendations("password", assessment.strength.entropy_bits)
        );
        assert_eq!(assessment.breach, Some(BreachStatus::Found(3)));
    }

    #[test]
    fn test_assessment_serialization() {
        let json = serde_json::to_value(Assessment::new("password", Some(BreachStatus::LookupFailed)))
            .unwrap();
        assert_eq!(json["weakness"]["isCommon"], true);
        assert_eq!(json["breach"]["status"], "lookupFailed");
        assert!(json["strength"]["entropyBits"].is_number());

        let json = serde_json::to_value(Assessment::new("password", None)).unwrap();
        assert!(json.get("breach").is_none());
    }
}
