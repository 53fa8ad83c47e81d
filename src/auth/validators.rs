//! Form input validators
//!
//! The strength classifier gives partial credit for UI hinting; the
//! submission gate requires every property at once. The two are intentionally
//! different: advisory feedback is gradual, gating is binary.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Special characters accepted by the password checks
const SPECIAL_CHARS: &str = "@$!%*?&";

/// Check that an email looks like local@domain.tld with no embedded whitespace.
///
/// Empty input returns false; the controller treats an empty email as
/// not-yet-validated rather than invalid.
pub fn validate_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

/// A single predicate over an input string with its user-facing failure
/// reason.
pub struct ValidationRule {
    pub reason: &'static str,
    predicate: fn(&str) -> bool,
}

impl ValidationRule {
    pub fn check(&self, input: &str) -> bool {
        (self.predicate)(input)
    }
}

/// The five independent password rules, in a fixed order.
pub const PASSWORD_RULES: [ValidationRule; 5] = [
    ValidationRule {
        reason: "at least 8 characters",
        predicate: |pw| pw.chars().count() >= 8,
    },
    ValidationRule {
        reason: "an uppercase letter",
        predicate: |pw| pw.chars().any(|c| c.is_ascii_uppercase()),
    },
    ValidationRule {
        reason: "a lowercase letter",
        predicate: |pw| pw.chars().any(|c| c.is_ascii_lowercase()),
    },
    ValidationRule {
        reason: "a number",
        predicate: |pw| pw.chars().any(|c| c.is_ascii_digit()),
    },
    ValidationRule {
        reason: "a special character (@$!%*?&)",
        predicate: |pw| pw.chars().any(|c| SPECIAL_CHARS.contains(c)),
    },
];

/// Advisory password strength tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrength {
    Empty,
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordStrength::Empty => "empty",
            PasswordStrength::Weak => "weak",
            PasswordStrength::Medium => "medium",
            PasswordStrength::Strong => "strong",
        }
    }
}

/// Classify password strength by how many of the five rules pass.
///
/// 0-2 rules is Weak, 3-4 Medium, all five Strong. Empty input is its own
/// tier so the UI can show nothing instead of "weak".
pub fn classify_password_strength(password: &str) -> PasswordStrength {
    if password.is_empty() {
        return PasswordStrength::Empty;
    }

    let passed = PASSWORD_RULES
        .iter()
        .filter(|rule| rule.check(password))
        .count();
    match passed {
        0..=2 => PasswordStrength::Weak,
        3 | 4 => PasswordStrength::Medium,
        _ => PasswordStrength::Strong,
    }
}

/// Hard submission gate: all five rules must hold simultaneously.
pub fn validate_password_for_submission(password: &str) -> bool {
    PASSWORD_RULES.iter().all(|rule| rule.check(password))
}

/// Reasons for the rules a password still fails, for UI hinting.
pub fn failed_password_rules(password: &str) -> Vec<&'static str> {
    PASSWORD_RULES
        .iter()
        .filter(|rule| !rule.check(password))
        .map(|rule| rule.reason)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(validate_email("user@example.com"));
        assert!(validate_email("first.last@sub.domain.org"));

        assert!(!validate_email(""));
        assert!(!validate_email("plainaddress"));
        assert!(!validate_email("missing-tld@domain"));
        assert!(!validate_email("user @example.com"));
        assert!(!validate_email("user@exa mple.com"));
        assert!(!validate_email("user@@example.com"));
    }

    #[test]
    fn test_strength_tiers() {
        assert_eq!(classify_password_strength(""), PasswordStrength::Empty);
        assert_eq!(classify_password_strength("abc"), PasswordStrength::Weak);
        assert_eq!(classify_password_strength("abcdefgh"), PasswordStrength::Weak);
        assert_eq!(classify_password_strength("Abcdefgh"), PasswordStrength::Medium);
        assert_eq!(classify_password_strength("Abcdefg1"), PasswordStrength::Medium);
        assert_eq!(classify_password_strength("Abcdef1!"), PasswordStrength::Strong);
    }

    #[test]
    fn test_strength_monotonic_in_checks_passed() {
        // Each password passes one more check than the previous one.
        let ladder = ["a", "aB", "aB1", "aB1!", "aB1!aaaa"];
        let tiers: Vec<_> = ladder
            .iter()
            .map(|pw| classify_password_strength(pw))
            .collect();

        for pair in tiers.windows(2) {
            assert!(pair[0] <= pair[1], "strength dropped: {:?}", pair);
        }
    }

    #[test]
    fn test_submission_gate_is_strict() {
        assert!(validate_password_for_submission("Abcdef1!"));
        assert!(validate_password_for_submission("V3ryS@fePassword"));

        // Partial credit is not enough for submission.
        assert!(!validate_password_for_submission("abcdefgh"));
        assert!(!validate_password_for_submission("Abcdefg1")); // no special
        assert!(!validate_password_for_submission("Ab1!")); // too short
    }

    #[test]
    fn test_length_rule_counts_chars_not_bytes() {
        // 7 chars but 10 bytes; byte length would wrongly satisfy the rule.
        assert!(!validate_password_for_submission("Aa1!ééé"));
        assert!(validate_password_for_submission("Aa1!éééé"));
    }

    #[test]
    fn test_strength_serializes_as_its_name() {
        for tier in [
            PasswordStrength::Empty,
            PasswordStrength::Weak,
            PasswordStrength::Medium,
            PasswordStrength::Strong,
        ] {
            let json = serde_json::to_string(&tier).unwrap();
            assert_eq!(json, format!("\"{}\"", tier.as_str()));
        }
    }

    #[test]
    fn test_failed_rule_reasons() {
        let reasons = failed_password_rules("abcdefgh");
        assert_eq!(
            reasons,
            vec![
                "an uppercase letter",
                "a number",
                "a special character (@$!%*?&)"
            ]
        );
        assert!(failed_password_rules("Abcdef1!").is_empty());
    }

    #[test]
    fn test_gate_stricter_than_classifier() {
        // Medium passwords are fine as a hint but still gated out.
        let medium = "Abcdefg1";
        assert_eq!(classify_password_strength(medium), PasswordStrength::Medium);
        assert!(!validate_password_for_submission(medium));
    }
}
