use crate::domain::model::{Field, RecordEntry};
use crate::utils::validation::{anchor_pattern, char_length, is_email_shape};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

const DIGITS_ONLY: &str = "^[0-9]*$";

#[derive(Debug, Clone)]
pub enum Rule {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Email,
    Pattern(Regex),
}

impl Rule {
    /// Builds a pattern rule that must match the whole value.
    pub fn pattern(source: &str) -> Result<Self, regex::Error> {
        Regex::new(&anchor_pattern(source)).map(Rule::Pattern)
    }

    /// Checks one value. Every rule except `Required` skips empty values.
    pub fn check(&self, value: &str) -> Option<RuleViolation> {
        if value.is_empty() {
            return match self {
                Rule::Required => Some(RuleViolation::Required),
                _ => None,
            };
        }

        let actual = char_length(value);
        match self {
            Rule::Required => None,
            Rule::MinLength(required) if actual < *required => Some(RuleViolation::MinLength {
                required: *required,
                actual,
            }),
            Rule::MaxLength(required) if actual > *required => Some(RuleViolation::MaxLength {
                required: *required,
                actual,
            }),
            Rule::Email if !is_email_shape(value) => Some(RuleViolation::Email),
            Rule::Pattern(regex) if !regex.is_match(value) => Some(RuleViolation::Pattern {
                pattern: regex.as_str().to_string(),
                actual: value.to_string(),
            }),
            _ => None,
        }
    }
}

/// A failed rule, tagged the way the rendering side keys its error text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", rename_all = "lowercase")]
pub enum RuleViolation {
    Required,
    MinLength { required: usize, actual: usize },
    MaxLength { required: usize, actual: usize },
    Email,
    Pattern { pattern: String, actual: String },
}

impl RuleViolation {
    pub fn tag(&self) -> &'static str {
        match self {
            RuleViolation::Required => "required",
            RuleViolation::MinLength { .. } => "minlength",
            RuleViolation::MaxLength { .. } => "maxlength",
            RuleViolation::Email => "email",
            RuleViolation::Pattern { .. } => "pattern",
        }
    }

    pub fn message(&self, field: Field) -> String {
        match self {
            RuleViolation::Required => format!("{} is required", field),
            RuleViolation::MinLength { required, .. } => {
                format!("{} must be at least {} characters", field, required)
            }
            RuleViolation::MaxLength { required, .. } => {
                format!("{} must be at most {} characters", field, required)
            }
            RuleViolation::Email => format!("{} must be a valid email address", field),
            RuleViolation::Pattern { pattern, .. } if pattern == DIGITS_ONLY => {
                format!("{} must contain only digits", field)
            }
            RuleViolation::Pattern { pattern, .. } => {
                format!("{} must match the pattern {}", field, pattern)
            }
        }
    }
}

impl fmt::Display for RuleViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Violations of one entry, keyed by field. Fields without violations are absent.
pub type EntryErrors = BTreeMap<Field, Vec<RuleViolation>>;

/// Applies every rule and reports all failures in rule order.
pub fn validate_field(rules: &[Rule], value: &str) -> Vec<RuleViolation> {
    rules.iter().filter_map(|rule| rule.check(value)).collect()
}

#[derive(Debug, Clone)]
pub struct ValidationPolicy {
    rules: BTreeMap<Field, Vec<Rule>>,
}

static USER_INFO: LazyLock<ValidationPolicy> = LazyLock::new(|| {
    let mut rules = BTreeMap::new();
    rules.insert(
        Field::Name,
        vec![Rule::Required, Rule::MinLength(2), Rule::MaxLength(20)],
    );
    rules.insert(
        Field::Email,
        vec![Rule::Required, Rule::MaxLength(20), Rule::Email],
    );
    rules.insert(
        Field::Mobile,
        vec![
            Rule::Required,
            Rule::MinLength(10),
            Rule::Pattern(Regex::new(DIGITS_ONLY).expect("mobile pattern is valid")),
        ],
    );
    ValidationPolicy { rules }
});

impl ValidationPolicy {
    /// The policy every user-info entry is checked against.
    pub fn user_info() -> &'static ValidationPolicy {
        &USER_INFO
    }

    pub fn rules_for(&self, field: Field) -> &[Rule] {
        self.rules.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn validate_value(&self, field: Field, value: &str) -> Vec<RuleViolation> {
        validate_field(self.rules_for(field), value)
    }

    pub fn validate_entry(&self, entry: &RecordEntry) -> EntryErrors {
        Field::ALL
            .iter()
            .filter_map(|field| {
                let violations = self.validate_value(*field, entry.get(*field));
                (!violations.is_empty()).then_some((*field, violations))
            })
            .collect()
    }

    pub fn is_valid(&self, entry: &RecordEntry) -> bool {
        Field::ALL
            .iter()
            .all(|field| self.validate_value(*field, entry.get(*field)).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_errors(value: &str) -> Vec<RuleViolation> {
        ValidationPolicy::user_info().validate_value(Field::Name, value)
    }

    fn email_errors(value: &str) -> Vec<RuleViolation> {
        ValidationPolicy::user_info().validate_value(Field::Email, value)
    }

    fn mobile_errors(value: &str) -> Vec<RuleViolation> {
        ValidationPolicy::user_info().validate_value(Field::Mobile, value)
    }

    #[test]
    fn test_name_length_bounds() {
        assert!(name_errors("Al").is_empty());
        assert!(name_errors(&"a".repeat(20)).is_empty());
        assert_eq!(
            name_errors("A"),
            vec![RuleViolation::MinLength {
                required: 2,
                actual: 1
            }]
        );
        assert_eq!(
            name_errors(&"a".repeat(21)),
            vec![RuleViolation::MaxLength {
                required: 20,
                actual: 21
            }]
        );
    }

    #[test]
    fn test_empty_value_reports_only_required() {
        assert_eq!(name_errors(""), vec![RuleViolation::Required]);
        assert_eq!(email_errors(""), vec![RuleViolation::Required]);
        assert_eq!(mobile_errors(""), vec![RuleViolation::Required]);
    }

    #[test]
    fn test_email_rules() {
        assert!(email_errors("a@b.com").is_empty());
        assert_eq!(email_errors("not-an-email"), vec![RuleViolation::Email]);

        let long = "abcdefghijkl@test.com";
        assert_eq!(long.len(), 21);
        assert_eq!(
            email_errors(long),
            vec![RuleViolation::MaxLength {
                required: 20,
                actual: 21
            }]
        );
    }

    #[test]
    fn test_mobile_rules_are_independent() {
        assert!(mobile_errors("1234567890").is_empty());
        assert_eq!(
            mobile_errors("123"),
            vec![RuleViolation::MinLength {
                required: 10,
                actual: 3
            }]
        );

        let errors = mobile_errors("12345abcde");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].tag(), "pattern");

        // Short and non-numeric fails both rules.
        let tags: Vec<_> = mobile_errors("12a").iter().map(RuleViolation::tag).collect();
        assert_eq!(tags, vec!["minlength", "pattern"]);
    }

    #[test]
    fn test_validate_entry_keys_only_failing_fields() {
        let policy = ValidationPolicy::user_info();
        let entry = RecordEntry::new("Jo", "bad", "1234567890");
        let errors = policy.validate_entry(&entry);

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&Field::Email], vec![RuleViolation::Email]);
        assert!(!policy.is_valid(&entry));
        assert!(policy.is_valid(&RecordEntry::new("Jo", "jo@x.com", "1234567890")));
    }

    #[test]
    fn test_custom_pattern_is_anchored() {
        let rule = Rule::pattern("[0-9]+").unwrap();
        assert!(rule.check("123").is_none());
        assert!(rule.check("123x").is_some());
    }

    #[test]
    fn test_violation_messages() {
        assert_eq!(RuleViolation::Required.message(Field::Name), "name is required");
        assert_eq!(
            RuleViolation::Email.message(Field::Email),
            "email must be a valid email address"
        );
        let json = serde_json::to_value(RuleViolation::MinLength {
            required: 2,
            actual: 1,
        })
        .unwrap();
        assert_eq!(json["rule"], "minlength");
        assert_eq!(json["required"], 2);
    }
}
