//! Field validation rules
//!
//! Rules run after the required-field check and only against non-empty
//! values; an optional field left blank always passes.

use regex::Regex;
use tracing::warn;

/// A regular expression compiled once, with its failure message
///
/// An invalid expression is logged when built and then rejects every
/// value.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    compiled: Option<Regex>,
    message: String,
}

impl Pattern {
    pub fn new(regex: impl Into<String>, message: impl Into<String>) -> Self {
        let source = regex.into();
        let compiled = match Regex::new(&source) {
            Ok(re) => Some(re),
            Err(err) => {
                warn!(pattern = %source, error = %err, "Invalid validation pattern");
                None
            }
        };
        Self {
            source,
            compiled,
            message: message.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_valid(&self) -> bool {
        self.compiled.is_some()
    }

    fn check(&self, value: &str) -> Result<(), String> {
        match &self.compiled {
            Some(re) if re.is_match(value) => Ok(()),
            _ => Err(self.message.clone()),
        }
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.message == other.message
    }
}

/// A validation rule attached to a form field
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// Minimum number of characters
    MinLength(usize),
    /// Maximum number of characters
    MaxLength(usize),
    /// Must match a regular expression
    Pattern(Pattern),
    /// 10 to 15 digits, optionally prefixed with `+`
    Phone,
    /// Only ASCII digits
    Digits,
    /// One of a fixed set of values
    OneOf(Vec<String>),
    /// Caller supplied check returning the failure message
    Custom(fn(&str) -> Result<(), String>),
}

impl Rule {
    /// Shorthand for [`Rule::Pattern`]
    pub fn pattern(regex: impl Into<String>, message: impl Into<String>) -> Self {
        Rule::Pattern(Pattern::new(regex, message))
    }

    /// Check a value, returning the failure message
    ///
    /// `label` is the field's display label, used to phrase the message.
    pub fn check(&self, label: &str, value: &str) -> Result<(), String> {
        if value.is_empty() {
            return Ok(());
        }
        match self {
            Rule::MinLength(n) => {
                if value.chars().count() < *n {
                    return Err(format!("{label} must be at least {n} characters"));
                }
            }
            Rule::MaxLength(n) => {
                if value.chars().count() > *n {
                    return Err(format!("{label} must be at most {n} characters"));
                }
            }
            Rule::Pattern(pattern) => pattern.check(value)?,
            Rule::Phone => {
                let digits = value.strip_prefix('+').unwrap_or(value);
                let valid = (10..=15).contains(&digits.len())
                    && digits.chars().all(|c| c.is_ascii_digit());
                if !valid {
                    return Err(format!("{label} must be a valid phone number"));
                }
            }
            Rule::Digits => {
                if !value.chars().all(|c| c.is_ascii_digit()) {
                    return Err(format!("{label} must contain digits only"));
                }
            }
            Rule::OneOf(values) => {
                if !values.iter().any(|v| v == value) {
                    return Err(format!("{label} must be one of: {}", values.join(", ")));
                }
            }
            Rule::Custom(check) => check(value)?,
        }
        Ok(())
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::MinLength(n) => write!(f, "min_length({n})"),
            Rule::MaxLength(n) => write!(f, "max_length({n})"),
            Rule::Pattern(pattern) => write!(f, "pattern({})", pattern.as_str()),
            Rule::Phone => write!(f, "phone"),
            Rule::Digits => write!(f, "digits"),
            Rule::OneOf(values) => write!(f, "one_of({})", values.join("|")),
            Rule::Custom(_) => write!(f, "custom"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_spaces(value: &str) -> Result<(), String> {
        if value.contains(' ') {
            Err("Username cannot contain spaces".into())
        } else {
            Ok(())
        }
    }

    #[test]
    fn test_blank_values_pass() {
        assert!(Rule::MinLength(3).check("Title", "").is_ok());
        assert!(Rule::Phone.check("Mobile", "").is_ok());
    }

    #[test]
    fn test_length_rules() {
        assert_eq!(
            Rule::MinLength(3).check("Title", "ab"),
            Err("Title must be at least 3 characters".into())
        );
        assert!(Rule::MaxLength(3).check("Code", "abc").is_ok());
        assert!(Rule::MaxLength(3).check("Code", "abcd").is_err());
    }

    #[test]
    fn test_phone() {
        assert!(Rule::Phone.check("Mobile", "03001234567").is_ok());
        assert!(Rule::Phone.check("Mobile", "+923001234567").is_ok());
        assert!(Rule::Phone.check("Mobile", "12345").is_err());
        assert!(Rule::Phone.check("Mobile", "0300-1234567").is_err());
    }

    #[test]
    fn test_pattern() {
        let rule = Rule::pattern("^[A-Z]{2}[0-9]+$", "Code must look like AB12");
        assert!(rule.check("Code", "LH01").is_ok());
        assert_eq!(rule.check("Code", "lh01"), Err("Code must look like AB12".into()));
        assert_eq!(rule.to_string(), "pattern(^[A-Z]{2}[0-9]+$)");
    }

    #[test]
    fn test_pattern_compiled_once_when_built() {
        let Rule::Pattern(pattern) = Rule::pattern("^[0-9]+$", "Digits only") else {
            panic!("expected a pattern rule");
        };
        assert!(pattern.is_valid());
        assert_eq!(pattern, Pattern::new("^[0-9]+$", "Digits only"));

        // Repeated checks reuse the compiled expression
        let rule = Rule::Pattern(pattern);
        for value in ["1", "22", "333"] {
            assert!(rule.check("Code", value).is_ok());
        }
    }

    #[test]
    fn test_invalid_pattern_rejects_everything() {
        let rule = Rule::pattern("([unclosed", "Code is malformed");
        let Rule::Pattern(pattern) = &rule else {
            panic!("expected a pattern rule");
        };
        assert!(!pattern.is_valid());
        assert_eq!(rule.check("Code", "anything"), Err("Code is malformed".into()));
        assert!(rule.check("Code", "").is_ok());
    }

    #[test]
    fn test_one_of_and_custom() {
        let rule = Rule::OneOf(vec!["admin".into(), "user".into()]);
        assert!(rule.check("Role", "user").is_ok());
        assert!(rule.check("Role", "root").is_err());

        let custom = Rule::Custom(no_spaces);
        assert_eq!(
            custom.check("Username", "a b"),
            Err("Username cannot contain spaces".into())
        );
        assert_eq!(custom.to_string(), "custom");
    }
}
