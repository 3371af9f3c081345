use std::str::FromStr;

use email_address::EmailAddress;

use super::errors::Rule;
use super::errors::ValidationError;
use crate::sanitize;

/// Longest offending-value summary carried in a validation error.
const SUMMARY_LIMIT: usize = 48;

/// Field thresholds and password character-class requirements.
///
/// Sourced from configuration at startup; defaults match an interactive
/// registration form.
#[derive(Debug, Clone)]
pub struct CredentialPolicy {
    pub username_min: usize,
    pub username_max: usize,
    pub password_min: usize,
    pub password_max: usize,
    pub password_require_digit: bool,
    pub password_require_symbol: bool,
    pub password_require_uppercase: bool,
    pub password_require_lowercase: bool,
}

impl Default for CredentialPolicy {
    fn default() -> Self {
        Self {
            username_min: 3,
            username_max: 32,
            password_min: 8,
            // The hasher's input limit; a validated password never fails
            // hashing on length.
            password_max: 72,
            password_require_digit: true,
            password_require_symbol: true,
            password_require_uppercase: true,
            password_require_lowercase: true,
        }
    }
}

/// Rule-driven validation over registration fields.
///
/// All fields are checked and every violation collected in one pass rather
/// than failing fast, so a single request can report multiple errors.
/// Required fields reject emptiness; optional fields pass trivially when
/// absent or empty.
#[derive(Debug, Clone)]
pub struct CredentialValidator {
    policy: CredentialPolicy,
}

impl CredentialValidator {
    pub fn new(policy: CredentialPolicy) -> Self {
        Self { policy }
    }

    /// Validate a full registration record.
    ///
    /// # Returns
    /// Every violation found; empty on success
    pub fn validate_registration(
        &self,
        username: &str,
        email: &str,
        password: &str,
        avatar: Option<&str>,
    ) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        self.check_username(username, &mut errors);
        self.check_email(email, &mut errors);
        self.check_password(password, &mut errors);
        self.check_optional_text("avatar", avatar, &mut errors);

        errors
    }

    /// Password rules alone, for update paths that touch nothing else.
    pub fn validate_password(&self, password: &str) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        self.check_password(password, &mut errors);
        errors
    }

    fn check_username(&self, username: &str, errors: &mut Vec<ValidationError>) {
        if username.is_empty() {
            errors.push(violation("username", Rule::Required, username));
            return;
        }

        let length = username.chars().count();
        if length < self.policy.username_min {
            let rule = Rule::TooShort {
                min: self.policy.username_min,
            };
            errors.push(violation("username", rule, username));
        } else if length > self.policy.username_max {
            let rule = Rule::TooLong {
                max: self.policy.username_max,
            };
            errors.push(violation("username", rule, username));
        }

        if !username
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
        {
            errors.push(violation("username", Rule::InvalidCharacters, username));
        }
    }

    fn check_email(&self, email: &str, errors: &mut Vec<ValidationError>) {
        if email.is_empty() {
            errors.push(violation("email", Rule::Required, email));
            return;
        }

        if EmailAddress::from_str(email).is_err() {
            errors.push(violation("email", Rule::InvalidEmail, email));
        }
    }

    fn check_password(&self, password: &str, errors: &mut Vec<ValidationError>) {
        if password.is_empty() {
            errors.push(password_violation(Rule::Required, password));
            return;
        }

        let length = password.chars().count();
        if length < self.policy.password_min {
            let rule = Rule::TooShort {
                min: self.policy.password_min,
            };
            errors.push(password_violation(rule, password));
        } else if length > self.policy.password_max {
            let rule = Rule::TooLong {
                max: self.policy.password_max,
            };
            errors.push(password_violation(rule, password));
        }

        if self.policy.password_require_digit && !password.chars().any(|c| c.is_ascii_digit()) {
            errors.push(password_violation(Rule::MissingDigit, password));
        }
        if self.policy.password_require_symbol
            && !password.chars().any(|c| c.is_ascii_punctuation())
        {
            errors.push(password_violation(Rule::MissingSymbol, password));
        }
        if self.policy.password_require_uppercase && !password.chars().any(char::is_uppercase) {
            errors.push(password_violation(Rule::MissingUppercase, password));
        }
        if self.policy.password_require_lowercase && !password.chars().any(char::is_lowercase) {
            errors.push(password_violation(Rule::MissingLowercase, password));
        }
    }

    fn check_optional_text(
        &self,
        field: &'static str,
        value: Option<&str>,
        errors: &mut Vec<ValidationError>,
    ) {
        let Some(value) = value else { return };
        if value.is_empty() {
            return;
        }

        if sanitize::is_suspicious(value) {
            errors.push(violation(field, Rule::UnsafeContent, value));
        }
    }
}

impl Default for CredentialValidator {
    fn default() -> Self {
        Self::new(CredentialPolicy::default())
    }
}

fn violation(field: &'static str, rule: Rule, value: &str) -> ValidationError {
    ValidationError {
        field,
        rule,
        value: summarize(value),
    }
}

/// Password violations carry a length summary, never the value itself.
fn password_violation(rule: Rule, password: &str) -> ValidationError {
    ValidationError {
        field: "password",
        rule,
        value: format!("<{} characters>", password.chars().count()),
    }
}

fn summarize(value: &str) -> String {
    if value.chars().count() <= SUMMARY_LIMIT {
        value.to_string()
    } else {
        let head: String = value.chars().take(SUMMARY_LIMIT).collect();
        format!("{head}...")
    }
}
