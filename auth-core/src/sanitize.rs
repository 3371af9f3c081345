//! Defense-in-depth normalization for untrusted text.
//!
//! Sanitization strips markup and injection-associated tokens before a value
//! is validated or stored. It is not a substitute for parameterized
//! persistence access, which remains the storage collaborator's job.

use std::sync::LazyLock;

use regex::Regex;

/// Markup-like tag sequences: an angle-bracket pair and everything between.
static TAG_SEQUENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Tokens that never survive sanitization: stray angle brackets, statement
/// terminators, comment markers, script URLs, and bare SQL verbs.
static DENYLIST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[<>]|javascript:|--|;|/\*|\*/|\b(?:select|insert|update|delete|drop|union|exec)\b")
        .unwrap()
});

/// Patterns that mark a value as an injection attempt rather than data.
static SUSPICIOUS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<script|javascript:|on\w+\s*=|union\s+select|drop\s+table|delete\s+from|--|;")
        .unwrap()
});

/// Strip markup and injection-associated tokens from untrusted text.
///
/// Runs to a fixpoint: when one removal exposes another denied token
/// (`dr--op` becomes `drop`), the pass repeats until the output is stable.
/// Sanitizing twice therefore always equals sanitizing once.
pub fn sanitize(input: &str) -> String {
    let mut current = input.to_string();

    loop {
        let stripped = TAG_SEQUENCE.replace_all(&current, "");
        let stripped = DENYLIST.replace_all(&stripped, "");
        let stripped = stripped.trim();

        if stripped == current {
            return current;
        }
        current = stripped.to_string();
    }
}

/// Canonical form for email storage and lookup: trimmed and lowercased.
pub fn normalize_email(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Whether a value matches a known injection pattern.
///
/// Backs the validator's unsafe-content rule for free-text fields whose
/// character set is otherwise unconstrained.
pub fn is_suspicious(input: &str) -> bool {
    SUSPICIOUS.is_match(input)
}
