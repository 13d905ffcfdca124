//! Redaction of private user data.
//!
//! A redacted string keeps its length but replaces every character with
//! `*`, so logs still show whether a value was present and how long it was.

/// Entities that can produce a copy with private user data masked.
pub trait Redactable {
    /// True if this value is already a redacted copy.
    fn is_redacted(&self) -> bool;

    /// Returns a copy with private user data masked. Ids, flags and type
    /// codes are kept as-is.
    #[must_use]
    fn redacted_copy(&self) -> Self
    where
        Self: Sized;
}

/// Replaces every character of `value` with `*`.
#[must_use]
pub fn redact_str(value: &str) -> String {
    "*".repeat(value.chars().count())
}

/// Redacts an optional string, keeping `None` as `None`.
#[must_use]
pub fn redacted(value: &Option<String>) -> Option<String> {
    value.as_deref().map(redact_str)
}
