//! Text normalisation shared by user and product input.

use crate::error::{DomainError, DomainResult};

/// Trim surrounding whitespace and escape angle brackets.
///
/// Idempotent: a value read back and resubmitted is stored unchanged.
pub fn sanitize(raw: &str) -> String {
    let trimmed = raw.trim();
    let mut out = String::with_capacity(trimmed.len());
    for ch in trimmed.chars() {
        match ch {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Check the character length of an already trimmed value.
pub fn check_length(field: &str, value: &str, min: usize, max: usize) -> DomainResult<()> {
    let len = value.chars().count();
    if len == 0 {
        return Err(DomainError::validation(format!("{} is required", field)));
    }
    if len < min {
        return Err(DomainError::validation(format!(
            "{} must be at least {} characters",
            field, min
        )));
    }
    if len > max {
        return Err(DomainError::validation(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(())
}

/// Validate the trimmed value, then sanitise it for storage.
pub fn clean_field(field: &str, raw: &str, min: usize, max: usize) -> DomainResult<String> {
    check_length(field, raw.trim(), min, max)?;
    Ok(sanitize(raw))
}
