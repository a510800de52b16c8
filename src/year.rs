//! Footer copyright year.

#[cfg(test)]
#[path = "year_test.rs"]
mod year_test;

/// Replace the first occurrence of `token` in `text` with `year`.
///
/// Returns `None` when the token does not appear, so callers can skip the write.
#[must_use]
pub fn stamp_year(text: &str, token: &str, year: u32) -> Option<String> {
    if token.is_empty() || !text.contains(token) {
        return None;
    }
    Some(text.replacen(token, &year.to_string(), 1))
}
