//! UTF-8-safe string truncation for terminal display

/// Truncate a string to a maximum number of CHARACTERS (not bytes).
///
/// Respects UTF-8 character boundaries and never panics, even with
/// multi-byte characters (question titles routinely carry math symbols).
///
/// # Examples
/// ```
/// # use quizdrill::utils::string_utils::safe_truncate_chars;
/// assert_eq!(safe_truncate_chars("GATE CSE 2021 | Question 42", 8), "GATE CSE");
/// assert_eq!(safe_truncate_chars("σ-algebra", 1), "σ");
/// assert_eq!(safe_truncate_chars("short", 100), "short");
/// ```
#[inline]
pub fn safe_truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        None => s,
        Some((byte_idx, _)) => &s[..byte_idx],
    }
}
