//! Output sanitization

/// Reduce a sentence to letters, digits and spaces.
///
/// Every other character is removed outright (not replaced), so
/// `"Value: 3.14% (approx)."` becomes `"Value 314 approx"`. Runs of spaces
/// are left as they are.
pub fn sanitize(sentence: &str) -> String {
    sentence
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ')
        .collect()
}

/// True if a sanitized sentence still has more than one character
/// once surrounding spaces are ignored
pub fn is_emittable(sanitized: &str) -> bool {
    sanitized.trim().chars().nth(1).is_some()
}
