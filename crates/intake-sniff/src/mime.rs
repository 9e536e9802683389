//! Parameter- and case-insensitive MIME comparison.

/// The comparable part of a MIME string: parameters dropped, ASCII
/// whitespace and vertical tab trimmed, ASCII-lowercased.
///
/// `" Application/PDF ; charset=binary"` becomes `"application/pdf"`.
pub fn essence(mime: &str) -> String {
    let base = match mime.split_once(';') {
        Some((base, _)) => base,
        None => mime,
    };
    base.trim_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b').to_ascii_lowercase()
}

pub fn mime_eq(lhs: &str, rhs: &str) -> bool { essence(lhs) == essence(rhs) }

/// True if `detected` matches any entry of `accepted`.
pub fn is_accepted<S: AsRef<str>>(detected: &str, accepted: &[S]) -> bool {
    let detected = essence(detected);
    accepted.iter().any(|candidate| essence(candidate.as_ref()) == detected)
}
