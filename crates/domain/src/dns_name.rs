//! Helpers for comparing DNS names given as text.

/// Lowercase, fully-qualified (trailing dot) form of `name`.
pub fn normalize_fqdn(name: &str) -> String {
    let mut normalized = name.to_ascii_lowercase();
    if !normalized.ends_with('.') {
        normalized.push('.');
    }
    normalized
}

/// True when `name` is `suffix` itself or lies below it on a label boundary.
/// `name` must be fully qualified, `suffix` is given without trailing dot.
pub fn is_within(name: &str, suffix: &str) -> bool {
    let name = name.as_bytes();
    let suffix = suffix.as_bytes();

    // name == suffix + "."
    if name.len() == suffix.len() + 1 {
        return name[name.len() - 1] == b'.' && name[..suffix.len()].eq_ignore_ascii_case(suffix);
    }

    // name ends with "." + suffix + "."
    if name.len() < suffix.len() + 2 {
        return false;
    }
    let tail_start = name.len() - suffix.len() - 2;
    let tail = &name[tail_start..];
    tail[0] == b'.'
        && tail[tail.len() - 1] == b'.'
        && tail[1..tail.len() - 1].eq_ignore_ascii_case(suffix)
}

/// Plain case-insensitive `name.ends_with(suffix + ".")`.
pub fn ends_with_suffix(name: &str, suffix: &str) -> bool {
    let name = name.as_bytes();
    let suffix = suffix.as_bytes();
    if name.len() < suffix.len() + 1 || name[name.len() - 1] != b'.' {
        return false;
    }
    let start = name.len() - suffix.len() - 1;
    name[start..name.len() - 1].eq_ignore_ascii_case(suffix)
}
