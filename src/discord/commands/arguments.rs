// Small helpers for raw prefix-command arguments.

/// Strips one pair of surrounding double quotes, so `!roll "2 6"` and
/// `!roll 2 6` read the same.
pub fn unquote(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .map(str::trim)
        .unwrap_or(trimmed)
}

/// Normalises an optional `#[rest]` argument to a plain string slice.
pub fn rest_or_empty(raw: &Option<String>) -> &str {
    raw.as_deref().map(unquote).unwrap_or("")
}
