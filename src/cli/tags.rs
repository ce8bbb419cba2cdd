//! `KEY=VALUE` tag argument parsing for `--tag`.

/// Parse a single `--tag` argument into a (key, value) pair.
///
/// Splits on the first `=`, so values may themselves contain `=`.
/// The key is trimmed and must be non-empty; the value is kept verbatim
/// and may be empty.
pub fn parse_tag(arg: &str) -> Result<(String, String), String> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("invalid tag '{arg}' — expected KEY=VALUE"))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("invalid tag '{arg}' — key cannot be empty"));
    }

    Ok((key.to_string(), value.to_string()))
}
