use std::fmt::Display;
use std::str::FromStr;

fn parse_bounded_number<T>(s: &str, min: T, max: Option<T>) -> Result<T, String>
where
    T: Copy + PartialOrd + Display + FromStr,
    <T as FromStr>::Err: Display,
{
    let value = s
        .parse::<T>()
        .map_err(|err| format!("invalid number '{s}': {err}"))?;
    if value < min {
        return Err(format!("value must be at least {min}"));
    }
    if let Some(max_bound) = max
        && value > max_bound
    {
        return Err(format!("value must be at most {max_bound}"));
    }
    Ok(value)
}

/// Parse a worker count in `0..=512`; `0` selects one thread per CPU.
///
/// # Errors
/// Returns an error if the input is not a number or exceeds 512.
pub fn parse_jobs(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 0, Some(512))
}

/// Parse a positive `usize` (>= 1) from CLI input.
///
/// # Errors
/// Returns an error if the input string is not a valid number or is less than 1.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    parse_bounded_number(s, 1, None)
}

/// Accept any text except the empty string (used for literal rule operands).
///
/// # Errors
/// Returns an error if the input is empty.
pub fn parse_non_empty(s: &str) -> Result<String, String> {
    if s.is_empty() {
        Err("value must not be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Normalize an extension argument (`.HTM` stays case-sensitive, only the dot goes).
///
/// # Errors
/// Returns an error if nothing is left after removing the leading dot.
pub fn parse_extension(s: &str) -> Result<String, String> {
    let ext = s.trim().trim_start_matches('.');
    if ext.is_empty() {
        return Err(format!("invalid extension '{s}'"));
    }
    if ext.contains(['/', '\\', '*', '?', '[', '{']) {
        return Err(format!("extension '{s}' must be a plain suffix"));
    }
    Ok(ext.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jobs_accepts_zero_and_caps_at_512() {
        assert_eq!(parse_jobs("0"), Ok(0));
        assert_eq!(parse_jobs("8"), Ok(8));
        assert!(parse_jobs("513").is_err());
        assert!(parse_jobs("-1").is_err());
    }

    #[test]
    fn positive_usize_rejects_zero() {
        assert!(parse_positive_usize("0").is_err());
        assert_eq!(parse_positive_usize("3"), Ok(3));
    }

    #[test]
    fn non_empty_rejects_empty() {
        assert!(parse_non_empty("").is_err());
        assert_eq!(parse_non_empty(" x "), Ok(" x ".to_string()));
    }

    #[test]
    fn extension_strips_dot() {
        assert_eq!(parse_extension(".htm"), Ok("htm".to_string()));
        assert_eq!(parse_extension("xhtml"), Ok("xhtml".to_string()));
        assert!(parse_extension(".").is_err());
        assert!(parse_extension("*.htm").is_err());
    }
}
