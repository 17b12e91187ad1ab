//! Compact duration strings ("1h30m", "45s", "2h")

use regex::Regex;
use std::sync::OnceLock;

/// Result of interpreting a duration string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DurationValue {
    Seconds(u64),
    /// Nothing recognizable; the original text is preserved
    Unparsed(String),
}

fn unit_patterns() -> &'static [(Regex, u64); 3] {
    static PATTERNS: OnceLock<[(Regex, u64); 3]> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        [
            (Regex::new(r"(\d+)h").expect("valid hour pattern"), 3600),
            (Regex::new(r"(\d+)m").expect("valid minute pattern"), 60),
            (Regex::new(r"(\d+)s").expect("valid second pattern"), 1),
        ]
    })
}

/// Parse a duration string into total seconds
///
/// Each unit contributes at most once (its first occurrence). A bare
/// integer is taken as seconds. Anything else comes back unchanged.
pub fn parse_duration(text: &str) -> DurationValue {
    let trimmed = text.trim();
    let mut total: u64 = 0;
    let mut matched = false;

    for (pattern, multiplier) in unit_patterns() {
        let Some(caps) = pattern.captures(trimmed) else {
            continue;
        };
        if let Ok(amount) = caps[1].parse::<u64>() {
            total = total.saturating_add(amount.saturating_mul(*multiplier));
            matched = true;
        }
    }

    if matched {
        return DurationValue::Seconds(total);
    }

    match trimmed.parse::<u64>() {
        Ok(seconds) => DurationValue::Seconds(seconds),
        Err(_) => DurationValue::Unparsed(text.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hours_and_minutes() {
        assert_eq!(parse_duration("1h30m"), DurationValue::Seconds(5400));
    }

    #[test]
    fn test_any_order() {
        assert_eq!(parse_duration("30s2h"), DurationValue::Seconds(7230));
        assert_eq!(parse_duration("1h1m1s"), DurationValue::Seconds(3661));
    }

    #[test]
    fn test_only_first_of_each_unit() {
        // The second "h" group is ignored
        assert_eq!(parse_duration("1h2h"), DurationValue::Seconds(3600));
    }

    #[test]
    fn test_bare_number_is_seconds() {
        assert_eq!(parse_duration("120"), DurationValue::Seconds(120));
    }

    #[test]
    fn test_unrecognized_preserved() {
        assert_eq!(
            parse_duration("until dawn"),
            DurationValue::Unparsed("until dawn".to_string())
        );
        assert_eq!(parse_duration(""), DurationValue::Unparsed(String::new()));
    }
}
