//! Effect description mini-language
//!
//! Alchemy items persist their effects as `ACTION[key=value;key=value]`
//! strings, e.g. `BUFF[target_stat=cultivation_speed;value=10;duration=1h30m]`.
//! Parameter values are coerced best-effort: numbers, then booleans, then
//! (for `duration` only) compact duration strings, otherwise trimmed text.

mod duration;

pub use duration::{parse_duration, DurationValue};

use crate::effect::{EffectRecord, Presentation};
use crate::error::EffectError;
use crate::types::{EffectDuration, EffectSource, ValueKind};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;
use tracing::{debug, error, warn};

/// A coerced parameter value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(f64),
    Bool(bool),
    Text(String),
}

impl ParamValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParamValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Number(n) => write!(f, "{}", n),
            ParamValue::Bool(b) => write!(f, "{}", b),
            ParamValue::Text(s) => f.write_str(s),
        }
    }
}

/// Structured form of an effect description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedEffectDescription {
    pub action: String,
    pub params: BTreeMap<String, ParamValue>,
}

fn description_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^([A-Z_]+)\[(.*)\]$").expect("valid description pattern"))
}

/// Parse an `ACTION[key=value;...]` description
pub fn parse(description: &str) -> Result<ParsedEffectDescription, EffectError> {
    let Some(caps) = description_pattern().captures(description) else {
        error!(description, "malformed effect description");
        return Err(EffectError::MalformedDescription(description.to_string()));
    };

    let action = caps[1].to_string();
    let mut params = BTreeMap::new();

    for entry in caps[2].split(';') {
        if entry.trim().is_empty() {
            continue;
        }
        let Some((key, raw)) = entry.split_once('=') else {
            warn!(%action, entry, "effect parameter without '=' ignored");
            continue;
        };
        let key = key.trim();
        params.insert(key.to_string(), coerce_value(key, raw));
    }

    Ok(ParsedEffectDescription { action, params })
}

fn coerce_value(key: &str, raw: &str) -> ParamValue {
    let trimmed = raw.trim();

    if let Some(number) = parse_number(trimmed) {
        return ParamValue::Number(number);
    }
    if trimmed.eq_ignore_ascii_case("true") {
        return ParamValue::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return ParamValue::Bool(false);
    }
    if key == "duration" {
        return match parse_duration(trimmed) {
            DurationValue::Seconds(s) => ParamValue::Number(s as f64),
            DurationValue::Unparsed(text) => ParamValue::Text(text),
        };
    }
    ParamValue::Text(trimmed.to_string())
}

/// Numeric literals only; `f64::from_str` would also take "inf" and "NaN"
fn parse_number(text: &str) -> Option<f64> {
    if text.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return None;
    }
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

impl ParsedEffectDescription {
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }

    /// Write the description back out in its persisted textual form
    pub fn to_description(&self) -> String {
        let params: Vec<String> = self
            .params
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();
        format!("{}[{}]", self.action, params.join(";"))
    }

    /// Convert a `BUFF`/`DEBUFF` description into an effect record
    ///
    /// Requires a `target_stat` (or `stat`) and a numeric `value`.
    pub fn to_effect_record(&self, source: EffectSource) -> Result<EffectRecord, EffectError> {
        let negate = match self.action.as_str() {
            "BUFF" => false,
            "DEBUFF" => true,
            other => {
                debug!(action = other, "description does not modify stats");
                return Err(EffectError::InvalidEffectRecord(format!(
                    "action {} does not modify stats",
                    other
                )));
            }
        };

        let target = self
            .get("target_stat")
            .or_else(|| self.get("stat"))
            .and_then(ParamValue::as_str)
            .ok_or_else(|| EffectError::InvalidEffectRecord("missing target_stat".to_string()))?;

        let value = self
            .get("value")
            .and_then(ParamValue::as_f64)
            .ok_or_else(|| EffectError::InvalidEffectRecord("non-numeric value".to_string()))?;

        let is_percentage = self
            .get("value_type")
            .and_then(ParamValue::as_str)
            .is_some_and(|kind| kind.eq_ignore_ascii_case("percentage") || kind.eq_ignore_ascii_case("percent"))
            || self.get("percentage").and_then(ParamValue::as_bool) == Some(true);

        let duration = match self.get("duration") {
            Some(ParamValue::Number(n)) => EffectDuration::from_raw(*n),
            _ => EffectDuration::Permanent,
        };

        Ok(EffectRecord {
            effect_type: target.to_string(),
            modifier: if negate { -value.abs() } else { value },
            value_kind: if is_percentage { ValueKind::Percentage } else { ValueKind::Absolute },
            source,
            duration,
            presentation: Presentation::default(),
        })
    }
}
