//! Apply effects to a stat bag

use super::StatBag;
use crate::error::EffectError;
use crate::types::ValueKind;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// One modification aimed at a single attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatEffect {
    #[serde(default)]
    pub target_attribute: Option<String>,
    /// Anything that is not a finite number deserializes to `None`
    #[serde(default, deserialize_with = "lenient_number")]
    pub value: Option<f64>,
    #[serde(default)]
    pub value_kind: ValueKind,
}

fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(raw.as_f64().filter(|n| n.is_finite()))
}

impl StatEffect {
    pub fn absolute(target: impl Into<String>, value: f64) -> Self {
        StatEffect {
            target_attribute: Some(target.into()),
            value: Some(value),
            value_kind: ValueKind::Absolute,
        }
    }

    pub fn percentage(target: impl Into<String>, value: f64) -> Self {
        StatEffect {
            target_attribute: Some(target.into()),
            value: Some(value),
            value_kind: ValueKind::Percentage,
        }
    }

    fn validate(&self) -> Result<(&str, f64), EffectError> {
        let target = self
            .target_attribute
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| EffectError::InvalidEffectRecord("missing target attribute".to_string()))?;
        let value = self
            .value
            .filter(|v| v.is_finite())
            .ok_or_else(|| EffectError::InvalidEffectRecord(format!("non-numeric value for {}", target)))?;
        Ok((target, value))
    }
}

/// Apply effects to `base`, returning a new bag
///
/// Percentages are taken of the value in `base`, never of a running
/// total, so two +50% effects on 10 give 20 rather than 22.5. Attributes
/// missing from `base` start at 0. Invalid effects are logged and skipped.
/// Every value in the result is floored.
pub fn apply_effects(base: &StatBag, effects: &[StatEffect]) -> StatBag {
    let mut result = base.clone();

    for effect in effects {
        let (target, value) = match effect.validate() {
            Ok(valid) => valid,
            Err(err) => {
                warn!(%err, "skipping stat effect");
                continue;
            }
        };

        let delta = match effect.value_kind {
            ValueKind::Absolute => value,
            ValueKind::Percentage => base.get(target) * (value / 100.0),
        };
        *result.entry_mut(target) += delta;
    }

    result.floor_all();
    result
}
