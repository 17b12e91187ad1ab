//! Effect records and the shapes they arrive in

mod decorate;
mod merge;
mod normalize;

pub use decorate::{decorate, to_display_array, DecoratedEffect, DisplayInput};
pub use merge::{merge_by_type, MergedEffect};
pub use normalize::{normalize, normalize_keyed, normalize_list};

use crate::error::EffectError;
use crate::stats::StatEffect;
use crate::types::{DisplayType, EffectDuration, EffectSource, ValueKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Normalized effects keyed by type
pub type EffectMap = BTreeMap<String, EffectRecord>;

/// Presentation-only fields; never read by stat computation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_type: Option<DisplayType>,
}

/// The atomic unit processed by the pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectRecord {
    /// Merge key, e.g. `strength` or `cultivation_speed`
    #[serde(rename = "type")]
    pub effect_type: String,
    /// Signed numeric delta
    #[serde(alias = "value")]
    pub modifier: f64,
    #[serde(default)]
    pub value_kind: ValueKind,
    #[serde(default)]
    pub source: EffectSource,
    #[serde(default)]
    pub duration: EffectDuration,
    #[serde(flatten)]
    pub presentation: Presentation,
}

impl EffectRecord {
    pub fn new(effect_type: impl Into<String>, modifier: f64, source: EffectSource) -> Self {
        EffectRecord {
            effect_type: effect_type.into(),
            modifier,
            value_kind: ValueKind::Absolute,
            source,
            duration: EffectDuration::Permanent,
            presentation: Presentation::default(),
        }
    }

    pub fn percentage(mut self) -> Self {
        self.value_kind = ValueKind::Percentage;
        self
    }

    /// Stat-application view of this record, aimed at `target`
    pub fn to_stat_effect(&self, target: &str) -> StatEffect {
        StatEffect {
            target_attribute: Some(target.to_string()),
            value: Some(self.modifier),
            value_kind: self.value_kind,
        }
    }
}

/// Loosely-shaped effect as supplied by callers
///
/// Every field is optional; `modifier` and `value` are synonyms with
/// `modifier` taking precedence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectLike {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub effect_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_kind: Option<ValueKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<EffectSource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<EffectDuration>,
    #[serde(flatten)]
    pub presentation: Presentation,
}

impl EffectLike {
    pub fn amount(&self) -> f64 {
        self.modifier.or(self.value).unwrap_or(0.0)
    }

    /// Fill defaults; fails when there is no usable type
    pub fn into_record(self) -> Result<EffectRecord, EffectError> {
        let amount = self.amount();
        let effect_type = self
            .effect_type
            .filter(|t| !t.is_empty())
            .ok_or_else(|| EffectError::InvalidEffectRecord("missing type".to_string()))?;

        Ok(EffectRecord {
            effect_type,
            modifier: amount,
            value_kind: self.value_kind.unwrap_or_default(),
            source: self.source.unwrap_or_default(),
            duration: self.duration.unwrap_or_default(),
            presentation: self.presentation,
        })
    }
}

impl From<EffectRecord> for EffectLike {
    fn from(record: EffectRecord) -> Self {
        EffectLike {
            effect_type: Some(record.effect_type),
            modifier: Some(record.modifier),
            value: None,
            value_kind: Some(record.value_kind),
            source: Some(record.source),
            duration: Some(record.duration),
            presentation: record.presentation,
        }
    }
}

/// Effects as delivered by a source: a list, or a mapping keyed by type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EffectInput {
    List(Vec<EffectLike>),
    Keyed(BTreeMap<String, Option<EffectLike>>),
}

impl Default for EffectInput {
    fn default() -> Self {
        EffectInput::List(Vec::new())
    }
}

impl EffectInput {
    /// Interpret arbitrary JSON, degrading unusable shapes to empty input
    pub fn from_value(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Array(items) => EffectInput::List(
                items
                    .into_iter()
                    .filter_map(|item| match serde_json::from_value::<EffectLike>(item) {
                        Ok(effect) => Some(effect),
                        Err(err) => {
                            warn!(%err, "skipping unreadable effect entry");
                            None
                        }
                    })
                    .collect(),
            ),
            serde_json::Value::Object(entries) => EffectInput::Keyed(
                entries
                    .into_iter()
                    .filter_map(|(key, item)| {
                        if item.is_null() {
                            return Some((key, None));
                        }
                        match serde_json::from_value::<EffectLike>(item) {
                            Ok(effect) => Some((key, Some(effect))),
                            Err(err) => {
                                warn!(%key, %err, "skipping unreadable effect entry");
                                None
                            }
                        }
                    })
                    .collect(),
            ),
            other => {
                warn!(kind = json_kind(&other), "effect input is neither a list nor a mapping");
                EffectInput::default()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            EffectInput::List(items) => items.is_empty(),
            EffectInput::Keyed(entries) => entries.is_empty(),
        }
    }
}

impl From<EffectMap> for EffectInput {
    fn from(map: EffectMap) -> Self {
        EffectInput::Keyed(
            map.into_iter()
                .map(|(key, record)| (key, Some(EffectLike::from(record))))
                .collect(),
        )
    }
}

impl From<Vec<EffectRecord>> for EffectInput {
    fn from(records: Vec<EffectRecord>) -> Self {
        EffectInput::List(records.into_iter().map(EffectLike::from).collect())
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_alias() {
        let record: EffectRecord =
            serde_json::from_value(json!({"type": "strength", "value": 5})).unwrap();
        assert!((record.modifier - 5.0).abs() < f64::EPSILON);
        assert_eq!(record.source, EffectSource::Unknown);
        assert!(record.duration.is_permanent());
    }

    #[test]
    fn test_modifier_wins_over_value() {
        let effect: EffectLike =
            serde_json::from_value(json!({"type": "luck", "modifier": 2, "value": 9})).unwrap();
        assert!((effect.amount() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_into_record_requires_type() {
        let effect = EffectLike { modifier: Some(3.0), ..Default::default() };
        assert!(effect.into_record().is_err());

        let effect = EffectLike { effect_type: Some(String::new()), ..Default::default() };
        assert!(effect.into_record().is_err());
    }

    #[test]
    fn test_from_value_shapes() {
        assert!(matches!(EffectInput::from_value(json!([{"type": "spirit"}])), EffectInput::List(v) if v.len() == 1));
        assert!(matches!(
            EffectInput::from_value(json!({"spirit": {"modifier": 1}, "gone": null})),
            EffectInput::Keyed(m) if m.len() == 2
        ));
        assert!(EffectInput::from_value(json!(42)).is_empty());
        assert!(EffectInput::from_value(json!("strength")).is_empty());
        assert!(EffectInput::from_value(json!(null)).is_empty());
    }

    #[test]
    fn test_from_value_skips_garbage_entries() {
        let input = EffectInput::from_value(json!([1, {"type": "agility", "modifier": 2}, "x"]));
        assert!(matches!(input, EffectInput::List(v) if v.len() == 1));
    }

    #[test]
    fn test_presentation_fields_roundtrip() {
        let record: EffectRecord = serde_json::from_value(json!({
            "type": "strength",
            "modifier": 1,
            "name": "Tiger Might",
            "displayType": "positive"
        }))
        .unwrap();
        assert_eq!(record.presentation.name.as_deref(), Some("Tiger Might"));
        assert_eq!(record.presentation.display_type, Some(DisplayType::Positive));
    }
}
