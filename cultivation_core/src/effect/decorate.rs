//! Presentation view of normalized effects

use super::{EffectMap, EffectRecord};
use crate::config::EffectCatalog;
use crate::types::{DisplayType, EffectDuration, EffectSource, ValueKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An effect ready for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecoratedEffect {
    pub id: String,
    #[serde(rename = "type")]
    pub effect_type: String,
    pub modifier: f64,
    pub value_kind: ValueKind,
    pub source: EffectSource,
    pub duration: EffectDuration,
    pub name: String,
    pub icon: String,
    pub display_value: String,
    pub display_type: DisplayType,
}

/// Input to the display projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DisplayInput {
    /// Already projected; passed through untouched
    Decorated(Vec<DecoratedEffect>),
    Keyed(BTreeMap<String, Option<EffectRecord>>),
}

impl From<EffectMap> for DisplayInput {
    fn from(map: EffectMap) -> Self {
        DisplayInput::Keyed(map.into_iter().map(|(k, v)| (k, Some(v))).collect())
    }
}

/// Project a keyed effect set into a display list
///
/// Keys starting with `_` are internal bookkeeping and are skipped.
pub fn to_display_array(input: DisplayInput, catalog: &EffectCatalog) -> Vec<DecoratedEffect> {
    match input {
        DisplayInput::Decorated(list) => list,
        DisplayInput::Keyed(entries) => entries
            .iter()
            .filter(|(key, _)| !key.starts_with('_'))
            .filter_map(|(_, record)| record.as_ref())
            .map(|record| decorate(record, catalog))
            .collect(),
    }
}

/// Decorate a single record; its own presentation fields win over computed ones
pub fn decorate(record: &EffectRecord, catalog: &EffectCatalog) -> DecoratedEffect {
    let shown = &record.presentation;
    let effect_type = record.effect_type.as_str();

    DecoratedEffect {
        id: shown
            .id
            .clone()
            .unwrap_or_else(|| format!("{}_{}", effect_type, record.source)),
        effect_type: effect_type.to_string(),
        modifier: record.modifier,
        value_kind: record.value_kind,
        source: record.source,
        duration: record.duration,
        name: shown
            .name
            .clone()
            .unwrap_or_else(|| catalog.display_name(effect_type).to_string()),
        icon: shown
            .icon
            .clone()
            .unwrap_or_else(|| catalog.icon(effect_type).to_string()),
        display_value: shown
            .display_value
            .clone()
            .unwrap_or_else(|| catalog.format_value(effect_type, record.value_kind, record.modifier)),
        display_type: shown
            .display_type
            .unwrap_or_else(|| catalog.polarity(effect_type, record.modifier)),
    }
}
