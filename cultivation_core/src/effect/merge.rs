//! Combine effect records per type while keeping provenance

use super::EffectRecord;
use crate::config::EffectCatalog;
use crate::types::{DisplayType, EffectSource, ValueKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// All contributions to one effect type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedEffect {
    #[serde(rename = "type")]
    pub effect_type: String,
    pub modifier: f64,
    pub value_kind: ValueKind,
    /// Contributing sources in input order; duplicates are meaningful
    pub sources: Vec<EffectSource>,
    pub display_value: String,
    pub display_type: DisplayType,
}

/// Merge records by type, summing modifiers
///
/// Display fields are computed once from each final sum.
pub fn merge_by_type(effects: &[EffectRecord], catalog: &EffectCatalog) -> BTreeMap<String, MergedEffect> {
    let mut merged: BTreeMap<String, MergedEffect> = BTreeMap::new();

    for effect in effects {
        if effect.effect_type.is_empty() {
            continue;
        }
        match merged.get_mut(&effect.effect_type) {
            Some(entry) => {
                entry.modifier += effect.modifier;
                entry.sources.push(effect.source);
            }
            None => {
                merged.insert(
                    effect.effect_type.clone(),
                    MergedEffect {
                        effect_type: effect.effect_type.clone(),
                        modifier: effect.modifier,
                        value_kind: effect.value_kind,
                        sources: vec![effect.source],
                        display_value: String::new(),
                        display_type: DisplayType::Neutral,
                    },
                );
            }
        }
    }

    for entry in merged.values_mut() {
        entry.display_value = catalog.format_value(&entry.effect_type, entry.value_kind, entry.modifier);
        entry.display_type = catalog.polarity(&entry.effect_type, entry.modifier);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(merge_by_type(&[], &EffectCatalog::default()).is_empty());
    }

    #[test]
    fn test_sources_kept_in_order_with_duplicates() {
        let effects = vec![
            EffectRecord::new("strength", 3.0, EffectSource::Equipment),
            EffectRecord::new("strength", 2.0, EffectSource::Equipment),
            EffectRecord::new("strength", -1.0, EffectSource::Weather),
            EffectRecord::new("luck", 1.0, EffectSource::Pet),
        ];
        let merged = merge_by_type(&effects, &EffectCatalog::default());

        let strength = &merged["strength"];
        assert!((strength.modifier - 4.0).abs() < f64::EPSILON);
        assert_eq!(
            strength.sources,
            vec![EffectSource::Equipment, EffectSource::Equipment, EffectSource::Weather]
        );
        assert_eq!(strength.display_value, "+4");
        assert_eq!(strength.display_type, DisplayType::Positive);
    }

    #[test]
    fn test_display_reflects_final_sum_only() {
        let effects = vec![
            EffectRecord::new("movement_penalty", 5.0, EffectSource::Weather),
            EffectRecord::new("movement_penalty", -8.0, EffectSource::Pet),
        ];
        let merged = merge_by_type(&effects, &EffectCatalog::default());
        let entry = &merged["movement_penalty"];
        assert_eq!(entry.display_value, "-3%");
        // inverted type: negative is favorable
        assert_eq!(entry.display_type, DisplayType::Positive);
    }

    #[test]
    fn test_untyped_records_skipped() {
        let effects = vec![EffectRecord::new("", 3.0, EffectSource::Sect)];
        assert!(merge_by_type(&effects, &EffectCatalog::default()).is_empty());
    }
}
