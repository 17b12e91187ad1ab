//! Fold heterogeneous effect input into one record per type

use super::{EffectInput, EffectLike, EffectMap, EffectRecord};
use std::collections::BTreeMap;
use tracing::warn;

/// Normalize effects into a mapping keyed by type
///
/// Inert (zero-modifier) entries never survive, so normalizing an already
/// normalized mapping returns it unchanged.
pub fn normalize(input: &EffectInput) -> EffectMap {
    match input {
        EffectInput::List(items) => normalize_list(items),
        EffectInput::Keyed(entries) => normalize_keyed(entries),
    }
}

/// List form: repeated types sum their modifiers
///
/// The first occurrence of a type decides its kind, source and duration.
pub fn normalize_list(items: &[EffectLike]) -> EffectMap {
    let mut map = EffectMap::new();

    for item in items {
        let record = match item.clone().into_record() {
            Ok(record) => record,
            Err(err) => {
                warn!(%err, "skipping effect during normalization");
                continue;
            }
        };

        match map.get_mut(&record.effect_type) {
            Some(existing) => existing.modifier += record.modifier,
            None => {
                map.insert(record.effect_type.clone(), record);
            }
        }
    }

    map.retain(|_, record| record.modifier != 0.0);
    map
}

/// Keyed form: copy every entry that actually modifies something
///
/// An entry without its own type takes the mapping key as its type.
pub fn normalize_keyed(entries: &BTreeMap<String, Option<EffectLike>>) -> EffectMap {
    entries
        .iter()
        .filter_map(|(key, entry)| {
            let entry = entry.as_ref()?;
            if entry.amount() == 0.0 {
                return None;
            }
            let mut entry = entry.clone();
            if entry.effect_type.as_deref().map_or(true, str::is_empty) {
                entry.effect_type = Some(key.clone());
            }
            let record: EffectRecord = entry.into_record().ok()?;
            Some((key.clone(), record))
        })
        .collect()
}
