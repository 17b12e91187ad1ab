//! EffectBundle - Effects from sect membership, weather, pets and statuses

use crate::effect::{EffectInput, EffectLike, EffectRecord};
use crate::source::{owned_id, EffectProvider};
use crate::types::EffectSource;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

/// A group of effects from one non-equipment source
///
/// Each entry stays its own record so absolute and percentage
/// contributions to one type keep their meaning; inert entries are dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EffectBundle {
    pub id: String,
    pub source: EffectSource,
    /// Unreadable entries are skipped and non-collections read as empty
    #[serde(default, deserialize_with = "lenient_effects")]
    pub effects: EffectInput,
}

fn lenient_effects<'de, D: Deserializer<'de>>(deserializer: D) -> Result<EffectInput, D::Error> {
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(EffectInput::from_value(raw))
}

impl EffectBundle {
    pub fn new(id: impl Into<String>, source: EffectSource, effects: EffectInput) -> Self {
        EffectBundle {
            id: id.into(),
            source,
            effects,
        }
    }

    fn entries(&self) -> Vec<EffectLike> {
        match &self.effects {
            EffectInput::List(items) => items.clone(),
            EffectInput::Keyed(entries) => entries
                .iter()
                .filter_map(|(key, entry)| {
                    let mut entry = entry.clone()?;
                    if entry.effect_type.as_deref().map_or(true, str::is_empty) {
                        entry.effect_type = Some(key.clone());
                    }
                    Some(entry)
                })
                .collect(),
        }
    }
}

impl EffectProvider for EffectBundle {
    fn id(&self) -> &str {
        &self.id
    }

    fn priority(&self) -> i32 {
        match self.source {
            EffectSource::Equipment => 0,
            EffectSource::Sect => 50,
            EffectSource::Pet => 100,
            EffectSource::Weather => 150,
            EffectSource::Status | EffectSource::Unknown => 200,
        }
    }

    /// Entries without their own source inherit the bundle's
    fn effects(&self) -> Vec<EffectRecord> {
        self.entries()
            .into_iter()
            .filter(|entry| entry.amount() != 0.0)
            .filter_map(|entry| match entry.into_record() {
                Ok(record) => Some(record),
                Err(err) => {
                    warn!(bundle = %self.id, %err, "skipping bundle effect");
                    None
                }
            })
            .map(|mut effect| {
                if effect.source == EffectSource::Unknown {
                    effect.source = self.source;
                }
                owned_id(&self.id, effect)
            })
            .collect()
    }
}
