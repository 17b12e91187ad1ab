//! AlchemySource - Effects stored as description strings on alchemy items

use crate::effect::EffectRecord;
use crate::parser;
use crate::source::{owned_id, EffectProvider};
use crate::types::EffectSource;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A consumed alchemy item whose effects are kept in their persisted
/// `ACTION[...]` form
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlchemySource {
    pub item_id: String,
    #[serde(default)]
    pub descriptions: Vec<String>,
}

impl AlchemySource {
    pub fn new(item_id: impl Into<String>, descriptions: Vec<String>) -> Self {
        AlchemySource {
            item_id: item_id.into(),
            descriptions,
        }
    }
}

impl EffectProvider for AlchemySource {
    fn id(&self) -> &str {
        &self.item_id
    }

    fn priority(&self) -> i32 {
        200 // Consumed pills act as statuses
    }

    /// Descriptions that fail to parse or do not touch stats are skipped
    fn effects(&self) -> Vec<EffectRecord> {
        self.descriptions
            .iter()
            .filter_map(|description| {
                let parsed = parser::parse(description).ok()?;
                match parsed.to_effect_record(EffectSource::Status) {
                    Ok(record) => Some(owned_id(&self.item_id, record)),
                    Err(err) => {
                        warn!(item = %self.item_id, %err, "alchemy effect not applied");
                        None
                    }
                }
            })
            .collect()
    }
}
