//! EquipmentSource - Effects from equipped items

use crate::effect::EffectRecord;
use crate::source::{owned_id, EffectProvider};
use crate::types::{EffectSource, EquipmentSlot};
use serde::{Deserialize, Serialize};

/// Effects granted by one equipped item
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentSource {
    /// Item identifier
    pub item_id: String,
    /// Which slot this item is in
    pub slot: EquipmentSlot,
    #[serde(default)]
    pub effects: Vec<EffectRecord>,
}

impl EquipmentSource {
    pub fn new(item_id: impl Into<String>, slot: EquipmentSlot) -> Self {
        EquipmentSource {
            item_id: item_id.into(),
            slot,
            effects: Vec::new(),
        }
    }

    /// Add an effect to this item
    pub fn with_effect(mut self, effect: EffectRecord) -> Self {
        self.effects.push(effect);
        self
    }
}

impl EffectProvider for EquipmentSource {
    fn id(&self) -> &str {
        &self.item_id
    }

    fn priority(&self) -> i32 {
        0 // Gear applies at default priority
    }

    /// Item effects are kept individually so two items of the same kind
    /// each show up as their own `equipment` contribution
    fn effects(&self) -> Vec<EffectRecord> {
        self.effects
            .iter()
            .cloned()
            .map(|mut effect| {
                effect.source = EffectSource::Equipment;
                owned_id(&self.item_id, effect)
            })
            .collect()
    }
}
