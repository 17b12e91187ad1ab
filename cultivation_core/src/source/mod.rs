//! EffectProvider - Trait and implementations for effect sources

mod alchemy;
mod bundle;
mod equipment;

pub use alchemy::AlchemySource;
pub use bundle::EffectBundle;
pub use equipment::EquipmentSource;

use crate::effect::EffectRecord;
use crate::types::ValueKind;

/// Anything that contributes effects to a character
pub trait EffectProvider: Send + Sync {
    /// Unique identifier for this provider
    fn id(&self) -> &str;

    /// Collection order (lower = earlier)
    /// Suggested priorities:
    /// - Equipment: 0
    /// - Sect: 50
    /// - Pet: 100
    /// - Weather: 150
    /// - Status: 200
    fn priority(&self) -> i32 {
        0
    }

    /// Effects currently granted by this provider
    fn effects(&self) -> Vec<EffectRecord>;
}

/// Gather effects from all providers in priority order
///
/// Providers with equal priority keep their relative order.
pub fn collect_effects(providers: &[&dyn EffectProvider]) -> Vec<EffectRecord> {
    let mut sorted: Vec<_> = providers.to_vec();
    sorted.sort_by_key(|p| p.priority());
    sorted.into_iter().flat_map(|p| p.effects()).collect()
}

/// Give `effect` an id scoped to its owner unless it already carries one
///
/// Percentage records get a `_pct` suffix so both kinds of one type stay distinct.
pub(crate) fn owned_id(owner: &str, mut effect: EffectRecord) -> EffectRecord {
    if effect.presentation.id.is_none() {
        let suffix = match effect.value_kind {
            ValueKind::Absolute => "",
            ValueKind::Percentage => "_pct",
        };
        effect.presentation.id = Some(format!("{}_{}{}", owner, effect.effect_type, suffix));
    }
    effect
}
