//! Ordered pipeline stages

use crate::config::EffectCatalog;
use crate::stats::SecondaryStats;
use serde::{Deserialize, Serialize};

/// The three passes of a stat recalculation, in execution order
///
/// Primary-stat effects must land before anything is derived from them,
/// and effects on secondary stats must land after derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    PrimaryPass,
    DerivePass,
    SecondaryPass,
}

impl PipelineStage {
    pub const ORDER: [PipelineStage; 3] = [
        PipelineStage::PrimaryPass,
        PipelineStage::DerivePass,
        PipelineStage::SecondaryPass,
    ];

    /// Pass an effect of `effect_type` belongs to, with the stat it targets
    ///
    /// Derivation never receives effects directly.
    pub fn route<'a>(effect_type: &'a str, catalog: &'a EffectCatalog) -> (PipelineStage, &'a str) {
        let target = catalog.resolve_target(effect_type);
        if SecondaryStats::is_secondary(target) {
            (PipelineStage::SecondaryPass, target)
        } else {
            (PipelineStage::PrimaryPass, target)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_is_sorted() {
        let mut sorted = PipelineStage::ORDER;
        sorted.sort();
        assert_eq!(sorted, PipelineStage::ORDER);
    }

    #[test]
    fn test_routing() {
        let catalog = EffectCatalog::default();
        assert_eq!(
            PipelineStage::route("strength", &catalog),
            (PipelineStage::PrimaryPass, "strength")
        );
        assert_eq!(
            PipelineStage::route("physicalDamage", &catalog),
            (PipelineStage::SecondaryPass, "physicalAttack")
        );
        assert_eq!(
            PipelineStage::route("criticalChance", &catalog),
            (PipelineStage::SecondaryPass, "criticalChance")
        );
        assert_eq!(
            PipelineStage::route("cultivation_speed", &catalog),
            (PipelineStage::PrimaryPass, "cultivation_speed")
        );
    }
}
