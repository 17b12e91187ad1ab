//! Full stat recalculation: collect, merge, decorate, apply, derive, apply

mod stage;

pub use stage::PipelineStage;

use crate::config::{EffectCatalog, StageTable};
use crate::effect::{decorate, merge_by_type, DecoratedEffect, EffectRecord, MergedEffect};
use crate::source::{collect_effects, AlchemySource, EffectBundle, EffectProvider, EquipmentSource};
use crate::stats::{apply_effects, derive_secondary, CultivationContext, StatBag, StatEffect};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Everything needed to recalculate a character's stats
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterState {
    #[serde(default)]
    pub primary: Option<StatBag>,
    #[serde(default)]
    pub cultivation: Option<CultivationContext>,
    #[serde(default)]
    pub equipment: Vec<EquipmentSource>,
    /// Sect, weather, pet and status effect groups
    #[serde(default)]
    pub bundles: Vec<EffectBundle>,
    #[serde(default)]
    pub consumables: Vec<AlchemySource>,
}

impl CharacterState {
    pub fn providers(&self) -> Vec<&dyn EffectProvider> {
        let mut providers: Vec<&dyn EffectProvider> = Vec::new();
        providers.extend(self.equipment.iter().map(|p| p as &dyn EffectProvider));
        providers.extend(self.bundles.iter().map(|p| p as &dyn EffectProvider));
        providers.extend(self.consumables.iter().map(|p| p as &dyn EffectProvider));
        providers
    }
}

/// Result of a stat recalculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatSheet {
    /// Primary stats after the primary pass
    pub primary: StatBag,
    /// Secondary stats as derived, before secondary effects
    pub secondary: StatBag,
    /// Secondary stats after the secondary pass
    pub final_stats: StatBag,
    /// Per-type totals with provenance
    pub merged: BTreeMap<String, MergedEffect>,
    /// Every contributing effect, decorated for display
    pub effects: Vec<DecoratedEffect>,
}

/// Runs the recalculation against a catalog and stage table
#[derive(Debug, Clone, Default)]
pub struct StatPipeline {
    catalog: EffectCatalog,
    stages: StageTable,
}

impl StatPipeline {
    pub fn new(catalog: EffectCatalog, stages: StageTable) -> Self {
        StatPipeline { catalog, stages }
    }

    /// Pipeline using the catalogs shipped with the crate
    pub fn with_defaults() -> Self {
        Self::new(crate::config::default_catalog(), crate::config::default_stage_table())
    }

    pub fn catalog(&self) -> &EffectCatalog {
        &self.catalog
    }

    pub fn stages(&self) -> &StageTable {
        &self.stages
    }

    /// Collect effects from a character's providers and run the passes
    pub fn evaluate(&self, character: &CharacterState) -> StatSheet {
        let effects = collect_effects(&character.providers());
        self.run(character.primary.as_ref(), character.cultivation.as_ref(), &effects)
    }

    /// Run every stage over an already-collected effect list
    pub fn run(
        &self,
        primary: Option<&StatBag>,
        cultivation: Option<&CultivationContext>,
        effects: &[EffectRecord],
    ) -> StatSheet {
        let mut routed: BTreeMap<PipelineStage, Vec<StatEffect>> = BTreeMap::new();
        for effect in effects {
            let (stage, target) = PipelineStage::route(&effect.effect_type, &self.catalog);
            routed.entry(stage).or_default().push(effect.to_stat_effect(target));
        }

        let empty = StatBag::new();
        let mut primary_stats = StatBag::new();
        let mut secondary = StatBag::new();
        let mut final_stats = StatBag::new();

        for stage in PipelineStage::ORDER {
            let stage_effects = routed.get(&stage).map(Vec::as_slice).unwrap_or(&[]);
            debug!(?stage, effects = stage_effects.len(), "running pipeline stage");

            match stage {
                PipelineStage::PrimaryPass => {
                    primary_stats = apply_effects(primary.unwrap_or(&empty), stage_effects);
                }
                PipelineStage::DerivePass => {
                    let base = primary.map(|_| &primary_stats);
                    secondary = derive_secondary(base, cultivation, &self.stages).to_bag();
                }
                PipelineStage::SecondaryPass => {
                    final_stats = apply_effects(&secondary, stage_effects);
                }
            }
        }

        StatSheet {
            primary: primary_stats,
            secondary,
            final_stats,
            merged: merge_by_type(effects, &self.catalog),
            effects: effects.iter().map(|e| decorate(e, &self.catalog)).collect(),
        }
    }
}
