//! Secondary (combat) stats derived from primary stats and cultivation

use super::{CultivationContext, StatBag};
use crate::config::StageTable;
use crate::error::EffectError;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Derived combat statistics
///
/// Recomputed on every request; never a source of truth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecondaryStats {
    pub physical_attack: f64,
    pub physical_defense: f64,
    pub spiritual_attack: f64,
    pub spiritual_defense: f64,
    pub attack_speed: f64,
    pub critical_chance: f64,
    pub movement_speed: f64,
    /// Luck-derived fortune rating
    pub fortune: f64,
}

impl SecondaryStats {
    /// Attribute names as they appear in a stat bag
    pub const NAMES: [&'static str; 8] = [
        "physicalAttack",
        "physicalDefense",
        "spiritualAttack",
        "spiritualDefense",
        "attackSpeed",
        "criticalChance",
        "movementSpeed",
        "fortune",
    ];

    pub fn is_secondary(attribute: &str) -> bool {
        Self::NAMES.contains(&attribute)
    }

    /// Compute from finalized primary stats and a total level
    ///
    /// Missing primary attributes count as 0.
    pub fn compute(primary: &StatBag, total_level: i64) -> Self {
        let strength = primary.get("strength");
        let intellect = primary.get("intellect");
        let spirit = primary.get("spirit");
        let agility = primary.get("agility");
        let health = primary.get("health");
        let luck = primary.get("luck");
        let level = total_level as f64;

        SecondaryStats {
            physical_attack: strength.floor(),
            physical_defense: (strength * 0.5 + health * 0.3 + level * 0.2).floor(),
            spiritual_attack: intellect.floor(),
            spiritual_defense: (spirit * 0.5 + intellect * 0.3 + level * 0.2).floor(),
            attack_speed: (agility + level * 0.1).floor(),
            critical_chance: (luck * 0.5 + agility * 0.1).floor(),
            movement_speed: (100.0 + agility * 0.5).floor(),
            fortune: (luck + level * 0.05).floor(),
        }
    }

    pub fn to_bag(&self) -> StatBag {
        StatBag::from([
            ("physicalAttack", self.physical_attack),
            ("physicalDefense", self.physical_defense),
            ("spiritualAttack", self.spiritual_attack),
            ("spiritualDefense", self.spiritual_defense),
            ("attackSpeed", self.attack_speed),
            ("criticalChance", self.critical_chance),
            ("movementSpeed", self.movement_speed),
            ("fortune", self.fortune),
        ])
    }
}

fn require<'a, T>(value: Option<&'a T>, what: &'static str) -> Result<&'a T, EffectError> {
    value.ok_or(EffectError::MissingContext(what))
}

/// Derive secondary stats; missing inputs yield all zeros
pub fn derive_secondary(
    primary: Option<&StatBag>,
    cultivation: Option<&CultivationContext>,
    stages: &StageTable,
) -> SecondaryStats {
    let inputs = require(primary, "primary stats")
        .and_then(|primary| Ok((primary, require(cultivation, "cultivation")?)));

    match inputs {
        Ok((primary, cultivation)) => {
            SecondaryStats::compute(primary, cultivation.total_level(stages))
        }
        Err(err) => {
            warn!(%err, "deriving zeroed secondary stats");
            SecondaryStats::default()
        }
    }
}
