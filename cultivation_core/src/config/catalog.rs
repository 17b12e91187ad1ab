//! Effect catalog: display names, icons and polarity rules per effect type

use super::ConfigError;
use crate::types::{DisplayType, ValueKind};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use tracing::error;

/// Display metadata for one effect type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectDefinition {
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    /// Shown with a `%` suffix regardless of value kind
    #[serde(default)]
    pub percent: bool,
}

/// Game-content tables consulted when presenting and routing effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectCatalog {
    #[serde(default)]
    pub effects: BTreeMap<String, EffectDefinition>,
    /// Types where a negative value is the favorable direction
    #[serde(default)]
    pub inverted: BTreeSet<String>,
    /// Effect types that act on a differently-named secondary stat
    #[serde(default)]
    pub secondary_aliases: BTreeMap<String, String>,
    #[serde(default = "default_icon")]
    pub default_icon: String,
}

fn default_icon() -> String {
    "✨".to_string()
}

impl Default for EffectCatalog {
    fn default() -> Self {
        default_catalog()
    }
}

impl EffectCatalog {
    /// A catalog with no entries at all
    pub fn empty() -> Self {
        EffectCatalog {
            effects: BTreeMap::new(),
            inverted: BTreeSet::new(),
            secondary_aliases: BTreeMap::new(),
            default_icon: default_icon(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        super::load_toml(path)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        super::parse_toml(content)
    }

    pub fn display_name<'a>(&'a self, effect_type: &'a str) -> &'a str {
        self.effects
            .get(effect_type)
            .map(|def| def.name.as_str())
            .unwrap_or(effect_type)
    }

    pub fn icon(&self, effect_type: &str) -> &str {
        self.effects
            .get(effect_type)
            .and_then(|def| def.icon.as_deref())
            .unwrap_or(&self.default_icon)
    }

    pub fn is_inverted(&self, effect_type: &str) -> bool {
        self.inverted.contains(effect_type)
    }

    pub fn is_percent_style(&self, effect_type: &str, kind: ValueKind) -> bool {
        kind == ValueKind::Percentage
            || self.effects.get(effect_type).is_some_and(|def| def.percent)
    }

    pub fn polarity(&self, effect_type: &str, value: f64) -> DisplayType {
        DisplayType::classify(value, self.is_inverted(effect_type))
    }

    /// Sign-prefixed value, with `%` for percentage-style effects
    pub fn format_value(&self, effect_type: &str, kind: ValueKind, value: f64) -> String {
        let suffix = if self.is_percent_style(effect_type, kind) { "%" } else { "" };
        if value > 0.0 {
            format!("+{}{}", value, suffix)
        } else if value < 0.0 {
            format!("{}{}", value, suffix)
        } else {
            format!("0{}", suffix)
        }
    }

    /// Stat name an effect type applies to
    pub fn resolve_target<'a>(&'a self, effect_type: &'a str) -> &'a str {
        self.secondary_aliases
            .get(effect_type)
            .map(String::as_str)
            .unwrap_or(effect_type)
    }
}

/// Catalog shipped with the crate
pub fn default_catalog() -> EffectCatalog {
    let toml = include_str!("../../config/effects.toml");
    EffectCatalog::parse(toml).unwrap_or_else(|err| {
        error!(%err, "embedded effect catalog failed to parse");
        EffectCatalog::empty()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_loads() {
        let catalog = default_catalog();
        assert!(!catalog.effects.is_empty());
        for inverted in ["cooldown_reduction", "movement_penalty", "energy_drain", "reduced_encounter"] {
            assert!(catalog.is_inverted(inverted), "{} should be inverted", inverted);
        }
        assert_eq!(catalog.resolve_target("physicalDamage"), "physicalAttack");
        assert_eq!(catalog.resolve_target("strength"), "strength");
    }

    #[test]
    fn test_parse_catalog() {
        let toml = r#"
inverted = ["toxicity"]

[effects.toxicity]
name = "Pill Toxicity"
icon = "☠"
percent = true

[secondary_aliases]
swordIntent = "physicalAttack"
"#;
        let catalog = EffectCatalog::parse(toml).unwrap();
        assert_eq!(catalog.display_name("toxicity"), "Pill Toxicity");
        assert_eq!(catalog.icon("toxicity"), "☠");
        assert_eq!(catalog.icon("other"), "✨");
        assert_eq!(catalog.format_value("toxicity", ValueKind::Absolute, -2.5), "-2.5%");
        assert_eq!(catalog.polarity("toxicity", -2.5), DisplayType::Positive);
        assert_eq!(catalog.resolve_target("swordIntent"), "physicalAttack");
    }

    #[test]
    fn test_format_value() {
        let catalog = EffectCatalog::empty();
        assert_eq!(catalog.format_value("strength", ValueKind::Absolute, 5.0), "+5");
        assert_eq!(catalog.format_value("strength", ValueKind::Absolute, -5.0), "-5");
        assert_eq!(catalog.format_value("strength", ValueKind::Percentage, 12.5), "+12.5%");
        assert_eq!(catalog.format_value("strength", ValueKind::Absolute, 0.0), "0");
    }
}
