//! Cultivation stage offset table

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, error};

/// One row of the stage table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageDefinition {
    pub name: String,
    pub offset: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StagesConfig {
    stages: Vec<StageDefinition>,
}

/// Maps stage names to the level offset used by secondary-stat formulas
///
/// Lookups ignore case and treat `-`, `_` and whitespace alike, so
/// "Body Tempering", "body-tempering" and "body_tempering" are one stage.
#[derive(Debug, Clone, PartialEq)]
pub struct StageTable {
    offsets: BTreeMap<String, i64>,
}

/// Canonical lookup key for a stage name
pub(crate) fn stage_key(name: &str) -> String {
    name.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

impl Default for StageTable {
    fn default() -> Self {
        default_stage_table()
    }
}

impl StageTable {
    /// A table with no stages
    pub fn new() -> Self {
        StageTable { offsets: BTreeMap::new() }
    }

    pub fn from_definitions(definitions: impl IntoIterator<Item = StageDefinition>) -> Self {
        let mut table = StageTable::new();
        for def in definitions {
            table.register(&def.name, def.offset);
        }
        table
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: StagesConfig = super::load_toml(path)?;
        Ok(Self::from_definitions(config.stages))
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: StagesConfig = super::parse_toml(content)?;
        Ok(Self::from_definitions(config.stages))
    }

    pub fn register(&mut self, name: &str, offset: i64) {
        self.offsets.insert(stage_key(name), offset);
    }

    /// Offset for a known stage
    pub fn lookup(&self, stage: &str) -> Option<i64> {
        self.offsets.get(&stage_key(stage)).copied()
    }

    /// Offset for any stage name; unknown stages count as 0
    pub fn offset(&self, stage: &str) -> i64 {
        self.lookup(stage).unwrap_or_else(|| {
            debug!(stage, "unknown cultivation stage, using offset 0");
            0
        })
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

/// Stage table shipped with the crate
pub fn default_stage_table() -> StageTable {
    let toml = include_str!("../../config/stages.toml");
    StageTable::parse(toml).unwrap_or_else(|err| {
        error!(%err, "embedded stage table failed to parse");
        StageTable::new()
    })
}
