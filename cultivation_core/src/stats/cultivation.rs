//! Cultivation progress coordinate

use crate::config::StageTable;
use serde::{Deserialize, Serialize};

/// A character's stage and level within that stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CultivationContext {
    pub stage: String,
    pub level: i64,
}

impl CultivationContext {
    pub fn new(stage: impl Into<String>, level: i64) -> Self {
        CultivationContext { stage: stage.into(), level }
    }

    /// `stage_offset + (level - 1)`
    pub fn total_level(&self, stages: &StageTable) -> i64 {
        stages.offset(&self.stage) + (self.level - 1)
    }
}
