//! Prelude module for convenient imports
//!
//! ```rust
//! use cultivation_core::prelude::*;
//! ```

// Core types
pub use crate::effect::{EffectInput, EffectRecord};
pub use crate::stats::{CultivationContext, StatBag, StatEffect};
pub use crate::types::{EffectDuration, EffectSource, EquipmentSlot, ValueKind};

// Pipeline
pub use crate::pipeline::{CharacterState, StatPipeline, StatSheet};

// Sources
pub use crate::source::{AlchemySource, EffectBundle, EffectProvider, EquipmentSource};

// Config
pub use crate::config::{EffectCatalog, StageTable};
