//! cultivation_core - Effect aggregation and stat derivation for cultivation characters
//!
//! This library provides:
//! - Parser: the `ACTION[key=value;...]` effect description language
//! - Normalizer / Merger: fold effects from many sources into one record per type
//! - Decorator: display names, icons, formatted values and polarity
//! - Stat application: absolute and base-relative percentage effects
//! - Secondary derivation: combat stats from primary stats and cultivation stage
//! - StatPipeline: the primary pass → derive → secondary pass recalculation

pub mod config;
pub mod effect;
pub mod error;
pub mod parser;
pub mod pipeline;
pub mod prelude;
pub mod source;
pub mod stats;
pub mod types;

// Re-export core types for convenience
pub use config::{ConfigError, EffectCatalog, StageTable};
pub use effect::{
    merge_by_type, normalize, to_display_array, DecoratedEffect, DisplayInput, EffectInput, EffectLike,
    EffectMap, EffectRecord, MergedEffect,
};
pub use error::EffectError;
pub use parser::{parse, parse_duration, ParamValue, ParsedEffectDescription};
pub use pipeline::{CharacterState, PipelineStage, StatPipeline, StatSheet};
pub use source::{AlchemySource, EffectBundle, EffectProvider, EquipmentSource};
pub use stats::{apply_effects, derive_secondary, CultivationContext, SecondaryStats, StatBag, StatEffect};
pub use types::{DisplayType, EffectDuration, EffectSource, EquipmentSlot, ValueKind};
