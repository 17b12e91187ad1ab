//! Core types shared across the effect pipeline

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an effect came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectSource {
    Equipment,
    Sect,
    Weather,
    Pet,
    Status,
    #[default]
    #[serde(other)]
    Unknown,
}

impl EffectSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            EffectSource::Equipment => "equipment",
            EffectSource::Sect => "sect",
            EffectSource::Weather => "weather",
            EffectSource::Pet => "pet",
            EffectSource::Status => "status",
            EffectSource::Unknown => "unknown",
        }
    }
}

impl fmt::Display for EffectSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an effect's numeric value is applied to a stat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// Added directly
    #[default]
    Absolute,
    /// Percentage of the base stat supplied to the application call
    Percentage,
}

/// Display polarity of an effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayType {
    Positive,
    Negative,
    Neutral,
}

impl DisplayType {
    /// Classify a signed value; `inverted` flips which direction is favorable
    pub fn classify(value: f64, inverted: bool) -> Self {
        if value == 0.0 || value.is_nan() {
            return DisplayType::Neutral;
        }
        if (value > 0.0) != inverted {
            DisplayType::Positive
        } else {
            DisplayType::Negative
        }
    }
}

/// How long an effect lasts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EffectDuration {
    #[default]
    Permanent,
    Seconds(u64),
}

impl EffectDuration {
    pub fn is_permanent(&self) -> bool {
        matches!(self, EffectDuration::Permanent)
    }

    /// Interpret a raw numeric duration; any negative value means permanent
    pub fn from_raw(raw: f64) -> Self {
        if raw < 0.0 || !raw.is_finite() {
            EffectDuration::Permanent
        } else {
            EffectDuration::Seconds(raw.floor() as u64)
        }
    }

    /// Seconds as stored in persisted records (-1 for permanent)
    pub fn as_raw(&self) -> i64 {
        match self {
            EffectDuration::Permanent => -1,
            EffectDuration::Seconds(s) => *s as i64,
        }
    }
}

impl Serialize for EffectDuration {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_raw())
    }
}

impl<'de> Deserialize<'de> for EffectDuration {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
            Missing(()),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Ok(EffectDuration::from_raw(n)),
            Raw::Text(text) => match crate::parser::parse_duration(&text) {
                crate::parser::DurationValue::Seconds(s) => Ok(EffectDuration::Seconds(s)),
                crate::parser::DurationValue::Unparsed(raw) => Err(serde::de::Error::custom(
                    format!("unrecognized duration {:?}", raw),
                )),
            },
            Raw::Missing(()) => Ok(EffectDuration::Permanent),
        }
    }
}

/// Equipment slot for cultivation gear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    Weapon,
    Robe,
    Headgear,
    Boots,
    Belt,
    Ring,
    Amulet,
    Talisman,
}
