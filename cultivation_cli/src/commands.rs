//! Subcommand implementations; each returns the JSON to print

use std::path::Path;

use anyhow::{Context, Result};
use cultivation_core::config::load_data;
use cultivation_core::{normalize, parse, to_display_array, CharacterState, EffectInput, StatPipeline};
use serde::Deserialize;

/// A file carrying only an effect set
#[derive(Debug, Deserialize)]
struct EffectFile {
    #[serde(default)]
    effects: serde_json::Value,
}

pub fn parse_description(description: &str) -> Result<String> {
    let parsed = parse(description)?;
    Ok(serde_json::to_string_pretty(&parsed)?)
}

pub fn evaluate_file(pipeline: &StatPipeline, path: &Path) -> Result<String> {
    let character: CharacterState =
        load_data(path).with_context(|| format!("reading character state {}", path.display()))?;
    evaluate(pipeline, &character)
}

pub fn evaluate(pipeline: &StatPipeline, character: &CharacterState) -> Result<String> {
    tracing::info!(
        equipment = character.equipment.len(),
        bundles = character.bundles.len(),
        consumables = character.consumables.len(),
        "evaluating character"
    );
    let sheet = pipeline.evaluate(character);
    Ok(serde_json::to_string_pretty(&sheet)?)
}

pub fn display_file(pipeline: &StatPipeline, path: &Path) -> Result<String> {
    let file: EffectFile =
        load_data(path).with_context(|| format!("reading effect file {}", path.display()))?;
    display(pipeline, file.effects)
}

fn display(pipeline: &StatPipeline, effects: serde_json::Value) -> Result<String> {
    let normalized = normalize(&EffectInput::from_value(effects));
    let decorated = to_display_array(normalized.into(), pipeline.catalog());
    Ok(serde_json::to_string_pretty(&decorated)?)
}
