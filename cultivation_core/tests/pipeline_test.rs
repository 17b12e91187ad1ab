//! Integration test: equipment + sect + pill -> primary pass -> derive -> secondary pass

use cultivation_core::prelude::*;
use cultivation_core::{parse, DisplayType, EffectLike};
use serde_json::json;

fn base_primary() -> StatBag {
    StatBag::from([
        ("strength", 10.0),
        ("intellect", 8.0),
        ("spirit", 12.0),
        ("agility", 9.0),
        ("health", 15.0),
    ])
}

#[test]
fn test_equipment_end_to_end() {
    let pipeline = StatPipeline::with_defaults();
    let sword = EquipmentSource::new("bronze_saber", EquipmentSlot::Weapon)
        .with_effect(EffectRecord::new("strength", 5.0, EffectSource::Unknown))
        .with_effect(EffectRecord::new("physicalDamage", 8.0, EffectSource::Unknown));

    let character = CharacterState {
        primary: Some(base_primary()),
        cultivation: Some(CultivationContext::new("body tempering", 2)),
        equipment: vec![sword],
        ..CharacterState::default()
    };

    let sheet = pipeline.evaluate(&character);

    assert!((sheet.primary.get("strength") - 15.0).abs() < f64::EPSILON);
    assert!((sheet.secondary.get("physicalAttack") - 15.0).abs() < f64::EPSILON);
    assert!((sheet.final_stats.get("physicalAttack") - 23.0).abs() < f64::EPSILON);

    // Untouched secondary stats pass through the second pass unchanged
    assert_eq!(
        sheet.secondary.get("physicalDefense"),
        sheet.final_stats.get("physicalDefense")
    );

    assert_eq!(sheet.effects.len(), 2);
    assert_eq!(sheet.merged["strength"].sources, vec![EffectSource::Equipment]);
}

#[test]
fn test_mixed_sources_from_json() {
    let character: CharacterState = serde_json::from_value(json!({
        "primary": {"strength": 20, "intellect": 10, "spirit": 10, "agility": 10, "health": 20, "luck": 4},
        "cultivation": {"stage": "Qi-Refining", "level": 3},
        "equipment": [
            {"itemId": "jade_ring", "slot": "ring", "effects": [{"type": "luck", "modifier": 2}]},
            {"itemId": "jade_amulet", "slot": "amulet", "effects": [{"type": "luck", "modifier": 2}]}
        ],
        "bundles": [
            {"id": "azure_cloud", "source": "sect",
             "effects": {"strength": {"modifier": 50, "valueKind": "percentage"}}},
            {"id": "blizzard", "source": "weather",
             "effects": [{"type": "agility", "modifier": -4}, {"type": "movement_penalty", "modifier": 15}]}
        ],
        "consumables": [
            {"itemId": "tiger_pill", "descriptions": ["BUFF[target_stat=strength;value=50;value_type=percentage;duration=30m]"]}
        ]
    }))
    .unwrap();

    let sheet = StatPipeline::with_defaults().evaluate(&character);

    // two 50%-of-base deltas, no compounding
    assert!((sheet.primary.get("strength") - 40.0).abs() < f64::EPSILON);
    assert!((sheet.primary.get("luck") - 8.0).abs() < f64::EPSILON);
    assert!((sheet.primary.get("agility") - 6.0).abs() < f64::EPSILON);
    assert!((sheet.primary.get("movement_penalty") - 15.0).abs() < f64::EPSILON);

    let luck = &sheet.merged["luck"];
    assert_eq!(luck.sources, vec![EffectSource::Equipment, EffectSource::Equipment]);

    let strength = &sheet.merged["strength"];
    assert_eq!(strength.sources, vec![EffectSource::Sect, EffectSource::Status]);

    // total level = 100 + 2; defense = 20 + 6 + 20.4
    assert!((sheet.secondary.get("physicalDefense") - 46.0).abs() < f64::EPSILON);

    let penalty = sheet
        .effects
        .iter()
        .find(|e| e.effect_type == "movement_penalty")
        .unwrap();
    assert_eq!(penalty.display_type, DisplayType::Negative);
    assert_eq!(penalty.display_value, "+15%");
}

#[test]
fn test_unknown_stage_does_not_fail() {
    let pipeline = StatPipeline::with_defaults();
    let sheet = pipeline.run(
        Some(&StatBag::from([("strength", 10.0)])),
        Some(&CultivationContext::new("nonexistent", 1)),
        &[],
    );
    // 10 * 0.5 with total level 0
    assert!((sheet.secondary.get("physicalDefense") - 5.0).abs() < f64::EPSILON);
}

#[test]
fn test_parser_roundtrip_example() {
    let parsed = parse("BUFF[target_stat=cultivation_speed;value=10;duration=1h30m]").unwrap();
    assert_eq!(
        serde_json::to_value(&parsed).unwrap(),
        json!({"action": "BUFF", "params": {"target_stat": "cultivation_speed", "value": 10.0, "duration": 5400.0}})
    );
}

#[test]
fn test_display_of_normalized_effects() {
    let input = EffectInput::List(vec![
        EffectLike {
            effect_type: Some("cooldown_reduction".to_string()),
            modifier: Some(-10.0),
            source: Some(EffectSource::Sect),
            ..EffectLike::default()
        },
        EffectLike {
            effect_type: Some("strength".to_string()),
            modifier: Some(-5.0),
            ..EffectLike::default()
        },
    ]);
    let catalog = EffectCatalog::default();
    let list = cultivation_core::to_display_array(cultivation_core::normalize(&input).into(), &catalog);

    assert_eq!(list.len(), 2);
    let cooldown = list.iter().find(|e| e.effect_type == "cooldown_reduction").unwrap();
    assert_eq!(cooldown.display_type, DisplayType::Positive);
    assert_eq!(cooldown.display_value, "-10%");
    assert_eq!(cooldown.name, "Cooldown");
    let strength = list.iter().find(|e| e.effect_type == "strength").unwrap();
    assert_eq!(strength.display_type, DisplayType::Negative);
}

#[test]
fn test_bundle_keeps_value_kinds() {
    let character: CharacterState = serde_json::from_value(json!({
        "primary": {"strength": 10},
        "bundles": [
            {"id": "sunny", "source": "weather", "effects": [
                {"type": "strength", "modifier": 5},
                {"type": "strength", "modifier": 50, "valueKind": "percentage"}
            ]}
        ]
    }))
    .unwrap();
    let from_weather = StatPipeline::with_defaults().evaluate(&character);

    let belt = EquipmentSource::new("tiger_belt", EquipmentSlot::Belt)
        .with_effect(EffectRecord::new("strength", 5.0, EffectSource::Unknown))
        .with_effect(EffectRecord::new("strength", 50.0, EffectSource::Unknown).percentage());
    let from_gear = StatPipeline::with_defaults().evaluate(&CharacterState {
        primary: Some(StatBag::from([("strength", 10.0)])),
        equipment: vec![belt],
        ..CharacterState::default()
    });

    // 10 + 5 + 50% of 10
    assert!((from_weather.primary.get("strength") - 20.0).abs() < f64::EPSILON);
    assert_eq!(from_weather.primary, from_gear.primary);
}

#[test]
fn test_unreadable_bundle_entries_do_not_fail_load() {
    let character: CharacterState = serde_json::from_value(json!({
        "primary": {"spirit": 10},
        "bundles": [
            {"id": "azure_cloud", "source": "sect", "effects": [7, {"type": "spirit", "modifier": 2}]},
            {"id": "calm", "source": "weather", "effects": "none"}
        ]
    }))
    .unwrap();

    let sheet = StatPipeline::with_defaults().evaluate(&character);
    assert!((sheet.primary.get("spirit") - 12.0).abs() < f64::EPSILON);
    assert_eq!(sheet.effects.len(), 1);
}

#[test]
fn test_decorated_ids_are_distinct_per_item() {
    let ring = EquipmentSource::new("jade_ring", EquipmentSlot::Ring)
        .with_effect(EffectRecord::new("luck", 2.0, EffectSource::Unknown));
    let amulet = EquipmentSource::new("jade_amulet", EquipmentSlot::Amulet)
        .with_effect(EffectRecord::new("luck", 2.0, EffectSource::Unknown));

    let sheet = StatPipeline::with_defaults().evaluate(&CharacterState {
        primary: Some(StatBag::from([("luck", 4.0)])),
        equipment: vec![ring, amulet],
        ..CharacterState::default()
    });

    let ids: Vec<_> = sheet.effects.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["jade_ring_luck", "jade_amulet_luck"]);
}
