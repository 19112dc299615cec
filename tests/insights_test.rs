// ABOUTME: Integration tests for the cooking insight generator
// ABOUTME: Covers technique tips, equipment gaps, timing mismatches, and safety warnings
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen

use mise_intelligence::insights::CookingInsightGenerator;
use mise_intelligence::models::{CookingProfile, InsightType, Recipe};

fn baking_recipe() -> Recipe {
    Recipe::new("Sunday Roast", 4)
        .with_instruction("Preheat the oven to 200C")
        .with_instruction("Roast for ninety minutes")
        .with_total_time(120)
}

// ============================================================================
// Equipment Recommendations
// ============================================================================

#[test]
fn missing_oven_is_named_in_an_equipment_insight() {
    let generator = CookingInsightGenerator::new();
    let profile = CookingProfile::new(6).with_preferred_time(180);

    let insights = generator.generate_cooking_insights(&baking_recipe(), &profile);

    let equipment = insights
        .iter()
        .find(|i| i.insight_type == InsightType::EquipmentRecommendation)
        .unwrap();
    assert!(equipment.content.contains("oven"));
}

#[test]
fn owned_equipment_produces_no_recommendation() {
    let generator = CookingInsightGenerator::new();
    let profile = CookingProfile::new(6)
        .with_equipment("oven")
        .with_preferred_time(180);

    let insights = generator.generate_cooking_insights(&baking_recipe(), &profile);

    assert!(insights
        .iter()
        .all(|i| i.insight_type != InsightType::EquipmentRecommendation));
}

// ============================================================================
// Timing Adjustments
// ============================================================================

#[test]
fn long_recipes_trigger_a_timing_insight() {
    let generator = CookingInsightGenerator::new();
    let profile = CookingProfile::new(6)
        .with_equipment("oven")
        .with_preferred_time(60);

    let insights = generator.generate_cooking_insights(&baking_recipe(), &profile);

    let timing = insights
        .iter()
        .find(|i| i.insight_type == InsightType::TimingAdjustment)
        .unwrap();
    assert!(timing.content.contains("longer than your usual"));
    assert!(timing.content.contains("60"));
}

#[test]
fn recipes_within_the_margin_stay_quiet() {
    let generator = CookingInsightGenerator::new();
    // 120 minutes is within 25% of a 100-minute window.
    let profile = CookingProfile::new(6)
        .with_equipment("oven")
        .with_preferred_time(100);

    let insights = generator.generate_cooking_insights(&baking_recipe(), &profile);

    assert!(insights
        .iter()
        .all(|i| i.insight_type != InsightType::TimingAdjustment));
}

#[test]
fn timing_falls_back_to_prep_plus_cook() {
    let generator = CookingInsightGenerator::new();
    let recipe = Recipe::new("Slow Stew", 4)
        .with_prep_time(30)
        .with_cook_time(90)
        .with_instruction("Stew gently on the stovetop");
    let profile = CookingProfile::new(6).with_preferred_time(60);

    let insights = generator.generate_cooking_insights(&recipe, &profile);

    assert!(insights
        .iter()
        .any(|i| i.insight_type == InsightType::TimingAdjustment));
}

// ============================================================================
// Safety Warnings
// ============================================================================

#[test]
fn one_warning_per_distinct_hazard_category() {
    let generator = CookingInsightGenerator::new();
    let recipe = Recipe::new("Fresh Pasta", 2)
        .with_instruction("Chop the herbs finely")
        .with_instruction("Slice the garlic")
        .with_instruction("Boil the pasta in salted water")
        .with_instruction("Keep the water at a rolling boil");
    let profile = CookingProfile::new(2).with_preferred_time(120);

    let insights = generator.generate_cooking_insights(&recipe, &profile);

    // Knife work and boiling liquid, despite four triggering steps.
    let warnings: Vec<_> = insights
        .iter()
        .filter(|i| i.insight_type == InsightType::SafetyWarning)
        .collect();
    assert_eq!(warnings.len(), 2);
    for warning in warnings {
        assert!(warning.content.starts_with("Safety:"));
    }
}

#[test]
fn skilled_users_get_no_safety_warnings() {
    let generator = CookingInsightGenerator::new();
    let recipe = Recipe::new("Fresh Pasta", 2)
        .with_instruction("Boil the pasta in salted water");
    let profile = CookingProfile::new(7).with_preferred_time(120);

    let insights = generator.generate_cooking_insights(&recipe, &profile);

    assert!(insights
        .iter()
        .all(|i| i.insight_type != InsightType::SafetyWarning));
}

// ============================================================================
// Technique Tips
// ============================================================================

#[test]
fn nearby_techniques_yield_tips_targeted_at_the_user() {
    let generator = CookingInsightGenerator::new();
    let recipe = Recipe::new("Weeknight Stir", 2)
        .with_instruction("Sauté the vegetables over high heat");
    let profile = CookingProfile::new(4).with_preferred_time(60);

    let insights = generator.generate_cooking_insights(&recipe, &profile);

    let tip = insights
        .iter()
        .find(|i| i.insight_type == InsightType::TechniqueTip)
        .unwrap();
    assert!(tip.content.contains("Sautéing"));
    assert!(tip.skill_level_target.contains(&4));
}

#[test]
fn far_off_techniques_yield_no_tips() {
    let generator = CookingInsightGenerator::new();
    let recipe = Recipe::new("Petit Fours", 8)
        .with_instruction("Brunoise the candied citrus");
    // Brunoise requires 7; a level-2 cook is outside the +/-2 buffer.
    let profile = CookingProfile::new(2).with_preferred_time(120);

    let insights = generator.generate_cooking_insights(&recipe, &profile);

    assert!(insights
        .iter()
        .all(|i| i.insight_type != InsightType::TechniqueTip));
}

// ============================================================================
// Totality
// ============================================================================

#[test]
fn quiet_recipes_yield_zero_insights() {
    let generator = CookingInsightGenerator::new();
    let recipe = Recipe::new("Fruit Bowl", 1)
        .with_instruction("Arrange the fruit in a bowl")
        .with_total_time(5);
    let profile = CookingProfile::new(8).with_preferred_time(60);

    let insights = generator.generate_cooking_insights(&recipe, &profile);

    assert!(insights.is_empty());
}
