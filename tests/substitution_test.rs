// ABOUTME: Integration tests for the substitution matcher
// ABOUTME: Covers conflict gating, reason generation, ranking, and catalog failure tolerance
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen

use mise_intelligence::catalog::{InMemoryCatalog, SubstitutionCatalog};
use mise_intelligence::errors::{CatalogError, CatalogResult};
use mise_intelligence::models::{CookingProfile, RecipeIngredient, SubstitutionRecord};
use mise_intelligence::substitution::SubstitutionMatcher;

fn seeded_catalog() -> InMemoryCatalog {
    InMemoryCatalog::with_records(vec![
        SubstitutionRecord::new("butter", "margarine", 0.9)
            .with_dietary_reason("dairy-free")
            .with_dietary_reason("vegan")
            .with_ratings(120, 4.4),
        SubstitutionRecord::new("butter", "coconut oil", 0.8)
            .with_dietary_reason("dairy-free")
            .with_dietary_reason("vegan")
            .with_ratings(80, 4.6),
        SubstitutionRecord::new("butter", "applesauce", 0.6)
            .with_dietary_reason("vegan")
            .with_ratings(40, 3.9),
        SubstitutionRecord::new("butter", "olive oil", 0.9).with_ratings(60, 4.0),
        SubstitutionRecord::new("peanut butter", "sunflower seed butter", 0.95)
            .with_dietary_reason("nut-free")
            .with_ratings(200, 4.7),
        SubstitutionRecord::new("milk", "oat milk", 0.92)
            .with_dietary_reason("dairy-free")
            .with_dietary_reason("vegan")
            .with_ratings(150, 4.5),
    ])
}

fn ingredient(name: &str) -> RecipeIngredient {
    RecipeIngredient::new(name, 1.0, "cup")
}

/// Catalog backend that always fails
struct FailingCatalog;

#[async_trait::async_trait]
impl SubstitutionCatalog for FailingCatalog {
    async fn fetch_substitutions(&self, name: &str) -> CatalogResult<Vec<SubstitutionRecord>> {
        Err(CatalogError::Query {
            ingredient: name.to_owned(),
            message: "connection refused".to_owned(),
        })
    }
}

// ============================================================================
// Conflict Gating
// ============================================================================

#[tokio::test]
async fn compatible_ingredients_yield_no_suggestions() {
    let matcher = SubstitutionMatcher::new(seeded_catalog());
    let profile = CookingProfile::new(5);

    // "butter" has catalog hits but no conflict; "flour" has neither.
    let ingredients = vec![ingredient("butter"), ingredient("flour")];
    let suggestions = matcher.smart_substitutions(&ingredients, &profile).await;

    assert!(suggestions.is_empty());
}

#[tokio::test]
async fn allergy_conflict_yields_allergy_reason() {
    let matcher = SubstitutionMatcher::new(seeded_catalog());
    let profile = CookingProfile::new(5).with_allergy("peanut");

    let suggestions = matcher
        .smart_substitutions(&[ingredient("peanut butter")], &profile)
        .await;

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].original_ingredient, "peanut butter");
    let top = &suggestions[0].candidates[0];
    assert_eq!(top.record.substitute_ingredient, "sunflower seed butter");
    assert!(top
        .reasons
        .iter()
        .any(|r| r.to_lowercase().contains("allerg")));
}

#[tokio::test]
async fn dietary_restriction_matches_through_record_reasons() {
    let matcher = SubstitutionMatcher::new(seeded_catalog());
    let profile = CookingProfile::new(5).with_restriction("vegan");

    let suggestions = matcher
        .smart_substitutions(&[ingredient("butter")], &profile)
        .await;

    assert_eq!(suggestions.len(), 1);
    let candidates = &suggestions[0].candidates;

    // Olive oil declares no dietary reasons, so it gets no reason and drops.
    assert!(candidates
        .iter()
        .all(|c| c.record.substitute_ingredient != "olive oil"));
    assert!(candidates[0]
        .reasons
        .iter()
        .any(|r| r.contains("vegan diet")));
}

// ============================================================================
// Ranking
// ============================================================================

#[tokio::test]
async fn candidates_rank_by_success_rate_then_rating() {
    let matcher = SubstitutionMatcher::new(seeded_catalog());
    let profile = CookingProfile::new(5).with_disliked("butter");

    let suggestions = matcher
        .smart_substitutions(&[ingredient("butter")], &profile)
        .await;

    let names: Vec<&str> = suggestions[0]
        .candidates
        .iter()
        .map(|c| c.record.substitute_ingredient.as_str())
        .collect();

    // margarine and olive oil tie at 0.9; margarine's 4.4 rating wins.
    // Default top-N caps the list at 3 of the 4 records.
    assert_eq!(names, vec!["margarine", "olive oil", "coconut oil"]);
}

#[tokio::test]
async fn match_scores_stay_in_unit_range() {
    let matcher = SubstitutionMatcher::new(seeded_catalog());
    let profile = CookingProfile::new(5).with_disliked("butter");

    let suggestions = matcher
        .smart_substitutions(&[ingredient("butter")], &profile)
        .await;

    for candidate in &suggestions[0].candidates {
        assert!((0.0..=1.0).contains(&candidate.match_score));
    }
}

// ============================================================================
// Failure Tolerance
// ============================================================================

#[tokio::test]
async fn failing_catalog_yields_empty_result() {
    let matcher = SubstitutionMatcher::new(FailingCatalog);
    let profile = CookingProfile::new(3).with_allergy("peanut");

    let suggestions = matcher
        .smart_substitutions(&[ingredient("peanut butter")], &profile)
        .await;

    assert!(suggestions.is_empty());
}

#[tokio::test]
async fn malformed_records_are_coerced_not_fatal() {
    let catalog = InMemoryCatalog::with_records(vec![
        // Unusable substitute name: skipped entirely.
        SubstitutionRecord::new("milk", "", 0.9),
        // NaN success rate: coerced to 0, still suggested.
        SubstitutionRecord::new("milk", "soy milk", f64::NAN).with_ratings(10, f64::NAN),
    ]);
    let matcher = SubstitutionMatcher::new(catalog);
    let profile = CookingProfile::new(5).with_disliked("milk");

    let suggestions = matcher
        .smart_substitutions(&[ingredient("milk")], &profile)
        .await;

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].candidates.len(), 1);
    let record = &suggestions[0].candidates[0].record;
    assert_eq!(record.substitute_ingredient, "soy milk");
    assert!((record.success_rate - 0.0).abs() < f64::EPSILON);
}

// ============================================================================
// Ordering and Determinism
// ============================================================================

#[tokio::test]
async fn output_preserves_input_ingredient_order() {
    let matcher = SubstitutionMatcher::new(seeded_catalog());
    let profile = CookingProfile::new(5).with_restriction("dairy-free");

    let ingredients = vec![ingredient("milk"), ingredient("flour"), ingredient("butter")];
    let suggestions = matcher.smart_substitutions(&ingredients, &profile).await;

    let originals: Vec<&str> = suggestions
        .iter()
        .map(|s| s.original_ingredient.as_str())
        .collect();
    assert_eq!(originals, vec!["milk", "butter"]);
}

#[tokio::test]
async fn lookup_is_case_insensitive() {
    let matcher = SubstitutionMatcher::new(seeded_catalog());
    let profile = CookingProfile::new(5).with_allergy("peanut");

    let suggestions = matcher
        .smart_substitutions(&[ingredient("Peanut Butter")], &profile)
        .await;

    assert_eq!(suggestions.len(), 1);
}

#[tokio::test]
async fn repeated_calls_are_idempotent() {
    let matcher = SubstitutionMatcher::new(seeded_catalog());
    let profile = CookingProfile::new(5).with_restriction("vegan");
    let ingredients = vec![ingredient("butter"), ingredient("milk")];

    let first = matcher.smart_substitutions(&ingredients, &profile).await;
    let second = matcher.smart_substitutions(&ingredients, &profile).await;

    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap()
    );
}
