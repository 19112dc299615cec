// ABOUTME: Substitution matcher filtering and ranking catalog candidates per profile
// ABOUTME: Gates on allergy/dietary/dislike conflicts and ranks by success rate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen

#![allow(clippy::suboptimal_flops)] // Safe: weighted blends read better unfused

//! The substitution matcher.
//!
//! For each recipe ingredient, fetches catalog candidates and emits ranked
//! suggestions when the ingredient conflicts with the profile's allergies,
//! dietary restrictions, or dislikes. Catalog failures collapse to "no
//! suggestion for that ingredient"; the batch never fails as a whole.

use crate::catalog::SubstitutionCatalog;
use crate::config::SubstitutionConfig;
use crate::models::{
    CookingProfile, RankedSubstitution, RecipeIngredient, SubstitutionRecord,
    SubstitutionSuggestion,
};
use futures_util::future::join_all;
use std::collections::HashMap;

/// Ranks catalog substitution candidates against a cooking profile
pub struct SubstitutionMatcher<C> {
    catalog: C,
    config: SubstitutionConfig,
}

impl<C: SubstitutionCatalog> SubstitutionMatcher<C> {
    /// Create a matcher over the given catalog with default configuration
    #[must_use]
    pub fn new(catalog: C) -> Self {
        Self::with_config(catalog, SubstitutionConfig::default())
    }

    /// Create a matcher with a custom configuration
    #[must_use]
    pub const fn with_config(catalog: C, config: SubstitutionConfig) -> Self {
        Self { catalog, config }
    }

    /// Find ranked substitutions for every conflicting ingredient
    ///
    /// Catalog reads fan out concurrently, one per distinct ingredient, and
    /// results are re-associated with input order. Ingredients with no
    /// conflict, no usable candidates, or a failed lookup are omitted.
    pub async fn smart_substitutions(
        &self,
        ingredients: &[RecipeIngredient],
        profile: &CookingProfile,
    ) -> Vec<SubstitutionSuggestion> {
        if ingredients.is_empty() {
            return Vec::new();
        }

        let mut distinct: Vec<String> = Vec::new();
        for ingredient in ingredients {
            let key = ingredient.name.to_lowercase();
            if !distinct.contains(&key) {
                distinct.push(key);
            }
        }

        let fetches = distinct
            .iter()
            .map(|name| self.catalog.fetch_substitutions(name));
        let results = join_all(fetches).await;

        // A failed lookup maps to None and affects only its own ingredient.
        let mut fetched: HashMap<String, Option<Vec<SubstitutionRecord>>> = HashMap::new();
        for (name, result) in distinct.into_iter().zip(results) {
            let records = match result {
                Ok(records) => Some(records),
                Err(err) => {
                    tracing::warn!(
                        ingredient = %name,
                        error = %err,
                        "catalog lookup failed, skipping ingredient"
                    );
                    None
                }
            };
            fetched.insert(name, records);
        }

        let mut suggestions = Vec::new();
        for ingredient in ingredients {
            let key = ingredient.name.to_lowercase();
            let Some(Some(records)) = fetched.get(&key) else {
                continue;
            };
            if let Some(suggestion) = self.match_ingredient(ingredient, records.clone(), profile) {
                suggestions.push(suggestion);
            }
        }
        suggestions
    }

    fn match_ingredient(
        &self,
        ingredient: &RecipeIngredient,
        records: Vec<SubstitutionRecord>,
        profile: &CookingProfile,
    ) -> Option<SubstitutionSuggestion> {
        let name = ingredient.name.trim();
        if name.is_empty() {
            return None;
        }

        let usable: Vec<SubstitutionRecord> = records
            .into_iter()
            .map(SubstitutionRecord::normalized)
            .filter(|record| !record.substitute_ingredient.trim().is_empty())
            .collect();

        let allergen = matched_allergen(profile, name);
        let disliked = profile.dislikes(name);
        let dietary_conflict = usable
            .iter()
            .any(|record| matched_restriction(profile, record).is_some());

        // Compatible ingredients are omitted even when the catalog has hits.
        if allergen.is_none() && !disliked && !dietary_conflict {
            return None;
        }

        let mut candidates: Vec<RankedSubstitution> = usable
            .into_iter()
            .filter_map(|record| {
                let reasons = build_reasons(profile, name, allergen.as_deref(), disliked, &record);
                if reasons.is_empty() {
                    return None;
                }
                let match_score = self.match_score(&record);
                Some(RankedSubstitution {
                    record,
                    reasons,
                    match_score,
                })
            })
            .collect();

        candidates.sort_by(|a, b| {
            b.record
                .success_rate
                .total_cmp(&a.record.success_rate)
                .then_with(|| {
                    b.record
                        .user_ratings
                        .average
                        .total_cmp(&a.record.user_ratings.average)
                })
        });
        candidates.truncate(self.config.max_suggestions_per_ingredient);

        if candidates.is_empty() {
            return None;
        }

        tracing::debug!(
            ingredient = %name,
            candidates = candidates.len(),
            "substitution suggestion generated"
        );
        Some(SubstitutionSuggestion {
            original_ingredient: ingredient.name.clone(),
            candidates,
        })
    }

    fn match_score(&self, record: &SubstitutionRecord) -> f64 {
        let weights = &self.config.weights;
        let total = weights.success_rate_weight + weights.rating_weight;
        if total <= 0.0 {
            return record.success_rate;
        }
        let rating_unit = (record.user_ratings.average / 5.0).clamp(0.0, 1.0);
        (weights.success_rate_weight * record.success_rate + weights.rating_weight * rating_unit)
            / total
    }
}

/// Reason strings in fixed check order: allergy, dietary restriction,
/// dislike, catalog-declared dietary reasons
fn build_reasons(
    profile: &CookingProfile,
    ingredient: &str,
    allergen: Option<&str>,
    disliked: bool,
    record: &SubstitutionRecord,
) -> Vec<String> {
    let mut reasons = Vec::new();

    if let Some(allergen) = allergen {
        reasons.push(format!("Avoids your {allergen} allergy"));
    }
    if let Some(restriction) = matched_restriction(profile, record) {
        reasons.push(format!("Fits your {restriction} diet"));
    }
    if disliked {
        reasons.push(format!("Replaces {ingredient}, which you prefer to avoid"));
    }
    if !record.dietary_reasons.is_empty() {
        reasons.push(format!(
            "Suggested for {} cooking",
            record.dietary_reasons.join(", ")
        ));
    }
    reasons
}

/// The allergen the ingredient conflicts with, if any
///
/// When several allergens match, the lexicographically smallest is reported
/// so output is stable across calls.
fn matched_allergen(profile: &CookingProfile, ingredient: &str) -> Option<String> {
    let name = ingredient.to_lowercase();
    profile
        .allergies
        .iter()
        .filter(|allergen| {
            let allergen = allergen.to_lowercase();
            name.contains(&allergen) || allergen.contains(&name)
        })
        .min()
        .cloned()
}

/// The profile restriction satisfied by the record's dietary reasons, if any
fn matched_restriction(profile: &CookingProfile, record: &SubstitutionRecord) -> Option<String> {
    record
        .dietary_reasons
        .iter()
        .filter(|reason| profile.has_restriction(reason))
        .min()
        .cloned()
}
