// ABOUTME: Difficulty assessor scoring recipes along preparation, equipment, technique axes
// ABOUTME: Computes skill gaps against a profile and blends axes into overall difficulty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen

#![allow(clippy::suboptimal_flops)] // Safe: weighted blends read better unfused

//! The difficulty assessor.
//!
//! Scores a recipe along three axes, blends them into an overall 1-10
//! difficulty using configurable weights, and reports every technique the
//! recipe demands beyond the user's skill level.

use crate::config::DifficultyConfig;
use crate::models::{CookingProfile, DifficultyAssessment, Recipe, SkillGap};
use crate::patterns::PatternDetector;
use crate::techniques::{DetectedTechnique, TechniqueCatalog};

/// Per-instruction contribution to preparation complexity
const PREP_INSTRUCTION_WEIGHT: f64 = 0.35;
/// Per-ingredient contribution to preparation complexity
const PREP_INGREDIENT_WEIGHT: f64 = 0.15;
/// Per-distinct-technique contribution to preparation complexity
const PREP_TECHNIQUE_WEIGHT: f64 = 0.5;
/// Per-missing-item contribution to equipment complexity
const EQUIPMENT_MISSING_WEIGHT: f64 = 1.5;
/// Weight on the squared missing ratio in equipment complexity
const EQUIPMENT_RATIO_WEIGHT: f64 = 9.0;

/// Scores recipe difficulty relative to a cooking profile
#[derive(Debug, Clone, Default)]
pub struct DifficultyAssessor {
    config: DifficultyConfig,
}

impl DifficultyAssessor {
    /// Create an assessor with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an assessor with a custom configuration
    #[must_use]
    pub const fn with_config(config: DifficultyConfig) -> Self {
        Self { config }
    }

    /// Assess a recipe's difficulty for the given user
    #[must_use]
    pub fn assess_recipe_difficulty(
        &self,
        recipe: &Recipe,
        profile: &CookingProfile,
    ) -> DifficultyAssessment {
        let detected = TechniqueCatalog::detect(&recipe.instructions);

        let preparation_complexity = Self::preparation_complexity(recipe, &detected);
        let (equipment_complexity, missing_equipment) =
            Self::equipment_complexity(recipe, profile);
        let technique_complexity = Self::technique_complexity(&detected);

        let overall_difficulty = self.blend(
            technique_complexity,
            preparation_complexity,
            equipment_complexity,
        );

        let skill_gaps = Self::skill_gaps(&detected, profile);
        let recommendations = Self::recommendations(
            equipment_complexity,
            &missing_equipment,
            &skill_gaps,
        );

        DifficultyAssessment {
            overall_difficulty,
            preparation_complexity,
            equipment_complexity,
            technique_complexity,
            skill_gaps,
            recommendations,
        }
    }

    fn preparation_complexity(recipe: &Recipe, detected: &[DetectedTechnique]) -> f64 {
        let instruction_count = recipe
            .instructions
            .iter()
            .filter(|step| !step.trim().is_empty())
            .count();
        let score = 1.0
            + instruction_count as f64 * PREP_INSTRUCTION_WEIGHT
            + recipe.ingredients.len() as f64 * PREP_INGREDIENT_WEIGHT
            + detected.len() as f64 * PREP_TECHNIQUE_WEIGHT;
        score.clamp(1.0, 10.0)
    }

    /// Equipment pressure from required-but-missing items
    ///
    /// Superlinear in distinct missing items: exceeds 5 whenever more than
    /// half of the detected needs are unmet.
    fn equipment_complexity(recipe: &Recipe, profile: &CookingProfile) -> (f64, Vec<String>) {
        let needed = PatternDetector::detect_equipment(&recipe.instructions);
        if needed.is_empty() {
            return (1.0, Vec::new());
        }

        let missing: Vec<String> = needed
            .iter()
            .filter(|rule| !profile.has_equipment(rule.name))
            .map(|rule| rule.name.to_owned())
            .collect();

        let ratio = missing.len() as f64 / needed.len() as f64;
        let score = 1.0
            + missing.len() as f64 * EQUIPMENT_MISSING_WEIGHT
            + EQUIPMENT_RATIO_WEIGHT * ratio * ratio;
        (score.clamp(1.0, 10.0), missing)
    }

    /// Aggregate demanded technique skill, weighted by occurrence count
    fn technique_complexity(detected: &[DetectedTechnique]) -> f64 {
        let total_count: usize = detected.iter().map(|d| d.count).sum();
        if total_count == 0 {
            return 1.0;
        }
        let weighted_sum: f64 = detected
            .iter()
            .map(|d| f64::from(d.seed.required_skill_level) * d.count as f64)
            .sum();
        (weighted_sum / total_count as f64).clamp(1.0, 10.0)
    }

    fn blend(&self, technique: f64, preparation: f64, equipment: f64) -> f64 {
        let weights = &self.config.weights;
        let total =
            weights.technique_weight + weights.preparation_weight + weights.equipment_weight;
        if total <= 0.0 {
            return ((technique + preparation + equipment) / 3.0).clamp(1.0, 10.0);
        }
        let blended = (weights.technique_weight * technique
            + weights.preparation_weight * preparation
            + weights.equipment_weight * equipment)
            / total;
        blended.clamp(1.0, 10.0)
    }

    fn skill_gaps(detected: &[DetectedTechnique], profile: &CookingProfile) -> Vec<SkillGap> {
        detected
            .iter()
            .filter(|d| d.seed.required_skill_level > profile.skill_level)
            .map(|d| {
                let fallback = d
                    .seed
                    .alternatives
                    .first()
                    .copied()
                    .unwrap_or("take it slowly and follow each step exactly");
                SkillGap {
                    technique: d.seed.name.to_owned(),
                    required_level: d.seed.required_skill_level,
                    user_level: profile.skill_level,
                    recommendation: format!(
                        "Practice {} on a simpler dish first. Easier approach: {fallback}",
                        d.seed.name
                    ),
                }
            })
            .collect()
    }

    fn recommendations(
        equipment_complexity: f64,
        missing_equipment: &[String],
        skill_gaps: &[SkillGap],
    ) -> Vec<String> {
        let mut recommendations = Vec::new();

        if equipment_complexity > 5.0 && !missing_equipment.is_empty() {
            recommendations.push(format!(
                "This recipe expects equipment you don't have ({}). Look for alternative tools before starting.",
                missing_equipment.join(", ")
            ));
        }

        if !skill_gaps.is_empty() {
            let names: Vec<&str> = skill_gaps.iter().map(|gap| gap.technique.as_str()).collect();
            recommendations.push(format!(
                "Techniques above your current level: {}. Review them before you start cooking.",
                names.join(", ")
            ));
        }

        if recommendations.is_empty() {
            recommendations
                .push("This recipe is a good match for your current skill and kitchen.".to_owned());
        }
        recommendations
    }
}
