// ABOUTME: CookingIntelligence facade wiring config, catalog, and sub-engines
// ABOUTME: The five-operation public surface consumed by HTTP handlers and UI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen

//! The engine facade.
//!
//! [`CookingIntelligence`] owns the configured sub-engines and exposes the
//! public operations. Each call is a function of its inputs plus catalog
//! and knowledge-base reads; there is no shared mutable state, so
//! concurrent calls for different users run safely in parallel.

use crate::catalog::SubstitutionCatalog;
use crate::config::IntelligenceConfig;
use crate::difficulty::DifficultyAssessor;
use crate::instruction_adapter::InstructionAdapter;
use crate::insights::CookingInsightGenerator;
use crate::models::{
    CookingProfile, DifficultyAssessment, Insight, InstructionAdjustment, Recipe,
    RecipeIngredient, SubstitutionSuggestion, TechniqueEntry,
};
use crate::substitution::SubstitutionMatcher;
use crate::techniques::TechniqueCatalog;

/// Recipe adaptation and recommendation engine
pub struct CookingIntelligence<C> {
    substitutions: SubstitutionMatcher<C>,
    adapter: InstructionAdapter,
    difficulty: DifficultyAssessor,
    insights: CookingInsightGenerator,
    techniques: TechniqueCatalog,
}

impl<C: SubstitutionCatalog> CookingIntelligence<C> {
    /// Create an engine over the given catalog with default configuration
    #[must_use]
    pub fn new(catalog: C) -> Self {
        Self::with_config(catalog, IntelligenceConfig::default())
    }

    /// Create an engine with a custom configuration
    #[must_use]
    pub fn with_config(catalog: C, config: IntelligenceConfig) -> Self {
        Self {
            substitutions: SubstitutionMatcher::with_config(catalog, config.substitution),
            adapter: InstructionAdapter::with_config(config.adaptation),
            difficulty: DifficultyAssessor::with_config(config.difficulty),
            insights: CookingInsightGenerator::with_config(
                config.insight,
                config.technique.clone(),
            ),
            techniques: TechniqueCatalog::with_config(config.technique),
        }
    }

    /// Find ranked ingredient substitutions for conflicting ingredients
    pub async fn smart_substitutions(
        &self,
        ingredients: &[RecipeIngredient],
        profile: &CookingProfile,
    ) -> Vec<SubstitutionSuggestion> {
        self.substitutions
            .smart_substitutions(ingredients, profile)
            .await
    }

    /// Rewrite instructions for the target skill level
    #[must_use]
    pub fn adjust_instructions_for_skill_level(
        &self,
        instructions: &[String],
        target_skill_level: i32,
        profile: &CookingProfile,
    ) -> Vec<InstructionAdjustment> {
        self.adapter
            .adjust_instructions_for_skill_level(instructions, target_skill_level, profile)
    }

    /// Look up a technique, honoring the skill-buffer visibility rule
    #[must_use]
    pub fn cooking_technique(&self, name: &str, user_skill_level: i32) -> Option<TechniqueEntry> {
        self.techniques.lookup(name, user_skill_level)
    }

    /// Assess a recipe's difficulty relative to the user
    #[must_use]
    pub fn assess_recipe_difficulty(
        &self,
        recipe: &Recipe,
        profile: &CookingProfile,
    ) -> DifficultyAssessment {
        self.difficulty.assess_recipe_difficulty(recipe, profile)
    }

    /// Generate actionable insights for a recipe and profile
    #[must_use]
    pub fn generate_cooking_insights(
        &self,
        recipe: &Recipe,
        profile: &CookingProfile,
    ) -> Vec<Insight> {
        self.insights.generate_cooking_insights(recipe, profile)
    }
}
