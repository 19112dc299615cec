// ABOUTME: Data models for the cooking intelligence engine
// ABOUTME: Defines CookingProfile, Recipe, SubstitutionRecord, and engine output types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen

//! Immutable value objects shared by every engine.
//!
//! Profiles and recipes are snapshots passed by reference into each call;
//! the engines never mutate them. Output types are constructed fresh per
//! call and are plain JSON-serializable data.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Clamp a caller-supplied skill level into the valid 1-10 range.
///
/// Accepts `i32` so that out-of-range values (including negatives coming
/// from unvalidated UI input) stay representable and total.
#[must_use]
pub fn clamp_skill_level(level: i32) -> u8 {
    level.clamp(1, 10) as u8
}

/// Ingredient likes and dislikes tracked on a profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngredientPreferences {
    /// Ingredients the user actively seeks out
    pub loved: HashSet<String>,
    /// Ingredients the user wants substituted away
    pub disliked: HashSet<String>,
    /// Ingredients the user has never cooked with
    pub never_tried: HashSet<String>,
}

/// Aggregate cooking outcomes for a user
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SuccessHistory {
    /// Total recipes attempted
    pub attempts: u32,
    /// Attempts the user rated as successful
    pub successes: u32,
    /// Attempts the user rated as failed
    pub failures: u32,
}

impl SuccessHistory {
    /// Fraction of attempts that succeeded, 0.0 when there is no history
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        if self.attempts == 0 {
            0.0
        } else {
            f64::from(self.successes) / f64::from(self.attempts)
        }
    }
}

/// A user's cooking profile, snapshotted at call time
///
/// Skill levels are integers 1-10. Equipment, restrictions, allergies, and
/// preferences are free-form lowercase-insensitive strings curated by the
/// platform's profile screens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CookingProfile {
    /// Self-reported or derived proficiency (1-10)
    pub skill_level: u8,
    /// Years of cooking experience
    pub cooking_experience_years: f64,
    /// How long the user usually wants to spend on a meal
    pub preferred_cooking_time_minutes: u32,
    /// Equipment the user owns
    pub equipment_available: HashSet<String>,
    /// Dietary restrictions (e.g. "vegan", "gluten-free")
    pub dietary_restrictions: HashSet<String>,
    /// Ingredient allergies (e.g. "peanut", "shellfish")
    pub allergies: HashSet<String>,
    /// Spice tolerance (1-10)
    pub spice_tolerance: u8,
    /// Loved/disliked/never-tried ingredient lists
    pub ingredient_preferences: IngredientPreferences,
    /// Aggregate cooking outcomes
    pub success_history: SuccessHistory,
}

impl CookingProfile {
    /// Create a profile with the given skill level and platform defaults
    #[must_use]
    pub fn new(skill_level: i32) -> Self {
        Self {
            skill_level: clamp_skill_level(skill_level),
            cooking_experience_years: 0.0,
            preferred_cooking_time_minutes: 60,
            equipment_available: HashSet::new(),
            dietary_restrictions: HashSet::new(),
            allergies: HashSet::new(),
            spice_tolerance: 5,
            ingredient_preferences: IngredientPreferences::default(),
            success_history: SuccessHistory::default(),
        }
    }

    /// Add a piece of available equipment
    #[must_use]
    pub fn with_equipment(mut self, item: impl Into<String>) -> Self {
        self.equipment_available.insert(item.into());
        self
    }

    /// Add an allergy
    #[must_use]
    pub fn with_allergy(mut self, allergen: impl Into<String>) -> Self {
        self.allergies.insert(allergen.into());
        self
    }

    /// Add a dietary restriction
    #[must_use]
    pub fn with_restriction(mut self, restriction: impl Into<String>) -> Self {
        self.dietary_restrictions.insert(restriction.into());
        self
    }

    /// Mark an ingredient as disliked
    #[must_use]
    pub fn with_disliked(mut self, ingredient: impl Into<String>) -> Self {
        self.ingredient_preferences.disliked.insert(ingredient.into());
        self
    }

    /// Mark an ingredient as loved
    #[must_use]
    pub fn with_loved(mut self, ingredient: impl Into<String>) -> Self {
        self.ingredient_preferences.loved.insert(ingredient.into());
        self
    }

    /// Set the preferred cooking time window
    #[must_use]
    pub const fn with_preferred_time(mut self, minutes: u32) -> Self {
        self.preferred_cooking_time_minutes = minutes;
        self
    }

    /// Set years of cooking experience
    #[must_use]
    pub const fn with_experience_years(mut self, years: f64) -> Self {
        self.cooking_experience_years = years;
        self
    }

    /// Whether the user owns the named equipment (case-insensitive)
    #[must_use]
    pub fn has_equipment(&self, item: &str) -> bool {
        let wanted = item.to_lowercase();
        self.equipment_available
            .iter()
            .any(|owned| owned.to_lowercase() == wanted)
    }

    /// Whether the ingredient conflicts with an allergy
    ///
    /// Matches partially in both directions so "peanut butter" conflicts
    /// with a "peanut" allergy and "nuts" conflicts with "pine nuts".
    #[must_use]
    pub fn is_allergic_to(&self, ingredient: &str) -> bool {
        let name = ingredient.to_lowercase();
        self.allergies.iter().any(|allergen| {
            let allergen = allergen.to_lowercase();
            name.contains(&allergen) || allergen.contains(&name)
        })
    }

    /// Whether the user marked the ingredient as disliked (case-insensitive)
    #[must_use]
    pub fn dislikes(&self, ingredient: &str) -> bool {
        let name = ingredient.to_lowercase();
        self.ingredient_preferences
            .disliked
            .iter()
            .any(|disliked| disliked.to_lowercase() == name)
    }

    /// Whether the profile declares the named dietary restriction
    #[must_use]
    pub fn has_restriction(&self, restriction: &str) -> bool {
        let wanted = restriction.to_lowercase();
        self.dietary_restrictions
            .iter()
            .any(|r| r.to_lowercase() == wanted)
    }
}

/// Single ingredient in a recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeIngredient {
    /// Human-readable ingredient name
    pub name: String,
    /// Amount in the specified unit
    pub amount: f64,
    /// Measurement unit as entered ("cup", "g", "tbsp", ...)
    pub unit: String,
    /// Optional preparation notes (diced, softened, ...)
    pub notes: Option<String>,
}

impl RecipeIngredient {
    /// Create a new ingredient
    #[must_use]
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount,
            unit: unit.into(),
            notes: None,
        }
    }

    /// Attach preparation notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Nutrition facts per serving, as supplied by the recipe author or a
/// downstream validation service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionFacts {
    /// Calories per serving
    pub calories: Option<f64>,
    /// Protein in grams per serving
    pub protein_g: Option<f64>,
    /// Carbohydrates in grams per serving
    pub carbs_g: Option<f64>,
    /// Fat in grams per serving
    pub fat_g: Option<f64>,
    /// Sodium in milligrams per serving
    pub sodium_mg: Option<f64>,
    /// Sugar in grams per serving
    pub sugar_g: Option<f64>,
}

/// A complete recipe with ingredients and instructions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique recipe identifier
    pub id: Uuid,
    /// Recipe name
    pub name: String,
    /// Recipe description
    pub description: Option<String>,
    /// Number of servings this recipe makes
    pub servings: u8,
    /// List of ingredients, in recipe order
    pub ingredients: Vec<RecipeIngredient>,
    /// Cooking instructions (ordered steps)
    pub instructions: Vec<String>,
    /// Nutrition facts per serving
    pub nutrition: Option<NutritionFacts>,
    /// Preparation time in minutes
    pub prep_time_minutes: Option<u16>,
    /// Cooking time in minutes
    pub cook_time_minutes: Option<u16>,
    /// Author-declared total time in minutes
    pub total_time_minutes: Option<u16>,
    /// Author-declared difficulty (1-10)
    pub difficulty_level: u8,
    /// Tags for categorization
    pub tags: Vec<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Recipe {
    /// Create a new recipe with basic information
    #[must_use]
    pub fn new(name: impl Into<String>, servings: u8) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: None,
            servings,
            ingredients: Vec::new(),
            instructions: Vec::new(),
            nutrition: None,
            prep_time_minutes: None,
            cook_time_minutes: None,
            total_time_minutes: None,
            difficulty_level: 5,
            tags: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Add a description
    #[must_use]
    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Add an ingredient
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: RecipeIngredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// Add multiple ingredients
    #[must_use]
    pub fn with_ingredients(mut self, ingredients: Vec<RecipeIngredient>) -> Self {
        self.ingredients.extend(ingredients);
        self
    }

    /// Add an instruction step
    #[must_use]
    pub fn with_instruction(mut self, step: impl Into<String>) -> Self {
        self.instructions.push(step.into());
        self
    }

    /// Add multiple instruction steps
    #[must_use]
    pub fn with_instructions(mut self, steps: Vec<String>) -> Self {
        self.instructions.extend(steps);
        self
    }

    /// Set preparation time
    #[must_use]
    pub const fn with_prep_time(mut self, minutes: u16) -> Self {
        self.prep_time_minutes = Some(minutes);
        self
    }

    /// Set cooking time
    #[must_use]
    pub const fn with_cook_time(mut self, minutes: u16) -> Self {
        self.cook_time_minutes = Some(minutes);
        self
    }

    /// Set the author-declared total time
    #[must_use]
    pub const fn with_total_time(mut self, minutes: u16) -> Self {
        self.total_time_minutes = Some(minutes);
        self
    }

    /// Set the author-declared difficulty level
    #[must_use]
    pub fn with_difficulty(mut self, level: i32) -> Self {
        self.difficulty_level = clamp_skill_level(level);
        self
    }

    /// Add a tag
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Total time in minutes, falling back to prep + cook when the author
    /// did not declare one
    #[must_use]
    pub const fn total_time(&self) -> Option<u16> {
        match (
            self.total_time_minutes,
            self.prep_time_minutes,
            self.cook_time_minutes,
        ) {
            (Some(total), _, _) => Some(total),
            (None, Some(prep), Some(cook)) => Some(prep.saturating_add(cook)),
            (None, Some(only), None) | (None, None, Some(only)) => Some(only),
            (None, None, None) => None,
        }
    }

    /// Scale the ingredient amounts to a different number of servings
    #[must_use]
    pub fn scaled(&self, new_servings: u8) -> Self {
        if new_servings == self.servings || self.servings == 0 {
            return self.clone();
        }

        let factor = f64::from(new_servings) / f64::from(self.servings);
        let mut scaled = self.clone();
        scaled.servings = new_servings;
        scaled.updated_at = Utc::now();
        for ingredient in &mut scaled.ingredients {
            ingredient.amount *= factor;
        }
        scaled
    }
}

/// Aggregate user ratings on a substitution record
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct UserRatings {
    /// Number of ratings received
    pub count: u32,
    /// Mean rating (0-5)
    pub average: f64,
}

/// A catalog entry mapping one ingredient to an alternative
///
/// Records come from the persisted substitution catalog, which is curated
/// outside this engine. Fields default when the stored row is missing data
/// so a sparse record still deserializes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubstitutionRecord {
    /// Ingredient being replaced
    pub original_ingredient: String,
    /// Suggested replacement
    pub substitute_ingredient: String,
    /// Quantity ratio (1.0 = equal amounts)
    pub substitution_ratio: f64,
    /// Contexts where the swap works well ("baking", "sauces", ...)
    pub context_tags: Vec<String>,
    /// Dietary reasons this substitute exists ("vegan", "gluten-free", ...)
    pub dietary_reasons: Vec<String>,
    /// How much the swap changes flavor (0-5)
    pub flavor_impact: f64,
    /// How much the swap changes texture (0-5)
    pub texture_impact: f64,
    /// Calorie delta per serving relative to the original
    pub nutritional_impact_delta: f64,
    /// Fraction of users reporting success with this swap (0-1)
    pub success_rate: f64,
    /// Aggregate user ratings
    pub user_ratings: UserRatings,
}

impl SubstitutionRecord {
    /// Create a record with the given endpoints and success rate
    #[must_use]
    pub fn new(
        original: impl Into<String>,
        substitute: impl Into<String>,
        success_rate: f64,
    ) -> Self {
        Self {
            original_ingredient: original.into(),
            substitute_ingredient: substitute.into(),
            substitution_ratio: 1.0,
            success_rate,
            ..Self::default()
        }
    }

    /// Add a dietary reason
    #[must_use]
    pub fn with_dietary_reason(mut self, reason: impl Into<String>) -> Self {
        self.dietary_reasons.push(reason.into());
        self
    }

    /// Set the quantity ratio
    #[must_use]
    pub const fn with_ratio(mut self, ratio: f64) -> Self {
        self.substitution_ratio = ratio;
        self
    }

    /// Set the aggregate user ratings
    #[must_use]
    pub const fn with_ratings(mut self, count: u32, average: f64) -> Self {
        self.user_ratings = UserRatings { count, average };
        self
    }

    /// Coerce malformed numeric fields to safe defaults
    ///
    /// NaN and out-of-range values become 0 so a corrupt catalog row never
    /// aborts a matching pass.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        let clamp_unit = |v: f64| if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 };
        let clamp_impact = |v: f64| if v.is_finite() { v.clamp(0.0, 5.0) } else { 0.0 };

        self.success_rate = clamp_unit(self.success_rate);
        self.flavor_impact = clamp_impact(self.flavor_impact);
        self.texture_impact = clamp_impact(self.texture_impact);
        self.user_ratings.average = clamp_impact(self.user_ratings.average);
        if !self.substitution_ratio.is_finite() || self.substitution_ratio <= 0.0 {
            self.substitution_ratio = 1.0;
        }
        if !self.nutritional_impact_delta.is_finite() {
            self.nutritional_impact_delta = 0.0;
        }
        self
    }
}

/// One ranked substitute for an ingredient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedSubstitution {
    /// The catalog record backing this suggestion
    pub record: SubstitutionRecord,
    /// Why this substitute was suggested, in check order
    pub reasons: Vec<String>,
    /// Blended success/rating score (0-1)
    pub match_score: f64,
}

/// Ranked substitution candidates for one recipe ingredient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubstitutionSuggestion {
    /// The recipe ingredient being replaced
    pub original_ingredient: String,
    /// Candidates, best first
    pub candidates: Vec<RankedSubstitution>,
}

/// Kinds of instruction rewrites the adapter produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentType {
    /// A technique above the user's level was explained in plain language
    TechniqueExplanation,
    /// A safety clause was appended for a detected hazard
    SafetyAdded,
    /// A vague phrase was replaced with concrete guidance
    VaguenessResolved,
}

/// A single instruction rewritten for the user's skill level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstructionAdjustment {
    /// The instruction as written by the recipe author
    pub original_instruction: String,
    /// The instruction with assistance appended
    pub adjusted_instruction: String,
    /// What kind of assistance was added
    pub adjustment_type: AdjustmentType,
}

/// A named culinary technique from the knowledge base
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechniqueEntry {
    /// Canonical technique name
    pub name: String,
    /// Skill level required to execute it comfortably (1-10)
    pub required_skill_level: u8,
    /// Plain-language explanation of the technique
    pub description: String,
    /// Practical tips for executing it
    pub tips: Vec<String>,
    /// Simpler approaches that achieve a similar result
    pub alternatives: Vec<String>,
}

/// A technique the recipe demands beyond the user's current skill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGap {
    /// Technique name
    pub technique: String,
    /// Skill level the technique requires
    pub required_level: u8,
    /// The user's current skill level
    pub user_level: u8,
    /// How to close or work around the gap
    pub recommendation: String,
}

/// Multi-axis difficulty assessment of a recipe for a specific user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DifficultyAssessment {
    /// Weighted blend of the three axes (1-10)
    pub overall_difficulty: f64,
    /// Instruction/ingredient volume and sub-technique load (1-10)
    pub preparation_complexity: f64,
    /// Required-but-missing equipment pressure (1-10)
    pub equipment_complexity: f64,
    /// Aggregate demanded technique skill (1-10)
    pub technique_complexity: f64,
    /// Techniques above the user's level
    pub skill_gaps: Vec<SkillGap>,
    /// Actionable guidance derived from the scores
    pub recommendations: Vec<String>,
}

/// Categories of cooking insights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    /// A tip for a technique near the user's level
    TechniqueTip,
    /// A required equipment item the user lacks
    EquipmentRecommendation,
    /// The recipe runs materially longer than the user's usual window
    TimingAdjustment,
    /// A hazard the user's skill level warrants calling out
    SafetyWarning,
}

/// One actionable insight about a recipe for a specific user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insight {
    /// Insight category
    pub insight_type: InsightType,
    /// Human-readable insight message
    pub content: String,
    /// Skill levels this insight applies to
    pub skill_level_target: Vec<u8>,
    /// Supporting data for the insight
    pub data: Option<serde_json::Value>,
}
