// ABOUTME: Cooking intelligence engine for the Mise platform
// ABOUTME: Substitution matching, instruction adaptation, difficulty assessment, insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen

//! # Mise Intelligence
//!
//! Recipe-adaptation and recommendation engine for the Mise cooking
//! platform. Given a user's cooking profile and a target recipe, it finds
//! safe ingredient substitutions, rewrites instructions for the user's
//! skill level, assesses difficulty, and emits actionable insights.
//!
//! All intelligence is deterministic rule/heuristic logic over structured
//! inputs: multi-factor scoring, constraint filtering, text-pattern
//! detection, and numeric blending. No trained models.
//!
//! The engines are pure functions of their inputs plus reads from the
//! substitution catalog (an external collaborator behind
//! [`SubstitutionCatalog`]) and the seeded technique knowledge base.
//! Every public operation returns a usable, possibly empty, result under
//! malformed-input and unavailable-catalog conditions.

/// Substitution catalog access trait and in-memory implementation
pub mod catalog;
/// Per-component configuration, injected at construction
pub mod config;
/// Difficulty assessment
pub mod difficulty;
/// The engine facade
pub mod engine;
/// Error types for the catalog seam
pub mod errors;
/// Insight generation
pub mod insights;
/// Instruction adaptation
pub mod instruction_adapter;
/// Shared data models
pub mod models;
/// Substitution matching
pub mod substitution;
/// Technique knowledge base
pub mod techniques;

mod patterns;

pub use catalog::{InMemoryCatalog, SubstitutionCatalog};
pub use config::IntelligenceConfig;
pub use difficulty::DifficultyAssessor;
pub use engine::CookingIntelligence;
pub use errors::{CatalogError, CatalogResult};
pub use insights::CookingInsightGenerator;
pub use instruction_adapter::InstructionAdapter;
pub use models::{
    clamp_skill_level, AdjustmentType, CookingProfile, DifficultyAssessment,
    IngredientPreferences, Insight, InsightType, InstructionAdjustment, NutritionFacts,
    RankedSubstitution, Recipe, RecipeIngredient, SkillGap, SubstitutionRecord,
    SubstitutionSuggestion, SuccessHistory, TechniqueEntry, UserRatings,
};
pub use substitution::SubstitutionMatcher;
pub use techniques::TechniqueCatalog;
