// ABOUTME: Configuration module for the cooking intelligence engine
// ABOUTME: Aggregates per-component configs into one injectable IntelligenceConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen

//! Engine configuration.
//!
//! Every threshold and weight that encodes product policy lives here as a
//! named, overridable value. The aggregate [`IntelligenceConfig`] is passed
//! to the engine at construction; there is no global configuration state.

/// Instruction adapter configuration
pub mod adaptation;
/// Difficulty assessor configuration
pub mod difficulty;
/// Insight generator configuration
pub mod insight;
/// Substitution matcher configuration
pub mod substitution;
/// Technique knowledge base configuration
pub mod technique;

pub use adaptation::AdaptationConfig;
pub use difficulty::{DifficultyConfig, DifficultyWeights};
pub use insight::InsightConfig;
pub use substitution::{SubstitutionConfig, SubstitutionWeights};
pub use technique::TechniqueConfig;

use serde::{Deserialize, Serialize};

/// Aggregate configuration for all engines
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Substitution matcher settings
    pub substitution: SubstitutionConfig,
    /// Instruction adapter settings
    pub adaptation: AdaptationConfig,
    /// Difficulty assessor settings
    pub difficulty: DifficultyConfig,
    /// Insight generator settings
    pub insight: InsightConfig,
    /// Technique knowledge base settings
    pub technique: TechniqueConfig,
}
