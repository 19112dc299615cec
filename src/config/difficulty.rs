// ABOUTME: Difficulty assessor configuration
// ABOUTME: Configures the axis weights blended into overall difficulty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen

use serde::{Deserialize, Serialize};

/// Difficulty assessor configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DifficultyConfig {
    /// Axis weights for the overall difficulty blend
    pub weights: DifficultyWeights,
}

/// Axis weights for the overall difficulty blend
///
/// The defaults encode platform policy: technique demand dominates, with
/// preparation volume and equipment pressure sharing the remainder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DifficultyWeights {
    /// Weight on technique complexity
    pub technique_weight: f64,
    /// Weight on preparation complexity
    pub preparation_weight: f64,
    /// Weight on equipment complexity
    pub equipment_weight: f64,
}

impl Default for DifficultyWeights {
    fn default() -> Self {
        Self {
            technique_weight: 0.4,
            preparation_weight: 0.3,
            equipment_weight: 0.3,
        }
    }
}
