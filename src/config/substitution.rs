// ABOUTME: Substitution matcher configuration
// ABOUTME: Configures candidate limits and match score weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen

use serde::{Deserialize, Serialize};

/// Substitution matcher configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubstitutionConfig {
    /// Maximum ranked candidates returned per ingredient
    pub max_suggestions_per_ingredient: usize,
    /// Weights blending record metrics into a match score
    pub weights: SubstitutionWeights,
}

/// Weights for blending catalog metrics into a single match score
///
/// The two weights are normalized at use, so they need not sum to 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubstitutionWeights {
    /// Weight on the record's reported success rate
    pub success_rate_weight: f64,
    /// Weight on the record's mean user rating (scaled to 0-1)
    pub rating_weight: f64,
}

impl Default for SubstitutionConfig {
    fn default() -> Self {
        Self {
            max_suggestions_per_ingredient: 3,
            weights: SubstitutionWeights::default(),
        }
    }
}

impl Default for SubstitutionWeights {
    fn default() -> Self {
        Self {
            success_rate_weight: 0.7,
            rating_weight: 0.3,
        }
    }
}
