// ABOUTME: Insight generator configuration
// ABOUTME: Configures timing margins and safety skill thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen

use serde::{Deserialize, Serialize};

/// Insight generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightConfig {
    /// Fraction by which total time must exceed the user's preferred time
    /// before a timing insight is emitted (0.25 = 25% over)
    pub timing_margin: f64,
    /// Highest skill level that receives safety warnings
    pub safety_skill_threshold: u8,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            timing_margin: 0.25,
            safety_skill_threshold: 4,
        }
    }
}
