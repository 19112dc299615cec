// ABOUTME: Instruction adapter configuration
// ABOUTME: Configures skill thresholds gating instruction assistance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen

use serde::{Deserialize, Serialize};

/// Instruction adapter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdaptationConfig {
    /// Highest skill level that still receives instruction assistance;
    /// above it the adapter returns instructions unmodified
    pub needs_help_threshold: u8,
    /// Highest skill level that receives appended safety clauses
    pub safety_skill_threshold: u8,
}

impl Default for AdaptationConfig {
    fn default() -> Self {
        Self {
            needs_help_threshold: 5,
            safety_skill_threshold: 4,
        }
    }
}
