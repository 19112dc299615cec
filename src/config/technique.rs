// ABOUTME: Technique knowledge base configuration
// ABOUTME: Configures the skill buffer governing technique visibility
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen

use serde::{Deserialize, Serialize};

/// Technique knowledge base configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechniqueConfig {
    /// Allowance by which a technique's required skill may exceed the
    /// user's skill while still being surfaced (with alternatives)
    pub skill_buffer: u8,
}

impl Default for TechniqueConfig {
    fn default() -> Self {
        Self { skill_buffer: 2 }
    }
}
