// ABOUTME: Instruction adapter rewriting recipe steps for a user's skill level
// ABOUTME: Adds technique explanations, safety clauses, and vagueness resolutions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen

//! The instruction adapter.
//!
//! Rewrites instruction steps for users at or below the needs-help
//! threshold. Output is sparse: a step that triggers no rule produces no
//! adjustment, and a step may produce one adjustment per triggered rule
//! category. Multiple hazards within one step concatenate into a single
//! safety adjustment.

use crate::config::AdaptationConfig;
use crate::models::{clamp_skill_level, AdjustmentType, CookingProfile, InstructionAdjustment};
use crate::patterns::PatternDetector;
use crate::techniques::TECHNIQUES;

/// Rewrites instructions to match a user's skill level
#[derive(Debug, Clone, Default)]
pub struct InstructionAdapter {
    config: AdaptationConfig,
}

impl InstructionAdapter {
    /// Create an adapter with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an adapter with a custom configuration
    #[must_use]
    pub const fn with_config(config: AdaptationConfig) -> Self {
        Self { config }
    }

    /// Rewrite instructions for the target skill level
    ///
    /// Above the needs-help threshold the result is empty. Out-of-range
    /// target levels (including negatives) clamp into 1-10, so the lowest
    /// representable level receives maximal assistance.
    #[must_use]
    pub fn adjust_instructions_for_skill_level(
        &self,
        instructions: &[String],
        target_skill_level: i32,
        profile: &CookingProfile,
    ) -> Vec<InstructionAdjustment> {
        let skill = clamp_skill_level(target_skill_level);
        if instructions.is_empty() || skill > self.config.needs_help_threshold {
            return Vec::new();
        }

        let mut adjustments = Vec::new();
        for instruction in instructions {
            if instruction.trim().is_empty() {
                continue;
            }
            self.adjust_one(instruction, skill, profile, &mut adjustments);
        }
        adjustments
    }

    /// Apply rule categories to one step, in fixed order:
    /// technique explanation, safety insertion, vagueness resolution
    fn adjust_one(
        &self,
        instruction: &str,
        skill: u8,
        profile: &CookingProfile,
        adjustments: &mut Vec<InstructionAdjustment>,
    ) {
        let lowered = instruction.to_lowercase();
        let base = instruction.trim_end();

        let explanations: Vec<String> = TECHNIQUES
            .iter()
            .filter(|seed| seed.required_skill_level > skill && seed.matches(&lowered))
            .map(|seed| seed.explanation())
            .collect();
        if !explanations.is_empty() {
            adjustments.push(InstructionAdjustment {
                original_instruction: instruction.to_owned(),
                adjusted_instruction: format!("{base} ({})", explanations.join("; ")),
                adjustment_type: AdjustmentType::TechniqueExplanation,
            });
        }

        let low_skill = skill <= self.config.safety_skill_threshold
            || profile.skill_level <= self.config.safety_skill_threshold;
        if low_skill {
            let hazards = PatternDetector::detect_hazards(instruction);
            if !hazards.is_empty() {
                let cautions: Vec<&str> = hazards.iter().map(|rule| rule.caution).collect();
                adjustments.push(InstructionAdjustment {
                    original_instruction: instruction.to_owned(),
                    adjusted_instruction: format!("{base} Safety: {}.", cautions.join("; ")),
                    adjustment_type: AdjustmentType::SafetyAdded,
                });
            }
        }

        let resolutions: Vec<&str> = PatternDetector::detect_vagueness(instruction)
            .iter()
            .map(|rule| rule.guidance)
            .collect();
        if !resolutions.is_empty() {
            adjustments.push(InstructionAdjustment {
                original_instruction: instruction.to_owned(),
                adjusted_instruction: format!("{base} ({})", resolutions.join("; ")),
                adjustment_type: AdjustmentType::VaguenessResolved,
            });
        }
    }
}
