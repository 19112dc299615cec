// ABOUTME: Cooking insight generation from recipe/profile signals
// ABOUTME: Emits technique tips, equipment gaps, timing mismatches, and safety warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen

//! The insight generator.
//!
//! Aggregates technique, equipment, timing, and hazard signals into
//! actionable insight records. A recipe may yield zero insights; callers
//! may truncate long lists.

use crate::config::{InsightConfig, TechniqueConfig};
use crate::models::{CookingProfile, Insight, InsightType, Recipe};
use crate::patterns::PatternDetector;
use crate::techniques::TechniqueCatalog;

/// Generates actionable cooking insights for a recipe and profile
#[derive(Debug, Clone, Default)]
pub struct CookingInsightGenerator {
    config: InsightConfig,
    technique_config: TechniqueConfig,
}

impl CookingInsightGenerator {
    /// Create a generator with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator with custom configuration
    #[must_use]
    pub const fn with_config(config: InsightConfig, technique_config: TechniqueConfig) -> Self {
        Self {
            config,
            technique_config,
        }
    }

    /// Generate insights for a recipe and profile
    #[must_use]
    pub fn generate_cooking_insights(
        &self,
        recipe: &Recipe,
        profile: &CookingProfile,
    ) -> Vec<Insight> {
        let mut insights = Vec::new();

        insights.extend(self.technique_tips(recipe, profile));
        insights.extend(Self::equipment_recommendations(recipe, profile));
        insights.extend(self.timing_adjustments(recipe, profile));
        insights.extend(self.safety_warnings(recipe, profile));

        insights
    }

    /// One tip per detected technique within the user's skill buffer
    fn technique_tips(&self, recipe: &Recipe, profile: &CookingProfile) -> Vec<Insight> {
        let buffer = i16::from(self.technique_config.skill_buffer);
        TechniqueCatalog::detect(&recipe.instructions)
            .into_iter()
            .filter(|d| {
                let gap = i16::from(d.seed.required_skill_level) - i16::from(profile.skill_level);
                gap.abs() <= buffer
            })
            .filter_map(|d| {
                let tip = d.seed.tips.first()?;
                Some(Insight {
                    insight_type: InsightType::TechniqueTip,
                    content: format!("{}: {tip}", d.seed.gerund),
                    skill_level_target: skill_range(d.seed.required_skill_level, buffer),
                    data: Some(serde_json::json!({
                        "technique": d.seed.name,
                        "required_skill_level": d.seed.required_skill_level,
                    })),
                })
            })
            .collect()
    }

    /// One insight per distinct required-but-unavailable equipment item
    fn equipment_recommendations(recipe: &Recipe, profile: &CookingProfile) -> Vec<Insight> {
        PatternDetector::detect_equipment(&recipe.instructions)
            .into_iter()
            .filter(|rule| !profile.has_equipment(rule.name))
            .map(|rule| Insight {
                insight_type: InsightType::EquipmentRecommendation,
                content: format!(
                    "This recipe calls for a {}, which isn't in your equipment list. Check the steps for a workaround before starting.",
                    rule.name
                ),
                skill_level_target: (1..=10).collect(),
                data: Some(serde_json::json!({ "equipment": rule.name })),
            })
            .collect()
    }

    /// A timing insight when the recipe runs materially past the user's
    /// preferred cooking window
    fn timing_adjustments(&self, recipe: &Recipe, profile: &CookingProfile) -> Vec<Insight> {
        let Some(total) = recipe.total_time() else {
            return Vec::new();
        };
        let preferred = profile.preferred_cooking_time_minutes;
        if preferred == 0 {
            return Vec::new();
        }
        let threshold = f64::from(preferred) * (1.0 + self.config.timing_margin);
        if f64::from(total) <= threshold {
            return Vec::new();
        }
        vec![Insight {
            insight_type: InsightType::TimingAdjustment,
            content: format!(
                "This recipe takes about {total} minutes, longer than your usual {preferred}-minute cooking window. Consider prepping ingredients in advance."
            ),
            skill_level_target: (1..=10).collect(),
            data: Some(serde_json::json!({
                "total_minutes": total,
                "preferred_minutes": preferred,
            })),
        }]
    }

    /// One warning per distinct hazard category, for low-skill users
    fn safety_warnings(&self, recipe: &Recipe, profile: &CookingProfile) -> Vec<Insight> {
        if profile.skill_level > self.config.safety_skill_threshold {
            return Vec::new();
        }
        let threshold = self.config.safety_skill_threshold;
        PatternDetector::detect_hazard_kinds(&recipe.instructions)
            .into_iter()
            .map(|rule| Insight {
                insight_type: InsightType::SafetyWarning,
                content: format!("Safety: {}.", rule.caution),
                skill_level_target: (1..=threshold).collect(),
                data: Some(serde_json::json!({ "hazard": rule.label })),
            })
            .collect()
    }
}

/// The clamped skill range `[required - buffer, required + buffer]`
fn skill_range(required: u8, buffer: i16) -> Vec<u8> {
    let low = (i16::from(required) - buffer).max(1) as u8;
    let high = (i16::from(required) + buffer).min(10) as u8;
    (low..=high).collect()
}
