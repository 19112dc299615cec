// ABOUTME: Declarative text-pattern tables for hazard, vagueness, and equipment detection
// ABOUTME: Each table is scanned by a single loop; adding a rule is adding a row
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen

//! Rule tables for instruction-text classification.
//!
//! Detection is keyword-based and case-insensitive. Tables are scanned in
//! declaration order, so every detector's output order is deterministic.

/// Categories of safety-relevant cooking actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HazardKind {
    /// High heat, hot fat, open flame
    HighHeat,
    /// Knife work and other blades
    SharpTools,
    /// Boiling or simmering liquid
    BoilingLiquid,
}

/// A hazard category with its detection keywords and safety clause
#[derive(Debug)]
pub struct HazardRule {
    /// Hazard category
    pub kind: HazardKind,
    /// Stable label used in insight supporting data
    pub label: &'static str,
    /// Keywords indicating the hazard
    pub keywords: &'static [&'static str],
    /// Safety clause appended to instructions and surfaced as warnings
    pub caution: &'static str,
}

/// One rule per hazard category; the category doubles as the dedupe key
pub static HAZARD_RULES: &[HazardRule] = &[
    HazardRule {
        kind: HazardKind::HighHeat,
        label: "high_heat",
        keywords: &[
            "high heat",
            "hot oil",
            "hot pan",
            "smoking",
            "smoke point",
            "flame",
            "broil",
            "very hot",
        ],
        caution: "keep pan handles turned inward and never leave hot oil unattended",
    },
    HazardRule {
        kind: HazardKind::SharpTools,
        label: "sharp_tools",
        keywords: &["knife", "chop", "slice", "dice", "mince", "carve"],
        caution: "curl your fingertips under and keep the blade angled away from your hand",
    },
    HazardRule {
        kind: HazardKind::BoilingLiquid,
        label: "boiling_liquid",
        keywords: &["boil", "boiling", "rolling boil", "simmer", "scald"],
        caution: "lower food into boiling water away from you so it does not splash",
    },
];

/// A vague phrase with the concrete guidance that resolves it
#[derive(Debug)]
pub struct VaguenessRule {
    /// The vague phrase as it appears in instructions
    pub phrase: &'static str,
    /// Concrete guidance appended for low-skill users
    pub guidance: &'static str,
}

pub static VAGUENESS_RULES: &[VaguenessRule] = &[
    VaguenessRule {
        phrase: "to taste",
        guidance: "start with a pinch and adjust after tasting",
    },
    VaguenessRule {
        phrase: "until done",
        guidance: "set a timer and check early, looking for the color or tenderness the recipe describes",
    },
    VaguenessRule {
        phrase: "as needed",
        guidance: "add a small amount at a time and check the result before adding more",
    },
    VaguenessRule {
        phrase: "a splash",
        guidance: "about a tablespoon",
    },
    VaguenessRule {
        phrase: "a handful",
        guidance: "about a quarter cup",
    },
];

/// An equipment keyword with its canonical display name
#[derive(Debug)]
pub struct EquipmentRule {
    /// Keywords whose presence implies the equipment is required
    pub keywords: &'static [&'static str],
    /// Canonical equipment name, matched against the profile's list
    pub name: &'static str,
}

pub static EQUIPMENT_RULES: &[EquipmentRule] = &[
    EquipmentRule {
        keywords: &["stand mixer", "dough hook", "paddle attachment"],
        name: "stand mixer",
    },
    EquipmentRule {
        keywords: &["hand mixer", "electric mixer"],
        name: "hand mixer",
    },
    EquipmentRule {
        keywords: &["blender", "blend until smooth", "purée", "puree"],
        name: "blender",
    },
    EquipmentRule {
        keywords: &["food processor"],
        name: "food processor",
    },
    EquipmentRule {
        keywords: &["thermometer", "instant-read"],
        name: "thermometer",
    },
    EquipmentRule {
        keywords: &["oven", "bake", "roast", "broil", "preheat"],
        name: "oven",
    },
    EquipmentRule {
        keywords: &["grill", "grilling", "barbecue"],
        name: "grill",
    },
    EquipmentRule {
        keywords: &["slow cooker", "crock pot"],
        name: "slow cooker",
    },
    EquipmentRule {
        keywords: &["cast iron", "cast-iron"],
        name: "cast iron skillet",
    },
    EquipmentRule {
        keywords: &["rolling pin", "roll out the dough"],
        name: "rolling pin",
    },
    EquipmentRule {
        keywords: &["microwave"],
        name: "microwave",
    },
];

/// Table-driven detectors over instruction text
pub struct PatternDetector;

impl PatternDetector {
    /// Hazard rules triggered by one instruction
    pub fn detect_hazards(instruction: &str) -> Vec<&'static HazardRule> {
        let lowered = instruction.to_lowercase();
        HAZARD_RULES
            .iter()
            .filter(|rule| rule.keywords.iter().any(|kw| lowered.contains(kw)))
            .collect()
    }

    /// Distinct hazard categories present anywhere in the instruction list
    pub fn detect_hazard_kinds(instructions: &[String]) -> Vec<&'static HazardRule> {
        HAZARD_RULES
            .iter()
            .filter(|rule| {
                instructions.iter().any(|instruction| {
                    let lowered = instruction.to_lowercase();
                    rule.keywords.iter().any(|kw| lowered.contains(kw))
                })
            })
            .collect()
    }

    /// Vagueness rules triggered by one instruction
    pub fn detect_vagueness(instruction: &str) -> Vec<&'static VaguenessRule> {
        let lowered = instruction.to_lowercase();
        VAGUENESS_RULES
            .iter()
            .filter(|rule| lowered.contains(rule.phrase))
            .collect()
    }

    /// Distinct equipment needs detected across the instruction list
    pub fn detect_equipment(instructions: &[String]) -> Vec<&'static EquipmentRule> {
        let lowered: Vec<String> = instructions.iter().map(|i| i.to_lowercase()).collect();
        EQUIPMENT_RULES
            .iter()
            .filter(|rule| {
                lowered
                    .iter()
                    .any(|text| rule.keywords.iter().any(|kw| text.contains(kw)))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hazard_detection_is_per_category() {
        let hazards = PatternDetector::detect_hazards("Boil the pasta, then chop the herbs");
        let kinds: Vec<HazardKind> = hazards.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![HazardKind::SharpTools, HazardKind::BoilingLiquid]);
    }

    #[test]
    fn vagueness_detection_matches_phrases() {
        let rules = PatternDetector::detect_vagueness("Season to taste and serve");
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].phrase, "to taste");
    }

    #[test]
    fn equipment_detection_is_distinct() {
        let instructions = vec![
            "Preheat the oven to 200C".to_owned(),
            "Bake for 20 minutes".to_owned(),
        ];
        let equipment = PatternDetector::detect_equipment(&instructions);
        assert_eq!(equipment.len(), 1);
        assert_eq!(equipment[0].name, "oven");
    }
}
