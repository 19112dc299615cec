// ABOUTME: Integration tests for the technique knowledge base
// ABOUTME: Covers buffer visibility, alias lookup, and buffer-zone alternatives
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen

use mise_intelligence::config::TechniqueConfig;
use mise_intelligence::techniques::TechniqueCatalog;

#[test]
fn saute_is_visible_to_a_level_three_cook() {
    let techniques = TechniqueCatalog::new();

    let entry = techniques.lookup("sauté", 3).unwrap();

    assert!(entry.required_skill_level <= 5);
    assert!(entry.description.contains("Sautéing means"));
}

#[test]
fn braise_is_hidden_from_a_beginner() {
    let techniques = TechniqueCatalog::new();

    assert!(techniques.lookup("braise", 1).is_none());
}

#[test]
fn braise_in_the_buffer_zone_carries_alternatives() {
    let techniques = TechniqueCatalog::new();

    let entry = techniques.lookup("braise", 3).unwrap();

    assert!(entry.required_skill_level > 3);
    assert!(!entry.alternatives.is_empty());
}

#[test]
fn lookup_is_case_insensitive_and_alias_aware() {
    let techniques = TechniqueCatalog::new();

    assert!(techniques.lookup("SAUTÉ", 5).is_some());
    let via_alias = techniques.lookup("saute", 5).unwrap();
    assert_eq!(via_alias.name, "sauté");
}

#[test]
fn unknown_techniques_return_none() {
    let techniques = TechniqueCatalog::new();

    assert!(techniques.lookup("flambé", 10).is_none());
}

#[test]
fn custom_buffer_widens_visibility() {
    let techniques = TechniqueCatalog::with_config(TechniqueConfig { skill_buffer: 4 });

    // Braise requires level 5: hidden at the default buffer for a level-1
    // cook, visible with a buffer of 4.
    assert!(techniques.lookup("braise", 1).is_some());
}

#[test]
fn out_of_range_skill_levels_clamp() {
    let techniques = TechniqueCatalog::new();

    // Negative clamps to 1, so braise (level 5) stays hidden.
    assert!(techniques.lookup("braise", -7).is_none());
    // Oversized clamps to 10, which sees everything in the dataset.
    assert!(techniques.lookup("brunoise", 99).is_some());
}
