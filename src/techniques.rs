// ABOUTME: Technique knowledge base with seeded culinary technique data
// ABOUTME: Case-insensitive lookup, skill-buffer visibility, and keyword detection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Mise Kitchen

//! The technique knowledge base.
//!
//! A seeded, read-only dataset of named culinary techniques with required
//! skill ratings, tips, and simpler alternatives. Techniques are surfaced
//! to a user only when their required level is within the configured buffer
//! of the user's skill; inside the buffer zone the entry always carries
//! alternatives the user can fall back to.

use crate::config::TechniqueConfig;
use crate::models::{clamp_skill_level, TechniqueEntry};

/// Seeded technique record
#[derive(Debug)]
pub(crate) struct TechniqueSeed {
    /// Canonical lowercase name
    pub name: &'static str,
    /// Gerund form used when explaining the technique in prose
    pub gerund: &'static str,
    /// Detection keywords beyond the canonical name
    pub aliases: &'static [&'static str],
    /// Skill level required to execute comfortably (1-10)
    pub required_skill_level: u8,
    /// Plain-language explanation, phrased to follow "<gerund> means"
    pub description: &'static str,
    /// Practical execution tips
    pub tips: &'static [&'static str],
    /// Simpler approaches with a similar result
    pub alternatives: &'static [&'static str],
}

impl TechniqueSeed {
    /// All keywords that identify this technique in text
    pub fn keywords(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.name).chain(self.aliases.iter().copied())
    }

    /// Whether the (lowercased) text mentions this technique
    pub fn matches(&self, lowered_text: &str) -> bool {
        self.keywords().any(|kw| lowered_text.contains(kw))
    }

    /// Full explanation sentence ("Sautéing means ...")
    pub fn explanation(&self) -> String {
        format!("{} means {}", self.gerund, self.description)
    }
}

/// The seeded technique dataset
///
/// Curated by the content team; the engine has no write path. Every entry
/// above skill level 1 carries at least one simpler alternative so the
/// buffer-zone contract can always be met.
pub(crate) static TECHNIQUES: &[TechniqueSeed] = &[
    TechniqueSeed {
        name: "sauté",
        gerund: "Sautéing",
        aliases: &["saute", "sautéing", "sauteing", "pan-fry", "pan fry"],
        required_skill_level: 4,
        description: "cooking food quickly in a small amount of hot fat over fairly high heat, tossing or stirring so it browns evenly without steaming",
        tips: &[
            "Get the pan hot before the fat goes in, and the fat hot before the food",
            "Keep the pan uncrowded so moisture can escape",
        ],
        alternatives: &[
            "Cook over medium heat with a little oil, stirring often; it takes longer but is much more forgiving",
        ],
    },
    TechniqueSeed {
        name: "braise",
        gerund: "Braising",
        aliases: &["braising", "braised"],
        required_skill_level: 5,
        description: "browning food first, then cooking it slowly, partly covered in liquid, until it turns tender",
        tips: &[
            "Brown deeply before the liquid goes in; that color is most of the flavor",
            "Keep the liquid at a bare simmer, never a rolling boil",
        ],
        alternatives: &[
            "Use a slow cooker on low with the same ingredients; the browning step can be skipped at some cost in flavor",
        ],
    },
    TechniqueSeed {
        name: "fold",
        gerund: "Folding",
        aliases: &["folding", "fold in"],
        required_skill_level: 3,
        description: "gently combining a light mixture into a heavier one with a scooping motion so the air beaten into it is not lost",
        tips: &[
            "Use a flexible spatula and turn the bowl a quarter with each stroke",
            "Stop as soon as no streaks remain",
        ],
        alternatives: &[
            "Stir slowly with a spatula in wide strokes; the result is slightly denser but still works",
        ],
    },
    TechniqueSeed {
        name: "deglaze",
        gerund: "Deglazing",
        aliases: &["deglazing", "deglazed"],
        required_skill_level: 5,
        description: "pouring liquid into a hot pan to dissolve the browned bits stuck to the bottom into a sauce",
        tips: &[
            "Take the pan off the heat for a moment before adding wine or stock to avoid spattering",
            "Scrape with a wooden spoon while the liquid bubbles",
        ],
        alternatives: &[
            "Skip the pan sauce and serve with a simple store-bought sauce warmed separately",
        ],
    },
    TechniqueSeed {
        name: "temper",
        gerund: "Tempering",
        aliases: &["tempering", "tempered"],
        required_skill_level: 6,
        description: "slowly raising the temperature of a delicate ingredient, such as eggs or chocolate, by adding small amounts of a hot liquid so it does not curdle or seize",
        tips: &[
            "Add the hot liquid a ladleful at a time, whisking constantly",
            "A heavy bowl on a damp towel leaves both hands free",
        ],
        alternatives: &[
            "Cook the mixture in a double boiler over barely simmering water, stirring the whole time",
        ],
    },
    TechniqueSeed {
        name: "emulsify",
        gerund: "Emulsifying",
        aliases: &["emulsion", "emulsified"],
        required_skill_level: 6,
        description: "whisking two liquids that normally separate, like oil and vinegar, into one stable creamy mixture",
        tips: &[
            "Add the oil in a thin, steady stream while whisking hard",
            "A spoonful of mustard helps the mixture hold together",
        ],
        alternatives: &[
            "Shake the ingredients hard in a sealed jar just before serving and accept some separation",
        ],
    },
    TechniqueSeed {
        name: "blanch",
        gerund: "Blanching",
        aliases: &["blanching", "blanched"],
        required_skill_level: 3,
        description: "briefly boiling food, then plunging it into ice water to stop the cooking and set its color",
        tips: &[
            "Salt the water generously and have the ice bath ready before anything goes in",
        ],
        alternatives: &[
            "Steam the vegetables until just tender and rinse under cold water",
        ],
    },
    TechniqueSeed {
        name: "julienne",
        gerund: "Julienne",
        aliases: &["julienned"],
        required_skill_level: 5,
        description: "cutting food into thin, even matchsticks so it cooks quickly and uniformly",
        tips: &[
            "Square off the sides first so the pieces sit flat while you slice",
        ],
        alternatives: &[
            "Use a coarse grater or a vegetable peeler to make thin strips instead",
        ],
    },
    TechniqueSeed {
        name: "brunoise",
        gerund: "Brunoise",
        aliases: &["brunoised"],
        required_skill_level: 7,
        description: "cutting food into tiny, even cubes, usually from julienne strips, for refined texture and fast cooking",
        tips: &[
            "Keep the knife tip on the board and let the blade do the work",
        ],
        alternatives: &[
            "A small dice from a sharp chef's knife is fine for almost every home dish",
        ],
    },
    TechniqueSeed {
        name: "knead",
        gerund: "Kneading",
        aliases: &["kneading", "kneaded"],
        required_skill_level: 3,
        description: "working a dough by pressing, folding, and turning it until it becomes smooth and elastic",
        tips: &[
            "Use the heel of your hand and resist adding extra flour too early",
        ],
        alternatives: &[
            "Use a stand mixer with a dough hook on low speed, or a no-knead recipe with a long rest",
        ],
    },
    TechniqueSeed {
        name: "sear",
        gerund: "Searing",
        aliases: &["searing", "seared"],
        required_skill_level: 4,
        description: "browning the surface of food in a very hot pan to build a deep, flavorful crust",
        tips: &[
            "Dry the surface of the food first; water is the enemy of a good crust",
            "Leave the food alone until it releases from the pan on its own",
        ],
        alternatives: &[
            "Roast at high heat in the oven; the crust is lighter but the inside cooks gently",
        ],
    },
    TechniqueSeed {
        name: "poach",
        gerund: "Poaching",
        aliases: &["poaching", "poached"],
        required_skill_level: 4,
        description: "cooking food gently in liquid kept just below a simmer so it stays delicate and moist",
        tips: &[
            "Watch for small bubbles on the pot bottom; big rolling bubbles mean the heat is too high",
        ],
        alternatives: &[
            "Steam over low heat, which is harder to overdo than poaching",
        ],
    },
    TechniqueSeed {
        name: "caramelize",
        gerund: "Caramelizing",
        aliases: &["caramelise", "caramelizing", "caramelising", "caramelized"],
        required_skill_level: 5,
        description: "cooking food slowly until its natural sugars brown and turn sweet and complex",
        tips: &[
            "Low heat and patience; real caramelized onions take half an hour, not ten minutes",
        ],
        alternatives: &[
            "Cook over medium heat until soft and lightly golden and accept a milder flavor",
        ],
    },
    TechniqueSeed {
        name: "reduce",
        gerund: "Reducing",
        aliases: &["reduction", "reduce by", "reduce until", "reduce the sauce"],
        required_skill_level: 3,
        description: "simmering a liquid uncovered so water evaporates and the flavor concentrates and thickens",
        tips: &[
            "A wide pan reduces much faster than a tall pot",
        ],
        alternatives: &[
            "Thicken with a teaspoon of cornstarch stirred into cold water instead",
        ],
    },
    TechniqueSeed {
        name: "whip",
        gerund: "Whipping",
        aliases: &["whipping", "whipped", "whisk until stiff"],
        required_skill_level: 2,
        description: "beating air into an ingredient, like cream or egg whites, until it holds volume",
        tips: &[
            "A cold bowl and cold cream whip far faster",
        ],
        alternatives: &[
            "Use an electric hand mixer on medium speed",
        ],
    },
    TechniqueSeed {
        name: "proof",
        gerund: "Proofing",
        aliases: &["proofing", "let rise", "let the dough rise"],
        required_skill_level: 4,
        description: "letting a yeast dough rest in a warm spot until it rises and develops flavor",
        tips: &[
            "An oven with just the light on makes a reliable warm spot",
        ],
        alternatives: &[
            "Use a longer, slower rise in the refrigerator overnight; timing is far less fussy",
        ],
    },
];

/// A technique detected in recipe instructions
#[derive(Debug, Clone, Copy)]
pub(crate) struct DetectedTechnique {
    /// The seeded technique record
    pub seed: &'static TechniqueSeed,
    /// Number of instruction steps mentioning it
    pub count: usize,
}

/// Lookup and detection over the seeded technique dataset
#[derive(Debug, Clone, Default)]
pub struct TechniqueCatalog {
    config: TechniqueConfig,
}

impl TechniqueCatalog {
    /// Create a catalog with the default skill buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog with a custom configuration
    #[must_use]
    pub const fn with_config(config: TechniqueConfig) -> Self {
        Self { config }
    }

    /// The configured skill buffer
    #[must_use]
    pub const fn skill_buffer(&self) -> u8 {
        self.config.skill_buffer
    }

    /// Look up a technique by name or alias, case-insensitively
    ///
    /// Returns the entry only when its required skill level is within the
    /// configured buffer of the user's skill. Entries in the buffer zone
    /// (required level above the user's) always carry alternatives.
    #[must_use]
    pub fn lookup(&self, name: &str, user_skill_level: i32) -> Option<TechniqueEntry> {
        let seed = Self::find_seed(name)?;
        let user = clamp_skill_level(user_skill_level);
        if seed.required_skill_level > user.saturating_add(self.config.skill_buffer) {
            return None;
        }
        Some(Self::entry_from_seed(seed))
    }

    /// Find a seed by exact name or alias match (case-insensitive)
    pub(crate) fn find_seed(name: &str) -> Option<&'static TechniqueSeed> {
        let wanted = name.trim().to_lowercase();
        TECHNIQUES
            .iter()
            .find(|seed| seed.name == wanted || seed.aliases.contains(&wanted.as_str()))
    }

    /// Detect techniques mentioned in instruction text
    ///
    /// Counts the number of instruction steps mentioning each technique;
    /// results follow dataset order, so detection is deterministic.
    pub(crate) fn detect(instructions: &[String]) -> Vec<DetectedTechnique> {
        let lowered: Vec<String> = instructions.iter().map(|i| i.to_lowercase()).collect();
        TECHNIQUES
            .iter()
            .filter_map(|seed| {
                let count = lowered.iter().filter(|text| seed.matches(text)).count();
                (count > 0).then_some(DetectedTechnique { seed, count })
            })
            .collect()
    }

    fn entry_from_seed(seed: &TechniqueSeed) -> TechniqueEntry {
        TechniqueEntry {
            name: seed.name.to_owned(),
            required_skill_level: seed.required_skill_level,
            description: seed.explanation(),
            tips: seed.tips.iter().map(|&t| t.to_owned()).collect(),
            alternatives: seed.alternatives.iter().map(|&a| a.to_owned()).collect(),
        }
    }
}
