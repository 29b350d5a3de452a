//! Recommendation lookup
//!
//! All recommendation text is static: six fixed categories, each with an
//! elevated band (average >= 50, five items) and a moderate band
//! (average in [25, 50), three items). A category scoring below 25 is
//! omitted from the output map entirely.

use std::collections::BTreeMap;

/// Lower bound of the elevated recommendation band
const ELEVATED_BAND: f64 = 50.0;

/// Lower bound of the moderate recommendation band
const MODERATE_BAND: f64 = 25.0;

/// Static recommendation entry for one quiz category
pub struct CategoryRecommendations {
    pub id: &'static str,
    pub display_name: &'static str,
    pub elevated: [&'static str; 5],
    pub moderate: [&'static str; 3],
}

/// The six fixed categories with their banded recommendation texts
pub const RECOMMENDATION_TABLE: &[CategoryRecommendations] = &[
    CategoryRecommendations {
        id: "phonological_awareness",
        display_name: "Phonological Awareness",
        elevated: [
            "Practice breaking words into individual sounds (phonemes)",
            "Play rhyming games and focus on word families",
            "Use letter tiles or cards to build and segment words",
            "Try the Orton-Gillingham approach for phonics instruction",
            "Use apps like 'Phonics Hero' or 'Phonics Monster'",
        ],
        moderate: [
            "Read books with rhyming patterns",
            "Practice clapping syllables in words",
            "Play word games that focus on beginning sounds",
        ],
    },
    CategoryRecommendations {
        id: "visual_processing",
        display_name: "Visual Processing",
        elevated: [
            "Use colored overlays when reading",
            "Try larger font sizes and increased spacing between lines",
            "Practice visual tracking exercises",
            "Use a ruler or reading guide to keep place when reading",
            "Consider vision therapy assessment",
        ],
        moderate: [
            "Reduce visual clutter in reading materials",
            "Practice visual discrimination activities",
            "Try different font styles to find what works best",
        ],
    },
    CategoryRecommendations {
        id: "reading_fluency",
        display_name: "Reading Fluency",
        elevated: [
            "Practice repeated reading of the same passages",
            "Try paired reading with a parent or tutor",
            "Use audiobooks alongside printed text",
            "Practice sight word recognition daily",
            "Consider structured reading programs like 'Barton Reading'",
        ],
        moderate: [
            "Read aloud daily for short periods",
            "Choose high-interest, lower-level texts",
            "Celebrate improvements in speed and accuracy",
        ],
    },
    CategoryRecommendations {
        id: "working_memory",
        display_name: "Working Memory",
        elevated: [
            "Break instructions into smaller steps",
            "Use memory games and activities daily",
            "Create visual checklists and reminders",
            "Practice visualization techniques",
            "Try working memory apps like 'Cogmed' or 'Lumosity'",
        ],
        moderate: [
            "Use mnemonic devices for remembering sequences",
            "Practice recall activities with increasing complexity",
            "Use visual and verbal cues together",
        ],
    },
    CategoryRecommendations {
        id: "reading_comprehension",
        display_name: "Reading Comprehension",
        elevated: [
            "Pre-teach vocabulary before reading new material",
            "Use graphic organizers to map out story elements",
            "Practice visualization while reading",
            "Implement the 'Question-Answer-Relationship' (QAR) strategy",
            "Try reciprocal teaching methods",
        ],
        moderate: [
            "Discuss stories before and after reading",
            "Ask prediction questions while reading",
            "Create story maps for narrative texts",
        ],
    },
    CategoryRecommendations {
        id: "spelling",
        display_name: "Spelling & Writing",
        elevated: [
            "Use multisensory spelling methods (see, say, cover, write, check)",
            "Focus on spelling patterns rather than memorization",
            "Try assistive technology like spell checkers or dictation software",
            "Practice word sorting by spelling patterns",
            "Consider structured spelling programs like 'All About Spelling'",
        ],
        moderate: [
            "Create personalized spelling lists based on errors",
            "Use tactile methods like writing in sand or with textured materials",
            "Focus on high-frequency words first",
        ],
    },
];

/// Table-driven recommendation lookup
pub struct RecommendationEngine;

impl RecommendationEngine {
    /// Map category averages (keyed by category id) to recommendation lists
    /// keyed by display name. Categories not present in the averages, or
    /// averaging below the moderate band, produce no entry.
    pub fn recommend(category_averages: &BTreeMap<String, f64>) -> BTreeMap<String, Vec<String>> {
        let mut recommendations = BTreeMap::new();

        for entry in RECOMMENDATION_TABLE {
            let Some(&score) = category_averages.get(entry.id) else {
                continue;
            };

            let texts: &[&str] = if score >= ELEVATED_BAND {
                &entry.elevated
            } else if score >= MODERATE_BAND {
                &entry.moderate
            } else {
                continue;
            };

            recommendations.insert(
                entry.display_name.to_string(),
                texts.iter().map(|s| s.to_string()).collect(),
            );
        }

        recommendations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn averages(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    #[test]
    fn test_elevated_band_at_exactly_fifty() {
        let recs =
            RecommendationEngine::recommend(&averages(&[("phonological_awareness", 50.0)]));
        assert_eq!(recs["Phonological Awareness"].len(), 5);
    }

    #[test]
    fn test_moderate_band_at_exactly_twenty_five() {
        let recs = RecommendationEngine::recommend(&averages(&[("reading_fluency", 25.0)]));
        assert_eq!(recs["Reading Fluency"].len(), 3);
        assert_eq!(
            recs["Reading Fluency"][0],
            "Read aloud daily for short periods"
        );
    }

    #[test]
    fn test_below_moderate_band_is_omitted() {
        let recs = RecommendationEngine::recommend(&averages(&[
            ("working_memory", 24.999),
            ("spelling", 60.0),
        ]));
        assert!(!recs.contains_key("Working Memory"));
        assert_eq!(recs["Spelling & Writing"].len(), 5);
    }

    #[test]
    fn test_unknown_categories_are_ignored() {
        let recs = RecommendationEngine::recommend(&averages(&[("handwriting", 90.0)]));
        assert!(recs.is_empty());
    }
}
