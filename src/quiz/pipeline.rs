//! Quiz pipeline orchestration
//!
//! Runs the scorer, severity classifier, and recommendation lookup over a
//! definition document and a response map, assembling the final report.

use crate::error::ScreeningError;
use crate::quiz::recommendations::RecommendationEngine;
use crate::quiz::scorer::CategoryScorer;
use crate::quiz::severity::SeverityClassifier;
use crate::quiz::types::{ChildInfo, QuizDefinition, QuizReport, QuizResponses};
use std::collections::BTreeMap;

/// Round to 2 decimals for report presentation
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Build a quiz report from an already-parsed definition and responses.
///
/// Pure function of its inputs; responses keyed by unknown question ids are
/// ignored and an empty response map yields a zero score.
pub fn quiz_report(
    definition: &QuizDefinition,
    child: ChildInfo,
    responses: &QuizResponses,
) -> QuizReport {
    let breakdown = CategoryScorer::score(definition, responses);
    let severity_level = SeverityClassifier::classify(breakdown.overall_score);
    let recommendations = RecommendationEngine::recommend(&breakdown.category_averages);

    // Re-key category averages by display name for the report
    let category_scores: BTreeMap<String, f64> = breakdown
        .category_averages
        .iter()
        .filter_map(|(id, average)| {
            definition
                .categories
                .get(id)
                .map(|display| (display.clone(), round2(*average)))
        })
        .collect();

    QuizReport {
        overall_score: round2(breakdown.overall_score),
        category_scores,
        recommendations,
        severity_level,
        child_info: child,
    }
}

/// JSON-string variant: parse the definition document and response map,
/// build the report, and serialize it.
pub fn quiz_report_json(
    definition_json: &str,
    child: ChildInfo,
    responses_json: &str,
) -> Result<String, ScreeningError> {
    let definition = QuizDefinition::from_json(definition_json)?;
    let responses: QuizResponses = serde_json::from_str(responses_json)
        .map_err(|e| ScreeningError::ParseError(e.to_string()))?;

    let report = quiz_report(&definition, child, &responses);
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::types::Severity;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn definition_json() -> &'static str {
        r#"{
            "questions": [
                {"id": "q1", "category": "phonological_awareness"},
                {"id": "q2", "category": "phonological_awareness"},
                {"id": "q3", "category": "reading_fluency"},
                {"id": "q4", "category": "spelling"}
            ],
            "categories": {
                "phonological_awareness": "Phonological Awareness",
                "reading_fluency": "Reading Fluency",
                "spelling": "Spelling & Writing"
            }
        }"#
    }

    fn child() -> ChildInfo {
        ChildInfo {
            name: "Alex".to_string(),
            age: 8,
        }
    }

    #[test]
    fn test_literal_scenario_partial_category() {
        // Two configured questions, one answered at 60: average = 30,
        // landing in the moderate recommendation band
        let definition = QuizDefinition::from_json(definition_json()).unwrap();
        let responses: QuizResponses = HashMap::from([("q1".to_string(), 60)]);

        let report = quiz_report(&definition, child(), &responses);

        assert_eq!(report.category_scores["Phonological Awareness"], 30.0);
        assert_eq!(report.overall_score, 60.0);
        assert_eq!(report.severity_level, Severity::Significant);
        assert_eq!(report.recommendations["Phonological Awareness"].len(), 3);
    }

    #[test]
    fn test_empty_responses_yield_minimal_report() {
        let definition = QuizDefinition::from_json(definition_json()).unwrap();
        let report = quiz_report(&definition, child(), &HashMap::new());

        assert_eq!(report.overall_score, 0.0);
        assert_eq!(report.severity_level, Severity::Minimal);
        assert!(report.recommendations.is_empty());
        assert_eq!(report.category_scores["Reading Fluency"], 0.0);
    }

    #[test]
    fn test_child_info_passthrough() {
        let definition = QuizDefinition::from_json(definition_json()).unwrap();
        let report = quiz_report(&definition, child(), &HashMap::new());
        assert_eq!(report.child_info, child());
    }

    #[test]
    fn test_scores_rounded_to_two_decimals() {
        let definition = QuizDefinition::from_json(definition_json()).unwrap();
        // Three answered: (60 + 55 + 10) / 3 = 41.666... -> 41.67
        let responses: QuizResponses = HashMap::from([
            ("q1".to_string(), 60),
            ("q3".to_string(), 55),
            ("q4".to_string(), 10),
        ]);

        let report = quiz_report(&definition, child(), &responses);
        assert_eq!(report.overall_score, 41.67);

        let responses: QuizResponses = HashMap::from([("q1".to_string(), 10)]);
        let report = quiz_report(&definition, child(), &responses);
        // 10 / 2 configured = 5.0 category average; overall 10 / 1 answered
        assert_eq!(report.category_scores["Phonological Awareness"], 5.0);
        assert_eq!(report.overall_score, 10.0);
    }

    #[test]
    fn test_quiz_report_json_round_trip() {
        let responses_json = r#"{"q1": 60, "q3": 55, "q4": 10}"#;
        let json = quiz_report_json(definition_json(), child(), responses_json).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["child_info"]["name"], "Alex");
        assert_eq!(value["category_scores"]["Reading Fluency"], 55.0);
        // Spelling averaged 10: below the moderate band, no entry
        assert!(value["recommendations"]
            .get("Spelling & Writing")
            .is_none());
        assert_eq!(
            value["recommendations"]["Reading Fluency"]
                .as_array()
                .unwrap()
                .len(),
            5
        );
        assert_eq!(value["severity_level"], "Moderate Indicators");
    }

    #[test]
    fn test_malformed_inputs_surface_errors() {
        assert!(quiz_report_json("nope", child(), "{}").is_err());
        assert!(quiz_report_json(definition_json(), child(), "nope").is_err());
    }
}
