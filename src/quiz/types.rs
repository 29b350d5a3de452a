//! Quiz data types
//!
//! The quiz pipeline consumes a static definition document (questions with
//! category assignments plus category display names) and a response map.
//! The definition is configuration: a malformed document is a fatal error,
//! unlike missing responses which just score as zero.

use crate::error::ScreeningError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// One question in the definition document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionDefinition {
    pub id: String,
    /// Category id this question belongs to
    pub category: String,
}

/// Parsed quiz definition document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizDefinition {
    pub questions: Vec<QuestionDefinition>,
    /// Category id -> display name
    pub categories: BTreeMap<String, String>,
}

impl QuizDefinition {
    /// Parse and validate a definition document
    pub fn from_json(raw: &str) -> Result<Self, ScreeningError> {
        let definition: QuizDefinition = serde_json::from_str(raw)
            .map_err(|e| ScreeningError::InvalidQuizDefinition(e.to_string()))?;
        definition.validate()?;
        Ok(definition)
    }

    pub fn validate(&self) -> Result<(), ScreeningError> {
        if self.categories.is_empty() {
            return Err(ScreeningError::InvalidQuizDefinition(
                "no categories configured".to_string(),
            ));
        }
        for question in &self.questions {
            if question.id.is_empty() {
                return Err(ScreeningError::InvalidQuizDefinition(
                    "question with empty id".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Question ids configured for a category, in document order.
    ///
    /// Questions assigned to a category id that is not configured are
    /// ignored, as are lookups for unknown categories.
    pub fn question_ids_for(&self, category_id: &str) -> Vec<&str> {
        self.questions
            .iter()
            .filter(|q| q.category == category_id)
            .map(|q| q.id.as_str())
            .collect()
    }
}

/// Parent-reported responses: question id -> value in [0, 100]
pub type QuizResponses = HashMap<String, u32>;

/// Child identity carried through to the report unchanged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildInfo {
    pub name: String,
    pub age: u32,
}

/// Five-tier severity classification of the overall quiz score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    #[serde(rename = "Minimal or No Indicators")]
    Minimal,
    #[serde(rename = "Mild Indicators")]
    Mild,
    #[serde(rename = "Moderate Indicators")]
    Moderate,
    #[serde(rename = "Significant Indicators")]
    Significant,
    #[serde(rename = "Strong Indicators")]
    Strong,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Minimal => "Minimal or No Indicators",
            Severity::Mild => "Mild Indicators",
            Severity::Moderate => "Moderate Indicators",
            Severity::Significant => "Significant Indicators",
            Severity::Strong => "Strong Indicators",
        }
    }
}

/// Assembled quiz report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizReport {
    /// Mean of answered responses, rounded to 2 decimals
    pub overall_score: f64,
    /// Category display name -> average score (rounded to 2 decimals)
    pub category_scores: BTreeMap<String, f64>,
    /// Category display name -> recommendation texts; categories scoring
    /// below the lower band are omitted entirely
    pub recommendations: BTreeMap<String, Vec<String>>,
    pub severity_level: Severity,
    pub child_info: ChildInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_from_json() {
        let raw = r#"{
            "questions": [
                {"id": "q1", "category": "phonological_awareness"},
                {"id": "q2", "category": "visual_processing"}
            ],
            "categories": {
                "phonological_awareness": "Phonological Awareness",
                "visual_processing": "Visual Processing"
            }
        }"#;

        let definition = QuizDefinition::from_json(raw).unwrap();
        assert_eq!(definition.questions.len(), 2);
        assert_eq!(
            definition.question_ids_for("phonological_awareness"),
            vec!["q1"]
        );
        assert!(definition.question_ids_for("working_memory").is_empty());
    }

    #[test]
    fn test_definition_without_categories_is_fatal() {
        let raw = r#"{"questions": [], "categories": {}}"#;
        let result = QuizDefinition::from_json(raw);
        assert!(matches!(
            result,
            Err(ScreeningError::InvalidQuizDefinition(_))
        ));
    }

    #[test]
    fn test_malformed_definition_is_fatal() {
        assert!(QuizDefinition::from_json("not json").is_err());
        assert!(QuizDefinition::from_json(r#"{"questions": []}"#).is_err());
    }

    #[test]
    fn test_severity_labels() {
        let json = serde_json::to_string(&Severity::Moderate).unwrap();
        assert_eq!(json, "\"Moderate Indicators\"");
        assert_eq!(Severity::Minimal.as_str(), "Minimal or No Indicators");
    }
}
