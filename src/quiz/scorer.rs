//! Category scoring
//!
//! Two intentionally different divisors are at work here and both are
//! load-bearing: a category average divides by the number of questions
//! *configured* for the category (an unanswered question drags the average
//! down), while the overall score divides by the number of questions
//! actually *answered* across all categories.

use crate::quiz::types::{QuizDefinition, QuizResponses};
use std::collections::BTreeMap;

/// Raw scoring output, before display-name mapping and rounding
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBreakdown {
    /// Category id -> average over the configured question count
    pub category_averages: BTreeMap<String, f64>,
    /// Grand total of answered responses / answered count (0 if none)
    pub overall_score: f64,
    /// Number of configured questions that were answered
    pub answered_count: u32,
}

/// Scorer for the per-category and overall quiz scores
pub struct CategoryScorer;

impl CategoryScorer {
    pub fn score(definition: &QuizDefinition, responses: &QuizResponses) -> CategoryBreakdown {
        let mut category_averages = BTreeMap::new();
        let mut grand_total = 0.0;
        let mut answered_count: u32 = 0;

        for category_id in definition.categories.keys() {
            let question_ids = definition.question_ids_for(category_id);

            let mut category_total = 0.0;
            for question_id in &question_ids {
                if let Some(&value) = responses.get(*question_id) {
                    category_total += value as f64;
                    grand_total += value as f64;
                    answered_count += 1;
                }
            }

            let average = if question_ids.is_empty() {
                0.0
            } else {
                category_total / question_ids.len() as f64
            };
            category_averages.insert(category_id.clone(), average);
        }

        let overall_score = if answered_count > 0 {
            grand_total / answered_count as f64
        } else {
            0.0
        };

        CategoryBreakdown {
            category_averages,
            overall_score,
            answered_count,
        }
    }
}
