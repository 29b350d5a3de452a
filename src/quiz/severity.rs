//! Severity classification
//!
//! Maps the overall quiz score onto five ordered tiers over half-open bins:
//! `<20` Minimal, `<40` Mild, `<60` Moderate, `<80` Significant, `>=80` Strong.

use crate::quiz::types::Severity;

/// Classifier from overall quiz score to severity tier
pub struct SeverityClassifier;

impl SeverityClassifier {
    pub fn classify(overall_score: f64) -> Severity {
        if overall_score < 20.0 {
            Severity::Minimal
        } else if overall_score < 40.0 {
            Severity::Mild
        } else if overall_score < 60.0 {
            Severity::Moderate
        } else if overall_score < 80.0 {
            Severity::Significant
        } else {
            Severity::Strong
        }
    }
}
