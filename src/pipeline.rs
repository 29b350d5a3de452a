//! Pipeline orchestration
//!
//! Public entry points for the behavioral pipeline. Each call stages the
//! evaluator, aggregator, classifier, and profile builder over one session's
//! metrics; no state survives between calls.

use crate::error::ScreeningError;
use crate::indicators::IndicatorEvaluator;
use crate::likelihood::LikelihoodAggregator;
use crate::profile::ProfileBuilder;
use crate::risk::RiskClassifier;
use crate::types::{BehavioralMetrics, BehavioralReport};
use std::collections::HashMap;

/// Build a behavioral screening report from one session's metrics.
///
/// Pure function of its input: a missing modality degrades the result
/// (its rules and profile checks do not fire) rather than failing.
pub fn behavioral_report(metrics: &BehavioralMetrics) -> BehavioralReport {
    let triggered = IndicatorEvaluator::evaluate(metrics);
    let summary = LikelihoodAggregator::aggregate(&triggered);
    let assessment = RiskClassifier::classify(summary.likelihood_percentage);
    let reading_profile = ProfileBuilder::build(metrics, summary.likelihood_percentage);

    let mut indicators = Vec::with_capacity(triggered.len());
    let mut indicator_scores = HashMap::with_capacity(triggered.len());
    for indicator in triggered {
        indicators.push(indicator.description);
        indicator_scores.insert(indicator.id, indicator.contribution);
    }

    BehavioralReport {
        indicators,
        indicator_scores,
        dyslexia_likelihood_percentage: summary.likelihood_percentage,
        risk_level: assessment.level,
        confidence_percentage: assessment.confidence_percentage,
        reading_profile,
    }
}

/// JSON-string variant: parse a `BehavioralMetrics` document, build the
/// report, and serialize it.
pub fn behavioral_report_json(raw_json: &str) -> Result<String, ScreeningError> {
    let metrics: BehavioralMetrics =
        serde_json::from_str(raw_json).map_err(|e| ScreeningError::ParseError(e.to_string()))?;

    let report = behavioral_report(&metrics);
    Ok(serde_json::to_string_pretty(&report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::IndicatorId;
    use crate::risk::RiskLevel;
    use pretty_assertions::assert_eq;

    fn sample_metrics_json() -> &'static str {
        r#"{
            "facial": {
                "expressions": {
                    "neutral": 45.5,
                    "confused": 25.3,
                    "concentrated": 15.7,
                    "frustrated": 10.2,
                    "happy": 3.3
                },
                "dominant_expression": "neutral",
                "confidence_score": 68.2,
                "total_frames": 150
            },
            "audio": {
                "reading_speed": 115.7,
                "speed_assessment": "Below Average",
                "hesitations": 7,
                "hesitations_per_minute": 7.8,
                "pronunciation_errors": 4,
                "speech_clarity_percentage": 80.0,
                "fluency_score": 77.0,
                "reading_rhythm_score": 72.5,
                "overall_audio_score": 74.8
            },
            "eye": {
                "fixations": 48,
                "fixations_percentage": 40.0,
                "regressions": 24,
                "regressions_percentage": 20.0,
                "saccades": 48,
                "saccades_percentage": 40.0,
                "eye_stability_percentage": 70.0,
                "saccade_efficiency_percentage": 66.7,
                "reading_efficiency_score": 52.0
            }
        }"#
    }

    #[test]
    fn test_end_to_end_literal_scenario() {
        let metrics: BehavioralMetrics = serde_json::from_str(sample_metrics_json()).unwrap();
        let report = behavioral_report(&metrics);

        // 5.5 + 2.15 + 4 + 3; regressions at exactly 20.0% does not trigger
        assert!((report.dyslexia_likelihood_percentage - 14.65).abs() < 1e-9);
        assert_eq!(report.risk_level, RiskLevel::Low);
        assert!((report.confidence_percentage - 64.65).abs() < 1e-9);

        assert_eq!(report.indicators.len(), 4);
        assert_eq!(
            report.indicators[0],
            "Facial expressions indicating reading difficulty: 35.5%"
        );
        assert_eq!(
            report.indicators[1],
            "Reading speed below average: 115.7 words per minute"
        );
        assert_eq!(
            report.indicators[2],
            "Frequent hesitations while reading: 7 detected"
        );
        assert_eq!(
            report.indicators[3],
            "Multiple pronunciation errors: 4 detected"
        );

        assert!(!report.indicator_scores.contains_key(&IndicatorId::Regressions));
        assert_eq!(report.indicator_scores[&IndicatorId::Hesitations], 4.0);
    }

    #[test]
    fn test_likelihood_identity_with_total() {
        let metrics: BehavioralMetrics = serde_json::from_str(sample_metrics_json()).unwrap();
        let report = behavioral_report(&metrics);

        let total: f64 = report.indicator_scores.values().sum();
        assert!((report.dyslexia_likelihood_percentage - total).abs() < 1e-9);
    }

    #[test]
    fn test_empty_metrics_produce_low_risk_report() {
        let report = behavioral_report(&BehavioralMetrics::default());

        assert!(report.indicators.is_empty());
        assert_eq!(report.dyslexia_likelihood_percentage, 0.0);
        assert_eq!(report.risk_level, RiskLevel::Low);
        assert_eq!(report.confidence_percentage, 50.0);
        assert_eq!(
            report.reading_profile.strengths,
            vec!["Reading motivation and engagement"]
        );
        assert!(report.reading_profile.challenges.is_empty());
    }

    #[test]
    fn test_high_risk_scenario() {
        let json = r#"{
            "facial": {"expressions": {"confused": 40.0, "frustrated": 25.0}},
            "audio": {"reading_speed": 70.0, "hesitations": 14, "pronunciation_errors": 9, "fluency_score": 55.0},
            "eye": {"regressions_percentage": 38.0}
        }"#;

        let metrics: BehavioralMetrics = serde_json::from_str(json).unwrap();
        let report = behavioral_report(&metrics);

        // 25 + 20 + 15 + 15 + 25: every rule at its cap
        assert_eq!(report.dyslexia_likelihood_percentage, 100.0);
        assert_eq!(report.risk_level, RiskLevel::High);
        assert_eq!(report.confidence_percentage, 95.0);
        assert_eq!(report.reading_profile.challenges.len(), 4);
    }

    #[test]
    fn test_behavioral_report_json() {
        let json = behavioral_report_json(sample_metrics_json()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["risk_level"], "Low");
        assert_eq!(value["indicator_scores"]["hesitations"], 4.0);
        assert!(value["reading_profile"]["strengths"].is_array());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(behavioral_report_json("not valid json").is_err());
    }
}
