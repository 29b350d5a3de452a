//! Risk classification
//!
//! Maps the aggregate likelihood percentage onto three risk tiers, each with
//! its own confidence formula and ceiling. Tier lower bounds are inclusive:
//! 60 classifies as High and 30 as Moderate.

use serde::{Deserialize, Serialize};

/// Coarse risk tier for a behavioral screening
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }
}

/// Tier plus confidence for one classification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    /// Confidence percentage, capped per tier (85 / 90 / 95)
    pub confidence_percentage: f64,
}

/// Classifier from likelihood percentage to risk tier
pub struct RiskClassifier;

impl RiskClassifier {
    pub fn classify(likelihood: f64) -> RiskAssessment {
        if likelihood >= 60.0 {
            RiskAssessment {
                level: RiskLevel::High,
                confidence_percentage: (70.0 + (likelihood - 60.0)).min(95.0),
            }
        } else if likelihood >= 30.0 {
            RiskAssessment {
                level: RiskLevel::Moderate,
                confidence_percentage: (60.0 + (likelihood - 30.0)).min(90.0),
            }
        } else {
            RiskAssessment {
                level: RiskLevel::Low,
                confidence_percentage: (50.0 + likelihood).min(85.0),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries_are_inclusive_on_lower_bound() {
        assert_eq!(RiskClassifier::classify(29.9).level, RiskLevel::Low);
        assert_eq!(RiskClassifier::classify(30.0).level, RiskLevel::Moderate);
        assert_eq!(RiskClassifier::classify(59.9).level, RiskLevel::Moderate);
        assert_eq!(RiskClassifier::classify(60.0).level, RiskLevel::High);
    }

    #[test]
    fn test_confidence_formulas() {
        // Low: 50 + L
        let low = RiskClassifier::classify(14.65);
        assert!((low.confidence_percentage - 64.65).abs() < 1e-9);

        // Moderate: 60 + (L - 30)
        let moderate = RiskClassifier::classify(45.0);
        assert_eq!(moderate.confidence_percentage, 75.0);

        // High: 70 + (L - 60)
        let high = RiskClassifier::classify(72.0);
        assert_eq!(high.confidence_percentage, 82.0);
    }

    #[test]
    fn test_confidence_caps_per_tier() {
        assert!(RiskClassifier::classify(29.9).confidence_percentage <= 85.0);
        assert!(RiskClassifier::classify(59.9).confidence_percentage <= 90.0);
        assert_eq!(RiskClassifier::classify(90.0).confidence_percentage, 95.0);
        assert_eq!(RiskClassifier::classify(100.0).confidence_percentage, 95.0);
    }

    #[test]
    fn test_confidence_monotone_within_tier() {
        let samples = [0.0, 5.0, 12.5, 29.9];
        for pair in samples.windows(2) {
            let a = RiskClassifier::classify(pair[0]).confidence_percentage;
            let b = RiskClassifier::classify(pair[1]).confidence_percentage;
            assert!(a <= b);
        }

        let samples = [60.0, 70.0, 85.0, 99.0, 100.0];
        for pair in samples.windows(2) {
            let a = RiskClassifier::classify(pair[0]).confidence_percentage;
            let b = RiskClassifier::classify(pair[1]).confidence_percentage;
            assert!(a <= b);
        }
    }
}
