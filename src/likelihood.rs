//! Likelihood aggregation
//!
//! Sums triggered indicator contributions against the rule table's maximum
//! possible score and normalizes to a 0-100 likelihood percentage. No
//! rounding happens here; presentation layers may round.

use crate::indicators::{max_possible_score, TriggeredIndicator};

/// Aggregate of one evaluation pass
#[derive(Debug, Clone, PartialEq)]
pub struct LikelihoodSummary {
    /// Sum of triggered contributions
    pub total_score: f64,
    /// Sum of all rule caps, regardless of which rules triggered
    pub max_possible_score: f64,
    /// `total / max * 100`, in [0, 100] by the per-rule caps
    pub likelihood_percentage: f64,
}

/// Aggregator turning indicator contributions into a likelihood percentage
pub struct LikelihoodAggregator;

impl LikelihoodAggregator {
    pub fn aggregate(triggered: &[TriggeredIndicator]) -> LikelihoodSummary {
        let total_score: f64 = triggered.iter().map(|t| t.contribution).sum();
        let max = max_possible_score();

        let likelihood_percentage = if max > 0.0 {
            (total_score / max) * 100.0
        } else {
            0.0
        };

        LikelihoodSummary {
            total_score,
            max_possible_score: max,
            likelihood_percentage,
        }
    }
}
