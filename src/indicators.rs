//! Indicator rule evaluation
//!
//! The five behavioral indicator rules live here as a declarative table:
//! each rule carries its trigger predicate, raw score formula, and
//! contribution cap. The evaluator walks the table in a fixed order so the
//! report's indicator list is stable for display and testing.

use crate::types::{BehavioralMetrics, Expression};
use serde::{Deserialize, Serialize};

/// Identifier for a behavioral indicator rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorId {
    FacialExpressions,
    ReadingSpeed,
    Hesitations,
    Pronunciation,
    Regressions,
}

impl IndicatorId {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorId::FacialExpressions => "facial_expressions",
            IndicatorId::ReadingSpeed => "reading_speed",
            IndicatorId::Hesitations => "hesitations",
            IndicatorId::Pronunciation => "pronunciation",
            IndicatorId::Regressions => "regressions",
        }
    }
}

/// An indicator that fired, with its clamped score contribution.
///
/// The id, description, and contribution travel together through the
/// pipeline; nothing downstream re-derives one from another.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggeredIndicator {
    pub id: IndicatorId,
    pub description: String,
    pub contribution: f64,
}

/// Metric values visible to the rules, extracted once per evaluation.
///
/// Fields from an absent modality stay `None`, so rules over that modality
/// never trigger and the evaluation degrades instead of failing.
#[derive(Debug, Clone, Copy, Default)]
struct RuleInputs {
    /// confused% + frustrated%
    distress_percentage: Option<f64>,
    reading_speed: Option<f64>,
    hesitations: Option<u32>,
    pronunciation_errors: Option<u32>,
    regressions_percentage: Option<f64>,
}

impl RuleInputs {
    fn from_metrics(metrics: &BehavioralMetrics) -> Self {
        let distress_percentage = metrics.facial.as_ref().map(|f| {
            f.expression_percentage(Expression::Confused)
                + f.expression_percentage(Expression::Frustrated)
        });

        Self {
            distress_percentage,
            reading_speed: metrics.audio.as_ref().map(|a| a.reading_speed),
            hesitations: metrics.audio.as_ref().map(|a| a.hesitations),
            pronunciation_errors: metrics.audio.as_ref().map(|a| a.pronunciation_errors),
            regressions_percentage: metrics.eye.as_ref().map(|e| e.regressions_percentage),
        }
    }
}

/// A single row of the rule table
struct IndicatorRule {
    id: IndicatorId,
    /// Maximum contribution this rule can add
    cap: f64,
    trigger: fn(&RuleInputs) -> bool,
    /// Raw score, clamped to `[0, cap]` by the evaluator
    score: fn(&RuleInputs) -> f64,
    describe: fn(&RuleInputs) -> String,
}

/// The five fixed rules, in report order. Caps sum to 100.
const RULES: [IndicatorRule; 5] = [
    IndicatorRule {
        id: IndicatorId::FacialExpressions,
        cap: 25.0,
        trigger: |i| i.distress_percentage.is_some_and(|d| d > 30.0),
        score: |i| i.distress_percentage.unwrap_or(0.0) - 30.0,
        describe: |i| {
            format!(
                "Facial expressions indicating reading difficulty: {:.1}%",
                i.distress_percentage.unwrap_or(0.0)
            )
        },
    },
    IndicatorRule {
        id: IndicatorId::ReadingSpeed,
        cap: 20.0,
        trigger: |i| i.reading_speed.is_some_and(|s| s < 120.0),
        score: |i| (120.0 - i.reading_speed.unwrap_or(0.0)) / 2.0,
        describe: |i| {
            format!(
                "Reading speed below average: {:.1} words per minute",
                i.reading_speed.unwrap_or(0.0)
            )
        },
    },
    IndicatorRule {
        id: IndicatorId::Hesitations,
        cap: 15.0,
        trigger: |i| i.hesitations.is_some_and(|h| h > 5),
        score: |i| (i.hesitations.unwrap_or(0) as f64 - 5.0) * 2.0,
        describe: |i| {
            format!(
                "Frequent hesitations while reading: {} detected",
                i.hesitations.unwrap_or(0)
            )
        },
    },
    IndicatorRule {
        id: IndicatorId::Pronunciation,
        cap: 15.0,
        trigger: |i| i.pronunciation_errors.is_some_and(|e| e > 3),
        score: |i| (i.pronunciation_errors.unwrap_or(0) as f64 - 3.0) * 3.0,
        describe: |i| {
            format!(
                "Multiple pronunciation errors: {} detected",
                i.pronunciation_errors.unwrap_or(0)
            )
        },
    },
    IndicatorRule {
        id: IndicatorId::Regressions,
        cap: 25.0,
        trigger: |i| i.regressions_percentage.is_some_and(|r| r > 20.0),
        score: |i| (i.regressions_percentage.unwrap_or(0.0) - 20.0) * 1.5,
        describe: |i| {
            format!(
                "High percentage of backward eye movements: {:.1}%",
                i.regressions_percentage.unwrap_or(0.0)
            )
        },
    },
];

/// Maximum possible total score across all rules, triggered or not.
///
/// This is the sum of the caps and the denominator of the likelihood
/// formula; with the shipped table it is exactly 100.
pub fn max_possible_score() -> f64 {
    RULES.iter().map(|r| r.cap).sum()
}

/// Evaluator for the behavioral indicator rules
pub struct IndicatorEvaluator;

impl IndicatorEvaluator {
    /// Evaluate all rules against the session metrics, in table order
    pub fn evaluate(metrics: &BehavioralMetrics) -> Vec<TriggeredIndicator> {
        let inputs = RuleInputs::from_metrics(metrics);

        RULES
            .iter()
            .filter(|rule| (rule.trigger)(&inputs))
            .map(|rule| TriggeredIndicator {
                id: rule.id,
                description: (rule.describe)(&inputs),
                contribution: (rule.score)(&inputs).clamp(0.0, rule.cap),
            })
            .collect()
    }
}
