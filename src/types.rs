//! Core types for the Lexiscan behavioral pipeline
//!
//! This module defines the per-modality metric records handed over by capture
//! collaborators (facial analysis, reading audio, eye tracking) and the report
//! types produced at the end of the pipeline.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Facial expression labels tracked during a reading session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expression {
    Neutral,
    Confused,
    Concentrated,
    Frustrated,
    Happy,
}

impl Expression {
    pub fn as_str(&self) -> &'static str {
        match self {
            Expression::Neutral => "neutral",
            Expression::Confused => "confused",
            Expression::Concentrated => "concentrated",
            Expression::Frustrated => "frustrated",
            Expression::Happy => "happy",
        }
    }
}

/// Reading speed assessment label supplied by the audio analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedAssessment {
    #[serde(rename = "Below Average")]
    BelowAverage,
    #[serde(rename = "Average")]
    Average,
    #[serde(rename = "Above Average")]
    AboveAverage,
}

impl Default for SpeedAssessment {
    fn default() -> Self {
        SpeedAssessment::Average
    }
}

/// Facial expression distribution observed while reading
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FacialMetrics {
    /// Expression label -> share of frames (percentage, the five labels sum to ~100)
    pub expressions: HashMap<Expression, f64>,
    /// Most frequently observed expression
    pub dominant_expression: Expression,
    /// Detector confidence in the dominant expression (0-100)
    pub confidence_score: f64,
    /// Number of frames analyzed
    pub total_frames: u32,
}

impl Default for FacialMetrics {
    fn default() -> Self {
        Self {
            expressions: HashMap::new(),
            dominant_expression: Expression::Neutral,
            confidence_score: 0.0,
            total_frames: 0,
        }
    }
}

impl FacialMetrics {
    /// Percentage of frames showing the given expression (0 if never observed)
    pub fn expression_percentage(&self, expression: Expression) -> f64 {
        self.expressions.get(&expression).copied().unwrap_or(0.0)
    }
}

/// Reading-audio metrics extracted from a recorded reading session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioMetrics {
    /// Reading speed in words per minute (>= 0)
    pub reading_speed: f64,
    /// Coarse speed label relative to age norms
    pub speed_assessment: SpeedAssessment,
    /// Number of hesitations detected
    pub hesitations: u32,
    /// Hesitation rate over the session
    pub hesitations_per_minute: f64,
    /// Number of pronunciation errors detected
    pub pronunciation_errors: u32,
    /// Speech clarity (percentage, 0-100)
    pub speech_clarity_percentage: f64,
    /// Reading fluency score (0-100)
    pub fluency_score: f64,
    /// Reading rhythm score (0-100)
    pub reading_rhythm_score: f64,
    /// Overall audio score (0-100)
    pub overall_audio_score: f64,
}

impl Default for AudioMetrics {
    fn default() -> Self {
        Self {
            reading_speed: 0.0,
            speed_assessment: SpeedAssessment::default(),
            hesitations: 0,
            hesitations_per_minute: 0.0,
            pronunciation_errors: 0,
            speech_clarity_percentage: 0.0,
            fluency_score: 0.0,
            reading_rhythm_score: 0.0,
            overall_audio_score: 0.0,
        }
    }
}

/// Eye-movement metrics from a reading session
///
/// The three percentages (fixations, regressions, saccades) are expected to
/// sum to ~100 but this is not enforced at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EyeMetrics {
    /// Number of fixations detected
    pub fixations: u32,
    /// Fixations as a share of all eye movements (0-100)
    pub fixations_percentage: f64,
    /// Number of regressions (backward movements) detected
    pub regressions: u32,
    /// Regressions as a share of all eye movements (0-100)
    pub regressions_percentage: f64,
    /// Number of saccades (forward movements) detected
    pub saccades: u32,
    /// Saccades as a share of all eye movements (0-100)
    pub saccades_percentage: f64,
    /// Eye stability (percentage, 0-100)
    pub eye_stability_percentage: f64,
    /// Saccade efficiency (percentage, 0-100)
    pub saccade_efficiency_percentage: f64,
    /// Overall reading efficiency score (0-100)
    pub reading_efficiency_score: f64,
}

impl Default for EyeMetrics {
    fn default() -> Self {
        Self {
            fixations: 0,
            fixations_percentage: 0.0,
            regressions: 0,
            regressions_percentage: 0.0,
            saccades: 0,
            saccades_percentage: 0.0,
            eye_stability_percentage: 0.0,
            saccade_efficiency_percentage: 0.0,
            reading_efficiency_score: 0.0,
        }
    }
}

/// Complete metric handoff for one screening session.
///
/// A missing modality degrades the report rather than failing it: rules and
/// profile checks over an absent record simply do not fire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BehavioralMetrics {
    pub facial: Option<FacialMetrics>,
    pub audio: Option<AudioMetrics>,
    pub eye: Option<EyeMetrics>,
}

/// Strengths and challenges identified from the session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadingProfile {
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
}

/// Assembled behavioral screening report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehavioralReport {
    /// Human-readable descriptions of triggered indicators, in rule order
    pub indicators: Vec<String>,
    /// Indicator id -> clamped score contribution
    pub indicator_scores: HashMap<crate::indicators::IndicatorId, f64>,
    /// Aggregate likelihood percentage (0-100)
    pub dyslexia_likelihood_percentage: f64,
    /// Coarse risk tier
    pub risk_level: crate::risk::RiskLevel,
    /// Confidence in the classification (percentage)
    pub confidence_percentage: f64,
    /// Strengths/challenges profile
    pub reading_profile: ReadingProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_facial_metrics_deserialize() {
        let json = r#"{"expressions": {"confused": 25.3, "frustrated": 10.2}}"#;
        let facial: FacialMetrics = serde_json::from_str(json).unwrap();

        assert_eq!(facial.expression_percentage(Expression::Confused), 25.3);
        assert_eq!(facial.expression_percentage(Expression::Neutral), 0.0);
        assert_eq!(facial.dominant_expression, Expression::Neutral);
        assert_eq!(facial.total_frames, 0);
    }

    #[test]
    fn test_speed_assessment_labels() {
        let audio: AudioMetrics =
            serde_json::from_str(r#"{"reading_speed": 115.7, "speed_assessment": "Below Average"}"#)
                .unwrap();
        assert_eq!(audio.speed_assessment, SpeedAssessment::BelowAverage);
        assert_eq!(audio.hesitations, 0);
    }

    #[test]
    fn test_missing_modalities_deserialize() {
        let metrics: BehavioralMetrics = serde_json::from_str("{}").unwrap();
        assert!(metrics.facial.is_none());
        assert!(metrics.audio.is_none());
        assert!(metrics.eye.is_none());
    }
}
