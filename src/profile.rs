//! Reading profile construction
//!
//! Builds the strengths/challenges lists from independent threshold checks
//! over the session metrics. These checks are separate from the indicator
//! rules: a session can trigger indicators and still show strengths.

use crate::types::{BehavioralMetrics, ReadingProfile};

/// Builder for the strengths/challenges reading profile
pub struct ProfileBuilder;

impl ProfileBuilder {
    /// Build the profile for a session.
    ///
    /// `likelihood` is the aggregate likelihood percentage; it only affects
    /// the generic-challenge fallback. Checks over an absent modality do not
    /// fire in either list.
    pub fn build(metrics: &BehavioralMetrics, likelihood: f64) -> ReadingProfile {
        let mut strengths = Vec::new();
        let mut challenges = Vec::new();

        if let Some(audio) = &metrics.audio {
            if audio.reading_speed >= 140.0 {
                strengths.push(format!(
                    "Above average reading speed ({:.1} wpm)",
                    audio.reading_speed
                ));
            }
            if audio.fluency_score >= 85.0 {
                strengths.push(format!("Good reading fluency ({:.1}%)", audio.fluency_score));
            }
        }
        if let Some(eye) = &metrics.eye {
            if eye.reading_efficiency_score >= 80.0 {
                strengths.push(format!(
                    "Efficient eye movement patterns ({:.1}%)",
                    eye.reading_efficiency_score
                ));
            }
        }
        if let Some(audio) = &metrics.audio {
            if audio.speech_clarity_percentage >= 85.0 {
                strengths.push(format!(
                    "Clear speech articulation ({:.1}%)",
                    audio.speech_clarity_percentage
                ));
            }
        }

        if let Some(audio) = &metrics.audio {
            if audio.reading_speed < 100.0 {
                challenges.push(format!(
                    "Below average reading speed ({:.1} wpm)",
                    audio.reading_speed
                ));
            }
            if audio.fluency_score < 70.0 {
                challenges.push(format!(
                    "Reading fluency difficulties ({:.1}%)",
                    audio.fluency_score
                ));
            }
            if audio.pronunciation_errors > 5 {
                challenges.push(format!(
                    "Pronunciation challenges ({} errors)",
                    audio.pronunciation_errors
                ));
            }
        }
        if let Some(eye) = &metrics.eye {
            if eye.regressions_percentage > 25.0 {
                challenges.push(format!(
                    "High number of reading regressions ({:.1}%)",
                    eye.regressions_percentage
                ));
            }
        }

        if strengths.is_empty() {
            strengths.push("Reading motivation and engagement".to_string());
        }
        if challenges.is_empty() && likelihood >= 30.0 {
            challenges.push("Subtle reading efficiency issues".to_string());
        }

        ReadingProfile {
            strengths,
            challenges,
        }
    }
}
