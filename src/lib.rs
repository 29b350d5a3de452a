//! Lexiscan - Scoring and classification engine for behavioral dyslexia screening
//!
//! Lexiscan turns raw per-modality session metrics into a human-readable risk
//! report through a deterministic pipeline: indicator evaluation → likelihood
//! aggregation → risk classification → profile building. A parallel pipeline
//! scores parent-reported quiz responses into category averages, a severity
//! tier, and recommendations.
//!
//! ## Modules
//!
//! - **Behavioral Pipeline**: Score facial/audio/eye-movement metrics into a
//!   likelihood percentage, risk tier, and reading profile
//! - **Quiz Module**: Score questionnaire responses into category scores,
//!   severity, and recommendations
//!
//! The engine consumes already-computed metrics and produces report values;
//! it performs no capture, storage, or rendering. It is a screening aid, not
//! a diagnostic instrument.

pub mod encoder;
pub mod error;
pub mod indicators;
pub mod likelihood;
pub mod pipeline;
pub mod profile;
pub mod quiz;
pub mod risk;
pub mod types;

// FFI bindings for C interop (always available for cdylib/staticlib builds)
pub mod ffi;

pub use encoder::{ReportEncoder, ScreeningPayload, REPORT_VERSION};
pub use error::ScreeningError;
pub use pipeline::{behavioral_report, behavioral_report_json};
pub use risk::{RiskAssessment, RiskClassifier, RiskLevel};
pub use types::{
    AudioMetrics, BehavioralMetrics, BehavioralReport, EyeMetrics, FacialMetrics, ReadingProfile,
};

// Quiz exports
pub use quiz::{quiz_report, quiz_report_json, ChildInfo, QuizDefinition, QuizReport, Severity};

/// Engine version embedded in all report payloads
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for report payloads
pub const PRODUCER_NAME: &str = "lexiscan";
