//! Parent quiz scoring module
//!
//! Scores parent-reported questionnaire responses into category averages,
//! a five-tier severity level, and per-category recommendations.
//!
//! Pipeline: definition + responses → CategoryScorer → SeverityClassifier
//! → RecommendationEngine → assembled QuizReport

pub mod pipeline;
pub mod recommendations;
pub mod scorer;
pub mod severity;
pub mod types;

pub use pipeline::{quiz_report, quiz_report_json};
pub use recommendations::RecommendationEngine;
pub use scorer::{CategoryBreakdown, CategoryScorer};
pub use severity::SeverityClassifier;
pub use types::{ChildInfo, QuestionDefinition, QuizDefinition, QuizReport, QuizResponses, Severity};
