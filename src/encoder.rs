//! Report payload encoding
//!
//! Wraps finished reports in a versioned envelope with producer and
//! provenance metadata, ready for persistence or transport by the caller.
//! The inner report object is carried unchanged.

use crate::error::ScreeningError;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current report payload schema version
pub const REPORT_VERSION: &str = "1.0.0";

/// Producer metadata stamped on every payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Producer {
    pub name: String,
    pub version: String,
    pub instance_id: String,
}

/// Versioned envelope around a report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningPayload<R> {
    pub report_version: String,
    pub producer: Producer,
    /// RFC 3339 timestamp of payload creation
    pub generated_at_utc: String,
    pub report: R,
}

/// Encoder stamping reports with producer identity and generation time
pub struct ReportEncoder {
    instance_id: String,
}

impl Default for ReportEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportEncoder {
    /// Create an encoder with a unique instance ID
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create an encoder with a specific instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        Self { instance_id }
    }

    /// Wrap a report in the payload envelope
    pub fn encode<R: Serialize>(&self, report: R) -> ScreeningPayload<R> {
        ScreeningPayload {
            report_version: REPORT_VERSION.to_string(),
            producer: Producer {
                name: crate::PRODUCER_NAME.to_string(),
                version: crate::ENGINE_VERSION.to_string(),
                instance_id: self.instance_id.clone(),
            },
            generated_at_utc: Utc::now().to_rfc3339(),
            report,
        }
    }

    /// Wrap a report and serialize the payload to pretty JSON
    pub fn encode_to_json<R: Serialize>(&self, report: R) -> Result<String, ScreeningError> {
        let payload = self.encode(report);
        serde_json::to_string_pretty(&payload).map_err(ScreeningError::JsonError)
    }
}
