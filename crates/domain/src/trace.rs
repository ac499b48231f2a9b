use serde::Serialize;

use crate::capability::ModelType;

/// Structured trace events emitted across all modelcaps crates.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event")]
pub enum TraceEvent {
    ModelRegistered {
        model: String,
        model_type: ModelType,
        tools: bool,
        media: bool,
    },
    ModelSkipped {
        model: String,
        reason: String,
    },
}

impl TraceEvent {
    pub fn emit(&self) {
        let json = serde_json::to_string(self).unwrap_or_default();
        tracing::info!(trace_event = %json, "mc_event");
    }
}
