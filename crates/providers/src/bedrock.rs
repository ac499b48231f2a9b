//! AWS Bedrock model capability resolution.
//!
//! Bedrock model ids are vendor-qualified (`anthropic.claude-...`,
//! `amazon.nova-...`). Cross-region inference profiles prepend a routing
//! qualifier (`us.`, `eu.`, `global.`, ...) to the same id. Capabilities are
//! a property of the underlying model, so resolution strips at most one
//! known prefix and looks the canonical id up in a static table.
//!
//! Image and embedding models are not looked up at all: their capability
//! profile is fixed by the model type.

use mc_domain::capability::{CapabilityInfo, CapabilityRecord, ModelSupports, ModelType};
use std::collections::HashMap;
use std::sync::LazyLock;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Static data
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Inference-profile prefixes, in match order. First match wins.
pub const INFERENCE_PROFILE_PREFIXES: [&str; 7] =
    ["global.", "us.", "eu.", "jp.", "apac.", "au.", "us-gov."];

const BOTH: CapabilityRecord = CapabilityRecord::new(true, true);
const TOOLS_ONLY: CapabilityRecord = CapabilityRecord::new(false, true);
const TEXT_ONLY: CapabilityRecord = CapabilityRecord::new(false, false);

/// Canonical model id → capabilities. Add new models here.
const KNOWN_MODELS: &[(&str, CapabilityRecord)] = &[
    // ── Anthropic ──
    ("anthropic.claude-3-haiku-20240307-v1:0", BOTH),
    ("anthropic.claude-3-sonnet-20240229-v1:0", BOTH),
    ("anthropic.claude-3-opus-20240229-v1:0", BOTH),
    ("anthropic.claude-3-5-sonnet-20240620-v1:0", BOTH),
    ("anthropic.claude-3-5-sonnet-20241022-v2:0", BOTH),
    ("anthropic.claude-3-5-haiku-20241022-v1:0", TOOLS_ONLY),
    ("anthropic.claude-3-7-sonnet-20250219-v1:0", BOTH),
    ("anthropic.claude-opus-4-20250514-v1:0", BOTH),
    ("anthropic.claude-sonnet-4-20250514-v1:0", BOTH),
    ("anthropic.claude-opus-4-1-20250805-v1:0", BOTH),
    ("anthropic.claude-sonnet-4-5-20250929-v1:0", BOTH),
    ("anthropic.claude-haiku-4-5-20251001-v1:0", BOTH),
    ("anthropic.claude-opus-4-5-20251101-v1:0", BOTH),
    // ── Amazon ──
    ("amazon.nova-micro-v1:0", TOOLS_ONLY),
    ("amazon.nova-lite-v1:0", BOTH),
    ("amazon.nova-pro-v1:0", BOTH),
    ("amazon.nova-premier-v1:0", BOTH),
    ("amazon.titan-text-express-v1", TEXT_ONLY),
    ("amazon.titan-text-lite-v1", TEXT_ONLY),
    ("amazon.titan-text-premier-v1:0", TEXT_ONLY),
    // ── Meta ──
    ("meta.llama3-8b-instruct-v1:0", TOOLS_ONLY),
    ("meta.llama3-70b-instruct-v1:0", TOOLS_ONLY),
    ("meta.llama3-1-8b-instruct-v1:0", TOOLS_ONLY),
    ("meta.llama3-1-70b-instruct-v1:0", TOOLS_ONLY),
    ("meta.llama3-1-405b-instruct-v1:0", TOOLS_ONLY),
    ("meta.llama3-2-1b-instruct-v1:0", TOOLS_ONLY),
    ("meta.llama3-2-3b-instruct-v1:0", TOOLS_ONLY),
    ("meta.llama3-2-11b-instruct-v1:0", BOTH),
    ("meta.llama3-2-90b-instruct-v1:0", BOTH),
    ("meta.llama3-3-70b-instruct-v1:0", TOOLS_ONLY),
    ("meta.llama4-scout-17b-instruct-v1:0", BOTH),
    ("meta.llama4-maverick-17b-instruct-v1:0", BOTH),
    // ── Mistral ──
    ("mistral.mistral-7b-instruct-v0:2", TEXT_ONLY),
    ("mistral.mixtral-8x7b-instruct-v0:1", TEXT_ONLY),
    ("mistral.mistral-large-2402-v1:0", TOOLS_ONLY),
    ("mistral.mistral-large-2407-v1:0", TOOLS_ONLY),
    ("mistral.mistral-small-2402-v1:0", TOOLS_ONLY),
    ("mistral.pixtral-large-2502-v1:0", BOTH),
    // ── Cohere ──
    ("cohere.command-r-v1:0", TOOLS_ONLY),
    ("cohere.command-r-plus-v1:0", TOOLS_ONLY),
    // ── AI21 ──
    ("ai21.jamba-1-5-mini-v1:0", TOOLS_ONLY),
    ("ai21.jamba-1-5-large-v1:0", TOOLS_ONLY),
    // ── DeepSeek ──
    ("deepseek.r1-v1:0", TEXT_ONLY),
    // ── Writer ──
    ("writer.palmyra-x4-v1:0", TOOLS_ONLY),
    ("writer.palmyra-x5-v1:0", TOOLS_ONLY),
];

static MODEL_CAPABILITIES: LazyLock<HashMap<&'static str, CapabilityRecord>> =
    LazyLock::new(|| KNOWN_MODELS.iter().copied().collect());

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Resolution
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Resolve capabilities from a model id and a model type tag.
///
/// Unrecognized type tags are treated as `"chat"`. Never fails: models
/// missing from the table report no capabilities.
pub fn infer_model_capabilities(model_id: &str, model_type: &str) -> CapabilityInfo {
    resolve(model_id, ModelType::from_tag(model_type))
}

/// Resolve capabilities for a model id of a known type.
///
/// The returned label is always `model_id` as given, prefix included.
pub fn resolve(model_id: &str, model_type: ModelType) -> CapabilityInfo {
    let supports = match model_type {
        ModelType::Image => ModelSupports::MEDIA_ONLY,
        ModelType::Embedding => ModelSupports::NONE,
        ModelType::Chat => {
            let canonical = canonical_model_id(model_id);
            match capability_record(canonical) {
                Some(record) => {
                    tracing::debug!(
                        model = %model_id,
                        canonical = %canonical,
                        tools = record.tools,
                        media = record.multimodal,
                        "resolved model capabilities"
                    );
                    record.into()
                }
                None => {
                    tracing::debug!(
                        model = %model_id,
                        canonical = %canonical,
                        "unknown model, tools and media disabled"
                    );
                    ModelSupports::NONE
                }
            }
        }
    };

    CapabilityInfo::new(model_id, supports)
}

/// The inference-profile prefix `model_id` starts with, if any.
pub fn inference_profile_prefix(model_id: &str) -> Option<&'static str> {
    INFERENCE_PROFILE_PREFIXES
        .iter()
        .copied()
        .find(|prefix| model_id.starts_with(*prefix))
}

/// Strip at most one inference-profile prefix.
pub fn canonical_model_id(model_id: &str) -> &str {
    match inference_profile_prefix(model_id) {
        Some(prefix) => &model_id[prefix.len()..],
        None => model_id,
    }
}

/// Direct table lookup by canonical id. No prefix handling.
pub fn capability_record(canonical_id: &str) -> Option<CapabilityRecord> {
    MODEL_CAPABILITIES.get(canonical_id).copied()
}

/// Whether the canonical form of `model_id` is in the capability table.
pub fn is_known_model(model_id: &str) -> bool {
    capability_record(canonical_model_id(model_id)).is_some()
}

/// All table entries in declaration order.
pub fn known_models() -> impl Iterator<Item = (&'static str, CapabilityRecord)> {
    KNOWN_MODELS.iter().copied()
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
