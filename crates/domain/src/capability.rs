use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// Model types — each has its own capability policy.
///
/// Chat models are looked up in the provider's capability table. Image and
/// embedding models have a fixed profile determined by the type alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelType {
    /// Text generation (chat/completions). Default.
    #[default]
    Chat,
    /// Image generation.
    Image,
    /// Text embeddings.
    Embedding,
}

impl ModelType {
    /// Parse a model type tag.
    ///
    /// Total: any tag outside `chat`, `image`, `embedding` is treated as
    /// [`ModelType::Chat`], whose table lookup already degrades to "no
    /// capabilities" for unknown models.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "chat" => Self::Chat,
            "image" => Self::Image,
            "embedding" => Self::Embedding,
            other => {
                tracing::debug!(model_type = %other, "unrecognized model type, using chat");
                Self::Chat
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Image => "image",
            Self::Embedding => "embedding",
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static capability facts for one canonical model id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CapabilityRecord {
    /// Accepts non-text input (images, documents).
    pub multimodal: bool,
    /// Accepts tool/function definitions.
    pub tools: bool,
}

impl CapabilityRecord {
    pub const fn new(multimodal: bool, tools: bool) -> Self {
        Self { multimodal, tools }
    }
}

/// What a model supports, as reported to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModelSupports {
    pub tools: bool,
    pub media: bool,
}

impl ModelSupports {
    /// Nothing supported. Used for unknown models and embeddings.
    pub const NONE: Self = Self {
        tools: false,
        media: false,
    };

    /// Media output only. Used for image generation models.
    pub const MEDIA_ONLY: Self = Self {
        tools: false,
        media: true,
    };

    /// Whether every capability in `req` is supported.
    pub fn satisfies(&self, req: &CapabilityRequirements) -> bool {
        (!req.tools || self.tools) && (!req.media || self.media)
    }
}

impl From<CapabilityRecord> for ModelSupports {
    fn from(record: CapabilityRecord) -> Self {
        Self {
            tools: record.tools,
            media: record.multimodal,
        }
    }
}

/// Result of capability resolution for a single model identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityInfo {
    /// The identifier exactly as requested, inference-profile prefix included.
    pub label: String,
    pub supports: ModelSupports,
}

impl CapabilityInfo {
    pub fn new(label: impl Into<String>, supports: ModelSupports) -> Self {
        Self {
            label: label.into(),
            supports,
        }
    }

    /// Verify the model supports everything in `req`.
    ///
    /// Tools are checked before media; the error names the first missing
    /// capability.
    pub fn check(&self, req: &CapabilityRequirements) -> Result<()> {
        if req.tools && !self.supports.tools {
            return Err(Error::Unsupported {
                model: self.label.clone(),
                capability: Capability::Tools,
            });
        }
        if req.media && !self.supports.media {
            return Err(Error::Unsupported {
                model: self.label.clone(),
                capability: Capability::Media,
            });
        }
        Ok(())
    }
}

/// Capabilities a caller needs before dispatching to a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CapabilityRequirements {
    #[serde(default)]
    pub tools: bool,
    #[serde(default)]
    pub media: bool,
}

impl CapabilityRequirements {
    pub fn is_empty(&self) -> bool {
        !self.tools && !self.media
    }
}

/// A single capability, used in error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    Tools,
    Media,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tools => f.write_str("tools"),
            Self::Media => f.write_str("media"),
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
