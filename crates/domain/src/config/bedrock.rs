use serde::{Deserialize, Serialize};

use crate::capability::{CapabilityRequirements, ModelType};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Bedrock model declarations
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BedrockConfig {
    /// AWS region the models are invoked in (e.g. "us-east-1").
    ///
    /// Informational: capability resolution does not depend on it. It is
    /// reported in registry logs so operators can tell deployments apart.
    #[serde(default = "d_region")]
    pub region: String,
    /// If true, fail registry construction when models are configured but
    /// none of them could be registered.
    #[serde(default)]
    pub require_models: bool,
    /// Models to register at startup (data-driven: adding a model = adding config).
    #[serde(default)]
    pub models: Vec<ModelDefinition>,
}

impl Default for BedrockConfig {
    fn default() -> Self {
        Self {
            region: d_region(),
            require_models: false,
            models: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDefinition {
    /// Model identifier, optionally with an inference-profile prefix
    /// (e.g. "us.anthropic.claude-3-haiku-20240307-v1:0").
    pub name: String,
    #[serde(rename = "type", default)]
    pub model_type: ModelType,
    #[serde(default)]
    pub require_tools: bool,
    #[serde(default)]
    pub require_media: bool,
}

impl ModelDefinition {
    pub fn chat(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model_type: ModelType::Chat,
            require_tools: false,
            require_media: false,
        }
    }

    pub fn requirements(&self) -> CapabilityRequirements {
        CapabilityRequirements {
            tools: self.require_tools,
            media: self.require_media,
        }
    }
}

fn d_region() -> String {
    "us-east-1".into()
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_empty_uses_defaults() {
        let cfg: BedrockConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.region, "us-east-1");
        assert!(!cfg.require_models);
        assert!(cfg.models.is_empty());
    }

    #[test]
    fn model_type_defaults_to_chat() {
        let toml_str = r#"
            [[models]]
            name = "amazon.nova-lite-v1:0"
        "#;
        let cfg: BedrockConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.models.len(), 1);
        assert_eq!(cfg.models[0].model_type, ModelType::Chat);
        assert!(cfg.models[0].requirements().is_empty());
    }

    #[test]
    fn model_definition_parses_type_and_requirements() {
        let toml_str = r#"
            region = "eu-central-1"

            [[models]]
            name = "eu.anthropic.claude-3-5-sonnet-20241022-v2:0"
            type = "chat"
            require_tools = true
            require_media = true

            [[models]]
            name = "amazon.titan-embed-text-v1"
            type = "embedding"
        "#;
        let cfg: BedrockConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(cfg.region, "eu-central-1");
        let req = cfg.models[0].requirements();
        assert!(req.tools && req.media);
        assert_eq!(cfg.models[1].model_type, ModelType::Embedding);
    }

    #[test]
    fn unknown_model_type_is_rejected() {
        let toml_str = r#"
            [[models]]
            name = "cohere.rerank-v3-5:0"
            type = "rerank"
        "#;
        assert!(toml::from_str::<BedrockConfig>(toml_str).is_err());
    }
}
