//! Model registry.
//!
//! Resolves and holds the capabilities of every configured Bedrock model. At
//! startup the registry reads the [`BedrockConfig`], resolves each model
//! definition once, and checks the definition's capability requirements so
//! that callers never dispatch tool schemas or media to a model that cannot
//! take them.

use crate::bedrock;
use mc_domain::capability::{CapabilityInfo, CapabilityRequirements, ModelType};
use mc_domain::config::BedrockConfig;
use mc_domain::error::{Error, Result};
use mc_domain::trace::TraceEvent;
use serde::Serialize;
use std::collections::HashMap;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// ModelRegistry
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A model that passed registration, with its resolved capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredModel {
    pub model_type: ModelType,
    pub info: CapabilityInfo,
}

/// Holds all registered models keyed by their configured name.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    models: HashMap<String, RegisteredModel>,
}

impl ModelRegistry {
    /// Build the registry from the `[bedrock]` config section.
    ///
    /// Models whose requirements are not met, and definitions with an empty
    /// name, are logged and skipped rather than aborting the entire startup.
    /// Duplicate names keep the first definition.
    pub fn from_config(config: &BedrockConfig) -> Result<Self> {
        let mut models: HashMap<String, RegisteredModel> = HashMap::new();

        tracing::info!(
            region = %config.region,
            configured = config.models.len(),
            "building Bedrock model registry"
        );

        for def in &config.models {
            if def.name.is_empty() {
                tracing::warn!(
                    model_type = %def.model_type,
                    "model definition has an empty name, skipping"
                );
                TraceEvent::ModelSkipped {
                    model: String::new(),
                    reason: "empty model name".into(),
                }
                .emit();
                continue;
            }

            if models.contains_key(&def.name) {
                tracing::warn!(model = %def.name, "duplicate model definition, keeping the first");
                continue;
            }

            let info = bedrock::resolve(&def.name, def.model_type);

            if let Err(e) = info.check(&def.requirements()) {
                tracing::warn!(
                    model = %def.name,
                    model_type = %def.model_type,
                    error = %e,
                    "model does not meet its requirements, skipping"
                );
                TraceEvent::ModelSkipped {
                    model: def.name.clone(),
                    reason: e.to_string(),
                }
                .emit();
                continue;
            }

            if def.model_type == ModelType::Chat && !bedrock::is_known_model(&def.name) {
                tracing::warn!(
                    model = %def.name,
                    canonical = %bedrock::canonical_model_id(&def.name),
                    "model not in capability table, tools and media disabled"
                );
            }

            tracing::info!(
                model = %def.name,
                model_type = %def.model_type,
                tools = info.supports.tools,
                media = info.supports.media,
                "registered model"
            );
            TraceEvent::ModelRegistered {
                model: def.name.clone(),
                model_type: def.model_type,
                tools: info.supports.tools,
                media: info.supports.media,
            }
            .emit();

            models.insert(
                def.name.clone(),
                RegisteredModel {
                    model_type: def.model_type,
                    info,
                },
            );
        }

        if models.is_empty() && !config.models.is_empty() {
            if config.require_models {
                return Err(Error::Config(
                    "no configured Bedrock model could be registered".into(),
                ));
            }
            tracing::warn!("no Bedrock models registered; every definition was skipped");
        }

        Ok(Self { models })
    }

    /// Look up a model by its configured name.
    pub fn get(&self, name: &str) -> Option<&RegisteredModel> {
        self.models.get(name)
    }

    /// Iterate over all registered models.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &RegisteredModel)> {
        self.models.iter()
    }

    /// Number of registered models.
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// List all registered model names (sorted).
    pub fn list_models(&self) -> Vec<String> {
        let mut names: Vec<String> = self.models.keys().cloned().collect();
        names.sort();
        names
    }

    /// Names of registered models that satisfy `req` (sorted).
    pub fn supporting(&self, req: &CapabilityRequirements) -> Vec<String> {
        let mut names: Vec<String> = self
            .models
            .iter()
            .filter(|(_, m)| m.info.supports.satisfies(req))
            .map(|(name, _)| name.clone())
            .collect();
        names.sort();
        names
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Tests
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[cfg(test)]
mod tests {
    use super::*;
    use mc_domain::config::ModelDefinition;

    fn def(name: &str, model_type: ModelType, tools: bool, media: bool) -> ModelDefinition {
        ModelDefinition {
            name: name.into(),
            model_type,
            require_tools: tools,
            require_media: media,
        }
    }

    fn config(models: Vec<ModelDefinition>) -> BedrockConfig {
        BedrockConfig {
            models,
            ..BedrockConfig::default()
        }
    }

    #[test]
    fn empty_config_builds_empty_registry() {
        let registry = ModelRegistry::from_config(&BedrockConfig::default()).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn registers_models_with_resolved_capabilities() {
        let registry = ModelRegistry::from_config(&config(vec![
            ModelDefinition::chat("us.anthropic.claude-3-haiku-20240307-v1:0"),
            def("amazon.titan-image-generator-v1", ModelType::Image, false, true),
        ]))
        .unwrap();

        assert_eq!(registry.len(), 2);
        let haiku = registry
            .get("us.anthropic.claude-3-haiku-20240307-v1:0")
            .unwrap();
        assert_eq!(haiku.model_type, ModelType::Chat);
        assert_eq!(haiku.info.label, "us.anthropic.claude-3-haiku-20240307-v1:0");
        assert!(haiku.info.supports.tools && haiku.info.supports.media);

        let image = registry.get("amazon.titan-image-generator-v1").unwrap();
        assert!(image.info.supports.media);
        assert!(!image.info.supports.tools);
    }

    #[test]
    fn skips_models_missing_required_capabilities() {
        let registry = ModelRegistry::from_config(&config(vec![
            // Nova Micro is text-only.
            def("amazon.nova-micro-v1:0", ModelType::Chat, true, true),
            def("amazon.nova-lite-v1:0", ModelType::Chat, true, true),
        ]))
        .unwrap();

        assert_eq!(registry.list_models(), vec!["amazon.nova-lite-v1:0"]);
        assert!(registry.get("amazon.nova-micro-v1:0").is_none());
    }

    #[test]
    fn unknown_chat_model_registers_without_capabilities() {
        let registry =
            ModelRegistry::from_config(&config(vec![ModelDefinition::chat("us.unknown.model-v1:0")]))
                .unwrap();
        let model = registry.get("us.unknown.model-v1:0").unwrap();
        assert!(!model.info.supports.tools);
        assert!(!model.info.supports.media);
    }

    #[test]
    fn empty_name_is_skipped() {
        let registry = ModelRegistry::from_config(&config(vec![
            ModelDefinition::chat(""),
            ModelDefinition::chat("amazon.nova-lite-v1:0"),
        ]))
        .unwrap();
        assert!(registry.get("").is_none());
        assert_eq!(registry.list_models(), vec!["amazon.nova-lite-v1:0"]);
    }

    #[test]
    fn only_empty_names_fail_when_models_required() {
        let mut cfg = config(vec![ModelDefinition::chat("")]);
        cfg.require_models = true;
        assert!(matches!(
            ModelRegistry::from_config(&cfg),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn unknown_model_with_unmet_requirements_is_skipped() {
        let registry = ModelRegistry::from_config(&config(vec![def(
            "us.unknown.model-v1:0",
            ModelType::Chat,
            true,
            false,
        )]))
        .unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn duplicate_names_keep_first_definition() {
        let registry = ModelRegistry::from_config(&config(vec![
            def("amazon.nova-pro-v1:0", ModelType::Chat, false, false),
            def("amazon.nova-pro-v1:0", ModelType::Embedding, false, false),
        ]))
        .unwrap();
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get("amazon.nova-pro-v1:0").unwrap().model_type,
            ModelType::Chat
        );
    }

    #[test]
    fn require_models_fails_when_nothing_registers() {
        let mut cfg = config(vec![def(
            "amazon.titan-embed-text-v1",
            ModelType::Embedding,
            true,
            false,
        )]);

        let registry = ModelRegistry::from_config(&cfg).unwrap();
        assert!(registry.is_empty());

        cfg.require_models = true;
        let err = ModelRegistry::from_config(&cfg).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn supporting_filters_and_sorts() {
        let registry = ModelRegistry::from_config(&config(vec![
            ModelDefinition::chat("meta.llama3-8b-instruct-v1:0"),
            ModelDefinition::chat("apac.meta.llama3-2-11b-instruct-v1:0"),
            ModelDefinition::chat("amazon.nova-micro-v1:0"),
            def("amazon.titan-embed-text-v1", ModelType::Embedding, false, false),
        ]))
        .unwrap();

        let tools_and_media = registry.supporting(&CapabilityRequirements {
            tools: true,
            media: true,
        });
        assert_eq!(tools_and_media, vec!["apac.meta.llama3-2-11b-instruct-v1:0"]);

        let tools = registry.supporting(&CapabilityRequirements {
            tools: true,
            media: false,
        });
        assert_eq!(
            tools,
            vec![
                "amazon.nova-micro-v1:0",
                "apac.meta.llama3-2-11b-instruct-v1:0",
                "meta.llama3-8b-instruct-v1:0",
            ]
        );

        assert_eq!(registry.supporting(&CapabilityRequirements::default()).len(), 4);
    }
}
