use mc_domain::capability::ModelType;
use mc_domain::config::{Config, ConfigError, ConfigSeverity};
use mc_providers::bedrock;

/// Config issues plus the checks that need the capability table.
pub fn issues(config: &Config) -> Vec<ConfigError> {
    let mut issues = config.validate();

    for (i, model) in config.bedrock.models.iter().enumerate() {
        if model.name.is_empty() || model.model_type != ModelType::Chat {
            continue;
        }
        if !bedrock::is_known_model(&model.name) {
            let severity = if model.requirements().is_empty() {
                ConfigSeverity::Warning
            } else {
                ConfigSeverity::Error
            };
            issues.push(ConfigError {
                severity,
                field: format!("bedrock.models[{i}].name"),
                message: format!(
                    "\"{}\" is not in the capability table; tools and media are disabled",
                    model.name
                ),
            });
        }
    }

    issues
}

/// Parse and validate the config, printing any issues.
///
/// Exits with code 0 when valid, code 1 when errors are found.
pub fn validate(config: &Config, config_path: &str) -> bool {
    let issues = issues(config);

    if issues.is_empty() {
        println!("Config OK ({config_path})");
        return true;
    }

    let error_count = issues
        .iter()
        .filter(|e| e.severity == ConfigSeverity::Error)
        .count();
    let warning_count = issues.len() - error_count;

    for issue in &issues {
        println!("{issue}");
    }

    println!(
        "\n{} error(s), {} warning(s) in {config_path}",
        error_count, warning_count,
    );

    error_count == 0
}

/// Dump the resolved config (with all defaults filled in) as TOML.
pub fn show(config: &Config) -> anyhow::Result<()> {
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mc_domain::config::ModelDefinition;

    #[test]
    fn unknown_chat_model_warns() {
        let mut config = Config::default();
        config.bedrock.models = vec![ModelDefinition::chat("us.unknown.model-v1:0")];
        let issues = issues(&config);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, ConfigSeverity::Warning);
    }

    #[test]
    fn unknown_chat_model_with_requirements_is_an_error() {
        let mut config = Config::default();
        let mut def = ModelDefinition::chat("unknown.model-v1:0");
        def.require_tools = true;
        config.bedrock.models = vec![def];
        let issues = issues(&config);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, ConfigSeverity::Error);
        assert!(!validate(&config, "modelcaps.toml"));
    }

    #[test]
    fn known_models_validate_clean() {
        let mut config = Config::default();
        config.bedrock.models = vec![
            ModelDefinition::chat("global.amazon.nova-pro-v1:0"),
            ModelDefinition {
                name: "amazon.titan-embed-text-v1".into(),
                model_type: ModelType::Embedding,
                require_tools: false,
                require_media: false,
            },
        ];
        assert!(issues(&config).is_empty());
        assert!(validate(&config, "modelcaps.toml"));
    }
}
