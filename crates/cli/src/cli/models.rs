use mc_domain::config::Config;
use mc_providers::bedrock;
use mc_providers::ModelRegistry;
use serde::Serialize;

use super::yes_no;

#[derive(Debug, Serialize)]
struct ModelRow<'a> {
    id: &'a str,
    tools: bool,
    multimodal: bool,
}

/// `modelcaps models`: dump the capability table.
pub fn list(json: bool) -> anyhow::Result<()> {
    let rows: Vec<ModelRow<'static>> = bedrock::known_models()
        .map(|(id, record)| ModelRow {
            id,
            tools: record.tools,
            multimodal: record.multimodal,
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    let width = rows.iter().map(|r| r.id.len()).max().unwrap_or(0);
    println!("{:<width$}  TOOLS  MEDIA", "MODEL");
    for row in &rows {
        println!(
            "{:<width$}  {:<5}  {}",
            row.id,
            yes_no(row.tools),
            yes_no(row.multimodal)
        );
    }
    Ok(())
}

/// `modelcaps prefixes`.
pub fn prefixes() {
    for prefix in bedrock::INFERENCE_PROFILE_PREFIXES {
        println!("{prefix}");
    }
}

/// `modelcaps registry`: build the registry the way a gateway would at
/// startup and show what made it in.
pub fn registry(config: &Config, json: bool) -> anyhow::Result<()> {
    tracing::info!(
        region = %config.bedrock.region,
        configured = config.bedrock.models.len(),
        "registering configured models"
    );
    let registry = ModelRegistry::from_config(&config.bedrock)?;

    if json {
        let models: Vec<_> = registry
            .list_models()
            .into_iter()
            .filter_map(|name| registry.get(&name).cloned())
            .collect();
        println!("{}", serde_json::to_string_pretty(&models)?);
        return Ok(());
    }

    if registry.is_empty() {
        println!("No models registered.");
        return Ok(());
    }

    let names = registry.list_models();
    let width = names.iter().map(|n| n.len()).max().unwrap_or(0);
    println!("{:<width$}  TYPE       TOOLS  MEDIA", "MODEL");
    for name in &names {
        if let Some(model) = registry.get(name) {
            println!(
                "{:<width$}  {:<9}  {:<5}  {}",
                name,
                model.model_type.as_str(),
                yes_no(model.info.supports.tools),
                yes_no(model.info.supports.media)
            );
        }
    }
    println!(
        "\n{} of {} configured model(s) registered",
        registry.len(),
        config.bedrock.models.len()
    );
    Ok(())
}
