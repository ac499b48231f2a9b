use mc_domain::capability::{CapabilityRequirements, ModelSupports, ModelType};
use mc_providers::bedrock;
use serde::Serialize;

use super::yes_no;

/// What `modelcaps resolve` reports for one model id.
#[derive(Debug, Serialize)]
pub struct Resolution {
    pub label: String,
    pub model_type: ModelType,
    /// Table key used for the lookup. `None` for image and embedding
    /// models, which are never looked up.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub known: Option<bool>,
    pub supports: ModelSupports,
}

impl Resolution {
    pub fn new(model: &str, model_type: &str) -> Self {
        let model_type = ModelType::from_tag(model_type);
        let info = bedrock::resolve(model, model_type);
        let (canonical, known) = match model_type {
            ModelType::Chat => (
                Some(bedrock::canonical_model_id(model).to_owned()),
                Some(bedrock::is_known_model(model)),
            ),
            ModelType::Image | ModelType::Embedding => (None, None),
        };

        Self {
            label: info.label,
            model_type,
            canonical,
            known,
            supports: info.supports,
        }
    }

    fn render(&self) -> String {
        let mut out = format!("label:     {}\ntype:      {}\n", self.label, self.model_type);
        if let Some(canonical) = &self.canonical {
            out.push_str(&format!("canonical: {canonical}\n"));
        }
        if let Some(known) = self.known {
            out.push_str(&format!("known:     {}\n", yes_no(known)));
        }
        out.push_str(&format!(
            "tools:     {}\nmedia:     {}\n",
            yes_no(self.supports.tools),
            yes_no(self.supports.media)
        ));
        out
    }
}

/// `modelcaps resolve`.
pub fn run(model: &str, model_type: &str, json: bool) -> anyhow::Result<()> {
    let resolution = Resolution::new(model, model_type);
    if json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
    } else {
        print!("{}", resolution.render());
    }
    Ok(())
}

/// `modelcaps check`.
///
/// Returns `false` when the model lacks a required capability; the reason
/// is printed to stderr.
pub fn check(model: &str, model_type: &str, req: CapabilityRequirements) -> bool {
    let info = bedrock::infer_model_capabilities(model, model_type);
    match info.check(&req) {
        Ok(()) => {
            println!("OK {model}");
            true
        }
        Err(e) => {
            eprintln!("{e}");
            false
        }
    }
}
