pub mod bedrock;
pub mod registry;

// Re-exports for convenience.
pub use bedrock::{infer_model_capabilities, resolve};
pub use registry::{ModelRegistry, RegisteredModel};
