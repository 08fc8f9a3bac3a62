//! LLM primitives for the pipewright workspace.
//!
//! This crate provides the backend abstraction used by the agent facade:
//!
//! - **Backend**: the `LlmBackend` trait plus request/response types
//! - **OpenAI**: a concrete backend for OpenAI-compatible chat APIs
//! - **Prompt**: a template type with `{{variable}}` rendering

pub mod backend;
pub mod error;
pub mod openai;
pub mod prompt;

pub use backend::{LlmBackend, LlmBackendConfig, LlmProvider, LlmRequest, LlmResponse, TokenUsage};
pub use error::LlmError;
pub use openai::OpenAiBackend;
pub use prompt::PromptTemplate;
