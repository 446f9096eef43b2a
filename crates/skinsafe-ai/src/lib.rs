//! skinsafe AI
//!
//! AI-augmented classification path: builds a schema-pinned chat-completion
//! request, parses the structured JSON reply through the core contract
//! boundary, and degrades to a deterministic fallback result on any failure.
//! Callers always receive a valid `AnalysisResult` — this path has no error
//! channel.

pub mod backend;
pub mod classifier;
pub mod config;
pub mod prompt;

pub use backend::{CompletionBackend, GroqBackend};
pub use classifier::{fallback_result, AiClassifier};
pub use config::{AiConfig, API_KEY_ENV};
pub use prompt::{build_request, ChatMessage, ChatRequest};
