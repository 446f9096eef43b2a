//! Chat-completion request contract
//!
//! The request instructs the model to return ONLY a JSON object in the
//! bilingual `_en`/`_ms` shape that `skinsafe-core`'s contract boundary
//! parses. `response_format: json_object` and a low temperature keep the
//! output close to the schema.

use serde::{Deserialize, Serialize};

/// A chat message in the completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender (system, user)
    pub role: String,

    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    /// Create a new chat message
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }
}

/// Structured-output mode request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseFormat {
    /// Format type, always `json_object`
    #[serde(rename = "type")]
    pub format_type: String,
}

/// OpenAI-style chat completion request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Model identifier
    pub model: String,

    /// Conversation messages
    pub messages: Vec<ChatMessage>,

    /// Sampling temperature
    pub temperature: f32,

    /// Structured-output mode
    pub response_format: ResponseFormat,
}

/// Build the analysis request for the given ingredient text
pub fn build_request(ingredient_text: &str, model: &str) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage::system(
                "You are a skincare and dermatology expert. Return ONLY valid JSON.",
            ),
            ChatMessage::user(user_prompt(ingredient_text)),
        ],
        temperature: 0.1,
        response_format: ResponseFormat {
            format_type: "json_object".to_string(),
        },
    }
}

fn user_prompt(ingredient_text: &str) -> String {
    format!(
        r#"Analyze: "{ingredient_text}".
Return JSON structure:
{{
  "overallLevel": "SAFE" | "CAUTION" | "AVOID",
  "health_score": integer 0-100,
  "verdict_title_en": "String",
  "verdict_title_ms": "String",
  "verdict_description_en": "2-3 sentences that name the hero ingredients and justify the verdict",
  "verdict_description_ms": "String",
  "key_ingredients": ["String"],
  "ingredients": [
    {{
      "name": "String",
      "level": "SAFE" | "CAUTION" | "AVOID",
      "function_en": "String",
      "function_ms": "String",
      "explanation_en": "String",
      "explanation_ms": "String",
      "suitableFor_en": ["String"],
      "suitableFor_ms": ["String"]
    }}
  ]
}}"#
    )
}

// =============================================================================
// Completion response envelope
// =============================================================================

/// Top-level chat completion response
#[derive(Debug, Deserialize)]
pub struct CompletionEnvelope {
    /// API-level error, present instead of choices on failure
    #[serde(default)]
    pub error: Option<ApiError>,

    /// Completion choices
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
}

impl CompletionEnvelope {
    /// Extract the first non-empty completion content, if any
    pub fn content(&self) -> Option<&str> {
        self.choices
            .first()
            .map(|c| c.message.content.as_str())
            .filter(|content| !content.trim().is_empty())
    }
}

/// An API error body
#[derive(Debug, Deserialize)]
pub struct ApiError {
    /// Human-readable error message
    pub message: String,
}

/// One completion choice
#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    /// The completion message
    pub message: CompletionMessage,
}

/// The message inside a completion choice
#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    /// Message content: itself a JSON string matching the analysis contract
    #[serde(default)]
    pub content: String,
}
