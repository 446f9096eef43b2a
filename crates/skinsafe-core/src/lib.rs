//! skinsafe Core
//!
//! Core types, error handling, and the result-contract boundary shared by
//! the skinsafe classification paths.
//!
//! This crate provides:
//! - Safety tiers with worst-case aggregation
//! - The canonical `AnalysisResult` shape screens and history storage rely on
//! - Lenient parsing and coercion of AI completion payloads

pub mod contract;
pub mod error;
pub mod types;

pub use contract::{parse_completion, ParsedAnalysis};
pub use error::{Error, Result};
pub use types::{
    AnalysisResult, HistoryRecord, IngredientFinding, Locale, LocalizedText, SafetyTier,
    VerdictNarrative,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::contract::{parse_completion, ParsedAnalysis};
    pub use crate::error::{Error, Result};
    pub use crate::types::{
        AnalysisResult, HistoryRecord, IngredientFinding, Locale, LocalizedText, SafetyTier,
        VerdictNarrative,
    };
}
