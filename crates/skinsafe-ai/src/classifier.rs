//! AI-augmented classifier with a terminal fallback
//!
//! The public contract has no error channel: every invocation resolves to a
//! valid `AnalysisResult`. Network failures, API errors, empty completions,
//! and malformed payloads all degrade to the same fixed fallback result,
//! distinguishable only by its canned narrative.

use crate::backend::CompletionBackend;
use crate::prompt::build_request;
use skinsafe_core::{
    parse_completion, AnalysisResult, IngredientFinding, Locale, LocalizedText, ParsedAnalysis,
    SafetyTier, VerdictNarrative,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Health score reported by the fallback result
const FALLBACK_HEALTH_SCORE: u8 = 50;

/// Classifier that delegates the analysis to a completion backend
#[derive(Clone)]
pub struct AiClassifier {
    backend: Arc<dyn CompletionBackend>,
    model: String,
}

impl AiClassifier {
    /// Create a classifier over the given backend
    pub fn new(backend: Arc<dyn CompletionBackend>, model: impl Into<String>) -> Self {
        Self {
            backend,
            model: model.into(),
        }
    }

    /// Classify free-text ingredient input via the completion service.
    ///
    /// Suspends on network I/O; independent calls share no mutable state and
    /// may run concurrently. Never fails: degraded responses surface as the
    /// fallback result, not as an error.
    pub async fn classify(&self, ingredient_text: &str, locale: Locale) -> AnalysisResult {
        metrics::counter!("skinsafe_ai_requests_total").increment(1);

        let request = build_request(ingredient_text, &self.model);
        let content = match self.backend.complete(&request).await {
            Ok(content) => content,
            Err(e) => {
                warn!(backend = self.backend.name(), error = %e, "completion failed, using fallback");
                metrics::counter!("skinsafe_ai_fallbacks_total", "reason" => "backend_error")
                    .increment(1);
                return fallback_result(ingredient_text, locale);
            }
        };

        match parse_completion(&content, locale) {
            ParsedAnalysis::Valid(result) => {
                info!(
                    overall = %result.overall_level,
                    findings = result.ingredients.len(),
                    "AI analysis complete"
                );
                result
            }
            ParsedAnalysis::Malformed(reason) => {
                warn!(%reason, "malformed completion payload, using fallback");
                metrics::counter!("skinsafe_ai_fallbacks_total", "reason" => "malformed")
                    .increment(1);
                fallback_result(ingredient_text, locale)
            }
        }
    }
}

/// The fixed degraded result returned when the AI path cannot complete.
///
/// Deterministic: overall CAUTION, health score 50, bilingual "analysis
/// failed" narrative, and a single CAUTION finding echoing the input text.
pub fn fallback_result(ingredient_text: &str, locale: Locale) -> AnalysisResult {
    let name = if ingredient_text.trim().is_empty() {
        "Ingredient".to_string()
    } else {
        ingredient_text.to_string()
    };

    let description = LocalizedText::new(
        "We could not analyze these ingredients right now. Check your connection and try again.",
        "Kami tidak dapat menganalisis bahan-bahan ini sekarang. Sila semak sambungan anda dan \
         cuba lagi.",
    );
    let summary = description.get(locale).to_string();

    let (function, explanation) = match locale {
        Locale::En => (
            "Unknown function",
            "This ingredient could not be analyzed. Patch testing is recommended before use.",
        ),
        Locale::Ms => (
            "Fungsi tidak diketahui",
            "Bahan ini tidak dapat dianalisis. Ujian tampalan (patch test) disyorkan sebelum \
             penggunaan.",
        ),
    };

    AnalysisResult {
        overall_level: SafetyTier::Caution,
        health_score: Some(FALLBACK_HEALTH_SCORE),
        verdict: Some(VerdictNarrative {
            title: LocalizedText::new("Analysis Failed", "Analisis Gagal"),
            description,
            hero_ingredients: vec![],
        }),
        summary,
        ingredients: vec![IngredientFinding {
            name,
            level: SafetyTier::Caution,
            function: function.to_string(),
            explanation: explanation.to_string(),
            suitable_for: vec!["Unknown".to_string()],
            avoid_if: vec!["Sensitive skin".to_string()],
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_is_fixed_and_consistent() {
        let result = fallback_result("Niacinamide, Fragrance", Locale::En);

        assert_eq!(result.overall_level, SafetyTier::Caution);
        assert_eq!(result.health_score, Some(50));
        assert_eq!(result.ingredients.len(), 1);
        assert_eq!(result.ingredients[0].name, "Niacinamide, Fragrance");
        assert!(result.is_consistent());

        let verdict = result.verdict.expect("fallback carries a verdict");
        assert_eq!(verdict.title.get(Locale::Ms), "Analisis Gagal");
    }

    #[test]
    fn fallback_names_a_placeholder_for_empty_input() {
        let result = fallback_result("   ", Locale::En);
        assert_eq!(result.ingredients[0].name, "Ingredient");
    }

    #[test]
    fn fallback_summary_follows_locale() {
        let en = fallback_result("Retinol", Locale::En);
        let ms = fallback_result("Retinol", Locale::Ms);
        assert!(en.summary.contains("Check your connection"));
        assert!(ms.summary.contains("semak sambungan"));
        assert_eq!(en.overall_level, ms.overall_level);
    }
}
