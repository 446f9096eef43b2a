//! Result-contract boundary for the AI completion payload
//!
//! The completion service is instructed to return ONLY a JSON object in the
//! bilingual `_en`/`_ms` shape. Models drift, so everything here is lenient:
//! the payload either parses into a coerced, contract-conforming
//! [`AnalysisResult`] or is reported as malformed, in which case the caller
//! takes the same fallback path it takes for a network failure.

use crate::types::{AnalysisResult, IngredientFinding, Locale, LocalizedText, SafetyTier};
use serde::Deserialize;

/// Outcome of parsing a completion payload
#[derive(Debug, Clone)]
pub enum ParsedAnalysis {
    /// Payload parsed; tiers and text fields have been coerced into contract shape
    Valid(AnalysisResult),
    /// Payload was not usable (not JSON, or missing the ingredients array)
    Malformed(String),
}

impl ParsedAnalysis {
    /// Return the result, if the payload was valid
    pub fn into_result(self) -> Option<AnalysisResult> {
        match self {
            Self::Valid(result) => Some(result),
            Self::Malformed(_) => None,
        }
    }
}

/// Parse and coerce a completion message body into an [`AnalysisResult`].
///
/// Per-ingredient text is resolved to `locale`; the verdict narrative keeps
/// both languages. Coercion rules:
/// - tier labels outside {SAFE, CAUTION, AVOID} become `Caution`
/// - missing text fields become empty strings
/// - the health score is clamped to 0..=100
/// - `overall_level` is recomputed from the findings whenever findings are
///   present, so the worst-case invariant holds even against an
///   inconsistent response
pub fn parse_completion(content: &str, locale: Locale) -> ParsedAnalysis {
    let wire: WireAnalysis = match serde_json::from_str(content) {
        Ok(wire) => wire,
        Err(e) => return ParsedAnalysis::Malformed(format!("invalid JSON: {e}")),
    };

    let verdict = wire.verdict();

    let Some(wire_ingredients) = wire.ingredients else {
        return ParsedAnalysis::Malformed("missing ingredients array".to_string());
    };

    let ingredients: Vec<IngredientFinding> = wire_ingredients
        .into_iter()
        .map(|w| w.coerce(locale))
        .collect();

    let claimed = wire
        .overall_level
        .as_deref()
        .and_then(SafetyTier::from_wire)
        .unwrap_or(SafetyTier::Caution);
    let overall_level =
        SafetyTier::aggregate(ingredients.iter().map(|f| f.level)).unwrap_or(claimed);

    let summary = wire.summary.unwrap_or_else(|| {
        verdict
            .as_ref()
            .map(|v| v.description.get(locale).to_string())
            .unwrap_or_default()
    });

    ParsedAnalysis::Valid(AnalysisResult {
        overall_level,
        health_score: wire.health_score.map(|s| s.clamp(0, 100) as u8),
        verdict,
        summary,
        ingredients,
    })
}

// =============================================================================
// Wire structures
// =============================================================================

#[derive(Debug, Deserialize)]
struct WireAnalysis {
    #[serde(rename = "overallLevel")]
    overall_level: Option<String>,
    health_score: Option<i64>,
    summary: Option<String>,
    verdict_title_en: Option<String>,
    verdict_title_ms: Option<String>,
    verdict_description_en: Option<String>,
    verdict_description_ms: Option<String>,
    #[serde(default)]
    key_ingredients: Vec<String>,
    ingredients: Option<Vec<WireIngredient>>,
}

impl WireAnalysis {
    /// Build the bilingual narrative, if the payload carried any of it
    fn verdict(&self) -> Option<crate::types::VerdictNarrative> {
        if self.verdict_title_en.is_none()
            && self.verdict_title_ms.is_none()
            && self.verdict_description_en.is_none()
            && self.verdict_description_ms.is_none()
        {
            return None;
        }

        Some(crate::types::VerdictNarrative {
            title: LocalizedText::new(
                self.verdict_title_en.clone().unwrap_or_default(),
                self.verdict_title_ms.clone().unwrap_or_default(),
            ),
            description: LocalizedText::new(
                self.verdict_description_en.clone().unwrap_or_default(),
                self.verdict_description_ms.clone().unwrap_or_default(),
            ),
            hero_ingredients: self.key_ingredients.clone(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct WireIngredient {
    name: Option<String>,
    level: Option<String>,
    // Bilingual-suffixed fields, plus the flat spellings older prompts used.
    function: Option<String>,
    function_en: Option<String>,
    function_ms: Option<String>,
    explanation: Option<String>,
    explanation_en: Option<String>,
    explanation_ms: Option<String>,
    #[serde(rename = "suitableFor")]
    suitable_for: Option<Vec<String>>,
    #[serde(rename = "suitableFor_en")]
    suitable_for_en: Option<Vec<String>>,
    #[serde(rename = "suitableFor_ms")]
    suitable_for_ms: Option<Vec<String>>,
    #[serde(rename = "avoidIf")]
    avoid_if: Option<Vec<String>>,
    #[serde(rename = "avoidIf_en")]
    avoid_if_en: Option<Vec<String>>,
    #[serde(rename = "avoidIf_ms")]
    avoid_if_ms: Option<Vec<String>>,
}

impl WireIngredient {
    fn coerce(self, locale: Locale) -> IngredientFinding {
        let pick = |en: Option<String>, ms: Option<String>, flat: Option<String>| match locale {
            Locale::En => en.or(flat).unwrap_or_default(),
            Locale::Ms => ms.or(flat).unwrap_or_default(),
        };
        let pick_list =
            |en: Option<Vec<String>>, ms: Option<Vec<String>>, flat: Option<Vec<String>>| {
                match locale {
                    Locale::En => en.or(flat).unwrap_or_default(),
                    Locale::Ms => ms.or(flat).unwrap_or_default(),
                }
            };

        IngredientFinding {
            name: self.name.unwrap_or_default(),
            level: self
                .level
                .as_deref()
                .and_then(SafetyTier::from_wire)
                .unwrap_or(SafetyTier::Caution),
            function: pick(self.function_en, self.function_ms, self.function),
            explanation: pick(self.explanation_en, self.explanation_ms, self.explanation),
            suitable_for: pick_list(self.suitable_for_en, self.suitable_for_ms, self.suitable_for),
            avoid_if: pick_list(self.avoid_if_en, self.avoid_if_ms, self.avoid_if),
        }
    }
}
