//! Deterministic rule-based ingredient classifier
//!
//! Fully offline: tokenizes the raw input, resolves each token against the
//! knowledge base, and aggregates a worst-case verdict. Unknown ingredients
//! are recovered locally with a canned CAUTION finding, never surfaced as a
//! failure.

use crate::knowledge::KnowledgeBase;
use skinsafe_core::{AnalysisResult, IngredientFinding, Locale, SafetyTier};
use tracing::debug;

/// Synchronous classifier over the static knowledge base
#[derive(Debug, Clone, Default)]
pub struct RuleClassifier {
    kb: KnowledgeBase,
}

impl RuleClassifier {
    /// Create a classifier over the built-in table
    pub fn new() -> Self {
        Self {
            kb: KnowledgeBase::builtin(),
        }
    }

    /// Create a classifier over a custom knowledge base
    pub fn with_knowledge_base(kb: KnowledgeBase) -> Self {
        Self { kb }
    }

    /// The table this classifier resolves against
    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Classify a comma-separated ingredient list.
    ///
    /// Pure function over static data: identical input and locale always
    /// yield identical output. Empty or whitespace-only input yields zero
    /// findings and an overall `Safe` verdict.
    pub fn classify(&self, raw_input: &str, locale: Locale) -> AnalysisResult {
        let tokens: Vec<&str> = raw_input
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();

        debug!(token_count = tokens.len(), "rule-based classification");

        let ingredients: Vec<IngredientFinding> = tokens
            .into_iter()
            .map(|token| self.finding_for(token, locale))
            .collect();

        let overall_level = SafetyTier::aggregate(ingredients.iter().map(|f| f.level))
            .unwrap_or(SafetyTier::Safe);

        AnalysisResult {
            overall_level,
            health_score: None,
            verdict: None,
            summary: summary_for(overall_level, locale).to_string(),
            ingredients,
        }
    }

    fn finding_for(&self, token: &str, locale: Locale) -> IngredientFinding {
        match self.kb.lookup(token) {
            Some(entry) => IngredientFinding {
                name: entry.name.clone(),
                level: entry.level,
                function: entry.function.get(locale).to_string(),
                explanation: entry.explanation.get(locale).to_string(),
                suitable_for: entry.suitable_for.clone(),
                avoid_if: entry.avoid_if.clone(),
            },
            None => unknown_finding(token, locale),
        }
    }
}

/// Canned finding for an ingredient the knowledge base does not cover
fn unknown_finding(name: &str, locale: Locale) -> IngredientFinding {
    let (function, explanation) = match locale {
        Locale::En => (
            "Unknown function",
            "There is limited scientific data available for this ingredient. Patch testing \
             is recommended before use.",
        ),
        Locale::Ms => (
            "Fungsi tidak diketahui",
            "Data saintifik terhad untuk bahan ini. Ujian tampalan (patch test) disyorkan \
             sebelum penggunaan.",
        ),
    };

    IngredientFinding {
        name: name.to_string(),
        level: SafetyTier::Caution,
        function: function.to_string(),
        explanation: explanation.to_string(),
        suitable_for: vec!["Unknown".to_string()],
        avoid_if: vec!["Sensitive skin".to_string()],
    }
}

/// Fixed 3-way summary sentence per overall tier
fn summary_for(level: SafetyTier, locale: Locale) -> &'static str {
    match (locale, level) {
        (Locale::En, SafetyTier::Safe) => {
            "These ingredients are generally safe for most skin types when used appropriately."
        }
        (Locale::En, SafetyTier::Caution) => {
            "Some ingredients may cause irritation depending on skin type or concentration."
        }
        (Locale::En, SafetyTier::Avoid) => {
            "One or more ingredients may irritate or harm sensitive skin and should be avoided."
        }
        (Locale::Ms, SafetyTier::Safe) => {
            "Bahan-bahan ini secara umumnya selamat untuk kebanyakan jenis kulit apabila \
             digunakan dengan betul."
        }
        (Locale::Ms, SafetyTier::Caution) => {
            "Sesetengah bahan mungkin menyebabkan iritasi bergantung pada jenis kulit atau \
             kepekatan."
        }
        (Locale::Ms, SafetyTier::Avoid) => {
            "Satu atau lebih bahan mungkin merengsakan atau membahayakan kulit sensitif dan \
             harus dielakkan."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_list_is_dominated_by_worst_tier() {
        let classifier = RuleClassifier::new();
        let result = classifier.classify("Niacinamide, Fragrance", Locale::En);

        assert_eq!(result.overall_level, SafetyTier::Avoid);
        assert_eq!(result.ingredients.len(), 2);
        assert_eq!(result.ingredients[0].name, "Niacinamide");

        let fragrance = &result.ingredients[1];
        assert_eq!(fragrance.name, "Fragrance");
        assert!(fragrance.avoid_if.contains(&"Sensitive Skin".to_string()));
        assert!(result.is_consistent());
    }

    #[test]
    fn single_safe_ingredient_in_malay() {
        let classifier = RuleClassifier::new();
        let result = classifier.classify("Niacinamide", Locale::Ms);

        assert_eq!(result.overall_level, SafetyTier::Safe);
        assert_eq!(result.ingredients.len(), 1);
        assert_eq!(
            result.ingredients[0].function,
            "Menguatkan penghalang kulit dan mengurangkan minyak"
        );
    }

    #[test]
    fn unknown_ingredient_falls_back_to_caution() {
        let classifier = RuleClassifier::new();
        let result = classifier.classify("Unobtainium", Locale::En);

        assert_eq!(result.overall_level, SafetyTier::Caution);
        assert_eq!(result.ingredients.len(), 1);

        let finding = &result.ingredients[0];
        assert_eq!(finding.level, SafetyTier::Caution);
        assert!(finding.explanation.contains("limited scientific data"));
        assert_eq!(finding.suitable_for, vec!["Unknown"]);
        assert_eq!(finding.avoid_if, vec!["Sensitive skin"]);
    }

    #[test]
    fn empty_input_yields_safe_with_no_findings() {
        let classifier = RuleClassifier::new();

        for input in ["", "   ", ",, ,"] {
            let result = classifier.classify(input, Locale::En);
            assert!(result.ingredients.is_empty(), "input: {input:?}");
            assert_eq!(result.overall_level, SafetyTier::Safe);
            assert_eq!(
                result.summary,
                summary_for(SafetyTier::Safe, Locale::En),
                "input: {input:?}"
            );
        }
    }

    #[test]
    fn classification_is_idempotent() {
        let classifier = RuleClassifier::new();
        let first = classifier.classify("Retinol, Sulfates, Unknownium", Locale::Ms);
        let second = classifier.classify("Retinol, Sulfates, Unknownium", Locale::Ms);
        assert_eq!(first, second);
    }

    #[test]
    fn case_variants_resolve_to_the_same_finding() {
        let classifier = RuleClassifier::new();
        let upper = classifier.classify("NIACINAMIDE", Locale::En);
        let lower = classifier.classify("niacinamide", Locale::En);
        assert_eq!(upper.ingredients, lower.ingredients);
    }

    #[test]
    fn locale_changes_text_but_not_tier() {
        let classifier = RuleClassifier::new();
        let en = classifier.classify("Fragrance", Locale::En);
        let ms = classifier.classify("Fragrance", Locale::Ms);

        assert_eq!(en.overall_level, SafetyTier::Avoid);
        assert_eq!(en.ingredients[0].level, ms.ingredients[0].level);
        assert_ne!(en.ingredients[0].function, ms.ingredients[0].function);
        assert_ne!(en.ingredients[0].explanation, ms.ingredients[0].explanation);
    }

    #[test]
    fn findings_keep_input_order() {
        let classifier = RuleClassifier::new();
        let result = classifier.classify("Sulfates, Niacinamide, Retinol", Locale::En);
        let names: Vec<&str> = result.ingredients.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Sulfates", "Niacinamide", "Retinol"]);
    }

    #[test]
    fn tokens_are_trimmed_and_empties_dropped() {
        let classifier = RuleClassifier::new();
        let result = classifier.classify("  retinol ,, fragrance ,", Locale::En);
        assert_eq!(result.ingredients.len(), 2);
        assert_eq!(result.ingredients[0].name, "Retinol");
        assert_eq!(result.ingredients[1].name, "Fragrance");
    }

    #[test]
    fn rule_result_serializes_with_contract_field_names() {
        let classifier = RuleClassifier::new();
        let result = classifier.classify("Niacinamide", Locale::En);
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["overallLevel"], "SAFE");
        assert!(json["ingredients"][0]["suitableFor"].is_array());
        // Rule path never fabricates AI-only fields.
        assert!(json.get("healthScore").is_none());
        assert!(json.get("verdict").is_none());
    }
}
