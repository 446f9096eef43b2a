//! AI classifier tests against a configurable mock backend

use async_trait::async_trait;
use skinsafe_ai::{AiClassifier, ChatRequest, CompletionBackend};
use skinsafe_core::{Error, Locale, Result, SafetyTier};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// A configurable mock completion backend
struct MockBackend {
    response: Result<String>,
    call_count: AtomicU32,
}

impl MockBackend {
    /// Backend that replies with the given completion content
    fn with_response(content: &str) -> Self {
        Self {
            response: Ok(content.to_string()),
            call_count: AtomicU32::new(0),
        }
    }

    /// Backend that fails every request
    fn with_error(message: &str) -> Self {
        Self {
            response: Err(Error::backend(message)),
            call_count: AtomicU32::new(0),
        }
    }

    fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl CompletionBackend for MockBackend {
    async fn complete(&self, _request: &ChatRequest) -> Result<String> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        match &self.response {
            Ok(content) => Ok(content.clone()),
            Err(_) => Err(Error::backend("simulated network failure")),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

fn classifier_over(backend: MockBackend) -> (AiClassifier, Arc<MockBackend>) {
    let backend = Arc::new(backend);
    (
        AiClassifier::new(backend.clone(), "test-model"),
        backend,
    )
}

#[tokio::test]
async fn network_failure_degrades_to_the_fixed_fallback() {
    let (classifier, backend) = classifier_over(MockBackend::with_error("connection refused"));

    let result = classifier.classify("Niacinamide, Fragrance", Locale::En).await;

    assert_eq!(result.overall_level, SafetyTier::Caution);
    assert_eq!(result.health_score, Some(50));
    assert_eq!(result.ingredients.len(), 1);
    assert_eq!(result.ingredients[0].name, "Niacinamide, Fragrance");
    assert_eq!(result.ingredients[0].level, SafetyTier::Caution);
    assert_eq!(backend.call_count(), 1);
}

#[tokio::test]
async fn fallback_is_deterministic_across_invocations() {
    let (classifier, _) = classifier_over(MockBackend::with_error("boom"));

    let first = classifier.classify("Retinol", Locale::Ms).await;
    let second = classifier.classify("Retinol", Locale::Ms).await;

    assert_eq!(first, second);
    assert!(first.summary.contains("semak sambungan"));
}

#[tokio::test]
async fn non_json_completion_degrades_to_fallback() {
    let (classifier, _) =
        classifier_over(MockBackend::with_response("Sorry, I cannot answer that."));

    let result = classifier.classify("Sulfates", Locale::En).await;

    assert_eq!(result.overall_level, SafetyTier::Caution);
    assert_eq!(result.ingredients[0].name, "Sulfates");
}

#[tokio::test]
async fn completion_without_ingredients_array_degrades_to_fallback() {
    let (classifier, _) =
        classifier_over(MockBackend::with_response(r#"{"overallLevel": "SAFE"}"#));

    let result = classifier.classify("Sulfates", Locale::En).await;

    assert_eq!(result.overall_level, SafetyTier::Caution);
    assert_eq!(result.health_score, Some(50));
}

#[tokio::test]
async fn valid_completion_is_coerced_into_the_contract() {
    let payload = r#"{
        "overallLevel": "AVOID",
        "health_score": 32,
        "verdict_title_en": "Harsh on sensitive skin",
        "verdict_title_ms": "Keras pada kulit sensitif",
        "verdict_description_en": "Fragrance and Sulfates drive this verdict.",
        "verdict_description_ms": "Pewangi dan Sulfat memacu keputusan ini.",
        "key_ingredients": ["Fragrance", "Sulfates"],
        "ingredients": [
            {
                "name": "Fragrance",
                "level": "AVOID",
                "function_en": "Adds scent",
                "function_ms": "Menambah wangian",
                "explanation_en": "Common irritant.",
                "explanation_ms": "Punca biasa iritasi.",
                "suitableFor_en": ["Normal skin"],
                "suitableFor_ms": ["Kulit normal"]
            },
            {
                "name": "Sulfates",
                "level": "UNSAFE",
                "function_en": "Foaming agent",
                "function_ms": "Agen pembuih",
                "explanation_en": "Strips natural oils.",
                "explanation_ms": "Menghilangkan minyak semula jadi.",
                "suitableFor_en": ["Very oily skin"],
                "suitableFor_ms": ["Kulit sangat berminyak"]
            }
        ]
    }"#;
    let (classifier, _) = classifier_over(MockBackend::with_response(payload));

    let result = classifier.classify("Fragrance, Sulfates", Locale::Ms).await;

    // Invalid tier label coerced, overall recomputed from findings.
    assert_eq!(result.ingredients[1].level, SafetyTier::Caution);
    assert_eq!(result.overall_level, SafetyTier::Avoid);
    assert!(result.is_consistent());

    assert_eq!(result.health_score, Some(32));
    assert_eq!(result.ingredients[0].function, "Menambah wangian");

    let verdict = result.verdict.expect("verdict present");
    assert_eq!(verdict.hero_ingredients, vec!["Fragrance", "Sulfates"]);
    assert_eq!(verdict.title.get(Locale::En), "Harsh on sensitive skin");
}
