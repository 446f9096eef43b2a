//! Core types for skinsafe analysis results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Safety classification tier for an ingredient or a whole product.
///
/// Totally ordered by risk: `Safe < Caution < Avoid`. The ordering exists
/// for worst-case aggregation and must not be treated as a numeric score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SafetyTier {
    /// Generally safe for most skin types
    Safe,
    /// May cause irritation depending on skin type or concentration
    #[default]
    Caution,
    /// Known irritant or harmful ingredient
    Avoid,
}

impl SafetyTier {
    /// Reduce a sequence of tiers to the overall (worst-case) tier.
    ///
    /// Returns `None` for an empty sequence; the caller decides the
    /// empty-input policy.
    pub fn aggregate(tiers: impl IntoIterator<Item = SafetyTier>) -> Option<SafetyTier> {
        tiers.into_iter().max()
    }

    /// Parse a wire-format tier label, case-insensitively.
    ///
    /// Returns `None` for anything outside {SAFE, CAUTION, AVOID}; the
    /// contract boundary coerces that to [`SafetyTier::Caution`].
    pub fn from_wire(label: &str) -> Option<SafetyTier> {
        match label.trim().to_ascii_uppercase().as_str() {
            "SAFE" => Some(Self::Safe),
            "CAUTION" => Some(Self::Caution),
            "AVOID" => Some(Self::Avoid),
            _ => None,
        }
    }

    /// Wire-format label for this tier
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safe => "SAFE",
            Self::Caution => "CAUTION",
            Self::Avoid => "AVOID",
        }
    }
}

impl std::fmt::Display for SafetyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Supported result locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Bahasa Melayu
    Ms,
}

impl std::str::FromStr for Locale {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ms" => Ok(Self::Ms),
            other => Err(crate::Error::config(format!("unknown locale: {other}"))),
        }
    }
}

/// A text field carried in both supported languages.
///
/// Used where the presentation layer switches language after the result is
/// produced (the AI verdict narrative); per-ingredient text is resolved to
/// the request locale at classification time instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    /// English text
    pub en: String,
    /// Bahasa Melayu text
    pub ms: String,
}

impl LocalizedText {
    /// Create a localized text pair
    pub fn new(en: impl Into<String>, ms: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ms: ms.into(),
        }
    }

    /// Get the text for the given locale
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Ms => &self.ms,
        }
    }
}

/// Classification result for a single ingredient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientFinding {
    /// Ingredient name as typed by the user, or echoed by the AI
    pub name: String,

    /// Safety tier for this ingredient
    pub level: SafetyTier,

    /// What the ingredient does, in the request locale
    pub function: String,

    /// Why it earned its tier, in the request locale
    pub explanation: String,

    /// Skin types or conditions this ingredient suits
    pub suitable_for: Vec<String>,

    /// Conditions that conflict with this ingredient
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub avoid_if: Vec<String>,
}

/// Narrative verdict produced by the AI path.
///
/// Bilingual by design: the result screen can toggle language without
/// re-running the analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictNarrative {
    /// Short verdict headline
    pub title: LocalizedText,

    /// 2-3 sentence justification naming the hero ingredients
    pub description: LocalizedText,

    /// Ingredients the narrative calls out as driving the verdict
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hero_ingredients: Vec<String>,
}

/// Aggregate analysis output shared by both classification paths.
///
/// Invariant: when `ingredients` is non-empty, `overall_level` equals the
/// worst tier among the findings. Findings keep input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Overall safety tier, derived by worst-case aggregation
    pub overall_level: SafetyTier,

    /// Health score 0-100, AI path only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health_score: Option<u8>,

    /// Bilingual narrative verdict, AI path only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verdict: Option<VerdictNarrative>,

    /// One-line summary in the request locale
    pub summary: String,

    /// Per-ingredient findings, in input order
    pub ingredients: Vec<IngredientFinding>,
}

impl AnalysisResult {
    /// Check the overall-tier invariant against the contained findings
    pub fn is_consistent(&self) -> bool {
        match SafetyTier::aggregate(self.ingredients.iter().map(|f| f.level)) {
            Some(worst) => self.overall_level == worst,
            None => true,
        }
    }
}

/// A saved analysis, as persisted to the history collection.
///
/// Immutable once written; `overall_level` duplicates the snapshot's tier
/// for fast listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    /// Unique record id
    pub id: Uuid,

    /// Owning user identifier
    pub user_id: String,

    /// The text the user asked about
    pub input_text: String,

    /// Overall tier, duplicated from the snapshot
    pub overall_level: SafetyTier,

    /// Full result snapshot
    pub result: AnalysisResult,

    /// When the user saved this record
    pub saved_at: DateTime<Utc>,
}

impl HistoryRecord {
    /// Create a new history record for a user's saved result
    pub fn new(
        user_id: impl Into<String>,
        input_text: impl Into<String>,
        result: AnalysisResult,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            input_text: input_text.into(),
            overall_level: result.overall_level,
            result,
            saved_at: Utc::now(),
        }
    }
}
