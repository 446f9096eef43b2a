//! Curated ingredient knowledge base
//!
//! A small static table mapping known ingredient names to their safety
//! profile. Lookup is exact case-insensitive equality — no fuzzy matching,
//! no substrings, no stemming. Unknown names are a normal outcome the
//! classifier handles, not an error.

use skinsafe_core::{LocalizedText, SafetyTier};
use std::collections::HashMap;

/// Static safety profile for one known ingredient
#[derive(Debug, Clone)]
pub struct KnowledgeBaseEntry {
    /// Canonical ingredient name
    pub name: String,

    /// Safety tier
    pub level: SafetyTier,

    /// What the ingredient does
    pub function: LocalizedText,

    /// Why it earned its tier
    pub explanation: LocalizedText,

    /// Skin types or conditions this ingredient suits
    pub suitable_for: Vec<String>,

    /// Conditions that conflict with this ingredient
    pub avoid_if: Vec<String>,
}

/// Case-insensitive ingredient name -> profile table.
///
/// Built once at startup and read-only afterwards, so it is safe to share
/// across concurrent classification calls without synchronization.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: HashMap<String, KnowledgeBaseEntry>,
}

impl KnowledgeBase {
    /// Create an empty knowledge base
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// The built-in curated table
    pub fn builtin() -> Self {
        let mut kb = Self::new();

        kb.insert(KnowledgeBaseEntry {
            name: "Niacinamide".to_string(),
            level: SafetyTier::Safe,
            function: LocalizedText::new(
                "Strengthens skin barrier and reduces oil",
                "Menguatkan penghalang kulit dan mengurangkan minyak",
            ),
            explanation: LocalizedText::new(
                "Niacinamide helps improve the skin barrier, reduces redness, and controls \
                 excess oil with a very low risk of irritation.",
                "Niacinamide membantu memperbaiki penghalang kulit, mengurangkan kemerahan, \
                 dan mengawal minyak berlebihan dengan risiko iritasi yang sangat rendah.",
            ),
            suitable_for: vec![
                "Oily Skin".to_string(),
                "Acne-prone Skin".to_string(),
                "Sensitive Skin".to_string(),
            ],
            avoid_if: vec!["Very high concentration on damaged skin".to_string()],
        });

        kb.insert(KnowledgeBaseEntry {
            name: "Fragrance".to_string(),
            level: SafetyTier::Avoid,
            function: LocalizedText::new(
                "Adds scent to cosmetic products",
                "Menambah wangian pada produk",
            ),
            explanation: LocalizedText::new(
                "Fragrance is a common cause of irritation and allergic reactions, especially \
                 for sensitive or compromised skin.",
                "Pewangi adalah punca biasa iritasi dan reaksi alahan, terutamanya untuk kulit \
                 sensitif atau kulit yang bermasalah.",
            ),
            suitable_for: vec!["Normal skin (low concentration only)".to_string()],
            avoid_if: vec![
                "Sensitive Skin".to_string(),
                "Eczema".to_string(),
                "Rosacea".to_string(),
            ],
        });

        kb.insert(KnowledgeBaseEntry {
            name: "Retinol".to_string(),
            level: SafetyTier::Caution,
            function: LocalizedText::new(
                "Boosts cell turnover and reduces signs of aging",
                "Meningkatkan pembaharuan sel dan kurangkan penuaan",
            ),
            explanation: LocalizedText::new(
                "Retinol is a powerful vitamin A derivative that helps improve acne, fine \
                 lines, and skin texture. However, it can cause dryness, peeling, and \
                 irritation, especially for beginners.",
                "Retinol adalah derivatif vitamin A yang kuat membantu jerawat dan garis \
                 halus. Namun, ia boleh menyebabkan kekeringan, pengelupasan, dan iritasi, \
                 terutamanya untuk pengguna baru.",
            ),
            suitable_for: vec![
                "Oily Skin".to_string(),
                "Acne-prone Skin".to_string(),
                "Aging Skin".to_string(),
            ],
            avoid_if: vec![
                "Sensitive Skin".to_string(),
                "Pregnant or breastfeeding users".to_string(),
                "Compromised skin barrier".to_string(),
            ],
        });

        kb.insert(KnowledgeBaseEntry {
            name: "Sulfates".to_string(),
            level: SafetyTier::Avoid,
            function: LocalizedText::new(
                "Cleansing and foaming agent",
                "Agen pembersih dan pembuih",
            ),
            explanation: LocalizedText::new(
                "Sulfates can strip the skin of its natural oils, leading to dryness, \
                 irritation, and barrier damage when used frequently.",
                "Sulfat boleh menghilangkan minyak semula jadi kulit, menyebabkan kekeringan, \
                 iritasi, dan kerosakan penghalang kulit jika digunakan terlalu kerap.",
            ),
            suitable_for: vec!["Very oily skin (occasional use only)".to_string()],
            avoid_if: vec![
                "Dry Skin".to_string(),
                "Sensitive Skin".to_string(),
                "Eczema".to_string(),
                "Damaged skin barrier".to_string(),
            ],
        });

        kb
    }

    /// Add an entry, builder-style. Later entries with the same name win.
    pub fn with_entry(mut self, entry: KnowledgeBaseEntry) -> Self {
        self.insert(entry);
        self
    }

    /// Look up an ingredient by name, case-insensitively.
    ///
    /// "Not found" is a normal outcome, not an error.
    pub fn lookup(&self, name: &str) -> Option<&KnowledgeBaseEntry> {
        self.entries.get(&name.trim().to_lowercase())
    }

    /// Number of known ingredients
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, entry: KnowledgeBaseEntry) {
        self.entries.insert(entry.name.to_lowercase(), entry);
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}
