//! skinsafe Rules
//!
//! Offline classification path: a curated ingredient knowledge base and a
//! deterministic classifier with worst-case verdict aggregation. No network
//! calls, no failure modes — unknown ingredients degrade to a canned
//! CAUTION finding.

pub mod classifier;
pub mod knowledge;

pub use classifier::RuleClassifier;
pub use knowledge::{KnowledgeBase, KnowledgeBaseEntry};
