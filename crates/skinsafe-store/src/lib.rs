//! skinsafe Store
//!
//! External-collaborator surfaces the classification engine writes to:
//! analysis history persistence (in-memory and append-only JSON-lines
//! stores) and a fire-and-forget push notification trait. The engine never
//! depends on this crate; the caller owns persistence.

pub mod history;
pub mod notify;

pub use history::{save_history, HistoryStore, JsonlHistoryStore, MemoryHistoryStore};
pub use notify::{LogNotifier, PushNotifier};
