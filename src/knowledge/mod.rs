//! Static knowledge: curated conditions, the disease directory and
//! canned replies.

pub mod conditions;
pub mod directory;
pub mod replies;

pub use directory::disease_directory;

use crate::models::ConditionRecord;

/// Ordered, immutable view over curated condition records.
#[derive(Debug, Clone, Copy)]
pub struct KnowledgeBase {
    records: &'static [ConditionRecord],
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

impl KnowledgeBase {
    /// The bundled curated table.
    pub fn builtin() -> Self {
        Self::new(&conditions::CONDITIONS)
    }

    pub fn new(records: &'static [ConditionRecord]) -> Self {
        Self { records }
    }

    /// First record (table order) whose key is a substring of the query or
    /// vice versa. Blank queries never match.
    pub fn lookup(&self, query: &str) -> Option<&'static ConditionRecord> {
        let normalized = query.to_lowercase();
        if normalized.trim().is_empty() {
            return None;
        }
        self.records.iter().find(|r| r.matches(&normalized))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
