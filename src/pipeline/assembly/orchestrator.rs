use std::collections::HashSet;

use async_trait::async_trait;

use super::{AssemblyError, MedicalInfoSource};
use crate::knowledge::KnowledgeBase;
use crate::models::{ConditionRecord, FieldCategory, MedicalInfo, FETCHING_SUMMARY};
use crate::pipeline::extraction;
use crate::pipeline::resolver::{SummaryResolution, SummaryResolver};

/// Merges curated records with sections extracted from a remote summary.
pub struct MedicalInfoAssembler<R> {
    knowledge: KnowledgeBase,
    resolver: R,
}

impl<R: SummaryResolver> MedicalInfoAssembler<R> {
    pub fn new(knowledge: KnowledgeBase, resolver: R) -> Self {
        Self {
            knowledge,
            resolver,
        }
    }

    /// Assembler over the bundled condition table.
    pub fn with_builtin_knowledge(resolver: R) -> Self {
        Self::new(KnowledgeBase::builtin(), resolver)
    }
}

#[async_trait]
impl<R: SummaryResolver> MedicalInfoSource for MedicalInfoAssembler<R> {
    async fn assemble(&self, query: &str) -> Result<MedicalInfo, AssemblyError> {
        if query.trim().is_empty() {
            return Err(AssemblyError::EmptyQuery);
        }

        let curated = self.knowledge.lookup(query);
        if let Some(record) = curated {
            tracing::debug!(key = record.key, "Curated condition matched");
        }

        let remote = self.resolver.resolve(query).await;
        let info = compose_medical_info(curated, remote);
        tracing::debug!(
            title = %info.title,
            sections = info.populated_sections(),
            "Medical info assembled"
        );
        Ok(info)
    }
}

/// Build the card from an optional curated record and a resolver result.
///
/// Curated lists win per field; an empty curated list falls through to
/// extraction for that field only.
pub fn compose_medical_info(
    curated: Option<&ConditionRecord>,
    remote: SummaryResolution,
) -> MedicalInfo {
    if curated.is_none() && !remote.has_summary() {
        return MedicalInfo::no_match(remote.title);
    }

    let title = match curated {
        Some(record) => record.name.to_string(),
        None => remote.title.clone(),
    };
    let summary = if remote.has_summary() {
        remote.summary.clone()
    } else {
        FETCHING_SUMMARY.to_string()
    };

    let mut info = MedicalInfo::new(title, summary, remote.image_url.clone());
    for category in FieldCategory::ALL {
        let items = match curated.map(|r| r.field(category)).filter(|f| !f.is_empty()) {
            Some(list) => distinct(list),
            None => extraction::extract_field(&remote.summary, category),
        };
        info.set_field(category, items);
    }
    info
}

fn distinct(items: &[&str]) -> Vec<String> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert(**item))
        .map(|item| item.to_string())
        .collect()
}
