use super::enums::FieldCategory;

/// Hand-authored condition entry.
///
/// An empty slice means the field was not curated; the assembler then
/// falls back to extraction for that field alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionRecord {
    /// Lowercase lookup key, matched by substring against the query.
    pub key: &'static str,
    pub name: &'static str,
    pub causes: &'static [&'static str],
    pub symptoms: &'static [&'static str],
    pub precautions: &'static [&'static str],
    pub medications: &'static [&'static str],
    pub home_remedies: &'static [&'static str],
    pub facts: &'static [&'static str],
}

impl ConditionRecord {
    pub fn field(&self, category: FieldCategory) -> &'static [&'static str] {
        match category {
            FieldCategory::Causes => self.causes,
            FieldCategory::Symptoms => self.symptoms,
            FieldCategory::Precautions => self.precautions,
            FieldCategory::Medications => self.medications,
            FieldCategory::HomeRemedies => self.home_remedies,
            FieldCategory::Facts => self.facts,
        }
    }

    /// Whether this record matches a lowercased query in either direction.
    pub fn matches(&self, normalized_query: &str) -> bool {
        normalized_query.contains(self.key) || self.key.contains(normalized_query)
    }
}
