use serde::{Deserialize, Serialize};

use super::enums::FieldCategory;

pub const DISCLAIMER: &str = "⚠️ MEDICAL DISCLAIMER: This information is for educational purposes only and is not medical advice. Always consult a healthcare professional for diagnosis and treatment.";

/// Summary used when neither curated nor remote data was found.
pub const NO_MATCH_SUMMARY: &str = "I'm searching my global records, but I couldn't find a detailed match. Please try a common disease name.";

/// Summary used when a curated record matched but the remote summary was empty.
pub const FETCHING_SUMMARY: &str = "Fetching global overview...";

/// Informational card assembled for one disease query.
///
/// List fields are either absent or non-empty; `set_field` enforces this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalInfo {
    pub title: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub causes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symptoms: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precautions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medications: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home_remedies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facts: Option<Vec<String>>,
    pub disclaimer: String,
}

impl MedicalInfo {
    pub fn new(title: impl Into<String>, summary: impl Into<String>, image_url: Option<String>) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            image_url,
            causes: None,
            symptoms: None,
            precautions: None,
            medications: None,
            home_remedies: None,
            facts: None,
            disclaimer: DISCLAIMER.to_string(),
        }
    }

    /// Placeholder card for a query nothing could be found for.
    pub fn no_match(title: impl Into<String>) -> Self {
        Self::new(title, NO_MATCH_SUMMARY, None)
    }

    pub fn is_no_match(&self) -> bool {
        self.summary == NO_MATCH_SUMMARY
    }

    pub fn field(&self, category: FieldCategory) -> Option<&[String]> {
        let slot = match category {
            FieldCategory::Causes => &self.causes,
            FieldCategory::Symptoms => &self.symptoms,
            FieldCategory::Precautions => &self.precautions,
            FieldCategory::Medications => &self.medications,
            FieldCategory::HomeRemedies => &self.home_remedies,
            FieldCategory::Facts => &self.facts,
        };
        slot.as_deref()
    }

    /// Store a section. An empty list leaves the section absent.
    pub fn set_field(&mut self, category: FieldCategory, items: Vec<String>) {
        let slot = match category {
            FieldCategory::Causes => &mut self.causes,
            FieldCategory::Symptoms => &mut self.symptoms,
            FieldCategory::Precautions => &mut self.precautions,
            FieldCategory::Medications => &mut self.medications,
            FieldCategory::HomeRemedies => &mut self.home_remedies,
            FieldCategory::Facts => &mut self.facts,
        };
        *slot = if items.is_empty() { None } else { Some(items) };
    }

    /// Number of populated sections.
    pub fn populated_sections(&self) -> usize {
        FieldCategory::ALL
            .iter()
            .filter(|c| self.field(**c).is_some())
            .count()
    }
}
