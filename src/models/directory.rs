use serde::{Deserialize, Serialize};

/// Categorized listing of disease names shown on explicit request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseDirectory {
    pub title: String,
    pub description: String,
    pub categories: Vec<DirectoryCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryCategory {
    pub name: String,
    pub diseases: Vec<String>,
}

impl DiseaseDirectory {
    #[cfg(test)]
    pub fn disease_count(&self) -> usize {
        self.categories.iter().map(|c| c.diseases.len()).sum()
    }
}
