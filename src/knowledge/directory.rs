use std::sync::LazyLock;

use crate::models::{DirectoryCategory, DiseaseDirectory};

const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Infectious Diseases",
        &[
            "COVID-19", "Influenza", "Tuberculosis", "Malaria", "Dengue", "Cholera", "Typhoid",
            "Measles", "Ebola", "Zika",
        ],
    ),
    (
        "Chronic & Metabolic",
        &["Diabetes", "Hypertension", "Heart Disease", "Stroke", "Asthma", "COPD", "Obesity"],
    ),
    (
        "Neurological & Mental",
        &[
            "Alzheimer's", "Parkinson's", "Migraine", "Epilepsy", "Depression", "Anxiety",
            "Bipolar Disorder",
        ],
    ),
    (
        "Other Major Categories",
        &["Cancer", "Leukemia", "Lupus", "Arthritis", "Anemia", "Pneumonia", "Polio"],
    ),
];

static DISEASE_DIRECTORY: LazyLock<DiseaseDirectory> = LazyLock::new(|| DiseaseDirectory {
    title: "Global Disease Directory".to_string(),
    description: "I have access to a global medical database. Here is a categorized overview of major health conditions you can explore:".to_string(),
    categories: CATEGORIES
        .iter()
        .map(|(name, diseases)| DirectoryCategory {
            name: name.to_string(),
            diseases: diseases.iter().map(|d| d.to_string()).collect(),
        })
        .collect(),
});

/// The static disease directory, built once on first use.
pub fn disease_directory() -> &'static DiseaseDirectory {
    &DISEASE_DIRECTORY
}
