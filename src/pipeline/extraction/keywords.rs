use crate::models::FieldCategory;

const CAUSE_KEYWORDS: &[&str] = &["cause", "due to", "result of", "origin", "linked to", "etiology"];

const SYMPTOM_KEYWORDS: &[&str] = &[
    "symptom",
    "sign",
    "manifestation",
    "feel",
    "characterized by",
    "including",
];

const PRECAUTION_KEYWORDS: &[&str] = &[
    "prevent",
    "avoid",
    "precaution",
    "risk",
    "lifestyle",
    "control",
    "reduction",
];

const MEDICATION_KEYWORDS: &[&str] = &[
    "medication",
    "treatment",
    "drug",
    "therapy",
    "prescribe",
    "management",
    "remedy",
];

const HOME_REMEDY_KEYWORDS: &[&str] = &[
    "remedy",
    "home",
    "natural",
    "supportive",
    "water",
    "rest",
    "diet",
    "herbal",
];

const FACT_KEYWORDS: &[&str] = &[
    "known as",
    "history",
    "discovered",
    "global",
    "impact",
    "research",
    "scientific",
    "study",
];

/// Fixed keyword set used to extract one card section from prose.
pub fn category_keywords(category: FieldCategory) -> &'static [&'static str] {
    match category {
        FieldCategory::Causes => CAUSE_KEYWORDS,
        FieldCategory::Symptoms => SYMPTOM_KEYWORDS,
        FieldCategory::Precautions => PRECAUTION_KEYWORDS,
        FieldCategory::Medications => MEDICATION_KEYWORDS,
        FieldCategory::HomeRemedies => HOME_REMEDY_KEYWORDS,
        FieldCategory::Facts => FACT_KEYWORDS,
    }
}
