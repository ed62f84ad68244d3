//! Curated condition table.
//!
//! Order matters: lookup returns the first record whose key matches, so
//! earlier entries win ambiguous queries.

use crate::models::ConditionRecord;

pub static CONDITIONS: [ConditionRecord; 21] = [
    ConditionRecord {
        key: "flu",
        name: "Influenza (Flu)",
        causes: &["Influenza viruses", "Airborne droplets", "Surface contact"],
        symptoms: &["Fever (100°F+)", "Dry cough", "Sore throat", "Muscle aches", "Fatigue"],
        precautions: &["Annual vaccine", "Frequent handwashing", "Avoiding crowds", "Wearing masks"],
        medications: &["Oseltamivir (Tamiflu)", "Acetaminophen/Paracetamol", "Ibuprofen"],
        home_remedies: &["Drink plenty of warm fluids", "Bed rest", "Saltwater gargle", "Steam inhalation"],
        facts: &[],
    },
    ConditionRecord {
        key: "migraine",
        name: "Migraine",
        causes: &["Genetic factors", "Stress", "Sensory triggers", "Sleep deprivation"],
        symptoms: &["Pulsating headache", "Nausea", "Light sensitivity", "Blurred vision"],
        precautions: &["Sleep schedule", "Stress management", "Identify food triggers", "Stay hydrated"],
        medications: &["Sumatriptan", "Ibuprofen", "Naproxen", "Aspirin"],
        home_remedies: &["Rest in a dark/quiet room", "Cold compress on forehead", "Peppermint oil", "Ginger tea"],
        facts: &[],
    },
    ConditionRecord {
        key: "diabetes",
        name: "Diabetes (Type 2)",
        causes: &["Insulin resistance", "Excess weight", "Physical inactivity", "Genetics"],
        symptoms: &["Excessive thirst", "Frequent urination", "Blurred vision", "Fatigue"],
        precautions: &["Balanced diet", "Daily exercise", "Weight control", "Blood sugar monitoring"],
        medications: &["Metformin", "Sulfonylureas", "Insulin", "SGLT2 inhibitors"],
        home_remedies: &["Manage carb intake", "Increase fiber", "Stay hydrated", "Regular physical activity"],
        facts: &[],
    },
    ConditionRecord {
        key: "malaria",
        name: "Malaria",
        causes: &[
            "Plasmodium falciparum (most deadly) and P. vivax parasites",
            "Bite of an infected female Anopheles mosquito",
            "Transfusions or mother-to-child (rare)",
        ],
        symptoms: &[
            "Cyclical high fever (often every 48-72 hours)",
            "Shaking chills followed by intense heat",
            "Splenomegaly (enlarged spleen)",
            "Anemia and Jaundice",
            "Dry cough and abdominal pain",
            "Severe headache and muscle aches",
        ],
        precautions: &[
            "Long-lasting insecticidal nets (LLINs)",
            "Indoor residual spraying (IRS)",
            "DEET/Picaridin-based repellents",
            "Antimalarial chemoprophylaxis for travelers",
            "Clearing stagnant water to prevent breeding",
        ],
        medications: &[
            "Artemether-lumefantrine (Coartem)",
            "Chloroquine or Quinine sulfate",
            "Primaquine for liver-stage parasites",
            "Atovaquone-proguanil (Malarone)",
        ],
        home_remedies: &[
            "ORS (Oral Rehydration Salts) for fluid loss",
            "Tepid water sponging to reduce core temperature",
            "High-carbohydrate, high-protein diet",
            "Absolute bed rest in a well-ventilated room",
        ],
        facts: &[
            "Malaria is not contagious; it cannot be spread from person to person.",
            "The incubation period is typically 10–15 days after the mosquito bite.",
            "Over 200 million clinical cases occur globally each year.",
            "P. falciparum accounts for the majority of malaria deaths globally.",
        ],
    },
    ConditionRecord {
        key: "hypertension",
        name: "Hypertension (High Blood Pressure)",
        causes: &["High salt intake", "Age", "Genetics", "Chronic stress"],
        symptoms: &["Often no signs", "Morning headaches", "Nosebleeds", "Vision changes"],
        precautions: &["Reduce sodium", "Regular cardio", "Limit alcohol", "Deep breathing"],
        medications: &["ACE inhibitors", "Beta-blockers", "Diuretics", "Calcium channel blockers"],
        home_remedies: &["DASH diet", "Low-sodium meals", "Potassium-rich foods", "Daily brisk walk"],
        facts: &[],
    },
    ConditionRecord {
        key: "ebola",
        name: "Ebola Virus Disease",
        causes: &["Ebolavirus", "Direct contact with blood/fluids", "Infected animals"],
        symptoms: &["Fever", "Severe headache", "Muscle pain", "Weakness", "Internal bleeding"],
        precautions: &["Avoid contact with fluids", "Sanitization", "Safe burial practices", "Hand hygiene"],
        medications: &["Inmazeb", "Ebanga", "Supportive care (IV fluids)"],
        home_remedies: &["Strict isolation", "Replacement of electrolytes", "Nutritious recovery diet"],
        facts: &[],
    },
    ConditionRecord {
        key: "measles",
        name: "Measles (Rubeola)",
        causes: &["Measles virus", "Airborne droplets", "Coughing/Sneezing"],
        symptoms: &["High fever", "Koplik spots", "Red rash", "Cough", "Runny nose"],
        precautions: &["MMR vaccine", "Isolation", "Hand hygiene", "Quarantine"],
        medications: &["Vitamin A", "Acetaminophen", "Antibiotics (if secondary infection)"],
        home_remedies: &["Rest in dimmed light", "Humidifier use", "Increased fluid intake"],
        facts: &[],
    },
    ConditionRecord {
        key: "typhoid",
        name: "Typhoid Fever",
        causes: &["Salmonella Typhi bacteria", "Contaminated food/water"],
        symptoms: &["Prolonged fever", "Abdominal pain", "Rosy spots on chest", "Constipation/Diarrhea"],
        precautions: &["Typhoid vaccine", "Drink boiled water", "Eat hot/peeled food", "Handwashing"],
        medications: &["Ciprofloxacin", "Azithromycin", "Ceftriaxone"],
        home_remedies: &["Cold water sponge", "ORS (Electrolytes)", "High-protein diet"],
        facts: &[
            "Caused by Salmonella Typhi, which only lives in humans.",
            "Spread through the 'fecal-oral' route via contaminated food.",
            "Modern antibiotics have made typhoid relatively easy to treat in healthy adults.",
            "If untreated, it can lead to intestinal perforation or internal bleeding.",
        ],
    },
    ConditionRecord {
        key: "hepatitis",
        name: "Hepatitis B",
        causes: &["HBV virus", "Infected blood", "Sexual contact", "Needle sharing"],
        symptoms: &["Jaundice (yellow skin)", "Dark urine", "Extreme fatigue", "Nausea"],
        precautions: &["Hepatitis B vaccine", "Safe practices", "Don't share razors/needles"],
        medications: &["Tenofovir", "Entecavir", "Interferon injections"],
        home_remedies: &["Avoid alcohol", "High-carbohydrate diet", "Physical rest"],
        facts: &[],
    },
    ConditionRecord {
        key: "anemia",
        name: "Iron Deficiency Anemia",
        causes: &["Lack of iron", "Blood loss", "Pregnancy", "Poor diet"],
        symptoms: &["Pale skin", "Shortness of breath", "Cold hands/feet", "Heart palpitations"],
        precautions: &["Iron-rich diet", "Regular screenings", "Limit tea/coffee with meals"],
        medications: &["Ferrous sulfate", "Iron injections", "B12 supplements"],
        home_remedies: &["Eat spinach/lentils", "Vitamin C with iron (oranges)", "Cook in cast iron pots"],
        facts: &[],
    },
    ConditionRecord {
        key: "asthma",
        name: "Asthma",
        causes: &["Airborne allergens", "Respiratory infections", "Cold air", "Exercise"],
        symptoms: &["Wheezing", "Chest tightness", "Shortness of breath", "Coughing"],
        precautions: &["Avoid triggers", "Air purifiers", "Regular checkups"],
        medications: &["Albuterol (Inhaler)", "Fluticasone", "Montelukast", "Salmeterol"],
        home_remedies: &["Steam inhalation", "Breathing exercises (Buteyko)", "Avoid cold/dry air"],
        facts: &[],
    },
    ConditionRecord {
        key: "pneumonia",
        name: "Pneumonia",
        causes: &["Bacteria (Streptococcus)", "Viruses", "Fungi", "Aspiration"],
        symptoms: &["Chest pain when breathing", "Phlegmy cough", "Fever/Chills", "Confusion (in elderly)"],
        precautions: &["Pneumococcal vaccine", "Flu shot", "No smoking", "Handwashing"],
        medications: &["Antibiotics (Macrolides)", "Azithromycin", "Cough suppressants"],
        home_remedies: &["Warm peppermint tea", "Garlic tea", "Chest massage", "Hydration"],
        facts: &[],
    },
    ConditionRecord {
        key: "tuberculosis",
        name: "Tuberculosis (TB)",
        causes: &["Bacterial infection", "Prolonged close contact"],
        symptoms: &["Cough for 3+ weeks", "Blood in sputum", "Night sweats", "Weight loss"],
        precautions: &["BCG Vaccine", "Well-ventilated rooms", "Covering mouth", "Hand hygiene"],
        medications: &["Isoniazid", "Rifampicin", "Pyrazinamide", "Ethambutol"],
        home_remedies: &["Nutrient-rich diet", "Garlic and ginger (supportive)", "Avoid smoke/dust"],
        facts: &[],
    },
    ConditionRecord {
        key: "dengue",
        name: "Dengue Fever",
        causes: &["Dengue virus", "Day-biting Aedes mosquitoes"],
        symptoms: &["High fever", "Joint/bone pain", "Pain behind eyes", "Skin rash"],
        precautions: &["Mosquito repellent", "Screening windows", "Full-length clothing"],
        medications: &["Acetaminophen (strictly)", "Avoid Ibuprofen/Aspirin", "IV fluids"],
        home_remedies: &["Papaya leaf extract", "Coconut water", "Stay hydrated", "Bed rest"],
        facts: &[],
    },
    ConditionRecord {
        key: "alzheimer",
        name: "Alzheimer's",
        causes: &["Protein plaques in brain", "Aging", "Genetics"],
        symptoms: &["Progressive memory loss", "Wandering", "Confusion", "Language problems"],
        precautions: &["Mental exercises", "Heart-healthy diet", "Physical activity"],
        medications: &["Donepezil", "Memantine", "Rivastigmine"],
        home_remedies: &["Structured daily routine", "Safe environment", "Memory aids/reminders"],
        facts: &[],
    },
    ConditionRecord {
        key: "covid",
        name: "COVID-19",
        causes: &["SARS-CoV-2 virus", "Airborne transmission"],
        symptoms: &["Fever/Chills", "Dry cough", "Shortness of breath", "Loss of taste"],
        precautions: &["Masking", "Social distancing", "Hand sanitation", "Vaccination"],
        medications: &["Paxlovid", "Molnupiravir", "Symptomatic support"],
        home_remedies: &["Hydration", "Prone breathing techniques", "Warm decoctions (Kadha)", "Gargling"],
        facts: &[],
    },
    ConditionRecord {
        key: "depression",
        name: "Clinical Depression",
        causes: &["Chemical imbalance", "Life stress", "Trauma", "Family history"],
        symptoms: &["Low mood", "Sleep issues", "Change in appetite", "Loss of energy"],
        precautions: &["Physical movement", "Social connection", "Regular sleep", "Avoiding alcohol"],
        medications: &["SSRIs (Prozac, Zoloft)", "SNRIs", "Psychotherapy"],
        home_remedies: &["Morning sunlight", "Yoga/Meditation", "Journaling", "Nutritious diet"],
        facts: &[],
    },
    ConditionRecord {
        key: "cancer",
        name: "Cancer",
        causes: &["DNA mutations", "Carcinogens (Tobacco, UV)", "Obesity"],
        symptoms: &["Lumps", "Unexplained weight loss", "Fatigue", "Persistent cough"],
        precautions: &["No tobacco", "Healthy weight", "Sun protection", "Regular screenings"],
        medications: &["Chemotherapy", "Targeted therapy", "Surgery", "Radiation"],
        home_remedies: &["Ginger for nausea", "Small/frequent meals", "Light stretching", "Support groups"],
        facts: &[],
    },
    ConditionRecord {
        key: "cholera",
        name: "Cholera",
        causes: &["Vibrio cholerae bacteria", "Contaminated water/food"],
        symptoms: &["Painless watery diarrhea (Rice water)", "Leg cramps", "Rapid heart rate"],
        precautions: &["Drink safe water", "Wash hands often", "Cook food thoroughly"],
        medications: &["Oral Rehydration (ORS)", "Doxycycline", "Azithromycin"],
        home_remedies: &["Lemon water", "Probiotics", "Coconut water", "Thin gruel"],
        facts: &[],
    },
    ConditionRecord {
        key: "zika",
        name: "Zika Virus",
        causes: &["Zika virus", "Aedes mosquito bites", "Sexual transmission"],
        symptoms: &["Fever", "Rash", "Joint pain", "Conjunctivitis (red eyes)"],
        precautions: &["Mosquito prevention", "Safe practices", "Protective clothing"],
        medications: &["Rest", "Fluids", "Acetaminophen for pain"],
        home_remedies: &["Eucalyptus oil repellent", "Bed rest", "Hydrating soups"],
        facts: &[],
    },
    ConditionRecord {
        key: "polio",
        name: "Poliomyelitis (Polio)",
        causes: &["Poliovirus", "Fecal-oral route", "Contaminated food/water"],
        symptoms: &["Nausea", "Stiffness in back/neck", "Muscle weakness", "Paralysis"],
        precautions: &["Polio vaccine (OPV/IPV)", "Sanitation", "Hygiene"],
        medications: &["Pain relievers", "Physical therapy", "Portable ventilators"],
        home_remedies: &["Nutritious diet", "Gentle massage", "Bed rest during acute phase"],
        facts: &[],
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::models::FieldCategory;

    #[test]
    fn keys_are_unique_and_lowercase() {
        let mut seen = HashSet::new();
        for record in CONDITIONS.iter() {
            assert!(seen.insert(record.key), "duplicate key {}", record.key);
            assert_eq!(record.key, record.key.to_lowercase());
        }
    }

    #[test]
    fn curated_lists_have_no_duplicates() {
        for record in CONDITIONS.iter() {
            for category in FieldCategory::ALL {
                let items = record.field(category);
                let distinct: HashSet<_> = items.iter().collect();
                assert_eq!(distinct.len(), items.len(), "{} {}", record.key, category);
            }
        }
    }

    #[test]
    fn every_record_curates_the_core_sections() {
        for record in CONDITIONS.iter() {
            assert!(!record.name.is_empty());
            assert!(!record.symptoms.is_empty(), "{}", record.key);
            assert!(!record.medications.is_empty(), "{}", record.key);
        }
    }
}
