use crate::knowledge::replies::EMERGENCY_KEYWORDS;

/// Routing decision for one utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Directory,
    Emergency,
    Wellness(WellnessTopic),
    GeneralWellness,
    Greeting,
    DiseaseLookup,
}

impl Intent {
    /// Whether the reply is produced without the assembler.
    pub fn is_local(&self) -> bool {
        !matches!(self, Intent::DiseaseLookup)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WellnessTopic {
    Diet,
    Sleep,
    Hydration,
    Stress,
    Checkup,
}

impl WellnessTopic {
    /// Position in `WELLNESS_ADVICE`. Index 4 has no topic.
    pub fn advice_index(&self) -> usize {
        match self {
            WellnessTopic::Diet => 0,
            WellnessTopic::Sleep => 1,
            WellnessTopic::Hydration => 2,
            WellnessTopic::Stress => 3,
            WellnessTopic::Checkup => 5,
        }
    }
}

const DIRECTORY_PHRASES: &[&str] = &["all disease", "list of disease", "every disease"];

/// Checked in order; the first topic with a matching word wins.
const TOPIC_PATTERNS: &[(WellnessTopic, &[&str])] = &[
    (WellnessTopic::Diet, &["diet", "food"]),
    (WellnessTopic::Sleep, &["sleep"]),
    (WellnessTopic::Hydration, &["hydrat", "water"]),
    (WellnessTopic::Stress, &["stress", "mindful"]),
    (WellnessTopic::Checkup, &["check-up", "screening"]),
];

const GENERAL_WELLNESS_WORDS: &[&str] = &["wellness", "advice", "tip"];

// Plain substring match: "hi" also fires inside longer words.
const GREETING_WORDS: &[&str] = &["hello", "hi"];

/// Classify an utterance using case-insensitive substring heuristics.
///
/// Emergency detection must stay ahead of every wellness and greeting check.
pub fn classify_utterance(text: &str) -> Intent {
    let lower = text.to_lowercase();

    if contains_any(&lower, DIRECTORY_PHRASES) {
        return Intent::Directory;
    }

    if has_emergency_pattern(&lower) {
        return Intent::Emergency;
    }

    if let Some(topic) = wellness_topic(&lower) {
        return Intent::Wellness(topic);
    }

    if contains_any(&lower, GENERAL_WELLNESS_WORDS) {
        return Intent::GeneralWellness;
    }

    if contains_any(&lower, GREETING_WORDS) {
        return Intent::Greeting;
    }

    Intent::DiseaseLookup
}

fn has_emergency_pattern(lower: &str) -> bool {
    contains_any(lower, EMERGENCY_KEYWORDS)
}

fn wellness_topic(lower: &str) -> Option<WellnessTopic> {
    TOPIC_PATTERNS
        .iter()
        .find(|(_, words)| contains_any(lower, words))
        .map(|(topic, _)| *topic)
}

fn contains_any(lower: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| lower.contains(n))
}
