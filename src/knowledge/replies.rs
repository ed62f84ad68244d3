//! Canned assistant text.

/// Wellness tips. Topical routing reaches 0, 1, 2, 3 and 5 directly;
/// index 4 is only reachable through the random generic-wellness reply.
pub const WELLNESS_ADVICE: [&str; 6] = [
    "🥗 Nutrition: Build meals around vegetables, whole grains, lean proteins and healthy fats. Aim for half your plate to be fruits and vegetables, and limit added sugar and heavily processed food.",
    "😴 Sleep: Adults need 7-9 hours of quality sleep. Keep a consistent schedule, keep your bedroom dark and cool, and put screens away an hour before bed.",
    "💧 Hydration: Drink water regularly through the day, roughly 8 glasses for most adults and more in hot weather or during exercise. Pale yellow urine is a good sign you're well hydrated.",
    "🧘 Stress & Mindfulness: Try a few minutes of deep breathing or meditation each day. Regular breaks, time outdoors and staying connected with people you trust all lower stress.",
    "🏃 Movement: Aim for at least 150 minutes of moderate activity per week, plus muscle-strengthening exercises twice a week. Even short walks after meals help.",
    "🩺 Check-ups: Regular health screenings catch problems early. Keep up with blood pressure, cholesterol and blood sugar checks, and ask your doctor which age-appropriate screenings you need.",
];

/// Lowercase phrases that trigger the emergency reply.
pub const EMERGENCY_KEYWORDS: &[&str] = &[
    "chest pain",
    "heart attack",
    "stroke",
    "can't breathe",
    "cannot breathe",
    "difficulty breathing",
    "unconscious",
    "severe bleeding",
    "seizure",
    "overdose",
    "suicide",
    "kill myself",
];

pub const EMERGENCY_MESSAGE: &str = "🚨 This sounds like it could be a medical emergency. Please call your local emergency number (such as 911 or 112) or go to the nearest emergency room right away. Do not wait for an online response.";

pub const GREETING_REPLY: &str = "Hello! I can provide info about symptoms, diseases, medications, or wellness tips. What would you like to know?";

pub const DEFAULT_RESPONSE: &str = "I'm not sure I understood that. Try naming a condition (for example \"flu\" or \"asthma\"), describing a symptom, or asking for a wellness tip.";

pub const WELCOME_MESSAGE: &str = "Hello! I'm your Health Assistant. I can provide detailed medical reports (Symptoms, Medication, Precautions) for almost any disease in the world. Just name a condition or describe your symptoms!";

pub const DIRECTORY_INTRO: &str = "I've organized my medical database into a few key categories for you:";

/// Prefixed to `DEFAULT_RESPONSE` when assembly fails.
pub const CONNECTION_TROUBLE: &str = "I'm having trouble connecting to my medical database. ";

pub const INSIGHTS_UNAVAILABLE: &str = "Sorry, I couldn't fetch that information right now.";

pub fn clinical_overview_intro(title: &str) -> String {
    format!("Here is the clinical overview for {title}:")
}
