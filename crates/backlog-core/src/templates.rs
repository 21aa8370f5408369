use regex::Regex;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

/// Template used when no pattern matches the summary.
pub const DEFAULT_EPICS: [&str; 4] = [
    "Core Functionality",
    "Integration & APIs",
    "User Interface & UX",
    "Testing & Deployment",
];

/// Ordered (pattern, template) pairs. Earlier entries win on ambiguous
/// summaries, so the declaration order is part of the contract.
const TEMPLATES: &[(&str, [&str; 4])] = &[
    (
        r"e-?commerce|shop|store|cart|checkout|marketplace|retail",
        [
            "User Authentication & Security",
            "Product Catalog & Search",
            "Shopping Cart & Checkout",
            "Order Management & Admin",
        ],
    ),
    (
        r"mobile|android|\bios\b|smartphone",
        [
            "User Onboarding & Auth",
            "Core Mobile Screens",
            "Notifications & Messaging",
            "Testing & Release",
        ],
    ),
    (
        r"web ?site|web ?app|portal|dashboard|saas|platform",
        [
            "User Accounts & Auth",
            "Core Web Features",
            "Responsive UI & Design",
            "Deployment & Hosting",
        ],
    ),
    (
        r"\bai\b|machine learning|\bml\b|prediction|recommendation|neural",
        [
            "Data Pipeline & Ingestion",
            "Model Training & Evaluation",
            "Prediction API & Serving",
            "Monitoring & Analytics",
        ],
    ),
    (
        r"chat ?bot|assistant|conversation|support bot",
        [
            "Conversation Engine & NLP",
            "Integration & APIs",
            "User Interface & UX",
            "Analytics & Monitoring",
        ],
    ),
    (
        r"fitness|health|workout|exercise|wellness|nutrition",
        [
            "User Profiles & Goals",
            "Activity & Workout Tracking",
            "Progress Analytics",
            "Social & Engagement",
        ],
    ),
];

static COMPILED: OnceLock<Vec<(Regex, [&'static str; 4])>> = OnceLock::new();

fn compiled() -> &'static [(Regex, [&'static str; 4])] {
    COMPILED.get_or_init(|| {
        TEMPLATES
            .iter()
            .map(|(pattern, names)| (Regex::new(pattern).unwrap(), *names))
            .collect()
    })
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Pick the 4-epic template for a summary. Patterns are tested in declared
/// order against the lowercased summary; first match wins.
pub fn select_epic_names(summary: &str) -> [&'static str; 4] {
    let lowered = summary.to_lowercase();
    for (re, names) in compiled() {
        if re.is_match(&lowered) {
            return *names;
        }
    }
    DEFAULT_EPICS
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
