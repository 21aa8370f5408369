use regex::Regex;
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Trigger tables
// ---------------------------------------------------------------------------

/// Theme-name substring → trigger substrings. Checked in declared order;
/// the first key contained in the lowercased theme wins.
const THEME_TRIGGERS: &[(&str, &[&str])] = &[
    (
        "auth",
        &["user", "login", "auth", "password", "secur", "account", "regist", "session"],
    ),
    (
        "product",
        &["product", "catalog", "search", "invent", "item", "store", "commerce", "brows"],
    ),
    (
        "cart",
        &["cart", "checkout", "payment", "purchas", "shop", "shipp", "pric", "order"],
    ),
    (
        "order",
        &["order", "admin", "invoice", "fulfil", "track", "refund", "manag"],
    ),
    (
        "data",
        &["data", "pipeline", "ingest", "database", "storage", "import", "export"],
    ),
    (
        "ui",
        &["design", "interface", "layout", "responsive", "page", "screen", "style"],
    ),
    (
        "interface",
        &["design", "interface", "layout", "responsive", "page", "screen", "style"],
    ),
    (
        "mobile",
        &["mobile", "android", "offline", "push", "notif", "camera", "device"],
    ),
    (
        "web",
        &["website", "portal", "frontend", "backend", "dashboard", "browser", "page"],
    ),
    (
        "ai",
        &["model", "train", "predict", "recommend", "learn", "intelligen", "automat"],
    ),
    (
        "predict",
        &["predict", "model", "inference", "forecast", "score", "serve"],
    ),
    (
        "chat",
        &["chat", "message", "convers", "intent", "support", "respon", "reply"],
    ),
    (
        "convers",
        &["chat", "message", "convers", "language", "intent", "respon", "reply"],
    ),
    (
        "notif",
        &["notif", "email", "alert", "push", "remind", "message"],
    ),
    (
        "analytic",
        &["metric", "report", "dashboard", "track", "event", "usage", "monitor"],
    ),
    (
        "integration",
        &["integrat", "api", "webhook", "endpoint", "service", "external", "sync"],
    ),
    (
        "test",
        &["test", "deploy", "release", "quality", "automat", "coverage", "valid"],
    ),
    (
        "deploy",
        &["deploy", "release", "monitor", "scale", "backup", "hosting", "docker"],
    ),
    (
        "workout",
        &["workout", "exercise", "fitness", "activity", "goal", "calorie", "step"],
    ),
    (
        "user",
        &["user", "profile", "account", "member", "onboard", "goal"],
    ),
];

/// Generic fallback triggers applied when no theme entry matches or the
/// matching entry yields nothing.
const GENERIC_TRIGGERS: &[&str] = &["feature", "system", "functionality", "module", "component"];

/// Last-resort keywords when the summary contains nothing usable.
const DEFAULT_KEYWORDS: &[&str] = &["Core implementation", "Testing & validation", "Documentation"];

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

static WORD_RE: OnceLock<Regex> = OnceLock::new();

fn word_re() -> &'static Regex {
    WORD_RE.get_or_init(|| Regex::new(r"[a-z]{4,}").unwrap())
}

/// Pull up to 4 capitalized keywords out of `text` that are relevant to
/// `theme` (an epic title). Always returns at least one entry: theme hits,
/// then generic hits (capped at 3), then `DEFAULT_KEYWORDS`.
pub fn extract_keywords(text: &str, theme: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = word_re().find_iter(&lowered).map(|m| m.as_str()).collect();
    let theme = theme.to_lowercase();

    if let Some((_, triggers)) = THEME_TRIGGERS.iter().find(|(key, _)| theme.contains(key)) {
        let hits: Vec<String> = tokens
            .iter()
            .filter(|t| triggers.iter().any(|trigger| t.contains(trigger)))
            .take(4)
            .map(|t| capitalize(t))
            .collect();
        if !hits.is_empty() {
            return hits;
        }
    }

    let generic: Vec<String> = tokens
        .iter()
        .filter(|t| GENERIC_TRIGGERS.iter().any(|trigger| t.contains(trigger)))
        .take(3)
        .map(|t| capitalize(t))
        .collect();
    if !generic.is_empty() {
        return generic;
    }

    DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
