//! Rule tables for ticket classification.
//!
//! Rules are ordered: the first rule with any keyword contained in the
//! lowercased input wins, so earlier rules take precedence on overlap.
//! Matching is substring-based, which lets multi-word phrases like
//! "not working" act as keywords.

use crate::neo4j::models::Priority;

/// Category assigned when no rule matches.
pub const DEFAULT_CATEGORY: &str = "Other";

/// Ordered (category name, trigger keywords) rules.
///
/// Hard-failure words come first so "payment page crash" files under
/// Technical rather than Payment; domain keywords follow; the generic
/// Bug bucket catches what remains before the default applies.
pub const CATEGORY_RULES: &[(&str, &[&str])] = &[
    (
        "Technical",
        &[
            "crash",
            "exception",
            "stack trace",
            "not working",
            "broken",
            "freeze",
        ],
    ),
    (
        "Payment",
        &[
            "payment",
            "billing",
            "invoice",
            "refund",
            "charge",
            "subscription",
            "credit card",
        ],
    ),
    (
        "Database",
        &["database", "data loss", "sql", "query", "migration", "corrupt"],
    ),
    (
        "Security",
        &[
            "security",
            "password",
            "breach",
            "unauthorized",
            "vulnerability",
            "phishing",
            "suspicious",
        ],
    ),
    (
        "Email",
        &["email", "notification", "smtp", "inbox", "mailbox"],
    ),
    (
        "Performance",
        &["slow", "performance", "timeout", "latency", "lag", "memory"],
    ),
    (
        "UI/UX",
        &[
            "button",
            "layout",
            "interface",
            "display",
            "screen",
            "alignment",
            "styling",
            "dark mode",
        ],
    ),
    (
        "Feature",
        &["feature", "enhancement", "add support", "would like", "request"],
    ),
    (
        "Bug",
        &["bug", "defect", "glitch", "error", "typo", "incorrect"],
    ),
];

/// Ordered (priority, trigger keywords) rules; checked most severe first.
/// No rule matching means no signal, and the suggestion stays at the
/// default priority. There is deliberately no Low tier: low priority is a
/// human decision, never a guess.
pub const PRIORITY_RULES: &[(Priority, &[&str])] = &[
    (
        Priority::Critical,
        &[
            "is down",
            "are down",
            "server down",
            "system down",
            "all users",
            "data loss",
            "outage",
            "security breach",
            "emergency",
            "cannot access",
        ],
    ),
    (
        Priority::High,
        &[
            "crash",
            "urgent",
            "broken",
            "cannot",
            "error",
            "fail",
            "severe",
            "blocked",
            "asap",
        ],
    ),
];

/// Tokens ignored by keyword extraction. "down" and "up" stay out of the
/// list: they carry meaning in support text.
pub const STOP_WORDS: &[&str] = &[
    "about", "after", "again", "also", "an", "and", "any", "are", "as", "at", "be", "been",
    "before", "but", "by", "can", "could", "did", "do", "does", "for", "from", "had", "has",
    "have", "he", "her", "his", "how", "if", "in", "into", "is", "it", "its", "just", "me",
    "more", "most", "my", "no", "not", "of", "on", "or", "our", "out", "over", "she", "should",
    "so", "some", "than", "that", "the", "their", "them", "then", "there", "these", "they",
    "this", "those", "to", "too", "under", "very", "was", "we", "were", "what", "when", "where",
    "which", "while", "who", "why", "will", "with", "would", "you", "your",
];
