//! Rule-based ticket classification
//!
//! Pure text heuristics over the rule tables in [`rules`]: category
//! assignment, priority suggestion, and keyword extraction. No store access,
//! no failure modes — any input, including the empty string, produces the
//! default category and priority.

pub mod rules;

use crate::neo4j::models::Priority;
use rules::{CATEGORY_RULES, DEFAULT_CATEGORY, PRIORITY_RULES, STOP_WORDS};
use std::collections::HashMap;

/// Default cap on extracted keywords.
const DEFAULT_MAX_KEYWORDS: usize = 10;

/// Rule-based classifier for ticket text.
#[derive(Debug, Clone)]
pub struct Classifier {
    max_keywords: usize,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    /// Create a classifier with the default keyword cap.
    pub fn new() -> Self {
        Self {
            max_keywords: DEFAULT_MAX_KEYWORDS,
        }
    }

    /// Create a classifier with a custom keyword cap.
    pub fn with_max_keywords(max_keywords: usize) -> Self {
        Self { max_keywords }
    }

    /// Assign a category name to ticket text.
    ///
    /// First rule in [`CATEGORY_RULES`] with any keyword contained in the
    /// lowercased input wins; no match yields [`DEFAULT_CATEGORY`].
    pub fn classify(&self, text: &str) -> &'static str {
        let lowered = text.to_lowercase();
        for (category, keywords) in CATEGORY_RULES.iter().copied() {
            if keywords.iter().any(|k| lowered.contains(k)) {
                return category;
            }
        }
        DEFAULT_CATEGORY
    }

    /// Suggest a priority for ticket text.
    ///
    /// Tiers in [`PRIORITY_RULES`] are checked most severe first; text with
    /// no severity signal stays at the default (Medium).
    pub fn suggest_priority(&self, text: &str) -> Priority {
        let lowered = text.to_lowercase();
        for (priority, keywords) in PRIORITY_RULES.iter() {
            if keywords.iter().any(|k| lowered.contains(k)) {
                return *priority;
            }
        }
        Priority::default()
    }

    /// Extract up to `max_keywords` keywords from ticket text.
    ///
    /// Tokens are split on non-alphanumeric boundaries and lowercased;
    /// single characters and stop words are dropped. Ranking is by
    /// descending frequency, ties broken by first appearance, which makes
    /// the output deterministic for a given input.
    pub fn extract_keywords(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();

        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();

        for token in lowered.split(|c: char| !c.is_alphanumeric()) {
            if token.len() < 2 || STOP_WORDS.contains(&token) {
                continue;
            }
            let count = counts.entry(token).or_insert(0);
            if *count == 0 {
                order.push(token);
            }
            *count += 1;
        }

        // Stable sort: equal counts keep first-appearance order.
        let mut ranked = order;
        ranked.sort_by(|a, b| counts[b].cmp(&counts[a]));
        ranked.truncate(self.max_keywords);

        ranked.into_iter().map(|t| t.to_string()).collect()
    }
}
