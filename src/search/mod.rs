//! Cross-entity keyword search
//!
//! Thin read-only composition over the store's per-entity substring searches.
//! Matching itself lives in the Cypher templates (and their mock mirror);
//! this layer only fans out, merges, and derives suggestion lists.

use crate::error::StoreResult;
use crate::neo4j::models::{Ticket, User};
use crate::neo4j::GraphStore;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// Cap on the suggestion list returned by [`SearchService::suggested_terms`].
const MAX_SUGGESTIONS: usize = 10;

/// Corpus size counters shown alongside search results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchStatistics {
    pub total_tickets: u64,
    pub total_articles: u64,
    pub total_users: u64,
}

/// Combined result of a cross-entity keyword search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    pub tickets: Vec<Ticket>,
    pub users: Vec<User>,
}

/// Coordinator for keyword search across tickets and users.
pub struct SearchService {
    store: Arc<dyn GraphStore>,
}

impl SearchService {
    /// Create a new search service.
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self { store }
    }

    /// Count the searchable corpus: tickets, knowledge-base articles, users.
    pub async fn statistics(&self) -> StoreResult<SearchStatistics> {
        let total_tickets = self.store.count_tickets().await?;
        let total_articles = self.store.count_articles().await?;
        let total_users = self.store.count_users().await?;

        Ok(SearchStatistics {
            total_tickets,
            total_articles,
            total_users,
        })
    }

    /// Search tickets and users for a keyword in one call.
    pub async fn search_all(&self, keyword: &str) -> StoreResult<SearchResults> {
        let tickets = self.store.search_tickets(keyword).await?;
        let users = self.store.search_users(keyword).await?;

        Ok(SearchResults { tickets, users })
    }

    /// Suggest search terms for a partial query.
    ///
    /// Terms are ticket titles containing the fragment case-insensitively,
    /// deduplicated case-insensitively (first casing wins), in the
    /// newest-first order of the underlying search, capped at
    /// [`MAX_SUGGESTIONS`].
    pub async fn suggested_terms(&self, fragment: &str) -> StoreResult<Vec<String>> {
        let fragment_lower = fragment.to_lowercase();
        let tickets = self.store.search_tickets(fragment).await?;

        let mut seen = HashSet::new();
        let mut terms = Vec::new();
        for ticket in tickets {
            // The store matches title OR description; suggestions come from
            // titles only.
            let title_lower = ticket.title.to_lowercase();
            if !title_lower.contains(&fragment_lower) {
                continue;
            }
            if seen.insert(title_lower) {
                terms.push(ticket.title);
            }
            if terms.len() == MAX_SUGGESTIONS {
                break;
            }
        }

        Ok(terms)
    }
}
