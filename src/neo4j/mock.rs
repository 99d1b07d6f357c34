//! In-memory mock implementation of GraphStore for testing.
//!
//! Provides a complete mock of all graph operations using
//! `tokio::sync::RwLock<HashMap<K, V>>` collections.
//! Conditionally compiled with `#[cfg(test)]`.

use crate::error::StoreResult;
use crate::neo4j::models::*;
use crate::neo4j::traits::GraphStore;
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory mock implementation of GraphStore for testing.
pub struct MockGraphStore {
    pub tickets: RwLock<HashMap<String, Ticket>>,
    pub users: RwLock<HashMap<String, User>>,
    pub categories: RwLock<HashMap<String, Category>>,
    pub article_count: RwLock<u64>,
}

impl Default for MockGraphStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGraphStore {
    /// Create a new empty MockGraphStore.
    pub fn new() -> Self {
        Self {
            tickets: RwLock::new(HashMap::new()),
            users: RwLock::new(HashMap::new()),
            categories: RwLock::new(HashMap::new()),
            article_count: RwLock::new(0),
        }
    }

    // ========================================================================
    // Builder / seeding methods for tests
    // ========================================================================

    /// Seed a ticket into the store.
    pub fn with_ticket(mut self, ticket: Ticket) -> Self {
        self.tickets.get_mut().insert(ticket.id.clone(), ticket);
        self
    }

    /// Seed a user into the store.
    pub fn with_user(mut self, user: User) -> Self {
        self.users.get_mut().insert(user.id.clone(), user);
        self
    }

    /// Seed a category into the store.
    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.get_mut().insert(category.id.clone(), category);
        self
    }

    /// Seed a knowledge-base article count.
    pub fn with_article_count(mut self, count: u64) -> Self {
        *self.article_count.get_mut() = count;
        self
    }

    /// Clone tickets matching a predicate, sorted newest first.
    async fn tickets_where<F>(&self, predicate: F) -> Vec<Ticket>
    where
        F: Fn(&Ticket) -> bool,
    {
        let mut matched: Vec<Ticket> = self
            .tickets
            .read()
            .await
            .values()
            .filter(|t| predicate(t))
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matched
    }

    /// Live ticket count for a category id.
    async fn category_ticket_count(&self, category_id: &str) -> u64 {
        self.tickets
            .read()
            .await
            .values()
            .filter(|t| t.category_id == category_id)
            .count() as u64
    }
}

#[async_trait]
impl GraphStore for MockGraphStore {
    // ========================================================================
    // Ticket operations
    // ========================================================================

    async fn create_ticket(&self, ticket: &Ticket) -> StoreResult<Ticket> {
        let mut ticket = ticket.clone();
        if ticket.id.is_empty() {
            ticket.id = generate_ticket_id();
        }
        self.tickets
            .write()
            .await
            .insert(ticket.id.clone(), ticket.clone());
        Ok(ticket)
    }

    async fn get_ticket(&self, id: &str) -> StoreResult<Option<Ticket>> {
        Ok(self.tickets.read().await.get(id).cloned())
    }

    async fn list_tickets(&self) -> StoreResult<Vec<Ticket>> {
        Ok(self.tickets_where(|_| true).await)
    }

    async fn list_tickets_by_status(&self, status: TicketStatus) -> StoreResult<Vec<Ticket>> {
        Ok(self.tickets_where(|t| t.status == status).await)
    }

    async fn list_tickets_by_priority(&self, priority: Priority) -> StoreResult<Vec<Ticket>> {
        Ok(self.tickets_where(|t| t.priority == priority).await)
    }

    async fn list_tickets_by_assignee(&self, assignee: &str) -> StoreResult<Vec<Ticket>> {
        Ok(self.tickets_where(|t| t.assigned_to == assignee).await)
    }

    async fn update_ticket(&self, ticket: &Ticket) -> StoreResult<Option<Ticket>> {
        let mut tickets = self.tickets.write().await;
        if !tickets.contains_key(&ticket.id) {
            return Ok(None);
        }
        let mut ticket = ticket.clone();
        ticket.updated_at = Utc::now();
        tickets.insert(ticket.id.clone(), ticket.clone());
        Ok(Some(ticket))
    }

    async fn save_ticket(&self, ticket: &Ticket) -> StoreResult<Ticket> {
        if !ticket.id.is_empty() && self.tickets.read().await.contains_key(&ticket.id) {
            if let Some(saved) = self.update_ticket(ticket).await? {
                return Ok(saved);
            }
        }
        self.create_ticket(ticket).await
    }

    async fn delete_ticket(&self, id: &str) -> StoreResult<()> {
        self.tickets.write().await.remove(id);
        Ok(())
    }

    async fn count_tickets(&self) -> StoreResult<u64> {
        Ok(self.tickets.read().await.len() as u64)
    }

    async fn count_tickets_by_status(&self, status: TicketStatus) -> StoreResult<u64> {
        Ok(self
            .tickets
            .read()
            .await
            .values()
            .filter(|t| t.status == status)
            .count() as u64)
    }

    async fn count_tickets_by_priority(&self, priority: Priority) -> StoreResult<u64> {
        Ok(self
            .tickets
            .read()
            .await
            .values()
            .filter(|t| t.priority == priority)
            .count() as u64)
    }

    async fn search_tickets(&self, keyword: &str) -> StoreResult<Vec<Ticket>> {
        let keyword = keyword.to_lowercase();
        Ok(self
            .tickets_where(|t| {
                t.title.to_lowercase().contains(&keyword)
                    || t.description.to_lowercase().contains(&keyword)
            })
            .await)
    }

    async fn count_tickets_with_due_date(&self) -> StoreResult<u64> {
        Ok(self
            .tickets
            .read()
            .await
            .values()
            .filter(|t| t.due_date.is_some())
            .count() as u64)
    }

    async fn count_tickets_resolved_in_sla(&self) -> StoreResult<u64> {
        Ok(self
            .tickets
            .read()
            .await
            .values()
            .filter(|t| match (t.resolved_at, t.due_date) {
                (Some(resolved), Some(due)) => resolved <= due,
                _ => false,
            })
            .count() as u64)
    }

    // ========================================================================
    // User operations
    // ========================================================================

    async fn create_user(&self, user: &User) -> StoreResult<User> {
        let mut user = user.clone();
        if user.id.is_empty() {
            user.id = generate_user_id();
        }
        self.users
            .write()
            .await
            .insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: &str) -> StoreResult<Option<User>> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users)
    }

    async fn update_user(&self, user: &User) -> StoreResult<Option<User>> {
        let mut users = self.users.write().await;
        if !users.contains_key(&user.id) {
            return Ok(None);
        }
        users.insert(user.id.clone(), user.clone());
        Ok(Some(user.clone()))
    }

    async fn delete_user(&self, id: &str) -> StoreResult<()> {
        self.users.write().await.remove(id);
        Ok(())
    }

    async fn count_users(&self) -> StoreResult<u64> {
        Ok(self.users.read().await.len() as u64)
    }

    async fn search_users(&self, keyword: &str) -> StoreResult<Vec<User>> {
        let keyword = keyword.to_lowercase();
        let mut users: Vec<User> = self
            .users
            .read()
            .await
            .values()
            .filter(|u| {
                u.username.to_lowercase().contains(&keyword)
                    || u.full_name.to_lowercase().contains(&keyword)
                    || u.email.to_lowercase().contains(&keyword)
            })
            .cloned()
            .collect();
        users.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(users)
    }

    // ========================================================================
    // Category operations
    // ========================================================================

    async fn create_category(&self, category: &Category) -> StoreResult<Category> {
        let mut category = category.clone();
        if category.id.is_empty() {
            let next = self.categories.read().await.len() as u64 + 1;
            category.id = format!("CAT{:03}", next);
        }
        category.ticket_count = 0;
        self.categories
            .write()
            .await
            .insert(category.id.clone(), category.clone());
        Ok(category)
    }

    async fn get_category(&self, id: &str) -> StoreResult<Option<Category>> {
        let category = self.categories.read().await.get(id).cloned();
        match category {
            Some(mut c) => {
                c.ticket_count = self.category_ticket_count(id).await;
                Ok(Some(c))
            }
            None => Ok(None),
        }
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let mut categories: Vec<Category> =
            self.categories.read().await.values().cloned().collect();
        categories.sort_by(|a, b| a.id.cmp(&b.id));
        for category in &mut categories {
            category.ticket_count = self.category_ticket_count(&category.id).await;
        }
        Ok(categories)
    }

    async fn update_category(&self, category: &Category) -> StoreResult<Option<Category>> {
        {
            let mut categories = self.categories.write().await;
            let Some(existing) = categories.get_mut(&category.id) else {
                return Ok(None);
            };
            existing.name = category.name.clone();
            existing.description = category.description.clone();
            existing.color = category.color.clone();
        }
        self.get_category(&category.id).await
    }

    async fn delete_category(&self, id: &str) -> StoreResult<()> {
        self.categories.write().await.remove(id);
        Ok(())
    }

    async fn count_categories(&self) -> StoreResult<u64> {
        Ok(self.categories.read().await.len() as u64)
    }

    // ========================================================================
    // Knowledge-base articles
    // ========================================================================

    async fn count_articles(&self) -> StoreResult<u64> {
        Ok(*self.article_count.read().await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{test_agent, test_category, test_ticket, test_ticket_titled};

    #[tokio::test]
    async fn test_ticket_round_trip_preserves_fields() {
        let store = MockGraphStore::new();

        let mut ticket = test_ticket();
        ticket.priority = Priority::High;
        ticket.assigned_to = "USR-TEST0002".to_string();
        ticket.due_date = Some(Utc::now() + chrono::Duration::hours(8));

        let created = store.create_ticket(&ticket).await.unwrap();
        let found = store.get_ticket(&created.id).await.unwrap().unwrap();

        assert_eq!(found.title, ticket.title);
        assert_eq!(found.description, ticket.description);
        assert_eq!(found.status, ticket.status);
        assert_eq!(found.priority, Priority::High);
        assert_eq!(found.category_id, ticket.category_id);
        assert_eq!(found.assigned_to, "USR-TEST0002");
        assert_eq!(found.created_by, ticket.created_by);
        assert_eq!(found.due_date, ticket.due_date);
        assert_eq!(found.resolved_at, None);
    }

    #[tokio::test]
    async fn test_create_assigns_id_when_absent() {
        let store = MockGraphStore::new();

        let mut ticket = test_ticket();
        ticket.id = String::new();
        let created = store.create_ticket(&ticket).await.unwrap();
        assert!(created.id.starts_with("TKT-"));

        let mut user = test_agent("idless");
        user.id = String::new();
        let created = store.create_user(&user).await.unwrap();
        assert!(created.id.starts_with("USR-"));
    }

    #[tokio::test]
    async fn test_delete_ticket_is_idempotent() {
        let store = MockGraphStore::new().with_ticket(test_ticket());
        let id = store.list_tickets().await.unwrap()[0].id.clone();

        store.delete_ticket(&id).await.unwrap();
        assert!(store.get_ticket(&id).await.unwrap().is_none());

        // Second delete: no error, no state change
        store.delete_ticket(&id).await.unwrap();
        assert_eq!(store.count_tickets().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_update_unknown_ticket_returns_none() {
        let store = MockGraphStore::new();
        let ticket = test_ticket();
        assert!(store.update_ticket(&ticket).await.unwrap().is_none());
        // Update never creates
        assert_eq!(store.count_tickets().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_save_creates_then_updates() {
        let store = MockGraphStore::new();

        let ticket = test_ticket();
        let saved = store.save_ticket(&ticket).await.unwrap();
        assert_eq!(store.count_tickets().await.unwrap(), 1);

        let mut changed = saved;
        changed.status = TicketStatus::Resolved;
        store.save_ticket(&changed).await.unwrap();

        assert_eq!(store.count_tickets().await.unwrap(), 1);
        let found = store.get_ticket(&changed.id).await.unwrap().unwrap();
        assert_eq!(found.status, TicketStatus::Resolved);
    }

    #[tokio::test]
    async fn test_count_consistency_across_statuses() {
        let mut open_1 = test_ticket_titled("First open");
        open_1.id = "TKT-1".to_string();
        let mut open_2 = test_ticket_titled("Second open");
        open_2.id = "TKT-2".to_string();
        let mut resolved = test_ticket_titled("Already resolved");
        resolved.id = "TKT-3".to_string();
        resolved.status = TicketStatus::Resolved;
        let mut closed = test_ticket_titled("Long closed");
        closed.id = "TKT-4".to_string();
        closed.status = TicketStatus::Closed;

        let store = MockGraphStore::new()
            .with_ticket(open_1)
            .with_ticket(open_2)
            .with_ticket(resolved)
            .with_ticket(closed);

        let total = store.count_tickets().await.unwrap();
        let mut sum = 0;
        for status in TicketStatus::ALL {
            sum += store.count_tickets_by_status(status).await.unwrap();
        }
        assert_eq!(total, 4);
        assert_eq!(sum, total);
    }

    #[tokio::test]
    async fn test_search_matches_title_and_description_only() {
        let mut titled = test_ticket_titled("Bug in export");
        titled.id = "TKT-1".to_string();
        titled.description = "Spreadsheet comes out empty".to_string();

        let mut described = test_ticket_titled("Export is empty");
        described.id = "TKT-2".to_string();
        described.description = "Looks like the same BUG as last week".to_string();

        let mut unrelated = test_ticket_titled("Password reset");
        unrelated.id = "TKT-3".to_string();
        unrelated.description = "Reset email never arrives".to_string();

        let store = MockGraphStore::new()
            .with_ticket(titled)
            .with_ticket(described)
            .with_ticket(unrelated);

        let hits = store.search_tickets("bug").await.unwrap();
        let mut ids: Vec<&str> = hits.iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        assert_eq!(ids, ["TKT-1", "TKT-2"]);
    }

    #[tokio::test]
    async fn test_list_tickets_newest_first() {
        let base = Utc::now();
        let mut older = test_ticket_titled("Older");
        older.id = "TKT-1".to_string();
        older.created_at = base;
        let mut newer = test_ticket_titled("Newer");
        newer.id = "TKT-2".to_string();
        newer.created_at = base + chrono::Duration::minutes(5);

        let store = MockGraphStore::new().with_ticket(older).with_ticket(newer);

        let tickets = store.list_tickets().await.unwrap();
        assert_eq!(tickets[0].title, "Newer");
        assert_eq!(tickets[1].title, "Older");
    }

    #[tokio::test]
    async fn test_user_lookup_by_username_and_email() {
        let user = test_agent("oncall");
        let store = MockGraphStore::new().with_user(user.clone());

        let by_username = store.get_user_by_username("oncall").await.unwrap();
        assert_eq!(by_username.map(|u| u.id), Some(user.id.clone()));

        let by_email = store
            .get_user_by_email("oncall@example.com")
            .await
            .unwrap();
        assert_eq!(by_email.map(|u| u.id), Some(user.id));

        assert!(store
            .get_user_by_username("nobody")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_category_numbering_and_live_count() {
        let store = MockGraphStore::new().with_category(test_category("CAT001", "Technical"));

        // Numbering continues from the current count
        let created = store
            .create_category(&Category::new("Billing", "Payment issues", "#ff7f0e"))
            .await
            .unwrap();
        assert_eq!(created.id, "CAT002");

        // A ticket filed under the category appears in its live count
        let mut ticket = test_ticket();
        ticket.category_id = "CAT002".to_string();
        store.create_ticket(&ticket).await.unwrap();

        let found = store.get_category("CAT002").await.unwrap().unwrap();
        assert_eq!(found.ticket_count, 1);

        let listed = store.list_categories().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, "CAT001");
        assert_eq!(listed[0].ticket_count, 0);
        assert_eq!(listed[1].ticket_count, 1);
    }

    #[tokio::test]
    async fn test_update_category_keeps_live_count() {
        let store = MockGraphStore::new().with_category(test_category("CAT001", "Technical"));

        let mut ticket = test_ticket();
        ticket.category_id = "CAT001".to_string();
        store.create_ticket(&ticket).await.unwrap();

        let mut renamed = test_category("CAT001", "Hardware");
        renamed.description = "Hardware faults".to_string();
        let updated = store.update_category(&renamed).await.unwrap().unwrap();
        assert_eq!(updated.name, "Hardware");
        assert_eq!(updated.ticket_count, 1);

        assert!(store
            .update_category(&test_category("CAT999", "Ghost"))
            .await
            .unwrap()
            .is_none());
    }
}
