//! `GraphStore` implementation for `Neo4jClient`.
//!
//! Every method simply delegates to the corresponding inherent method on `Neo4jClient`.

use async_trait::async_trait;

use super::client::Neo4jClient;
use super::models::*;
use super::traits::GraphStore;
use crate::error::StoreResult;

#[async_trait]
impl GraphStore for Neo4jClient {
    // ========================================================================
    // Ticket operations
    // ========================================================================

    async fn create_ticket(&self, ticket: &Ticket) -> StoreResult<Ticket> {
        self.create_ticket(ticket).await
    }

    async fn get_ticket(&self, id: &str) -> StoreResult<Option<Ticket>> {
        self.get_ticket(id).await
    }

    async fn list_tickets(&self) -> StoreResult<Vec<Ticket>> {
        self.list_tickets().await
    }

    async fn list_tickets_by_status(&self, status: TicketStatus) -> StoreResult<Vec<Ticket>> {
        self.list_tickets_by_status(status).await
    }

    async fn list_tickets_by_priority(&self, priority: Priority) -> StoreResult<Vec<Ticket>> {
        self.list_tickets_by_priority(priority).await
    }

    async fn list_tickets_by_assignee(&self, assignee: &str) -> StoreResult<Vec<Ticket>> {
        self.list_tickets_by_assignee(assignee).await
    }

    async fn update_ticket(&self, ticket: &Ticket) -> StoreResult<Option<Ticket>> {
        self.update_ticket(ticket).await
    }

    async fn save_ticket(&self, ticket: &Ticket) -> StoreResult<Ticket> {
        self.save_ticket(ticket).await
    }

    async fn delete_ticket(&self, id: &str) -> StoreResult<()> {
        self.delete_ticket(id).await
    }

    async fn count_tickets(&self) -> StoreResult<u64> {
        self.count_tickets().await
    }

    async fn count_tickets_by_status(&self, status: TicketStatus) -> StoreResult<u64> {
        self.count_tickets_by_status(status).await
    }

    async fn count_tickets_by_priority(&self, priority: Priority) -> StoreResult<u64> {
        self.count_tickets_by_priority(priority).await
    }

    async fn search_tickets(&self, keyword: &str) -> StoreResult<Vec<Ticket>> {
        self.search_tickets(keyword).await
    }

    async fn count_tickets_with_due_date(&self) -> StoreResult<u64> {
        self.count_tickets_with_due_date().await
    }

    async fn count_tickets_resolved_in_sla(&self) -> StoreResult<u64> {
        self.count_tickets_resolved_in_sla().await
    }

    // ========================================================================
    // User operations
    // ========================================================================

    async fn create_user(&self, user: &User) -> StoreResult<User> {
        self.create_user(user).await
    }

    async fn get_user(&self, id: &str) -> StoreResult<Option<User>> {
        self.get_user(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        self.get_user_by_username(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        self.get_user_by_email(email).await
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        self.list_users().await
    }

    async fn update_user(&self, user: &User) -> StoreResult<Option<User>> {
        self.update_user(user).await
    }

    async fn delete_user(&self, id: &str) -> StoreResult<()> {
        self.delete_user(id).await
    }

    async fn count_users(&self) -> StoreResult<u64> {
        self.count_users().await
    }

    async fn search_users(&self, keyword: &str) -> StoreResult<Vec<User>> {
        self.search_users(keyword).await
    }

    // ========================================================================
    // Category operations
    // ========================================================================

    async fn create_category(&self, category: &Category) -> StoreResult<Category> {
        self.create_category(category).await
    }

    async fn get_category(&self, id: &str) -> StoreResult<Option<Category>> {
        self.get_category(id).await
    }

    async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        self.list_categories().await
    }

    async fn update_category(&self, category: &Category) -> StoreResult<Option<Category>> {
        self.update_category(category).await
    }

    async fn delete_category(&self, id: &str) -> StoreResult<()> {
        self.delete_category(id).await
    }

    async fn count_categories(&self) -> StoreResult<u64> {
        self.count_categories().await
    }

    // ========================================================================
    // Knowledge-base articles
    // ========================================================================

    async fn count_articles(&self) -> StoreResult<u64> {
        self.count_articles().await
    }
}
