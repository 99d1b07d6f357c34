//! GraphStore trait definition
//!
//! Defines the abstract interface for all graph store operations.
//! This trait mirrors all public async methods of `Neo4jClient`,
//! enabling testing with mock implementations and future backend swaps.

use crate::error::StoreResult;
use crate::neo4j::models::*;
use async_trait::async_trait;

/// Abstract interface for all graph store operations.
///
/// Every public async method of `Neo4jClient` (excluding `new` and the
/// private helpers) is represented here. Single-entity lookups return
/// `Ok(None)` for not-found; errors are reserved for store failures.
#[async_trait]
pub trait GraphStore: Send + Sync {
    // ========================================================================
    // Ticket operations
    // ========================================================================

    /// Create a new ticket, assigning an id when the entity carries none
    async fn create_ticket(&self, ticket: &Ticket) -> StoreResult<Ticket>;

    /// Get a ticket by id
    async fn get_ticket(&self, id: &str) -> StoreResult<Option<Ticket>>;

    /// List all tickets, newest first
    async fn list_tickets(&self) -> StoreResult<Vec<Ticket>>;

    /// List tickets in a given status, newest first
    async fn list_tickets_by_status(&self, status: TicketStatus) -> StoreResult<Vec<Ticket>>;

    /// List tickets of a given priority, newest first
    async fn list_tickets_by_priority(&self, priority: Priority) -> StoreResult<Vec<Ticket>>;

    /// List tickets assigned to a given user, newest first
    async fn list_tickets_by_assignee(&self, assignee: &str) -> StoreResult<Vec<Ticket>>;

    /// Overwrite an existing ticket, refreshing its `updated_at`
    async fn update_ticket(&self, ticket: &Ticket) -> StoreResult<Option<Ticket>>;

    /// Create the ticket if its id is unknown, otherwise update it
    async fn save_ticket(&self, ticket: &Ticket) -> StoreResult<Ticket>;

    /// Delete a ticket; unknown ids are a no-op
    async fn delete_ticket(&self, id: &str) -> StoreResult<()>;

    /// Count all tickets
    async fn count_tickets(&self) -> StoreResult<u64>;

    /// Count tickets in a given status
    async fn count_tickets_by_status(&self, status: TicketStatus) -> StoreResult<u64>;

    /// Count tickets of a given priority
    async fn count_tickets_by_priority(&self, priority: Priority) -> StoreResult<u64>;

    /// Case-insensitive substring search over titles and descriptions
    async fn search_tickets(&self, keyword: &str) -> StoreResult<Vec<Ticket>>;

    /// Count tickets that carry an SLA due date
    async fn count_tickets_with_due_date(&self) -> StoreResult<u64>;

    /// Count tickets resolved at or before their SLA due date
    async fn count_tickets_resolved_in_sla(&self) -> StoreResult<u64>;

    // ========================================================================
    // User operations
    // ========================================================================

    /// Create a new user, assigning an id when the entity carries none
    async fn create_user(&self, user: &User) -> StoreResult<User>;

    /// Get a user by id
    async fn get_user(&self, id: &str) -> StoreResult<Option<User>>;

    /// Get a user by unique username
    async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>>;

    /// Get a user by unique email
    async fn get_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    /// List all users, newest first
    async fn list_users(&self) -> StoreResult<Vec<User>>;

    /// Overwrite an existing user
    async fn update_user(&self, user: &User) -> StoreResult<Option<User>>;

    /// Delete a user; unknown ids are a no-op
    async fn delete_user(&self, id: &str) -> StoreResult<()>;

    /// Count all users
    async fn count_users(&self) -> StoreResult<u64>;

    /// Case-insensitive substring search over usernames, full names, emails
    async fn search_users(&self, keyword: &str) -> StoreResult<Vec<User>>;

    // ========================================================================
    // Category operations
    // ========================================================================

    /// Create a category, numbering it when the entity carries no id
    async fn create_category(&self, category: &Category) -> StoreResult<Category>;

    /// Get a category by id, ticket count computed live
    async fn get_category(&self, id: &str) -> StoreResult<Option<Category>>;

    /// List all categories ordered by id, ticket counts computed live
    async fn list_categories(&self) -> StoreResult<Vec<Category>>;

    /// Update a category's name, description, and color
    async fn update_category(&self, category: &Category) -> StoreResult<Option<Category>>;

    /// Delete a category; unknown ids are a no-op
    async fn delete_category(&self, id: &str) -> StoreResult<()>;

    /// Count all categories
    async fn count_categories(&self) -> StoreResult<u64>;

    // ========================================================================
    // Knowledge-base articles
    // ========================================================================

    /// Count knowledge-base articles (for search statistics)
    async fn count_articles(&self) -> StoreResult<u64>;
}
