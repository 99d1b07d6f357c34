//! Graph node models for the support-ticket domain
//!
//! Storage property names are part of the persisted-state contract: camelCase
//! on the node (`assignedTo`, `createdAt`, ...), enum values as
//! SCREAMING_SNAKE strings. Entities returned by the repositories are
//! transient value copies; the graph store owns the persisted state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Ticket
// ============================================================================

/// A support ticket tracked in the graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    /// `TKT-` + 8 uppercase hex chars; immutable after creation
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: Priority,
    /// Canonical category reference (stored under the `category` property)
    pub category_id: String,
    /// User id of the assignee; empty until assigned
    pub assigned_to: String,
    /// User id of the reporter
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// SLA deadline, when one was agreed
    pub due_date: Option<DateTime<Utc>>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl Ticket {
    /// Create a ticket with a fresh id and both timestamps set to now.
    pub fn new(title: &str, description: &str, category_id: &str, created_by: &str) -> Self {
        let now = Utc::now();
        Self {
            id: generate_ticket_id(),
            title: title.to_string(),
            description: description.to_string(),
            status: TicketStatus::default(),
            priority: Priority::default(),
            category_id: category_id.to_string(),
            assigned_to: String::new(),
            created_by: created_by.to_string(),
            created_at: now,
            updated_at: now,
            due_date: None,
            resolved_at: None,
        }
    }
}

/// Lifecycle state of a ticket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl Default for TicketStatus {
    fn default() -> Self {
        Self::Open
    }
}

impl TicketStatus {
    /// Every status, in lifecycle order. Aggregations iterate this so zero
    /// counts still appear.
    pub const ALL: [TicketStatus; 4] = [
        Self::Open,
        Self::InProgress,
        Self::Resolved,
        Self::Closed,
    ];

    /// Stored string form (`IN_PROGRESS` etc.)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::InProgress => "IN_PROGRESS",
            Self::Resolved => "RESOLVED",
            Self::Closed => "CLOSED",
        }
    }

    /// Parse a stored status, falling back to the default for unknown values.
    pub fn parse(s: &str) -> Self {
        match s {
            "OPEN" => Self::Open,
            "IN_PROGRESS" => Self::InProgress,
            "RESOLVED" => Self::Resolved,
            "CLOSED" => Self::Closed,
            _ => Self::default(),
        }
    }
}

/// Urgency of a ticket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Default for Priority {
    fn default() -> Self {
        Self::Medium
    }
}

impl Priority {
    pub const ALL: [Priority; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }

    /// Parse a stored priority, falling back to the default for unknown values.
    pub fn parse(s: &str) -> Self {
        match s {
            "LOW" => Self::Low,
            "MEDIUM" => Self::Medium,
            "HIGH" => Self::High,
            "CRITICAL" => Self::Critical,
            _ => Self::default(),
        }
    }
}

// ============================================================================
// User
// ============================================================================

/// An account that reports, works, or administers tickets.
///
/// `Debug` masks the stored credential so users can be logged safely.
#[derive(Clone, Serialize, Deserialize)]
pub struct User {
    /// `USR-` + 8 uppercase hex chars
    pub id: String,
    /// Unique login name
    pub username: String,
    /// Unique contact address
    pub email: String,
    /// Stored credential; never logged in plaintext
    pub password: String,
    pub full_name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a user with a fresh id and `created_at` set to now.
    pub fn new(username: &str, email: &str, password: &str, full_name: &str, role: UserRole) -> Self {
        Self {
            id: generate_user_id(),
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            full_name: full_name.to_string(),
            role,
            created_at: Utc::now(),
        }
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("full_name", &self.full_name)
            .field("role", &self.role)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Access level of a user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    Agent,
    Customer,
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Customer
    }
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Agent => "AGENT",
            Self::Customer => "CUSTOMER",
        }
    }

    /// Parse a stored role, falling back to the default for unknown values.
    pub fn parse(s: &str) -> Self {
        match s {
            "ADMIN" => Self::Admin,
            "AGENT" => Self::Agent,
            "CUSTOMER" => Self::Customer,
            _ => Self::default(),
        }
    }
}

// ============================================================================
// Category
// ============================================================================

/// A ticket category (`CAT001`, `CAT002`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// `CAT` + 3-digit zero-padded sequence; assigned at create when empty
    pub id: String,
    pub name: String,
    pub description: String,
    /// Display color, hex RGB (`#RRGGBB`)
    pub color: String,
    /// Derived: number of tickets currently referencing this category.
    /// Computed at read time; a held copy can go stale.
    #[serde(default)]
    pub ticket_count: u64,
}

impl Category {
    /// Create a category with an unassigned id (the repository numbers it).
    pub fn new(name: &str, description: &str, color: &str) -> Self {
        Self {
            id: String::new(),
            name: name.to_string(),
            description: description.to_string(),
            color: color.to_string(),
            ticket_count: 0,
        }
    }
}

// ============================================================================
// Id generation
// ============================================================================

/// `TKT-` + first 8 hex chars of a v4 UUID, uppercased.
pub fn generate_ticket_id() -> String {
    format!("TKT-{}", short_uuid())
}

/// `USR-` + first 8 hex chars of a v4 UUID, uppercased.
pub fn generate_user_id() -> String {
    format!("USR-{}", short_uuid())
}

fn short_uuid() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_uppercase()
}
