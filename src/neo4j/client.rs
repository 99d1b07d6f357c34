//! Neo4j client for the support-desk graph
//!
//! One repository operation is one awaited query against the shared pooled
//! driver (`save_ticket` is the documented two-round-trip exception). All
//! Cypher lives here, one parameterized template per operation.
//!
//! Storage conventions: required timestamps are written as native temporals
//! via `datetime($param)` with RFC3339 parameters; optional dates (`dueDate`,
//! `resolvedAt`) are stored as RFC3339 strings with `""` meaning absent, so a
//! single static `SET` template can both set and clear them.

use super::models::*;
use crate::error::{StoreError, StoreResult};
use chrono::Utc;
use neo4rs::{query, ConfigBuilder, Graph};
use std::sync::Arc;

/// Connection pool size shared by every repository call.
const MAX_CONNECTIONS: usize = 8;
/// Rows fetched per round trip when streaming list results.
const FETCH_SIZE: usize = 200;

/// Client for Neo4j operations
pub struct Neo4jClient {
    graph: Arc<Graph>,
}

impl Neo4jClient {
    /// Connect to Neo4j, verify the store responds, and apply the schema.
    ///
    /// `Graph::connect` only builds a lazy pool; the `RETURN 1` ping forces a
    /// real bolt handshake so an unreachable store surfaces here as
    /// [`StoreError::Unavailable`] instead of failing the first repository
    /// call.
    pub async fn new(uri: &str, user: &str, password: &str) -> StoreResult<Self> {
        let config = ConfigBuilder::default()
            .uri(uri)
            .user(user)
            .password(password)
            .db("neo4j")
            .max_connections(MAX_CONNECTIONS)
            .fetch_size(FETCH_SIZE)
            .build()
            .map_err(StoreError::Unavailable)?;

        let graph = Graph::connect(config)
            .await
            .map_err(StoreError::Unavailable)?;

        graph
            .run(query("RETURN 1"))
            .await
            .map_err(StoreError::Unavailable)?;

        let client = Self {
            graph: Arc::new(graph),
        };

        client.init_schema().await?;

        Ok(client)
    }

    /// Initialize the graph schema with constraints and indexes
    async fn init_schema(&self) -> StoreResult<()> {
        let constraints = vec![
            "CREATE CONSTRAINT ticket_id IF NOT EXISTS FOR (t:Ticket) REQUIRE t.id IS UNIQUE",
            "CREATE CONSTRAINT user_id IF NOT EXISTS FOR (u:User) REQUIRE u.id IS UNIQUE",
            "CREATE CONSTRAINT user_username IF NOT EXISTS FOR (u:User) REQUIRE u.username IS UNIQUE",
            "CREATE CONSTRAINT user_email IF NOT EXISTS FOR (u:User) REQUIRE u.email IS UNIQUE",
            "CREATE CONSTRAINT category_id IF NOT EXISTS FOR (c:Category) REQUIRE c.id IS UNIQUE",
            "CREATE CONSTRAINT article_id IF NOT EXISTS FOR (a:KBArticle) REQUIRE a.id IS UNIQUE",
        ];

        let indexes = vec![
            "CREATE INDEX ticket_status IF NOT EXISTS FOR (t:Ticket) ON (t.status)",
            "CREATE INDEX ticket_priority IF NOT EXISTS FOR (t:Ticket) ON (t.priority)",
            "CREATE INDEX ticket_assignee IF NOT EXISTS FOR (t:Ticket) ON (t.assignedTo)",
            "CREATE INDEX ticket_category IF NOT EXISTS FOR (t:Ticket) ON (t.category)",
            "CREATE INDEX ticket_created IF NOT EXISTS FOR (t:Ticket) ON (t.createdAt)",
            "CREATE INDEX user_role IF NOT EXISTS FOR (u:User) ON (u.role)",
        ];

        for constraint in constraints {
            if let Err(e) = self.graph.run(query(constraint)).await {
                tracing::warn!("Constraint may already exist: {}", e);
            }
        }

        for index in indexes {
            if let Err(e) = self.graph.run(query(index)).await {
                tracing::warn!("Index may already exist: {}", e);
            }
        }

        Ok(())
    }

    // ========================================================================
    // Ticket operations
    // ========================================================================

    /// Create a new ticket, assigning an id when the entity carries none.
    ///
    /// Returns the persisted ticket so callers see the assigned id.
    pub async fn create_ticket(&self, ticket: &Ticket) -> StoreResult<Ticket> {
        let mut ticket = ticket.clone();
        if ticket.id.is_empty() {
            ticket.id = generate_ticket_id();
        }

        let q = query(
            r#"
            CREATE (t:Ticket {
                id: $id,
                title: $title,
                description: $description,
                status: $status,
                priority: $priority,
                category: $category,
                assignedTo: $assigned_to,
                createdBy: $created_by,
                createdAt: datetime($created_at),
                updatedAt: datetime($updated_at),
                dueDate: $due_date,
                resolvedAt: $resolved_at
            })
            "#,
        )
        .param("id", ticket.id.clone())
        .param("title", ticket.title.clone())
        .param("description", ticket.description.clone())
        .param("status", ticket.status.as_str())
        .param("priority", ticket.priority.as_str())
        .param("category", ticket.category_id.clone())
        .param("assigned_to", ticket.assigned_to.clone())
        .param("created_by", ticket.created_by.clone())
        .param("created_at", ticket.created_at.to_rfc3339())
        .param("updated_at", ticket.updated_at.to_rfc3339())
        .param(
            "due_date",
            ticket.due_date.map(|d| d.to_rfc3339()).unwrap_or_default(),
        )
        .param(
            "resolved_at",
            ticket
                .resolved_at
                .map(|d| d.to_rfc3339())
                .unwrap_or_default(),
        );

        self.graph.run(q).await?;
        Ok(ticket)
    }

    /// Get a ticket by id
    pub async fn get_ticket(&self, id: &str) -> StoreResult<Option<Ticket>> {
        let q = query(
            r#"
            MATCH (t:Ticket {id: $id})
            RETURN t
            "#,
        )
        .param("id", id);

        let mut result = self.graph.execute(q).await?;
        if let Some(row) = result.next().await? {
            let node: neo4rs::Node = row
                .get("t")
                .map_err(|_| StoreError::malformed("Ticket", "t"))?;
            Ok(Some(self.node_to_ticket(&node)?))
        } else {
            Ok(None)
        }
    }

    /// List all tickets, newest first
    pub async fn list_tickets(&self) -> StoreResult<Vec<Ticket>> {
        let q = query(
            r#"
            MATCH (t:Ticket)
            RETURN t
            ORDER BY t.createdAt DESC
            "#,
        );

        let mut result = self.graph.execute(q).await?;
        let mut tickets = Vec::new();

        while let Some(row) = result.next().await? {
            let node: neo4rs::Node = row
                .get("t")
                .map_err(|_| StoreError::malformed("Ticket", "t"))?;
            tickets.push(self.node_to_ticket(&node)?);
        }

        Ok(tickets)
    }

    /// List tickets in a given status, newest first
    pub async fn list_tickets_by_status(&self, status: TicketStatus) -> StoreResult<Vec<Ticket>> {
        let q = query(
            r#"
            MATCH (t:Ticket {status: $status})
            RETURN t
            ORDER BY t.createdAt DESC
            "#,
        )
        .param("status", status.as_str());

        let mut result = self.graph.execute(q).await?;
        let mut tickets = Vec::new();

        while let Some(row) = result.next().await? {
            let node: neo4rs::Node = row
                .get("t")
                .map_err(|_| StoreError::malformed("Ticket", "t"))?;
            tickets.push(self.node_to_ticket(&node)?);
        }

        Ok(tickets)
    }

    /// List tickets of a given priority, newest first
    pub async fn list_tickets_by_priority(&self, priority: Priority) -> StoreResult<Vec<Ticket>> {
        let q = query(
            r#"
            MATCH (t:Ticket {priority: $priority})
            RETURN t
            ORDER BY t.createdAt DESC
            "#,
        )
        .param("priority", priority.as_str());

        let mut result = self.graph.execute(q).await?;
        let mut tickets = Vec::new();

        while let Some(row) = result.next().await? {
            let node: neo4rs::Node = row
                .get("t")
                .map_err(|_| StoreError::malformed("Ticket", "t"))?;
            tickets.push(self.node_to_ticket(&node)?);
        }

        Ok(tickets)
    }

    /// List tickets assigned to a given user, newest first
    pub async fn list_tickets_by_assignee(&self, assignee: &str) -> StoreResult<Vec<Ticket>> {
        let q = query(
            r#"
            MATCH (t:Ticket {assignedTo: $assignee})
            RETURN t
            ORDER BY t.createdAt DESC
            "#,
        )
        .param("assignee", assignee);

        let mut result = self.graph.execute(q).await?;
        let mut tickets = Vec::new();

        while let Some(row) = result.next().await? {
            let node: neo4rs::Node = row
                .get("t")
                .map_err(|_| StoreError::malformed("Ticket", "t"))?;
            tickets.push(self.node_to_ticket(&node)?);
        }

        Ok(tickets)
    }

    /// Overwrite every settable field of an existing ticket.
    ///
    /// `updated_at` is refreshed before persisting; `created_at` and `id` are
    /// never touched. Returns `Ok(None)` when no ticket carries the id — no
    /// node is created in that case.
    pub async fn update_ticket(&self, ticket: &Ticket) -> StoreResult<Option<Ticket>> {
        let mut ticket = ticket.clone();
        ticket.updated_at = Utc::now();

        let q = query(
            r#"
            MATCH (t:Ticket {id: $id})
            SET t.title = $title,
                t.description = $description,
                t.status = $status,
                t.priority = $priority,
                t.category = $category,
                t.assignedTo = $assigned_to,
                t.createdBy = $created_by,
                t.updatedAt = datetime($updated_at),
                t.dueDate = $due_date,
                t.resolvedAt = $resolved_at
            RETURN t
            "#,
        )
        .param("id", ticket.id.clone())
        .param("title", ticket.title.clone())
        .param("description", ticket.description.clone())
        .param("status", ticket.status.as_str())
        .param("priority", ticket.priority.as_str())
        .param("category", ticket.category_id.clone())
        .param("assigned_to", ticket.assigned_to.clone())
        .param("created_by", ticket.created_by.clone())
        .param("updated_at", ticket.updated_at.to_rfc3339())
        .param(
            "due_date",
            ticket.due_date.map(|d| d.to_rfc3339()).unwrap_or_default(),
        )
        .param(
            "resolved_at",
            ticket
                .resolved_at
                .map(|d| d.to_rfc3339())
                .unwrap_or_default(),
        );

        let mut result = self.graph.execute(q).await?;
        if let Some(row) = result.next().await? {
            let node: neo4rs::Node = row
                .get("t")
                .map_err(|_| StoreError::malformed("Ticket", "t"))?;
            Ok(Some(self.node_to_ticket(&node)?))
        } else {
            tracing::warn!("Update of unknown ticket {}", ticket.id);
            Ok(None)
        }
    }

    /// Create the ticket if its id is unknown, otherwise update it.
    ///
    /// The lookup and the write are two separate round trips, not a
    /// transaction; concurrent saves of the same new id are last-write-wins.
    pub async fn save_ticket(&self, ticket: &Ticket) -> StoreResult<Ticket> {
        if ticket.id.is_empty() {
            return self.create_ticket(ticket).await;
        }

        match self.get_ticket(&ticket.id).await? {
            Some(_) => match self.update_ticket(ticket).await? {
                Some(saved) => Ok(saved),
                // Deleted between the lookup and the update; recreate.
                None => self.create_ticket(ticket).await,
            },
            None => self.create_ticket(ticket).await,
        }
    }

    /// Delete a ticket. Deleting an unknown id is a no-op.
    pub async fn delete_ticket(&self, id: &str) -> StoreResult<()> {
        let q = query(
            r#"
            MATCH (t:Ticket {id: $id})
            DETACH DELETE t
            "#,
        )
        .param("id", id);

        self.graph.run(q).await?;
        Ok(())
    }

    /// Count all tickets
    pub async fn count_tickets(&self) -> StoreResult<u64> {
        let q = query("MATCH (t:Ticket) RETURN count(t) AS count");

        let mut result = self.graph.execute(q).await?;
        if let Some(row) = result.next().await? {
            let count: i64 = row.get("count").unwrap_or(0);
            Ok(count.max(0) as u64)
        } else {
            Ok(0)
        }
    }

    /// Count tickets in a given status
    pub async fn count_tickets_by_status(&self, status: TicketStatus) -> StoreResult<u64> {
        let q = query("MATCH (t:Ticket {status: $status}) RETURN count(t) AS count")
            .param("status", status.as_str());

        let mut result = self.graph.execute(q).await?;
        if let Some(row) = result.next().await? {
            let count: i64 = row.get("count").unwrap_or(0);
            Ok(count.max(0) as u64)
        } else {
            Ok(0)
        }
    }

    /// Count tickets of a given priority
    pub async fn count_tickets_by_priority(&self, priority: Priority) -> StoreResult<u64> {
        let q = query("MATCH (t:Ticket {priority: $priority}) RETURN count(t) AS count")
            .param("priority", priority.as_str());

        let mut result = self.graph.execute(q).await?;
        if let Some(row) = result.next().await? {
            let count: i64 = row.get("count").unwrap_or(0);
            Ok(count.max(0) as u64)
        } else {
            Ok(0)
        }
    }

    /// Case-insensitive substring search over ticket titles and descriptions,
    /// newest first. An empty keyword matches every ticket.
    pub async fn search_tickets(&self, keyword: &str) -> StoreResult<Vec<Ticket>> {
        let q = query(
            r#"
            MATCH (t:Ticket)
            WHERE toLower(t.title) CONTAINS toLower($keyword)
               OR toLower(t.description) CONTAINS toLower($keyword)
            RETURN t
            ORDER BY t.createdAt DESC
            "#,
        )
        .param("keyword", keyword);

        let mut result = self.graph.execute(q).await?;
        let mut tickets = Vec::new();

        while let Some(row) = result.next().await? {
            let node: neo4rs::Node = row
                .get("t")
                .map_err(|_| StoreError::malformed("Ticket", "t"))?;
            tickets.push(self.node_to_ticket(&node)?);
        }

        Ok(tickets)
    }

    /// Count tickets that carry an SLA due date.
    ///
    /// Optional dates are stored as RFC3339 strings with `""` meaning absent,
    /// so both the missing-property and the empty-string forms are excluded.
    pub async fn count_tickets_with_due_date(&self) -> StoreResult<u64> {
        let q = query(
            r#"
            MATCH (t:Ticket)
            WHERE t.dueDate IS NOT NULL AND t.dueDate <> ''
            RETURN count(t) AS count
            "#,
        );

        let mut result = self.graph.execute(q).await?;
        if let Some(row) = result.next().await? {
            let count: i64 = row.get("count").unwrap_or(0);
            Ok(count.max(0) as u64)
        } else {
            Ok(0)
        }
    }

    /// Count tickets resolved at or before their SLA due date.
    ///
    /// Both dates are RFC3339 strings with a fixed `+00:00` offset written by
    /// this client, so lexicographic comparison matches temporal order.
    pub async fn count_tickets_resolved_in_sla(&self) -> StoreResult<u64> {
        let q = query(
            r#"
            MATCH (t:Ticket)
            WHERE t.dueDate IS NOT NULL AND t.dueDate <> ''
              AND t.resolvedAt IS NOT NULL AND t.resolvedAt <> ''
              AND t.resolvedAt <= t.dueDate
            RETURN count(t) AS count
            "#,
        );

        let mut result = self.graph.execute(q).await?;
        if let Some(row) = result.next().await? {
            let count: i64 = row.get("count").unwrap_or(0);
            Ok(count.max(0) as u64)
        } else {
            Ok(0)
        }
    }

    // ========================================================================
    // User operations
    // ========================================================================

    /// Create a new user, assigning an id when the entity carries none.
    pub async fn create_user(&self, user: &User) -> StoreResult<User> {
        let mut user = user.clone();
        if user.id.is_empty() {
            user.id = generate_user_id();
        }

        let q = query(
            r#"
            CREATE (u:User {
                id: $id,
                username: $username,
                email: $email,
                password: $password,
                fullName: $full_name,
                role: $role,
                createdAt: datetime($created_at)
            })
            "#,
        )
        .param("id", user.id.clone())
        .param("username", user.username.clone())
        .param("email", user.email.clone())
        .param("password", user.password.clone())
        .param("full_name", user.full_name.clone())
        .param("role", user.role.as_str())
        .param("created_at", user.created_at.to_rfc3339());

        self.graph.run(q).await?;
        Ok(user)
    }

    /// Get a user by id
    pub async fn get_user(&self, id: &str) -> StoreResult<Option<User>> {
        let q = query(
            r#"
            MATCH (u:User {id: $id})
            RETURN u
            "#,
        )
        .param("id", id);

        let mut result = self.graph.execute(q).await?;
        if let Some(row) = result.next().await? {
            let node: neo4rs::Node = row
                .get("u")
                .map_err(|_| StoreError::malformed("User", "u"))?;
            Ok(Some(self.node_to_user(&node)?))
        } else {
            Ok(None)
        }
    }

    /// Get a user by unique username
    pub async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let q = query(
            r#"
            MATCH (u:User {username: $username})
            RETURN u
            "#,
        )
        .param("username", username);

        let mut result = self.graph.execute(q).await?;
        if let Some(row) = result.next().await? {
            let node: neo4rs::Node = row
                .get("u")
                .map_err(|_| StoreError::malformed("User", "u"))?;
            Ok(Some(self.node_to_user(&node)?))
        } else {
            Ok(None)
        }
    }

    /// Get a user by unique email
    pub async fn get_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let q = query(
            r#"
            MATCH (u:User {email: $email})
            RETURN u
            "#,
        )
        .param("email", email);

        let mut result = self.graph.execute(q).await?;
        if let Some(row) = result.next().await? {
            let node: neo4rs::Node = row
                .get("u")
                .map_err(|_| StoreError::malformed("User", "u"))?;
            Ok(Some(self.node_to_user(&node)?))
        } else {
            Ok(None)
        }
    }

    /// List all users, newest first
    pub async fn list_users(&self) -> StoreResult<Vec<User>> {
        let q = query(
            r#"
            MATCH (u:User)
            RETURN u
            ORDER BY u.createdAt DESC
            "#,
        );

        let mut result = self.graph.execute(q).await?;
        let mut users = Vec::new();

        while let Some(row) = result.next().await? {
            let node: neo4rs::Node = row
                .get("u")
                .map_err(|_| StoreError::malformed("User", "u"))?;
            users.push(self.node_to_user(&node)?);
        }

        Ok(users)
    }

    /// Overwrite every settable field of an existing user.
    ///
    /// Returns `Ok(None)` when no user carries the id.
    pub async fn update_user(&self, user: &User) -> StoreResult<Option<User>> {
        let q = query(
            r#"
            MATCH (u:User {id: $id})
            SET u.username = $username,
                u.email = $email,
                u.password = $password,
                u.fullName = $full_name,
                u.role = $role
            RETURN u
            "#,
        )
        .param("id", user.id.clone())
        .param("username", user.username.clone())
        .param("email", user.email.clone())
        .param("password", user.password.clone())
        .param("full_name", user.full_name.clone())
        .param("role", user.role.as_str());

        let mut result = self.graph.execute(q).await?;
        if let Some(row) = result.next().await? {
            let node: neo4rs::Node = row
                .get("u")
                .map_err(|_| StoreError::malformed("User", "u"))?;
            Ok(Some(self.node_to_user(&node)?))
        } else {
            tracing::warn!("Update of unknown user {}", user.id);
            Ok(None)
        }
    }

    /// Delete a user. Deleting an unknown id is a no-op.
    ///
    /// Tickets referencing the user by `assignedTo`/`createdBy` keep their
    /// identity strings; references are weak.
    pub async fn delete_user(&self, id: &str) -> StoreResult<()> {
        let q = query(
            r#"
            MATCH (u:User {id: $id})
            DETACH DELETE u
            "#,
        )
        .param("id", id);

        self.graph.run(q).await?;
        Ok(())
    }

    /// Count all users
    pub async fn count_users(&self) -> StoreResult<u64> {
        let q = query("MATCH (u:User) RETURN count(u) AS count");

        let mut result = self.graph.execute(q).await?;
        if let Some(row) = result.next().await? {
            let count: i64 = row.get("count").unwrap_or(0);
            Ok(count.max(0) as u64)
        } else {
            Ok(0)
        }
    }

    /// Case-insensitive substring search over usernames, full names, and
    /// emails, newest first.
    pub async fn search_users(&self, keyword: &str) -> StoreResult<Vec<User>> {
        let q = query(
            r#"
            MATCH (u:User)
            WHERE toLower(u.username) CONTAINS toLower($keyword)
               OR toLower(u.fullName) CONTAINS toLower($keyword)
               OR toLower(u.email) CONTAINS toLower($keyword)
            RETURN u
            ORDER BY u.createdAt DESC
            "#,
        )
        .param("keyword", keyword);

        let mut result = self.graph.execute(q).await?;
        let mut users = Vec::new();

        while let Some(row) = result.next().await? {
            let node: neo4rs::Node = row
                .get("u")
                .map_err(|_| StoreError::malformed("User", "u"))?;
            users.push(self.node_to_user(&node)?);
        }

        Ok(users)
    }

    // ========================================================================
    // Category operations
    // ========================================================================

    /// Create a category, numbering it `CAT001`, `CAT002`, ... from the live
    /// category count when the entity carries no id.
    ///
    /// Like `save_ticket`, the count and the create are two round trips;
    /// concurrent creates can race for the same number.
    pub async fn create_category(&self, category: &Category) -> StoreResult<Category> {
        let mut category = category.clone();
        if category.id.is_empty() {
            let next = self.count_categories().await? + 1;
            category.id = format!("CAT{:03}", next);
        }

        let q = query(
            r#"
            CREATE (c:Category {
                id: $id,
                name: $name,
                description: $description,
                color: $color
            })
            "#,
        )
        .param("id", category.id.clone())
        .param("name", category.name.clone())
        .param("description", category.description.clone())
        .param("color", category.color.clone());

        self.graph.run(q).await?;
        category.ticket_count = 0;
        Ok(category)
    }

    /// Get a category by id, with its ticket count computed live
    pub async fn get_category(&self, id: &str) -> StoreResult<Option<Category>> {
        let q = query(
            r#"
            MATCH (c:Category {id: $id})
            OPTIONAL MATCH (t:Ticket {category: c.id})
            RETURN c, count(t) AS ticket_count
            "#,
        )
        .param("id", id);

        let mut result = self.graph.execute(q).await?;
        if let Some(row) = result.next().await? {
            let node: neo4rs::Node = row
                .get("c")
                .map_err(|_| StoreError::malformed("Category", "c"))?;
            let ticket_count: i64 = row.get("ticket_count").unwrap_or(0);
            Ok(Some(self.node_to_category(&node, ticket_count)?))
        } else {
            Ok(None)
        }
    }

    /// List all categories ordered by id, ticket counts computed live
    pub async fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let q = query(
            r#"
            MATCH (c:Category)
            OPTIONAL MATCH (t:Ticket {category: c.id})
            RETURN c, count(t) AS ticket_count
            ORDER BY c.id
            "#,
        );

        let mut result = self.graph.execute(q).await?;
        let mut categories = Vec::new();

        while let Some(row) = result.next().await? {
            let node: neo4rs::Node = row
                .get("c")
                .map_err(|_| StoreError::malformed("Category", "c"))?;
            let ticket_count: i64 = row.get("ticket_count").unwrap_or(0);
            categories.push(self.node_to_category(&node, ticket_count)?);
        }

        Ok(categories)
    }

    /// Update a category's name, description, and color. The id is immutable.
    ///
    /// Returns `Ok(None)` when no category carries the id.
    pub async fn update_category(&self, category: &Category) -> StoreResult<Option<Category>> {
        let q = query(
            r#"
            MATCH (c:Category {id: $id})
            SET c.name = $name,
                c.description = $description,
                c.color = $color
            WITH c
            OPTIONAL MATCH (t:Ticket {category: c.id})
            RETURN c, count(t) AS ticket_count
            "#,
        )
        .param("id", category.id.clone())
        .param("name", category.name.clone())
        .param("description", category.description.clone())
        .param("color", category.color.clone());

        let mut result = self.graph.execute(q).await?;
        if let Some(row) = result.next().await? {
            let node: neo4rs::Node = row
                .get("c")
                .map_err(|_| StoreError::malformed("Category", "c"))?;
            let ticket_count: i64 = row.get("ticket_count").unwrap_or(0);
            Ok(Some(self.node_to_category(&node, ticket_count)?))
        } else {
            tracing::warn!("Update of unknown category {}", category.id);
            Ok(None)
        }
    }

    /// Delete a category. Deleting an unknown id is a no-op.
    ///
    /// The store does not guard against deleting a category that still has
    /// tickets; callers check `ticket_count` first.
    pub async fn delete_category(&self, id: &str) -> StoreResult<()> {
        let q = query(
            r#"
            MATCH (c:Category {id: $id})
            DETACH DELETE c
            "#,
        )
        .param("id", id);

        self.graph.run(q).await?;
        Ok(())
    }

    /// Count all categories
    pub async fn count_categories(&self) -> StoreResult<u64> {
        let q = query("MATCH (c:Category) RETURN count(c) AS count");

        let mut result = self.graph.execute(q).await?;
        if let Some(row) = result.next().await? {
            let count: i64 = row.get("count").unwrap_or(0);
            Ok(count.max(0) as u64)
        } else {
            Ok(0)
        }
    }

    // ========================================================================
    // Knowledge-base articles
    // ========================================================================

    /// Count knowledge-base articles (for search statistics)
    pub async fn count_articles(&self) -> StoreResult<u64> {
        let q = query("MATCH (a:KBArticle) RETURN count(a) AS count");

        let mut result = self.graph.execute(q).await?;
        if let Some(row) = result.next().await? {
            let count: i64 = row.get("count").unwrap_or(0);
            Ok(count.max(0) as u64)
        } else {
            Ok(0)
        }
    }

    // ========================================================================
    // Node mapping
    // ========================================================================

    /// Convert a Neo4j node to a Ticket.
    ///
    /// Missing `id`/`title`/`category` make the node malformed; missing text
    /// fields default to empty, missing timestamps to now, and unknown
    /// status/priority strings to the enum defaults.
    fn node_to_ticket(&self, node: &neo4rs::Node) -> StoreResult<Ticket> {
        Ok(Ticket {
            id: node
                .get("id")
                .map_err(|_| StoreError::malformed("Ticket", "id"))?,
            title: node
                .get("title")
                .map_err(|_| StoreError::malformed("Ticket", "title"))?,
            description: node.get("description").unwrap_or_default(),
            status: node
                .get::<String>("status")
                .map(|s| TicketStatus::parse(&s))
                .unwrap_or_default(),
            priority: node
                .get::<String>("priority")
                .map(|s| Priority::parse(&s))
                .unwrap_or_default(),
            category_id: node
                .get("category")
                .map_err(|_| StoreError::malformed("Ticket", "category"))?,
            assigned_to: node.get("assignedTo").unwrap_or_default(),
            created_by: node.get("createdBy").unwrap_or_default(),
            created_at: node
                .get::<String>("createdAt")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(Utc::now),
            updated_at: node
                .get::<String>("updatedAt")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(Utc::now),
            due_date: node
                .get::<String>("dueDate")
                .ok()
                .and_then(|s| s.parse().ok()),
            resolved_at: node
                .get::<String>("resolvedAt")
                .ok()
                .and_then(|s| s.parse().ok()),
        })
    }

    /// Convert a Neo4j node to a User
    fn node_to_user(&self, node: &neo4rs::Node) -> StoreResult<User> {
        Ok(User {
            id: node
                .get("id")
                .map_err(|_| StoreError::malformed("User", "id"))?,
            username: node
                .get("username")
                .map_err(|_| StoreError::malformed("User", "username"))?,
            email: node
                .get("email")
                .map_err(|_| StoreError::malformed("User", "email"))?,
            password: node.get("password").unwrap_or_default(),
            full_name: node.get("fullName").unwrap_or_default(),
            role: node
                .get::<String>("role")
                .map(|s| UserRole::parse(&s))
                .unwrap_or_default(),
            created_at: node
                .get::<String>("createdAt")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(Utc::now),
        })
    }

    /// Convert a Neo4j node to a Category, attaching the aggregated count
    fn node_to_category(&self, node: &neo4rs::Node, ticket_count: i64) -> StoreResult<Category> {
        Ok(Category {
            id: node
                .get("id")
                .map_err(|_| StoreError::malformed("Category", "id"))?,
            name: node
                .get("name")
                .map_err(|_| StoreError::malformed("Category", "name"))?,
            description: node.get("description").unwrap_or_default(),
            color: node.get("color").unwrap_or_default(),
            ticket_count: ticket_count.max(0) as u64,
        })
    }
}
