//! Dashboard analytics over the ticket graph
//!
//! Aggregates raw store counts into dashboard-ready shapes. Every number is
//! computed from live counts on each call; nothing is cached between calls,
//! so two reads under concurrent writes may disagree.

use crate::error::StoreResult;
use crate::neo4j::models::TicketStatus;
use crate::neo4j::GraphStore;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Headline metrics for the support dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardMetrics {
    pub total_tickets: u64,
    pub open_tickets: u64,
    pub resolved_tickets: u64,
    /// Share of due-dated tickets resolved on time, as a percentage rounded
    /// to two decimals. `0.0` when no ticket carries a due date.
    pub sla_compliance_rate: f64,
}

/// Ticket counts broken down by lifecycle status.
///
/// Every status is present, zero-count ones included, so dashboard widgets
/// never have to special-case a missing bucket.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusBreakdown {
    pub open: u64,
    pub in_progress: u64,
    pub resolved: u64,
    pub closed: u64,
}

impl StatusBreakdown {
    /// Count for a single status.
    pub fn get(&self, status: TicketStatus) -> u64 {
        match status {
            TicketStatus::Open => self.open,
            TicketStatus::InProgress => self.in_progress,
            TicketStatus::Resolved => self.resolved,
            TicketStatus::Closed => self.closed,
        }
    }

    /// Sum across all statuses.
    pub fn total(&self) -> u64 {
        self.open + self.in_progress + self.resolved + self.closed
    }
}

/// Aggregator for ticket metrics, backed by any [`GraphStore`].
pub struct AnalyticsService {
    store: Arc<dyn GraphStore>,
}

impl AnalyticsService {
    /// Create a new analytics service.
    pub fn new(store: Arc<dyn GraphStore>) -> Self {
        Self { store }
    }

    /// Compute the headline dashboard metrics.
    ///
    /// SLA compliance is the share of due-dated tickets whose resolution
    /// timestamp is at or before the due date. With no due-dated tickets the
    /// rate is `0.0` rather than a division error.
    pub async fn dashboard_metrics(&self) -> StoreResult<DashboardMetrics> {
        let total_tickets = self.store.count_tickets().await?;
        let open_tickets = self
            .store
            .count_tickets_by_status(TicketStatus::Open)
            .await?;
        let resolved_tickets = self
            .store
            .count_tickets_by_status(TicketStatus::Resolved)
            .await?;

        let with_due_date = self.store.count_tickets_with_due_date().await?;
        let resolved_in_sla = self.store.count_tickets_resolved_in_sla().await?;

        let sla_compliance_rate = if with_due_date == 0 {
            0.0
        } else {
            let rate = resolved_in_sla as f64 / with_due_date as f64 * 100.0;
            (rate * 100.0).round() / 100.0
        };

        Ok(DashboardMetrics {
            total_tickets,
            open_tickets,
            resolved_tickets,
            sla_compliance_rate,
        })
    }

    /// Count tickets per lifecycle status.
    pub async fn tickets_by_status(&self) -> StoreResult<StatusBreakdown> {
        let mut breakdown = StatusBreakdown::default();
        for status in TicketStatus::ALL {
            let count = self.store.count_tickets_by_status(status).await?;
            match status {
                TicketStatus::Open => breakdown.open = count,
                TicketStatus::InProgress => breakdown.in_progress = count,
                TicketStatus::Resolved => breakdown.resolved = count,
                TicketStatus::Closed => breakdown.closed = count,
            }
        }
        Ok(breakdown)
    }
}
