//! Error taxonomy for the graph store layer.
//!
//! Three failure classes are kept distinct so callers can react differently:
//! a store that cannot be reached at all (`Unavailable`), a statement that
//! failed after a connection was established (`Query`), and a node that came
//! back without a property the model requires (`Malformed`). "Not found" is
//! never an error — single-entity lookups return `Ok(None)`.

use thiserror::Error;

/// Errors surfaced by the graph store layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("graph store unavailable: {0}")]
    Unavailable(#[source] neo4rs::Error),
    #[error("graph query failed: {0}")]
    Query(#[from] neo4rs::Error),
    #[error("malformed {label} record: missing or invalid '{property}'")]
    Malformed {
        label: &'static str,
        property: &'static str,
    },
}

impl StoreError {
    /// Shorthand for the missing-property case used by the node mappers.
    pub(crate) fn malformed(label: &'static str, property: &'static str) -> Self {
        Self::Malformed { label, property }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
