// src/errors.rs

use thiserror::Error;

/// Unified error type for planner operations.
///
/// The variants fall into three families: user input problems (surfaced
/// synchronously, nothing mutated), invalid-state no-ops (reported, never
/// fatal), and out-of-range lattice lookups (only reachable through a caller
/// bug, since every pointer-derived cell is clamped).
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("invalid template: {0}")]
    InvalidTemplate(String),

    #[error("no template named '{0}'")]
    UnknownTemplate(String),

    #[error("no configuration named '{0}'")]
    UnknownConfiguration(String),

    #[error("no object is selected")]
    NothingSelected,

    #[error("no placed object with id {0}")]
    UnknownObject(usize),

    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfRange {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    #[error("storage backend error: {0}")]
    Storage(String),

    #[error("snapshot encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}
