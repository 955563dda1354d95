//! Index and query error types.

use thiserror::Error;

/// Errors returned by catalog lookups.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IndexError {
    /// No group with this name was loaded
    #[error("Group not found: {0}")]
    GroupNotFound(String),

    /// The group has no field (term) with this name
    #[error("Field not found: {field} in group {group}")]
    FieldNotFound { group: String, field: String },
}
