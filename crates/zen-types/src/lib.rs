//! # zen-types
//!
//! Shared domain types for zen-search.
//!
//! - Field values and the [`ToFieldMap`] rendering capability
//! - Typed records: organisations, tickets, users
//! - [`JsonRecord`] for groups without a typed schema
//! - Settings and the shared error type

pub mod config;
pub mod error;
pub mod field;
pub mod json;
pub mod record;

pub use config::Settings;
pub use error::ZenError;
pub use field::{normalize, FieldMap, FieldValue, ToFieldMap};
pub use json::JsonRecord;
pub use record::{Organisation, Ticket, User};
