//! Plain-data domain model for project budgeting.
//!
//! # Responsibility
//! - Define the records handed to the core by the API/storage layer.
//! - Define the computed projections handed back.
//!
//! # Invariants
//! - Monetary and day quantities are `Decimal`, never binary floats.
//! - Derived values (mandays, row cost, summary) are recomputed, not trusted.

pub mod assignment;
pub mod holiday;
pub mod project;
