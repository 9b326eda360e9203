//! Pure computation services over the budgeting model.
//!
//! # Responsibility
//! - Turn plain assignment/project/holiday data into computed values.
//! - Keep every operation free of I/O and shared mutable state, so callers
//!   may invoke them concurrently.

pub mod calendar;
pub mod cost_service;
pub mod currency;
pub mod export;
pub mod format;
