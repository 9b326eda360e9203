//! Assignment domain model.
//!
//! # Responsibility
//! - Define one team member's allocation to a project.
//! - Carry the computed cost projection returned by the cost calculator.
//!
//! # Invariants
//! - `daily_rate`, `days_allocated` and `buffer_days` are treated as >= 0.
//! - Missing day counts default to zero; a missing rate is a caller error.
//! - Stored `total_mandays`/`total_price` are denormalized caches and are never
//!   read by cost math.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for an assignment row, unique within one project.
pub type AssignmentId = Uuid;

/// One team member's allocation to a project.
///
/// Field names follow the external camelCase schema so API payloads can be
/// deserialized without an intermediate DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: AssignmentId,
    /// Display name of the assigned member. Export-only metadata.
    #[serde(default)]
    pub member_name: Option<String>,
    /// Role label (e.g. `Designer`). Export-only metadata.
    #[serde(default)]
    pub role: Option<String>,
    /// Rate per day. Required for cost calculation.
    #[serde(default)]
    pub daily_rate: Option<Decimal>,
    /// Execution days; `None` counts as zero.
    #[serde(default)]
    pub days_allocated: Option<Decimal>,
    /// Contingency days; `None` counts as zero.
    #[serde(default)]
    pub buffer_days: Option<Decimal>,
    /// Cached `days_allocated + buffer_days` as last persisted.
    #[serde(default)]
    pub total_mandays: Option<Decimal>,
    /// Cached `daily_rate * total_mandays` as last persisted.
    #[serde(default)]
    pub total_price: Option<Decimal>,
}

impl Assignment {
    /// Creates an assignment with a generated stable ID.
    pub fn new(daily_rate: Decimal, days_allocated: Decimal) -> Self {
        Self::with_id(Uuid::new_v4(), daily_rate, days_allocated)
    }

    /// Creates an assignment with a caller-provided ID.
    ///
    /// Used when rows are loaded from storage and identity already exists.
    pub fn with_id(id: AssignmentId, daily_rate: Decimal, days_allocated: Decimal) -> Self {
        Self {
            id,
            member_name: None,
            role: None,
            daily_rate: Some(daily_rate),
            days_allocated: Some(days_allocated),
            buffer_days: None,
            total_mandays: None,
            total_price: None,
        }
    }

    /// Sets contingency days.
    pub fn with_buffer_days(mut self, buffer_days: Decimal) -> Self {
        self.buffer_days = Some(buffer_days);
        self
    }

    /// Sets member display metadata.
    pub fn with_member(mut self, name: impl Into<String>, role: impl Into<String>) -> Self {
        self.member_name = Some(name.into());
        self.role = Some(role.into());
        self
    }

    /// Returns whether cached totals disagree with the given recomputed cost.
    ///
    /// Absent cached values are not considered stale.
    pub fn has_stale_totals(&self, cost: &AssignmentCost) -> bool {
        let mandays_stale = self
            .total_mandays
            .is_some_and(|stored| stored != cost.total_mandays);
        let price_stale = self
            .total_price
            .is_some_and(|stored| stored != cost.row_cost);
        mandays_stale || price_stale
    }
}

/// Cost projection for one assignment row.
///
/// All values are post-normalization: defaults applied and negatives clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentCost {
    pub assignment_id: AssignmentId,
    pub daily_rate: Decimal,
    pub days_allocated: Decimal,
    pub buffer_days: Decimal,
    /// `days_allocated + buffer_days`.
    pub total_mandays: Decimal,
    /// `daily_rate * total_mandays`, unrounded.
    pub row_cost: Decimal,
}
