//! Project cost configuration and summary projection.
//!
//! # Invariants
//! - Tax applies only when `tax_enabled` is true.
//! - An absent `proposed_price` is treated as zero.
//! - `ProjectSummary` is a fresh value per calculation and never persisted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a project.
pub type ProjectId = Uuid;

/// Cost-relevant subset of a project record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    /// Used to select project-scoped holidays.
    #[serde(default)]
    pub id: Option<ProjectId>,
    #[serde(default)]
    pub tax_enabled: bool,
    /// Percentage in `0..=100`, e.g. `7` for 7% VAT.
    #[serde(default)]
    pub tax_percentage: Decimal,
    #[serde(default)]
    pub proposed_price: Option<Decimal>,
}

impl ProjectConfig {
    /// Tax multiplier applied to the subtotal.
    ///
    /// Exactly zero when tax is disabled, regardless of the stored percentage.
    pub fn effective_tax_rate(&self) -> Decimal {
        if self.tax_enabled {
            self.tax_percentage / Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        }
    }

    /// Proposed price with the absent-means-zero default applied.
    pub fn proposed_price_or_zero(&self) -> Decimal {
        self.proposed_price.unwrap_or(Decimal::ZERO)
    }
}

/// Aggregated financial summary for one project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    /// Sum of every assignment row cost.
    pub subtotal: Decimal,
    pub tax: Decimal,
    /// `subtotal + tax`.
    pub cost: Decimal,
    pub proposed_price: Decimal,
    /// `(price - cost) / cost * 100`, or zero when either side is not positive.
    pub roi: Decimal,
    /// `(price - cost) / price * 100`, or zero when either side is not positive.
    pub margin: Decimal,
}

impl ProjectSummary {
    /// Returns whether ROI and margin were actually derived.
    ///
    /// A zero `roi` alone cannot tell "break-even" from "not computable".
    pub fn has_return_metrics(&self) -> bool {
        self.cost > Decimal::ZERO && self.proposed_price > Decimal::ZERO
    }
}
