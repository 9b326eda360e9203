//! Assignment cost rollup and project summary calculation.
//!
//! # Responsibility
//! - Compute the billable cost of one assignment row.
//! - Aggregate row costs into subtotal, tax, cost, ROI and margin.
//!
//! # Invariants
//! - Arithmetic is exact `Decimal` math; nothing is rounded here.
//! - Missing day counts default to zero, negative inputs clamp to zero.
//! - A missing daily rate fails fast with `CostError::MissingDailyRate`.
//! - ROI and margin are zero unless both cost and proposed price are positive.
//! - Overflow is reported, never panics.

use crate::model::assignment::{Assignment, AssignmentCost, AssignmentId};
use crate::model::project::{ProjectConfig, ProjectSummary};
use log::{debug, warn};
use rust_decimal::{Decimal, RoundingStrategy};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type CostResult<T> = Result<T, CostError>;

/// Errors from cost calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CostError {
    /// Assignment has no daily rate; its cost is meaningless.
    MissingDailyRate { assignment_id: AssignmentId },
    /// Decimal range exceeded while evaluating `operation`.
    Overflow { operation: &'static str },
}

impl Display for CostError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDailyRate { assignment_id } => {
                write!(f, "assignment {assignment_id} has no daily rate")
            }
            Self::Overflow { operation } => {
                write!(f, "decimal overflow while computing {operation}")
            }
        }
    }
}

impl Error for CostError {}

/// Computes the cost projection for one assignment.
///
/// `total_mandays = days_allocated + buffer_days` and
/// `row_cost = daily_rate * total_mandays`, both unrounded.
///
/// # Errors
/// - `MissingDailyRate` when `daily_rate` is `None`.
/// - `Overflow` when the product leaves the `Decimal` range.
pub fn calculate_assignment_cost(assignment: &Assignment) -> CostResult<AssignmentCost> {
    let daily_rate = assignment
        .daily_rate
        .ok_or(CostError::MissingDailyRate {
            assignment_id: assignment.id,
        })?;

    let daily_rate = non_negative(assignment.id, "daily_rate", daily_rate);
    let days_allocated = non_negative(
        assignment.id,
        "days_allocated",
        assignment.days_allocated.unwrap_or(Decimal::ZERO),
    );
    let buffer_days = non_negative(
        assignment.id,
        "buffer_days",
        assignment.buffer_days.unwrap_or(Decimal::ZERO),
    );

    let total_mandays = checked(days_allocated.checked_add(buffer_days), "total_mandays")?;
    let row_cost = checked(daily_rate.checked_mul(total_mandays), "row_cost")?;

    Ok(AssignmentCost {
        assignment_id: assignment.id,
        daily_rate,
        days_allocated,
        buffer_days,
        total_mandays,
        row_cost,
    })
}

/// Aggregates assignment costs into a project summary.
///
/// Summation order does not affect the result.
///
/// # Errors
/// - Propagates the first `CostError` from any assignment row.
/// - `Overflow` when subtotal, tax or cost leave the `Decimal` range.
pub fn calculate_project_summary(
    assignments: &[Assignment],
    project: &ProjectConfig,
) -> CostResult<ProjectSummary> {
    let mut subtotal = Decimal::ZERO;
    for assignment in assignments {
        let row = calculate_assignment_cost(assignment)?;
        if assignment.has_stale_totals(&row) {
            debug!(
                "event=stale_totals module=cost status=ok assignment_id={}",
                assignment.id
            );
        }
        subtotal = checked(subtotal.checked_add(row.row_cost), "subtotal")?;
    }

    let tax = checked(subtotal.checked_mul(project.effective_tax_rate()), "tax")?;
    let cost = checked(subtotal.checked_add(tax), "cost")?;
    let proposed_price = project.proposed_price_or_zero();

    let (roi, margin) = if cost > Decimal::ZERO && proposed_price > Decimal::ZERO {
        let profit = checked(proposed_price.checked_sub(cost), "profit")?;
        (
            percent_of(profit, cost, "roi")?,
            percent_of(profit, proposed_price, "margin")?,
        )
    } else {
        (Decimal::ZERO, Decimal::ZERO)
    };

    debug!(
        "event=project_summary module=cost status=ok assignments={} tax_enabled={}",
        assignments.len(),
        project.tax_enabled
    );

    Ok(ProjectSummary {
        subtotal,
        tax,
        cost,
        proposed_price,
        roi,
        margin,
    })
}

/// Rounds a monetary value to cents using banker's rounding.
///
/// For persistence of display-independent cent values; calculations keep
/// full precision.
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

fn percent_of(
    numerator: Decimal,
    denominator: Decimal,
    operation: &'static str,
) -> CostResult<Decimal> {
    let ratio = checked(numerator.checked_div(denominator), operation)?;
    checked(ratio.checked_mul(Decimal::ONE_HUNDRED), operation)
}

fn non_negative(assignment_id: AssignmentId, field: &str, value: Decimal) -> Decimal {
    if value.is_sign_negative() && !value.is_zero() {
        warn!(
            "event=negative_input_clamped module=cost status=ok assignment_id={} field={}",
            assignment_id, field
        );
        return Decimal::ZERO;
    }
    value
}

fn checked(value: Option<Decimal>, operation: &'static str) -> CostResult<Decimal> {
    value.ok_or(CostError::Overflow { operation })
}
