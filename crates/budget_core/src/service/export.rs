//! CSV export of assignment rows and project summaries.
//!
//! # Invariants
//! - Every text cell passes through `sanitize_csv_cell` before quoting.
//! - Number cells use two fractional digits without grouping and are never
//!   prefixed, so negative values stay numeric in spreadsheets.
//! - Output lines are joined by `\n` with no trailing newline.

use crate::model::assignment::Assignment;
use crate::model::project::ProjectSummary;
use crate::service::cost_service::{calculate_assignment_cost, CostResult};
use crate::service::format::{format_plain, sanitize_csv_cell};
use rust_decimal::Decimal;

const ASSIGNMENT_HEADER: [&str; 7] = [
    "Member",
    "Role",
    "Daily Rate",
    "Days Allocated",
    "Buffer Days",
    "Total Mandays",
    "Cost",
];

/// One CSV cell prior to encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvCell {
    /// Possibly user-controlled text; sanitized against formula injection.
    Text(String),
    /// Computed value rendered with two fractional digits.
    Number(Decimal),
}

impl CsvCell {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    fn render(&self) -> String {
        match self {
            Self::Text(value) => sanitize_csv_cell(value),
            Self::Number(value) => format_plain(*value),
        }
    }
}

/// Encodes one CSV record.
pub fn encode_csv_record(cells: &[CsvCell]) -> String {
    cells
        .iter()
        .map(|cell| quote_cell(&cell.render()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Renders assignment rows with a header line.
///
/// Costs are recomputed; stored totals on the input are ignored.
pub fn assignment_export(assignments: &[Assignment]) -> CostResult<String> {
    let header = ASSIGNMENT_HEADER
        .iter()
        .map(|title| CsvCell::text(*title))
        .collect::<Vec<_>>();
    let mut lines = vec![encode_csv_record(&header)];

    for assignment in assignments {
        let cost = calculate_assignment_cost(assignment)?;
        let cells = vec![
            CsvCell::text(assignment.member_name.clone().unwrap_or_default()),
            CsvCell::text(assignment.role.clone().unwrap_or_default()),
            CsvCell::Number(cost.daily_rate),
            CsvCell::Number(cost.days_allocated),
            CsvCell::Number(cost.buffer_days),
            CsvCell::Number(cost.total_mandays),
            CsvCell::Number(cost.row_cost),
        ];
        lines.push(encode_csv_record(&cells));
    }

    Ok(lines.join("\n"))
}

/// Renders a summary as `metric,value` lines.
pub fn summary_export(summary: &ProjectSummary) -> String {
    let rows = [
        ("Subtotal", summary.subtotal),
        ("Tax", summary.tax),
        ("Cost", summary.cost),
        ("Proposed Price", summary.proposed_price),
        ("ROI %", summary.roi),
        ("Margin %", summary.margin),
    ];
    let mut lines = vec![encode_csv_record(&[
        CsvCell::text("Metric"),
        CsvCell::text("Value"),
    ])];
    for (metric, value) in rows {
        lines.push(encode_csv_record(&[
            CsvCell::text(metric),
            CsvCell::Number(value),
        ]));
    }
    lines.join("\n")
}

fn quote_cell(cell: &str) -> String {
    if cell.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{encode_csv_record, quote_cell, CsvCell};
    use rust_decimal_macros::dec;

    #[test]
    fn quote_cell_doubles_inner_quotes() {
        assert_eq!(quote_cell(r#"say "hi""#), r#""say ""hi""""#);
        assert_eq!(quote_cell("a,b"), "\"a,b\"");
        assert_eq!(quote_cell("plain"), "plain");
    }

    #[test]
    fn record_sanitizes_before_quoting() {
        let record = encode_csv_record(&[
            CsvCell::text("=HYPERLINK(\"x\",1)"),
            CsvCell::text("ok"),
        ]);
        assert_eq!(record, r#""'=HYPERLINK(""x"",1)",ok"#);
    }

    #[test]
    fn negative_numbers_are_not_prefixed() {
        let record = encode_csv_record(&[CsvCell::text("ROI %"), CsvCell::Number(dec!(-12.5))]);
        assert_eq!(record, "ROI %,-12.50");
    }
}
