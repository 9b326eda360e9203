//! Financial core for agency project budgeting.
//! Pure cost, tax, ROI/margin and calendar arithmetic over plain data.

pub mod config;
pub mod logging;
pub mod model;
pub mod service;

pub use config::{ConfigError, CoreConfig};
pub use logging::{
    default_log_level, init_logging, init_logging_from_config, logging_status, LoggingError,
};
pub use model::assignment::{Assignment, AssignmentCost, AssignmentId};
pub use model::holiday::{holiday_dates_for_project, Holiday, HolidayScope, HolidaySet};
pub use model::project::{ProjectConfig, ProjectId, ProjectSummary};
pub use service::calendar::{
    calculate_buffer_days, calculate_business_days, calculate_business_days_excluding_holidays,
    calculate_end_date, calculate_execution_days, date_key, is_business_day, parse_date_key,
    CalendarError, MAX_PROJECTED_BUSINESS_DAYS,
};
pub use service::cost_service::{
    calculate_assignment_cost, calculate_project_summary, round_money, CostError, CostResult,
};
pub use service::currency::{
    convert, convert_from_base, convert_to_base, currency_symbol, CurrencyCode, CurrencyError,
    ExchangeRate, BASE_CURRENCY,
};
pub use service::export::{assignment_export, encode_csv_record, summary_export, CsvCell};
pub use service::format::{
    format_currency, format_percentage, format_plain, sanitize_csv_cell, DEFAULT_CURRENCY_SYMBOL,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
