//! Holiday calendar entries.
//!
//! Holidays carry no financial data; they only feed business-day lookups.

use crate::model::project::ProjectId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Date-only lookup set used by calendar arithmetic.
pub type HolidaySet = BTreeSet<NaiveDate>;

/// Visibility of a holiday entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HolidayScope {
    /// Applies to every project.
    Global,
    /// Applies to one project only.
    #[serde(rename_all = "camelCase")]
    Project { project_id: ProjectId },
}

/// One non-working calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    pub id: Uuid,
    pub date: NaiveDate,
    pub name: String,
    pub scope: HolidayScope,
}

impl Holiday {
    /// Creates a global holiday.
    pub fn global(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            name: name.into(),
            scope: HolidayScope::Global,
        }
    }

    /// Creates a holiday scoped to one project.
    pub fn for_project(date: NaiveDate, name: impl Into<String>, project_id: ProjectId) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            name: name.into(),
            scope: HolidayScope::Project { project_id },
        }
    }

    /// Returns whether this holiday excludes work on the given project.
    ///
    /// With no project, only global holidays apply.
    pub fn applies_to(&self, project_id: Option<ProjectId>) -> bool {
        match self.scope {
            HolidayScope::Global => true,
            HolidayScope::Project { project_id: scoped } => project_id == Some(scoped),
        }
    }
}

/// Collects the holiday dates that apply to one project.
pub fn holiday_dates_for_project(
    holidays: &[Holiday],
    project_id: Option<ProjectId>,
) -> HolidaySet {
    holidays
        .iter()
        .filter(|holiday| holiday.applies_to(project_id))
        .map(|holiday| holiday.date)
        .collect()
}
