//! Vacancy types: the job openings staff are hired against.

use serde::{Deserialize, Serialize};

/// Numeric vacancy identifier, unique across all vacancies.
///
/// Staff records refer to their vacancy by this number.
pub type VacancyId = u32;

/// A job opening that is either open for hiring or closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vacancy {
    pub id: VacancyId,
    pub designation: String,
    pub job_type: String,
    pub is_open: bool,
}

impl Vacancy {
    /// Creates an open vacancy.
    pub fn new(id: VacancyId, designation: impl Into<String>, job_type: impl Into<String>) -> Self {
        Self {
            id,
            designation: designation.into(),
            job_type: job_type.into(),
            is_open: true,
        }
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Display label for the open/closed state.
    pub fn status_label(&self) -> &'static str {
        if self.is_open { "Open" } else { "Closed" }
    }
}
