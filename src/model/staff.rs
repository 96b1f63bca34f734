//! Staff records: hires made against a vacancy.

use serde::{Deserialize, Serialize};

use super::VacancyId;

/// A hire against a vacancy.
///
/// The fields shared by every hire live on the record itself; the terms
/// that differ between full-time and part-time staff live in
/// [`Employment`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffRecord {
    pub vacancy_number: VacancyId,
    pub designation: String,
    pub job_type: String,
    pub staff_name: String,
    pub joining_date: String,
    pub qualification: String,
    pub appointed_by: String,
    pub joined: bool,
    pub active: bool,
    pub employment: Employment,
}

/// Variant-specific employment terms.
///
/// Tagged so each persisted record says which variant it is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Employment {
    FullTime {
        salary: f64,
        weekly_fractional_hours: u32,
    },

    PartTime {
        /// Working hours per day.
        working_hour: u32,
        wages_per_hour: f64,
        /// Free text, e.g. "morning", "day", "evening".
        shifts: String,
        /// One-way: once set, never cleared.
        terminated: bool,
    },
}

impl Employment {
    pub fn kind_label(&self) -> &'static str {
        match self {
            Self::FullTime { .. } => "Full Time",
            Self::PartTime { .. } => "Part Time",
        }
    }
}

impl StaffRecord {
    pub fn is_part_time(&self) -> bool {
        matches!(self.employment, Employment::PartTime { .. })
    }

    pub fn is_full_time(&self) -> bool {
        matches!(self.employment, Employment::FullTime { .. })
    }

    /// Whether this is a part-time record that has been terminated.
    pub fn is_terminated(&self) -> bool {
        matches!(
            self.employment,
            Employment::PartTime {
                terminated: true,
                ..
            }
        )
    }

    /// Terminates a part-time record.
    ///
    /// Scrubs the identifying fields and deactivates the record. Returns
    /// `false` without touching anything when the record is full-time or
    /// already terminated.
    pub fn terminate(&mut self) -> bool {
        let Employment::PartTime { terminated, .. } = &mut self.employment else {
            return false;
        };
        if *terminated {
            return false;
        }
        *terminated = true;

        self.staff_name.clear();
        self.joining_date.clear();
        self.qualification.clear();
        self.appointed_by.clear();
        self.joined = false;
        self.active = false;
        true
    }

    /// Sets the salary of a full-time record.
    ///
    /// Only applies while the staff member has joined. Returns whether the
    /// salary was updated.
    pub fn set_salary(&mut self, new_salary: f64) -> bool {
        match &mut self.employment {
            Employment::FullTime { salary, .. } if self.joined => {
                *salary = new_salary;
                true
            }
            Employment::FullTime { .. } | Employment::PartTime { .. } => false,
        }
    }

    /// Sets the shifts of a part-time record.
    ///
    /// Only applies while joined and not terminated.
    pub fn set_shifts(&mut self, new_shifts: &str) -> bool {
        match &mut self.employment {
            Employment::PartTime {
                shifts,
                terminated: false,
                ..
            } if self.joined => {
                new_shifts.clone_into(shifts);
                true
            }
            Employment::PartTime { .. } | Employment::FullTime { .. } => false,
        }
    }

    /// Daily income of a part-time staff member still on the job.
    pub fn income_per_day(&self) -> Option<f64> {
        match self.employment {
            Employment::PartTime {
                working_hour,
                wages_per_hour,
                terminated: false,
                ..
            } if self.joined => Some(f64::from(working_hour) * wages_per_hour),
            Employment::PartTime { .. } | Employment::FullTime { .. } => None,
        }
    }
}
