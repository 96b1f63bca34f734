//! Raw-text input forms and their validation.
//!
//! Callers hand over exactly what a user typed. Validation trims every
//! field, rejects blanks, and parses numeric fields into their declared
//! types, reporting the first offending field. Fields are checked in form
//! order: the vacancy number, the text fields, then the numeric terms.

use std::str::FromStr;

use crate::model::{Employment, StaffRecord, Vacancy, VacancyId};

/// What is wrong with a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Problem {
    Missing,
    NotAnInteger,
    NotANumber,
}

impl Problem {
    fn phrase(self) -> &'static str {
        match self {
            Self::Missing => "is required",
            Self::NotAnInteger => "must be a whole number",
            Self::NotANumber => "must be a number",
        }
    }
}

/// A missing or malformed required field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} {}", .problem.phrase())]
pub struct ValidationError {
    pub field: &'static str,
    pub problem: Problem,
}

impl ValidationError {
    fn new(field: &'static str, problem: Problem) -> Self {
        Self { field, problem }
    }
}

/// Input for adding a vacancy.
#[derive(Debug, Clone, Default)]
pub struct VacancyForm {
    pub id: String,
    pub designation: String,
    pub job_type: String,
}

impl VacancyForm {
    /// Validates the form into a new, open vacancy.
    pub fn validate(&self) -> Result<Vacancy, ValidationError> {
        let id = integer("vacancy id", &self.id)?;
        let designation = required("designation", &self.designation)?;
        let job_type = required("job type", &self.job_type)?;
        Ok(Vacancy::new(id, designation, job_type))
    }
}

/// Input common to every hire.
#[derive(Debug, Clone, Default)]
pub struct HireForm {
    pub vacancy_number: String,
    pub designation: String,
    pub job_type: String,
    pub staff_name: String,
    pub joining_date: String,
    pub qualification: String,
    pub appointed_by: String,
    pub joined: bool,
}

/// Input specific to a full-time hire.
#[derive(Debug, Clone, Default)]
pub struct FullTimeTerms {
    pub salary: String,
    pub weekly_hours: String,
}

/// Input specific to a part-time hire.
#[derive(Debug, Clone, Default)]
pub struct PartTimeTerms {
    pub working_hours: String,
    pub wages_per_hour: String,
    pub shifts: String,
}

/// A validated hire, ready to become a staff record.
#[derive(Debug, Clone, PartialEq)]
pub struct HireRequest {
    pub vacancy_number: VacancyId,
    pub designation: String,
    pub job_type: String,
    pub staff_name: String,
    pub joining_date: String,
    pub qualification: String,
    pub appointed_by: String,
    pub joined: bool,
    pub employment: Employment,
}

impl HireRequest {
    pub fn full_time(form: &HireForm, terms: &FullTimeTerms) -> Result<Self, ValidationError> {
        Self::validate(form, || {
            Ok(Employment::FullTime {
                salary: number("salary", &terms.salary)?,
                weekly_fractional_hours: integer("weekly hours", &terms.weekly_hours)?,
            })
        })
    }

    pub fn part_time(form: &HireForm, terms: &PartTimeTerms) -> Result<Self, ValidationError> {
        Self::validate(form, || {
            let shifts = required("shifts", &terms.shifts)?;
            Ok(Employment::PartTime {
                working_hour: integer("working hours", &terms.working_hours)?,
                wages_per_hour: number("wages per hour", &terms.wages_per_hour)?,
                shifts,
                terminated: false,
            })
        })
    }

    /// Builds the active staff record for this hire.
    pub fn into_record(self) -> StaffRecord {
        StaffRecord {
            vacancy_number: self.vacancy_number,
            designation: self.designation,
            job_type: self.job_type,
            staff_name: self.staff_name,
            joining_date: self.joining_date,
            qualification: self.qualification,
            appointed_by: self.appointed_by,
            joined: self.joined,
            active: true,
            employment: self.employment,
        }
    }

    /// Validates the shared fields, then the variant terms.
    fn validate(
        form: &HireForm,
        terms: impl FnOnce() -> Result<Employment, ValidationError>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            vacancy_number: integer("vacancy number", &form.vacancy_number)?,
            designation: required("designation", &form.designation)?,
            job_type: required("job type", &form.job_type)?,
            staff_name: required("staff name", &form.staff_name)?,
            joining_date: required("joining date", &form.joining_date)?,
            qualification: required("qualification", &form.qualification)?,
            appointed_by: required("appointed by", &form.appointed_by)?,
            joined: form.joined,
            employment: terms()?,
        })
    }
}

/// Trimmed, non-empty text.
pub fn required(field: &'static str, raw: &str) -> Result<String, ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ValidationError::new(field, Problem::Missing));
    }
    Ok(value.to_string())
}

/// A whole number, e.g. a vacancy number or hour count.
pub fn integer<T: FromStr>(field: &'static str, raw: &str) -> Result<T, ValidationError> {
    let value = required(field, raw)?;
    value
        .parse()
        .map_err(|_| ValidationError::new(field, Problem::NotAnInteger))
}

/// A finite floating point amount, e.g. a salary or hourly wage.
pub fn number(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    let value = required(field, raw)?;
    match value.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(ValidationError::new(field, Problem::NotANumber)),
    }
}
