//! The in-memory registry of vacancies and staff records.
//!
//! The registry owns both collections and is the only thing that mutates
//! them. Every operation validates and looks up before it touches
//! anything, so a failed call leaves both collections exactly as they
//! were. Collections keep insertion order; a record's position doubles as
//! its display index.
//!
//! Persistence is not handled here: see [`crate::recruitment`].

use tracing::{debug, info};

use crate::form::{
    self, FullTimeTerms, HireForm, HireRequest, PartTimeTerms, ValidationError, VacancyForm,
};
use crate::model::{StaffRecord, Vacancy, VacancyId};

/// Broad category of a registry failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed input. The caller corrects it and retries.
    Validation,
    /// A vacancy id collided with an existing one.
    DuplicateKey,
    /// The referenced vacancy or staff record is absent.
    NotFound,
    /// The vacancy already has an active assignment.
    Conflict,
}

/// Errors raised by registry operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RegistryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("vacancy {0} already exists")]
    DuplicateKey(VacancyId),

    #[error("no open vacancy found with number {0}")]
    VacancyNotFound(VacancyId),

    #[error("no vacancy found with id {0}")]
    UnknownVacancy(VacancyId),

    #[error("no active {kind} staff found for vacancy {vacancy}")]
    StaffNotFound {
        vacancy: VacancyId,
        kind: &'static str,
    },

    #[error("vacancy {0} is held by full-time staff, only part-time staff can be terminated")]
    NotPartTime(VacancyId),

    #[error("vacancy {0} already has an active staff member")]
    Conflict(VacancyId),
}

impl RegistryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::DuplicateKey(_) => ErrorKind::DuplicateKey,
            Self::VacancyNotFound(_)
            | Self::UnknownVacancy(_)
            | Self::StaffNotFound { .. }
            | Self::NotPartTime(_) => ErrorKind::NotFound,
            Self::Conflict(_) => ErrorKind::Conflict,
        }
    }
}

pub type Result<T> = core::result::Result<T, RegistryError>;

/// What a termination request did.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The active part-time record was scrubbed and deactivated.
    Terminated,
    /// The vacancy's part-time record was terminated earlier. Nothing changed.
    AlreadyTerminated,
}

/// Whether a guarded field update took effect.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    Applied,
    /// The record is not in a state that allows the change. Nothing changed.
    Ignored,
}

/// Vacancies and staff records, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    vacancies: Vec<Vacancy>,
    staff: Vec<StaffRecord>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a registry from previously saved collections.
    pub fn restore(vacancies: Vec<Vacancy>, staff: Vec<StaffRecord>) -> Self {
        Self { vacancies, staff }
    }

    pub fn vacancies(&self) -> &[Vacancy] {
        &self.vacancies
    }

    pub fn staff(&self) -> &[StaffRecord] {
        &self.staff
    }

    // ── Vacancies ──

    /// Adds a new open vacancy.
    ///
    /// Fails with [`RegistryError::DuplicateKey`] if the id is taken, open
    /// or closed.
    pub fn add_vacancy(&mut self, form: &VacancyForm) -> Result<&Vacancy> {
        let vacancy = form.validate()?;
        if self.vacancies.iter().any(|v| v.id == vacancy.id) {
            return Err(RegistryError::DuplicateKey(vacancy.id));
        }

        info!(id = vacancy.id, designation = %vacancy.designation, "vacancy added");
        let index = self.vacancies.len();
        self.vacancies.push(vacancy);
        Ok(&self.vacancies[index])
    }

    /// First open vacancy with the given id.
    pub fn find_open_vacancy(&self, id: VacancyId) -> Option<&Vacancy> {
        self.vacancies.iter().find(|v| v.id == id && v.is_open)
    }

    /// First vacancy with the given id, open or closed.
    pub fn find_vacancy(&self, id: VacancyId) -> Option<&Vacancy> {
        self.vacancies.iter().find(|v| v.id == id)
    }

    /// Closes the vacancy. A missing id is a no-op; returns whether a
    /// vacancy was found.
    pub fn close_vacancy(&mut self, id: VacancyId) -> bool {
        self.vacancy_mut(id).map(Vacancy::close).is_some()
    }

    /// Reopens the vacancy. A missing id is a no-op; returns whether a
    /// vacancy was found.
    ///
    /// A reopened vacancy can be hired against again once its previous
    /// holder is no longer active.
    pub fn open_vacancy(&mut self, id: VacancyId) -> bool {
        self.vacancy_mut(id).map(Vacancy::open).is_some()
    }

    fn vacancy_mut(&mut self, id: VacancyId) -> Option<&mut Vacancy> {
        self.vacancies.iter_mut().find(|v| v.id == id)
    }

    // ── Hiring ──

    pub fn hire_full_time(&mut self, form: &HireForm, terms: &FullTimeTerms) -> Result<&StaffRecord> {
        let request = HireRequest::full_time(form, terms)?;
        self.hire(request)
    }

    pub fn hire_part_time(&mut self, form: &HireForm, terms: &PartTimeTerms) -> Result<&StaffRecord> {
        let request = HireRequest::part_time(form, terms)?;
        self.hire(request)
    }

    /// Claims an open vacancy for a validated hire.
    ///
    /// Error precedence: the vacancy must be open before the active
    /// assignment check runs. On success the vacancy is closed and the new
    /// active record appended.
    pub fn hire(&mut self, request: HireRequest) -> Result<&StaffRecord> {
        let number = request.vacancy_number;
        let Some(vacancy) = self
            .vacancies
            .iter()
            .position(|v| v.id == number && v.is_open)
        else {
            return Err(RegistryError::VacancyNotFound(number));
        };
        if self.active_holder(number).is_some() {
            return Err(RegistryError::Conflict(number));
        }

        self.vacancies[vacancy].close();
        let record = request.into_record();
        info!(
            vacancy = number,
            kind = record.employment.kind_label(),
            "staff hired"
        );
        let index = self.staff.len();
        self.staff.push(record);
        Ok(&self.staff[index])
    }

    fn active_holder(&self, vacancy: VacancyId) -> Option<&StaffRecord> {
        self.staff
            .iter()
            .find(|s| s.vacancy_number == vacancy && s.active)
    }

    // ── Staff lifecycle ──

    /// Terminates the part-time staff member holding a vacancy.
    ///
    /// Targets the vacancy's active part-time record. When there is none
    /// but the vacancy's part-time record was already terminated, reports
    /// [`Termination::AlreadyTerminated`] instead of failing.
    pub fn terminate(&mut self, vacancy: VacancyId) -> Result<Termination> {
        if let Some(staff) = self
            .staff
            .iter_mut()
            .find(|s| s.vacancy_number == vacancy && s.active && s.is_part_time())
        {
            staff.terminate();
            info!(vacancy, "staff terminated");
            return Ok(Termination::Terminated);
        }

        if self
            .active_holder(vacancy)
            .is_some_and(StaffRecord::is_full_time)
        {
            return Err(RegistryError::NotPartTime(vacancy));
        }

        if self
            .staff
            .iter()
            .any(|s| s.vacancy_number == vacancy && s.is_terminated())
        {
            debug!(vacancy, "staff already terminated");
            return Ok(Termination::AlreadyTerminated);
        }

        Err(RegistryError::StaffNotFound {
            vacancy,
            kind: "part-time",
        })
    }

    /// Sets the salary of the full-time staff member holding a vacancy.
    ///
    /// Ignored unless the staff member has joined.
    pub fn set_salary(&mut self, vacancy: VacancyId, raw_salary: &str) -> Result<Adjustment> {
        let salary = form::number("salary", raw_salary)?;
        let staff = self
            .staff
            .iter_mut()
            .find(|s| s.vacancy_number == vacancy && s.active && s.is_full_time())
            .ok_or(RegistryError::StaffNotFound {
                vacancy,
                kind: "full-time",
            })?;

        if staff.set_salary(salary) {
            info!(vacancy, salary, "salary updated");
            Ok(Adjustment::Applied)
        } else {
            debug!(vacancy, "no staff appointed, salary unchanged");
            Ok(Adjustment::Ignored)
        }
    }

    /// Sets the shifts of the part-time staff member holding a vacancy.
    ///
    /// Targets the active part-time record, falling back to the latest
    /// terminated one. Ignored unless the staff member has joined and is
    /// not terminated.
    pub fn set_shifts(&mut self, vacancy: VacancyId, raw_shifts: &str) -> Result<Adjustment> {
        let shifts = form::required("shifts", raw_shifts)?;
        let held = |s: &StaffRecord| s.vacancy_number == vacancy && s.is_part_time();
        let index = self
            .staff
            .iter()
            .position(|s| held(s) && s.active)
            .or_else(|| self.staff.iter().rposition(held))
            .ok_or(RegistryError::StaffNotFound {
                vacancy,
                kind: "part-time",
            })?;
        let staff = &mut self.staff[index];

        if staff.set_shifts(&shifts) {
            info!(vacancy, shifts = %shifts, "shifts updated");
            Ok(Adjustment::Applied)
        } else {
            debug!(vacancy, "staff not joined or terminated, shifts unchanged");
            Ok(Adjustment::Ignored)
        }
    }

    // ── Listings ──

    /// Every staff record with its display index.
    pub fn all_staff(&self) -> impl Iterator<Item = (usize, &StaffRecord)> {
        self.staff.iter().enumerate()
    }

    /// Part-time records that are no longer active.
    pub fn terminated_staff(&self) -> impl Iterator<Item = (usize, &StaffRecord)> {
        self.all_staff()
            .filter(|(_, s)| !s.active && s.is_part_time())
    }

    /// Part-time records that can still be terminated.
    pub fn active_part_time(&self) -> impl Iterator<Item = (usize, &StaffRecord)> {
        self.all_staff()
            .filter(|(_, s)| s.active && s.is_part_time())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    use crate::model::Employment;

    pub(crate) fn vacancy_form(id: &str, designation: &str) -> VacancyForm {
        VacancyForm {
            id: id.into(),
            designation: designation.into(),
            job_type: "Contract".into(),
        }
    }

    pub(crate) fn hire_form(vacancy: &str) -> HireForm {
        HireForm {
            vacancy_number: vacancy.into(),
            designation: "Clerk".into(),
            job_type: "Contract".into(),
            staff_name: "Asha Gurung".into(),
            joining_date: "12/03/2025".into(),
            qualification: "Bachelor".into(),
            appointed_by: "HR Lead".into(),
            joined: true,
        }
    }

    pub(crate) fn full_time_terms() -> FullTimeTerms {
        FullTimeTerms {
            salary: "3000".into(),
            weekly_hours: "40".into(),
        }
    }

    pub(crate) fn part_time_terms() -> PartTimeTerms {
        PartTimeTerms {
            working_hours: "4".into(),
            wages_per_hour: "12.5".into(),
            shifts: "morning".into(),
        }
    }

    fn registry_with(ids: &[&str]) -> Registry {
        let mut registry = Registry::new();
        for id in ids {
            registry.add_vacancy(&vacancy_form(id, "Clerk")).unwrap();
        }
        registry
    }

    #[test]
    fn add_vacancy_appends_open_vacancy() {
        let mut registry = Registry::new();
        let vacancy = registry.add_vacancy(&vacancy_form("101", "Clerk")).unwrap();
        assert_eq!(vacancy.id, 101);
        assert!(vacancy.is_open);
        assert_eq!(registry.vacancies().len(), 1);
    }

    #[test]
    fn duplicate_vacancy_id_is_rejected() {
        let mut registry = registry_with(&["101"]);

        let err = registry
            .add_vacancy(&vacancy_form("101", "Driver"))
            .unwrap_err();

        assert_eq!(err, RegistryError::DuplicateKey(101));
        assert_eq!(err.kind(), ErrorKind::DuplicateKey);
        assert_eq!(registry.vacancies(), &[Vacancy::new(101, "Clerk", "Contract")]);
    }

    #[test]
    fn duplicate_check_includes_closed_vacancies() {
        let mut registry = registry_with(&["101"]);
        assert!(registry.close_vacancy(101));

        let err = registry
            .add_vacancy(&vacancy_form("101", "Clerk"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateKey);
    }

    #[test]
    fn add_vacancy_requires_job_type() {
        let mut registry = Registry::new();
        let form = VacancyForm {
            job_type: String::new(),
            ..vacancy_form("5", "Clerk")
        };
        let err = registry.add_vacancy(&form).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(registry.vacancies().is_empty());
    }

    #[test]
    fn open_and_close_missing_vacancy_are_no_ops() {
        let mut registry = registry_with(&["1"]);
        let before = registry.clone();

        assert!(!registry.close_vacancy(99));
        assert!(!registry.open_vacancy(99));
        assert_eq!(registry, before);
    }

    #[test]
    fn find_open_vacancy_skips_closed() {
        let mut registry = registry_with(&["1", "2"]);
        registry.close_vacancy(1);

        assert!(registry.find_open_vacancy(1).is_none());
        assert_eq!(registry.find_open_vacancy(2).map(|v| v.id), Some(2));
        assert_eq!(registry.find_vacancy(1).map(|v| v.is_open), Some(false));
    }

    #[test]
    fn hire_full_time_closes_vacancy() {
        let mut registry = Registry::new();
        registry
            .add_vacancy(&VacancyForm {
                id: "101".into(),
                designation: "Clerk".into(),
                job_type: "Contract".into(),
            })
            .unwrap();

        let staff = registry
            .hire_full_time(&hire_form("101"), &full_time_terms())
            .unwrap();
        assert!(staff.active);
        assert!(staff.is_full_time());

        assert!(!registry.vacancies()[0].is_open);
        let holders: Vec<_> = registry
            .staff()
            .iter()
            .filter(|s| s.vacancy_number == 101 && s.active)
            .collect();
        assert_eq!(holders.len(), 1);
    }

    #[test]
    fn second_hire_against_same_vacancy_fails() {
        let mut registry = registry_with(&["101"]);
        registry
            .hire_full_time(&hire_form("101"), &full_time_terms())
            .unwrap();
        let before = registry.clone();

        let err = registry
            .hire_full_time(&hire_form("101"), &full_time_terms())
            .unwrap_err();

        // The vacancy is closed, so the open check fires first.
        assert_eq!(err, RegistryError::VacancyNotFound(101));
        assert_eq!(registry, before);
    }

    #[test]
    fn reopened_vacancy_with_active_holder_conflicts() {
        let mut registry = registry_with(&["101"]);
        registry
            .hire_full_time(&hire_form("101"), &full_time_terms())
            .unwrap();
        assert!(registry.open_vacancy(101));
        let before = registry.clone();

        let err = registry
            .hire_full_time(&hire_form("101"), &full_time_terms())
            .unwrap_err();

        assert_eq!(err, RegistryError::Conflict(101));
        assert_eq!(err.kind(), ErrorKind::Conflict);
        // No partial mutation: the reopened vacancy stays open.
        assert_eq!(registry, before);
        assert!(registry.find_open_vacancy(101).is_some());
    }

    #[test]
    fn reopened_vacancy_can_be_rehired_after_termination() {
        let mut registry = registry_with(&["8"]);
        registry
            .hire_part_time(&hire_form("8"), &part_time_terms())
            .unwrap();
        assert_eq!(registry.terminate(8).unwrap(), Termination::Terminated);
        assert!(registry.open_vacancy(8));

        registry
            .hire_part_time(&hire_form("8"), &part_time_terms())
            .unwrap();

        assert_eq!(registry.staff().len(), 2);
        assert!(registry.staff()[1].active);
        assert!(registry.find_open_vacancy(8).is_none());
    }

    #[test]
    fn hire_against_missing_vacancy_fails() {
        let mut registry = Registry::new();

        let err = registry
            .hire_part_time(&hire_form("55"), &part_time_terms())
            .unwrap_err();

        assert_eq!(err, RegistryError::VacancyNotFound(55));
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(registry.staff().is_empty());
    }

    #[test]
    fn validation_runs_before_lookup() {
        let mut registry = Registry::new();
        let form = HireForm {
            staff_name: String::new(),
            ..hire_form("55")
        };

        let err = registry
            .hire_part_time(&form, &part_time_terms())
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn terminate_scrubs_active_part_timer() {
        let mut registry = registry_with(&["55"]);
        registry
            .hire_part_time(&hire_form("55"), &part_time_terms())
            .unwrap();

        assert_eq!(registry.terminate(55).unwrap(), Termination::Terminated);

        let staff = &registry.staff()[0];
        assert!(staff.is_terminated());
        assert!(!staff.active);
        assert!(!staff.joined);
        assert_eq!(staff.staff_name, "");
        assert_eq!(staff.joining_date, "");
        assert_eq!(staff.qualification, "");
        assert_eq!(staff.appointed_by, "");
    }

    #[test]
    fn terminate_twice_reports_already_terminated() {
        let mut registry = registry_with(&["55"]);
        registry
            .hire_part_time(&hire_form("55"), &part_time_terms())
            .unwrap();
        let _ = registry.terminate(55).unwrap();
        let before = registry.clone();

        assert_eq!(
            registry.terminate(55).unwrap(),
            Termination::AlreadyTerminated
        );
        assert_eq!(registry, before);
    }

    #[test]
    fn terminate_full_time_is_rejected() {
        let mut registry = registry_with(&["101"]);
        registry
            .hire_full_time(&hire_form("101"), &full_time_terms())
            .unwrap();
        let before = registry.clone();

        let err = registry.terminate(101).unwrap_err();

        assert_eq!(err, RegistryError::NotPartTime(101));
        assert_eq!(registry, before);
    }

    #[test]
    fn terminate_unknown_vacancy_is_not_found() {
        let mut registry = Registry::new();
        let err = registry.terminate(3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn salary_update_requires_joined_staff() {
        let mut registry = registry_with(&["1", "2"]);
        registry
            .hire_full_time(&hire_form("1"), &full_time_terms())
            .unwrap();
        let pending = HireForm {
            joined: false,
            ..hire_form("2")
        };
        registry.hire_full_time(&pending, &full_time_terms()).unwrap();

        assert_eq!(registry.set_salary(1, "4200").unwrap(), Adjustment::Applied);
        assert_eq!(registry.set_salary(2, "4200").unwrap(), Adjustment::Ignored);

        let salaries: Vec<f64> = registry
            .staff()
            .iter()
            .map(|s| match s.employment {
                Employment::FullTime { salary, .. } => salary,
                Employment::PartTime { .. } => unreachable!(),
            })
            .collect();
        assert_eq!(salaries, vec![4200.0, 3000.0]);
    }

    #[test]
    fn salary_update_validates_before_lookup() {
        let mut registry = Registry::new();
        let err = registry.set_salary(1, "plenty").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        let err = registry.set_salary(1, "10").unwrap_err();
        assert_eq!(
            err,
            RegistryError::StaffNotFound {
                vacancy: 1,
                kind: "full-time"
            }
        );
    }

    #[test]
    fn shift_update_targets_active_part_timer() {
        let mut registry = registry_with(&["4"]);
        registry
            .hire_part_time(&hire_form("4"), &part_time_terms())
            .unwrap();

        assert_eq!(registry.set_shifts(4, "evening").unwrap(), Adjustment::Applied);
        let _ = registry.terminate(4).unwrap();
        let before = registry.clone();

        assert_eq!(registry.set_shifts(4, "day").unwrap(), Adjustment::Ignored);
        assert_eq!(registry, before);
        assert_eq!(registry.set_shifts(9, "day").unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(registry.set_shifts(4, " ").unwrap_err().kind(), ErrorKind::Validation);
    }

    #[test]
    fn listings_filter_and_keep_order() {
        let mut registry = registry_with(&["1", "2", "3"]);
        registry
            .hire_part_time(&hire_form("1"), &part_time_terms())
            .unwrap();
        registry
            .hire_full_time(&hire_form("2"), &full_time_terms())
            .unwrap();
        registry
            .hire_part_time(&hire_form("3"), &part_time_terms())
            .unwrap();
        let _ = registry.terminate(1).unwrap();

        let all: Vec<usize> = registry.all_staff().map(|(i, _)| i).collect();
        assert_eq!(all, vec![0, 1, 2]);

        let terminated: Vec<VacancyId> = registry
            .terminated_staff()
            .map(|(_, s)| s.vacancy_number)
            .collect();
        assert_eq!(terminated, vec![1]);

        let active: Vec<(usize, VacancyId)> = registry
            .active_part_time()
            .map(|(i, s)| (i, s.vacancy_number))
            .collect();
        assert_eq!(active, vec![(2, 3)]);
    }
}
