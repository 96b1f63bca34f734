//! The registry paired with its persistence gateway.
//!
//! Every successful mutation is followed by a save of the collections it
//! touched. A failed save never undoes the mutation: the change stands in
//! memory, the failure is logged and handed back to the caller, and both
//! collections are rewritten on the next save (or at [`Recruitment::flush`]).

use tracing::warn;

use crate::form::{FullTimeTerms, HireForm, PartTimeTerms, VacancyForm};
use crate::model::{StaffRecord, Vacancy, VacancyId};
use crate::registry::{self, Adjustment, Registry, RegistryError, Termination};
use crate::storage::{self, Gateway, StorageError};

/// The outcome of a mutation, plus whether it reached disk.
#[must_use]
#[derive(Debug)]
pub struct Committed<T> {
    pub value: T,
    pub persistence: storage::Result<()>,
}

impl<T> Committed<T> {
    /// The save error, if the mutation could not be persisted.
    pub fn save_error(&self) -> Option<&StorageError> {
        self.persistence.as_ref().err()
    }
}

/// Which collections a mutation changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Touched {
    Nothing,
    Vacancies,
    Staff,
    Both,
}

pub struct Recruitment<G> {
    registry: Registry,
    gateway: G,
    /// Set when a save failed; cleared by the next full save.
    stale: bool,
}

impl<G: Gateway> Recruitment<G> {
    /// Loads both collections through the gateway.
    pub fn open(gateway: G) -> storage::Result<Self> {
        let vacancies = gateway.load_vacancies()?;
        let staff = gateway.load_staff()?;
        Ok(Self::with_registry(Registry::restore(vacancies, staff), gateway))
    }

    pub fn with_registry(registry: Registry, gateway: G) -> Self {
        Self {
            registry,
            gateway,
            stale: false,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Whether the in-memory state has changes that failed to save.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn add_vacancy(&mut self, form: &VacancyForm) -> registry::Result<Committed<Vacancy>> {
        let vacancy = self.registry.add_vacancy(form)?.clone();
        Ok(self.commit(vacancy, Touched::Vacancies))
    }

    /// Closes a vacancy by hand, outside the hiring flow.
    pub fn close_vacancy(&mut self, id: VacancyId) -> registry::Result<Committed<()>> {
        if !self.registry.close_vacancy(id) {
            return Err(RegistryError::UnknownVacancy(id));
        }
        Ok(self.commit((), Touched::Vacancies))
    }

    pub fn reopen_vacancy(&mut self, id: VacancyId) -> registry::Result<Committed<()>> {
        if !self.registry.open_vacancy(id) {
            return Err(RegistryError::UnknownVacancy(id));
        }
        Ok(self.commit((), Touched::Vacancies))
    }

    pub fn hire_full_time(
        &mut self,
        form: &HireForm,
        terms: &FullTimeTerms,
    ) -> registry::Result<Committed<StaffRecord>> {
        let staff = self.registry.hire_full_time(form, terms)?.clone();
        Ok(self.commit(staff, Touched::Both))
    }

    pub fn hire_part_time(
        &mut self,
        form: &HireForm,
        terms: &PartTimeTerms,
    ) -> registry::Result<Committed<StaffRecord>> {
        let staff = self.registry.hire_part_time(form, terms)?.clone();
        Ok(self.commit(staff, Touched::Both))
    }

    pub fn terminate(&mut self, vacancy: VacancyId) -> registry::Result<Committed<Termination>> {
        let termination = self.registry.terminate(vacancy)?;
        let touched = match termination {
            Termination::Terminated => Touched::Staff,
            Termination::AlreadyTerminated => Touched::Nothing,
        };
        Ok(self.commit(termination, touched))
    }

    pub fn set_salary(
        &mut self,
        vacancy: VacancyId,
        raw_salary: &str,
    ) -> registry::Result<Committed<Adjustment>> {
        let adjustment = self.registry.set_salary(vacancy, raw_salary)?;
        Ok(self.commit(adjustment, touched_by(adjustment)))
    }

    pub fn set_shifts(
        &mut self,
        vacancy: VacancyId,
        raw_shifts: &str,
    ) -> registry::Result<Committed<Adjustment>> {
        let adjustment = self.registry.set_shifts(vacancy, raw_shifts)?;
        Ok(self.commit(adjustment, touched_by(adjustment)))
    }

    /// Saves both collections if an earlier save failed.
    ///
    /// Called once at shutdown.
    pub fn flush(&mut self) -> storage::Result<()> {
        if !self.stale {
            return Ok(());
        }
        self.save(Touched::Both)
    }

    fn commit<T>(&mut self, value: T, touched: Touched) -> Committed<T> {
        // After a failed save, both files may lag behind memory.
        let touched = match touched {
            Touched::Nothing => Touched::Nothing,
            _ if self.stale => Touched::Both,
            other => other,
        };
        let persistence = self.save(touched);
        Committed { value, persistence }
    }

    fn save(&mut self, touched: Touched) -> storage::Result<()> {
        let result = match touched {
            Touched::Nothing => Ok(()),
            Touched::Vacancies => self.gateway.save_vacancies(self.registry.vacancies()),
            Touched::Staff => self.gateway.save_staff(self.registry.staff()),
            Touched::Both => {
                // Both files are attempted; the first failure is reported.
                let staff = self.gateway.save_staff(self.registry.staff());
                let vacancies = self.gateway.save_vacancies(self.registry.vacancies());
                staff.and(vacancies)
            }
        };

        match &result {
            Ok(()) if touched == Touched::Both => self.stale = false,
            Ok(()) => {}
            Err(e) => {
                warn!(error = %e, "save failed, changes kept in memory");
                self.stale = true;
            }
        }
        result
    }
}

fn touched_by(adjustment: Adjustment) -> Touched {
    match adjustment {
        Adjustment::Applied => Touched::Staff,
        Adjustment::Ignored => Touched::Nothing,
    }
}
