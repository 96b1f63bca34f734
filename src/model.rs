//! Core data model for recruit.
//!
//! Two record kinds: vacancies (job openings) and staff records (hires made
//! against a vacancy). Staff records are a common payload plus an
//! [`Employment`] variant, so every consumer matches exhaustively on the
//! full-time / part-time split.

mod staff;
mod vacancy;

pub use staff::{Employment, StaffRecord};
pub use vacancy::{Vacancy, VacancyId};
