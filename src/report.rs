//! Read-only listings over the registry.
//!
//! Each listing is a pure projection: it walks the registry in insertion
//! order and produces serializable views. Rendering to text lives in the
//! CLI.

use serde::Serialize;

use crate::model::{Employment, StaffRecord, Vacancy, VacancyId};
use crate::registry::Registry;

/// One staff record in the all-staff listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffView {
    /// Position in the staff collection.
    pub index: usize,
    pub vacancy_number: VacancyId,
    pub staff_name: String,
    pub designation: String,
    pub job_type: String,
    pub joining_date: String,
    pub qualification: String,
    pub appointed_by: String,
    pub joined: bool,
    pub active: bool,
    pub terms: TermsView,
}

/// Variant-specific part of a [`StaffView`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum TermsView {
    FullTime {
        salary: f64,
        weekly_hours: u32,
    },
    PartTime {
        working_hours: u32,
        wages_per_hour: f64,
        shifts: String,
        terminated: bool,
        /// Present only while the staff member is on the job.
        #[serde(skip_serializing_if = "Option::is_none")]
        income_per_day: Option<f64>,
    },
}

/// A terminated part-time record. Identifying fields were scrubbed on
/// termination, so only the position is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminatedView {
    pub index: usize,
    pub vacancy_number: VacancyId,
    pub designation: String,
    pub job_type: String,
}

/// An active part-time record, as offered for termination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveView {
    pub vacancy_number: VacancyId,
    pub staff_name: String,
    pub designation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VacancyView {
    pub id: VacancyId,
    pub designation: String,
    pub job_type: String,
    pub status: &'static str,
}

pub fn all_staff(registry: &Registry) -> Vec<StaffView> {
    registry
        .all_staff()
        .map(|(index, staff)| staff_view(index, staff))
        .collect()
}

pub fn terminated_staff(registry: &Registry) -> Vec<TerminatedView> {
    registry
        .terminated_staff()
        .map(|(index, staff)| TerminatedView {
            index,
            vacancy_number: staff.vacancy_number,
            designation: staff.designation.clone(),
            job_type: staff.job_type.clone(),
        })
        .collect()
}

pub fn active_part_time(registry: &Registry) -> Vec<ActiveView> {
    registry
        .active_part_time()
        .map(|(_, staff)| ActiveView {
            vacancy_number: staff.vacancy_number,
            staff_name: staff.staff_name.clone(),
            designation: staff.designation.clone(),
        })
        .collect()
}

pub fn all_vacancies(registry: &Registry) -> Vec<VacancyView> {
    registry.vacancies().iter().map(vacancy_view).collect()
}

pub fn vacancy_view(vacancy: &Vacancy) -> VacancyView {
    VacancyView {
        id: vacancy.id,
        designation: vacancy.designation.clone(),
        job_type: vacancy.job_type.clone(),
        status: vacancy.status_label(),
    }
}

fn staff_view(index: usize, staff: &StaffRecord) -> StaffView {
    let terms = match &staff.employment {
        Employment::FullTime {
            salary,
            weekly_fractional_hours,
        } => TermsView::FullTime {
            salary: *salary,
            weekly_hours: *weekly_fractional_hours,
        },
        Employment::PartTime {
            working_hour,
            wages_per_hour,
            shifts,
            terminated,
        } => TermsView::PartTime {
            working_hours: *working_hour,
            wages_per_hour: *wages_per_hour,
            shifts: shifts.clone(),
            terminated: *terminated,
            income_per_day: staff.income_per_day(),
        },
    };

    StaffView {
        index,
        vacancy_number: staff.vacancy_number,
        staff_name: staff.staff_name.clone(),
        designation: staff.designation.clone(),
        job_type: staff.job_type.clone(),
        joining_date: staff.joining_date.clone(),
        qualification: staff.qualification.clone(),
        appointed_by: staff.appointed_by.clone(),
        joined: staff.joined,
        active: staff.active,
        terms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::registry::tests::{full_time_terms, hire_form, part_time_terms, vacancy_form};

    fn populated() -> Registry {
        let mut registry = Registry::new();
        for id in ["10", "20", "30"] {
            registry.add_vacancy(&vacancy_form(id, "Cook")).unwrap();
        }
        registry
            .hire_full_time(&hire_form("10"), &full_time_terms())
            .unwrap();
        registry
            .hire_part_time(&hire_form("20"), &part_time_terms())
            .unwrap();
        registry
    }

    #[test]
    fn empty_registry_lists_nothing() {
        let registry = Registry::new();
        assert!(all_staff(&registry).is_empty());
        assert!(terminated_staff(&registry).is_empty());
        assert!(active_part_time(&registry).is_empty());
        assert!(all_vacancies(&registry).is_empty());
    }

    #[test]
    fn all_staff_carries_variant_terms() {
        let views = all_staff(&populated());

        assert_eq!(views.len(), 2);
        assert_eq!(
            views[0].terms,
            TermsView::FullTime {
                salary: 3000.0,
                weekly_hours: 40,
            }
        );
        assert_eq!(
            views[1].terms,
            TermsView::PartTime {
                working_hours: 4,
                wages_per_hour: 12.5,
                shifts: "morning".into(),
                terminated: false,
                income_per_day: Some(50.0),
            }
        );
        assert_eq!(views[1].index, 1);
    }

    #[test]
    fn termination_moves_record_between_listings() {
        let mut registry = populated();
        assert_eq!(active_part_time(&registry).len(), 1);

        let _ = registry.terminate(20).unwrap();

        assert!(active_part_time(&registry).is_empty());
        assert_eq!(
            terminated_staff(&registry),
            vec![TerminatedView {
                index: 1,
                vacancy_number: 20,
                designation: "Clerk".into(),
                job_type: "Contract".into(),
            }]
        );
        let views = all_staff(&registry);
        assert!(matches!(
            views[1].terms,
            TermsView::PartTime {
                terminated: true,
                income_per_day: None,
                ..
            }
        ));
    }

    #[test]
    fn vacancies_report_status() {
        let statuses: Vec<(VacancyId, &str)> = all_vacancies(&populated())
            .iter()
            .map(|v| (v.id, v.status))
            .collect();
        assert_eq!(statuses, vec![(10, "Closed"), (20, "Closed"), (30, "Open")]);
    }

    #[test]
    fn views_serialize_with_type_tag() {
        let json = serde_json::to_value(all_staff(&populated())).unwrap();
        assert_eq!(json[0]["terms"]["type"], "fullTime");
        assert_eq!(json[1]["terms"]["incomePerDay"], 50.0);
        assert_eq!(json[1]["vacancyNumber"], 20);
    }
}
