//! Hire commands: claim an open vacancy for a full-time or part-time hire.
//!
//! Designation and job type are optional on the command line: when left
//! out they are filled in from the open vacancy being hired into.

use clap::{Args, Subcommand};

use crate::{
    form::{self, FullTimeTerms, HireForm, PartTimeTerms},
    model::{StaffRecord, VacancyId},
    recruitment::{Committed, Recruitment},
    registry::{Registry, RegistryError},
    storage::Gateway,
};

use super::warn_unsaved;

#[derive(Debug, Subcommand)]
pub enum HireCommand {
    /// Hire full-time staff.
    FullTime {
        #[command(flatten)]
        details: HireArgs,

        /// Salary amount.
        #[arg(long)]
        salary: String,

        /// Weekly fractional hours (whole number).
        #[arg(long)]
        weekly_hours: String,
    },

    /// Hire part-time staff.
    PartTime {
        #[command(flatten)]
        details: HireArgs,

        /// Working hours per day (whole number).
        #[arg(long)]
        working_hours: String,

        /// Hourly wage.
        #[arg(long)]
        wages_per_hour: String,

        /// Shifts worked, e.g. "morning", "day", "evening".
        #[arg(long)]
        shifts: String,
    },
}

/// Fields shared by every hire.
#[derive(Debug, Args)]
pub struct HireArgs {
    /// Number of the open vacancy to hire into.
    #[arg(long = "vacancy")]
    vacancy_number: String,

    /// Defaults to the vacancy's designation.
    #[arg(long)]
    designation: Option<String>,

    /// Defaults to the vacancy's job type.
    #[arg(long)]
    job_type: Option<String>,

    #[arg(long)]
    staff_name: String,

    /// Joining date, e.g. 01/02/2025.
    #[arg(long)]
    joining_date: String,

    #[arg(long)]
    qualification: String,

    /// Who made the appointment.
    #[arg(long)]
    appointed_by: String,

    /// The staff member has already joined.
    #[arg(long)]
    joined: bool,
}

impl HireArgs {
    /// Builds the raw form, filling designation and job type from the open
    /// vacancy when they were not given.
    fn into_form(self, registry: &Registry) -> HireForm {
        let vacancy = form::integer::<VacancyId>("vacancy number", &self.vacancy_number)
            .ok()
            .and_then(|id| registry.find_open_vacancy(id));

        let designation = self
            .designation
            .or_else(|| vacancy.map(|v| v.designation.clone()))
            .unwrap_or_default();
        let job_type = self
            .job_type
            .or_else(|| vacancy.map(|v| v.job_type.clone()))
            .unwrap_or_default();

        HireForm {
            vacancy_number: self.vacancy_number,
            designation,
            job_type,
            staff_name: self.staff_name,
            joining_date: self.joining_date,
            qualification: self.qualification,
            appointed_by: self.appointed_by,
            joined: self.joined,
        }
    }
}

pub(super) fn run<G: Gateway>(
    command: HireCommand,
    recruitment: &mut Recruitment<G>,
) -> Result<(), String> {
    let committed = match command {
        HireCommand::FullTime {
            details,
            salary,
            weekly_hours,
        } => {
            let form = details.into_form(recruitment.registry());
            let terms = FullTimeTerms {
                salary,
                weekly_hours,
            };
            recruitment.hire_full_time(&form, &terms)
        }
        HireCommand::PartTime {
            details,
            working_hours,
            wages_per_hour,
            shifts,
        } => {
            let form = details.into_form(recruitment.registry());
            let terms = PartTimeTerms {
                working_hours,
                wages_per_hour,
                shifts,
            };
            recruitment.hire_part_time(&form, &terms)
        }
    };

    report_hire(committed)
}

fn report_hire(
    committed: Result<Committed<StaffRecord>, RegistryError>,
) -> Result<(), String> {
    let committed = committed.map_err(|e| format!("failed to hire: {e}"))?;
    warn_unsaved(&committed);

    let staff = &committed.value;
    eprintln!(
        "{} staff {} hired into vacancy {}, vacancy closed",
        staff.employment.kind_label(),
        staff.staff_name,
        staff.vacancy_number
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::registry::tests::vacancy_form;

    fn args(vacancy: &str) -> HireArgs {
        HireArgs {
            vacancy_number: vacancy.into(),
            designation: None,
            job_type: None,
            staff_name: "Sam Rai".into(),
            joining_date: "01/02/2025".into(),
            qualification: "+2".into(),
            appointed_by: "Manager".into(),
            joined: true,
        }
    }

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry.add_vacancy(&vacancy_form("55", "Barista")).unwrap();
        registry
    }

    #[test]
    fn fills_designation_from_open_vacancy() {
        let form = args("55").into_form(&registry());
        assert_eq!(form.designation, "Barista");
        assert_eq!(form.job_type, "Contract");
    }

    #[test]
    fn explicit_values_win_over_vacancy() {
        let explicit = HireArgs {
            designation: Some("Head Barista".into()),
            ..args("55")
        };
        let form = explicit.into_form(&registry());
        assert_eq!(form.designation, "Head Barista");
        assert_eq!(form.job_type, "Contract");
    }

    #[test]
    fn nothing_to_fill_from_leaves_blank() {
        let mut registry = registry();
        registry.close_vacancy(55);

        for vacancy in ["55", "99", "abc"] {
            let form = args(vacancy).into_form(&registry);
            assert!(form.designation.is_empty(), "{vacancy}");
            assert_eq!(form.vacancy_number, vacancy);
        }
    }
}
