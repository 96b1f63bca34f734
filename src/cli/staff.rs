//! Staff commands: list, terminate, set-salary, set-shifts.

use clap::Subcommand;

use crate::{
    model::VacancyId,
    recruitment::Recruitment,
    registry::{Adjustment, ErrorKind, Termination},
    report,
    storage::Gateway,
};

use super::format::{format_active_part_time, format_staff, format_terminated};
use super::{print_json, warn_unsaved};

#[derive(Debug, Subcommand)]
pub enum StaffCommand {
    /// List staff records.
    ///
    /// Defaults to every record, active or not.
    List {
        /// Only terminated part-time staff.
        #[arg(long, conflicts_with = "active")]
        terminated: bool,

        /// Only active part-time staff, i.e. those who can be terminated.
        #[arg(long)]
        active: bool,

        /// Print a JSON array instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Terminate the part-time staff member holding a vacancy.
    ///
    /// The record is kept but its name, joining date, qualification and
    /// appointer are cleared.
    Terminate {
        /// Vacancy number the staff member was hired into.
        vacancy: VacancyId,
    },

    /// Change the salary of full-time staff. Ignored until they have joined.
    SetSalary {
        vacancy: VacancyId,
        salary: String,
    },

    /// Change the shifts of part-time staff. Ignored unless they have
    /// joined and are not terminated.
    SetShifts {
        vacancy: VacancyId,
        shifts: String,
    },
}

pub(super) fn run<G: Gateway>(
    command: StaffCommand,
    recruitment: &mut Recruitment<G>,
) -> Result<(), String> {
    match command {
        StaffCommand::List {
            terminated,
            active,
            json,
        } => cmd_list(recruitment, terminated, active, json),
        StaffCommand::Terminate { vacancy } => cmd_terminate(recruitment, vacancy),
        StaffCommand::SetSalary { vacancy, salary } => {
            let committed = recruitment
                .set_salary(vacancy, &salary)
                .map_err(|e| format!("failed to set salary: {e}"))?;
            warn_unsaved(&committed);
            match committed.value {
                Adjustment::Applied => eprintln!("Salary updated for vacancy {vacancy}"),
                Adjustment::Ignored => eprintln!("No staff appointed to set the salary."),
            }
            Ok(())
        }
        StaffCommand::SetShifts { vacancy, shifts } => {
            let committed = recruitment
                .set_shifts(vacancy, &shifts)
                .map_err(|e| format!("failed to set shifts: {e}"))?;
            warn_unsaved(&committed);
            match committed.value {
                Adjustment::Applied => eprintln!("Shifts updated for vacancy {vacancy}"),
                Adjustment::Ignored => {
                    eprintln!("Staff has not joined or has been terminated. Cannot change shifts.");
                }
            }
            Ok(())
        }
    }
}

fn cmd_list<G: Gateway>(
    recruitment: &Recruitment<G>,
    terminated: bool,
    active: bool,
    json: bool,
) -> Result<(), String> {
    let registry = recruitment.registry();

    if terminated {
        let views = report::terminated_staff(registry);
        if json {
            return print_json(&views);
        }
        print!("{}", format_terminated(&views));
    } else if active {
        let views = report::active_part_time(registry);
        if json {
            return print_json(&views);
        }
        print!("{}", format_active_part_time(&views));
    } else {
        let views = report::all_staff(registry);
        if json {
            return print_json(&views);
        }
        print!("{}", format_staff(&views));
    }
    Ok(())
}

fn cmd_terminate<G: Gateway>(
    recruitment: &mut Recruitment<G>,
    vacancy: VacancyId,
) -> Result<(), String> {
    let committed = match recruitment.terminate(vacancy) {
        Ok(committed) => committed,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            let active = report::active_part_time(recruitment.registry());
            return Err(format!(
                "failed to terminate: {e}\n\nActive part-time staff:\n{}",
                format_active_part_time(&active)
            ));
        }
        Err(e) => return Err(format!("failed to terminate: {e}")),
    };
    warn_unsaved(&committed);

    match committed.value {
        Termination::Terminated => eprintln!("Staff for vacancy {vacancy} terminated"),
        Termination::AlreadyTerminated => eprintln!("Staff is already terminated."),
    }
    Ok(())
}
