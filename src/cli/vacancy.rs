//! Vacancy commands: add, list, show, close, reopen.

use clap::Subcommand;

use crate::{
    form::VacancyForm,
    model::VacancyId,
    recruitment::Recruitment,
    report,
    storage::Gateway,
};

use super::format::{format_vacancies, format_vacancy};
use super::{print_json, warn_unsaved};

#[derive(Debug, Subcommand)]
pub enum VacancyCommand {
    /// Add a new open vacancy.
    ///
    /// Fails if the id is already taken, even by a closed vacancy.
    Add {
        /// Numeric vacancy id.
        #[arg(allow_negative_numbers = true)]
        id: String,

        /// Job designation, e.g. "Clerk".
        #[arg(long)]
        designation: String,

        /// Job type, e.g. "Permanent", "Contract", "Temporary".
        #[arg(long)]
        job_type: String,
    },

    /// List every vacancy with its open/closed status.
    List {
        /// Print a JSON array instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Look up an open vacancy by id.
    ///
    /// Exits non-zero if no open vacancy has this id.
    Show {
        id: VacancyId,
    },

    /// Close a vacancy without hiring into it.
    Close {
        id: VacancyId,
    },

    /// Reopen a closed vacancy.
    ///
    /// A reopened vacancy can only be hired into once its previous
    /// staff member is no longer active.
    Reopen {
        id: VacancyId,
    },
}

pub(super) fn run<G: Gateway>(
    command: VacancyCommand,
    recruitment: &mut Recruitment<G>,
) -> Result<(), String> {
    match command {
        VacancyCommand::Add {
            id,
            designation,
            job_type,
        } => cmd_add(
            recruitment,
            &VacancyForm {
                id,
                designation,
                job_type,
            },
        ),
        VacancyCommand::List { json } => cmd_list(recruitment, json),
        VacancyCommand::Show { id } => cmd_show(recruitment, id),
        VacancyCommand::Close { id } => {
            let committed = recruitment.close_vacancy(id).map_err(|e| e.to_string())?;
            warn_unsaved(&committed);
            eprintln!("Vacancy {id} closed");
            Ok(())
        }
        VacancyCommand::Reopen { id } => {
            let committed = recruitment.reopen_vacancy(id).map_err(|e| e.to_string())?;
            warn_unsaved(&committed);
            eprintln!("Vacancy {id} reopened");
            Ok(())
        }
    }
}

fn cmd_add<G: Gateway>(recruitment: &mut Recruitment<G>, form: &VacancyForm) -> Result<(), String> {
    let committed = recruitment
        .add_vacancy(form)
        .map_err(|e| format!("failed to add vacancy: {e}"))?;
    warn_unsaved(&committed);

    eprintln!("Vacancy added");
    println!("{}", format_vacancy(&report::vacancy_view(&committed.value)));
    Ok(())
}

fn cmd_list<G: Gateway>(recruitment: &Recruitment<G>, json: bool) -> Result<(), String> {
    let views = report::all_vacancies(recruitment.registry());
    if json {
        return print_json(&views);
    }
    print!("{}", format_vacancies(&views));
    Ok(())
}

fn cmd_show<G: Gateway>(recruitment: &Recruitment<G>, id: VacancyId) -> Result<(), String> {
    let registry = recruitment.registry();
    let Some(vacancy) = registry.find_open_vacancy(id) else {
        return Err(match registry.find_vacancy(id) {
            Some(_) => format!("vacancy {id} is closed"),
            None => format!("no open vacancy found with number {id}"),
        });
    };
    println!("{}", format_vacancy(&report::vacancy_view(vacancy)));
    Ok(())
}
