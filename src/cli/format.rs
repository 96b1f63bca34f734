//! Output formatting for CLI display.

use crate::report::{ActiveView, StaffView, TerminatedView, TermsView, VacancyView};

const SEPARATOR: &str = "-----------------------------";

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

/// Joins a listing's blocks under its header, each block closed by the
/// separator.
fn listing(header: &str, blocks: impl Iterator<Item = Vec<String>>) -> String {
    let mut out = format!("=== {header} ===\n\n");
    for lines in blocks {
        out.push_str(&lines.join("\n"));
        out.push_str(&format!("\n\n{SEPARATOR}\n\n"));
    }
    out
}

/// Format the all-staff listing, one block per record.
///
/// Amounts always carry a decimal point, e.g. `Salary: 3000.0`.
pub(super) fn format_staff(staff: &[StaffView]) -> String {
    if staff.is_empty() {
        return "No staff members found.\n".to_string();
    }
    listing("ALL STAFF MEMBERS", staff.iter().map(staff_block))
}

fn staff_block(view: &StaffView) -> Vec<String> {
    let mut lines = vec![
        format!("Staff #{}", view.index),
        format!("Vacancy Number: {}", view.vacancy_number),
        format!("Name: {}", view.staff_name),
        format!("Designation: {}", view.designation),
        format!("Job Type: {}", view.job_type),
        format!("Joined: {}", yes_no(view.joined)),
        format!("Active: {}", yes_no(view.active)),
    ];

    match &view.terms {
        TermsView::FullTime {
            salary,
            weekly_hours,
        } => {
            lines.push("Staff Type: Full Time".to_string());
            lines.push(format!("Salary: {salary:?}"));
            lines.push(format!("Weekly Hours: {weekly_hours}"));
        }
        TermsView::PartTime {
            working_hours,
            wages_per_hour,
            shifts,
            terminated,
            income_per_day,
        } => {
            lines.push("Staff Type: Part Time".to_string());
            lines.push(format!("Working Hours: {working_hours}"));
            lines.push(format!("Wages Per Hour: {wages_per_hour:?}"));
            lines.push(format!("Shifts: {shifts}"));
            if let Some(income) = income_per_day {
                lines.push(format!("Income per Day: {income:?}"));
            }
            lines.push(format!("Terminated: {}", yes_no(*terminated)));
        }
    }
    lines
}

pub(super) fn format_terminated(staff: &[TerminatedView]) -> String {
    if staff.is_empty() {
        return "No terminated staff members found.\n".to_string();
    }

    let blocks = staff.iter().map(|view| {
        vec![
            format!("Staff #{}", view.index),
            format!("Vacancy Number: {}", view.vacancy_number),
            format!("Designation: {}", view.designation),
            format!("Job Type: {}", view.job_type),
            "Terminated: Yes".to_string(),
        ]
    });
    listing("TERMINATED STAFF MEMBERS", blocks)
}

/// One line per active part-time staff member.
pub(super) fn format_active_part_time(staff: &[ActiveView]) -> String {
    if staff.is_empty() {
        return "No active part-time staff found.\n".to_string();
    }

    staff
        .iter()
        .map(|v| {
            format!(
                "ID: {} | Name: {} | Designation: {}\n",
                v.vacancy_number, v.staff_name, v.designation
            )
        })
        .collect()
}

pub(super) fn format_vacancies(vacancies: &[VacancyView]) -> String {
    if vacancies.is_empty() {
        return "No vacancies found.\n".to_string();
    }

    let blocks = vacancies.iter().map(|view| {
        vec![
            format!("Vacancy ID: {}", view.id),
            format!("Designation: {}", view.designation),
            format!("Job Type: {}", view.job_type),
            format!("Status: {}", view.status),
        ]
    });
    listing("ALL VACANCIES", blocks)
}

/// Single-line summary, e.g. `Vacancy #101 - Clerk (Contract) - Open`.
pub(super) fn format_vacancy(view: &VacancyView) -> String {
    format!(
        "Vacancy #{} - {} ({}) - {}",
        view.id, view.designation, view.job_type, view.status
    )
}
