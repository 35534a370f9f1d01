//! Markdown rendering of the weekly reports.
//!
//! Thin serialization layer over the assembled report models; all report
//! semantics live in [`crate::calculation`].

use chrono::NaiveTime;

use crate::calculation::{PhaseRow, PhaseSheet, PunchSchedule, PunchSet};
use crate::models::REPORT_WEEK_LABELS;

/// Formats a punch time in 12-hour "HH:MM AM/PM" form, or an empty cell.
fn format_punch(time: Option<NaiveTime>) -> String {
    time.map(|t| t.format("%I:%M %p").to_string())
        .unwrap_or_default()
}

/// Joins cells into one markdown table row.
fn md_row(cells: &[String]) -> String {
    format!("| {} |", cells.join(" | "))
}

/// A divider row matching the given column count.
fn md_divider(columns: usize) -> String {
    md_row(&vec!["---".to_string(); columns])
}

/// Renders the phase sheet as a 19-column markdown table.
///
/// Columns: description, equipment number, phase code, then Saturday-first
/// ST/OT pairs, then row totals. Leave rows carry identity columns only.
pub fn phase_sheet_markdown(sheet: &PhaseSheet) -> String {
    let mut header = vec![
        "description".to_string(),
        "eqip. no.".to_string(),
        "phase code".to_string(),
    ];
    for label in REPORT_WEEK_LABELS {
        header.push(format!("{} ST", label.to_uppercase()));
        header.push(format!("{} ot", label.to_lowercase()));
    }
    header.push("TOT ST".to_string());
    header.push("tot ot".to_string());

    let mut lines = vec![md_row(&header), md_divider(header.len())];
    for row in &sheet.rows {
        lines.push(md_row(&job_row_cells(row)));
    }
    for row in &sheet.leave_rows {
        lines.push(md_row(&leave_row_cells(row)));
    }
    lines.push(md_row(&job_row_cells(&sheet.grand_total)));

    lines.join("\n") + "\n"
}

fn job_row_cells(row: &PhaseRow) -> Vec<String> {
    let mut cells = vec![
        row.description.clone(),
        row.equipment_no.clone(),
        row.phase_code.clone(),
    ];
    for cell in &row.cells {
        cells.push(cell.standard.normalize().to_string());
        cells.push(cell.overtime.normalize().to_string());
    }
    cells.push(row.total.standard.normalize().to_string());
    cells.push(row.total.overtime.normalize().to_string());
    cells
}

fn leave_row_cells(row: &PhaseRow) -> Vec<String> {
    let mut cells = vec![
        row.description.clone(),
        row.equipment_no.clone(),
        row.phase_code.clone(),
    ];
    // Hour columns stay blank; leave hours are filled in by hand.
    cells.extend(std::iter::repeat_n(String::new(), 16));
    cells
}

/// Renders the punch schedule: the slotted table, the second table for
/// days exceeding 10 hours, and the raw dynamic listing for manual
/// reconciliation.
pub fn punch_schedule_markdown(schedule: &PunchSchedule) -> String {
    let mut lines = Vec::new();

    slot_table(&mut lines, "Day", schedule, |day| &day.regular, true);
    lines.push(String::new());
    slot_table(&mut lines, "10hr+ OT", schedule, |day| &day.overtime, false);
    lines.push(String::new());
    dynamic_table(&mut lines, schedule);

    lines.join("\n") + "\n"
}

/// Writes one named-slot table, weekdays as columns.
fn slot_table(
    lines: &mut Vec<String>,
    title: &str,
    schedule: &PunchSchedule,
    set: impl Fn(&crate::calculation::WeekdayPunches) -> &PunchSet,
    with_breaks: bool,
) {
    let mut header = vec![title.to_string()];
    header.extend(REPORT_WEEK_LABELS.iter().map(|label| label.to_string()));
    lines.push(md_row(&header));
    lines.push(md_divider(header.len()));

    let time_row = |label: &str, pick: fn(&PunchSet) -> Option<NaiveTime>| {
        let mut cells = vec![label.to_string()];
        for day in &schedule.days {
            cells.push(format_punch(pick(set(day))));
        }
        md_row(&cells)
    };
    let break_row = |label: &str, pick: fn(&crate::calculation::WeekdayPunches) -> bool| {
        let mut cells = vec![label.to_string()];
        for day in &schedule.days {
            cells.push(if pick(day) { "yes".to_string() } else { String::new() });
        }
        md_row(&cells)
    };

    lines.push(time_row("Time In", |s| s.time_in));
    if with_breaks {
        lines.push(break_row("AM Rest Break (yes)", |d| d.am_break));
    }
    lines.push(time_row("Lunch Out", |s| s.lunch_out));
    lines.push(time_row("Lunch In", |s| s.lunch_in));
    if with_breaks {
        lines.push(break_row("PM Rest Break (yes)", |d| d.pm_break));
    }
    lines.push(time_row("Time Out", |s| s.time_out));
}

/// Writes the raw listing of every distinct recorded time per weekday.
fn dynamic_table(lines: &mut Vec<String>, schedule: &PunchSchedule) {
    let mut header = vec!["Recorded".to_string()];
    header.extend(REPORT_WEEK_LABELS.iter().map(|label| label.to_string()));
    lines.push(md_row(&header));
    lines.push(md_divider(header.len()));

    let depth = schedule
        .days
        .iter()
        .map(|day| day.recorded.len())
        .max()
        .unwrap_or(0);

    for index in 0..depth {
        let mut cells = vec![format!("{}", index + 1)];
        for day in &schedule.days {
            cells.push(format_punch(day.recorded.get(index).copied()));
        }
        lines.push(md_row(&cells));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{
        AggregatorOptions, PairingStrategy, build_phase_sheet, reconstruct_punch_schedule,
    };
    use crate::parser::parse_document;

    const SAMPLE: &str = "\
\"10.010.0023 Automation Engineer - Overhead\"
\"\",\"\",\"Mar 3, 2025\"
\"Start\",\"End\",\"Time\",\"Amount\",\"Note\"
\"8:00:00 AM\",\"12:00:00 PM\",\"04:00:00\",\"$249.00\",\"\"
\"12:30:00 PM\",\"4:30:00 PM\",\"04:00:00\",\"$249.00\",\"\"
\"Total:     08:00:00               $498.00\"
";

    fn jobs() -> Vec<crate::models::JobLedger> {
        vec![parse_document(SAMPLE).unwrap()]
    }

    #[test]
    fn test_phase_sheet_header_has_19_columns() {
        let sheet = build_phase_sheet(&jobs(), &AggregatorOptions::default());
        let markdown = phase_sheet_markdown(&sheet);
        let header = markdown.lines().next().unwrap();
        assert_eq!(header.matches('|').count(), 20); // 19 columns
        assert!(header.contains("SAT ST"));
        assert!(header.contains("fri ot"));
        assert!(header.contains("TOT ST"));
    }

    #[test]
    fn test_phase_sheet_contains_job_and_total_rows() {
        let sheet = build_phase_sheet(&jobs(), &AggregatorOptions::default());
        let markdown = phase_sheet_markdown(&sheet);
        assert!(markdown.contains("Automation Engineer Overhead"));
        assert!(markdown.contains("| TOTAL |"));
        assert!(markdown.contains("| PTO |"));
        assert!(markdown.contains("*Sick Reserve (Salaried)"));
    }

    #[test]
    fn test_punch_table_formats_12_hour_times() {
        let schedule =
            reconstruct_punch_schedule(&jobs(), PairingStrategy::SequentialFill, None);
        let markdown = punch_schedule_markdown(&schedule);
        assert!(markdown.contains("08:00 AM"));
        assert!(markdown.contains("04:30 PM"));
        assert!(markdown.contains("| Time In |"));
        assert!(markdown.contains("| 10hr+ OT |"));
    }

    #[test]
    fn test_punch_table_stamps_breaks() {
        let schedule =
            reconstruct_punch_schedule(&jobs(), PairingStrategy::SequentialFill, None);
        let markdown = punch_schedule_markdown(&schedule);
        let am_row = markdown
            .lines()
            .find(|line| line.contains("AM Rest Break"))
            .unwrap();
        // One "yes" in the row label, one in the Monday column.
        assert_eq!(am_row.matches("yes").count(), 2);
    }

    #[test]
    fn test_format_punch_empty_for_unassigned_slot() {
        assert_eq!(format_punch(None), "");
        let noon = NaiveTime::from_hms_opt(12, 30, 0);
        assert_eq!(format_punch(noon), "12:30 PM");
    }
}
