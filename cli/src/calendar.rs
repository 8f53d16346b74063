use anyhow::{anyhow, Result};
use chrono::{Datelike, NaiveDate};
use symera_core::{CalendarCell, CalendarUseCase, DaySummary, WeekStart};
use tabled::builder::Builder;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

use crate::text::truncate_to_width;

const SUNDAY_FIRST: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONDAY_FIRST: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

pub fn weekday_labels(week_start: WeekStart) -> [&'static str; 7] {
    match week_start {
        WeekStart::Sunday => SUNDAY_FIRST,
        WeekStart::Monday => MONDAY_FIRST,
    }
}

/// Cell text: day number, item count, `!` if something is pending, `✔` if
/// something got done. Days of neighbouring months are shown dimmed in parens.
pub fn cell_label(cell: &CalendarCell, today: NaiveDate) -> String {
    let day = cell.summary.date.day();
    if !cell.in_month {
        return format!("({})", day);
    }

    let mut label = if cell.summary.date == today {
        format!("[{}]", day)
    } else {
        day.to_string()
    };
    if cell.summary.total > 0 {
        label.push_str(&format!("\n•{}", cell.summary.total));
        if cell.summary.has_pending {
            label.push('!');
        }
        if cell.summary.has_done {
            label.push('✔');
        }
    }
    label
}

pub fn show_month(calendar: &CalendarUseCase, year: i32, month: u32, today: NaiveDate) -> Result<()> {
    let view = calendar
        .month(year, month)
        .ok_or_else(|| anyhow!("Invalid month: {}-{:02}", year, month))?;

    let mut builder = Builder::default();
    builder.push_record(weekday_labels(calendar.week_start()));
    for week in &view.weeks {
        builder.push_record(week.iter().map(|cell| cell_label(cell, today)));
    }

    let mut table = builder.build();
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));

    println!("\n\x1b[1;36m{}-{:02}\x1b[0m ({} items)", year, month, view.item_count());
    println!("{}", table);
    Ok(())
}

#[derive(Tabled)]
struct DayRow {
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "When")]
    when: String,
    #[tabled(rename = "Where")]
    place: String,
}

fn day_rows(summary: &DaySummary) -> Vec<DayRow> {
    let mut rows = Vec::new();
    for event in &summary.events {
        let when = match (event.effective_start_raw(), event.end_date.as_deref()) {
            (Some(start), Some(end)) => format!("{} → {}", start, end),
            (Some(start), None) => start.to_string(),
            _ => "-".to_string(),
        };
        rows.push(DayRow {
            kind: "event",
            id: event.id,
            name: truncate_to_width(&event.name, 40),
            status: event.status.to_string(),
            when,
            place: event.location.clone().unwrap_or_else(|| "-".to_string()),
        });
    }
    for task in &summary.tasks {
        rows.push(DayRow {
            kind: "task",
            id: task.id,
            name: truncate_to_width(&task.title, 40),
            status: format!("{} ({})", task.status, task.priority),
            when: task.due_date.clone().unwrap_or_else(|| "-".to_string()),
            place: "-".to_string(),
        });
    }
    rows
}

pub fn show_day(summary: &DaySummary) {
    if summary.total == 0 {
        println!("Nothing scheduled on {}.", summary.date);
        return;
    }

    let mut table = Table::new(day_rows(summary));
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));

    println!("\n\x1b[1;36m{} ({})\x1b[0m", summary.date.format("%Y-%m-%d"), summary.date.format("%a"));
    println!("{}", table);
}
