use chrono::{DateTime, Utc};
use symera_core::{DashboardSummary, UpcomingEvent};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

use crate::text::truncate_to_width;

#[derive(Tabled)]
struct MetricRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct UpcomingRow {
    #[tabled(rename = "Start")]
    start: String,
    #[tabled(rename = "ID")]
    id: i64,
    #[tabled(rename = "Event")]
    name: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Checklist")]
    progress: String,
}

/// "in 5 days", "today", "3 days ago". Clamping stays a display concern.
pub fn describe_days(days: i64) -> String {
    match days {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        -1 => "yesterday".to_string(),
        d if d > 0 => format!("in {} days", d),
        d => format!("{} days ago", -d),
    }
}

/// Text-mode progress bar, `width` cells wide.
pub fn progress_bar(percent: u8, width: usize) -> String {
    let filled = (percent.min(100) as usize * width + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn metric_rows(summary: &DashboardSummary) -> Vec<MetricRow> {
    let next = match (&summary.next_event, summary.days_until_next_event) {
        (Some(event), Some(days)) => format!("{} ({})", event.name, describe_days(days)),
        _ => "-".to_string(),
    };
    vec![
        MetricRow { metric: "Events", value: summary.total_events.to_string() },
        MetricRow { metric: "Active events", value: summary.active_events.to_string() },
        MetricRow { metric: "Tasks", value: summary.total_tasks.to_string() },
        MetricRow { metric: "Completed", value: summary.completed_tasks.to_string() },
        MetricRow { metric: "Pending", value: summary.pending_tasks.to_string() },
        MetricRow { metric: "High priority pending", value: summary.high_priority_pending.to_string() },
        MetricRow { metric: "Overdue", value: summary.overdue_tasks.to_string() },
        MetricRow {
            metric: "Progress",
            value: format!("{} {}%", progress_bar(summary.task_progress, 20), summary.task_progress),
        },
        MetricRow { metric: "Next event", value: next },
    ]
}

fn upcoming_row(upcoming: &UpcomingEvent) -> UpcomingRow {
    let event = &upcoming.event;
    UpcomingRow {
        start: event.effective_start_raw().unwrap_or("-").to_string(),
        id: event.id,
        name: truncate_to_width(&event.name, 40),
        status: event.status.to_string(),
        progress: format!("{} {}%", progress_bar(upcoming.progress, 10), upcoming.progress),
    }
}

pub fn show_summary(summary: &DashboardSummary, now: DateTime<Utc>) {
    println!("\n\x1b[1;36mDashboard\x1b[0m ({})", now.format("%Y-%m-%d"));

    let mut table = Table::new(metric_rows(summary));
    table.with(Style::modern());
    println!("{}", table);

    if summary.upcoming.is_empty() {
        println!("No upcoming events.");
        return;
    }

    let rows: Vec<UpcomingRow> = summary.upcoming.iter().map(upcoming_row).collect();
    let mut table = Table::new(rows);
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    println!("\n\x1b[1;36mUpcoming\x1b[0m");
    println!("{}", table);
}
