use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Gauge, List, ListItem, Paragraph, Row, Table},
    Frame,
};
use symera_core::CalendarCell;

use crate::calendar::weekday_labels;
use crate::dashboard::describe_days;
use crate::text::truncate_to_width;
use crate::tui::app::App;

// --- THEME ---
struct Theme {
    primary: Color,
    muted: Color,
    text: Color,
    pending: Color,
    done: Color,
}

const THEME: Theme = Theme {
    primary: Color::Cyan,
    muted: Color::DarkGray,
    text: Color::White,
    pending: Color::Yellow,
    done: Color::Green,
};

pub fn draw(f: &mut Frame, app: &App) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Content
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    // Header
    let header = Paragraph::new(Line::from(vec![
        Span::styled("SYMERA", Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD)),
        Span::styled(format!("  {}", app.today.format("%Y-%m-%d (%a)")), Style::default().fg(THEME.muted)),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded).border_style(Style::default().fg(THEME.muted)));
    f.render_widget(header, main_chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Metrics
            Constraint::Length(1),      // Gutter
            Constraint::Percentage(60), // Calendar
        ])
        .split(main_chunks[1]);

    draw_metrics(f, app, content_chunks[0]);
    draw_calendar(f, app, content_chunks[2]);

    // Footer
    let help = Line::from(vec![
        Span::styled("MONTH: ", Style::default().fg(THEME.muted)),
        Span::styled("←/→ ", Style::default().fg(THEME.text)),
        Span::styled(" TODAY: ", Style::default().fg(THEME.muted)),
        Span::styled("t ", Style::default().fg(THEME.text)),
        Span::styled(" QUIT: ", Style::default().fg(THEME.muted)),
        Span::styled("q", Style::default().fg(THEME.text)),
    ]);
    let footer = Paragraph::new(help).alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[2]);
}

fn draw_metrics(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Progress
            Constraint::Length(10), // Counts
            Constraint::Min(3),     // Upcoming
        ])
        .split(area);

    let summary = &app.summary;

    let gauge = Gauge::default()
        .block(Block::default().title(" Task Progress ").borders(Borders::ALL).border_type(BorderType::Rounded).border_style(Style::default().fg(THEME.muted)))
        .gauge_style(Style::default().fg(THEME.done))
        .percent(summary.task_progress as u16)
        .label(format!("{}% ({}/{})", summary.task_progress, summary.completed_tasks, summary.total_tasks));
    f.render_widget(gauge, chunks[0]);

    let next = match (&summary.next_event, summary.days_until_next_event) {
        (Some(event), Some(days)) => format!("{} ({})", truncate_to_width(&event.name, 24), describe_days(days)),
        _ => "-".to_string(),
    };
    let metric = |label: &str, value: String, color: Color| {
        Line::from(vec![
            Span::styled(format!("{:<14}", label), Style::default().fg(THEME.muted)),
            Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ])
    };
    let info_text = vec![
        metric("Events:", summary.total_events.to_string(), THEME.text),
        metric("Active:", summary.active_events.to_string(), THEME.primary),
        metric("Pending:", summary.pending_tasks.to_string(), THEME.pending),
        metric("High prio:", summary.high_priority_pending.to_string(), Color::Red),
        metric("Overdue:", summary.overdue_tasks.to_string(), Color::Red),
        Line::from(""),
        metric("Next event:", next, THEME.text),
    ];
    let info_block = Paragraph::new(info_text)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded).border_style(Style::default().fg(THEME.muted)).title(" Summary "));
    f.render_widget(info_block, chunks[1]);

    let items: Vec<ListItem> = summary
        .upcoming
        .iter()
        .map(|upcoming| {
            let event = &upcoming.event;
            let progress_color = if upcoming.progress == 100 { THEME.done } else { THEME.pending };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<12}", event.effective_start_raw().unwrap_or("-")), Style::default().fg(THEME.muted)),
                Span::styled(format!("{:>4}% ", upcoming.progress), Style::default().fg(progress_color)),
                Span::raw(truncate_to_width(&event.name, 30)),
            ]))
        })
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded).border_style(Style::default().fg(THEME.muted)).title(" Upcoming "));
    f.render_widget(list, chunks[2]);
}

fn cell_style(cell: &CalendarCell, app: &App) -> Style {
    let mut style = if !cell.in_month {
        Style::default().fg(THEME.muted)
    } else if cell.summary.has_pending {
        Style::default().fg(THEME.pending)
    } else if cell.summary.has_done {
        Style::default().fg(THEME.done)
    } else if cell.summary.total > 0 {
        Style::default().fg(THEME.primary)
    } else {
        Style::default().fg(THEME.text)
    };
    if cell.summary.date == app.today {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}

fn draw_calendar(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(" {}-{:02} ", app.year, app.month);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(THEME.muted))
        .title(title);

    let Some(month) = app.current_month() else {
        f.render_widget(Paragraph::new("No calendar").block(block), area);
        return;
    };

    let rows: Vec<Row> = month
        .weeks
        .iter()
        .map(|week| {
            let cells: Vec<Cell> = week
                .iter()
                .map(|cell| {
                    let mut text = format!("{:>2}", cell.summary.date.day());
                    if cell.in_month && cell.summary.total > 0 {
                        text.push_str(&format!(" •{}", cell.summary.total));
                    }
                    Cell::from(text).style(cell_style(cell, app))
                })
                .collect();
            Row::new(cells).height(2)
        })
        .collect();

    let header = Row::new(weekday_labels(app.calendar.week_start()).to_vec())
        .style(Style::default().fg(THEME.primary).add_modifier(Modifier::BOLD));

    let table = Table::new(rows, [Constraint::Ratio(1, 7); 7])
        .header(header)
        .block(block);
    f.render_widget(table, area);
}
