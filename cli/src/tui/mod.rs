pub mod app;
pub mod ui;

use std::{io, time::Duration};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use symera_core::{CalendarUseCase, Clock, Config, DashboardSummary, SnapshotRepository};

use crate::tui::app::App;

pub fn run<R: SnapshotRepository>(repo: &R, clock: &impl Clock, config: &Config) -> Result<()> {
    let mut app = load_app(repo, clock, config)?;

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn load_app<R: SnapshotRepository>(repo: &R, clock: &impl Clock, config: &Config) -> Result<App> {
    let snapshot = repo.load()?;
    let summary = DashboardSummary::build(&snapshot, clock.now(), config.upcoming_limit);
    let calendar = CalendarUseCase::new(snapshot, config.week_start);
    Ok(App::new(summary, calendar, clock.today()))
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Left | KeyCode::Char('h') => app.previous_month(),
                        KeyCode::Right | KeyCode::Char('l') => app.next_month(),
                        KeyCode::Char('t') => app.jump_to_today(),
                        _ => {}
                    }
                }
            }
        }
    }
}
