use chrono::NaiveDate;
use symera_core::time::{month_of, next_month, previous_month};
use symera_core::{CalendarMonth, CalendarUseCase, DashboardSummary};

pub struct App {
    pub summary: DashboardSummary,
    pub calendar: CalendarUseCase,
    pub today: NaiveDate,
    pub year: i32,
    pub month: u32,
}

impl App {
    pub fn new(summary: DashboardSummary, calendar: CalendarUseCase, today: NaiveDate) -> App {
        let (year, month) = month_of(today);
        App {
            summary,
            calendar,
            today,
            year,
            month,
        }
    }

    pub fn next_month(&mut self) {
        (self.year, self.month) = next_month(self.year, self.month);
    }

    pub fn previous_month(&mut self) {
        (self.year, self.month) = previous_month(self.year, self.month);
    }

    pub fn jump_to_today(&mut self) {
        (self.year, self.month) = month_of(self.today);
    }

    pub fn current_month(&self) -> Option<CalendarMonth<'_>> {
        self.calendar.month(self.year, self.month)
    }
}
