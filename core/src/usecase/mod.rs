pub mod calendar;
pub mod dashboard;
