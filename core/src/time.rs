use anyhow::{anyhow, Result};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

/// Placeholder used wherever a date is missing or unparsable, so that
/// sorting and filtering stay total. Sorts after every real date.
pub const FAR_FUTURE: NaiveDate = match NaiveDate::from_ymd_opt(2099, 12, 31) {
    Some(d) => d,
    None => panic!("invalid sentinel date"),
};

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Source of "now". Pure functions never read the wall clock themselves;
/// callers hand them a value obtained from one of these.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    fn today(&self) -> NaiveDate {
        midnight(self.now())
    }
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn at_date(date: NaiveDate) -> Self {
        FixedClock(date.and_time(chrono::NaiveTime::MIN).and_utc())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Drops the time of day.
pub fn midnight(dt: DateTime<Utc>) -> NaiveDate {
    dt.date_naive()
}

/// Lenient date parsing for values coming from the data API.
///
/// Accepts plain `YYYY-MM-DD`, RFC 3339 timestamps (UTC calendar date of the
/// instant) and naive date-times. Returns `None` for anything else.
pub fn parse_calendar_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(d) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(midnight(dt.with_timezone(&Utc)));
    }
    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, fmt) {
            return Some(dt.date());
        }
    }

    log::debug!("unparsable date value: {:?}", input);
    None
}

/// Like [`parse_calendar_date`], but missing or broken values become [`FAR_FUTURE`].
pub fn date_or_far_future(input: Option<&str>) -> NaiveDate {
    input.and_then(parse_calendar_date).unwrap_or(FAR_FUTURE)
}

/// Inclusive containment of `day` in `[start, end]`.
/// An inverted range (end before start) collapses to the start day alone.
pub fn day_in_range(day: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    let end = if end < start { start } else { end };
    start <= day && day <= end
}

/// Parses a `YYYY-MM` month selector.
pub fn parse_month(input: &str) -> Result<(i32, u32)> {
    let (year_str, month_str) = input
        .trim()
        .split_once('-')
        .ok_or_else(|| anyhow!("Expected YYYY-MM, got: {}", input))?;

    let year: i32 = year_str.parse().map_err(|_| anyhow!("Invalid year: {}", year_str))?;
    let month: u32 = month_str.parse().map_err(|_| anyhow!("Invalid month: {}", month_str))?;
    if !(1..=12).contains(&month) {
        return Err(anyhow!("Month out of range: {}", month));
    }
    Ok((year, month))
}

/// First day of the month following `(year, month)`.
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

pub fn month_of(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}
