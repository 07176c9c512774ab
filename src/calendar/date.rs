use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use time::{error::ComponentRange, Date, Month, OffsetDateTime, Weekday};

/// A calendar date with no time-of-day and no UTC offset.
///
/// Ordering is by year, then month, then day.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct CalendarDate(Date);

impl CalendarDate {
    pub(crate) const fn from_date(date: Date) -> CalendarDate {
        CalendarDate(date)
    }

    pub(crate) fn from_ymd(year: i32, month: Month, day: u8) -> Result<CalendarDate, ParseError> {
        Ok(CalendarDate(Date::from_calendar_date(year, month, day)?))
    }

    pub(crate) fn year(self) -> i32 {
        self.0.year()
    }

    pub(crate) fn month(self) -> Month {
        self.0.month()
    }

    pub(crate) fn day(self) -> u8 {
        self.0.day()
    }

    pub(crate) fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    pub(crate) fn next_day(self) -> Option<CalendarDate> {
        self.0.next_day().map(CalendarDate)
    }

    pub(crate) fn previous_day(self) -> Option<CalendarDate> {
        self.0.previous_day().map(CalendarDate)
    }

    /// Returns the date `days` days after (or, if negative, before) `self`,
    /// or `None` if that would leave the representable range
    pub(crate) fn add_days(self, days: i64) -> Option<CalendarDate> {
        self.0
            .checked_add(time::Duration::days(days))
            .map(CalendarDate)
    }
}

impl From<Date> for CalendarDate {
    fn from(date: Date) -> CalendarDate {
        CalendarDate(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year(),
            u8::from(self.month()),
            self.day()
        )
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Parses a date of the exact form `YYYY-MM-DD`
    fn from_str(s: &str) -> Result<CalendarDate, ParseError> {
        let &[y1, y2, y3, y4, b'-', m1, m2, b'-', d1, d2] = s.as_bytes() else {
            return Err(ParseError::Format);
        };
        let mut year = 0i32;
        for b in [y1, y2, y3, y4] {
            year = year * 10 + i32::from(digit(b)?);
        }
        let month = Month::try_from(digit(m1)? * 10 + digit(m2)?)?;
        let day = digit(d1)? * 10 + digit(d2)?;
        CalendarDate::from_ymd(year, month, day)
    }
}

fn digit(b: u8) -> Result<u8, ParseError> {
    if b.is_ascii_digit() {
        Ok(b - b'0')
    } else {
        Err(ParseError::Format)
    }
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub(crate) enum ParseError {
    #[error("date must be of the form YYYY-MM-DD")]
    Format,
    #[error("invalid date: {0}")]
    Date(#[from] ComponentRange),
}

/// Compares two dates field by field
pub(crate) fn is_same_date(a: CalendarDate, b: CalendarDate) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

/// Today's date in the local timezone
pub(crate) fn local_today() -> Result<CalendarDate, time::error::IndeterminateOffset> {
    OffsetDateTime::now_local().map(|dt| CalendarDate(dt.date()))
}
