use super::date::CalendarDate;
use super::range::Bounds;
use std::fmt;
use std::iter::successors;
use thiserror::Error;
use time::{macros::date, Month};

/// Earliest year that can be displayed
pub(crate) const MIN_YEAR: i32 = 0;

/// Latest year that can be displayed
pub(crate) const MAX_YEAR: i32 = 9999;

/// A month of a specific year, as shown by the picker.  Months are numbered
/// from 1 (January) wherever they appear as numbers.
// Invariant: The wrapped date is always the first of its month, and its year
// is within `MIN_YEAR..=MAX_YEAR`.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct DisplayMonth(CalendarDate);

impl DisplayMonth {
    pub(crate) const MIN: DisplayMonth =
        DisplayMonth(CalendarDate::from_date(date!(0000 - 01 - 01)));

    pub(crate) const MAX: DisplayMonth =
        DisplayMonth(CalendarDate::from_date(date!(9999 - 12 - 01)));

    pub(crate) fn new(year: i32, month: Month) -> Result<DisplayMonth, MonthRangeError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(MonthRangeError(year));
        }
        CalendarDate::from_ymd(year, month, 1)
            .map(DisplayMonth)
            .map_err(|_| MonthRangeError(year))
    }

    /// Returns the month containing `date`, saturating at `DisplayMonth::MIN`
    /// and `DisplayMonth::MAX` for dates outside the displayable years
    pub(crate) fn containing(date: CalendarDate) -> DisplayMonth {
        DisplayMonth::new(date.year(), date.month()).unwrap_or(if date.year() < MIN_YEAR {
            DisplayMonth::MIN
        } else {
            DisplayMonth::MAX
        })
    }

    pub(crate) fn year(self) -> i32 {
        self.0.year()
    }

    pub(crate) fn month(self) -> Month {
        self.0.month()
    }

    pub(crate) fn first_day(self) -> CalendarDate {
        self.0
    }

    /// Returns the given day of the month, or the last day of the month if
    /// the month is too short
    pub(crate) fn day_or_last(self, day: u8) -> CalendarDate {
        self.days()
            .take(usize::from(day.max(1)))
            .last()
            .unwrap_or(self.0)
    }

    pub(crate) fn contains(self, date: CalendarDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Returns the following month, or `None` if `self` is
    /// `DisplayMonth::MAX`
    pub(crate) fn next(self) -> Option<DisplayMonth> {
        let (year, month) = match self.month() {
            Month::December => (self.year() + 1, Month::January),
            m => (self.year(), m.next()),
        };
        DisplayMonth::new(year, month).ok()
    }

    /// Returns the preceding month, or `None` if `self` is
    /// `DisplayMonth::MIN`
    pub(crate) fn previous(self) -> Option<DisplayMonth> {
        let (year, month) = match self.month() {
            Month::January => (self.year() - 1, Month::December),
            m => (self.year(), m.previous()),
        };
        DisplayMonth::new(year, month).ok()
    }

    /// If the first day of `self` is before `bounds.min`, returns the month
    /// containing `bounds.min`; if it is after `bounds.max`, returns the
    /// month containing `bounds.max`; otherwise returns `self`.
    pub(crate) fn clamp(self, bounds: Bounds) -> DisplayMonth {
        let first = self.first_day();
        match (bounds.min, bounds.max) {
            (Some(min), _) if first < min => DisplayMonth::containing(min),
            (_, Some(max)) if first > max => DisplayMonth::containing(max),
            _ => self,
        }
    }

    fn days(self) -> impl Iterator<Item = CalendarDate> {
        successors(Some(self.0), |d| d.next_day()).take_while(move |&d| self.contains(d))
    }
}

impl fmt::Display for DisplayMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:04}", self.month(), self.year())
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("year {0} is outside the displayable range 0000 through 9999")]
pub(crate) struct MonthRangeError(i32);

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Backwards,
    Forwards,
}

/// Moves one month in `direction`, then clamps the result into `bounds`.
///
/// At the ends of the displayable years the naive step stays put.
pub(crate) fn navigate_month(
    display: DisplayMonth,
    direction: Direction,
    bounds: Bounds,
) -> DisplayMonth {
    let naive = match direction {
        Direction::Backwards => display.previous(),
        Direction::Forwards => display.next(),
    };
    naive.unwrap_or(display).clamp(bounds)
}

/// Whether navigating from `display` in `direction` would show a different
/// month
pub(crate) fn can_navigate(display: DisplayMonth, direction: Direction, bounds: Bounds) -> bool {
    navigate_month(display, direction, bounds) != display
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cd(d: time::Date) -> CalendarDate {
        CalendarDate::from(d)
    }

    fn ym(year: i32, month: Month) -> DisplayMonth {
        DisplayMonth::new(year, month).unwrap()
    }

    #[test]
    fn test_new_range() {
        assert_eq!(DisplayMonth::new(0, Month::January), Ok(DisplayMonth::MIN));
        assert_eq!(DisplayMonth::new(9999, Month::December), Ok(DisplayMonth::MAX));
        assert_eq!(
            DisplayMonth::new(-1, Month::December),
            Err(MonthRangeError(-1))
        );
        assert_eq!(
            DisplayMonth::new(10000, Month::January),
            Err(MonthRangeError(10000))
        );
    }

    #[test]
    fn test_containing() {
        let m = DisplayMonth::containing(cd(date!(2024 - 02 - 29)));
        assert_eq!(m, ym(2024, Month::February));
        assert_eq!(m.first_day(), cd(date!(2024 - 02 - 01)));
        assert_eq!(m.day_or_last(31), cd(date!(2024 - 02 - 29)));
        assert_eq!(
            DisplayMonth::containing(DisplayMonth::MIN.first_day().previous_day().unwrap()),
            DisplayMonth::MIN
        );
        assert_eq!(
            DisplayMonth::containing(cd(date!(9999 - 12 - 31)).next_day().unwrap()),
            DisplayMonth::MAX
        );
    }

    #[test]
    fn test_day_or_last() {
        let feb = ym(2023, Month::February);
        assert_eq!(feb.day_or_last(14), cd(date!(2023 - 02 - 14)));
        assert_eq!(feb.day_or_last(31), cd(date!(2023 - 02 - 28)));
        assert_eq!(feb.day_or_last(0), cd(date!(2023 - 02 - 01)));
    }

    #[test]
    fn test_next_previous_across_years() {
        assert_eq!(ym(2023, Month::December).next(), Some(ym(2024, Month::January)));
        assert_eq!(
            ym(2024, Month::January).previous(),
            Some(ym(2023, Month::December))
        );
        assert_eq!(DisplayMonth::MAX.next(), None);
        assert_eq!(DisplayMonth::MIN.previous(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(ym(2024, Month::March).to_string(), "March 2024");
    }

    #[test]
    fn test_navigate_unbounded() {
        let bounds = Bounds::default();
        assert_eq!(
            navigate_month(ym(2024, Month::January), Direction::Backwards, bounds),
            ym(2023, Month::December)
        );
        assert_eq!(
            navigate_month(ym(2024, Month::December), Direction::Forwards, bounds),
            ym(2025, Month::January)
        );
        assert_eq!(
            navigate_month(DisplayMonth::MAX, Direction::Forwards, bounds),
            DisplayMonth::MAX
        );
    }

    #[test]
    fn test_navigate_clamps_to_min_month() {
        let bounds = Bounds::new(Some(cd(date!(2024 - 01 - 05))), None);
        let jan = ym(2024, Month::January);
        assert_eq!(navigate_month(jan, Direction::Backwards, bounds), jan);
        assert!(!can_navigate(jan, Direction::Backwards, bounds));
        assert!(can_navigate(jan, Direction::Forwards, bounds));
    }

    #[test]
    fn test_navigate_clamps_to_max_month() {
        let bounds = Bounds::new(None, Some(cd(date!(2024 - 03 - 31))));
        let mar = ym(2024, Month::March);
        assert_eq!(navigate_month(mar, Direction::Forwards, bounds), mar);
        assert!(!can_navigate(mar, Direction::Forwards, bounds));
        let feb = ym(2024, Month::February);
        assert_eq!(navigate_month(feb, Direction::Forwards, bounds), mar);
    }

    #[test]
    fn test_navigate_from_far_outside_bounds() {
        let bounds = Bounds::new(
            Some(cd(date!(2024 - 01 - 05))),
            Some(cd(date!(2024 - 06 - 20))),
        );
        assert_eq!(
            navigate_month(ym(2019, Month::May), Direction::Forwards, bounds),
            ym(2024, Month::January)
        );
        assert_eq!(
            navigate_month(ym(2030, Month::May), Direction::Backwards, bounds),
            ym(2024, Month::June)
        );
    }

    #[test]
    fn test_min_on_first_of_month() {
        let bounds = Bounds::new(Some(cd(date!(2024 - 02 - 01))), None);
        let feb = ym(2024, Month::February);
        assert!(!can_navigate(feb, Direction::Backwards, bounds));
        assert_eq!(ym(2024, Month::January).clamp(bounds), feb);
    }
}
