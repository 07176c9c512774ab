use super::date::CalendarDate;
use super::month::DisplayMonth;
use std::iter::successors;
use time::Weekday::{self, Sunday};

pub(crate) const DAYS_IN_WEEK: usize = 7;

pub(crate) const WEEKS_IN_GRID: usize = 6;

pub(crate) const GRID_CELLS: usize = DAYS_IN_WEEK * WEEKS_IN_GRID;

pub(crate) trait WeekdayExt {
    fn index0(&self) -> u16;
}

impl WeekdayExt for Weekday {
    fn index0(&self) -> u16 {
        self.number_days_from_sunday().into()
    }
}

/// Six full weeks of dates, Sunday first, covering all of a month plus
/// leading and trailing days from its neighbors
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MonthGrid {
    month: DisplayMonth,
    days: [CalendarDate; GRID_CELLS],
}

impl MonthGrid {
    pub(crate) fn new(month: DisplayMonth) -> MonthGrid {
        // Supported months lie well inside the range of representable dates,
        // so walking a few days to either side of one always succeeds.
        let start = successors(Some(month.first_day()), |d| d.previous_day())
            .find(|d| d.weekday() == Sunday)
            .expect("a Sunday should precede the start of a displayable month");
        let mut iter = successors(Some(start), |d| d.next_day());
        let days = std::array::from_fn(|_| {
            iter.next()
                .expect("grid of a displayable month should not run past the end of time")
        });
        MonthGrid { month, days }
    }

    pub(crate) fn month(&self) -> DisplayMonth {
        self.month
    }

    pub(crate) fn days(&self) -> &[CalendarDate; GRID_CELLS] {
        &self.days
    }

    pub(crate) fn weeks(&self) -> impl Iterator<Item = &[CalendarDate]> + '_ {
        self.days().chunks_exact(DAYS_IN_WEEK)
    }

    /// Whether `date` belongs to the grid's month rather than to one of the
    /// adjacent months
    pub(crate) fn in_current_month(&self, date: CalendarDate) -> bool {
        self.month.contains(date)
    }
}
