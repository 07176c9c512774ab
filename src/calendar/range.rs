use super::date::CalendarDate;

/// Optional inclusive lower and upper limits on the dates a picker may show
/// or select.
///
/// When both are set, `min` must not be later than `max`; this is not
/// checked here.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Bounds {
    pub(crate) min: Option<CalendarDate>,
    pub(crate) max: Option<CalendarDate>,
}

impl Bounds {
    pub(crate) fn new(min: Option<CalendarDate>, max: Option<CalendarDate>) -> Bounds {
        Bounds { min, max }
    }

    pub(crate) fn contains(&self, date: CalendarDate) -> bool {
        is_within_range(date, self.min, self.max)
    }

    /// Returns the date within the bounds nearest to `date`
    pub(crate) fn clamp_date(&self, date: CalendarDate) -> CalendarDate {
        match (self.min, self.max) {
            (Some(min), _) if date < min => min,
            (_, Some(max)) if date > max => max,
            _ => date,
        }
    }
}

pub(crate) fn is_within_range(
    date: CalendarDate,
    min: Option<CalendarDate>,
    max: Option<CalendarDate>,
) -> bool {
    !matches!(min, Some(min) if date < min) && !matches!(max, Some(max) if date > max)
}
