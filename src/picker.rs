use crate::calendar::{
    can_navigate, navigate_month, Bounds, CalendarDate, Direction, DisplayMonth, MonthGrid,
};

/// State of a date picker: the selected value, the month on display, the
/// keyboard cursor, and whether the calendar popup is open
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct DatePicker {
    today: CalendarDate,
    bounds: Bounds,
    disabled: bool,
    selected: Option<CalendarDate>,
    display: DisplayMonth,
    cursor: CalendarDate,
    open: bool,
}

impl DatePicker {
    pub(crate) fn new(today: CalendarDate) -> Self {
        DatePicker {
            today,
            bounds: Bounds::default(),
            disabled: false,
            selected: None,
            display: DisplayMonth::containing(today),
            cursor: today,
            open: false,
        }
    }

    pub(crate) fn bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        if let Some(date) = self.selected.filter(|&date| !bounds.contains(date)) {
            log::warn!("Dropping value {date}: outside the selectable range");
            self.selected = None;
        }
        self.reset_view();
        self
    }

    pub(crate) fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Sets the initial value.  A value outside the picker's bounds is
    /// ignored.
    pub(crate) fn value(mut self, value: Option<CalendarDate>) -> Self {
        match value {
            Some(date) if !self.bounds.contains(date) => {
                log::warn!("Ignoring initial value {date}: outside the selectable range");
            }
            _ => self.selected = value,
        }
        self.reset_view();
        self
    }

    pub(crate) fn today(&self) -> CalendarDate {
        self.today
    }

    pub(crate) fn set_today(&mut self, today: CalendarDate) {
        self.today = today;
    }

    pub(crate) fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub(crate) fn selected(&self) -> Option<CalendarDate> {
        self.selected
    }

    pub(crate) fn display(&self) -> DisplayMonth {
        self.display
    }

    pub(crate) fn cursor(&self) -> CalendarDate {
        self.cursor
    }

    pub(crate) fn is_open(&self) -> bool {
        self.open
    }

    pub(crate) fn grid(&self) -> MonthGrid {
        MonthGrid::new(self.display)
    }

    pub(crate) fn is_selectable(&self, date: CalendarDate) -> bool {
        !self.disabled && self.bounds.contains(date)
    }

    pub(crate) fn can_navigate(&self, direction: Direction) -> bool {
        can_navigate(self.display, direction, self.bounds)
    }

    // The cursor may only rest on dates within the bounds and within the
    // displayable years
    fn can_move_to(&self, date: CalendarDate) -> bool {
        self.bounds.contains(date) && DisplayMonth::new(date.year(), date.month()).is_ok()
    }

    // Shows the month of the selected date (or of today, if nothing is
    // selected), clamped to the bounds, and puts the cursor in it
    fn reset_view(&mut self) {
        let anchor = self.selected.unwrap_or(self.today);
        self.cursor = self.bounds.clamp_date(anchor);
        self.display = DisplayMonth::containing(anchor).clamp(self.bounds);
    }

    fn move_cursor_to(&mut self, date: CalendarDate) {
        self.cursor = date;
        self.display = DisplayMonth::containing(date);
    }

    pub(crate) fn handle_input(&mut self, input: PickerInput) -> PickerOutput {
        match input {
            PickerInput::Open if self.disabled || self.open => PickerOutput::Invalid,
            PickerInput::Open => {
                self.open = true;
                self.reset_view();
                PickerOutput::Ok
            }
            PickerInput::Close if self.open => {
                self.open = false;
                PickerOutput::Ok
            }
            PickerInput::Toggle if self.open => self.handle_input(PickerInput::Close),
            PickerInput::Toggle => self.handle_input(PickerInput::Open),
            PickerInput::MoveDays(days) if self.open => match self.cursor.add_days(days) {
                Some(date) if self.can_move_to(date) => {
                    self.move_cursor_to(date);
                    PickerOutput::Ok
                }
                _ => PickerOutput::Invalid,
            },
            PickerInput::Navigate(direction) if self.open => {
                let month = navigate_month(self.display, direction, self.bounds);
                if month == self.display {
                    return PickerOutput::Invalid;
                }
                self.display = month;
                self.cursor = self
                    .bounds
                    .clamp_date(month.day_or_last(self.cursor.day()));
                PickerOutput::Ok
            }
            PickerInput::Today if self.open && self.can_move_to(self.today) => {
                self.move_cursor_to(self.today);
                PickerOutput::Ok
            }
            PickerInput::Select if self.open && self.is_selectable(self.cursor) => {
                self.selected = Some(self.cursor);
                self.open = false;
                PickerOutput::Changed(self.selected)
            }
            PickerInput::Clear if !self.disabled && self.selected.is_some() => {
                self.selected = None;
                PickerOutput::Changed(None)
            }
            _ => PickerOutput::Invalid,
        }
    }

    /// Replaces the value with the date in `text`, or clears it if `text` is
    /// empty.  Malformed or unselectable dates leave the picker unchanged.
    pub(crate) fn set_text(&mut self, text: &str) -> PickerOutput {
        if text.is_empty() {
            return self.handle_input(PickerInput::Clear);
        }
        match text.parse::<CalendarDate>() {
            Ok(date) if self.is_selectable(date) => {
                self.selected = Some(date);
                self.move_cursor_to(date);
                PickerOutput::Changed(self.selected)
            }
            Ok(date) => {
                log::warn!("Ignoring {date}: date is not selectable");
                PickerOutput::Invalid
            }
            Err(e) => {
                log::warn!("Ignoring malformed date {text:?}: {e}");
                PickerOutput::Invalid
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum PickerInput {
    Open,
    Close,
    Toggle,
    MoveDays(i64),
    Navigate(Direction),
    Today,
    Select,
    Clear,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum PickerOutput {
    Ok,
    Invalid,
    /// The selected value changed to the given value
    Changed(Option<CalendarDate>),
}
