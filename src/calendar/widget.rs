use super::date::{is_same_date, CalendarDate};
use super::grid::{MonthGrid, WeekdayExt};
use super::month::{Direction, DisplayMonth};
use crate::picker::DatePicker;
use crate::theme::{calendar::*, BASE_STYLE};
use ratatui::{prelude::*, widgets::*};
use time::Weekday;

static HEADER: &str = " Su  Mo  Tu  We  Th  Fr  Sa ";

/// Number of columns per day of week
const DAY_WIDTH: u16 = 4;

/// Width of the calendar in columns
const WIDTH: u16 = DAY_WIDTH * 7;

/// Number of lines taken up by the title, the weekday header, and its rule
const HEADER_LINES: u16 = 3;

/// Height of the calendar in lines
const HEIGHT: u16 = HEADER_LINES + 6;

/// Size of the popup around the calendar: a border on each side plus one
/// column of padding to the left and right
const POPUP_WIDTH: u16 = WIDTH + 4;
const POPUP_HEIGHT: u16 = HEIGHT + 2;

const ACS_HLINE: char = '─';

/// A month view of a `DatePicker`
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Calendar;

impl StatefulWidget for Calendar {
    type State = DatePicker;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let grid = state.grid();
        let mut canvas = BufferCanvas::new(area, buf);
        canvas.draw_title(
            grid.month(),
            state.can_navigate(Direction::Backwards),
            state.can_navigate(Direction::Forwards),
        );
        canvas.draw_header();
        for (week_no, week) in std::iter::zip(0u16.., grid.weeks()) {
            for &date in week {
                canvas.draw_day(
                    week_no,
                    date.weekday(),
                    show(date, is_same_date(date, state.today())),
                    day_style(state, &grid, date),
                );
            }
        }
    }
}

/// The calendar inside a bordered box, centered in the render area
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct CalendarPopup;

impl StatefulWidget for CalendarPopup {
    type State = DatePicker;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [outer_area] = Layout::horizontal([POPUP_WIDTH])
            .flex(layout::Flex::Center)
            .areas(area);
        let [outer_area] = Layout::vertical([POPUP_HEIGHT])
            .flex(layout::Flex::Center)
            .areas(outer_area);
        Clear.render(outer_area, buf);
        let block = Block::bordered()
            .title(" Select Date ")
            .title_alignment(Alignment::Center)
            .style(BASE_STYLE);
        let inner = block.inner(outer_area).inner(Margin::new(1, 0));
        block.render(outer_area, buf);
        Calendar.render(inner, buf, state);
    }
}

fn show(date: CalendarDate, is_today: bool) -> String {
    if is_today {
        format!("[{:2}]", date.day())
    } else {
        format!(" {:2} ", date.day())
    }
}

fn day_style(picker: &DatePicker, grid: &MonthGrid, date: CalendarDate) -> Style {
    let mut style = BASE_STYLE;
    if !grid.in_current_month(date) {
        style = style.patch(OUTSIDE_MONTH_STYLE);
    }
    if !picker.is_selectable(date) {
        style = style.patch(DISABLED_STYLE);
    }
    if picker.selected().is_some_and(|sel| is_same_date(sel, date)) {
        style = style.patch(SELECTED_STYLE);
    }
    if picker.is_open() && is_same_date(picker.cursor(), date) {
        style = style.patch(CURSOR_STYLE);
    }
    style
}

#[derive(Debug, Eq, PartialEq)]
struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    fn draw_title(&mut self, month: DisplayMonth, can_go_back: bool, can_go_forth: bool) {
        let title = month.to_string();
        let title_width = u16::try_from(title.len()).unwrap_or(WIDTH);
        self.mvprint(0, WIDTH.saturating_sub(title_width) / 2, title, TITLE_STYLE);
        self.mvprint(0, 0, "<", nav_style(can_go_back));
        self.mvprint(0, WIDTH - 1, ">", nav_style(can_go_forth));
    }

    fn draw_header(&mut self) {
        self.mvprint(1, 0, HEADER, WEEKDAY_STYLE);
        self.hline(2, 0, ACS_HLINE, WIDTH);
    }

    fn draw_day(&mut self, week_no: u16, wd: Weekday, s: String, style: Style) {
        self.mvprint(week_no + HEADER_LINES, DAY_WIDTH * wd.index0(), s, style);
    }

    fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Style) {
        if y < self.area.height && x < self.area.width {
            let text = Text::styled(s.as_ref(), style);
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            // A Paragraph truncates text that runs past the edge of its Rect,
            // which must lie entirely within the buffer.
            Paragraph::new(text).render(
                Rect {
                    x: x + self.area.x,
                    y: y + self.area.y,
                    width: (self.area.width - x).min(width),
                    height: 1,
                },
                self.buf,
            );
        }
    }

    fn hline(&mut self, y: u16, x: u16, ch: char, length: u16) {
        self.mvprint(y, x, String::from(ch).repeat(length.into()), BASE_STYLE);
    }
}

fn nav_style(enabled: bool) -> Style {
    if enabled {
        NAV_STYLE
    } else {
        NAV_DISABLED_STYLE
    }
}
