mod date;
mod grid;
mod month;
mod range;
mod widget;
pub(crate) use self::date::{local_today, CalendarDate};
pub(crate) use self::grid::MonthGrid;
pub(crate) use self::month::{can_navigate, navigate_month, Direction, DisplayMonth};
pub(crate) use self::range::Bounds;
pub(crate) use self::widget::CalendarPopup;
