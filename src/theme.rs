use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const LABEL_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

pub(crate) const PLACEHOLDER_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

pub(crate) mod calendar {
    use super::*;

    pub(crate) const TITLE_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

    pub(crate) const WEEKDAY_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

    pub(crate) const NAV_STYLE: Style = BASE_STYLE.add_modifier(Modifier::BOLD);

    pub(crate) const NAV_DISABLED_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

    pub(crate) const OUTSIDE_MONTH_STYLE: Style = Style::new().fg(Color::DarkGray);

    pub(crate) const DISABLED_STYLE: Style = Style::new()
        .fg(Color::Red)
        .add_modifier(Modifier::CROSSED_OUT);

    pub(crate) const SELECTED_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

    pub(crate) const CURSOR_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);
}

pub(crate) mod entry {
    use super::*;

    pub(crate) const UNFILLED_CELL_STYLE: Style = BASE_STYLE.fg(Color::DarkGray);

    pub(crate) const READY_ENTER_STYLE: Style = BASE_STYLE.add_modifier(Modifier::UNDERLINED);
}
