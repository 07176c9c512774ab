use crate::calendar::{local_today, CalendarDate, CalendarPopup, Direction};
use crate::entry::{DateEntry, DateEntryState, EntryInput, EntryOutput};
use crate::help::Help;
use crate::picker::{DatePicker, PickerInput, PickerOutput};
use crate::theme::{BASE_STYLE, LABEL_STYLE, PLACEHOLDER_STYLE};
use crossterm::event::{read, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App {
    picker: DatePicker,
    state: AppState,
}

impl App {
    pub(crate) fn new(picker: DatePicker) -> App {
        App {
            picker,
            state: AppState::Field,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, terminal: &mut Terminal<B>) -> io::Result<Outcome> {
        loop {
            if let AppState::Quitting(outcome) = self.state {
                return Ok(outcome);
            }
            self.refresh_today();
            self.draw(terminal)?;
            self.handle_input()?;
        }
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn refresh_today(&mut self) {
        match local_today() {
            Ok(today) => self.picker.set_today(today),
            Err(e) => log::debug!("Could not determine local date; keeping previous: {e}"),
        }
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = read()?
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting(Outcome::Aborted);
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match &mut self.state {
            AppState::Field if self.picker.is_open() => self.handle_calendar_key(key),
            AppState::Field => match key {
                KeyCode::Enter | KeyCode::Char(' ') => self.picker_input(PickerInput::Toggle),
                KeyCode::Char('x') | KeyCode::Delete | KeyCode::Backspace => {
                    self.picker_input(PickerInput::Clear)
                }
                KeyCode::Char('e') if !self.picker.is_disabled() => {
                    let text = self
                        .picker
                        .selected()
                        .map(|date| date.to_string())
                        .unwrap_or_default();
                    self.state = AppState::Entering(DateEntryState::with_text(&text));
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting(Outcome::Accepted(self.picker.selected()));
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Field;
                true
            }
            AppState::Entering(state) => {
                if key == KeyCode::Esc {
                    self.state = AppState::Field;
                    return true;
                }
                let output = match key {
                    KeyCode::Char(ch) => state.handle_input(EntryInput::Char(ch)),
                    KeyCode::Backspace | KeyCode::Delete => {
                        state.handle_input(EntryInput::Backspace)
                    }
                    KeyCode::Enter => state.handle_input(EntryInput::Enter),
                    _ => EntryOutput::Invalid,
                };
                match output {
                    EntryOutput::Ok => true,
                    EntryOutput::Invalid => false,
                    EntryOutput::Submit(text) => {
                        let accepted = self.submit_text(&text);
                        if accepted {
                            self.state = AppState::Field;
                        }
                        accepted
                    }
                }
            }
            AppState::Quitting(_) => false,
        }
    }

    fn handle_calendar_key(&mut self, key: KeyCode) -> bool {
        let input = match key {
            KeyCode::Char('h') | KeyCode::Left => PickerInput::MoveDays(-1),
            KeyCode::Char('l') | KeyCode::Right => PickerInput::MoveDays(1),
            KeyCode::Char('k') | KeyCode::Up => PickerInput::MoveDays(-7),
            KeyCode::Char('j') | KeyCode::Down => PickerInput::MoveDays(7),
            KeyCode::Char('<' | ',') | KeyCode::PageUp => {
                PickerInput::Navigate(Direction::Backwards)
            }
            KeyCode::Char('>' | '.') | KeyCode::PageDown => {
                PickerInput::Navigate(Direction::Forwards)
            }
            KeyCode::Char('t') | KeyCode::Home => PickerInput::Today,
            KeyCode::Enter | KeyCode::Char(' ') => PickerInput::Select,
            KeyCode::Char('x') | KeyCode::Delete => PickerInput::Clear,
            KeyCode::Char('q') | KeyCode::Esc => PickerInput::Close,
            KeyCode::Char('?') => {
                self.state = AppState::Helping;
                return true;
            }
            _ => return false,
        };
        self.picker_input(input)
    }

    fn picker_input(&mut self, input: PickerInput) -> bool {
        let shown = self.picker.display();
        let accepted = report(self.picker.handle_input(input));
        if self.picker.display() != shown {
            log::debug!("Showing {}", self.picker.display());
        }
        accepted
    }

    fn submit_text(&mut self, text: &str) -> bool {
        report(self.picker.set_text(text))
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }
}

// Logs changes of value and returns `false` if the input was rejected
fn report(output: PickerOutput) -> bool {
    match output {
        PickerOutput::Ok => true,
        PickerOutput::Invalid => false,
        PickerOutput::Changed(Some(date)) => {
            log::info!("Selected {date}");
            true
        }
        PickerOutput::Changed(None) => {
            log::info!("Cleared selection");
            true
        }
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let value = match self.picker.selected() {
            Some(date) => Span::styled(date.to_string(), BASE_STYLE),
            None => Span::styled("YYYY-MM-DD", PLACEHOLDER_STYLE),
        };
        let mut field = Line::from_iter([Span::styled("Date: ", LABEL_STYLE), value]);
        if self.picker.is_disabled() {
            field.push_span(Span::styled(" (disabled)", PLACEHOLDER_STYLE));
        }
        field.render(Rect { height: 1, ..area }, buf);
        if self.picker.is_open() {
            CalendarPopup.render(area, buf, &mut self.picker);
        }
        match self.state {
            AppState::Helping => Help.render(area, buf),
            AppState::Entering(ref mut state) => DateEntry.render(area, buf, state),
            AppState::Field | AppState::Quitting(_) => (),
        }
    }
}

/// How the user left the picker
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Outcome {
    /// The user quit normally, keeping the given value
    Accepted(Option<CalendarDate>),
    /// The user interrupted the program
    Aborted,
}

#[derive(Clone, Debug, Eq, PartialEq)]
enum AppState {
    Field,
    Entering(DateEntryState),
    Helping,
    Quitting(Outcome),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::Bounds;
    use time::macros::date;

    fn cd(d: time::Date) -> CalendarDate {
        CalendarDate::from(d)
    }

    fn first_line(app: &mut App, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buffer = Buffer::empty(area);
        app.render(area, &mut buffer);
        (0..width).map(|x| buffer[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_pick_with_keys() {
        let mut app = App::new(DatePicker::new(cd(date!(2024 - 03 - 15))));
        assert_eq!(first_line(&mut app, 20), "Date: YYYY-MM-DD    ");
        assert!(app.handle_key(KeyCode::Enter));
        assert!(app.picker.is_open());
        assert!(app.handle_key(KeyCode::Down));
        assert!(app.handle_key(KeyCode::Left));
        assert!(app.handle_key(KeyCode::PageDown));
        assert!(app.handle_key(KeyCode::Enter));
        assert!(!app.picker.is_open());
        assert_eq!(app.picker.selected(), Some(cd(date!(2024 - 04 - 21))));
        assert_eq!(first_line(&mut app, 20), "Date: 2024-04-21    ");
        assert!(app.handle_key(KeyCode::Char('q')));
        assert_eq!(
            app.state,
            AppState::Quitting(Outcome::Accepted(Some(cd(date!(2024 - 04 - 21)))))
        );
    }

    #[test]
    fn test_typed_entry() {
        let mut app = App::new(DatePicker::new(cd(date!(2024 - 03 - 15))));
        assert!(app.handle_key(KeyCode::Char('e')));
        for ch in "2024-02-30".chars() {
            assert!(app.handle_key(KeyCode::Char(ch)));
        }
        // Malformed dates keep the entry open and the old value
        assert!(!app.handle_key(KeyCode::Enter));
        assert!(matches!(app.state, AppState::Entering(_)));
        assert_eq!(app.picker.selected(), None);
        assert!(app.handle_key(KeyCode::Backspace));
        assert!(app.handle_key(KeyCode::Backspace));
        assert!(app.handle_key(KeyCode::Char('2')));
        assert!(app.handle_key(KeyCode::Char('9')));
        assert!(app.handle_key(KeyCode::Enter));
        assert_eq!(app.state, AppState::Field);
        assert_eq!(app.picker.selected(), Some(cd(date!(2024 - 02 - 29))));
    }

    #[test]
    fn test_bounds_block_keys() {
        let bounds = Bounds::new(Some(cd(date!(2024 - 03 - 14))), None);
        let mut app = App::new(DatePicker::new(cd(date!(2024 - 03 - 15))).bounds(bounds));
        assert!(app.handle_key(KeyCode::Enter));
        assert!(!app.handle_key(KeyCode::PageUp));
        assert!(app.handle_key(KeyCode::Left));
        assert!(!app.handle_key(KeyCode::Left));
        assert!(app.handle_key(KeyCode::Esc));
        assert!(!app.picker.is_open());
        assert_eq!(app.picker.selected(), None);
    }

    #[test]
    fn test_disabled_field() {
        let mut app = App::new(DatePicker::new(cd(date!(2024 - 03 - 15))).disabled(true));
        assert_eq!(first_line(&mut app, 30), "Date: YYYY-MM-DD (disabled)   ");
        assert!(!app.handle_key(KeyCode::Enter));
        assert!(!app.handle_key(KeyCode::Char('e')));
        assert!(app.handle_key(KeyCode::Char('q')));
        assert_eq!(app.state, AppState::Quitting(Outcome::Accepted(None)));
    }

    #[test]
    fn test_help() {
        let mut app = App::new(DatePicker::new(cd(date!(2024 - 03 - 15))));
        assert!(app.handle_key(KeyCode::Char('?')));
        assert_eq!(app.state, AppState::Helping);
        assert!(app.handle_key(KeyCode::Char('z')));
        assert_eq!(app.state, AppState::Field);
    }
}
