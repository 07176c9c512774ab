use crate::theme::{
    entry::{READY_ENTER_STYLE, UNFILLED_CELL_STYLE},
    BASE_STYLE,
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Margin, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Clear, StatefulWidget, Widget},
};

const OUTER_WIDTH: u16 = 18;
const OUTER_HEIGHT: u16 = 8;
const PLACEHOLDER: &str = "YYYY-MM-DD";
const MAX_LEN: usize = PLACEHOLDER.len();

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct DateEntry;

impl StatefulWidget for DateEntry {
    type State = DateEntryState;

    /*
     * ..................
     * .┌─ Enter Date ─┐.
     * .│              │.
     * .│  YYYY-MM-DD  │.
     * .│              │.
     * .│   [ENTER]    │.
     * .└──────────────┘.
     * ..................
     */

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [outer_area] = Layout::horizontal([OUTER_WIDTH])
            .flex(Flex::Center)
            .areas(area);
        let [outer_area] = Layout::vertical([OUTER_HEIGHT])
            .flex(Flex::Center)
            .areas(outer_area);
        Clear.render(outer_area, buf);
        Block::new().style(BASE_STYLE).render(outer_area, buf);
        let block_area = outer_area.inner(Margin::new(1, 1));
        Block::bordered()
            .title(" Enter Date ")
            .title_alignment(Alignment::Center)
            .render(block_area, buf);
        let text_area = block_area.inner(Margin::new(1, 1));
        state.to_text().render(text_area, buf);
    }
}

/// Text typed into the date entry popup
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct DateEntryState {
    text: String,
}

impl DateEntryState {
    pub(crate) fn new() -> DateEntryState {
        DateEntryState::default()
    }

    /// Starts with the given text, such as the current value, already typed
    pub(crate) fn with_text(text: &str) -> DateEntryState {
        let mut state = DateEntryState::new();
        for ch in text.chars() {
            state.handle_input(EntryInput::Char(ch));
        }
        state
    }

    fn to_text(&self) -> Text<'static> {
        Text::from_iter([
            Line::styled("", BASE_STYLE),
            self.to_line(),
            Line::styled("", BASE_STYLE),
            // Style a span and convert it to a line rather than creating a
            // styled line directly so that only the "[ENTER]" text and not any
            // of its centering padding will be underlined:
            Line::from(Span::styled(
                "[ENTER]",
                if self.text.len() == MAX_LEN {
                    READY_ENTER_STYLE
                } else {
                    BASE_STYLE
                },
            )),
        ])
        .centered()
    }

    fn to_line(&self) -> Line<'static> {
        // `text` only ever holds ASCII, so byte offsets are character offsets
        let unfilled = PLACEHOLDER.get(self.text.len()..).unwrap_or_default();
        Line::from_iter([
            Span::styled(self.text.clone(), BASE_STYLE),
            Span::styled(unfilled, UNFILLED_CELL_STYLE),
        ])
    }

    pub(crate) fn handle_input(&mut self, input: EntryInput) -> EntryOutput {
        match input {
            EntryInput::Char(ch @ ('0'..='9' | '-')) if self.text.len() < MAX_LEN => {
                self.text.push(ch);
                EntryOutput::Ok
            }
            EntryInput::Backspace if self.text.pop().is_some() => EntryOutput::Ok,
            EntryInput::Enter => EntryOutput::Submit(self.text.clone()),
            _ => EntryOutput::Invalid,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum EntryInput {
    Char(char),
    Backspace,
    Enter,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum EntryOutput {
    Ok,
    Invalid,
    Submit(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing() {
        let mut state = DateEntryState::new();
        for ch in "2024-03-1".chars() {
            assert_eq!(state.handle_input(EntryInput::Char(ch)), EntryOutput::Ok);
        }
        assert_eq!(state.handle_input(EntryInput::Char('x')), EntryOutput::Invalid);
        assert_eq!(state.handle_input(EntryInput::Char('5')), EntryOutput::Ok);
        assert_eq!(state.handle_input(EntryInput::Char('5')), EntryOutput::Invalid);
        assert_eq!(
            state.handle_input(EntryInput::Enter),
            EntryOutput::Submit(String::from("2024-03-15"))
        );
    }

    #[test]
    fn test_backspace() {
        let mut state = DateEntryState::with_text("20");
        assert_eq!(state.handle_input(EntryInput::Backspace), EntryOutput::Ok);
        assert_eq!(state.handle_input(EntryInput::Backspace), EntryOutput::Ok);
        assert_eq!(state.handle_input(EntryInput::Backspace), EntryOutput::Invalid);
        assert_eq!(
            state.handle_input(EntryInput::Enter),
            EntryOutput::Submit(String::new())
        );
    }

    #[test]
    fn test_placeholder() {
        let state = DateEntryState::with_text("2024-0");
        let line = state.to_line();
        let spans = line
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect::<Vec<_>>();
        assert_eq!(spans, ["2024-0", "M-DD"]);
    }

    #[test]
    fn test_render() {
        let mut state = DateEntryState::with_text("1999-12-31");
        let area = Rect::new(0, 0, OUTER_WIDTH, OUTER_HEIGHT);
        let mut buffer = Buffer::empty(area);
        DateEntry.render(area, &mut buffer, &mut state);
        let mut expected = Buffer::with_lines([
            "                  ",
            " ┌─ Enter Date ─┐ ",
            " │              │ ",
            " │  1999-12-31  │ ",
            " │              │ ",
            " │   [ENTER]    │ ",
            " └──────────────┘ ",
            "                  ",
        ]);
        expected.set_style(area, BASE_STYLE);
        expected.set_style(Rect::new(5, 5, 7, 1), READY_ENTER_STYLE);
        assert_eq!(buffer, expected);
    }
}
