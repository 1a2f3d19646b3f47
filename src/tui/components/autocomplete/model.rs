use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use unicode_width::UnicodeWidthStr;

use crate::autocomplete::{Action, Autocomplete, PointerTarget};
use crate::tui::style::INPUT_PROMPT;

/// Preferred width of the widget in columns
pub const WIDGET_WIDTH: u16 = 40;

impl Action {
    pub fn from_key(key: KeyEvent) -> Self {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => Action::Commit,
            KeyCode::Esc => Action::Dismiss,
            KeyCode::Backspace => Action::Backspace,
            KeyCode::Delete => Action::Delete,
            KeyCode::Left => Action::Left,
            KeyCode::Right => Action::Right,
            KeyCode::Up => Action::Prev,
            KeyCode::Down => Action::Next,
            KeyCode::Home => Action::Home,
            KeyCode::End => Action::End,
            KeyCode::Char('a') if ctrl => Action::Home,
            KeyCode::Char('e') if ctrl => Action::End,
            KeyCode::Char('b') if ctrl => Action::BackWord,
            KeyCode::Char('w') if ctrl => Action::DeleteWord,
            KeyCode::Char('u') if ctrl => Action::Clear,
            KeyCode::Char('p') if ctrl => Action::Prev,
            KeyCode::Char('n') if ctrl => Action::Next,
            KeyCode::Char(_) if ctrl => Action::None,
            KeyCode::Char(c) => Action::Insert(c),
            _ => Action::None,
        }
    }

    /// Translate a mouse event that landed on `target`.
    pub fn from_mouse(mouse: MouseEvent, target: PointerTarget) -> Self {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Action::PointerDown(target),
            MouseEventKind::Up(MouseButton::Left) => Action::PointerUp(target),
            MouseEventKind::Moved | MouseEventKind::Drag(MouseButton::Left) => {
                Action::PointerMove(target)
            }
            _ => Action::None,
        }
    }
}

/// Screen geometry of the widget, derived from the area it is given and its
/// current state. Rendering and pointer hit tests use the same layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompleteLayout {
    /// Everything the widget draws; clicks outside this are "outside"
    pub bounds: Rect,
    pub label: Rect,
    pub input: Rect,
    /// One row per visible dropdown entry
    pub entries: Vec<Rect>,
    /// The "No results" row, when open without matches
    pub empty: Option<Rect>,
}

impl AutocompleteLayout {
    pub fn compute(area: Rect, state: &Autocomplete) -> Self {
        let width = area.width.min(WIDGET_WIDTH);
        let row = |offset: u16, height: u16| {
            Rect::new(area.x, area.y.saturating_add(offset), width, height).intersection(area)
        };

        let label = row(0, 1);
        let input = row(1, 3);

        let mut entries = Vec::new();
        let mut empty = None;
        if state.is_open() {
            if state.filtered().is_empty() {
                empty = Some(row(4, 1)).filter(|r| !r.is_empty());
            } else {
                entries = (0..state.filtered().len())
                    .map(|idx| row(4 + idx as u16, 1))
                    .take_while(|r| !r.is_empty())
                    .collect();
            }
        }

        let bounds = entries
            .iter()
            .chain(empty.iter())
            .fold(label.union(input), |acc, r| acc.union(*r));

        Self {
            bounds,
            label,
            input,
            entries,
            empty,
        }
    }

    /// Resolve a screen position to the part of the widget under it.
    pub fn hit_test(&self, column: u16, row: u16) -> PointerTarget {
        let pos = Position::new(column, row);
        if let Some(idx) = self.entries.iter().position(|r| r.contains(pos)) {
            PointerTarget::Entry(idx)
        } else if self.input.contains(pos) {
            PointerTarget::Input
        } else if self.bounds.contains(pos) {
            PointerTarget::Inside
        } else {
            PointerTarget::Outside
        }
    }

    /// Position of the text cursor inside the input box, in display columns
    pub fn cursor_position(&self, state: &Autocomplete) -> (u16, u16) {
        let before: String = state.text().chars().take(state.cursor()).collect();
        let column = u16::try_from(before.width()).unwrap_or(u16::MAX);
        let x = self
            .input
            .x
            .saturating_add(INPUT_PROMPT.width() as u16)
            .saturating_add(column);
        let y = self.input.y.saturating_add(1);
        (x.min(self.input.right().saturating_sub(1)), y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestions::cities;
    use rstest::rstest;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn mouse(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn open_with(text: &str) -> Autocomplete {
        let mut state = Autocomplete::new(cities());
        state.handle(Action::Focus);
        for c in text.chars() {
            state.handle(Action::Insert(c));
        }
        state
    }

    #[rstest]
    #[case(key(KeyCode::Down), Action::Next)]
    #[case(key(KeyCode::Up), Action::Prev)]
    #[case(key(KeyCode::Enter), Action::Commit)]
    #[case(key(KeyCode::Esc), Action::Dismiss)]
    #[case(key(KeyCode::Char('x')), Action::Insert('x'))]
    #[case(key(KeyCode::Char(' ')), Action::Insert(' '))]
    #[case(key(KeyCode::Backspace), Action::Backspace)]
    #[case(ctrl('u'), Action::Clear)]
    #[case(ctrl('w'), Action::DeleteWord)]
    #[case(ctrl('n'), Action::Next)]
    #[case(ctrl('p'), Action::Prev)]
    #[case(ctrl('c'), Action::None)]
    #[case(key(KeyCode::Tab), Action::None)]
    fn test_action_from_key(#[case] event: KeyEvent, #[case] expected: Action) {
        assert_eq!(Action::from_key(event), expected);
    }

    #[test]
    fn test_action_from_mouse() {
        let target = PointerTarget::Entry(2);
        assert_eq!(
            Action::from_mouse(mouse(MouseEventKind::Down(MouseButton::Left)), target),
            Action::PointerDown(target)
        );
        assert_eq!(
            Action::from_mouse(mouse(MouseEventKind::Up(MouseButton::Left)), target),
            Action::PointerUp(target)
        );
        assert_eq!(
            Action::from_mouse(mouse(MouseEventKind::Moved), target),
            Action::PointerMove(target)
        );
        assert_eq!(
            Action::from_mouse(mouse(MouseEventKind::Down(MouseButton::Right)), target),
            Action::None
        );
        assert_eq!(
            Action::from_mouse(mouse(MouseEventKind::ScrollDown), target),
            Action::None
        );
    }

    #[test]
    fn test_layout_closed() {
        let state = Autocomplete::new(cities());
        let layout = AutocompleteLayout::compute(Rect::new(2, 1, 80, 12), &state);
        assert_eq!(layout.label, Rect::new(2, 1, 40, 1));
        assert_eq!(layout.input, Rect::new(2, 2, 40, 3));
        assert!(layout.entries.is_empty());
        assert_eq!(layout.empty, None);
        assert_eq!(layout.bounds, Rect::new(2, 1, 40, 4));
    }

    #[test]
    fn test_layout_open_with_results() {
        let state = open_with("new");
        let layout = AutocompleteLayout::compute(Rect::new(0, 0, 30, 12), &state);
        assert_eq!(
            layout.entries,
            vec![
                Rect::new(0, 4, 30, 1),
                Rect::new(0, 5, 30, 1),
                Rect::new(0, 6, 30, 1),
            ]
        );
        assert_eq!(layout.bounds, Rect::new(0, 0, 30, 7));
    }

    #[test]
    fn test_layout_open_empty() {
        let state = open_with("zzz");
        let layout = AutocompleteLayout::compute(Rect::new(0, 0, 40, 12), &state);
        assert!(layout.entries.is_empty());
        assert_eq!(layout.empty, Some(Rect::new(0, 4, 40, 1)));
        assert_eq!(layout.bounds, Rect::new(0, 0, 40, 5));
    }

    #[test]
    fn test_layout_clips_entries() {
        let state = open_with("");
        let layout = AutocompleteLayout::compute(Rect::new(0, 0, 40, 6), &state);
        assert_eq!(layout.entries.len(), 2);
    }

    #[test]
    fn test_hit_test() {
        let state = open_with("new");
        let layout = AutocompleteLayout::compute(Rect::new(0, 0, 40, 12), &state);
        assert_eq!(layout.hit_test(3, 2), PointerTarget::Input);
        assert_eq!(layout.hit_test(3, 4), PointerTarget::Entry(0));
        assert_eq!(layout.hit_test(39, 6), PointerTarget::Entry(2));
        assert_eq!(layout.hit_test(3, 0), PointerTarget::Inside);
        assert_eq!(layout.hit_test(3, 7), PointerTarget::Outside);
        assert_eq!(layout.hit_test(40, 4), PointerTarget::Outside);
    }

    #[test]
    fn test_cursor_position() {
        let state = open_with("new");
        let layout = AutocompleteLayout::compute(Rect::new(0, 1, 40, 12), &state);
        assert_eq!(layout.cursor_position(&state), (5, 3));
    }

    #[test]
    fn test_cursor_position_counts_display_columns() {
        let mut state = open_with("東京都");
        let layout = AutocompleteLayout::compute(Rect::new(0, 0, 40, 12), &state);
        assert_eq!(layout.cursor_position(&state), (8, 2));
        state.handle(Action::Left);
        assert_eq!(layout.cursor_position(&state), (6, 2));
    }

    #[test]
    fn test_cursor_position_clamped_to_input() {
        let state = open_with(&"x".repeat(100));
        let layout = AutocompleteLayout::compute(Rect::new(0, 0, 40, 12), &state);
        assert_eq!(layout.cursor_position(&state), (39, 2));
    }
}
