//! Autocomplete state machine.
//!
//! [`Autocomplete`] owns the input text, the open flag and the active index,
//! and keeps the filtered suggestions in sync with them. All mutation goes
//! through [`Autocomplete::handle`] (or [`Autocomplete::select`]), and every
//! path that can shrink the filtered list ends in a reconciliation step, so
//! `active < filtered.len()` holds between any two events.
//!
//! The model knows nothing about terminals: the rendering layer translates key
//! presses and pointer positions into [`Action`]s.

use crate::filter::{FilterOptions, Match, filter};

/// Characters that separate words for cursor navigation
const WORD_BOUNDARIES: &[char] = &[' ', ',', '-', '/'];

/// Where a pointer event landed, resolved by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The text input itself.
    Input,
    /// The visible entry at this position in the filtered list.
    Entry(usize),
    /// Somewhere inside the widget that is neither input nor entry
    /// (borders, the "No results" box).
    Inside,
    /// Anywhere outside the widget's rendered bounds.
    Outside,
}

/// Events the widget reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    BackWord,
    DeleteWord,
    Clear,
    Focus,
    Blur,
    /// Arrow-Down
    Next,
    /// Arrow-Up
    Prev,
    /// Enter
    Commit,
    /// Escape
    Dismiss,
    PointerDown(PointerTarget),
    PointerUp(PointerTarget),
    PointerMove(PointerTarget),
    None,
}

/// What handling an [`Action`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed; the host is free to act on the event itself.
    Ignored,
    /// State changed, the event's default behavior still applies.
    Updated,
    /// State changed and the event's default behavior must be suppressed.
    Consumed,
    /// A value was committed into the input.
    Committed(String),
}

impl Outcome {
    /// Whether the host must suppress its own handling of the event.
    pub fn prevents_default(&self) -> bool {
        matches!(self, Outcome::Consumed | Outcome::Committed(_))
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, Outcome::Ignored)
    }

    fn changed(changed: bool) -> Self {
        if changed {
            Outcome::Updated
        } else {
            Outcome::Ignored
        }
    }
}

/// Derived dropdown state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Closed,
    OpenWithResults,
    OpenEmpty,
}

#[derive(Debug, Clone)]
pub struct Autocomplete {
    suggestions: Vec<String>,
    options: FilterOptions,
    input: String,
    /// Cursor position in characters
    cursor: usize,
    open: bool,
    active: Option<usize>,
    focused: bool,
    /// Entry under a pointer press that has not been released yet
    pressed: Option<usize>,
    filtered: Vec<Match>,
}

impl Default for Autocomplete {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Autocomplete {
    pub fn new(suggestions: Vec<String>) -> Self {
        Self::with_options(suggestions, FilterOptions::default())
    }

    pub fn with_options(suggestions: Vec<String>, options: FilterOptions) -> Self {
        let filtered = filter("", &suggestions, &options);
        Self {
            suggestions,
            options,
            input: String::new(),
            cursor: 0,
            open: false,
            active: None,
            focused: false,
            pressed: None,
            filtered,
        }
    }

    pub fn text(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn pressed_index(&self) -> Option<usize> {
        self.pressed
    }

    pub fn filtered(&self) -> &[Match] {
        &self.filtered
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn active_item(&self) -> Option<&Match> {
        self.active.and_then(|idx| self.filtered.get(idx))
    }

    pub fn visibility(&self) -> Visibility {
        match (self.open, self.filtered.is_empty()) {
            (false, _) => Visibility::Closed,
            (true, false) => Visibility::OpenWithResults,
            (true, true) => Visibility::OpenEmpty,
        }
    }

    /// Replace the suggestion list.
    pub fn set_suggestions(&mut self, suggestions: Vec<String>) {
        self.suggestions = suggestions;
        self.refilter();
    }

    /// Replace the filter tunables.
    pub fn set_options(&mut self, options: FilterOptions) {
        self.options = options;
        self.refilter();
    }

    /// Commit `value` as if it had been picked from the list.
    pub fn select(&mut self, value: &str) -> Outcome {
        self.commit(value.to_string())
    }

    /// Handle an action, returning what it did
    pub fn handle(&mut self, action: Action) -> Outcome {
        match action {
            Action::Insert(c) => {
                let at = self.byte_offset(self.cursor);
                self.input.insert(at, c);
                self.cursor += 1;
                self.input_changed()
            }
            Action::Backspace => {
                if self.cursor == 0 {
                    return Outcome::Ignored;
                }
                self.cursor -= 1;
                let at = self.byte_offset(self.cursor);
                self.input.remove(at);
                self.input_changed()
            }
            Action::Delete => {
                if self.cursor >= self.char_len() {
                    return Outcome::Ignored;
                }
                let at = self.byte_offset(self.cursor);
                self.input.remove(at);
                self.input_changed()
            }
            Action::Left => self.move_cursor(self.cursor.saturating_sub(1)),
            Action::Right => self.move_cursor((self.cursor + 1).min(self.char_len())),
            Action::Home => self.move_cursor(0),
            Action::End => self.move_cursor(self.char_len()),
            Action::BackWord => self.move_cursor(self.find_prev_boundary()),
            Action::DeleteWord => {
                let from = self.find_prev_boundary();
                if from == self.cursor {
                    return Outcome::Ignored;
                }
                let (start, end) = (self.byte_offset(from), self.byte_offset(self.cursor));
                self.input.replace_range(start..end, "");
                self.cursor = from;
                self.input_changed()
            }
            Action::Clear => {
                if self.input.is_empty() {
                    return Outcome::Ignored;
                }
                self.input.clear();
                self.cursor = 0;
                self.input_changed()
            }
            Action::Focus => {
                let changed = !self.focused || !self.open;
                self.focused = true;
                self.set_open(true);
                Outcome::changed(changed)
            }
            Action::Blur => {
                let changed = self.focused;
                self.focused = false;
                Outcome::changed(changed)
            }
            Action::Next => {
                if !self.open {
                    self.set_open(true);
                    return Outcome::Updated;
                }
                self.active = match self.filtered.len() {
                    0 => None,
                    len => Some(self.active.map_or(0, |i| i + 1).min(len - 1)),
                };
                Outcome::Consumed
            }
            Action::Prev => {
                if !self.open {
                    self.set_open(true);
                    return Outcome::Updated;
                }
                self.active = match self.filtered.len() {
                    0 => None,
                    _ => Some(self.active.map_or(0, |i| i.saturating_sub(1))),
                };
                Outcome::Consumed
            }
            Action::Commit => match self.active_item() {
                Some(item) => {
                    let value = item.text.clone();
                    self.commit(value)
                }
                None => Outcome::Ignored,
            },
            Action::Dismiss => {
                let changed = self.open || self.active.is_some();
                self.close();
                Outcome::changed(changed)
            }
            Action::PointerDown(target) => self.pointer_down(target),
            Action::PointerUp(target) => self.pointer_up(target),
            Action::PointerMove(target) => self.pointer_move(target),
            Action::None => Outcome::Ignored,
        }
    }

    fn pointer_down(&mut self, target: PointerTarget) -> Outcome {
        match target {
            // Pressing an entry must not take focus away from the input,
            // otherwise the release would never reach the entry.
            PointerTarget::Entry(idx) if self.open && idx < self.filtered.len() => {
                self.pressed = Some(idx);
                Outcome::Consumed
            }
            PointerTarget::Entry(_) | PointerTarget::Inside => Outcome::Ignored,
            PointerTarget::Input => self.handle(Action::Focus),
            PointerTarget::Outside => {
                let changed = self.open || self.active.is_some() || self.focused;
                self.close();
                self.focused = false;
                Outcome::changed(changed)
            }
        }
    }

    fn pointer_up(&mut self, target: PointerTarget) -> Outcome {
        let pressed = self.pressed.take();
        match (pressed, target) {
            (Some(down), PointerTarget::Entry(up)) if down == up => {
                match self.filtered.get(up) {
                    Some(item) => {
                        let value = item.text.clone();
                        self.commit(value)
                    }
                    None => Outcome::Updated,
                }
            }
            (Some(_), _) => Outcome::Updated,
            (None, _) => Outcome::Ignored,
        }
    }

    fn pointer_move(&mut self, target: PointerTarget) -> Outcome {
        match target {
            PointerTarget::Entry(idx) if self.open && idx < self.filtered.len() => {
                let changed = self.active != Some(idx);
                self.active = Some(idx);
                Outcome::changed(changed)
            }
            _ => Outcome::Ignored,
        }
    }

    /// Common tail of every edit that changed the text.
    fn input_changed(&mut self) -> Outcome {
        self.set_open(true);
        self.active = None;
        self.refilter();
        Outcome::Updated
    }

    fn commit(&mut self, value: String) -> Outcome {
        tracing::debug!("Committing selection: {value}");
        self.input = value.clone();
        self.cursor = self.char_len();
        self.close();
        self.refilter();
        Outcome::Committed(value)
    }

    fn close(&mut self) {
        self.set_open(false);
        self.active = None;
        self.pressed = None;
    }

    fn set_open(&mut self, open: bool) {
        if self.open != open {
            tracing::trace!(open, "Dropdown visibility changed");
        }
        self.open = open;
    }

    fn move_cursor(&mut self, to: usize) -> Outcome {
        let changed = self.cursor != to;
        self.cursor = to;
        Outcome::changed(changed)
    }

    /// Recompute the filtered list for the current (input, suggestions) pair.
    fn refilter(&mut self) {
        self.filtered = filter(&self.input, &self.suggestions, &self.options);
        self.reconcile();
    }

    /// Pull indices that point past the filtered list back into range.
    fn reconcile(&mut self) {
        let len = self.filtered.len();
        if self.active.is_some_and(|idx| idx >= len) {
            self.active = len.checked_sub(1);
        }
        if self.pressed.is_some_and(|idx| idx >= len) {
            self.pressed = None;
        }
    }

    fn char_len(&self) -> usize {
        self.input.chars().count()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_idx)
            .map_or(self.input.len(), |(byte, _)| byte)
    }

    fn find_prev_boundary(&self) -> usize {
        if self.cursor == 0 {
            return 0;
        }
        let chars: Vec<char> = self.input.chars().collect();
        chars[..self.cursor - 1]
            .iter()
            .rposition(|c| WORD_BOUNDARIES.contains(c))
            .map_or(0, |p| p + 1)
    }
}
