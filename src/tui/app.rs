//! Host application around the autocomplete widget
//!
//! The app owns the widget state and translates terminal events into widget
//! actions. Whatever the widget leaves unhandled gets the host's default
//! behavior: Enter submits the current text, Escape leaves.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::layout::Rect;

use crate::autocomplete::{Action, Autocomplete, Outcome};
use crate::config::Config;

use super::components::autocomplete::AutocompleteLayout;
use super::helpers::{app_height, layouts};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateResult {
    Continue,
    Done,
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct App {
    title: String,
    label: String,
    placeholder: String,
    widget: Autocomplete,
    /// Area of the last frame, used to resolve mouse positions
    area: Rect,
    submitted: Option<String>,
}

impl App {
    pub fn new(config: &Config, suggestions: Vec<String>) -> Self {
        Self {
            title: config.ui.title.clone(),
            label: config.ui.label.clone(),
            placeholder: config.ui.placeholder.clone(),
            widget: Autocomplete::with_options(suggestions, config.filter.options()),
            area: Rect::default(),
            submitted: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn widget(&self) -> &Autocomplete {
        &self.widget
    }

    pub fn set_area(&mut self, area: Rect) {
        self.area = area;
    }

    /// Layout of the widget inside the last known frame area
    pub fn layout(&self) -> AutocompleteLayout {
        let (_, content, _) = layouts::title_content_footer(self.area);
        AutocompleteLayout::compute(content, &self.widget)
    }

    pub fn handle_event(&mut self, event: Event) -> UpdateResult {
        match event {
            Event::Key(key) => self.update(key),
            Event::Mouse(mouse) => self.update_mouse(mouse),
            Event::FocusLost => {
                self.widget.handle(Action::Blur);
                UpdateResult::Continue
            }
            _ => UpdateResult::Continue,
        }
    }

    pub fn update(&mut self, key: KeyEvent) -> UpdateResult {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return UpdateResult::Cancelled;
        }
        if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
            let toggle = if self.widget.is_focused() {
                Action::Blur
            } else {
                Action::Focus
            };
            self.widget.handle(toggle);
            return UpdateResult::Continue;
        }

        let action = Action::from_key(key);
        if !self.widget.is_focused() {
            match action {
                // Focusing opens the dropdown; a closed dropdown's arrow stops there
                Action::Next | Action::Prev => {
                    let was_open = self.widget.is_open();
                    self.widget.handle(Action::Focus);
                    if !was_open {
                        return UpdateResult::Continue;
                    }
                }
                Action::Insert(_)
                | Action::Backspace
                | Action::Delete
                | Action::DeleteWord
                | Action::Clear => {
                    self.widget.handle(Action::Focus);
                }
                // Cursor moves leave focus and visibility alone
                _ => {}
            }
        }
        let outcome = self.widget.handle(action);
        if !outcome.is_ignored() {
            return UpdateResult::Continue;
        }

        // Defaults for keys the widget left alone
        match action {
            Action::Commit if !self.widget.is_empty() => {
                self.submitted = Some(self.widget.text().to_string());
                UpdateResult::Done
            }
            Action::Dismiss => UpdateResult::Cancelled,
            _ => UpdateResult::Continue,
        }
    }

    pub fn update_mouse(&mut self, mouse: MouseEvent) -> UpdateResult {
        let target = self.layout().hit_test(mouse.column, mouse.row);
        let action = Action::from_mouse(mouse, target);
        if let Outcome::Committed(value) = self.widget.handle(action) {
            tracing::debug!("Picked with the mouse: {value}");
        }
        UpdateResult::Continue
    }

    pub fn cursor_position(&self, area: Rect) -> Option<(u16, u16)> {
        if !self.widget.is_focused() {
            return None;
        }
        let (_, content, _) = layouts::title_content_footer(area);
        let layout = AutocompleteLayout::compute(content, &self.widget);
        Some(layout.cursor_position(&self.widget))
    }

    pub fn terminal_height(&self) -> u16 {
        app_height(self.widget.options().limit)
    }

    pub fn extract_result(self) -> Option<String> {
        self.submitted
    }
}
