//! TUI run loop for the interactive picker.

use std::io;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::widgets::Widget;

use super::app::{App, UpdateResult};
use super::backend::{InlineTerminal, MouseCapture};

/// Run the app to completion.
///
/// Returns `None` if the user cancelled, or the submitted text.
pub fn run(mut app: App) -> io::Result<Option<String>> {
    let mut term = InlineTerminal::new(app.terminal_height())?;
    // Dropped before the terminal, so capture ends while raw mode is still on.
    let _mouse = MouseCapture::acquire()?;

    loop {
        term.terminal().draw(|frame| {
            let area = frame.area();
            app.set_area(area);
            (&app).render(area, frame.buffer_mut());
            if let Some((x, y)) = app.cursor_position(area) {
                frame.set_cursor_position((x, y));
            }
        })?;

        let event = event::read()?;
        if let Event::Key(key) = &event
            && key.kind != KeyEventKind::Press
        {
            continue;
        }
        match app.handle_event(event) {
            UpdateResult::Continue => {}
            UpdateResult::Done => return Ok(app.extract_result()),
            UpdateResult::Cancelled => return Ok(None),
        }
    }
}
