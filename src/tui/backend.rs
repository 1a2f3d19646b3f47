use std::io::{self, Stdout, Write};

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{Terminal, TerminalOptions, Viewport, backend::CrosstermBackend};

/// Raw-mode terminal drawing into an inline viewport below the cursor, or the
/// alternate screen when the requested height doesn't fit.
pub struct InlineTerminal {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    inline_mode: bool,
    height: u16,
}

impl InlineTerminal {
    pub fn new(height: u16) -> io::Result<Self> {
        let (_, term_height) = terminal::size()?;

        let inline_mode = height < term_height;

        terminal::enable_raw_mode()?;
        // Drop never runs if construction fails, so undo the setup here.
        let terminal = undo_on_error(Self::setup(inline_mode, height), || {
            if !inline_mode {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
            }
            let _ = terminal::disable_raw_mode();
        })?;

        Ok(Self {
            terminal,
            inline_mode,
            height,
        })
    }

    fn setup(inline_mode: bool, height: u16) -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
        let mut stdout = io::stdout();
        if !inline_mode {
            execute!(stdout, EnterAlternateScreen)?;
        }

        let backend = CrosstermBackend::new(stdout);
        let viewport = if inline_mode {
            Viewport::Inline(height)
        } else {
            Viewport::Fullscreen
        };
        Terminal::with_options(backend, TerminalOptions { viewport })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for InlineTerminal {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let mut stdout = io::stdout();
        if self.inline_mode {
            let _ = execute!(
                stdout,
                cursor::MoveUp(self.height),
                Clear(ClearType::FromCursorDown),
            );
        } else {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
        let _ = stdout.flush();
    }
}

/// Run `undo` if `result` failed, then pass the result through.
fn undo_on_error<T>(result: io::Result<T>, undo: impl FnOnce()) -> io::Result<T> {
    if result.is_err() {
        undo();
    }
    result
}

/// Terminal-wide mouse reporting.
///
/// This is the one process-wide resource the widget uses: mouse events are
/// delivered only while a guard is alive, and dropping the guard turns them
/// off again, so no pointer event can arrive once the widget is gone.
pub struct MouseCapture {
    _private: (),
}

impl MouseCapture {
    pub fn acquire() -> io::Result<Self> {
        execute!(io::stdout(), EnableMouseCapture)?;
        tracing::debug!("Mouse capture enabled");
        Ok(Self { _private: () })
    }
}

impl Drop for MouseCapture {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), DisableMouseCapture);
        tracing::debug!("Mouse capture disabled");
    }
}
