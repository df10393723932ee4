#![forbid(unsafe_code)]

//! Crossterm terminal session and frame presenter.
//!
//! [`TerminalSession`] owns raw mode and the optional terminal features and
//! restores all of them on drop, including when the loop exits with an
//! error. [`Presenter`] writes a [`Frame`] to any [`Write`], repainting only
//! rows that changed since the previous frame.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::{cursor, event as cte, queue, terminal};
use wordgrid_core::event::Event;
use wordgrid_style::{Color, Style, StyleFlags};
use wordgrid_widgets::Frame;

use crate::program::{ProgramConfig, ScreenMode};

/// A terminal session that manages raw mode and cleanup.
///
/// Each optional mode has a corresponding `_enabled` flag, set only once the
/// mode is on, so cleanup disables exactly what was enabled.
#[derive(Debug)]
pub struct TerminalSession {
    screen_mode: ScreenMode,
    origin_y: u16,
    alternate_screen_enabled: bool,
    mouse_enabled: bool,
    bracketed_paste_enabled: bool,
}

impl TerminalSession {
    /// Enter raw mode and enable what `config` asks for.
    pub fn new(config: &ProgramConfig) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        tracing::debug!("terminal raw mode enabled");

        let mut session = Self {
            screen_mode: config.screen_mode,
            origin_y: 0,
            alternate_screen_enabled: false,
            mouse_enabled: false,
            bracketed_paste_enabled: false,
        };
        let mut stdout = io::stdout();

        match config.screen_mode {
            ScreenMode::AltScreen => {
                crossterm::execute!(
                    stdout,
                    terminal::EnterAlternateScreen,
                    terminal::Clear(terminal::ClearType::All),
                    cursor::MoveTo(0, 0)
                )?;
                session.alternate_screen_enabled = true;
            }
            ScreenMode::Inline { ui_height } => {
                // Reserve rows below the prompt, scrolling if needed.
                let (_, rows) = session.size()?;
                let height = ui_height.min(rows);
                for _ in 0..height {
                    stdout.write_all(b"\n")?;
                }
                stdout.flush()?;
                let (_, row) = cursor::position()?;
                session.origin_y = row.saturating_sub(height);
            }
        }

        if config.mouse {
            crossterm::execute!(stdout, cte::EnableMouseCapture)?;
            session.mouse_enabled = true;
        }
        if config.bracketed_paste {
            crossterm::execute!(stdout, cte::EnableBracketedPaste)?;
            session.bracketed_paste_enabled = true;
        }
        crossterm::execute!(stdout, cursor::Hide)?;
        tracing::debug!(
            alt_screen = session.alternate_screen_enabled,
            mouse = session.mouse_enabled,
            "terminal session ready"
        );
        Ok(session)
    }

    /// Terminal size, with an 80x24 fallback for terminals that report zero.
    pub fn size(&self) -> io::Result<(u16, u16)> {
        let (w, h) = terminal::size()?;
        if w > 1 && h > 1 { Ok((w, h)) } else { Ok((80, 24)) }
    }

    /// Rows available to the UI on a terminal `height` rows tall.
    pub fn ui_height(&self, height: u16) -> u16 {
        match self.screen_mode {
            ScreenMode::AltScreen => height,
            ScreenMode::Inline { ui_height } => ui_height.min(height),
        }
    }

    /// Top-left corner of the UI region.
    pub fn origin(&self) -> (u16, u16) {
        (0, self.origin_y)
    }

    /// Wait up to `timeout` for input.
    pub fn poll_event(&self, timeout: Duration) -> io::Result<bool> {
        cte::poll(timeout)
    }

    /// Read one event; `None` when crossterm produced something unmapped.
    pub fn read_event(&self) -> io::Result<Option<Event>> {
        Ok(Event::from_crossterm(cte::read()?))
    }

    fn cleanup(&mut self) {
        let mut stdout = io::stdout();
        let _ = crossterm::execute!(stdout, cursor::Show);
        if self.bracketed_paste_enabled {
            let _ = crossterm::execute!(stdout, cte::DisableBracketedPaste);
            self.bracketed_paste_enabled = false;
        }
        if self.mouse_enabled {
            let _ = crossterm::execute!(stdout, cte::DisableMouseCapture);
            self.mouse_enabled = false;
        }
        if self.alternate_screen_enabled {
            let _ = crossterm::execute!(stdout, terminal::LeaveAlternateScreen);
            self.alternate_screen_enabled = false;
        }
        let _ = terminal::disable_raw_mode();
        let _ = stdout.flush();
        tracing::debug!("terminal restored");
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.cleanup();
    }
}

fn to_crossterm(color: Color) -> crossterm::style::Color {
    crossterm::style::Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

const ATTRIBUTES: [(StyleFlags, Attribute); 6] = [
    (StyleFlags::BOLD, Attribute::Bold),
    (StyleFlags::DIM, Attribute::Dim),
    (StyleFlags::ITALIC, Attribute::Italic),
    (StyleFlags::UNDERLINE, Attribute::Underlined),
    (StyleFlags::REVERSE, Attribute::Reverse),
    (StyleFlags::STRIKE, Attribute::CrossedOut),
];

/// Writes frames to a terminal, skipping unchanged rows.
pub struct Presenter<W: Write> {
    out: W,
    origin: (u16, u16),
    previous: Option<Frame>,
}

impl<W: Write> Presenter<W> {
    pub fn new(out: W, origin: (u16, u16)) -> Self {
        Self {
            out,
            origin,
            previous: None,
        }
    }

    /// Forget the previous frame so the next one is painted in full.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Paint `frame`.
    pub fn present(&mut self, frame: &Frame) -> io::Result<()> {
        let (ox, oy) = self.origin;
        let reuse = self
            .previous
            .as_ref()
            .filter(|p| p.width() == frame.width() && p.height() == frame.height());
        if reuse.is_none() {
            queue!(
                self.out,
                cursor::MoveTo(ox, oy),
                terminal::Clear(terminal::ClearType::FromCursorDown)
            )?;
        }

        let mut painted = 0usize;
        for (y, row) in frame.rows().enumerate() {
            if reuse.is_some_and(|prev| prev.rows().nth(y) == Some(row)) {
                continue;
            }
            painted += 1;
            queue!(self.out, cursor::MoveTo(ox, oy + y as u16), SetAttribute(Attribute::Reset))?;
            let mut current: Option<Style> = None;
            for cell in row {
                if cell.is_continuation() {
                    continue;
                }
                if current != Some(cell.style) {
                    Self::apply_style(&mut self.out, cell.style)?;
                    current = Some(cell.style);
                }
                queue!(self.out, Print(&cell.symbol))?;
            }
        }
        queue!(self.out, SetAttribute(Attribute::Reset))?;

        match frame.cursor() {
            Some((x, y)) => queue!(self.out, cursor::MoveTo(ox + x, oy + y), cursor::Show)?,
            None => queue!(self.out, cursor::Hide)?,
        }
        self.out.flush()?;
        tracing::trace!(rows = painted, "frame presented");
        self.previous = Some(frame.clone());
        Ok(())
    }

    fn apply_style(out: &mut W, style: Style) -> io::Result<()> {
        queue!(out, SetAttribute(Attribute::Reset))?;
        if let Some(fg) = style.fg {
            queue!(out, SetForegroundColor(to_crossterm(fg)))?;
        }
        if let Some(bg) = style.bg {
            queue!(out, SetBackgroundColor(to_crossterm(bg)))?;
        }
        for (flag, attribute) in ATTRIBUTES {
            if style.attrs.contains(flag) {
                queue!(out, SetAttribute(attribute))?;
            }
        }
        Ok(())
    }

    /// Leave the cursor below the UI region.
    pub fn finish(&mut self, height: u16) -> io::Result<()> {
        let (_, oy) = self.origin;
        queue!(
            self.out,
            SetAttribute(Attribute::Reset),
            cursor::MoveTo(0, oy.saturating_add(height)),
            cursor::Show
        )?;
        self.out.write_all(b"\r\n")?;
        self.out.flush()
    }

    /// The underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.out
    }
}
