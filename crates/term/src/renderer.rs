//! TerminalRenderer: owns the terminal session and flushes quiz frames to it.
//!
//! A frame is written in whole only when there is nothing to compare it with
//! (first frame, after a resize, after [`TerminalRenderer::invalidate`]).
//! Otherwise only the horizontal runs of cells that differ are rewritten.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor, event,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb, WIDE_TAIL};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    /// What the terminal currently shows.
    shown: Option<FrameBuffer>,
    out: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            shown: None,
            out: Vec::with_capacity(16 * 1024),
        }
    }

    /// Raw mode, alternate screen, hidden cursor and mouse reporting.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.out.clear();
        self.out.queue(terminal::EnterAlternateScreen)?;
        self.out.queue(cursor::Hide)?;
        self.out.queue(terminal::DisableLineWrap)?;
        self.out.queue(event::EnableMouseCapture)?;
        self.flush()
    }

    /// Undo everything [`enter`](Self::enter) did.
    pub fn exit(&mut self) -> Result<()> {
        self.out.clear();
        self.out.queue(event::DisableMouseCapture)?;
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(terminal::EnableLineWrap)?;
        self.out.queue(cursor::Show)?;
        self.out.queue(terminal::LeaveAlternateScreen)?;
        self.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Forget what is on screen so the next frame is written in whole.
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Show `fb`, then hand the previously shown frame back through `fb`
    /// for the caller to draw the next frame into.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        let prev = self
            .shown
            .take()
            .filter(|p| p.width() == fb.width() && p.height() == fb.height());

        self.out.clear();
        encode_frame(prev.as_ref(), fb, &mut self.out)?;
        self.flush()?;

        let mut back = prev.unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
        std::mem::swap(&mut back, fb);
        self.shown = Some(back);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.write_all(&self.out)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Queue the commands turning `prev` into `next` on screen.
///
/// With no `prev` the screen is cleared and every row written.
pub fn encode_frame(prev: Option<&FrameBuffer>, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut style = None;
    for (x, y, len) in dirty_runs(prev, next) {
        out.queue(cursor::MoveTo(x, y))?;
        for cx in x..x + len {
            let cell = next.get(cx, y).unwrap_or_default();
            write_cell(out, cell, &mut style)?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// `(x, y, len)` runs of cells in `next` that differ from `prev`.
fn dirty_runs(prev: Option<&FrameBuffer>, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    let Some(prev) = prev else {
        return (0..next.height()).map(|y| (0, y, next.width())).collect();
    };

    let mut runs = Vec::new();
    for y in 0..next.height() {
        let mut start = None;
        for x in 0..=next.width() {
            let differs = x < next.width() && prev.get(x, y) != next.get(x, y);
            match (differs, start) {
                (true, None) => start = Some(x),
                (false, Some(s)) => {
                    runs.push((s, y, x - s));
                    start = None;
                }
                _ => {}
            }
        }
    }
    runs
}

fn write_cell(out: &mut Vec<u8>, cell: Cell, current: &mut Option<CellStyle>) -> Result<()> {
    // The wide glyph to the left already covers this column.
    if cell.ch == WIDE_TAIL {
        return Ok(());
    }
    if *current != Some(cell.style) {
        let s = cell.style;
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(SetForegroundColor(color(s.fg)))?;
        out.queue(SetBackgroundColor(color(s.bg)))?;
        if s.bold {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        if s.dim {
            out.queue(SetAttribute(Attribute::Dim))?;
        }
        *current = Some(s);
    }
    out.queue(Print(cell.ch))?;
    Ok(())
}

fn color(Rgb { r, g, b }: Rgb) -> Color {
    Color::Rgb { r, g, b }
}
