//! QuizView: maps a `core::QuizSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). Alongside each frame it returns a [`Layout`]
//! recording which screen cells belong to which tile or drop target, so mouse
//! events can be resolved against exactly what was drawn.

use chrono::Local;

use crate::core::{LeaderboardRow, QuizSnapshot, SlotSnapshot, TileSnapshot};
use crate::fb::{str_width, wrap_text, CellStyle, FrameBuffer, Rgb};
use crate::types::{format_mm_ss, DropTarget, Hit, Mark, Phase, NO_SCORES_MESSAGE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && u32::from(x) < u32::from(self.x) + u32::from(self.w)
            && u32::from(y) < u32::from(self.y) + u32::from(self.h)
    }
}

/// Interactive regions of the last rendered frame.
///
/// Later regions sit on top of earlier ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    regions: Vec<(Rect, Hit)>,
}

impl Layout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rect: Rect, hit: Hit) {
        if rect.w > 0 && rect.h > 0 {
            self.regions.push((rect, hit));
        }
    }

    /// What sits under the cell `(x, y)`.
    pub fn hit(&self, x: u16, y: u16) -> Option<Hit> {
        self.regions
            .iter()
            .rev()
            .find(|(rect, _)| rect.contains(x, y))
            .map(|&(_, hit)| hit)
    }

    pub fn regions(&self) -> &[(Rect, Hit)] {
        &self.regions
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

const TEXT: Rgb = Rgb::new(220, 220, 220);
const MUTED: Rgb = Rgb::new(140, 140, 150);
const ACCENT: Rgb = Rgb::new(120, 190, 255);
const TILE_BG: Rgb = Rgb::new(45, 50, 70);
const FOCUS_BG: Rgb = Rgb::new(70, 90, 140);
const HOVER_BG: Rgb = Rgb::new(120, 100, 30);
const CORRECT: Rgb = Rgb::new(100, 220, 120);
const INCORRECT: Rgb = Rgb::new(230, 90, 90);
const OVERLAY_BG: Rgb = Rgb::new(25, 25, 35);

const INSTRUCTIONS: &[&str] = &[
    "Match each keyword to its definition.",
    "Mouse: press a keyword, drag it onto a definition and release.",
    "Keyboard: arrows move, Tab switches column, Space picks up and drops.",
    "Dropping on a filled definition sends its keyword back to the list.",
    "Press N to start.",
];

/// Leaderboard row text: `#<rank>  MM:SS  (<local date/time>)`.
pub fn leaderboard_line(row: &LeaderboardRow) -> String {
    format!(
        "#{}  {}  ({})",
        row.rank,
        format_mm_ss(row.elapsed_ms),
        row.completed_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M")
    )
}

/// A terminal renderer for the keyword quiz.
pub struct QuizView {
    /// Upper bound on the keyword column width.
    max_pool_w: u16,
}

impl Default for QuizView {
    fn default() -> Self {
        Self { max_pool_w: 28 }
    }
}

impl QuizView {
    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &QuizSnapshot, viewport: Viewport, fb: &mut FrameBuffer) -> Layout {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let mut layout = Layout::new();
        if viewport.width < 2 || viewport.height < 2 {
            return layout;
        }

        self.draw_header(fb, snap, viewport);

        let top = 3;
        let mut y = match snap.phase {
            Phase::Idle => self.draw_instructions(fb, viewport, top).saturating_add(1),
            Phase::Playing | Phase::Finished => {
                let bottom = self.draw_board(fb, snap, viewport, top, &mut layout);
                if snap.phase == Phase::Playing && snap.paused {
                    layout = Layout::new();
                    self.draw_pause_overlay(fb, viewport, top, bottom);
                }
                bottom
            }
        };

        if snap.phase == Phase::Playing {
            if let Some(tile) = snap.dragging.as_ref().filter(|_| !snap.paused) {
                let style = CellStyle::fg(ACCENT);
                let x = fb.put_str(1, y, "Dragging: ", style);
                fb.put_str(x, y, &tile.keyword, style.bold());
            }
            return layout;
        }

        if let Some(feedback) = snap.feedback.as_deref() {
            y = y.saturating_add(1);
            let color = if snap.slots.iter().all(|s| s.mark == Some(Mark::Correct)) {
                CORRECT
            } else {
                TEXT
            };
            fb.put_str(1, y, feedback, CellStyle::fg(color).bold());
            y = y.saturating_add(2);
        }

        self.draw_leaderboard(fb, snap, viewport, y);
        layout
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &QuizSnapshot, viewport: Viewport) -> (FrameBuffer, Layout) {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let layout = self.render_into(snap, viewport, &mut fb);
        (fb, layout)
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &QuizSnapshot, viewport: Viewport) {
        fb.put_str(1, 0, "KEYWORD MATCH", CellStyle::fg(ACCENT).bold());

        if snap.phase != Phase::Idle {
            let timer = format!("Time {}", snap.timer_text);
            let x = viewport.width.saturating_sub(str_width(&timer) + 1);
            fb.put_str(x, 0, &timer, CellStyle::fg(TEXT).bold());
        }

        let hint = match (snap.phase, snap.paused) {
            (Phase::Idle, _) => "N start  Q quit",
            (Phase::Playing, true) => "G continue  N restart  Q quit",
            (Phase::Playing, false) => {
                "C check  P pause  Space pick/drop  Tab switch  Esc cancel  Q quit"
            }
            (Phase::Finished, _) => "R play again  N new game  Q quit",
        };
        fb.put_str(1, 1, hint, CellStyle::fg(MUTED).dim());
    }

    fn draw_instructions(&self, fb: &mut FrameBuffer, viewport: Viewport, top: u16) -> u16 {
        let mut y = top;
        let width = viewport.width.saturating_sub(2);
        for line in INSTRUCTIONS {
            for wrapped in wrap_text(line, width) {
                fb.put_str(1, y, &wrapped, CellStyle::fg(TEXT));
                y = y.saturating_add(1);
            }
        }
        y
    }

    /// Draw pool and definitions, returning the first row below them.
    fn draw_board(
        &self,
        fb: &mut FrameBuffer,
        snap: &QuizSnapshot,
        viewport: Viewport,
        top: u16,
        layout: &mut Layout,
    ) -> u16 {
        let interactive = snap.playable();
        let pool_x = 1;
        let pool_w = (viewport.width / 3).clamp(8, self.max_pool_w);
        let defs_x = pool_x + pool_w + 2;
        let defs_w = viewport.width.saturating_sub(defs_x + 1);

        // Keyword pool.
        let header = if snap.pool_hovered {
            CellStyle::fg(TEXT).bold().on(HOVER_BG)
        } else {
            CellStyle::fg(ACCENT).bold()
        };
        fb.put_str_clipped(pool_x, top, "KEYWORDS", pool_w, header);

        let mut pool_y = top + 2;
        let mut tile_rows = Vec::with_capacity(snap.pool.len());
        if snap.pool.is_empty() {
            fb.put_str_clipped(pool_x, pool_y, "(all placed)", pool_w, CellStyle::fg(MUTED).dim());
            pool_y += 2;
        }
        for tile in &snap.pool {
            let end = draw_tile(fb, pool_x, pool_y, pool_w, tile, false);
            tile_rows.push((Rect::new(pool_x, pool_y, end - pool_x, 1), tile.id));
            pool_y += 2;
        }

        // Definitions.
        let mut y = top;
        if defs_w > 4 {
            fb.put_str(defs_x, y, "DEFINITIONS", CellStyle::fg(ACCENT).bold());
            y += 2;
            for slot in &snap.slots {
                let start = y;
                let box_rect = self.draw_slot(fb, defs_x, defs_w, &mut y, slot);
                if interactive {
                    let target = DropTarget::Slot(slot.id);
                    layout.push(
                        Rect::new(defs_x, start, defs_w, y - start),
                        Hit {
                            tile: None,
                            drop: Some(target),
                        },
                    );
                    if let Some(tile) = &slot.occupant {
                        layout.push(
                            box_rect,
                            Hit {
                                tile: Some(tile.id),
                                drop: Some(target),
                            },
                        );
                    }
                }
                y += 1;
            }
        }

        let bottom = y.max(pool_y);
        if interactive {
            layout.push(
                Rect::new(pool_x, top, pool_w, bottom - top),
                Hit {
                    tile: None,
                    drop: Some(DropTarget::Pool),
                },
            );
            for (rect, id) in tile_rows {
                layout.push(
                    rect,
                    Hit {
                        tile: Some(id),
                        drop: Some(DropTarget::Pool),
                    },
                );
            }
        }
        bottom
    }

    /// Draw one numbered definition with its drop box. Advances `y` past it
    /// and returns the drop box area.
    fn draw_slot(&self, fb: &mut FrameBuffer, x: u16, w: u16, y: &mut u16, slot: &SlotSnapshot) -> Rect {
        let number = format!("{}. ", slot.number);
        let number_style = if slot.focused {
            CellStyle::fg(TEXT).bold().on(FOCUS_BG)
        } else {
            CellStyle::fg(TEXT).bold()
        };
        let box_x = fb.put_str_clipped(x, *y, &number, w, number_style);
        let box_w = w.saturating_sub(box_x - x);

        let box_end = match &slot.occupant {
            Some(tile) => {
                let tile = TileSnapshot {
                    focused: slot.focused,
                    mark: tile.mark.or(slot.mark),
                    ..tile.clone()
                };
                draw_tile(fb, box_x, *y, box_w, &tile, slot.hovered)
            }
            None => {
                let style = match (slot.hovered, slot.focused) {
                    (true, _) => CellStyle::fg(TEXT).on(HOVER_BG),
                    (false, true) => CellStyle::fg(TEXT).on(FOCUS_BG),
                    (false, false) => CellStyle::fg(MUTED).dim(),
                };
                let end = fb.put_str_clipped(box_x, *y, "[ drop here ]", box_w, style);
                if let Some(mark) = slot.mark {
                    draw_mark(fb, end + 1, *y, mark);
                }
                end
            }
        };
        let box_rect = Rect::new(box_x, *y, box_end.saturating_sub(box_x), 1);
        *y += 1;

        let indent = 3.min(w);
        for line in wrap_text(&slot.definition, w - indent) {
            fb.put_str_clipped(x + indent, *y, &line, w - indent, CellStyle::fg(TEXT));
            *y += 1;
        }
        box_rect
    }

    fn draw_pause_overlay(&self, fb: &mut FrameBuffer, viewport: Viewport, top: u16, bottom: u16) {
        let h = bottom.saturating_sub(top).max(3);
        let style = CellStyle::fg(TEXT).on(OVERLAY_BG);
        fb.fill_rect(0, top, viewport.width, h, ' ', style);

        let mid = top + h / 2;
        for (dy, (text, style)) in [
            ("PAUSED", style.bold()),
            ("Press G to continue", style),
        ]
        .into_iter()
        .enumerate()
        {
            let x = viewport.width.saturating_sub(str_width(text)) / 2;
            fb.put_str(x, mid.saturating_sub(1) + dy as u16, text, style);
        }
    }

    fn draw_leaderboard(&self, fb: &mut FrameBuffer, snap: &QuizSnapshot, viewport: Viewport, top: u16) {
        if top >= viewport.height {
            return;
        }
        fb.put_str(1, top, "BEST TIMES", CellStyle::fg(ACCENT).bold());

        let mut y = top + 1;
        if snap.leaderboard.is_empty() {
            fb.put_str(1, y, NO_SCORES_MESSAGE, CellStyle::fg(MUTED));
            return;
        }
        for row in &snap.leaderboard {
            if y >= viewport.height {
                break;
            }
            let style = if row.rank == 1 {
                CellStyle::fg(TEXT).bold()
            } else {
                CellStyle::fg(TEXT)
            };
            fb.put_str(1, y, &leaderboard_line(row), style);
            y += 1;
        }
    }
}

/// Draw `[ keyword ]` plus its mark; returns the column after the bracket.
fn draw_tile(fb: &mut FrameBuffer, x: u16, y: u16, max_w: u16, tile: &TileSnapshot, hovered: bool) -> u16 {
    let mut style = CellStyle::fg(TEXT).bold().on(TILE_BG);
    if tile.focused {
        style = style.on(FOCUS_BG);
    }
    if hovered {
        style = style.on(HOVER_BG);
    }
    if tile.lifted {
        style = CellStyle::fg(ACCENT).dim().on(TILE_BG);
    }
    if let Some(mark) = tile.mark {
        style.fg = mark_color(mark);
    }

    let label = format!("[ {} ]", tile.keyword);
    let end = fb.put_str_clipped(x, y, &label, max_w, style);
    if let Some(mark) = tile.mark {
        draw_mark(fb, end + 1, y, mark);
    }
    end
}

fn draw_mark(fb: &mut FrameBuffer, x: u16, y: u16, mark: Mark) {
    let glyph = match mark {
        Mark::Correct => '✓',
        Mark::Incorrect => '✗',
    };
    fb.put_char(x, y, glyph, CellStyle::fg(mark_color(mark)).bold());
}

fn mark_color(mark: Mark) -> Rgb {
    match mark {
        Mark::Correct => CORRECT,
        Mark::Incorrect => INCORRECT,
    }
}
