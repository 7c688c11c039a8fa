//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{format_u32, CellStyle, FrameBuffer, Rgb};
use crate::types::{BOARD_SIZE, WIN_VALUE};

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

/// Color bucket of a cell value.
///
/// Every power of two up to the winning tile has its own bucket; anything
/// larger shares [`TileBucket::Overflow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileBucket {
    Empty,
    /// Tile 2^n, n in 1..=11
    Power(u8),
    Overflow,
}

/// Bucket for a raw cell value (0 = empty). Total over all `u32`.
pub fn tile_bucket(value: u32) -> TileBucket {
    match value {
        0 => TileBucket::Empty,
        v if v > WIN_VALUE => TileBucket::Overflow,
        // 1 has no tile of its own; it shares the 2 bucket.
        v => TileBucket::Power(v.ilog2().max(1) as u8),
    }
}

const BOARD_BG: Rgb = Rgb::new(187, 173, 160);
const EMPTY_BG: Rgb = Rgb::new(205, 193, 180);
const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

/// Style for drawing a cell holding `value`.
pub fn tile_style(value: u32) -> CellStyle {
    match tile_bucket(value) {
        TileBucket::Empty => CellStyle::new(EMPTY_BG, EMPTY_BG),
        TileBucket::Power(n) => {
            let bg = match n {
                1 => Rgb::new(238, 228, 218),
                2 => Rgb::new(237, 224, 200),
                3 => Rgb::new(242, 177, 121),
                4 => Rgb::new(245, 149, 99),
                5 => Rgb::new(246, 124, 95),
                6 => Rgb::new(246, 94, 59),
                7 => Rgb::new(237, 207, 114),
                8 => Rgb::new(237, 204, 97),
                9 => Rgb::new(237, 200, 80),
                10 => Rgb::new(237, 197, 63),
                _ => Rgb::new(237, 194, 46),
            };
            let fg = if n <= 2 { DARK_TEXT } else { LIGHT_TEXT };
            CellStyle::new(fg, bg)
        }
        TileBucket::Overflow => CellStyle::new(LIGHT_TEXT, Rgb::new(60, 58, 50)),
    }
}

/// A lightweight terminal renderer for the 2048 board.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 fits a four digit value with padding and roughly squares the tile.
        Self {
            cell_w: 7,
            cell_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Gap between tiles, in both directions.
const GAP: u16 = 1;

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the bordered board, in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        let n = BOARD_SIZE as u16;
        let w = n * self.cell_w + (n + 1) * GAP + 2;
        let h = n * self.cell_h + (n + 1) * GAP + 2;
        (w, h)
    }

    /// Top-left terminal cell of tile (row, col) for a frame at (start_x, start_y).
    pub fn tile_origin(&self, start_x: u16, start_y: u16, row: u16, col: u16) -> (u16, u16) {
        let x = start_x + 1 + GAP + col * (self.cell_w + GAP);
        let y = start_y + 1 + GAP + row * (self.cell_h + GAP);
        (x, y)
    }

    /// Top-left corner of the board frame inside `viewport`.
    pub fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w + PANEL_W) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        (start_x, start_y)
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(crate::fb::Cell::default());

        let (frame_w, frame_h) = self.frame_size();
        let (start_x, start_y) = self.frame_origin(viewport);

        let bg = CellStyle::new(BOARD_BG, BOARD_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(start_x + 1, start_y + 1, frame_w - 2, frame_h - 2, ' ', bg);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let value = snap.board[row][col];
                let mut style = tile_style(value);
                if snap.merged[row][col] {
                    // Fresh merges stand out until the next move.
                    style = style.bold();
                }
                self.draw_tile(fb, start_x, start_y, row as u16, col as u16, value, style);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.game_over {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "GAME OVER", "n: new game");
        } else if snap.awaiting_continue() {
            self.draw_overlay(fb, start_x, start_y, frame_w, frame_h, "YOU WIN!", "c: keep going");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        value: u32,
        style: CellStyle,
    ) {
        let (px, py) = self.tile_origin(start_x, start_y, row, col);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);

        if value != 0 {
            let mut buf = [0u8; 10];
            let text = format_u32(value, &mut buf);
            fb.put_str_centered(px, py + self.cell_h / 2, self.cell_w, text, style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let help = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        if let Some(event) = snap.last_event.filter(|e| e.points > 0) {
            let mut buf = [0u8; 10];
            let digits = format_u32(snap.score, &mut buf);
            let x = panel_x + digits.len() as u16 + 1;
            fb.put_char(x, y, '+', help);
            fb.put_u32(x + 1, y, event.points, help);
        }
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "BEST", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.best_score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.moves, value);
        y = y.saturating_add(2);

        for line in ["arrows/wasd move", "n new game", "q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, help);
            y = y.saturating_add(1);
        }
        if snap.awaiting_continue() && y < viewport.height {
            fb.put_str(panel_x, y, "c keep going", help);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_overlay(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        title: &str,
        hint: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let banner = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let inner_x = start_x + 1;
        let inner_w = frame_w.saturating_sub(2);

        fb.fill_rect(inner_x, mid_y.saturating_sub(1), inner_w, 3, ' ', banner);
        fb.put_str_centered(inner_x, mid_y.saturating_sub(1), inner_w, title, banner);
        fb.put_str_centered(inner_x, mid_y + 1, inner_w, hint, CellStyle { bold: false, ..banner });
    }
}

/// Width reserved for the side panel when centering the board.
const PANEL_W: u16 = 20;
