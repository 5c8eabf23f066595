//! BoardView: paints a `GameSnapshot` into a framebuffer.
//!
//! Pure (no I/O), so layout is unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::TetrominoKind;

const FIELD_BG: Rgb = Rgb::new(30, 30, 40);

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

pub struct BoardView {
    /// Terminal columns per board cell; 2 evens out the glyph aspect ratio.
    cell_w: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl BoardView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Frame size needed for a board of the snapshot's size, border included
    pub fn frame_size(&self, snap: &GameSnapshot) -> (u16, u16) {
        (
            to_u16(snap.width).saturating_mul(self.cell_w).saturating_add(2),
            to_u16(snap.height).saturating_add(2),
        )
    }

    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let (frame_w, frame_h) = self.frame_size(snap);
        let left = viewport.width.saturating_sub(frame_w) / 2;
        let top = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(&mut fb, left, top, frame_w, frame_h);

        for (y, row) in snap.cells.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                let (ch, style) = match TetrominoKind::from_id(cell) {
                    Some(kind) => ('█', Style::new(kind_color(kind), FIELD_BG).bold()),
                    None => ('·', Style::new(Rgb::new(90, 90, 100), FIELD_BG)),
                };
                fb.fill(
                    left.saturating_add(1)
                        .saturating_add(to_u16(x).saturating_mul(self.cell_w)),
                    top.saturating_add(1).saturating_add(to_u16(y)),
                    self.cell_w,
                    1,
                    ch,
                    style,
                );
            }
        }

        self.draw_panel(&mut fb, snap, left.saturating_add(frame_w).saturating_add(2), top);

        if snap.game_over() {
            let text = "GAME OVER";
            let x = left.saturating_add(frame_w.saturating_sub(text.len() as u16) / 2);
            let style = Style::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
            fb.put_str(x, top.saturating_add(frame_h / 2), text, style);
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let style = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let (right, bottom) = (x + w - 1, y + h - 1);

        fb.fill(x + 1, y, w - 2, 1, '─', style);
        fb.fill(x + 1, bottom, w - 2, 1, '─', style);
        fb.fill(x, y + 1, 1, h - 2, '│', style);
        fb.fill(right, y + 1, 1, h - 2, '│', style);
        fb.put(x, y, '┌', style);
        fb.put(right, y, '┐', style);
        fb.put(x, bottom, '└', style);
        fb.put(right, bottom, '┘', style);
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, top: u16) {
        let label = Style::default().bold();
        let value = Style::default();

        fb.put_str(x, top, "SCORE", label);
        fb.put_str(x, top + 1, &snap.score.to_string(), value);
        fb.put_str(x, top + 3, "LINES", label);
        fb.put_str(x, top + 4, &snap.lines.to_string(), value);
        fb.put_str(x, top + 6, "PIECE", label);
        let piece = snap.active.map_or("-", |active| active.kind.as_str());
        fb.put_str(x, top + 7, piece, value);
    }
}

fn kind_color(kind: TetrominoKind) -> Rgb {
    match kind {
        TetrominoKind::LongBoy => Rgb::new(80, 220, 220),
        TetrominoKind::BackwardsL => Rgb::new(80, 120, 220),
        TetrominoKind::L => Rgb::new(255, 165, 0),
        TetrominoKind::Square => Rgb::new(240, 220, 80),
        TetrominoKind::BackwardsZ => Rgb::new(100, 220, 120),
        TetrominoKind::T => Rgb::new(200, 120, 220),
        TetrominoKind::Z => Rgb::new(220, 80, 80),
    }
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
