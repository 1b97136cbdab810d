// Particle background
//
// A sparse starfield drifting slowly to the right behind the page. Positions
// are a pure function of particle index and animation frame, so the same
// frame always draws the same field. Purely decorative: it reads nothing but
// the theme and the frame counter.

use crate::tui::theme::Theme;
use ratatui::{layout::Rect, style::Style, Frame};

/// One particle per this many cells
const DENSITY: u32 = 48;

const GLYPHS: [char; 3] = ['·', '∙', '•'];

/// splitmix-style integer hash
fn hash(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
    x = (x ^ (x >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    x ^ (x >> 31)
}

/// Cell and glyph of particle `i` at `frame` inside `area`
fn particle(i: u64, frame: u64, area: Rect) -> (u16, u16, char) {
    let h = hash(i);
    let w = u64::from(area.width.max(1));
    let height = u64::from(area.height.max(1));

    // Slower particles move one column every `speed` frames
    let speed = 8 + (h >> 48) % 24;
    let x = (h % w + frame / speed) % w;
    let y = (h >> 16) % height;
    let glyph = GLYPHS[((h >> 40) % GLYPHS.len() as u64) as usize];

    (area.x + x as u16, area.y + y as u16, glyph)
}

pub fn render(f: &mut Frame, area: Rect, theme: &Theme, frame: u64) {
    let count = u32::from(area.width) * u32::from(area.height) / DENSITY;
    let style = Style::default().fg(theme.particle);
    let buf = f.buffer_mut();

    for i in 0..u64::from(count) {
        let (x, y, glyph) = particle(i, frame, area);
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char(glyph).set_style(style);
        }
    }
}
