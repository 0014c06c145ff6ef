// Software drawing on a FrameBuffer.
// Visual effects provided here:
// 1) A ring that shows the brush footprint under the cursor.
// 2) A tiny 5x7 bitmap font for the HUD and the "WIN" stamp on the placeholder ticket.

use crate::types::FrameBuffer;

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
pub fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Fill an axis-aligned block, clipped to the frame.
pub fn fill_rect(fb: &mut FrameBuffer, x: i32, y: i32, w: i32, h: i32, color: u32) {
    let x0 = x.max(0) as usize;
    let y0 = y.max(0) as usize;
    let x1 = (x + w).clamp(0, fb.width as i32) as usize;
    let y1 = (y + h).clamp(0, fb.height as i32) as usize;
    for row in y0..y1 {
        let start = row * fb.width;
        if x0 < x1 {
            fb.pixels[start + x0..start + x1].fill(color);
        }
    }
}

/// Midpoint circle outline of radius `r` centred at (cx,cy).
/// Visual: a thin ring the size of the brush follows the mouse.
pub fn draw_circle(fb: &mut FrameBuffer, cx: i32, cy: i32, r: i32, color: u32) {
    if r <= 0 {
        put_pixel(fb, cx, cy, color);
        return;
    }
    let (mut x, mut y) = (r, 0);
    let mut err = 1 - r;
    while x >= y {
        for (px, py) in [(x, y), (y, x), (-y, x), (-x, y), (-x, -y), (-y, -x), (y, -x), (x, -y)] {
            put_pixel(fb, cx + px, cy + py, color);
        }
        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

/* ---------- 5x7 bitmap font ---------- */

/// 5x7 glyph for the characters the HUD needs.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch.to_ascii_uppercase() {
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'N' => g!(0b10001,0b11001,0b10101,0b10011,0b10001,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        'Y' => g!(0b10001,0b10001,0b01010,0b00100,0b00100,0b00100,0b00100),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        '!' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00000,0b00100),
        '%' => g!(0b11000,0b11001,0b00010,0b00100,0b01000,0b10011,0b00011),

        _ => None,
    }
}

/// Draw one glyph with each font pixel blown up to `scale x scale`.
/// Visual: glyph in `color` over a 1-font-pixel black drop shadow.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, scale: i32, color: u32) {
    let Some(rows) = glyph5x7(ch) else { return };
    for (offset, c) in [(scale, 0x00000000), (0, color)] {
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    let px = x + rx * scale + offset;
                    let py = y + ry as i32 * scale + offset;
                    fill_rect(fb, px, py, scale, scale, c);
                }
            }
        }
    }
}

/// Pixel width of `text` at `scale`.
pub fn text_width(text: &str, scale: i32) -> i32 {
    text.chars().count() as i32 * 6 * scale
}

/// Draw a text string using 5x7 glyphs scaled up `scale` times.
pub fn draw_text_scaled(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, scale: i32, color: u32) {
    let scale = scale.max(1);
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, scale, color);
        x += 6 * scale; // 5 pixels glyph width + 1 pixel spacing
    }
}

/// HUD-sized text.
pub fn draw_text_5x7(fb: &mut FrameBuffer, x: i32, y: i32, text: &str, color: u32) {
    draw_text_scaled(fb, x, y, text, 1, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_pixel_ignores_out_of_bounds() {
        let mut fb = FrameBuffer::new(4, 4);
        put_pixel(&mut fb, -1, 0, 0xFF);
        put_pixel(&mut fb, 4, 0, 0xFF);
        put_pixel(&mut fb, 3, 3, 0xFF);
        assert_eq!(fb.pixels.iter().filter(|&&p| p == 0xFF).count(), 1);
    }

    #[test]
    fn circle_touches_cardinal_points() {
        let mut fb = FrameBuffer::new(21, 21);
        draw_circle(&mut fb, 10, 10, 5, 1);
        for (x, y) in [(15, 10), (5, 10), (10, 15), (10, 5)] {
            assert_eq!(fb.pixels[y * 21 + x], 1, "({x}, {y})");
        }
        assert_eq!(fb.pixels[10 * 21 + 10], 0);
    }

    #[test]
    fn scaled_text_covers_expected_span() {
        let mut fb = FrameBuffer::new(64, 32);
        draw_text_scaled(&mut fb, 0, 0, "WIN", 2, 0x00_FF_FF_FF);
        assert_eq!(text_width("WIN", 2), 36);
        // Top-left pixel of 'W' is lit at scale 2.
        assert_eq!(fb.pixels[0], 0x00_FF_FF_FF);
        assert_eq!(fb.pixels[1], 0x00_FF_FF_FF);
        // Nothing beyond the string.
        assert!(fb.pixels.iter().enumerate().all(|(i, &p)| i % 64 < 40 || p == 0));
    }

    #[test]
    fn fill_rect_clips() {
        let mut fb = FrameBuffer::new(4, 4);
        fill_rect(&mut fb, -2, -2, 4, 4, 7);
        assert_eq!(fb.pixels.iter().filter(|&&p| p == 7).count(), 4);
        fill_rect(&mut fb, 10, 10, 4, 4, 9);
        assert!(!fb.pixels.contains(&9));
    }
}
