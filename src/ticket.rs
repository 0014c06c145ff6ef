// Ticket artwork: the picture that sits under the foil.
// Visual: whatever this returns is what a scratched pixel shows.

use crate::draw::{draw_text_scaled, fill_rect, text_width};
use crate::error::Error;
use crate::types::{FrameBuffer, Rect};
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use std::path::Path;

/// Pack an RGB image into 0x00RRGGBB pixels for the window.
pub fn from_image(img: &RgbImage) -> FrameBuffer {
    let (w, h) = img.dimensions();
    let pixels = img
        .pixels()
        .map(|p| ((p[0] as u32) << 16) | ((p[1] as u32) << 8) | p[2] as u32)
        .collect();
    FrameBuffer { width: w as usize, height: h as usize, pixels }
}

/// Decode a ticket image (any format `image` understands) and stretch it to the display size.
pub fn load(path: &Path, width: usize, height: usize) -> Result<FrameBuffer, Error> {
    let img = image::open(path)?.to_rgb8();
    let img = if img.dimensions() == (width as u32, height as u32) {
        img
    } else {
        imageops::resize(&img, width as u32, height as u32, FilterType::Triangle)
    };
    log::info!("loaded ticket {} ({}x{})", path.display(), width, height);
    Ok(from_image(&img))
}

/// Built-in ticket: cream paper with a gold prize panel under `prize_area`.
/// Visual: a vertical paper gradient; scratching the panel uncovers "WIN".
pub fn placeholder(width: usize, height: usize, prize_area: Rect) -> FrameBuffer {
    let h = height.max(1) as f32;
    let paper = RgbImage::from_fn(width as u32, height as u32, |_, y| {
        let t = y as f32 / h;
        let shade = |top: f32, bottom: f32| (top + (bottom - top) * t).round() as u8;
        Rgb([shade(250.0, 228.0), shade(244.0, 214.0), shade(225.0, 190.0)])
    });
    let mut fb = from_image(&paper);

    let (ax, ay) = (prize_area.x as i32, prize_area.y as i32);
    let (aw, ah) = (prize_area.width as i32, prize_area.height as i32);
    fill_rect(&mut fb, ax, ay, aw, ah, 0x00_C8_9B_2C);
    fill_rect(&mut fb, ax + 4, ay + 4, aw - 8, ah - 8, 0x00_F2_C9_4C);

    // Largest scale at which "WIN" still fits in the panel.
    let scale = (aw / text_width("WIN", 1)).min(ah / 8).clamp(1, 16);
    let tx = ax + (aw - text_width("WIN", scale)) / 2;
    let ty = ay + (ah - 7 * scale) / 2;
    draw_text_scaled(&mut fb, tx, ty, "WIN", scale, 0x00_B0_1E_1E);

    draw_text_scaled(&mut fb, 16, 16, "SCRATCH", 4, 0x00_3A_2A_6E);
    fb
}
