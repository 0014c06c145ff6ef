// What you SEE:
// • A lottery ticket with a grey foil panel.
// • Hold Left Mouse and drag: the foil scratches off under a round brush.
// • Scratch enough of the panel and the ticket is revealed: "YOU WON!".
// • R deals a new ticket. ESC quits.
// Set RUST_LOG=debug for stroke and FPS logging.

mod config;
mod window;

use clap::Parser;
use config::Args;
use scratch_ticket::compose::{compose_ticket, reveal, FOIL_COLOR};
use scratch_ticket::draw::{draw_circle, draw_text_5x7, draw_text_scaled, text_width};
use scratch_ticket::gamma::GammaLut;
use scratch_ticket::{ticket, Error, FrameBuffer, PointerAdapter, PointerTracker, ScratchMask};
use std::time::{Duration, Instant};
use window::Drawer;

const TARGET_FPS: usize = 60;

fn main() -> Result<(), Error> {
    env_logger::init();
    let args = Args::parse();
    let (w, h) = (args.width, args.height);

    /* --- Ticket artwork ---
       Visual: what shows through wherever the foil is scratched. */
    let artwork = match &args.ticket {
        Some(path) => ticket::load(path, w, h).unwrap_or_else(|e| {
            log::warn!("{e}; using the built-in ticket");
            ticket::placeholder(w, h, args.area())
        }),
        None => ticket::placeholder(w, h, args.area()),
    };

    /* --- Foil mask + pointer plumbing --- */
    let surface = args.surface();
    let mask_config = args.mask_config(&surface);
    let mut mask = ScratchMask::new(&mask_config)?;
    let mut adapter = PointerAdapter::new(surface, args.sample_every);
    let mut tracker = PointerTracker::new();

    let mut drawer = Drawer::new("Scratch Ticket", w, h, TARGET_FPS)?;
    let lut = GammaLut::new();

    // `composed` is rebuilt only when the mask changes; `screen` adds the
    // per-frame overlays (brush ring, HUD) on top of it.
    let mut composed = FrameBuffer::new(w, h);
    let mut screen = FrameBuffer::new(w, h);
    let mut won = false;
    let mut showing_reveal = false;

    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();

        if drawer.r_pressed_once() {
            mask = ScratchMask::new(&mask_config)?;
            adapter.reset();
            tracker = PointerTracker::new();
            won = false;
            showing_reveal = false;
        }

        /* 1) Pointer -> stroke calls. At most one event per frame. */
        let pos = drawer.mouse_pos();
        if let Some(event) = tracker.update(pos, drawer.left_mouse_down()) {
            if adapter.handle(&mut mask, event) {
                won = true;
            }
        }

        /* 2) Rebuild the base frame if anything changed. */
        let dirty = mask.take_dirty();
        if won {
            if !showing_reveal {
                reveal(&mut composed, &artwork)?;
                showing_reveal = true;
            }
        } else if dirty {
            compose_ticket(&mut composed, &artwork, &mask, FOIL_COLOR, &lut)?;
        }
        screen.pixels.copy_from_slice(&composed.pixels);

        /* 3) Overlays: brush ring while scratching, HUD text. */
        if won {
            let banner = "YOU WON!";
            let scale = 4;
            let x = (w as i32 - text_width(banner, scale)) / 2;
            draw_text_scaled(&mut screen, x, h as i32 / 2 - 14, banner, scale, 0x00_FF_D7_00);
            draw_text_5x7(&mut screen, 8, h as i32 - 16, "R: NEW TICKET", 0x00_FF_FF_FF);
        } else {
            if let Some(p) = pos {
                draw_circle(&mut screen, p.x as i32, p.y as i32, args.brush.round() as i32, 0x00_40_40_40);
            }
            let hud = format!("SCRATCH: {:.1}% | R: NEW TICKET", mask.sample_coverage());
            draw_text_5x7(&mut screen, 8, h as i32 - 16, &hud, 0x00_FF_FF_FF);
        }

        /* 4) Present. */
        drawer.present(&screen)?;

        frames_this_second += 1;
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            log::debug!("FPS: {:.1}", frames_this_second as f32 / secs);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    Ok(())
}
