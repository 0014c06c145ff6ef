// Desktop host: a minifb window that shows the composed ticket and
// reports where the mouse is and whether it is held.

use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};
use scratch_ticket::{Error, FrameBuffer, Point};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a window sized to the ticket, capped at `fps` frames per second.
    pub fn new(title: &str, width: usize, height: usize, fps: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(fps);
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Mouse position in window pixels, `None` once it leaves the window.
    /// Visual: a `None` mid-drag ends the stroke like pointer-leave.
    pub fn mouse_pos(&self) -> Option<Point> {
        self.window
            .get_mouse_pos(MouseMode::Discard)
            .map(|(x, y)| Point::new(x, y))
    }

    pub fn left_mouse_down(&self) -> bool {
        self.window.get_mouse_down(MouseButton::Left)
    }

    /// R deals a fresh ticket.
    pub fn r_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::R, KeyRepeat::No)
    }
}
