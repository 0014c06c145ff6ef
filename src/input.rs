// Pointer plumbing between the window and the scratch mask.
// Visual: decides *when* a drag scratches and *where* on the foil it lands.

use crate::engine::ScratchMask;
use crate::types::{Point, Rect};

/// Maps display pixels (what the window reports) to mask pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub display_width: usize,
    pub display_height: usize,
    pub mask_width: usize,
    pub mask_height: usize,
}

impl Surface {
    pub fn new(display_width: usize, display_height: usize, mask_width: usize, mask_height: usize) -> Self {
        Self { display_width, display_height, mask_width, mask_height }
    }

    /// Display and mask share one resolution.
    pub fn identity(width: usize, height: usize) -> Self {
        Self::new(width, height, width, height)
    }

    #[inline]
    fn scale(&self) -> (f32, f32) {
        (
            self.mask_width as f32 / self.display_width.max(1) as f32,
            self.mask_height as f32 / self.display_height.max(1) as f32,
        )
    }

    pub fn to_mask(&self, p: Point) -> Point {
        let (sx, sy) = self.scale();
        Point::new(p.x * sx, p.y * sy)
    }

    /// Scale a display-space rectangle into mask pixels, kept inside the mask.
    pub fn rect_to_mask(&self, r: Rect) -> Rect {
        let (sx, sy) = self.scale();
        let x = ((r.x as f32 * sx).round() as usize).min(self.mask_width);
        let y = ((r.y as f32 * sy).round() as usize).min(self.mask_height);
        let right = ((r.right() as f32 * sx).round() as usize).min(self.mask_width);
        let bottom = ((r.bottom() as f32 * sy).round() as usize).min(self.mask_height);
        Rect::new(x, y, right.saturating_sub(x), bottom.saturating_sub(y))
    }

    /// Brush sizes are given in display pixels; masks work in their own.
    pub fn length_to_mask(&self, len: f32) -> f32 {
        let (sx, _) = self.scale();
        len * sx
    }

    /// Texture coordinates from a ray hit on the foil plane to mask pixels.
    /// `v` points up (GL convention) while mask rows grow downward.
    /// Anything outside the unit square is a miss.
    pub fn uv_to_mask(&self, u: f32, v: f32) -> Option<Point> {
        if !(0.0..=1.0).contains(&u) || !(0.0..=1.0).contains(&v) {
            return None;
        }
        Some(Point::new(u * self.mask_width as f32, (1.0 - v) * self.mask_height as f32))
    }
}

/// Host-neutral pointer events, in display pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Point),
    Move(Point),
    Up,
    Leave,
}

/// Turns polled mouse state (position + button) into pointer events.
/// Polling hosts like minifb only give us "where is it now, is it held",
/// so edges are detected here.
///
/// Re-entering the window with the button still held is not a press: after
/// a leave (or a press made off the window) the tracker stays latched and
/// reports nothing until the button has been released.
#[derive(Debug, Default)]
pub struct PointerTracker {
    was_down: bool,
    latched: bool,
    last_pos: Option<Point>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// At most one event per poll. `pos == None` means the pointer is off the window.
    pub fn update(&mut self, pos: Option<Point>, down: bool) -> Option<PointerEvent> {
        let was_down = self.was_down;
        let last = self.last_pos;
        self.last_pos = pos;

        let Some(p) = pos else {
            // Off the surface: a held drag ends here.
            self.was_down = false;
            self.latched = down;
            return was_down.then_some(PointerEvent::Leave);
        };

        if self.latched {
            self.latched = down;
            return None;
        }

        self.was_down = down;
        match (was_down, down) {
            (false, true) => Some(PointerEvent::Down(p)),
            (true, true) if last != Some(p) => Some(PointerEvent::Move(p)),
            (true, false) => Some(PointerEvent::Up),
            _ => None,
        }
    }
}

/// Drives a [`ScratchMask`] from pointer events.
///
/// Owns the policies the engine stays out of: hit-testing the press,
/// display-to-mask mapping and how often coverage is sampled.
#[derive(Debug)]
pub struct PointerAdapter {
    surface: Surface,
    sample_every: usize,   // moves between coverage checks; 0 = only on release
    drawing: bool,
    moves: usize,
}

impl PointerAdapter {
    pub fn new(surface: Surface, sample_every: usize) -> Self {
        Self { surface, sample_every, drawing: false, moves: 0 }
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Forward one event. Returns true when the ticket just got scratched
    /// past its threshold (fires once per mask).
    pub fn handle(&mut self, mask: &mut ScratchMask, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down(p) => {
                let p = self.surface.to_mask(p);
                // Presses that miss the foil don't start a drag.
                if mask.coverage_area().contains(p) {
                    self.drawing = true;
                    self.moves = 0;
                    mask.begin_stroke(p);
                }
                false
            }
            PointerEvent::Move(p) => {
                if !self.drawing {
                    return false;
                }
                mask.continue_stroke(self.surface.to_mask(p));
                self.moves += 1;
                if self.sample_every > 0 && self.moves % self.sample_every == 0 {
                    return mask.check_completion();
                }
                false
            }
            PointerEvent::Up | PointerEvent::Leave => {
                if !self.drawing {
                    return false;
                }
                self.drawing = false;
                mask.end_stroke();
                mask.check_completion()
            }
        }
    }

    /// Forget any drag in progress (new ticket).
    pub fn reset(&mut self) {
        self.drawing = false;
        self.moves = 0;
    }
}
