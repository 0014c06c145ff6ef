// Core types shared by the engine, the input adapter and the compositor.

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A black frame of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }
}

/// A position in pixel space. Which space (display or mask) depends on the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned pixel rectangle `[x, x+width) x [y, y+height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub const fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self { x, y, width, height }
    }

    /// The whole of a `width x height` raster.
    pub const fn full(width: usize, height: usize) -> Self {
        Self { x: 0, y: 0, width, height }
    }

    /// Pixel count, saturating for rects no mask could hold.
    pub fn area(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Exclusive right edge, saturating at `usize::MAX`.
    pub fn right(&self) -> usize {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge, saturating at `usize::MAX`.
    pub fn bottom(&self) -> usize {
        self.y.saturating_add(self.height)
    }

    /// Continuous hit-test: the rectangle spans `[x, right]` so a pointer on
    /// the last pixel column still counts as inside.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x as f32
            && p.x <= self.right() as f32
            && p.y >= self.y as f32
            && p.y <= self.bottom() as f32
    }
}

/// Where a mask is in its stroke lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeState {
    /// Created, never touched.
    Fresh,
    /// Between `begin_stroke` and `end_stroke`.
    Scratching,
    /// Last stroke ended.
    Idle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oversized_rect_edges_saturate() {
        let r = Rect::new(usize::MAX - 1, 5, 10, usize::MAX);
        assert_eq!(r.right(), usize::MAX);
        assert_eq!(r.bottom(), usize::MAX);
        assert_eq!(r.area(), usize::MAX);
        assert!(!r.contains(Point::new(0.0, 0.0)));
    }

    #[test]
    fn contains_includes_far_edges() {
        let r = Rect::new(10, 10, 5, 5);
        assert!(r.contains(Point::new(15.0, 15.0)));
        assert!(!r.contains(Point::new(9.9, 12.0)));
    }
}
