// The scratch-mask engine: an erasable alpha raster over the ticket.
// Visual: 255 = foil still on, 0 = scratched through to the ticket.
//
// All coordinates here are mask-local pixels. Pixel (px, py) is sampled at
// the point (px, py), so a brush of radius r centred on an integer point
// clears exactly the pixels whose centre distance is <= r.

use crate::error::ConfigError;
use crate::types::{Point, Rect, StrokeState};
use image::{GrayImage, Luma};

pub const DEFAULT_MASK_SIZE: usize = 512;
pub const DEFAULT_THRESHOLD: f32 = 80.0;
pub const DEFAULT_BRUSH_RADIUS: f32 = 20.0;
pub const DEFAULT_FEATHER: f32 = 1.0;

pub const OPAQUE: u8 = 255;
pub const CLEAR: u8 = 0;

// Slack on squared distances so pixels lying exactly on the brush edge
// survive f32 rounding in the segment projection.
const EDGE_EPSILON: f32 = 1e-3;

/// Everything needed to build a [`ScratchMask`].
#[derive(Debug, Clone, PartialEq)]
pub struct MaskConfig {
    pub width: usize,
    pub height: usize,
    /// Region that carries foil and counts toward completion.
    pub coverage_area: Rect,
    /// Completion fires once this percentage of `coverage_area` is cleared.
    pub threshold_percent: f32,
    /// Erase radius in mask pixels.
    pub brush_radius: f32,
    /// Width of the soft ring outside the brush (0 = hard edge).
    pub feather: f32,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_MASK_SIZE,
            height: DEFAULT_MASK_SIZE,
            coverage_area: Rect::full(DEFAULT_MASK_SIZE, DEFAULT_MASK_SIZE),
            threshold_percent: DEFAULT_THRESHOLD,
            brush_radius: DEFAULT_BRUSH_RADIUS,
            feather: DEFAULT_FEATHER,
        }
    }
}

impl MaskConfig {
    pub fn new(width: usize, height: usize, coverage_area: Rect, threshold_percent: f32) -> Self {
        Self {
            width,
            height,
            coverage_area,
            threshold_percent,
            ..Self::default()
        }
    }

    pub fn with_brush_radius(mut self, radius: f32) -> Self {
        self.brush_radius = radius;
        self
    }

    pub fn with_feather(mut self, feather: f32) -> Self {
        self.feather = feather;
        self
    }

    /// Check every constraint `ScratchMask::new` relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyMask { width: self.width, height: self.height });
        }
        // Image export addresses pixels with u32; the raster itself needs width * height bytes.
        let max = u32::MAX as usize;
        if self.width > max || self.height > max || self.width.checked_mul(self.height).is_none() {
            return Err(ConfigError::MaskTooLarge { width: self.width, height: self.height });
        }
        // Bounds before area: once the rect fits, width * height cannot overflow.
        let area = self.coverage_area;
        let fits_x = area.x.checked_add(area.width).is_some_and(|r| r <= self.width);
        let fits_y = area.y.checked_add(area.height).is_some_and(|b| b <= self.height);
        if !fits_x || !fits_y {
            return Err(ConfigError::CoverageOutOfBounds {
                area,
                width: self.width,
                height: self.height,
            });
        }
        if area.width == 0 || area.height == 0 {
            return Err(ConfigError::EmptyCoverageArea(area));
        }
        // Written so NaN fails too.
        if !(self.threshold_percent > 0.0 && self.threshold_percent <= 100.0) {
            return Err(ConfigError::Threshold(self.threshold_percent));
        }
        if !(self.brush_radius.is_finite() && self.brush_radius >= 0.0) {
            return Err(ConfigError::BrushRadius(self.brush_radius));
        }
        if !(self.feather.is_finite() && self.feather >= 0.0) {
            return Err(ConfigError::Feather(self.feather));
        }
        Ok(())
    }
}

/// Shorthand for a mask with the default brush.
pub fn create(
    width: usize,
    height: usize,
    coverage_area: Rect,
    threshold_percent: f32,
) -> Result<ScratchMask, ConfigError> {
    ScratchMask::new(&MaskConfig::new(width, height, coverage_area, threshold_percent))
}

/// One foil layer and its scratch progress.
pub struct ScratchMask {
    config: MaskConfig,
    alpha: Vec<u8>,              // width * height, row-major
    cleared: usize,              // zero-alpha pixels inside coverage_area
    last_stroke_point: Option<Point>,
    stroke: StrokeState,
    completed: bool,
    dirty: bool,
}

impl ScratchMask {
    /// Foil goes on the coverage area only; the rest of the raster starts clear.
    pub fn new(config: &MaskConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut alpha = vec![CLEAR; config.width * config.height];
        let area = config.coverage_area;
        for y in area.y..area.bottom() {
            let row = y * config.width;
            alpha[row + area.x..row + area.right()].fill(OPAQUE);
        }

        log::info!(
            "new scratch mask {}x{}, area {:?}, threshold {}%, brush {}",
            config.width,
            config.height,
            area,
            config.threshold_percent,
            config.brush_radius
        );

        Ok(Self {
            config: config.clone(),
            alpha,
            cleared: 0,
            last_stroke_point: None,
            stroke: StrokeState::Fresh,
            completed: false,
            dirty: true,
        })
    }

    /// Start a stroke with a single dab at `point`.
    /// A press outside the coverage area erases nothing and leaves no anchor,
    /// so the first move that lands inside becomes the first dab.
    pub fn begin_stroke(&mut self, point: Point) {
        self.stroke = StrokeState::Scratching;
        self.last_stroke_point = None;
        if self.config.coverage_area.contains(point) {
            self.erase_capsule(point, point);
            self.last_stroke_point = Some(point);
        }
        log::debug!("stroke begin at ({:.1}, {:.1})", point.x, point.y);
    }

    /// Extend the current stroke to `point`.
    /// Points outside the coverage area are ignored entirely. Without an
    /// anchor (no begin, or begin outside) this behaves like a first dab.
    pub fn continue_stroke(&mut self, point: Point) {
        if !self.config.coverage_area.contains(point) {
            return;
        }
        let from = self.last_stroke_point.unwrap_or(point);
        self.erase_capsule(from, point);
        self.last_stroke_point = Some(point);
        self.stroke = StrokeState::Scratching;
    }

    pub fn end_stroke(&mut self) {
        self.last_stroke_point = None;
        if self.stroke == StrokeState::Scratching {
            self.stroke = StrokeState::Idle;
            log::debug!("stroke end, {:.1}% cleared", self.sample_coverage());
        }
    }

    /// Percentage of the coverage area scratched to alpha 0.
    pub fn sample_coverage(&self) -> f32 {
        100.0 * self.cleared as f32 / self.config.coverage_area.area() as f32
    }

    /// Same as [`sample_coverage`](Self::sample_coverage) but recounted from
    /// the raster. O(area).
    pub fn scan_coverage(&self) -> f32 {
        let area = self.config.coverage_area;
        let mut count = 0usize;
        for y in area.y..area.bottom() {
            let row = y * self.config.width;
            count += self.alpha[row + area.x..row + area.right()]
                .iter()
                .filter(|&&a| a == CLEAR)
                .count();
        }
        100.0 * count as f32 / area.area() as f32
    }

    /// True exactly once: on the first call that finds the threshold reached.
    pub fn check_completion(&mut self) -> bool {
        if self.completed {
            return false;
        }
        // Integer-exact comparison: cleared / area >= threshold / 100.
        let reached = self.cleared as f64 * 100.0
            >= self.config.threshold_percent as f64 * self.config.coverage_area.area() as f64;
        if reached {
            self.completed = true;
            log::info!("ticket scratched: {:.1}% cleared", self.sample_coverage());
        }
        reached
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn stroke_state(&self) -> StrokeState {
        self.stroke
    }

    pub fn last_stroke_point(&self) -> Option<Point> {
        self.last_stroke_point
    }

    pub fn config(&self) -> &MaskConfig {
        &self.config
    }

    pub fn width(&self) -> usize {
        self.config.width
    }

    pub fn height(&self) -> usize {
        self.config.height
    }

    pub fn coverage_area(&self) -> Rect {
        self.config.coverage_area
    }

    /// Raw alpha raster, row-major.
    pub fn alpha(&self) -> &[u8] {
        &self.alpha
    }

    /// Alpha at a pixel; out-of-bounds reads as clear.
    #[inline]
    pub fn alpha_at(&self, x: usize, y: usize) -> u8 {
        if x >= self.config.width || y >= self.config.height {
            return CLEAR;
        }
        self.alpha[y * self.config.width + x]
    }

    /// Has the raster changed since the last `take_dirty`?
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Read and reset the change flag. Hosts call this once per render tick
    /// and re-upload / re-composite only when it returns true.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    /// The mask as a single-channel image, ready to upload as the alpha
    /// texture of a foil material.
    pub fn alpha_image(&self) -> GrayImage {
        // `validate` caps both sides at u32::MAX.
        GrayImage::from_fn(self.config.width as u32, self.config.height as u32, |x, y| {
            Luma([self.alpha_at(x as usize, y as usize)])
        })
    }

    /// Erase the round-capped capsule swept by the brush from `a` to `b`.
    /// `a == b` stamps a single disc. Writes never leave the coverage area
    /// and never raise a pixel's alpha.
    fn erase_capsule(&mut self, a: Point, b: Point) {
        let r = self.config.brush_radius;
        let feather = self.config.feather;
        let reach = r + feather;
        let area = self.config.coverage_area;

        // Bounding box of the capsule plus feather, clipped to the area.
        let min_x = (a.x.min(b.x) - reach).floor().max(area.x as f32);
        let max_x = (a.x.max(b.x) + reach).ceil().min((area.right() - 1) as f32);
        let min_y = (a.y.min(b.y) - reach).floor().max(area.y as f32);
        let max_y = (a.y.max(b.y) + reach).ceil().min((area.bottom() - 1) as f32);
        if !(min_x <= max_x && min_y <= max_y) {
            return;
        }
        let (x0, x1) = (min_x as usize, max_x as usize);
        let (y0, y1) = (min_y as usize, max_y as usize);

        let (dx, dy) = (b.x - a.x, b.y - a.y);
        let len2 = dx * dx + dy * dy;
        let r2 = r * r + EDGE_EPSILON;
        let reach2 = reach * reach;
        let width = self.config.width;
        let mut changed = false;

        for y in y0..=y1 {
            let row = y * width;
            for x in x0..=x1 {
                // Distance from the pixel to the closest point on the segment.
                let (px, py) = (x as f32 - a.x, y as f32 - a.y);
                let t = if len2 > 0.0 { ((px * dx + py * dy) / len2).clamp(0.0, 1.0) } else { 0.0 };
                let (ex, ey) = (px - t * dx, py - t * dy);
                let d2 = ex * ex + ey * ey;

                let target = if d2 <= r2 {
                    CLEAR
                } else if feather > 0.0 && d2 < reach2 {
                    // Soft edge: fades from 0 at the brush rim to 255 at `reach`,
                    // but never all the way to 0.
                    let edge = (d2.sqrt() - r) / feather;
                    ((edge * OPAQUE as f32).round() as u8).max(1)
                } else {
                    continue;
                };

                let old = &mut self.alpha[row + x];
                if target < *old {
                    *old = target;
                    changed = true;
                    if target == CLEAR {
                        self.cleared += 1;
                    }
                }
            }
        }

        self.dirty |= changed;
    }
}
