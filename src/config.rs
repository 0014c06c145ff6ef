// Command-line options. Defaults reproduce the paper ticket's layout:
// a 500x1000 ticket with a 450x450 scratch panel near the bottom.

use clap::Parser;
use scratch_ticket::engine::{DEFAULT_FEATHER, MaskConfig};
use scratch_ticket::{Rect, Surface};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "scratch-ticket", about = "Scratch the foil off a lottery ticket")]
pub struct Args {
    /// Ticket width on screen, in pixels
    #[arg(long, default_value_t = 500)]
    pub width: usize,

    /// Ticket height on screen, in pixels
    #[arg(long, default_value_t = 1000)]
    pub height: usize,

    /// Brush radius, in screen pixels
    #[arg(short, long, default_value_t = 25.0)]
    pub brush: f32,

    /// Left edge of the scratch area
    #[arg(long, default_value_t = 25)]
    pub area_x: usize,

    /// Top edge of the scratch area
    #[arg(long, default_value_t = 520)]
    pub area_y: usize,

    /// Scratch area width
    #[arg(long, default_value_t = 450)]
    pub area_width: usize,

    /// Scratch area height
    #[arg(long, default_value_t = 450)]
    pub area_height: usize,

    /// Percentage of the area that must be scratched to win
    #[arg(short, long, default_value_t = 80.0)]
    pub threshold: f32,

    /// Mask resolution relative to the screen (0.5 = half as many pixels per side)
    #[arg(long, default_value_t = 1.0)]
    pub mask_scale: f32,

    /// Check coverage every N pointer moves while dragging (0 = only on release)
    #[arg(long, default_value_t = 8)]
    pub sample_every: usize,

    /// Ticket artwork; a built-in ticket is drawn when omitted or unreadable
    #[arg(long)]
    pub ticket: Option<PathBuf>,
}

impl Args {
    /// Scratch area in screen pixels.
    pub fn area(&self) -> Rect {
        Rect::new(self.area_x, self.area_y, self.area_width, self.area_height)
    }

    pub fn surface(&self) -> Surface {
        let side = |len: usize| (len as f32 * self.mask_scale).round() as usize;
        Surface::new(self.width, self.height, side(self.width), side(self.height))
    }

    /// Everything in mask pixels; `ScratchMask::new` rejects what doesn't fit.
    pub fn mask_config(&self, surface: &Surface) -> MaskConfig {
        MaskConfig::new(
            surface.mask_width,
            surface.mask_height,
            surface.rect_to_mask(self.area()),
            self.threshold,
        )
        .with_brush_radius(surface.length_to_mask(self.brush))
        .with_feather(DEFAULT_FEATHER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_paper_ticket() {
        let args = Args::parse_from(["scratch-ticket"]);
        assert_eq!(args.area(), Rect::new(25, 520, 450, 450));
        let cfg = args.mask_config(&args.surface());
        assert_eq!((cfg.width, cfg.height), (500, 1000));
        assert_eq!(cfg.brush_radius, 25.0);
        assert_eq!(cfg.threshold_percent, 80.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn half_scale_mask() {
        let args = Args::parse_from(["scratch-ticket", "--mask-scale", "0.5", "--brush", "10"]);
        let cfg = args.mask_config(&args.surface());
        assert_eq!((cfg.width, cfg.height), (250, 500));
        assert_eq!(cfg.coverage_area, Rect::new(13, 260, 225, 225));
        assert_eq!(cfg.brush_radius, 5.0);
    }

    #[test]
    fn area_off_the_ticket_is_rejected() {
        let args = Args::parse_from(["scratch-ticket", "--area-x", "600"]);
        let cfg = args.mask_config(&args.surface());
        assert!(cfg.validate().is_err());
    }
}
