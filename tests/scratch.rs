use scratch_ticket::compose::{compose_ticket, FOIL_COLOR};
use scratch_ticket::gamma::GammaLut;
use scratch_ticket::{
    create, FrameBuffer, MaskConfig, Point, PointerAdapter, PointerEvent, PointerTracker, Rect,
    ScratchMask, Surface,
};

fn pen(width: usize, height: usize, area: Rect, threshold: f32) -> ScratchMask {
    let cfg = MaskConfig::new(width, height, area, threshold)
        .with_brush_radius(0.0)
        .with_feather(0.0);
    ScratchMask::new(&cfg).unwrap()
}

/// One-pixel-wide stroke along row `y` from x0 to x1 inclusive.
fn scratch_row(mask: &mut ScratchMask, y: usize, x0: usize, x1: usize) {
    mask.begin_stroke(Point::new(x0 as f32, y as f32));
    mask.continue_stroke(Point::new(x1 as f32, y as f32));
    mask.end_stroke();
}

#[test]
fn scratching_a_90px_square_wins_once() {
    let mut mask = pen(100, 100, Rect::full(100, 100), 80.0);

    // Nine bands of ten rows; completion is checked after each band.
    for band in 0..9 {
        for y in band * 10..band * 10 + 10 {
            scratch_row(&mut mask, y, 0, 89);
        }
        let fired = mask.check_completion();
        if band < 8 {
            assert!(!fired, "fired early after band {band}");
        } else {
            assert!(fired, "did not fire once the square was done");
        }
    }

    assert!((mask.sample_coverage() - 81.0).abs() < 1e-4);
    assert_eq!(mask.sample_coverage(), mask.scan_coverage());
    assert!(!mask.check_completion());

    // Keep scratching: still no second signal.
    for y in 90..100 {
        scratch_row(&mut mask, y, 0, 99);
    }
    assert!(!mask.check_completion());
    assert!(mask.is_completed());
}

#[test]
fn boundary_7999_vs_8000() {
    let mut mask = pen(100, 100, Rect::full(100, 100), 80.0);
    for y in 0..79 {
        scratch_row(&mut mask, y, 0, 99);
    }
    scratch_row(&mut mask, 79, 0, 98);
    assert!(!mask.check_completion());
    assert!(!mask.is_completed());

    scratch_row(&mut mask, 79, 99, 99);
    assert!(mask.check_completion());
    assert!(mask.is_completed());
}

#[test]
fn sub_area_only_counts_its_own_pixels() {
    let area = Rect::new(20, 20, 10, 10);
    let cfg = MaskConfig::new(64, 64, area, 100.0).with_brush_radius(20.0);
    let mut mask = ScratchMask::new(&cfg).unwrap();
    // A brush far bigger than the panel: writes are clipped to it.
    mask.begin_stroke(Point::new(25.0, 25.0));
    mask.end_stroke();
    assert_eq!(mask.sample_coverage(), 100.0);
    assert_eq!(mask.alpha_at(20, 45), 0);
    assert_eq!(mask.alpha().iter().filter(|&&a| a != 0).count(), 0);
    assert!(mask.check_completion());
    assert_eq!(mask.alpha_at(5, 25), 0);
}

#[test]
fn config_errors_surface_at_create() {
    assert!(create(100, 100, Rect::new(0, 0, 0, 10), 80.0).is_err());
    assert!(create(100, 100, Rect::new(90, 0, 20, 10), 80.0).is_err());
    assert!(create(100, 100, Rect::full(100, 100), 0.0).is_err());
    assert!(create(100, 100, Rect::full(100, 100), 101.0).is_err());
    assert!(create(100, 100, Rect::full(100, 100), 100.0).is_ok());
}

#[test]
fn polled_mouse_drag_wins_and_composes() {
    // Display is twice the mask resolution, like a high-DPI window.
    let surface = Surface::new(200, 200, 100, 100);
    let cfg = MaskConfig::new(100, 100, Rect::new(10, 10, 80, 80), 80.0).with_brush_radius(6.0);
    let mut mask = ScratchMask::new(&cfg).unwrap();
    let mut adapter = PointerAdapter::new(surface, 0);
    let mut tracker = PointerTracker::new();

    // Zig-zag over the panel in display coordinates, one poll per frame.
    let mut frames = vec![(Point::new(20.0, 20.0), false)];
    for row in 0..15 {
        let y = 20.0 + row as f32 * 11.0;
        frames.push((Point::new(20.0, y), true));
        frames.push((Point::new(180.0, y), true));
    }
    frames.push((Point::new(180.0, 180.0), false));

    let mut wins = 0;
    for (p, down) in frames {
        if let Some(ev) = tracker.update(Some(p), down) {
            if adapter.handle(&mut mask, ev) {
                wins += 1;
            }
        }
    }
    assert_eq!(wins, 1);
    assert!(mask.sample_coverage() >= 80.0);

    let ticket = FrameBuffer { width: 100, height: 100, pixels: vec![0x00_00_80_00; 100 * 100] };
    let mut out = FrameBuffer::new(100, 100);
    assert!(mask.take_dirty());
    compose_ticket(&mut out, &ticket, &mask, FOIL_COLOR, &GammaLut::new()).unwrap();
    assert_eq!(out.pixels[50 * 100 + 50], 0x00_00_80_00);
    assert_eq!(out.pixels[0], 0x00_00_80_00);
}

#[test]
fn leave_ends_the_stroke() {
    let mut mask = pen(50, 50, Rect::full(50, 50), 80.0);
    let mut adapter = PointerAdapter::new(Surface::identity(50, 50), 0);
    adapter.handle(&mut mask, PointerEvent::Down(Point::new(10.0, 10.0)));
    adapter.handle(&mut mask, PointerEvent::Leave);
    assert_eq!(mask.last_stroke_point(), None);

    // A later move without a new press scratches nothing.
    adapter.handle(&mut mask, PointerEvent::Move(Point::new(30.0, 30.0)));
    assert_eq!(mask.alpha_at(30, 30), 255);
}
