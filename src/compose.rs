// Presentation: ticket + foil mask -> the frame the window shows.

use crate::engine::ScratchMask;
use crate::error::Error;
use crate::gamma::GammaLut;
use crate::types::FrameBuffer;

/// "#CCC", the grey foil of the paper ticket.
pub const FOIL_COLOR: u32 = 0x00_CC_CC_CC;

/// Lay the foil over the ticket wherever the mask still has alpha.
/// The mask may be coarser or finer than the display; each display pixel
/// takes its nearest mask sample.
pub fn compose_ticket(
    out: &mut FrameBuffer,
    ticket: &FrameBuffer,
    mask: &ScratchMask,
    foil: u32,
    lut: &GammaLut,
) -> Result<(), Error> {
    if out.width != ticket.width || out.height != ticket.height {
        return Err(Error::BufferSize(format!(
            "compose: ticket {}x{} vs frame {}x{}",
            ticket.width, ticket.height, out.width, out.height
        )));
    }

    let (w, h) = (out.width, out.height);
    let (mw, mh) = (mask.width(), mask.height());
    for y in 0..h {
        let my = y * mh / h;
        let row = y * w;
        for x in 0..w {
            let mx = x * mw / w;
            let a = mask.alpha_at(mx, my);
            out.pixels[row + x] = lut.mix(ticket.pixels[row + x], foil, a);
        }
    }
    Ok(())
}

/// Post-win view: the bare ticket, foil gone.
pub fn reveal(out: &mut FrameBuffer, ticket: &FrameBuffer) -> Result<(), Error> {
    if out.pixels.len() != ticket.pixels.len() {
        return Err(Error::BufferSize("reveal: ticket and frame differ".into()));
    }
    out.pixels.copy_from_slice(&ticket.pixels);
    Ok(())
}
