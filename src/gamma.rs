// Gamma-correct mixing of foil over ticket via lookup tables.
// Visual: soft brush rims fade without the dark fringe a plain sRGB lerp gives.

pub struct GammaLut {
    // sRGB(0..255) -> linear (0..1)
    to_linear: [f32; 256],
    // linear(0..1) quantised to 4096 steps -> sRGB(0..255)
    to_srgb: [u8; 4096],
}

impl Default for GammaLut {
    fn default() -> Self {
        Self::new()
    }
}

impl GammaLut {
    /// Build both tables once at startup.
    pub fn new() -> Self {
        let mut to_linear = [0.0f32; 256];
        for (v, slot) in to_linear.iter_mut().enumerate() {
            let c = v as f32 / 255.0;
            *slot = if c <= 0.04045 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) };
        }

        let mut to_srgb = [0u8; 4096];
        for (i, slot) in to_srgb.iter_mut().enumerate() {
            let l = i as f32 / 4095.0;
            let s = if l <= 0.003_130_8 { 12.92 * l } else { 1.055 * l.powf(1.0 / 2.4) - 0.055 };
            *slot = (s * 255.0).round().clamp(0.0, 255.0) as u8;
        }

        Self { to_linear, to_srgb }
    }

    #[inline]
    pub fn linear(&self, v: u8) -> f32 {
        self.to_linear[v as usize]
    }

    #[inline]
    pub fn srgb(&self, l: f32) -> u8 {
        let idx = (l.clamp(0.0, 1.0) * 4095.0).round() as usize;
        self.to_srgb[idx]
    }

    /// Mix `top` over `base` (both 0x00RRGGBB) with coverage `alpha` (0..255).
    /// The two ends skip the tables so fully scratched / untouched pixels stay exact.
    #[inline]
    pub fn mix(&self, base: u32, top: u32, alpha: u8) -> u32 {
        match alpha {
            0 => base,
            255 => top,
            _ => {
                let a = alpha as f32 / 255.0;
                let inv = 1.0 - a;
                let channel = |shift: u32| {
                    let b = self.linear(((base >> shift) & 0xFF) as u8);
                    let t = self.linear(((top >> shift) & 0xFF) as u8);
                    (self.srgb(a * t + inv * b) as u32) << shift
                };
                channel(16) | channel(8) | channel(0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_round_trip_every_byte() {
        let lut = GammaLut::new();
        for v in 0..=255u8 {
            let back = lut.srgb(lut.linear(v));
            assert!(back.abs_diff(v) <= 1, "{v} came back as {back}");
        }
        assert_eq!(lut.srgb(lut.linear(0)), 0);
        assert_eq!(lut.srgb(lut.linear(255)), 255);
    }

    #[test]
    fn mix_ends_are_exact() {
        let lut = GammaLut::new();
        assert_eq!(lut.mix(0x00_12_34_56, 0x00_CC_CC_CC, 0), 0x00_12_34_56);
        assert_eq!(lut.mix(0x00_12_34_56, 0x00_CC_CC_CC, 255), 0x00_CC_CC_CC);
    }

    #[test]
    fn half_mix_is_brighter_than_srgb_average() {
        let lut = GammaLut::new();
        let mid = lut.mix(0x00_00_00_00, 0x00_FF_FF_FF, 128);
        let r = (mid >> 16) & 0xFF;
        assert!(r > 128, "linear-light midpoint should land above sRGB 128, got {r}");
        assert_eq!(mid & 0xFF, r);
    }
}
