// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// RGB <-> HSV conversion for 8-bit pixels.

/// A colour in hue/saturation/value form. All three components lie in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

impl Hsv {
    /// Convert an 8-bit RGB triple.
    ///
    /// Grey pixels (zero chroma) get hue 0 and saturation 0. Hue ties are
    /// resolved in R, G, B order: the first channel equal to the maximum
    /// selects the hue sector.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let r = r as f64 / 255.0;
        let g = g as f64 / 255.0;
        let b = b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let chroma = max - min;

        if chroma == 0.0 {
            return Self {
                hue: 0.0,
                saturation: 0.0,
                value: max,
            };
        }

        let saturation = chroma / max;
        let fraction = |channel: f64| ((max - channel) / 6.0 + chroma / 2.0) / chroma;
        let (cr, cg, cb) = (fraction(r), fraction(g), fraction(b));

        let mut hue = if r == max {
            cb - cg
        } else if g == max {
            1.0 / 3.0 + cr - cb
        } else {
            2.0 / 3.0 + cg - cr
        };

        // A single wrap is enough: the sector formulas stay within [-1, 2].
        if hue < 0.0 {
            hue += 1.0;
        }
        if hue > 1.0 {
            hue -= 1.0;
        }

        Self {
            hue,
            saturation,
            value: max,
        }
    }

    /// Scale saturation by `(100 + percentage) / 100`, clamped to [0, 1].
    ///
    /// Offsets below -100 would otherwise drive saturation negative; those
    /// collapse to grey instead.
    pub fn scale_saturation(self, percentage: i32) -> Self {
        let scaled = self.saturation * (100.0 + percentage as f64) / 100.0;
        Self {
            saturation: scaled.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Convert back to an 8-bit RGB triple, rounding to nearest.
    pub fn to_rgb(self) -> [u8; 3] {
        let Self {
            hue: h,
            saturation: s,
            value: v,
        } = self;

        if s == 0.0 {
            let grey = to_channel(v);
            return [grey, grey, grey];
        }

        let h6 = h * 6.0;
        let sector = h6.floor();
        let f = h6 - sector;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match sector as i64 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        [to_channel(r), to_channel(g), to_channel(b)]
    }
}

/// Map a [0, 1] component to an 8-bit channel.
fn to_channel(component: f64) -> u8 {
    (component * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grey_is_achromatic() {
        for level in [0u8, 1, 64, 128, 200, 255] {
            let hsv = Hsv::from_rgb(level, level, level);
            assert_eq!(hsv.hue, 0.0);
            assert_eq!(hsv.saturation, 0.0);
            for percentage in [-300, -100, 0, 100, 300, 10_000] {
                assert_eq!(
                    hsv.scale_saturation(percentage).to_rgb(),
                    [level, level, level]
                );
            }
        }
    }

    #[test]
    fn primary_hues() {
        let red = Hsv::from_rgb(255, 0, 0);
        assert!((red.hue - 0.0).abs() < 1e-12);
        assert_eq!(red.saturation, 1.0);
        assert_eq!(red.value, 1.0);

        let green = Hsv::from_rgb(0, 255, 0);
        assert!((green.hue - 1.0 / 3.0).abs() < 1e-12);

        let blue = Hsv::from_rgb(0, 0, 255);
        assert!((blue.hue - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn magenta_wraps_into_unit_range() {
        // Red is max and blue > green, so the raw hue is negative before wrapping.
        let hsv = Hsv::from_rgb(255, 0, 128);
        assert!(hsv.hue > 0.8 && hsv.hue < 1.0, "hue = {}", hsv.hue);
    }

    #[test]
    fn yellow_tie_resolves_to_red_sector() {
        // r == g == max: the red branch wins.
        let hsv = Hsv::from_rgb(255, 255, 0);
        assert!((hsv.hue - 1.0 / 6.0).abs() < 1e-12);
        assert_eq!(hsv.to_rgb(), [255, 255, 0]);
    }

    #[test]
    fn round_trip_within_one() {
        for r in (0..=255u16).step_by(3) {
            for g in (0..=255u16).step_by(3) {
                for b in (0..=255u16).step_by(3) {
                    let (r, g, b) = (r as u8, g as u8, b as u8);
                    let [r2, g2, b2] = Hsv::from_rgb(r, g, b).scale_saturation(0).to_rgb();
                    assert!(
                        r.abs_diff(r2) <= 1 && g.abs_diff(g2) <= 1 && b.abs_diff(b2) <= 1,
                        "({r}, {g}, {b}) -> ({r2}, {g2}, {b2})"
                    );
                }
            }
        }
    }

    #[test]
    fn saturation_never_exceeds_one() {
        for (r, g, b) in [(255, 0, 0), (200, 100, 50), (10, 20, 30), (128, 127, 126)] {
            for percentage in [100, 200, 300, 1_000, i32::MAX / 2] {
                let hsv = Hsv::from_rgb(r, g, b).scale_saturation(percentage);
                assert!(hsv.saturation <= 1.0, "{percentage}: {}", hsv.saturation);
            }
        }
    }

    #[test]
    fn saturation_below_minus_hundred_clamps_to_grey() {
        let hsv = Hsv::from_rgb(200, 100, 50).scale_saturation(-200);
        assert_eq!(hsv.saturation, 0.0);
        assert_eq!(hsv.to_rgb(), [200, 200, 200]);
    }

    #[test]
    fn last_sector_maps_to_red_magenta() {
        let hsv = Hsv {
            hue: 5.2 / 6.0,
            saturation: 1.0,
            value: 1.0,
        };
        assert_eq!(hsv.to_rgb(), [255, 0, 204]);
    }
}
