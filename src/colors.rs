//! Card colors

use crate::random::RandomSource;

/// Color in HSL space, hue in degrees, saturation and lightness in percent
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

/// 8-bit sRGB color
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Hsl {
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Scale each component by a random factor
    ///
    /// Factors are drawn from `[min, min + span)` per component, in the
    /// order hue, saturation, lightness.
    fn jitter(
        &self,
        random: &mut impl RandomSource,
        saturation: (f64, f64),
        lightness: (f64, f64),
    ) -> Self {
        let hue = self.hue * (0.95 + random.next_f64() * 0.1);
        let sat = self.saturation * (saturation.0 + random.next_f64() * saturation.1);
        let light = self.lightness * (lightness.0 + random.next_f64() * lightness.1);
        Self::new(
            hue.rem_euclid(360.0),
            sat.clamp(0.0, 100.0),
            light.clamp(0.0, 100.0),
        )
    }

    pub fn to_rgb(&self) -> Rgb {
        let s = self.saturation / 100.0;
        let l = self.lightness / 100.0;
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let h = self.hue.rem_euclid(360.0) / 60.0;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = l - c / 2.0;
        let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgb {
            r: channel(r),
            g: channel(g),
            b: channel(b),
        }
    }
}

impl Rgb {
    /// `#rrggbb` notation
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Colors of one card
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct ColorScheme {
    /// Walls, unexplored area, hearts and caption
    pub foreground: Hsl,
    pub background: Hsl,
    pub highlight: Hsl,
}

impl ColorScheme {
    pub const BASE_FOREGROUND: Hsl = Hsl::new(336.0, 80.0, 47.0);
    pub const BASE_BACKGROUND: Hsl = Hsl::new(40.0, 100.0, 57.0);
    pub const BASE_HIGHLIGHT: Hsl = Hsl::new(336.0, 80.0, 47.0);

    /// Base colors without any variation
    pub fn base() -> Self {
        Self {
            foreground: Self::BASE_FOREGROUND,
            background: Self::BASE_BACKGROUND,
            highlight: Self::BASE_HIGHLIGHT,
        }
    }

    /// Slightly varied base colors
    ///
    /// Consumes nine values from `random`, so that the maze drawn from the
    /// same source afterwards depends on this call.
    pub fn randomized(random: &mut impl RandomSource) -> Self {
        let foreground = Self::BASE_FOREGROUND.jitter(random, (0.8, 0.2), (1.0, 0.4));
        let background = Self::BASE_BACKGROUND.jitter(random, (0.6, 0.4), (1.0, 0.2));
        let highlight = Self::BASE_HIGHLIGHT.jitter(random, (0.8, 0.2), (1.0, 0.2));
        Self {
            foreground,
            background,
            highlight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ColorScheme, Hsl, Rgb};

    #[test]
    fn hsl_primaries() {
        assert_eq!(Hsl::new(0.0, 100.0, 50.0).to_rgb(), Rgb { r: 255, g: 0, b: 0 });
        assert_eq!(Hsl::new(120.0, 100.0, 50.0).to_rgb(), Rgb { r: 0, g: 255, b: 0 });
        assert_eq!(Hsl::new(240.0, 100.0, 50.0).to_rgb(), Rgb { r: 0, g: 0, b: 255 });
        assert_eq!(Hsl::new(0.0, 0.0, 100.0).to_rgb().to_hex(), "#ffffff");
    }

    #[test]
    fn randomized_draws_nine_values() {
        let mut calls = 0;
        let mut counting = || {
            calls += 1;
            0.0
        };
        let scheme = ColorScheme::randomized(&mut counting);
        assert_eq!(calls, 9);

        // Lowest factors everywhere
        assert!((scheme.foreground.hue - 336.0 * 0.95).abs() < 1e-9);
        assert!((scheme.background.saturation - 60.0).abs() < 1e-9);
        assert!((scheme.highlight.lightness - 47.0).abs() < 1e-9);
    }

    #[test]
    fn randomized_clamps_percentages() {
        let mut high = || 0.999;
        let scheme = ColorScheme::randomized(&mut high);
        assert!(scheme.background.saturation <= 100.0);
        assert!(scheme.foreground.lightness <= 100.0);
    }
}
