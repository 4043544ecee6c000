// Copyright 2025 the Chartgeo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic series colors and the color scheme they belong to.
//!
//! The default palette walks the hue wheel from pure blue in steps of 69°, keeping saturation
//! and lightness at 0.5. Consecutive indices land far apart in hue, and the sequence only comes
//! back to blue after 120 entries (`360 / gcd(69, 360)`).

extern crate alloc;

use alloc::format;
use alloc::string::String;

use peniko::Color;

use crate::error::ColorError;
#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Hue step between consecutive palette entries, in degrees.
const HUE_STEP: usize = 69;

/// A palette maps a series (or item) index to a color.
///
/// Palettes must be pure and total over all indices.
pub type PaletteFn = fn(usize) -> Color;

/// A color in hue/saturation/lightness form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    /// Hue in degrees, `[0, 360)`.
    pub h: f64,
    /// Saturation, `[0, 1]`.
    pub s: f64,
    /// Lightness, `[0, 1]`.
    pub l: f64,
}

/// Converts 8-bit RGB channels to HSL.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let l = (max + min) / 2.0;

    if delta == 0.0 {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let mut h = if max == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    if h < 0.0 {
        h += 360.0;
    }
    let s = delta / (1.0 - (2.0 * l - 1.0).abs());
    Hsl { h, s, l }
}

/// Converts HSL to an opaque color.
///
/// Fails if the hue is outside `[0, 360)` or saturation/lightness outside `[0, 1]`.
pub fn hsl_to_rgb(hsl: Hsl) -> Result<Color, ColorError> {
    let Hsl { h, s, l } = hsl;
    if !(0.0..360.0).contains(&h) || !(0.0..=1.0).contains(&s) || !(0.0..=1.0).contains(&l) {
        return Err(ColorError::OutOfRange { h, s, l });
    }
    Ok(hsl_to_rgb_in_range(h, s, l))
}

/// HSL to RGB for components already known to be in range.
fn hsl_to_rgb_in_range(h: f64, s: f64, l: f64) -> Color {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Color::from_rgb8(channel(r + m), channel(g + m), channel(b + m))
}

fn channel(v: f64) -> u8 {
    let v = (v * 255.0).round().clamp(0.0, 255.0);
    #[allow(clippy::cast_possible_truncation, reason = "clamped to the u8 range")]
    {
        v as u8
    }
}

/// The default palette: hue `(240 + 69 * index) mod 360`, saturation and lightness 0.5.
pub fn default_palette(index: usize) -> Color {
    let base = rgb_to_hsl(0, 0, 255).h.round().clamp(0.0, 359.0);
    #[allow(clippy::cast_possible_truncation, reason = "clamped to [0, 359]")]
    let base = base as usize;
    // Reduce the index first so large indices cannot overflow.
    let hue = (base + (index % 360) * HUE_STEP) % 360;
    hsl_to_rgb_in_range(hue as f64, 0.5, 0.5)
}

/// Formats an opaque color as `#RRGGBB`.
pub fn hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02X}{:02X}{:02X}", rgba.r, rgba.g, rgba.b)
}

/// Colors used by a chart: page colors, gridline colors and the series palette.
#[derive(Clone, Copy, Debug)]
pub struct ColorScheme {
    /// Text and foreground strokes.
    pub foreground: Color,
    /// Page background (also used for slice/tile separators).
    pub background: Color,
    /// Gridlines.
    pub light_grid: Color,
    /// Axis lines.
    pub dark_grid: Color,
    /// Series palette.
    pub palette: PaletteFn,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            foreground: Color::from_rgb8(0x00, 0x00, 0x00),
            background: Color::from_rgb8(0xff, 0xff, 0xff),
            light_grid: Color::from_rgb8(0xee, 0xee, 0xee),
            dark_grid: Color::from_rgb8(0x77, 0x77, 0x77),
            palette: default_palette,
        }
    }
}

impl ColorScheme {
    /// Replaces the series palette.
    pub fn with_palette(mut self, palette: PaletteFn) -> Self {
        self.palette = palette;
        self
    }

    /// Sets the foreground and background colors.
    pub fn with_page_colors(mut self, foreground: Color, background: Color) -> Self {
        self.foreground = foreground;
        self.background = background;
        self
    }

    /// Sets the gridline and axis colors.
    pub fn with_grid_colors(mut self, light: Color, dark: Color) -> Self {
        self.light_grid = light;
        self.dark_grid = dark;
        self
    }

    /// Returns the palette color for `index`.
    pub fn color(&self, index: usize) -> Color {
        (self.palette)(index)
    }
}
