//! Material 3 tonal palettes from a seed color, derived the way
//! Chromium's browser UI does it.
//!
//! - [`Hct`]: the hue/chroma/tone working space (an HSV-based
//!   approximation of Material's appearance model)
//! - [`TonalPalette`]: a fixed hue/chroma locus queryable at any tone
//! - [`ChromePalette`]: the six role palettes generated from a seed
//! - [`Variant`]: the four stylistic presets
//!
//! ```
//! use rgb::RGB8;
//! use chrome_palette::{ChromePalette, Variant};
//!
//! let palette = ChromePalette::generate(RGB8::new(28, 32, 39), Variant::TonalSpot);
//! let accent = palette.primary.tone(40);
//! ```

use rgb::{RGB8, RGBA8};

mod variants;
use variants::ty::Transform;
pub use variants::ty::{Role, Variant};

pub mod theme;

/// Unit saturation maps to this chroma; nothing above it is
/// representable, so conversions clamp there.
const MAX_CHROMA: f64 = 120.;

/// A color in the hue/chroma/tone space used for palette derivation.
///
/// This is deliberately *not* CAM16: hue and tone come from plain HSV,
/// with saturation rescaled onto Material's chroma axis.  The preset
/// tables in this crate were tuned against that mapping, so keeping it
/// bit-exact matters more than perceptual fidelity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hct {
    /// Hue in degrees, in \[0, 360).
    pub hue: f64,
    /// Chroma: 0 for gray, 120 for a fully saturated color.
    pub chroma: f64,
    /// Tone (lightness) in \[0, 100\].
    pub tone: f64,
}

impl Hct {
    /// Convert an 8-bit RGB color into the working space.
    pub fn from_rgb(c: RGB8) -> Hct {
        let r = c.r as f64 / 255.;
        let g = c.g as f64 / 255.;
        let b = c.b as f64 / 255.;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let hue = if delta == 0. {
            0.
        } else if max == r {
            60. * (((g - b) / delta) % 6.)
        } else if max == g {
            60. * ((b - r) / delta + 2.)
        } else {
            60. * ((r - g) / delta + 4.)
        };
        let hue = if hue < 0. { hue + 360. } else { hue };

        let saturation = if max == 0. { 0. } else { delta / max };

        Hct {
            hue,
            chroma: saturation * MAX_CHROMA,
            tone: max * 100.,
        }
    }

    /// Convert back to 8-bit RGB; alpha is always opaque.
    ///
    /// Channels are truncated at the cast, not rounded.  A hue of
    /// exactly 360 falls into the last sextant.
    pub fn to_rgb(&self) -> RGBA8 {
        let saturation = (self.chroma / MAX_CHROMA).min(1.);
        let value = self.tone / 100.;

        let c = value * saturation;
        let x = c * (1. - ((self.hue / 60.) % 2. - 1.).abs());
        let m = value - c;

        let (r, g, b) = match self.hue {
            h if h < 60. => (c, x, 0.),
            h if h < 120. => (x, c, 0.),
            h if h < 180. => (0., c, x),
            h if h < 240. => (0., x, c),
            h if h < 300. => (x, 0., c),
            _ => (c, 0., x),
        };

        RGBA8 {
            r: ((r + m) * 255.) as u8,
            g: ((g + m) * 255.) as u8,
            b: ((b + m) * 255.) as u8,
            a: 255,
        }
    }
}

/// Reduce an angle in degrees to \[0, 360).
fn sanitize_degrees(degrees: f64) -> f64 {
    let degrees = degrees % 360.;
    if degrees < 0. { degrees + 360. } else { degrees }
}

/// Rotate `source_hue` by the rotation whose reference hue is nearest.
///
/// A single-entry table applies unconditionally.  Distance is plain
/// absolute difference, not arc length: 1° and 359° are far apart here,
/// which is why the preset tables carry entries at both 0 and 360.
/// Ties keep the earliest entry.
fn rotated_hue(source_hue: f64, rotations: &[(f64, f64)]) -> f64 {
    if let &[(_, rotation)] = rotations {
        return sanitize_degrees(source_hue + rotation);
    }

    let mut best = 0.;
    let mut min_diff = 360.;
    for &(hue, rotation) in rotations {
        let diff = (source_hue - hue).abs();
        if diff < min_diff {
            min_diff = diff;
            best = rotation;
        }
    }
    sanitize_degrees(source_hue + best)
}

/// The chroma whose reference hue is nearest to `source_hue`, under the
/// same distance rule as [`rotated_hue`].
fn adjusted_chroma(source_hue: f64, chromas: &[(f64, f64)]) -> f64 {
    let mut best = 0.;
    let mut min_diff = 360.;
    for &(hue, chroma) in chromas {
        let diff = (source_hue - hue).abs();
        if diff < min_diff {
            min_diff = diff;
            best = chroma;
        }
    }
    best
}

/// A fixed hue/chroma locus; lightness is supplied per query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TonalPalette {
    hue: f64,
    chroma: f64,
}

impl TonalPalette {
    pub fn new(hue: f64, chroma: f64) -> TonalPalette {
        TonalPalette { hue, chroma }
    }

    /// Hue in degrees, in \[0, 360).
    #[inline]
    pub fn hue(&self) -> f64 { self.hue }

    /// Chroma shared by every tone of this palette.
    #[inline]
    pub fn chroma(&self) -> f64 { self.chroma }

    /// The palette's color at `tone`: 0 is black, 100 is white.
    ///
    /// Out-of-range tones are not rejected; the conversion formulas run
    /// as-is and channels saturate at the 8-bit cast.
    pub fn tone(&self, tone: i32) -> RGBA8 {
        Hct {
            hue: self.hue,
            chroma: self.chroma,
            tone: tone as f64,
        }
        .to_rgb()
    }
}

/// Build one role's palette from the seed hue and the role's transform.
///
/// Chroma is resolved against the unrotated seed hue; the rotation is
/// applied afterwards.
fn make_palette(seed_hue: f64, transform: &Transform) -> TonalPalette {
    let chroma = match transform.hues_to_chroma {
        Some(table) => adjusted_chroma(seed_hue, table),
        None => transform.chroma,
    };
    let hue = match transform.hues_to_rotations {
        Some(table) => rotated_hue(seed_hue, table),
        None => sanitize_degrees(seed_hue + transform.hue_rotation),
    };
    TonalPalette::new(hue, chroma)
}

// The error locus every variant shares.
const ERROR_HUE: f64 = 25.;
const ERROR_CHROMA: f64 = 84.;

/// The six tonal palettes derived from one seed color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromePalette {
    pub primary: TonalPalette,
    pub secondary: TonalPalette,
    pub tertiary: TonalPalette,
    pub neutral: TonalPalette,
    pub neutral_variant: TonalPalette,
    pub error: TonalPalette,
}

impl ChromePalette {
    /// Derive the palettes for `seed` under `variant`.
    ///
    /// Pure and total: every seed byte triple and every variant produce
    /// a result.
    pub fn generate(seed: RGB8, variant: Variant) -> ChromePalette {
        let hue = Hct::from_rgb(seed).hue;
        let config = variants::config(variant);
        ChromePalette {
            primary: make_palette(hue, &config.primary),
            secondary: make_palette(hue, &config.secondary),
            tertiary: make_palette(hue, &config.tertiary),
            neutral: make_palette(hue, &config.neutral),
            neutral_variant: make_palette(hue, &config.neutral_variant),
            error: TonalPalette::new(ERROR_HUE, ERROR_CHROMA),
        }
    }

    /// The palette filling `role`.
    pub fn role(&self, role: Role) -> TonalPalette {
        match role {
            Role::Primary => self.primary,
            Role::Secondary => self.secondary,
            Role::Tertiary => self.tertiary,
            Role::Neutral => self.neutral,
            Role::NeutralVariant => self.neutral_variant,
            Role::Error => self.error,
        }
    }
}
