// Chromium's scheme configurations, transcribed from
// ui/color/dynamic_color/palette_factory.cc.

use std::ops::Deref;
use lazy_static::lazy_static;

pub(crate) mod ty;
use ty::*;

/// Pair a breakpoint array with its per-breakpoint values.
fn zip(hues: &[f64], values: &[f64]) -> Vec<(f64, f64)> {
    debug_assert_eq!(hues.len(), values.len());
    hues.iter().copied().zip(values.iter().copied()).collect()
}

// Reference hues shared by a variant's secondary and tertiary tables.
// 0 and 360 are distinct entries: nearest-hue matching does not wrap.
const VIBRANT_HUES: [f64; 9] =
    [0., 41., 61., 101., 131., 181., 251., 301., 360.];
const EXPRESSIVE_HUES: [f64; 9] =
    [0., 21., 51., 121., 151., 191., 271., 321., 360.];
const NEUTRAL_HUES: [f64; 4] = [0., 260., 315., 360.];

lazy_static! {
    static ref VIBRANT_SECONDARY_ROTATIONS: Vec<(f64, f64)> =
        zip(&VIBRANT_HUES, &[18., 15., 10., 12., 15., 18., 15., 12., 12.]);
    static ref VIBRANT_TERTIARY_ROTATIONS: Vec<(f64, f64)> =
        zip(&VIBRANT_HUES, &[35., 30., 20., 25., 30., 35., 30., 25., 25.]);
    static ref EXPRESSIVE_SECONDARY_ROTATIONS: Vec<(f64, f64)> =
        zip(&EXPRESSIVE_HUES, &[45., 95., 45., 20., 45., 90., 45., 45., 45.]);
    static ref EXPRESSIVE_TERTIARY_ROTATIONS: Vec<(f64, f64)> =
        zip(&EXPRESSIVE_HUES, &[120., 120., 20., 45., 20., 15., 20., 120., 120.]);
    static ref NEUTRAL_PRIMARY_CHROMA: Vec<(f64, f64)> =
        zip(&NEUTRAL_HUES, &[12., 12., 20., 12.]);
}

lazy_static! {
    static ref TONAL_SPOT: Config = Config {
        primary: Transform::fixed(40.),
        secondary: Transform::fixed(16.),
        tertiary: Transform::rotated(60., 24.),
        neutral: Transform::fixed(6.),
        neutral_variant: Transform::fixed(8.),
    };

    static ref VIBRANT: Config = Config {
        primary: Transform::fixed(200.),
        secondary: Transform {
            hues_to_rotations: Some(VIBRANT_SECONDARY_ROTATIONS.as_slice()),
            ..Transform::fixed(24.)
        },
        tertiary: Transform {
            hues_to_rotations: Some(VIBRANT_TERTIARY_ROTATIONS.as_slice()),
            ..Transform::fixed(32.)
        },
        neutral: Transform::fixed(8.),
        neutral_variant: Transform::fixed(12.),
    };

    static ref NEUTRAL: Config = Config {
        primary: Transform {
            hues_to_chroma: Some(NEUTRAL_PRIMARY_CHROMA.as_slice()),
            ..Transform::fixed(0.)
        },
        secondary: Transform::fixed(8.),
        tertiary: Transform::fixed(16.),
        neutral: Transform::fixed(2.),
        neutral_variant: Transform::fixed(2.),
    };

    static ref EXPRESSIVE: Config = Config {
        primary: Transform::rotated(-90., 40.),
        secondary: Transform {
            hues_to_rotations: Some(EXPRESSIVE_SECONDARY_ROTATIONS.as_slice()),
            ..Transform::fixed(24.)
        },
        tertiary: Transform {
            hues_to_rotations: Some(EXPRESSIVE_TERTIARY_ROTATIONS.as_slice()),
            ..Transform::fixed(32.)
        },
        neutral: Transform::fixed(8.),
        neutral_variant: Transform::fixed(12.),
    };
}

/// The preset backing `variant`.
pub(crate) fn config(variant: Variant) -> &'static Config {
    match variant {
        Variant::TonalSpot => TONAL_SPOT.deref(),
        Variant::Vibrant => VIBRANT.deref(),
        Variant::Neutral => NEUTRAL.deref(),
        Variant::Expressive => EXPRESSIVE.deref(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_pair_every_breakpoint() {
        for table in [
            VIBRANT_SECONDARY_ROTATIONS.as_slice(),
            VIBRANT_TERTIARY_ROTATIONS.as_slice(),
            EXPRESSIVE_SECONDARY_ROTATIONS.as_slice(),
            EXPRESSIVE_TERTIARY_ROTATIONS.as_slice(),
        ] {
            assert_eq!(table.len(), 9);
        }
        assert_eq!(NEUTRAL_PRIMARY_CHROMA.len(), 4);
    }

    #[test]
    fn breakpoints_span_the_circle_in_order() {
        for table in [
            VIBRANT_SECONDARY_ROTATIONS.as_slice(),
            EXPRESSIVE_SECONDARY_ROTATIONS.as_slice(),
            NEUTRAL_PRIMARY_CHROMA.as_slice(),
        ] {
            assert_eq!(table.first().unwrap().0, 0.);
            assert_eq!(table.last().unwrap().0, 360.);
            for pair in table.windows(2) {
                assert!(pair[0].0 < pair[1].0);
            }
        }
    }

    #[test]
    fn presets_match_upstream_constants() {
        let tonal_spot = config(Variant::TonalSpot);
        assert_eq!(tonal_spot.primary.chroma, 40.);
        assert_eq!(tonal_spot.tertiary.hue_rotation, 60.);
        assert_eq!(tonal_spot.tertiary.chroma, 24.);

        let vibrant = config(Variant::Vibrant);
        assert_eq!(vibrant.primary.chroma, 200.);
        assert!(vibrant.secondary.hues_to_rotations.is_some());
        assert!(vibrant.secondary.hues_to_chroma.is_none());

        let neutral = config(Variant::Neutral);
        assert!(neutral.primary.hues_to_chroma.is_some());
        assert_eq!(neutral.neutral.chroma, 2.);

        let expressive = config(Variant::Expressive);
        assert_eq!(expressive.primary.hue_rotation, -90.);
        assert_eq!(expressive.primary.chroma, 40.);
    }
}
