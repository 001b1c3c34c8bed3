/// How one role of a scheme derives its hue/chroma locus from the seed
/// hue.  A rotation table shadows `hue_rotation` and a chroma table
/// shadows `chroma` when present.
pub(crate) struct Transform {
    pub(crate) hue_rotation: f64,
    pub(crate) chroma: f64,
    pub(crate) hues_to_rotations: Option<&'static [(f64, f64)]>,
    pub(crate) hues_to_chroma: Option<&'static [(f64, f64)]>,
}

impl Transform {
    /// A transform that only pins chroma.
    pub(crate) const fn fixed(chroma: f64) -> Transform {
        Transform {
            hue_rotation: 0.,
            chroma,
            hues_to_rotations: None,
            hues_to_chroma: None,
        }
    }

    /// A fixed hue rotation with pinned chroma.
    pub(crate) const fn rotated(hue_rotation: f64, chroma: f64) -> Transform {
        Transform {
            hue_rotation,
            chroma,
            hues_to_rotations: None,
            hues_to_chroma: None,
        }
    }
}

/// A variant's five per-role transforms.  The error role is not
/// configurable and therefore has no entry here.
pub(crate) struct Config {
    pub(crate) primary: Transform,
    pub(crate) secondary: Transform,
    pub(crate) tertiary: Transform,
    pub(crate) neutral: Transform,
    pub(crate) neutral_variant: Transform,
}

/// Stylistic preset governing how the role palettes derive from a seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// The Material default: a calm, medium-chroma scheme.
    TonalSpot,
    /// Maximally chromatic primary with hue-spread secondaries.
    Vibrant,
    /// Near-grayscale scheme whose primary chroma depends on the seed hue.
    Neutral,
    /// Bold scheme built on large hue rotations.
    Expressive,
}

/// The six color roles of a generated scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Primary,
    Secondary,
    Tertiary,
    Neutral,
    NeutralVariant,
    Error,
}

impl Role {
    /// Every role, in scheme order.
    pub const ALL: [Role; 6] = [
        Role::Primary,
        Role::Secondary,
        Role::Tertiary,
        Role::Neutral,
        Role::NeutralVariant,
        Role::Error,
    ];
}
