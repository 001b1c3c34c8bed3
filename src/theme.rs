//! GTK stylesheet rendering.
//!
//! Consumes a [`ChromePalette`] purely as named hex colors.  The tone
//! choices mirror the roles Chromium's browser UI actually reads: the
//! toolbar and menus sit on the light neutral "base" tone 98
//! (kColorSysBase), surfaces on neutral 99, and accents on primary 40.

use chrono::Local;
use rgb::{RGB8, RGBA8};

use crate::{ChromePalette, Variant};

/// Lowercase `#rrggbb` for a palette color; the alpha channel is
/// dropped (GTK themes here are fully opaque).
pub fn hex(c: RGBA8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

/// Seeds are never pure black: a (0,0,0) seed is replaced by (1,1,1)
/// before derivation, as the derivation gives true black a pink cast.
fn effective_seed(seed: RGB8) -> RGB8 {
    if seed == RGB8::new(0, 0, 0) {
        RGB8::new(1, 1, 1)
    } else {
        seed
    }
}

/// Render the complete GTK3 stylesheet for `seed` under `variant`.
///
/// `label` is the user-facing variant name recorded in the header
/// comment; it may differ from `variant` ("monochrome" renders with
/// the neutral preset).
pub fn gtk_css(seed: RGB8, variant: Variant, label: &str) -> String {
    let seed = effective_seed(seed);
    let palette = ChromePalette::generate(seed, variant);

    // Accents and their containers.
    let primary = hex(palette.primary.tone(40));
    let on_primary = hex(palette.primary.tone(100));
    let primary_container = hex(palette.primary.tone(90));
    let on_primary_container = hex(palette.primary.tone(10));
    let primary80 = hex(palette.primary.tone(80));
    let primary90 = hex(palette.primary.tone(90));

    // Browser chrome sits on the light neutral base, not on primary.
    let base = hex(palette.neutral.tone(98));
    let on_base = hex(palette.neutral.tone(10));

    let surface = hex(palette.neutral.tone(99));
    let on_surface = hex(palette.neutral.tone(10));

    let surface_variant = hex(palette.neutral_variant.tone(90));
    let on_surface_variant = hex(palette.neutral_variant.tone(30));
    let outline_variant = hex(palette.neutral_variant.tone(80));

    let generated = Local::now().format("%a %b %e %H:%M:%S %Y");

    format!(
        r#"/*
 * Material 3 GTK theme, generated from seed RGB({r},{g},{b})
 * Variant: {label}
 * Generated: {generated}
 */

window {{
    background-color: {surface};
    color: {on_surface};
    background-image: none;
}}

/* The toolbar takes the neutral base tone, not an accent. */
headerbar {{
    background-color: {base};
    color: {on_base};
    background-image: none;
    border-color: {primary};
}}

button {{
    background-color: {base};
    color: {on_base};
    background-image: none;
    border-color: {primary};
    border-radius: 4px;
}}

button:hover {{
    background-color: {primary_container};
    color: {on_primary_container};
    background-image: none;
}}

button:active {{
    background-color: {primary};
    color: {on_primary};
    background-image: none;
}}

entry {{
    background-color: {surface_variant};
    color: {on_surface};
    border-color: {primary};
    background-image: none;
}}

entry:focus {{
    border-color: {primary80};
    box-shadow: 0 0 0 1px {primary};
}}

.titlebar {{
    background-color: {base};
    color: {on_base};
    background-image: none;
}}

menubar {{
    background-color: {base};
    color: {on_base};
    background-image: none;
}}

toolbar {{
    background-color: {base};
    color: {on_base};
    background-image: none;
}}

selection {{
    background-color: {primary_container};
    color: {on_primary_container};
}}

scrollbar {{
    background-color: {surface};
}}

scrollbar slider {{
    background-color: {outline_variant};
    border-radius: 8px;
}}

scrollbar slider:hover {{
    background-color: {primary};
}}

notebook {{
    background-color: {surface};
}}

notebook header {{
    background-color: {primary};
    background-image: none;
}}

notebook tab {{
    background-color: {surface_variant};
    color: {on_surface_variant};
    background-image: none;
}}

notebook tab:checked {{
    background-color: {primary_container};
    color: {on_primary_container};
    background-image: none;
}}

headerbar.titlebar {{
    background-color: {base};
}}

.tab:not(:checked) {{
    background-color: {primary90};
    color: {on_surface};
}}

/* Gradients from stock themes would shine through solid colors. */
* {{
    background-image: none;
}}
"#,
        r = seed.r,
        g = seed.g,
        b = seed.b,
    )
}

/// The `index.theme` descriptor GTK expects beside the stylesheet.
pub fn index_theme(name: &str, seed: RGB8) -> String {
    format!(
        "[Desktop Entry]\n\
         Type=X-GNOME-Metatheme\n\
         Name={name}\n\
         Comment=Material 3 theme - RGB({r},{g},{b})\n\
         Encoding=UTF-8\n\
         \n\
         [X-GNOME-Metatheme]\n\
         GtkTheme={name}\n\
         IconTheme=Adwaita\n\
         CursorTheme=Adwaita\n",
        r = seed.r,
        g = seed.g,
        b = seed.b,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_lowercase_rrggbb() {
        assert_eq!(hex(RGBA8 { r: 255, g: 10, b: 0, a: 255 }), "#ff0a00");
        assert_eq!(hex(RGBA8 { r: 0, g: 0, b: 0, a: 255 }), "#000000");
    }

    #[test]
    fn black_seed_is_substituted() {
        assert_eq!(effective_seed(RGB8::new(0, 0, 0)), RGB8::new(1, 1, 1));
        assert_eq!(effective_seed(RGB8::new(0, 0, 1)), RGB8::new(0, 0, 1));
    }

    #[test]
    fn stylesheet_quotes_the_palette() {
        let seed = RGB8::new(28, 32, 39);
        let css = gtk_css(seed, Variant::TonalSpot, "tonal_spot");
        let palette = ChromePalette::generate(seed, Variant::TonalSpot);
        assert!(css.contains(&hex(palette.primary.tone(40))));
        assert!(css.contains(&hex(palette.neutral.tone(98))));
        assert!(css.contains(&hex(palette.neutral_variant.tone(90))));
        assert!(css.contains("Variant: tonal_spot"));
        assert!(css.contains("headerbar"));
        assert!(css.contains("RGB(28,32,39)"));
    }

    #[test]
    fn black_renders_as_near_black() {
        let css = gtk_css(RGB8::new(0, 0, 0), Variant::Vibrant, "vibrant");
        let near_black = ChromePalette::generate(RGB8::new(1, 1, 1), Variant::Vibrant);
        assert!(css.contains(&hex(near_black.primary.tone(40))));
        // The header records the substituted seed.
        assert!(css.contains("RGB(1,1,1)"));
    }

    #[test]
    fn index_theme_names_the_gtk_theme() {
        let text = index_theme("MaterialSeed", RGB8::new(1, 2, 3));
        assert!(text.contains("Name=MaterialSeed"));
        assert!(text.contains("GtkTheme=MaterialSeed"));
        assert!(text.contains("RGB(1,2,3)"));
    }
}
