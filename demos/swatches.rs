use std::{fs::File,
          io::{BufWriter, Write},
          error::Error};
use rgb::{RGB8, RGBA8};
use chrome_palette::{ChromePalette, Role, TonalPalette, Variant};

type Err = Box<dyn Error>;

fn css_string(c: RGBA8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

fn tone_strip(fh: &mut impl Write, palette: TonalPalette,
              comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px; border-spacing: 0px\"><tr>")?;
    for tone in (0..=100).step_by(2) {
        writeln!(fh, "  <td style=\"width: 14px; height: 30px; \
                      background-color: {}\"></td>",
                 css_string(palette.tone(tone)))?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{comment} \
                  (hue {:.1}, chroma {:.1})</td></tr></table>",
             palette.hue(), palette.chroma())?;
    Ok(())
}

fn main() -> Result<(), Err> {
    let mut fh = BufWriter::new(File::create("swatches.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>chrome-palette: tonal swatches</title>\n\
                  </head>\n\
                  <body>")?;

    let seeds = [(28u8, 32u8, 39u8), (103, 80, 164), (255, 0, 0)];
    let variants = [(Variant::TonalSpot, "tonal_spot"),
                    (Variant::Vibrant, "vibrant"),
                    (Variant::Neutral, "neutral"),
                    (Variant::Expressive, "expressive")];

    for (r, g, b) in seeds {
        writeln!(fh, "<h2>Seed RGB({r},{g},{b})</h2>")?;
        for (variant, name) in variants {
            writeln!(fh, "<h3>{name}</h3>")?;
            let palette = ChromePalette::generate(RGB8::new(r, g, b), variant);
            for role in Role::ALL {
                tone_strip(&mut fh, palette.role(role), &format!("{role:?}"))?;
            }
        }
    }

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
