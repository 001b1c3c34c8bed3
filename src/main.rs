use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rgb::RGB8;

use chrome_palette::{theme, Variant};

mod apply;
mod output;

#[derive(Parser)]
#[command(name = "chrome-palette", version)]
#[command(about = "Generate Material 3 GTK themes from a seed color", long_about = None)]
struct Cli {
    /// Seed color as R,G,B (e.g. 28,32,39)
    #[arg(value_parser = parse_seed)]
    seed: RGB8,

    /// Material 3 scheme variant
    #[arg(short, long, value_enum, default_value = "tonal_spot")]
    variant: VariantArg,

    /// Write the stylesheet to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Install the theme under ~/.themes and activate it via gsettings
    #[arg(short, long)]
    apply: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
enum VariantArg {
    TonalSpot,
    Vibrant,
    Expressive,
    Neutral,
    /// Grayscale rendition, served by the neutral preset
    Monochrome,
}

impl VariantArg {
    /// Monochrome is an alias at this layer; the scheme registry only
    /// knows the four real presets.
    fn variant(self) -> Variant {
        match self {
            VariantArg::TonalSpot => Variant::TonalSpot,
            VariantArg::Vibrant => Variant::Vibrant,
            VariantArg::Expressive => Variant::Expressive,
            VariantArg::Neutral | VariantArg::Monochrome => Variant::Neutral,
        }
    }

    fn label(self) -> &'static str {
        match self {
            VariantArg::TonalSpot => "tonal_spot",
            VariantArg::Vibrant => "vibrant",
            VariantArg::Expressive => "expressive",
            VariantArg::Neutral => "neutral",
            VariantArg::Monochrome => "monochrome",
        }
    }
}

fn parse_seed(s: &str) -> Result<RGB8, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Err("expected R,G,B (e.g. 28,32,39)".into());
    }
    let channel = |value: &str, name: &str| {
        value
            .trim()
            .parse::<u8>()
            .map_err(|_| format!("invalid {name} value: {value}"))
    };
    Ok(RGB8::new(
        channel(parts[0], "red")?,
        channel(parts[1], "green")?,
        channel(parts[2], "blue")?,
    ))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let css = theme::gtk_css(cli.seed, cli.variant.variant(), cli.variant.label());

    if let Some(path) = &cli.output {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        fs::write(path, &css)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        output::status("Written", path.display().to_string());
    } else if !cli.apply {
        print!("{css}");
    }

    if cli.apply {
        apply::install_and_activate(&css, cli.seed)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_parsing() {
        assert_eq!(parse_seed("28,32,39").unwrap(), RGB8::new(28, 32, 39));
        assert_eq!(parse_seed(" 255 , 0 , 10 ").unwrap(), RGB8::new(255, 0, 10));
        assert!(parse_seed("1,2").is_err());
        assert!(parse_seed("1,2,3,4").is_err());
        assert!(parse_seed("256,0,0").is_err());
        assert!(parse_seed("a,b,c").is_err());
        assert!(parse_seed("-1,0,0").is_err());
    }

    #[test]
    fn monochrome_is_served_by_the_neutral_preset() {
        assert_eq!(VariantArg::Monochrome.variant(), Variant::Neutral);
        assert_eq!(VariantArg::Monochrome.label(), "monochrome");
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
