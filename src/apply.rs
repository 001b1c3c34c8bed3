//! Theme installation and live activation.
//!
//! GTK applications do not watch their stylesheet for changes, so the
//! theme is installed twice, once under its real name and once as a
//! `...Temp` twin, and the desktop setting is flipped twin-then-real.
//! The switch makes every running GTK app reload the theme in place.

use std::{fs, path::PathBuf, process::Command, thread, time::Duration};

use anyhow::{bail, Context, Result};
use rgb::RGB8;

use chrome_palette::theme;

use crate::output;

const THEME_NAME: &str = "MaterialSeed";

fn theme_dir(name: &str) -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine the home directory")?;
    Ok(home.join(".themes").join(name))
}

/// Write `~/.themes/<name>/gtk-3.0/gtk.css` and its `index.theme`.
fn install(name: &str, css: &str, seed: RGB8) -> Result<()> {
    let dir = theme_dir(name)?;
    let gtk_dir = dir.join("gtk-3.0");
    fs::create_dir_all(&gtk_dir)
        .with_context(|| format!("Failed to create {}", gtk_dir.display()))?;

    let css_path = gtk_dir.join("gtk.css");
    fs::write(&css_path, css)
        .with_context(|| format!("Failed to write {}", css_path.display()))?;

    let index_path = dir.join("index.theme");
    fs::write(&index_path, theme::index_theme(name, seed))
        .with_context(|| format!("Failed to write {}", index_path.display()))?;
    Ok(())
}

fn set_gtk_theme(name: &str) -> Result<()> {
    let status = Command::new("gsettings")
        .args(["set", "org.gnome.desktop.interface", "gtk-theme", name])
        .status()
        .context("Failed to run gsettings")?;
    if !status.success() {
        bail!("gsettings exited with {status}");
    }
    Ok(())
}

/// Install both theme copies and flip the desktop over to the new one.
pub fn install_and_activate(css: &str, seed: RGB8) -> Result<()> {
    let temp_name = format!("{THEME_NAME}Temp");
    install(&temp_name, css, seed)?;
    install(THEME_NAME, css, seed)?;
    output::status("Installed", format!("~/.themes/{THEME_NAME}"));

    // Activation failures are not fatal: the theme files are already
    // in place and a session restart will pick them up.
    if let Err(err) = set_gtk_theme(&temp_name) {
        output::warn(format!("Could not switch to {temp_name}: {err}"));
    }
    thread::sleep(Duration::from_secs(1));
    if let Err(err) = set_gtk_theme(THEME_NAME) {
        output::warn(format!("Could not switch to {THEME_NAME}: {err}"));
    }
    output::status("Activated", THEME_NAME);
    output::note(
        "keep 'Use GTK+ theme' enabled in chrome://settings/appearance \
         for the browser to follow",
    );
    Ok(())
}
