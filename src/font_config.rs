// src/font_config.rs

// Font handling for plot rendering.
// The face is embedded at compile time and registered with the text backend,
// so rendering does not depend on system font discovery.

use std::error::Error;
use std::sync::OnceLock;

use plotters::style::{register_font, FontStyle};

/// Embedded sans-serif face.
pub static BUNDLED_FONT_BYTES: &[u8] = include_bytes!("../fonts/DejaVuSans.ttf");

/// Font family name every text style in the crate requests.
pub const FONT_FAMILY: &str = "sans-serif";

static FONT_REGISTRATION: OnceLock<bool> = OnceLock::new();

/// Registers the bundled face under [`FONT_FAMILY`]. Safe to call repeatedly;
/// registration happens once per process.
pub fn ensure_font_registered() -> Result<(), Box<dyn Error>> {
    let registered = FONT_REGISTRATION
        .get_or_init(|| register_font(FONT_FAMILY, FontStyle::Normal, BUNDLED_FONT_BYTES).is_ok());
    if *registered {
        Ok(())
    } else {
        Err("failed to register bundled font".into())
    }
}
