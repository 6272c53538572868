// src/lib.rs - Library interface for internal module access

pub mod circuit_analysis;
pub mod constants;
pub mod font_config;
pub mod measurements;
pub mod phasor;
pub mod plot_framework;
pub mod plot_functions;
pub mod report;

// Expose crate version derived from vergen-generated env vars at compile time.
pub fn crate_version() -> &'static str {
    option_env!("VERGEN_GIT_SEMVER").unwrap_or(env!("CARGO_PKG_VERSION"))
}
