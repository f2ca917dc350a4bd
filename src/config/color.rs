//! Output coloring choice.

use clap::ValueEnum;

/// Environment variable that turns color on when set to `true`.
pub const COLOR_ENV_VAR: &str = "SIMILARDIFF_COLOR";

/// Explicit coloring choice from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Always,
    Never,
}

/// Decide whether to color output.
///
/// An explicit choice wins; otherwise color is on only when the environment
/// value is exactly `true`.
pub fn resolve_color(choice: Option<ColorChoice>, env_value: Option<&str>) -> bool {
    match choice {
        Some(ColorChoice::Always) => true,
        Some(ColorChoice::Never) => false,
        None => env_value == Some("true"),
    }
}

/// [`resolve_color`] against the process environment.
pub fn color_enabled(choice: Option<ColorChoice>) -> bool {
    let env_value = std::env::var(COLOR_ENV_VAR).ok();
    resolve_color(choice, env_value.as_deref())
}
