//! Terminal output for the CLI
//!
//! Uses `cliclack` for spinners and step markers on an interactive
//! terminal, and falls back to plain `[OK]` / `[WARN]` lines when output
//! is piped or running under CI.

mod context;
mod output;
mod progress;
mod theme;

pub use context::UiContext;
pub use output::{intro, key_value, remark, step_info, step_ok, step_ok_detail, step_warn_hint};
pub use progress::TaskSpinner;
pub use theme::{init_theme, SnapTheme};
