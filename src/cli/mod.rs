//! Command-line surface: one module per subcommand, shared styling in `ui`.

pub mod commands;
pub mod ui;

pub use ui::Output;
