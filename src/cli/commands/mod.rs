pub mod config;
pub mod run;

pub use run::{RunOptions, run};
