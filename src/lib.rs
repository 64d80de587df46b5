pub mod cli;
pub mod load_config;

pub use cli::{dispatch, run, Cli, Commands};
