pub mod args;
pub mod commands;

pub use args::{Cli, Commands, FetchArgs};
pub use commands::{fetch_snapshot, run};
