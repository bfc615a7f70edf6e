pub mod cli;
pub mod commands;
pub mod core;
pub mod logging;

pub use commands::Context;
