pub mod catalog;
pub mod check;
pub mod cli;
pub mod command;
pub mod config;
pub mod control;
pub mod error;
pub mod matcher;
pub mod output;
pub mod parser;

pub use error::{ConfGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CONTROL_FAILED: i32 = 1;
pub const EXIT_RUNTIME_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
