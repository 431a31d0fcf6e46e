pub mod checker;
pub mod cli;
pub mod config;
pub mod counter;
pub mod document;
pub mod error;
pub mod output;
pub mod report;
pub mod runner;
pub mod scanner;

pub use error::{DivGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
