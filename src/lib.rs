pub mod analysis;
pub mod config;
pub mod errors;
pub mod report;
mod runner;
pub mod seq;

use crate::errors::ToolkitError;

pub use crate::runner::run_from;

pub fn run() -> Result<(), ToolkitError> {
    runner::run()
}
