//! Process-level wiring: CLI, config file, logger, and the task driver.
pub mod app;
pub mod cli;
pub mod config;
pub mod logging;

#[cfg(test)]
mod fixtures;
