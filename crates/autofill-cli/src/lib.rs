//! Library side of the `field-mapper` CLI.

pub mod commands;
pub mod config;
pub mod logging;
