//! CLI command handlers

pub mod commands;

pub use commands::{inspect, list_sheets, InspectOptions, InspectOutcome};
