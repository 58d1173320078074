//! Asks an AI agent for a contributor's commit statistics and normalizes the
//! free-form reply into a rated [`structs::contribution_report::ContributionReport`].

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod prompts;
pub mod server;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
