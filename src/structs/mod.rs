pub mod agent;
pub mod analysis_request;
pub mod cli;
pub mod config;
pub mod contribution_report;
pub mod extracted_fields;
