pub mod agent_error;
pub mod analysis_stage;
pub mod commands;
pub mod rating_band;
pub mod reply_format;
