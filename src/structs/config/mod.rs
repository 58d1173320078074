pub mod agent_config;
pub mod config;
pub mod logging_config;
pub mod server_config;
