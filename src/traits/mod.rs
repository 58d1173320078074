pub mod agent_runtime;
