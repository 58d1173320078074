pub mod agent_factory;
pub mod openai_agent;
