pub mod contribution_prompt;
