pub mod agents;
pub mod contribution_analyzer;
pub mod field_extractor;
pub mod rating_classifier;
pub mod report_assembler;
pub mod response_parser;
