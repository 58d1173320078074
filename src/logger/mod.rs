pub mod animated_logger;
