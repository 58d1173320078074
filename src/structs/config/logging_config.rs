use log::LevelFilter;
use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "ConfigHelper::default_log_level")]
    pub level: String,
}

impl LoggingConfig {
    /// Configured level; an unrecognized name falls back to `info`.
    pub fn level_filter(&self) -> LevelFilter {
        self.level.trim().parse().unwrap_or(LevelFilter::Info)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: ConfigHelper::default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_map_to_filters() {
        let level = |name: &str| LoggingConfig { level: name.to_string() }.level_filter();

        assert_eq!(LoggingConfig::default().level_filter(), LevelFilter::Info);
        assert_eq!(level("debug"), LevelFilter::Debug);
        assert_eq!(level("WARN"), LevelFilter::Warn);
        assert_eq!(level("off"), LevelFilter::Off);
        assert_eq!(level("loud"), LevelFilter::Info);
    }
}
