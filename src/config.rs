/// Runtime settings for Site Marks
use log::Level;

/// Storage key the bookmark list lives under
pub const BOOKMARKS_KEY: &str = "sitsContainer";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub storage_key: String,
    pub log_level: Level,
}

impl AppConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            storage_key: BOOKMARKS_KEY.to_string(),
            log_level: Level::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.storage_key, "sitsContainer");
        assert_eq!(config.log_level, Level::Info);
    }

    #[test]
    fn test_with_storage_key() {
        let config = AppConfig::default().with_storage_key("other");
        assert_eq!(config.storage_key, "other");
    }
}
