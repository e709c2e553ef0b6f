#[cfg(test)]
mod tests {
    use tasq::libs::config::{Config, ReminderConfig};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_means_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
        assert!(config.reminder.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_reminder_defaults(_ctx: &mut ConfigTestContext) {
        let reminder = ReminderConfig::default();
        assert_eq!(reminder.scan_interval, 30);
        assert_eq!(reminder.window, 5);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_read_roundtrip(_ctx: &mut ConfigTestContext) {
        let config = Config {
            reminder: Some(ReminderConfig {
                scan_interval: 10,
                window: 15,
            }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_resets_to_defaults(_ctx: &mut ConfigTestContext) {
        let config = Config {
            reminder: Some(ReminderConfig {
                scan_interval: 10,
                window: 15,
            }),
        };
        config.save().unwrap();

        Config::delete().unwrap();
        assert_eq!(Config::read().unwrap(), Config::default());
    }
}
