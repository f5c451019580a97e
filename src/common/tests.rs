#[cfg(test)]
mod common_tests {
    use std::path::Path;
    use crate::common::common::{log_file_path, new_guid, parse_log_level};
    use crate::common::structs::custom_error::CustomError;

    #[test]
    fn test_parse_log_level_known_values() {
        assert_eq!(parse_log_level("off").unwrap(), log::LevelFilter::Off);
        assert_eq!(parse_log_level("trace").unwrap(), log::LevelFilter::Trace);
        assert_eq!(parse_log_level("debug").unwrap(), log::LevelFilter::Debug);
        assert_eq!(parse_log_level("INFO").unwrap(), log::LevelFilter::Info);
        assert_eq!(parse_log_level(" warn ").unwrap(), log::LevelFilter::Warn);
        assert_eq!(parse_log_level("error").unwrap(), log::LevelFilter::Error);
    }

    #[test]
    fn test_parse_log_level_blank_defaults_to_info() {
        assert_eq!(parse_log_level("").unwrap(), log::LevelFilter::Info);
    }

    #[test]
    fn test_parse_log_level_unknown() {
        let error = parse_log_level("verbose").unwrap_err();
        assert!(error.to_string().contains("verbose"));
    }

    #[test]
    fn test_log_file_path() {
        let path = log_file_path(Path::new("/var/log/gateway"), "secure-gateway");
        assert_eq!(path, Path::new("/var/log/gateway/secure-gateway.log"));
    }

    #[test]
    fn test_new_guid_is_unique() {
        let first = new_guid();
        let second = new_guid();
        assert_ne!(first, second);
        assert!(uuid::Uuid::parse_str(&first).is_ok());
    }

    #[test]
    fn test_custom_error_display() {
        let error = CustomError::new("something broke");
        assert_eq!(error.to_string(), "something broke");
        assert_eq!(error.message(), "something broke");
    }
}
