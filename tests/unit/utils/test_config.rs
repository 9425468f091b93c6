use std::env;
use tdx_client::utils::config::{get_env_non_blank, get_env_or_default, get_env_or_none};

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("TDX_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("TDX_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("TDX_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("TDX_MISSING_VAR");
        let result: String = get_env_or_default("TDX_MISSING_VAR", "default".to_string());
        assert_eq!(result, "default");
    }
}

#[test]
fn test_get_env_or_default_with_padded_integer() {
    unsafe {
        env::set_var("TDX_TEST_VAR_INT", " 42 ");
        let result: u64 = get_env_or_default("TDX_TEST_VAR_INT", 0);
        assert_eq!(result, 42);
        env::remove_var("TDX_TEST_VAR_INT");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("TDX_TEST_VAR_INVALID", "not_a_number");
        let result: u64 = get_env_or_default("TDX_TEST_VAR_INVALID", 120);
        assert_eq!(result, 120);
        env::remove_var("TDX_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_none() {
    unsafe {
        env::set_var("TDX_TEST_VAR_OPTION", "123");
        env::set_var("TDX_TEST_VAR_OPTION_BAD", "abc");
        env::remove_var("TDX_TEST_VAR_OPTION_MISSING");

        assert_eq!(get_env_or_none::<u32>("TDX_TEST_VAR_OPTION"), Some(123));
        assert_eq!(get_env_or_none::<u32>("TDX_TEST_VAR_OPTION_BAD"), None);
        assert_eq!(get_env_or_none::<u32>("TDX_TEST_VAR_OPTION_MISSING"), None);

        env::remove_var("TDX_TEST_VAR_OPTION");
        env::remove_var("TDX_TEST_VAR_OPTION_BAD");
    }
}

#[test]
fn test_get_env_non_blank() {
    unsafe {
        env::set_var("TDX_TEST_VAR_BLANK", "   ");
        env::set_var("TDX_TEST_VAR_FILLED", " ops@example.edu ");

        assert_eq!(get_env_non_blank("TDX_TEST_VAR_BLANK"), None);
        assert_eq!(
            get_env_non_blank("TDX_TEST_VAR_FILLED"),
            Some("ops@example.edu".to_string())
        );
        assert_eq!(get_env_non_blank("TDX_TEST_VAR_NEVER_SET"), None);

        env::remove_var("TDX_TEST_VAR_BLANK");
        env::remove_var("TDX_TEST_VAR_FILLED");
    }
}
