use baokim_client::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};
use std::env;

#[test]
fn test_get_env_or_default_with_existing_var() {
    unsafe {
        env::set_var("BAOKIM_TEST_VAR_STRING", "test_value");
        let result: String = get_env_or_default("BAOKIM_TEST_VAR_STRING", "default".to_string());
        assert_eq!(result, "test_value");
        env::remove_var("BAOKIM_TEST_VAR_STRING");
    }
}

#[test]
fn test_get_env_or_default_with_missing_var() {
    unsafe {
        env::remove_var("BAOKIM_TEST_MISSING_VAR");
    }
    let result: u64 = get_env_or_default("BAOKIM_TEST_MISSING_VAR", 60);
    assert_eq!(result, 60);
}

#[test]
fn test_get_env_or_default_with_blank_var() {
    unsafe {
        env::set_var("BAOKIM_TEST_VAR_BLANK", "   ");
        let result: String = get_env_or_default("BAOKIM_TEST_VAR_BLANK", "default".to_string());
        assert_eq!(result, "default");
        env::remove_var("BAOKIM_TEST_VAR_BLANK");
    }
}

#[test]
fn test_get_env_or_default_with_invalid_parse() {
    unsafe {
        env::set_var("BAOKIM_TEST_VAR_INVALID", "not_a_number");
        let result: u64 = get_env_or_default("BAOKIM_TEST_VAR_INVALID", 30);
        assert_eq!(result, 30);
        env::remove_var("BAOKIM_TEST_VAR_INVALID");
    }
}

#[test]
fn test_get_env_or_none() {
    unsafe {
        env::set_var("BAOKIM_TEST_VAR_SOME", "42");
        env::set_var("BAOKIM_TEST_VAR_BAD", "forty-two");
    }
    assert_eq!(get_env_or_none::<u32>("BAOKIM_TEST_VAR_SOME"), Some(42));
    assert_eq!(get_env_or_none::<u32>("BAOKIM_TEST_VAR_BAD"), None);
    assert_eq!(get_env_or_none::<u32>("BAOKIM_TEST_VAR_NEVER_SET"), None);
    unsafe {
        env::remove_var("BAOKIM_TEST_VAR_SOME");
        env::remove_var("BAOKIM_TEST_VAR_BAD");
    }
}

#[test]
fn test_get_env_flag_variants() {
    unsafe {
        env::set_var("BAOKIM_TEST_FLAG_ONE", "1");
        env::set_var("BAOKIM_TEST_FLAG_YES", "Yes");
        env::set_var("BAOKIM_TEST_FLAG_OFF", "off");
        env::set_var("BAOKIM_TEST_FLAG_JUNK", "maybe");
    }
    assert!(get_env_flag("BAOKIM_TEST_FLAG_ONE", false));
    assert!(get_env_flag("BAOKIM_TEST_FLAG_YES", false));
    assert!(!get_env_flag("BAOKIM_TEST_FLAG_OFF", true));
    assert!(get_env_flag("BAOKIM_TEST_FLAG_JUNK", true));
    assert!(!get_env_flag("BAOKIM_TEST_FLAG_UNSET", false));
    unsafe {
        env::remove_var("BAOKIM_TEST_FLAG_ONE");
        env::remove_var("BAOKIM_TEST_FLAG_YES");
        env::remove_var("BAOKIM_TEST_FLAG_OFF");
        env::remove_var("BAOKIM_TEST_FLAG_JUNK");
    }
}
