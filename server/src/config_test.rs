use super::*;

// =============================================================================
// env_bool: uses unique env var names to avoid races with parallel tests.
// =============================================================================

#[test]
fn env_bool_true_variants() {
    for (i, val) in ["1", "true", "yes", "on"].iter().enumerate() {
        let key = format!("__TEST_EB_TRUE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_false_variants() {
    for (i, val) in ["0", "false", "no", "off"].iter().enumerate() {
        let key = format!("__TEST_EB_FALSE_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(false), "expected false for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_case_insensitive_and_trimmed() {
    for (i, val) in ["TRUE", " Yes ", "On"].iter().enumerate() {
        let key = format!("__TEST_EB_CI_{i}__");
        unsafe { std::env::set_var(&key, val) };
        assert_eq!(env_bool(&key), Some(true), "expected true for {val:?}");
        unsafe { std::env::remove_var(&key) };
    }
}

#[test]
fn env_bool_invalid_returns_none() {
    let key = "__TEST_EB_INVALID_9823__";
    unsafe { std::env::set_var(key, "maybe") };
    assert_eq!(env_bool(key), None);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_bool_unset_returns_none() {
    assert_eq!(env_bool("__TEST_EB_SURELY_UNSET_XYZ_42__"), None);
}

// =============================================================================
// env_parse
// =============================================================================

#[test]
fn env_parse_reads_value() {
    let key = "__TEST_EP_PORT_311__";
    unsafe { std::env::set_var(key, " 8080 ") };
    assert_eq!(env_parse::<u16>(key, DEFAULT_PORT), 8080);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_parse_falls_back_on_garbage() {
    let key = "__TEST_EP_GARBAGE_312__";
    unsafe { std::env::set_var(key, "eighty") };
    assert_eq!(env_parse::<u16>(key, DEFAULT_PORT), DEFAULT_PORT);
    unsafe { std::env::remove_var(key) };
}

#[test]
fn env_parse_unset_uses_default() {
    assert_eq!(env_parse::<i64>("__TEST_EP_UNSET_313__", 7), 7);
}

// =============================================================================
// keys and cookie defaults
// =============================================================================

#[test]
fn key_from_secret_is_deterministic() {
    let a = key_from_secret("short secret");
    let b = key_from_secret("short secret");
    assert_eq!(a.master(), b.master());
}

#[test]
fn key_from_secret_differs_per_secret() {
    let a = key_from_secret("one");
    let b = key_from_secret("two");
    assert_ne!(a.master(), b.master());
}

#[test]
fn configured_secret_produces_stable_session_key() {
    let config = ServerConfig {
        port: DEFAULT_PORT,
        session_secret: Some("pizza".into()),
        cookie: CookieSettings::default(),
    };
    assert_eq!(config.session_key().master(), key_from_secret("pizza").master());
}

#[test]
fn cookie_settings_default_to_one_day_insecure() {
    let settings = CookieSettings::default();
    assert!(!settings.secure);
    assert_eq!(settings.max_age, time::Duration::hours(24));
}

// =============================================================================
// SESSION_MAX_AGE_HOURS
// =============================================================================

#[test]
fn session_max_age_unset_uses_default() {
    assert_eq!(session_max_age_hours(None), DEFAULT_SESSION_MAX_AGE_HOURS);
}

#[test]
fn session_max_age_accepts_value_in_range() {
    assert_eq!(session_max_age_hours(Some(" 48 ")), 48);
    assert_eq!(session_max_age_hours(Some("1")), 1);
}

#[test]
fn session_max_age_zero_and_negative_fall_back() {
    assert_eq!(session_max_age_hours(Some("0")), DEFAULT_SESSION_MAX_AGE_HOURS);
    assert_eq!(session_max_age_hours(Some("-5")), DEFAULT_SESSION_MAX_AGE_HOURS);
    assert_eq!(session_max_age_hours(Some("soon")), DEFAULT_SESSION_MAX_AGE_HOURS);
}

#[test]
fn session_max_age_huge_is_clamped() {
    assert_eq!(session_max_age_hours(Some("9223372036854775807")), MAX_SESSION_MAX_AGE_HOURS);
    assert_eq!(session_max_age_hours(Some("99999999999999999999999")), DEFAULT_SESSION_MAX_AGE_HOURS);
    assert_eq!(session_max_age_hours(Some("8761")), MAX_SESSION_MAX_AGE_HOURS);
}

#[test]
fn from_env_survives_out_of_range_max_age() {
    let cases = [
        ("9223372036854775807", i64::from(MAX_SESSION_MAX_AGE_HOURS)),
        ("0", i64::from(DEFAULT_SESSION_MAX_AGE_HOURS)),
        ("-24", i64::from(DEFAULT_SESSION_MAX_AGE_HOURS)),
    ];
    for (raw, hours) in cases {
        unsafe { std::env::set_var("SESSION_MAX_AGE_HOURS", raw) };
        let config = ServerConfig::from_env();
        assert_eq!(config.cookie.max_age, time::Duration::hours(hours), "{raw}");
        assert!(config.cookie.max_age.is_positive());
    }
    unsafe { std::env::remove_var("SESSION_MAX_AGE_HOURS") };
}
