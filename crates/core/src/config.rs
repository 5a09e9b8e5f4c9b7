use std::env;

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

/// Non-empty env var, or `None`.
pub fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Active profile from `var`, upper-cased (empty = no profile).
pub fn active_profile(var: &str) -> String {
    env_opt(var).map(|s| s.to_uppercase()).unwrap_or_default()
}

/// Read a profiled env var: tries `{PROFILE}_{KEY}` first, falls back to `{KEY}`.
pub fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

pub fn profiled_env_or(profile: &str, key: &str, default: &str) -> String {
    profiled_env_opt(profile, key).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Env-based tests must run serially to avoid interfering with each other.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        for k in [
            "SCHEMATA_TEST_KEY",
            "DEV_SCHEMATA_TEST_KEY",
            "SCHEMATA_TEST_PROFILE",
        ] {
            env::remove_var(k);
        }
    }

    #[test]
    fn empty_values_are_treated_as_unset() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_env();

        env::set_var("SCHEMATA_TEST_KEY", "");
        assert_eq!(env_opt("SCHEMATA_TEST_KEY"), None);
        assert_eq!(profiled_env_or("", "SCHEMATA_TEST_KEY", "fallback"), "fallback");

        clear_env();
    }

    #[test]
    fn profile_prefix_wins() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_env();

        env::set_var("SCHEMATA_TEST_KEY", "base");
        env::set_var("DEV_SCHEMATA_TEST_KEY", "dev");
        assert_eq!(profiled_env_opt("DEV", "SCHEMATA_TEST_KEY").as_deref(), Some("dev"));
        assert_eq!(profiled_env_opt("PROD", "SCHEMATA_TEST_KEY").as_deref(), Some("base"));
        assert_eq!(profiled_env_opt("", "SCHEMATA_TEST_KEY").as_deref(), Some("base"));

        clear_env();
    }

    #[test]
    fn active_profile_is_upper_cased() {
        let _lock = ENV_LOCK.lock().unwrap();
        clear_env();

        assert_eq!(active_profile("SCHEMATA_TEST_PROFILE"), "");
        env::set_var("SCHEMATA_TEST_PROFILE", "dev");
        assert_eq!(active_profile("SCHEMATA_TEST_PROFILE"), "DEV");

        clear_env();
    }
}
