use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub master_username: String,
    pub master_password: String,
    pub jwt_secret: String,
    pub port: u16,
    pub rust_log: String,
    /// Fixed delay between store connection attempts.
    pub store_retry_secs: u64,
    /// Wipe and re-insert the sample jobs once the store is reachable.
    pub seed_jobs: bool,
    /// Browser front end; no static routes when unset.
    pub static_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            master_username: require_env("MASTER_USERNAME")?,
            master_password: require_env("MASTER_PASSWORD")?,
            jwt_secret: require_env("JWT_SECRET")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            store_retry_secs: std::env::var("STORE_RETRY_SECS")
                .unwrap_or_else(|_| "5".to_string())
                .parse::<u64>()
                .context("STORE_RETRY_SECS must be a whole number of seconds")?,
            seed_jobs: parse_flag(std::env::var("SEED_JOBS").ok().as_deref())
                .context("SEED_JOBS must be true or false")?,
            static_dir: std::env::var("STATIC_DIR").ok().map(PathBuf::from),
        })
    }
}

/// Set but blank counts as unset.
fn require_env(key: &str) -> Result<String> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_flag(value: Option<&str>) -> Result<bool> {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None | Some("") | Some("0") | Some("false") | Some("no") => Ok(false),
        Some("1") | Some("true") | Some("yes") => Ok(true),
        Some(other) => anyhow::bail!("unrecognised flag value '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_defaults_to_false() {
        assert!(!parse_flag(None).unwrap());
        assert!(!parse_flag(Some("")).unwrap());
    }

    #[test]
    fn test_flag_accepts_common_spellings() {
        assert!(parse_flag(Some("TRUE")).unwrap());
        assert!(parse_flag(Some("1")).unwrap());
        assert!(!parse_flag(Some("no")).unwrap());
    }

    #[test]
    fn test_blank_required_value_is_refused() {
        std::env::set_var("JOBBOARD_TEST_BLANK_SECRET", "   ");
        assert!(require_env("JOBBOARD_TEST_BLANK_SECRET").is_err());

        std::env::set_var("JOBBOARD_TEST_SET_SECRET", "s3cret");
        assert_eq!(require_env("JOBBOARD_TEST_SET_SECRET").unwrap(), "s3cret");

        assert!(require_env("JOBBOARD_TEST_UNSET_SECRET").is_err());
    }

    #[test]
    fn test_flag_rejects_garbage() {
        assert!(parse_flag(Some("maybe")).is_err());
    }
}
