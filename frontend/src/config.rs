use log::Level;

pub const DEFAULT_LOGIN_URL: &str = "http://127.0.0.1:8000/auth/login";

/// Settings baked in at build time. Trunk forwards the environment to rustc,
/// so `CAREPORTAL_LOGIN_URL=... trunk build` points the page at another server.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub login_url: String,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            login_url: DEFAULT_LOGIN_URL.to_string(),
            log_level: Level::Info,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::resolve(
            option_env!("CAREPORTAL_LOGIN_URL"),
            option_env!("CAREPORTAL_LOG_LEVEL"),
        )
    }

    fn resolve(login_url: Option<&str>, log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            login_url: login_url
                .map(str::trim)
                .filter(|url| !url.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.login_url),
            log_level: log_level
                .and_then(|level| level.parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }
}
