use std::time::Duration;

use actix_web::cookie::Key;

pub const DEFAULT_MEMBERS_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_APP_NAME: &str = "Member Admin";
pub const DEFAULT_VIEW_IDLE_SECS: u64 = 30 * 60;
/// How often idle views are swept.
pub const VIEW_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Runtime settings read from the environment (and `.env`, if present).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub members_url: String,
    pub bind_addr: String,
    pub fetch_timeout: Duration,
    pub view_idle: Duration,
    pub app_name: String,
    pub session_key: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            members_url: DEFAULT_MEMBERS_URL.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            view_idle: Duration::from_secs(DEFAULT_VIEW_IDLE_SECS),
            app_name: DEFAULT_APP_NAME.to_string(),
            session_key: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup. Unset or blank values keep the
    /// default; unparseable ones are logged and ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(url) = get("MEMBERS_URL") {
            config.members_url = url;
        }
        if let Some(addr) = get("BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Some(name) = get("APP_NAME") {
            config.app_name = name;
        }
        if let Some(raw) = get("FETCH_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.fetch_timeout = Duration::from_secs(secs),
                _ => log::warn!(
                    "Invalid FETCH_TIMEOUT_SECS '{raw}', using {DEFAULT_FETCH_TIMEOUT_SECS}s"
                ),
            }
        }
        if let Some(raw) = get("VIEW_IDLE_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.view_idle = Duration::from_secs(secs),
                _ => log::warn!(
                    "Invalid VIEW_IDLE_SECS '{raw}', using {DEFAULT_VIEW_IDLE_SECS}s"
                ),
            }
        }
        config.session_key = get("SESSION_KEY");
        config
    }

    /// Cookie signing key. Falls back to a random key (sessions lost on restart).
    pub fn cookie_key(&self) -> Key {
        match &self.session_key {
            Some(val) if val.len() >= 64 => {
                log::info!("Using SESSION_KEY from environment");
                Key::from(val.as_bytes())
            }
            Some(val) => {
                log::warn!("SESSION_KEY too short ({} bytes, need 64+), generating random key", val.len());
                Key::generate()
            }
            None => {
                log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
                Key::generate()
            }
        }
    }
}
