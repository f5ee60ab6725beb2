use actix_web::cookie::Key;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_APP_NAME: &str = "Entebbe Airport Feedback";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 8;

/// Minimum SESSION_KEY length accepted by the cookie signer.
const SESSION_KEY_MIN_LEN: usize = 64;

/// Per-site values the page templates need.
#[derive(Debug, Clone)]
pub struct SiteSettings {
    pub app_name: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self { app_name: DEFAULT_APP_NAME.to_string() }
    }
}

/// Runtime configuration, read from the environment (and `.env` via dotenvy).
#[derive(Clone)]
pub struct AppConfig {
    /// Postgres URL; without one feedback is kept in memory only.
    pub database_url: Option<String>,
    pub bind_addr: String,
    pub db_max_connections: u32,
    pub session_key: Key,
    pub seed_demo: bool,
    pub site: SiteSettings,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let db_max_connections = match non_empty("DB_MAX_CONNECTIONS") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!(
                    "DB_MAX_CONNECTIONS '{raw}' is not a number, using {DEFAULT_DB_MAX_CONNECTIONS}"
                );
                DEFAULT_DB_MAX_CONNECTIONS
            }),
            None => DEFAULT_DB_MAX_CONNECTIONS,
        };

        let seed_demo = non_empty("SEED_DEMO")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            database_url: non_empty("DATABASE_URL"),
            bind_addr: non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            db_max_connections,
            session_key: session_key(non_empty("SESSION_KEY")),
            seed_demo,
            site: SiteSettings {
                app_name: non_empty("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            },
        }
    }
}

/// Load SESSION_KEY for persistent sessions across restarts.
fn session_key(raw: Option<String>) -> Key {
    match raw {
        Some(val) if val.len() >= SESSION_KEY_MIN_LEN => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Some(val) => {
            log::warn!(
                "SESSION_KEY too short ({} bytes, need {SESSION_KEY_MIN_LEN}+), generating random key",
                val.len()
            );
            Key::generate()
        }
        None => {
            log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
            Key::generate()
        }
    }
}
