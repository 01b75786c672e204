use std::{env, fmt::Display, str::FromStr, time::Duration};

use chrono_tz::Tz;
use log::{info, warn, LevelFilter};

pub const MENU_URL: &str = "http://www.aramarkcafe.com/layouts/canary_2015/locationhome.aspx?locationid=4386&pageid=20&stationID=-1";

/// The only office the command knows a cafeteria for (Santa Clara).
pub const OFFICE: &str = "sc";

pub const TIME_ZONE: Tz = chrono_tz::US::Pacific;

/// Process-wide settings, read once at startup and never mutated afterwards.
#[derive(Clone)]
pub struct Config {
    pub signing_secret: String,
    pub debug: bool,
    pub host: String,
    pub port: u16,
    pub menu_url: String,
    pub fetch_timeout: Duration,
    pub office: &'static str,
    pub time_zone: Tz,
}

// the secret must never end up in logs
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("debug", &self.debug)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("menu_url", &self.menu_url)
            .field("fetch_timeout", &self.fetch_timeout)
            .field("office", &self.office)
            .field("time_zone", &self.time_zone)
            .finish_non_exhaustive()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            signing_secret: String::new(),
            debug: false,
            host: "127.0.0.1".to_string(),
            port: 3000,
            menu_url: MENU_URL.to_string(),
            fetch_timeout: Duration::from_secs(2),
            office: OFFICE,
            time_zone: TIME_ZONE,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let signing_secret = lookup("signing_secret")
            .or_else(|| lookup("SIGNING_SECRET"))
            .unwrap_or_default();
        let debug = debug_enabled(&lookup);
        let fetch_timeout = Duration::from_secs(parse_or(
            &lookup,
            "FETCH_TIMEOUT_SECS",
            defaults.fetch_timeout.as_secs(),
        ));

        Self {
            signing_secret,
            debug,
            host: lookup("HOST").unwrap_or(defaults.host),
            port: parse_or(&lookup, "PORT", defaults.port),
            menu_url: lookup("MENU_URL").unwrap_or(defaults.menu_url),
            fetch_timeout,
            ..defaults
        }
    }

    pub const fn log_level(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

/// `logging_level=debug` turns on debug output, anything else means info.
fn debug_enabled(lookup: &impl Fn(&str) -> Option<String>) -> bool {
    lookup("logging_level").is_some_and(|level| level.trim().eq_ignore_ascii_case("debug"))
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = lookup(key) else {
        info!("{key} not set, using default: {default}");
        return default;
    };
    raw.trim().parse().unwrap_or_else(|e| {
        warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
        default
    })
}
