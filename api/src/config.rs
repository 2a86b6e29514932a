use std::env;
use std::str::FromStr;
use std::time::Duration;

/// What the dashboard summary does when one of its parallel fetches fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryFailurePolicy {
    /// The whole summary fails
    #[default]
    Fail,
    /// Each failed section becomes empty/zero and the failure is logged
    Degrade,
}

impl FromStr for SummaryFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail" => Ok(Self::Fail),
            "degrade" => Ok(Self::Degrade),
            other => Err(format!("unknown summary failure policy: {other}")),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
    /// Timeout applied to every parallel dashboard fetch
    pub summary_timeout: Duration,
    pub summary_failure_policy: SummaryFailurePolicy,
    /// Length of the top participant and top mentor rankings
    pub top_n: usize,
    pub rate_limit_per_second: u64,
    pub rate_limit_burst: u32,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: parse_or("PORT", 8080),
            db_max_connections: parse_or("DB_MAX_CONNECTIONS", 10),
            db_acquire_timeout: Duration::from_secs(parse_or("DB_ACQUIRE_TIMEOUT_SECS", 5)),
            summary_timeout: Duration::from_millis(parse_or("SUMMARY_BRANCH_TIMEOUT_MS", 10_000)),
            summary_failure_policy: parse_or("SUMMARY_FAILURE_POLICY", SummaryFailurePolicy::Fail),
            top_n: parse_or("TOP_N_LIMIT", 10),
            rate_limit_per_second: parse_or("RATE_LIMIT_PER_SECOND", 5),
            rate_limit_burst: parse_or("RATE_LIMIT_BURST", 20),
        }
    }
}

fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %raw, "Ignoring unparseable setting, using default");
            default
        }),
        Err(_) => default,
    }
}
