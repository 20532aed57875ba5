use dotenvy::dotenv;
use std::env;

/// How a caller whose own member row is not valid gets ranked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RankPolicy {
    /// Rank is only reported for a valid member row of the caller.
    #[default]
    Strict,
    /// Rank starts at 1 and is only overwritten by a valid row of the caller,
    /// so invalid callers are reported as first.
    Legacy,
}

impl RankPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" => Some(Self::Strict),
            "legacy" => Some(Self::Legacy),
            _ => None,
        }
    }
}

pub const MAX_LEAGUE_PROBE_CONCURRENCY: usize = 32;

pub struct Config {
    pub http_port: u16,
    pub auth_token_secret: String,
    pub rank_policy: RankPolicy,
    pub league_probe_concurrency: usize,
}

impl Config {
    pub fn new(auth_token_secret: impl Into<String>) -> Self {
        Self {
            http_port: 8080,
            auth_token_secret: auth_token_secret.into(),
            rank_policy: RankPolicy::Strict,
            league_probe_concurrency: 1,
        }
    }

    pub fn from_env() -> Self {
        dotenv().ok();

        let http_port = match env::var("SEEDLING_HTTP_PORT") {
            Ok(val) => val.parse::<u16>().unwrap_or(8080),
            Err(_) => 8080,
        };

        let auth_token_secret = match env::var("SEEDLING_AUTH_TOKEN_SECRET") {
            Ok(val) => val,
            Err(_) => panic!("You need to set env SEEDLING_AUTH_TOKEN_SECRET"),
        };

        let rank_policy = match env::var("SEEDLING_RANK_POLICY") {
            Ok(val) => RankPolicy::parse(&val).unwrap_or_else(|| {
                tracing::warn!("Unknown SEEDLING_RANK_POLICY '{val}', using strict");
                RankPolicy::Strict
            }),
            Err(_) => RankPolicy::Strict,
        };

        let league_probe_concurrency = match env::var("SEEDLING_LEAGUE_PROBE_CONCURRENCY") {
            Ok(val) => val
                .parse::<usize>()
                .unwrap_or(1)
                .clamp(1, MAX_LEAGUE_PROBE_CONCURRENCY),
            Err(_) => 1,
        };

        Self {
            http_port,
            auth_token_secret,
            rank_policy,
            league_probe_concurrency,
        }
    }

    pub fn with_rank_policy(mut self, rank_policy: RankPolicy) -> Self {
        self.rank_policy = rank_policy;
        self
    }

    pub fn with_league_probe_concurrency(mut self, concurrency: usize) -> Self {
        self.league_probe_concurrency = concurrency.clamp(1, MAX_LEAGUE_PROBE_CONCURRENCY);
        self
    }
}
