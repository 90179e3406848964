use serde::Deserialize;
use std::path::PathBuf;

/// Which sentiment-ranking implementation serves the review endpoints
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RankingStrategy {
    /// Slice the rankings precomputed by the offline pipeline
    Precomputed,
    /// Join reviews to games and aggregate per request
    Live,
}

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Directory holding the snapshot table files
    #[serde(default = "default_snapshot_dir")]
    pub snapshot_dir: PathBuf,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Ranking strategy for the top/bottom review endpoints
    #[serde(default = "default_ranking_strategy")]
    pub ranking_strategy: RankingStrategy,
}

fn default_snapshot_dir() -> PathBuf {
    PathBuf::from("./snapshot")
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_ranking_strategy() -> RankingStrategy {
    RankingStrategy::Precomputed
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
