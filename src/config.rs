use serde::Deserialize;

use crate::services::recommendations::MAX_RECOMMENDATIONS;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the movies CSV (one row per film)
    #[serde(default = "default_movies_path")]
    pub movies_path: String,

    /// Path to the cast CSV (movie id, actor name)
    #[serde(default = "default_cast_path")]
    pub cast_path: String,

    /// Path to the crew CSV (movie id, crew name, job)
    #[serde(default = "default_crew_path")]
    pub crew_path: String,

    /// Minimum number of votes before a title's rating is reported
    #[serde(default = "default_min_vote_count")]
    pub min_vote_count: u64,

    /// Number of titles returned by the recommender
    #[serde(default = "default_recommendation_limit")]
    pub recommendation_limit: usize,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_movies_path() -> String {
    "data/movies_df_fastApi.csv".to_string()
}

fn default_cast_path() -> String {
    "data/cast_df.csv".to_string()
}

fn default_crew_path() -> String {
    "data/crew_df.csv".to_string()
}

fn default_min_vote_count() -> u64 {
    2000
}

fn default_recommendation_limit() -> usize {
    5
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of key/value pairs
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if !(1..=MAX_RECOMMENDATIONS).contains(&self.recommendation_limit) {
            anyhow::bail!(
                "RECOMMENDATION_LIMIT must be between 1 and {}, got {}",
                MAX_RECOMMENDATIONS,
                self.recommendation_limit
            );
        }
        Ok(())
    }

    /// Socket address string the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
