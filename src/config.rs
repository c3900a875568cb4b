//! Runtime configuration, read from the environment (and `.env` via dotenvy)

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use solana_commitment_config::CommitmentConfig;

/// Holdings at or below this balance are not displayed
pub const DEFAULT_DISPLAY_THRESHOLD: f64 = 100_000.0;
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(15);
pub const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";
pub const DEFAULT_API_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct InspectorConfig {
    pub rpc_url: String,
    pub commitment: CommitmentConfig,
    pub display_threshold: f64,
    pub query_timeout: Duration,
    /// Also query accounts owned by the Token-2022 program
    pub include_token_2022: bool,
    pub api_port: u16,
    pub phantom_pubkey: Option<String>,
    pub solflare_pubkey: Option<String>,
    pub keypair_path: PathBuf,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            commitment: CommitmentConfig::confirmed(),
            display_threshold: DEFAULT_DISPLAY_THRESHOLD,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
            include_token_2022: true,
            api_port: DEFAULT_API_PORT,
            phantom_pubkey: None,
            solflare_pubkey: None,
            keypair_path: default_keypair_path(),
        }
    }
}

impl InspectorConfig {
    /// Load configuration from process environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("SOLANA_RPC_URL") {
            config.rpc_url = url;
        }

        if let Some(raw) = lookup("DISPLAY_THRESHOLD") {
            let threshold: f64 = raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid DISPLAY_THRESHOLD {:?}", raw))?;
            if !threshold.is_finite() || threshold < 0.0 {
                anyhow::bail!("DISPLAY_THRESHOLD must be a non-negative number, got {}", raw);
            }
            config.display_threshold = threshold;
        }

        if let Some(raw) = lookup("QUERY_TIMEOUT_MS") {
            let ms: u64 = raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid QUERY_TIMEOUT_MS {:?}", raw))?;
            if ms == 0 {
                anyhow::bail!("QUERY_TIMEOUT_MS must be greater than zero");
            }
            config.query_timeout = Duration::from_millis(ms);
        }

        if let Some(raw) = lookup("INCLUDE_TOKEN_2022") {
            config.include_token_2022 = parse_bool(&raw)
                .with_context(|| format!("Invalid INCLUDE_TOKEN_2022 {:?}", raw))?;
        }

        if let Some(raw) = lookup("API_PORT") {
            config.api_port = raw
                .trim()
                .parse()
                .with_context(|| format!("Invalid API_PORT {:?}", raw))?;
        }

        config.phantom_pubkey = lookup("PHANTOM_PUBKEY").filter(|s| !s.trim().is_empty());
        config.solflare_pubkey = lookup("SOLFLARE_PUBKEY").filter(|s| !s.trim().is_empty());

        if let Some(path) = lookup("KEYPAIR_PATH") {
            config.keypair_path = PathBuf::from(path);
        }

        Ok(config)
    }
}

fn parse_bool(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow::anyhow!("expected a boolean, got {}", other)),
    }
}

fn default_keypair_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".config/solana/id.json")
}
