use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Value shipped in sample `.env` files. Treated the same as an absent key.
pub const PLACEHOLDER_API_KEY: &str = "PASTE_YOUR_GEMINI_API_KEY_HERE";

const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_MODEL: &str = "gemini-2.0-flash-lite";

/// Application configuration loaded from environment variables.
/// Every engine receives the pieces it needs from here at construction time.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_api_url: String,
    pub gemini_model: String,
    /// Upper bound for a single outbound attempt.
    pub llm_timeout: Duration,
    /// Fixed wait before the single rate-limit retry.
    pub llm_retry_backoff: Duration,
    pub rules: TunableRules,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let rules = match std::env::var("RULES_PATH") {
            Ok(path) => TunableRules::from_file(PathBuf::from(path))?,
            Err(_) => TunableRules::default(),
        };

        Ok(Config {
            gemini_api_key: usable_api_key(std::env::var("GEMINI_API_KEY").ok()),
            gemini_api_url: env_or("GEMINI_API_URL", DEFAULT_API_URL),
            gemini_model: env_or("GEMINI_MODEL", DEFAULT_MODEL),
            llm_timeout: Duration::from_secs(parse_env("LLM_TIMEOUT_SECS", 20)?),
            llm_retry_backoff: Duration::from_millis(parse_env("LLM_RETRY_BACKOFF_MS", 2000)?),
            rules,
            port: parse_env("PORT", 5000)?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    /// Configuration with every AI path disabled.
    #[cfg(test)]
    pub fn offline() -> Self {
        Config {
            gemini_api_key: None,
            gemini_api_url: DEFAULT_API_URL.to_string(),
            gemini_model: DEFAULT_MODEL.to_string(),
            llm_timeout: Duration::from_secs(20),
            llm_retry_backoff: Duration::from_millis(2000),
            rules: TunableRules::default(),
            port: 5000,
            rust_log: "info".to_string(),
        }
    }

    pub fn ai_enabled(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}

/// Heuristic tables that are expected to be tuned without a rebuild.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TunableRules {
    /// Career goals that get the "unrealistic career" redirect.
    pub fictional_keywords: Vec<String>,
    /// Languages counted by the resume skill-mismatch rule.
    pub skill_mismatch_languages: Vec<String>,
    /// How many of those languages must co-occur before the rule fires.
    pub skill_mismatch_threshold: usize,
}

impl Default for TunableRules {
    fn default() -> Self {
        Self {
            fictional_keywords: DEFAULT_FICTIONAL_KEYWORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            skill_mismatch_languages: ["python", "javascript", "java", "c++"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            skill_mismatch_threshold: 4,
        }
    }
}

impl TunableRules {
    pub fn from_file(path: PathBuf) -> Result<Self> {
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read rules file '{}'", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Rules file '{}' is not valid JSON", path.display()))
    }
}

const DEFAULT_FICTIONAL_KEYWORDS: &[&str] = &[
    // superheroes & comics
    "iron man", "ironman", "superman", "batman", "spiderman", "spider-man",
    "hulk", "thor", "captain america", "black widow", "wonder woman",
    "flash", "aquaman", "green lantern", "deadpool", "wolverine",
    // anime & cartoons
    "doraemon", "naruto", "goku", "luffy", "pikachu", "pokemon",
    "mickey mouse", "donald duck", "spongebob", "tom and jerry",
    "shinchan", "nobita", "dragon ball", "sailor moon", "hello kitty",
    // fantasy
    "wizard", "sorcerer", "vampire", "werewolf", "dragon", "unicorn",
    "fairy", "elf", "dwarf", "hobbit", "superhero", "super hero",
    // video games
    "mario", "sonic", "link", "zelda", "master chief", "kratos",
    // other
    "god", "jesus", "santa", "easter bunny", "tooth fairy",
    "king", "queen", "prince", "princess",
];

fn usable_api_key(raw: Option<String>) -> Option<String> {
    raw.map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty() && k != PLACEHOLDER_API_KEY)
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number")),
        Err(_) => Ok(default),
    }
}
