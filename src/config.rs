use anyhow::{bail, Context, Result};

pub const DEFAULT_ARTICLES_API_URL: &str = "http://127.0.0.1:5000/api/articles";

#[derive(Debug, Clone)]
pub struct Config {
    // Upstream API
    pub articles_api_url: String,

    // Output
    pub feed_output: Option<String>,

    // Initial toggle state
    pub show_hindi: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            articles_api_url: std::env::var("ARTICLES_API_URL")
                .unwrap_or_else(|_| DEFAULT_ARTICLES_API_URL.to_string()),

            feed_output: std::env::var("FEED_OUTPUT")
                .ok()
                .filter(|path| !path.trim().is_empty()),

            show_hindi: match std::env::var("SHOW_HINDI") {
                Ok(value) => parse_flag(&value).context("SHOW_HINDI is not a valid boolean")?,
                Err(_) => false,
            },
        })
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("unrecognized flag value '{}'", other),
    }
}
