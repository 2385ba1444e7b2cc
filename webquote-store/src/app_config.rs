use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub ledger: LedgerConfig,
    pub business_rules: BusinessRules,
    pub document: DocumentConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LedgerBackend {
    File,
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LedgerConfig {
    pub backend: LedgerBackend,
    pub directory: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    pub gst_rate_percent: u64,
    pub quote_validity_days: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DocumentConfig {
    pub page_height_mm: f64,
}

fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, config::ConfigError> {
    config::Config::builder()
        .set_default("server.port", 8080)?
        .set_default("ledger.backend", "file")?
        .set_default("ledger.directory", "data")?
        .set_default("business_rules.gst_rate_percent", 18)?
        .set_default("business_rules.quote_validity_days", 30)?
        .set_default("document.page_height_mm", 287.0)
}

// Shortest page accepted from configuration.
const MIN_PAGE_HEIGHT_MM: f64 = 10.0;

fn validated(config: Config) -> Result<Config, config::ConfigError> {
    let height = config.document.page_height_mm;
    if !height.is_finite() || height < MIN_PAGE_HEIGHT_MM {
        return Err(config::ConfigError::Message(format!(
            "document.page_height_mm must be a finite height of at least {} mm, got {}",
            MIN_PAGE_HEIGHT_MM, height
        )));
    }
    Ok(config)
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = builder()?
            .add_source(config::File::with_name("config/default").required(false))
            // Per-environment overrides, e.g. config/production.toml
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // WEBQUOTE__LEDGER__BACKEND=memory sets ledger.backend
            .add_source(config::Environment::with_prefix("WEBQUOTE").separator("__"))
            .build()?;

        validated(s.try_deserialize()?)
    }

    /// Built-in defaults overlaid with a TOML document.
    pub fn from_toml(toml: &str) -> Result<Self, config::ConfigError> {
        let config = builder()?
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        validated(config)
    }
}
