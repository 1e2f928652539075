use std::time::Duration;

use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 6.3; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/54.0.2840.71 Safari/537.36";

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub scraper: ScraperSettings,
}

#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ScraperSettings {
    pub user_agent: String,
    /// Direct matches at or below this count switch extraction to sub-link pages
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub fallback_threshold: usize,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub max_concurrent_fetches: usize,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub sub_link_timeout_secs: u64,
}

impl ScraperSettings {
    pub fn sub_link_timeout(&self) -> Duration {
        Duration::from_secs(self.sub_link_timeout_secs)
    }

    pub fn concurrency(&self) -> usize {
        self.max_concurrent_fetches.max(1)
    }
}

impl Default for ScraperSettings {
    fn default() -> Self {
        ScraperSettings {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            fallback_threshold: 10,
            max_concurrent_fetches: 16,
            sub_link_timeout_secs: 3,
        }
    }
}

pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("Failed to determine the current directory: {e}"))
    })?;
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // APP_SCRAPER__FALLBACK_THRESHOLD=5 sets `scraper.fallback_threshold`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
