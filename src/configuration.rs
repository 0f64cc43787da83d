use config::Config;
use reqwest::Url;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use serde_with::{DurationMilliSeconds, serde_as};
use std::time::Duration;
use tokio::net::TcpListener;

use crate::domain::Endpoint;

#[derive(Deserialize, Debug, Clone)]
pub struct Settings {
    #[serde(rename = "application")]
    pub application_cfg: ApplicationSettings,
    #[serde(rename = "api_client")]
    pub api_client_cfg: ApiClientSettings,
}

impl Settings {
    pub fn new() -> Result<Self, config::ConfigError> {
        let base_path = std::env::current_dir().map_err(|e| {
            config::ConfigError::Message(format!("Failed to determine the current directory: {e}"))
        })?;
        let configuration_directory = base_path.join("configuration");

        let environment: Environment = std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .try_into()
            .map_err(config::ConfigError::Message)?;

        let environment_filename = format!("{}.yml", environment.as_str());

        Config::builder()
            .add_source(config::File::from(configuration_directory.join("base.yml")))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .add_source(config::File::from(
                configuration_directory.join(environment_filename),
            ))
            .build()?
            .try_deserialize()
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

impl ApplicationSettings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
    pub async fn listener(&self) -> Result<TcpListener, std::io::Error> {
        TcpListener::bind(self.address()).await
    }
}

/// Settings for the outbound music API lookup.
///
/// `timeout_ms` is optional: when absent, requests rely on the HTTP stack's
/// own behaviour and never time out on our side.
#[serde_as]
#[derive(Deserialize, Debug, Clone)]
pub struct ApiClientSettings {
    #[serde(deserialize_with = "url_format::deserialize")]
    pub base_url: Url,
    #[serde_as(as = "Option<DurationMilliSeconds<u64>>")]
    pub timeout_ms: Option<Duration>,
}

impl ApiClientSettings {
    pub fn endpoint(&self) -> Endpoint {
        Endpoint::from(&self.base_url)
    }
}

#[derive(Debug)]
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

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            other => Err(format!(
                "{} is not a supported environment. Use 'local' or 'production'.",
                other
            )),
        }
    }
}

mod url_format {
    use reqwest::Url;
    use serde::{Deserialize, Deserializer, de::Error};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Url, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Url::parse(&s).map_err(D::Error::custom)
    }
}
