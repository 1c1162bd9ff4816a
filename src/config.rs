use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::util::read_file_utf8;

pub const CONFIG_PATH: &str = "config.json";

/// Configure the joke api
/// - ```endpoint```: url the joke is fetched from
/// - ```timeout_seconds```: optional per request timeout, unset means the
///    transport may wait indefinitely
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig
{
    pub endpoint: String,
    pub timeout_seconds: Option<u64>
}

impl ApiConfig
{
    pub fn default() -> ApiConfig
    {
        ApiConfig
        {
            endpoint: "http://localhost:8080/api/joke".to_string(),
            timeout_seconds: None
        }
    }
}

/// Configure quip
/// - ```api```: [ApiConfig]
/// - ```refresh_period_seconds```: periodically fetch a new joke, unset
///    means fetch once on launch only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config
{
    pub api: ApiConfig,
    pub refresh_period_seconds: Option<u64>
}

impl Config
{
    pub fn default() -> Config
    {
        Config
        {
            api: ApiConfig::default(),
            refresh_period_seconds: None
        }
    }

    pub fn load_or_default(path: &str) -> Config
    {
        match read_config(path)
        {
            Some(c) => c,
            None =>
            {
                Config::default()
            }
        }
    }
}

pub fn read_config(path: &str) -> Option<Config>
{
    if Path::new(&path).exists()
    {
        let data = match read_file_utf8(&path)
        {
            Some(d) => d,
            None =>
            {
                crate::debug(format!("Error reading configuration file {} no data", path), None);
                return None
            }
        };

        let config: Config = match serde_json::from_str(&data)
        {
            Ok(data) => {data},
            Err(why) =>
            {
                crate::debug(format!("Error reading configuration file {}\n{}", path, why), None);
                return None
            }
        };

        Some(config)
    }
    else
    {
        crate::debug(format!("Error configuration file {} does not exist", path), None);
        None
    }
}
