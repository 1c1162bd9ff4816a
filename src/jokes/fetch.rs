use core::fmt;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::ApiConfig;
use crate::util::strip_control_characters;

use super::model::Joke;

/// Covers anything that can go wrong getting a joke: a network
///   error, a non-success status, or a body that does not parse
#[derive(Debug, Clone)]
pub struct FetchError
{
    pub why: String
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.why)
    }
}

/// Somewhere a [Joke] can be fetched from
#[async_trait]
pub trait JokeSource: Send + Sync
{
    async fn fetch(&self) -> Result<Joke, FetchError>;
}

/// Fetches a [Joke] by GET from [ApiConfig::endpoint]
///
/// No parameters, headers, or body are sent. The response body is
///   stripped of control characters before parsing
pub struct HttpJokeSource
{
    api: ApiConfig
}

impl HttpJokeSource
{
    pub fn new(api: ApiConfig) -> HttpJokeSource
    {
        HttpJokeSource { api }
    }

    pub fn get_endpoint(&self) -> String
    {
        self.api.endpoint.clone()
    }
}

#[async_trait]
impl JokeSource for HttpJokeSource
{
    async fn fetch(&self) -> Result<Joke, FetchError>
    {
        let client = reqwest::Client::new();

        let mut request = client.get(&self.api.endpoint);

        if self.api.timeout_seconds.is_some()
        {
            request = request.timeout(Duration::from_secs(self.api.timeout_seconds.unwrap()));
        }

        let response = match request.send().await
        {
            Ok(r) => r,
            Err(e) =>
            {
                return Err(FetchError { why: format!("request error, {}", e) })
            }
        };

        if !response.status().is_success()
        {
            return Err(FetchError { why: format!("status {}", response.status()) })
        }

        let body = match response.text().await
        {
            Ok(b) => b,
            Err(e) =>
            {
                return Err(FetchError { why: format!("body read error, {}", e) })
            }
        };

        match serde_json::from_str(&strip_control_characters(body))
        {
            Ok(joke) => Ok(joke),
            Err(e) =>
            {
                Err(FetchError { why: format!("body parse error, {}", e) })
            }
        }
    }
}
