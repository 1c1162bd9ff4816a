use std::sync::Arc;

use crate::broadcast::{Latest, Observer};

use super::fetch::JokeSource;
use super::model::Joke;

/// Holds the most recently fetched [Joke] and broadcasts each new one
///
/// The feed is primed on construction with one fire-and-forget
///   [JokeFeed::refresh]. Callers never learn whether a refresh
///   succeeded, a failed fetch leaves the held joke untouched and
///   delivers nothing, cf [crate::broadcast::Latest]
///
/// Must be constructed inside a tokio runtime
#[derive(Clone)]
pub struct JokeFeed
{
    latest: Latest<Joke>,
    source: Arc<dyn JokeSource>
}

impl JokeFeed
{
    pub fn new(source: Arc<dyn JokeSource>) -> JokeFeed
    {
        let feed = JokeFeed { latest: Latest::new(), source };
        feed.refresh();
        feed
    }

    /// Start one fetch without waiting on it
    ///
    /// On success the result is published to all observers, last
    ///   completion wins if refreshes overlap. On failure nothing
    ///   is published
    pub fn refresh(&self)
    {
        let latest = self.latest.clone();
        let source = self.source.clone();
        tokio::spawn
        (async move
            {
                match source.fetch().await
                {
                    Ok(joke) => latest.publish(joke).await,
                    Err(e) =>
                    {
                        crate::debug(format!("fetch failed, {}", e), Some("JOKES".to_string()));
                    }
                }
            }
        );
    }

    /// Attach an [Observer], it sees the held joke (or none)
    ///   immediately, then every later one
    pub async fn observe(&self) -> Observer<Joke>
    {
        self.latest.observe().await
    }

    /// The currently held joke, if any fetch has succeeded yet
    pub async fn latest(&self) -> Option<Joke>
    {
        self.latest.peek().await
    }
}
