#![allow(dead_code)]

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::{Mutex, Semaphore};

use quip::jokes::fetch::{FetchError, JokeSource};
use quip::jokes::model::Joke;

pub const BAD_UTF8: [u8; 2] = [0xC3, 0x28];

pub fn joke(id: u64, text: &str) -> Joke
{
    Joke { id, text: text.to_string() }
}

/// A [JokeSource] serving canned replies in order, each fetch
///   is held at a gate until [ScriptedSource::allow_one] is called
pub struct ScriptedSource
{
    replies: Mutex<VecDeque<Result<Joke, FetchError>>>,
    gate: Semaphore
}

impl ScriptedSource
{
    pub fn new(replies: Vec<Result<Joke, FetchError>>) -> ScriptedSource
    {
        ScriptedSource
        {
            replies: Mutex::new(VecDeque::from(replies)),
            gate: Semaphore::new(0)
        }
    }

    /// Release one pending (or future) fetch
    pub fn allow_one(&self)
    {
        self.gate.add_permits(1);
    }
}

#[async_trait]
impl JokeSource for ScriptedSource
{
    async fn fetch(&self) -> Result<Joke, FetchError>
    {
        self.gate.acquire().await.unwrap().forget();
        match self.replies.lock().await.pop_front()
        {
            Some(reply) => reply,
            None => Err(FetchError { why: "script exhausted".to_string() })
        }
    }
}
