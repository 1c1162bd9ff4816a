use core::fmt;

use serde::{Serialize, Deserialize};

/// A joke as served by the api, an id and its text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Joke
{
    pub id: u64,
    pub text: String
}

impl fmt::Display for Joke {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
