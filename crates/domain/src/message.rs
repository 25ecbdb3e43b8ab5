use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// An inbound message as handed over by the external mail provider.
/// The id is the provider's own identifier and is never generated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub subject: String,
    pub sender: String,
    pub recipients: Vec<String>,
    pub body: String,
    pub timestamp: DateTime<Utc>,
    pub category: Option<MessageCategory>,
    pub is_read: bool,
}

/// The categories the language-inference service classifies messages into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageCategory {
    Meetings,
    Important,
    FollowUp,
    Spam,
}

#[derive(Error, Debug)]
pub enum UnknownCategoryError {
    #[error("Unknown message category label: {0}")]
    UnknownLabel(String),
}

impl FromStr for MessageCategory {
    type Err = UnknownCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Meetings" => Ok(Self::Meetings),
            "Important" => Ok(Self::Important),
            "Follow-Up" => Ok(Self::FollowUp),
            "Spam" => Ok(Self::Spam),
            other => Err(UnknownCategoryError::UnknownLabel(other.to_string())),
        }
    }
}

impl Display for MessageCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Meetings => "Meetings",
            Self::Important => "Important",
            Self::FollowUp => "Follow-Up",
            Self::Spam => "Spam",
        };
        write!(f, "{}", label)
    }
}
