// Event kind value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    PageView,
    Click,
    ScrollDepth,
    UserAgent,
    SessionDuration,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported event type '{0}'")]
pub struct UnknownEventKind(pub String);

impl EventKind {
    pub const ALL: [EventKind; 5] = [
        EventKind::PageView,
        EventKind::Click,
        EventKind::ScrollDepth,
        EventKind::UserAgent,
        EventKind::SessionDuration,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::PageView => "page_view",
            EventKind::Click => "click",
            EventKind::ScrollDepth => "scroll_depth",
            EventKind::UserAgent => "user_agent",
            EventKind::SessionDuration => "session_duration",
        }
    }
}

impl FromStr for EventKind {
    type Err = UnknownEventKind;

    // Exact match only; "Click" or " click" are rejected like any other unknown kind.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownEventKind(s.to_string()))
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
