// Game catalog entity

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validation::{FromPayload, PayloadFields, ValidationError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,
    pub title: String,
    pub genre: String,
    pub platform: String,
}

/// Body of `POST /games/` and `PUT /games/{id}`; every field is overwritten on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDraft {
    pub title: String,
    pub genre: String,
    pub platform: String,
}

impl Game {
    pub fn from_draft(id: i64, draft: GameDraft) -> Self {
        Self {
            id,
            title: draft.title,
            genre: draft.genre,
            platform: draft.platform,
        }
    }
}

impl FromPayload for GameDraft {
    fn from_payload(value: &Value) -> Result<Self, ValidationError> {
        let mut fields = PayloadFields::new(value)?;
        let title = fields.required_str("title");
        let genre = fields.required_str("genre");
        let platform = fields.required_str("platform");
        fields.finish()?;

        match (title, genre, platform) {
            (Some(title), Some(genre), Some(platform)) => Ok(Self {
                title,
                genre,
                platform,
            }),
            _ => Err(ValidationError::single("body", "incomplete payload")),
        }
    }
}
