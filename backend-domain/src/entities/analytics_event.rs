// Analytics event entity
// Browser-side tracking events; append-only, one table per kind

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::validation::{FromPayload, PayloadFields, ValidationError};
use crate::value_objects::EventKind;

/// `POST /track` body after validation. The timestamp is kept raw because an
/// unparsable value is recovered later rather than rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackEventRequest {
    pub kind: EventKind,
    pub path: String,
    pub timestamp: String,
    pub element: Option<String>,
    pub element_id: Option<String>,
    pub class_name: Option<String>,
    pub max_scroll: Option<i32>,
    pub user_agent: Option<String>,
    pub duration_ms: Option<u32>,
}

impl FromPayload for TrackEventRequest {
    fn from_payload(value: &Value) -> Result<Self, ValidationError> {
        let mut fields = PayloadFields::new(value)?;
        let kind = fields
            .required_str("type")
            .and_then(|raw| match raw.parse::<EventKind>() {
                Ok(kind) => Some(kind),
                Err(err) => {
                    fields.reject("type", err.to_string());
                    None
                }
            });
        let path = fields.required_str("path");
        let timestamp = fields.required_str("timestamp");
        let element = fields.optional_str("element");
        let element_id = fields.optional_str("element_id");
        let class_name = fields.optional_str("class_name");
        let max_scroll = fields.optional_i32("max_scroll");
        let user_agent = fields.optional_str("user_agent");
        let duration_ms = fields.optional_u32("duration_ms");
        fields.finish()?;

        match (kind, path, timestamp) {
            (Some(kind), Some(path), Some(timestamp)) => Ok(Self {
                kind,
                path,
                timestamp,
                element,
                element_id,
                class_name,
                max_scroll,
                user_agent,
                duration_ms,
            }),
            _ => Err(ValidationError::single("body", "incomplete payload")),
        }
    }
}

/// Kind-specific columns. Absent optional values collapse to "" / 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventDetails {
    PageView,
    Click {
        element: String,
        element_id: String,
        class_name: String,
    },
    ScrollDepth {
        max_scroll: i32,
    },
    UserAgent {
        user_agent: String,
    },
    SessionDuration {
        duration_ms: u32,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsEvent {
    pub id: Uuid,
    pub path: String,
    pub timestamp: DateTime<Utc>,
    pub details: EventDetails,
}

impl AnalyticsEvent {
    pub fn new(request: TrackEventRequest, timestamp: DateTime<Utc>) -> Self {
        let details = match request.kind {
            EventKind::PageView => EventDetails::PageView,
            EventKind::Click => EventDetails::Click {
                element: request.element.unwrap_or_default(),
                element_id: request.element_id.unwrap_or_default(),
                class_name: request.class_name.unwrap_or_default(),
            },
            EventKind::ScrollDepth => EventDetails::ScrollDepth {
                max_scroll: request.max_scroll.unwrap_or_default(),
            },
            EventKind::UserAgent => EventDetails::UserAgent {
                user_agent: request.user_agent.unwrap_or_default(),
            },
            EventKind::SessionDuration => EventDetails::SessionDuration {
                duration_ms: request.duration_ms.unwrap_or_default(),
            },
        };
        Self {
            id: Uuid::new_v4(),
            path: normalize_path(&request.path),
            timestamp,
            details,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self.details {
            EventDetails::PageView => EventKind::PageView,
            EventDetails::Click { .. } => EventKind::Click,
            EventDetails::ScrollDepth { .. } => EventKind::ScrollDepth,
            EventDetails::UserAgent { .. } => EventKind::UserAgent,
            EventDetails::SessionDuration { .. } => EventKind::SessionDuration,
        }
    }
}

/// "/shop/games/" and "shop/games" are the same page.
pub fn normalize_path(path: &str) -> String {
    path.trim_matches('/').to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackReceipt {
    pub status: &'static str,
    pub event_type: EventKind,
}

impl TrackReceipt {
    pub fn success(event_type: EventKind) -> Self {
        Self {
            status: "success",
            event_type,
        }
    }
}
