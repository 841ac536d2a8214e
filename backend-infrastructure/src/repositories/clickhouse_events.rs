use anyhow::Result;
use async_trait::async_trait;
use clickhouse::Row;
use serde::Serialize;
use time::OffsetDateTime;
use uuid::Uuid;

use backend_domain::ports::{AnalyticsEventRepository, StorageConnector};
use backend_domain::{AnalyticsEvent, EventDetails, EventKind};

use crate::storage::ClickhouseStore;
use crate::utils::to_offset_datetime;

pub fn table_for(kind: EventKind) -> &'static str {
    match kind {
        EventKind::PageView => "page_views",
        EventKind::Click => "clicks",
        EventKind::ScrollDepth => "scroll_depth",
        EventKind::UserAgent => "user_agents",
        EventKind::SessionDuration => "session_duration",
    }
}

fn kind_columns(kind: EventKind) -> &'static str {
    match kind {
        EventKind::PageView => "",
        EventKind::Click => {
            "    element String DEFAULT '',\n    element_id String DEFAULT '',\n    class_name String DEFAULT '',\n"
        }
        EventKind::ScrollDepth => "    max_scroll Int32 DEFAULT 0,\n",
        EventKind::UserAgent => "    user_agent String DEFAULT '',\n",
        EventKind::SessionDuration => "    duration_ms UInt32 DEFAULT 0,\n",
    }
}

pub fn create_table_sql(database: &str, kind: EventKind) -> String {
    format!(
        r#"
CREATE TABLE IF NOT EXISTS {}.{} (
    id UUID DEFAULT generateUUIDv4(),
    type String,
    path String,
{}    timestamp DateTime DEFAULT now()
) ENGINE = MergeTree
ORDER BY (timestamp)
"#,
        database,
        table_for(kind),
        kind_columns(kind)
    )
}

#[derive(Debug, Clone, Serialize, Row)]
struct PageViewRow {
    #[serde(with = "clickhouse::serde::uuid")]
    id: Uuid,
    #[serde(rename = "type")]
    event_type: String,
    path: String,
    #[serde(with = "clickhouse::serde::time::datetime")]
    timestamp: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Row)]
struct ClickRow {
    #[serde(with = "clickhouse::serde::uuid")]
    id: Uuid,
    #[serde(rename = "type")]
    event_type: String,
    path: String,
    element: String,
    element_id: String,
    class_name: String,
    #[serde(with = "clickhouse::serde::time::datetime")]
    timestamp: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Row)]
struct ScrollDepthRow {
    #[serde(with = "clickhouse::serde::uuid")]
    id: Uuid,
    #[serde(rename = "type")]
    event_type: String,
    path: String,
    max_scroll: i32,
    #[serde(with = "clickhouse::serde::time::datetime")]
    timestamp: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Row)]
struct UserAgentRow {
    #[serde(with = "clickhouse::serde::uuid")]
    id: Uuid,
    #[serde(rename = "type")]
    event_type: String,
    path: String,
    user_agent: String,
    #[serde(with = "clickhouse::serde::time::datetime")]
    timestamp: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Row)]
struct SessionDurationRow {
    #[serde(with = "clickhouse::serde::uuid")]
    id: Uuid,
    #[serde(rename = "type")]
    event_type: String,
    path: String,
    duration_ms: u32,
    #[serde(with = "clickhouse::serde::time::datetime")]
    timestamp: OffsetDateTime,
}

/// One row of whichever table the event kind lands in.
#[derive(Debug, Clone)]
enum EventRow {
    PageView(PageViewRow),
    Click(ClickRow),
    ScrollDepth(ScrollDepthRow),
    UserAgent(UserAgentRow),
    SessionDuration(SessionDurationRow),
}

impl EventRow {
    fn from_event(event: &AnalyticsEvent) -> Self {
        let id = event.id;
        let event_type = event.kind().as_str().to_string();
        let path = event.path.clone();
        let timestamp = to_offset_datetime(event.timestamp);
        match &event.details {
            EventDetails::PageView => EventRow::PageView(PageViewRow {
                id,
                event_type,
                path,
                timestamp,
            }),
            EventDetails::Click {
                element,
                element_id,
                class_name,
            } => EventRow::Click(ClickRow {
                id,
                event_type,
                path,
                element: element.clone(),
                element_id: element_id.clone(),
                class_name: class_name.clone(),
                timestamp,
            }),
            EventDetails::ScrollDepth { max_scroll } => EventRow::ScrollDepth(ScrollDepthRow {
                id,
                event_type,
                path,
                max_scroll: *max_scroll,
                timestamp,
            }),
            EventDetails::UserAgent { user_agent } => EventRow::UserAgent(UserAgentRow {
                id,
                event_type,
                path,
                user_agent: user_agent.clone(),
                timestamp,
            }),
            EventDetails::SessionDuration { duration_ms } => {
                EventRow::SessionDuration(SessionDurationRow {
                    id,
                    event_type,
                    path,
                    duration_ms: *duration_ms,
                    timestamp,
                })
            }
        }
    }

    fn kind(&self) -> EventKind {
        match self {
            EventRow::PageView(_) => EventKind::PageView,
            EventRow::Click(_) => EventKind::Click,
            EventRow::ScrollDepth(_) => EventKind::ScrollDepth,
            EventRow::UserAgent(_) => EventKind::UserAgent,
            EventRow::SessionDuration(_) => EventKind::SessionDuration,
        }
    }
}

#[derive(Clone)]
pub struct ClickhouseEventRepository {
    store: ClickhouseStore,
}

impl ClickhouseEventRepository {
    pub fn new(store: ClickhouseStore) -> Self {
        Self { store }
    }

    async fn write_row<T>(&self, kind: EventKind, row: &T) -> Result<()>
    where
        T: Row + Serialize + Send + Sync,
    {
        let mut insert = self.store.client().insert(&self.store.qualified(table_for(kind)))?;
        insert.write(row).await?;
        insert.end().await?;
        Ok(())
    }
}

#[async_trait]
impl StorageConnector for ClickhouseEventRepository {
    async fn ping(&self) -> Result<()> {
        self.store.probe().await
    }

    async fn ensure_schema(&self) -> Result<()> {
        self.store.create_database().await?;
        for kind in EventKind::ALL {
            self.store
                .execute(&create_table_sql(self.store.database(), kind))
                .await?;
        }
        Ok(())
    }
}

#[async_trait]
impl AnalyticsEventRepository for ClickhouseEventRepository {
    async fn insert_event(&self, event: &AnalyticsEvent) -> Result<()> {
        let row = EventRow::from_event(event);
        let kind = row.kind();
        match &row {
            EventRow::PageView(row) => self.write_row(kind, row).await,
            EventRow::Click(row) => self.write_row(kind, row).await,
            EventRow::ScrollDepth(row) => self.write_row(kind, row).await,
            EventRow::UserAgent(row) => self.write_row(kind, row).await,
            EventRow::SessionDuration(row) => self.write_row(kind, row).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn event(details: EventDetails) -> AnalyticsEvent {
        AnalyticsEvent {
            id: Uuid::new_v4(),
            path: "games/42".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap(),
            details,
        }
    }

    #[test]
    fn each_kind_has_its_own_table() {
        let tables: Vec<&str> = EventKind::ALL.iter().map(|kind| table_for(*kind)).collect();
        assert_eq!(
            tables,
            vec!["page_views", "clicks", "scroll_depth", "user_agents", "session_duration"]
        );
    }

    #[test]
    fn ddl_contains_only_the_kind_columns() {
        let clicks = create_table_sql("analytics", EventKind::Click);
        assert!(clicks.contains("CREATE TABLE IF NOT EXISTS analytics.clicks"));
        assert!(clicks.contains("element_id String"));
        assert!(clicks.contains("ORDER BY (timestamp)"));
        assert!(!clicks.contains("max_scroll"));

        let page_views = create_table_sql("analytics", EventKind::PageView);
        assert!(page_views.contains("path String,\n    timestamp DateTime"));
    }

    #[test]
    fn click_rows_carry_element_columns() {
        let source = event(EventDetails::Click {
            element: "button".to_string(),
            element_id: "buy".to_string(),
            class_name: String::new(),
        });
        match EventRow::from_event(&source) {
            EventRow::Click(row) => {
                assert_eq!(row.id, source.id);
                assert_eq!(row.event_type, "click");
                assert_eq!(row.path, "games/42");
                assert_eq!(row.element_id, "buy");
                assert_eq!(row.class_name, "");
                assert_eq!(row.timestamp.unix_timestamp(), 1_714_557_600);
            }
            other => panic!("unexpected row {:?}", other),
        }
    }

    #[test]
    fn numeric_details_map_to_their_rows() {
        let scroll = EventRow::from_event(&event(EventDetails::ScrollDepth { max_scroll: 80 }));
        assert_eq!(scroll.kind(), EventKind::ScrollDepth);
        assert!(matches!(scroll, EventRow::ScrollDepth(ScrollDepthRow { max_scroll: 80, .. })));

        let session = EventRow::from_event(&event(EventDetails::SessionDuration { duration_ms: 4200 }));
        assert!(matches!(
            session,
            EventRow::SessionDuration(SessionDurationRow { duration_ms: 4200, .. })
        ));
    }
}
