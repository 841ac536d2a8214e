//! Runs against a real server: `GAMESTORE_TEST_CLICKHOUSE_URL=http://... cargo test -- --ignored`

use std::env;

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use backend_domain::ports::{AnalyticsEventRepository, StorageConnector};
use backend_domain::{AnalyticsEvent, EventDetails, StorageConfig};
use backend_infrastructure::repositories::clickhouse_events::table_for;
use backend_infrastructure::{ClickhouseEventRepository, ClickhouseStore};

fn storage_config() -> Option<StorageConfig> {
    let clickhouse_url = env::var("GAMESTORE_TEST_CLICKHOUSE_URL").ok()?;
    Some(StorageConfig {
        clickhouse_url,
        clickhouse_database: env::var("GAMESTORE_TEST_CLICKHOUSE_DATABASE")
            .unwrap_or_else(|_| "gamestore_test".to_string()),
        clickhouse_user: env::var("GAMESTORE_TEST_CLICKHOUSE_USER").ok(),
        clickhouse_password: env::var("GAMESTORE_TEST_CLICKHOUSE_PASSWORD").ok(),
        database_url: String::new(),
        max_connections: 1,
        connect_attempts: 1,
        retry_delay_seconds: 0,
    })
}

async fn count_by_id(store: &ClickhouseStore, table: &str, id: Uuid) -> u64 {
    store
        .client()
        .query(&format!(
            "SELECT count() FROM {} WHERE toString(id) = ?",
            store.qualified(table)
        ))
        .bind(id.to_string())
        .fetch_one::<u64>()
        .await
        .expect("count")
}

#[tokio::test]
#[ignore = "requires database"]
async fn every_kind_lands_in_its_table() {
    let Some(config) = storage_config() else {
        return;
    };
    let store = ClickhouseStore::connect(&config).await.expect("connect");
    let repo = ClickhouseEventRepository::new(store.clone());
    repo.ensure_schema().await.expect("schema");
    repo.ensure_schema().await.expect("schema is idempotent");
    repo.ping().await.expect("ping");

    let timestamp = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
    let details = vec![
        EventDetails::PageView,
        EventDetails::Click {
            element: "button".to_string(),
            element_id: "buy".to_string(),
            class_name: "cta".to_string(),
        },
        EventDetails::ScrollDepth { max_scroll: 80 },
        EventDetails::UserAgent {
            user_agent: "Mozilla/5.0".to_string(),
        },
        EventDetails::SessionDuration { duration_ms: 4200 },
    ];

    for details in details {
        let event = AnalyticsEvent {
            id: Uuid::new_v4(),
            path: "games/42".to_string(),
            timestamp,
            details,
        };
        repo.insert_event(&event).await.expect("insert");
        let table = table_for(event.kind());
        assert_eq!(count_by_id(&store, table, event.id).await, 1, "{}", table);
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn click_columns_are_written() {
    let Some(config) = storage_config() else {
        return;
    };
    let store = ClickhouseStore::connect(&config).await.expect("connect");
    let repo = ClickhouseEventRepository::new(store.clone());
    repo.ensure_schema().await.expect("schema");

    let event = AnalyticsEvent {
        id: Uuid::new_v4(),
        path: String::new(),
        timestamp: Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap(),
        details: EventDetails::Click {
            element: "a".to_string(),
            element_id: String::new(),
            class_name: "nav".to_string(),
        },
    };
    repo.insert_event(&event).await.expect("insert");

    let class_name = store
        .client()
        .query(&format!(
            "SELECT class_name FROM {} WHERE toString(id) = ?",
            store.qualified("clicks")
        ))
        .bind(event.id.to_string())
        .fetch_one::<String>()
        .await
        .expect("select");
    assert_eq!(class_name, "nav");
}
