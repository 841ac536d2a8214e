#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use backend_application::{AnalyticsState, GameState, Metrics, OrderState};
use backend_domain::ports::{
    AnalyticsEventRepository, GameRepository, OrderRepository, StorageConnector,
};
use backend_domain::{AnalyticsEvent, Game, GameDraft, Order, OrderDraft, RuntimeConfig};

pub fn runtime_config() -> RuntimeConfig {
    RuntimeConfig {
        bind_addr: "127.0.0.1:0".to_string(),
        docs_url: "/docs".to_string(),
        max_body_bytes: 64 * 1024,
        request_timeout_seconds: 2,
    }
}

#[derive(Default)]
pub struct SwitchableStorage {
    pub down: AtomicBool,
}

#[async_trait]
impl StorageConnector for SwitchableStorage {
    async fn ping(&self) -> anyhow::Result<()> {
        if self.down.load(Ordering::SeqCst) {
            anyhow::bail!("connection refused");
        }
        Ok(())
    }

    async fn ensure_schema(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct MemoryGames {
    rows: Mutex<BTreeMap<i64, Game>>,
    next_id: Mutex<i64>,
    pub broken: AtomicBool,
}

impl MemoryGames {
    pub fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check(&self) -> anyhow::Result<()> {
        if self.broken.load(Ordering::SeqCst) {
            anyhow::bail!("Lost connection to MySQL server at 'db:3306'");
        }
        Ok(())
    }
}

#[async_trait]
impl GameRepository for MemoryGames {
    async fn create(&self, draft: &GameDraft) -> anyhow::Result<Game> {
        self.check()?;
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let game = Game::from_draft(*next_id, draft.clone());
        self.rows.lock().unwrap().insert(game.id, game.clone());
        Ok(game)
    }

    async fn list_all(&self) -> anyhow::Result<Vec<Game>> {
        self.check()?;
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> anyhow::Result<Option<Game>> {
        self.check()?;
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn update_by_id(&self, id: i64, draft: &GameDraft) -> anyhow::Result<Option<Game>> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.get_mut(&id).map(|game| {
            *game = Game::from_draft(id, draft.clone());
            game.clone()
        }))
    }

    async fn delete_by_id(&self, id: i64) -> anyhow::Result<Option<Game>> {
        self.check()?;
        Ok(self.rows.lock().unwrap().remove(&id))
    }
}

#[derive(Default)]
pub struct MemoryOrders {
    rows: Mutex<BTreeMap<i64, Order>>,
    next_id: Mutex<i64>,
    pub broken: AtomicBool,
}

impl MemoryOrders {
    pub fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check(&self) -> anyhow::Result<()> {
        if self.broken.load(Ordering::SeqCst) {
            anyhow::bail!("Deadlock found when trying to get lock on table 'orders'");
        }
        Ok(())
    }
}

#[async_trait]
impl OrderRepository for MemoryOrders {
    async fn create(&self, draft: &OrderDraft) -> anyhow::Result<Order> {
        self.check()?;
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let order = Order::from_draft(*next_id, draft.clone());
        self.rows.lock().unwrap().insert(order.id, order.clone());
        Ok(order)
    }

    async fn list_all(&self) -> anyhow::Result<Vec<Order>> {
        self.check()?;
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    async fn get_by_id(&self, id: i64) -> anyhow::Result<Option<Order>> {
        self.check()?;
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn delete_by_id(&self, id: i64) -> anyhow::Result<Option<Order>> {
        self.check()?;
        Ok(self.rows.lock().unwrap().remove(&id))
    }
}

#[derive(Default)]
pub struct MemoryEvents {
    pub events: Mutex<Vec<AnalyticsEvent>>,
}

#[async_trait]
impl AnalyticsEventRepository for MemoryEvents {
    async fn insert_event(&self, event: &AnalyticsEvent) -> anyhow::Result<()> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}

pub fn game_state(repo: Arc<MemoryGames>, storage: Arc<SwitchableStorage>) -> GameState {
    GameState {
        config: runtime_config(),
        storage,
        game_repo: repo,
        metrics: Arc::new(Metrics::new("games")),
    }
}

pub fn order_state(repo: Arc<MemoryOrders>) -> OrderState {
    OrderState {
        config: runtime_config(),
        storage: Arc::new(SwitchableStorage::default()),
        order_repo: repo,
        metrics: Arc::new(Metrics::new("orders")),
    }
}

pub fn analytics_state(repo: Arc<MemoryEvents>) -> AnalyticsState {
    AnalyticsState {
        config: runtime_config(),
        storage: Arc::new(SwitchableStorage::default()),
        event_repo: repo,
        metrics: Arc::new(Metrics::new("analytics")),
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub location: Option<String>,
    pub text: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.text).expect("json body")
    }
}

pub async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");
    send_request(router, request).await
}

pub async fn send_request(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(ToString::to_string);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    TestResponse {
        status,
        location,
        text: String::from_utf8_lossy(&bytes).to_string(),
    }
}
