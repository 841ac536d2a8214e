use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::mysql::MySqlPool;
use sqlx::FromRow;

use backend_domain::ports::{OrderRepository, StorageConnector};
use backend_domain::{Order, OrderDraft};

use crate::storage::ping_mysql;

pub const ORDERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS orders (
    id BIGINT NOT NULL AUTO_INCREMENT,
    customer_name VARCHAR(100) NOT NULL,
    item_name VARCHAR(100) NOT NULL,
    quantity INT NOT NULL,
    price DOUBLE NOT NULL,
    status VARCHAR(50) NOT NULL DEFAULT 'pending',
    PRIMARY KEY (id),
    INDEX ix_orders_customer_name (customer_name)
) DEFAULT CHARSET = utf8mb4
"#;

const COLUMNS: &str = "id, customer_name, item_name, quantity, price, status";

#[derive(Debug, FromRow)]
struct OrderRow {
    id: i64,
    customer_name: String,
    item_name: String,
    quantity: i32,
    price: f64,
    status: String,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Order {
            id: row.id,
            customer_name: row.customer_name,
            item_name: row.item_name,
            quantity: row.quantity,
            price: row.price,
            status: row.status,
        }
    }
}

#[derive(Clone)]
pub struct MySqlOrderRepository {
    pool: MySqlPool,
}

impl MySqlOrderRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn select_by_id(lock: bool) -> String {
        let suffix = if lock { " FOR UPDATE" } else { "" };
        format!("SELECT {} FROM orders WHERE id = ?{}", COLUMNS, suffix)
    }
}

#[async_trait]
impl StorageConnector for MySqlOrderRepository {
    async fn ping(&self) -> Result<()> {
        ping_mysql(&self.pool).await
    }

    async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(ORDERS_TABLE)
            .execute(&self.pool)
            .await
            .context("create orders table")?;
        Ok(())
    }
}

#[async_trait]
impl OrderRepository for MySqlOrderRepository {
    async fn create(&self, draft: &OrderDraft) -> Result<Order> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query(
            "INSERT INTO orders (customer_name, item_name, quantity, price, status) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&draft.customer_name)
        .bind(&draft.item_name)
        .bind(draft.quantity)
        .bind(draft.price)
        .bind(&draft.status)
        .execute(&mut *tx)
        .await?;
        let id = i64::try_from(result.last_insert_id()).context("order id out of range")?;
        let row = sqlx::query_as::<_, OrderRow>(&Self::select_by_id(false))
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(row.into())
    }

    async fn list_all(&self) -> Result<Vec<Order>> {
        let mut conn = self.pool.acquire().await?;
        let query = format!("SELECT {} FROM orders ORDER BY id", COLUMNS);
        let rows = sqlx::query_as::<_, OrderRow>(&query)
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows.into_iter().map(Order::from).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Order>> {
        let mut conn = self.pool.acquire().await?;
        let row = sqlx::query_as::<_, OrderRow>(&Self::select_by_id(false))
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row.map(Order::from))
    }

    async fn delete_by_id(&self, id: i64) -> Result<Option<Order>> {
        let mut tx = self.pool.begin().await?;
        let existing = sqlx::query_as::<_, OrderRow>(&Self::select_by_id(true))
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some(existing) = existing else {
            return Ok(None);
        };
        sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(Some(existing.into()))
    }
}
