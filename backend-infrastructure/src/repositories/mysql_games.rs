use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::mysql::MySqlPool;
use sqlx::FromRow;

use backend_domain::ports::{GameRepository, StorageConnector};
use backend_domain::{Game, GameDraft};

use crate::storage::ping_mysql;

pub const GAMES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS games (
    id BIGINT NOT NULL AUTO_INCREMENT,
    title VARCHAR(100) NOT NULL,
    genre VARCHAR(50) NOT NULL,
    platform VARCHAR(50) NOT NULL,
    PRIMARY KEY (id),
    INDEX ix_games_title (title)
) DEFAULT CHARSET = utf8mb4
"#;

const SELECT_ALL: &str = "SELECT id, title, genre, platform FROM games ORDER BY id";
const SELECT_BY_ID: &str = "SELECT id, title, genre, platform FROM games WHERE id = ?";
const LOCK_BY_ID: &str = "SELECT id, title, genre, platform FROM games WHERE id = ? FOR UPDATE";

#[derive(Debug, FromRow)]
struct GameRow {
    id: i64,
    title: String,
    genre: String,
    platform: String,
}

impl From<GameRow> for Game {
    fn from(row: GameRow) -> Self {
        Game {
            id: row.id,
            title: row.title,
            genre: row.genre,
            platform: row.platform,
        }
    }
}

/// Writes run in a transaction that is committed explicitly; an early
/// return drops it and rolls back.
#[derive(Clone)]
pub struct MySqlGameRepository {
    pool: MySqlPool,
}

impl MySqlGameRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StorageConnector for MySqlGameRepository {
    async fn ping(&self) -> Result<()> {
        ping_mysql(&self.pool).await
    }

    async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(GAMES_TABLE)
            .execute(&self.pool)
            .await
            .context("create games table")?;
        Ok(())
    }
}

#[async_trait]
impl GameRepository for MySqlGameRepository {
    async fn create(&self, draft: &GameDraft) -> Result<Game> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query("INSERT INTO games (title, genre, platform) VALUES (?, ?, ?)")
            .bind(&draft.title)
            .bind(&draft.genre)
            .bind(&draft.platform)
            .execute(&mut *tx)
            .await?;
        let id = i64::try_from(result.last_insert_id()).context("game id out of range")?;
        let row = sqlx::query_as::<_, GameRow>(SELECT_BY_ID)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(row.into())
    }

    async fn list_all(&self) -> Result<Vec<Game>> {
        let mut conn = self.pool.acquire().await?;
        let rows = sqlx::query_as::<_, GameRow>(SELECT_ALL)
            .fetch_all(&mut *conn)
            .await?;
        Ok(rows.into_iter().map(Game::from).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Game>> {
        let mut conn = self.pool.acquire().await?;
        let row = sqlx::query_as::<_, GameRow>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(row.map(Game::from))
    }

    async fn update_by_id(&self, id: i64, draft: &GameDraft) -> Result<Option<Game>> {
        let mut tx = self.pool.begin().await?;
        let existing = sqlx::query_as::<_, GameRow>(LOCK_BY_ID)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        if existing.is_none() {
            return Ok(None);
        }
        sqlx::query("UPDATE games SET title = ?, genre = ?, platform = ? WHERE id = ?")
            .bind(&draft.title)
            .bind(&draft.genre)
            .bind(&draft.platform)
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let row = sqlx::query_as::<_, GameRow>(SELECT_BY_ID)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(Some(row.into()))
    }

    async fn delete_by_id(&self, id: i64) -> Result<Option<Game>> {
        let mut tx = self.pool.begin().await?;
        let existing = sqlx::query_as::<_, GameRow>(LOCK_BY_ID)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?;
        let Some(existing) = existing else {
            return Ok(None);
        };
        sqlx::query("DELETE FROM games WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(Some(existing.into()))
    }
}
