use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteConnectOptions, FromRow, SqlitePool};
use tracing::{debug, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

#[derive(Debug, FromRow)]
pub struct PlayerRecord {
    pub id: String,
    pub username: String,
    pub points: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An award joined with the username of the player it belongs to, if that
/// player still exists.
#[derive(Debug, FromRow)]
pub struct AwardHistoryRow {
    pub id: String,
    pub player_id: String,
    pub points_awarded: i64,
    pub created_at: DateTime<Utc>,
    pub username: Option<String>,
}

impl Database {
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Database { pool }
    }

    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;
        Ok(Database { pool })
    }

    pub async fn initialize(&self) -> Result<(), sqlx::Error> {
        sqlx::migrate!("../migrations")
            .run(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub async fn count_players(&self) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM players")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0)
    }

    pub async fn create_player(&self, username: &str) -> Result<PlayerRecord, sqlx::Error> {
        debug!(username, "DB: Inserting player");

        let now = Utc::now();
        let result = sqlx::query_as::<_, PlayerRecord>(
            "INSERT INTO players (id, username, points, created_at, updated_at)
             VALUES (?, ?, 0, ?, ?)
             RETURNING id, username, points, created_at, updated_at"
        )
        .bind(Uuid::new_v4().to_string())
        .bind(username)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(record) => {
                debug!(id = %record.id, "DB: Player inserted");
                Ok(record)
            }
            Err(e) => {
                warn!(username, error = %e, "DB: Error during player insert");
                Err(e)
            }
        }
    }

    pub async fn list_players_by_points(&self) -> Result<Vec<PlayerRecord>, sqlx::Error> {
        sqlx::query_as::<_, PlayerRecord>(
            "SELECT id, username, points, created_at, updated_at
             FROM players
             ORDER BY points DESC, created_at ASC, rowid ASC"
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Adds `amount` to the player's points and logs the award in one
    /// transaction. Returns the new total, or `None` when no player has
    /// `player_id`, in which case nothing is written.
    pub async fn award_points(
        &self,
        player_id: &str,
        amount: i64,
        awarded_at: DateTime<Utc>,
    ) -> Result<Option<i64>, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let updated: Option<(i64,)> = sqlx::query_as(
            "UPDATE players SET points = points + ?, updated_at = ? WHERE id = ? RETURNING points"
        )
        .bind(amount)
        .bind(awarded_at)
        .bind(player_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((total,)) = updated else {
            debug!(player_id, "DB: No player to award");
            tx.rollback().await?;
            return Ok(None);
        };

        let inserted = sqlx::query(
            "INSERT INTO award_records (id, player_id, points_awarded, created_at) VALUES (?, ?, ?, ?)"
        )
        .bind(Uuid::new_v4().to_string())
        .bind(player_id)
        .bind(amount)
        .bind(awarded_at)
        .execute(&mut *tx)
        .await;

        if let Err(e) = inserted {
            warn!(player_id, error = %e, "DB: Award insert failed, rolling back");
            tx.rollback().await?;
            return Err(e);
        }

        tx.commit().await?;
        Ok(Some(total))
    }

    pub async fn list_award_history(&self) -> Result<Vec<AwardHistoryRow>, sqlx::Error> {
        sqlx::query_as::<_, AwardHistoryRow>(
            "SELECT a.id, a.player_id, a.points_awarded, a.created_at, p.username
             FROM award_records a
             LEFT JOIN players p ON p.id = a.player_id
             ORDER BY a.created_at DESC, a.rowid DESC"
        )
        .fetch_all(&self.pool)
        .await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::Duration;

    pub(crate) async fn create_test_db() -> Database {
        let pool = SqlitePool::connect(":memory:").await.unwrap();
        let db = Database::from_pool(pool);
        db.initialize().await.unwrap();
        db
    }

    async fn points_of(db: &Database, id: &str) -> i64 {
        let row: (i64,) = sqlx::query_as("SELECT points FROM players WHERE id = ?")
            .bind(id)
            .fetch_one(db.pool())
            .await
            .unwrap();
        row.0
    }

    async fn award_count(db: &Database) -> i64 {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM award_records")
            .fetch_one(db.pool())
            .await
            .unwrap();
        row.0
    }

    #[tokio::test]
    async fn test_create_player_starts_at_zero() {
        let db = create_test_db().await;
        let player = db.create_player("Test").await.unwrap();

        assert_eq!(player.username, "Test");
        assert_eq!(player.points, 0);
        assert!(!player.id.is_empty());
        assert_eq!(db.count_players().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_player_rejects_duplicate_username() {
        let db = create_test_db().await;
        db.create_player("Dup").await.unwrap();

        let err = db.create_player("Dup").await.unwrap_err();
        let is_unique = err
            .as_database_error()
            .map(|e| e.is_unique_violation())
            .unwrap_or(false);
        assert!(is_unique, "Expected unique violation, got {err:?}");
        assert_eq!(db.count_players().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_award_points_increments_and_logs() {
        let db = create_test_db().await;
        let player = db.create_player("player1").await.unwrap();

        let total = db.award_points(&player.id, 4, Utc::now()).await.unwrap();
        assert_eq!(total, Some(4));

        let total = db.award_points(&player.id, 6, Utc::now()).await.unwrap();
        assert_eq!(total, Some(10));

        assert_eq!(points_of(&db, &player.id).await, 10);
        assert_eq!(award_count(&db).await, 2);
    }

    #[tokio::test]
    async fn test_award_points_unknown_player_writes_nothing() {
        let db = create_test_db().await;
        let player = db.create_player("player1").await.unwrap();

        let total = db.award_points("no-such-player", 5, Utc::now()).await.unwrap();

        assert_eq!(total, None);
        assert_eq!(award_count(&db).await, 0);
        assert_eq!(points_of(&db, &player.id).await, 0);
    }

    #[tokio::test]
    async fn test_award_points_rejects_out_of_range_amount() {
        let db = create_test_db().await;
        let player = db.create_player("player1").await.unwrap();

        assert!(db.award_points(&player.id, 11, Utc::now()).await.is_err());

        // The failed insert rolls back the increment as well
        assert_eq!(points_of(&db, &player.id).await, 0);
        assert_eq!(award_count(&db).await, 0);
    }

    #[tokio::test]
    async fn test_list_players_by_points_descending() {
        let db = create_test_db().await;
        let low = db.create_player("low").await.unwrap();
        let high = db.create_player("high").await.unwrap();
        let mid = db.create_player("mid").await.unwrap();

        db.award_points(&low.id, 1, Utc::now()).await.unwrap();
        db.award_points(&high.id, 9, Utc::now()).await.unwrap();
        db.award_points(&mid.id, 5, Utc::now()).await.unwrap();

        let names: Vec<String> = db
            .list_players_by_points()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.username)
            .collect();
        assert_eq!(names, vec!["high", "mid", "low"]);
    }

    #[tokio::test]
    async fn test_award_history_newest_first_with_usernames() {
        let db = create_test_db().await;
        let alice = db.create_player("alice").await.unwrap();
        let bob = db.create_player("bob").await.unwrap();

        let base = Utc::now();
        db.award_points(&alice.id, 2, base).await.unwrap();
        db.award_points(&bob.id, 7, base + Duration::seconds(5)).await.unwrap();
        db.award_points(&alice.id, 3, base + Duration::seconds(2)).await.unwrap();

        let history = db.list_award_history().await.unwrap();
        let amounts: Vec<i64> = history.iter().map(|r| r.points_awarded).collect();
        assert_eq!(amounts, vec![7, 3, 2]);

        assert_eq!(history[0].username.as_deref(), Some("bob"));
        assert_eq!(history[1].player_id, alice.id);
        assert_eq!(history[1].username.as_deref(), Some("alice"));
    }
}
