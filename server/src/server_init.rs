use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::database::Database;

pub const DEFAULT_PLAYERS: &[&str] = &[
    "Rahul",
    "Kamal",
    "Sanak",
    "Priya",
    "Arjun",
    "Meera",
    "Vikram",
    "Ananya",
    "Rohan",
    "Sneha",
];

/// Inserts the default roster, in one transaction, when the players table is
/// empty. Returns the number of players created.
pub async fn seed_players(db: &Database) -> Result<usize, sqlx::Error> {
    let count = db.count_players().await?;

    if count > 0 {
        info!("Database already has {count} players. Skipping seed.");
        return Ok(0);
    }

    info!("No players found. Creating {} default players...", DEFAULT_PLAYERS.len());

    let now = Utc::now();
    let mut tx = db.pool().begin().await?;

    for name in DEFAULT_PLAYERS {
        let id = Uuid::new_v4().to_string();

        sqlx::query(
            "INSERT INTO players (id, username, points, created_at, updated_at) VALUES (?, ?, 0, ?, ?)"
        )
        .bind(&id)
        .bind(name)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        debug!("Created player: {name} (ID: {id})");
    }

    tx.commit().await?;

    info!("Successfully created {} default players!", DEFAULT_PLAYERS.len());
    Ok(DEFAULT_PLAYERS.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::tests::create_test_db;

    #[tokio::test]
    async fn test_seed_empty_store_creates_default_roster() {
        let db = create_test_db().await;

        let created = seed_players(&db).await.unwrap();
        assert_eq!(created, DEFAULT_PLAYERS.len());

        let players = db.list_players_by_points().await.unwrap();
        let mut names: Vec<&str> = players.iter().map(|p| p.username.as_str()).collect();
        names.sort_unstable();
        let mut expected = DEFAULT_PLAYERS.to_vec();
        expected.sort_unstable();

        assert_eq!(names, expected);
        assert!(players.iter().all(|p| p.points == 0));
    }

    #[tokio::test]
    async fn test_seed_twice_creates_nothing_new() {
        let db = create_test_db().await;

        seed_players(&db).await.unwrap();
        let created = seed_players(&db).await.unwrap();

        assert_eq!(created, 0);
        assert_eq!(db.count_players().await.unwrap(), DEFAULT_PLAYERS.len() as i64);
    }
}
