use claimboard_common::*;

use crate::database::{AwardHistoryRow, Database, PlayerRecord};

pub async fn fetch_leaderboard(database: &Database) -> Result<Vec<Player>, sqlx::Error> {
    let records = database.list_players_by_points().await?;
    Ok(records.iter().map(PlayerRecord::to_player).collect())
}

pub async fn create_player(database: &Database, username: &str) -> Result<Player, sqlx::Error> {
    let record = database.create_player(username).await?;
    Ok(record.to_player())
}

pub async fn fetch_award_history(database: &Database) -> Result<Vec<AwardRecord>, sqlx::Error> {
    let rows = database.list_award_history().await?;
    Ok(rows.into_iter().map(AwardHistoryRow::into_award_record).collect())
}

impl PlayerRecord {
    fn to_player(&self) -> Player {
        Player {
            id: self.id.clone(),
            username: self.username.clone(),
            points: self.points,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl AwardHistoryRow {
    fn into_award_record(self) -> AwardRecord {
        let player_id = match self.username {
            Some(username) => PlayerRef::Resolved(PlayerSummary {
                id: self.player_id,
                username,
            }),
            None => PlayerRef::Unresolved(self.player_id),
        };

        AwardRecord {
            id: self.id,
            player_id,
            points_awarded: self.points_awarded,
            timestamp: self.created_at,
        }
    }
}
