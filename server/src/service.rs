use std::sync::Arc;

use chrono::Utc;
use claimboard_common::{AwardRecord, ClaimPointsResponse, Player};
use rand::Rng;
use tracing::{debug, info};

use crate::database::Database;
use crate::error::{ServiceError, ServiceResult};
use crate::{repository, server_init};

pub const MIN_AWARD: i64 = 1;
pub const MAX_AWARD: i64 = 10;

pub const USER_NOT_FOUND: &str = "User not found";

/// Draws a claim amount uniformly from `MIN_AWARD..=MAX_AWARD`.
pub fn draw_award<R: Rng + ?Sized>(rng: &mut R) -> i64 {
    rng.gen_range(MIN_AWARD..=MAX_AWARD)
}

/// Leaderboard operations over an injected store handle.
#[derive(Clone)]
pub struct LeaderboardService {
    db: Arc<Database>,
}

impl LeaderboardService {
    pub fn new(db: Arc<Database>) -> Self {
        LeaderboardService { db }
    }

    pub async fn ping(&self) -> ServiceResult<()> {
        Ok(self.db.ping().await?)
    }

    /// Inserts the default roster when the store has no players yet.
    /// Returns how many players were created.
    pub async fn ensure_seeded(&self) -> ServiceResult<usize> {
        Ok(server_init::seed_players(&self.db).await?)
    }

    pub async fn list_players(&self) -> ServiceResult<Vec<Player>> {
        Ok(repository::fetch_leaderboard(&self.db).await?)
    }

    pub async fn register_player(&self, username: &str) -> ServiceResult<Player> {
        let username = username.trim();
        if username.is_empty() {
            return Err(ServiceError::Validation("Username is required".to_string()));
        }

        match repository::create_player(&self.db, username).await {
            Ok(player) => {
                info!(id = %player.id, username, "Registered player");
                Ok(player)
            }
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(ServiceError::Validation("Username already taken".to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn claim_points(&self, player_id: &str) -> ServiceResult<ClaimPointsResponse> {
        let amount = draw_award(&mut rand::thread_rng());
        self.claim_points_amount(player_id, amount).await
    }

    pub(crate) async fn claim_points_amount(
        &self,
        player_id: &str,
        amount: i64,
    ) -> ServiceResult<ClaimPointsResponse> {
        debug!(player_id, amount, "Claiming points");

        match self.db.award_points(player_id, amount, Utc::now()).await? {
            Some(total_points) => {
                info!(player_id, amount, total_points, "Points awarded");
                Ok(ClaimPointsResponse {
                    points_awarded: amount,
                    total_points,
                })
            }
            None => Err(ServiceError::NotFound(USER_NOT_FOUND.to_string())),
        }
    }

    pub async fn list_award_history(&self) -> ServiceResult<Vec<AwardRecord>> {
        Ok(repository::fetch_award_history(&self.db).await?)
    }
}
