use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use claimboard_common::*;
use tracing::debug;

use crate::{error::ApiResult, AppState};

pub async fn list_players(State(state): State<AppState>) -> ApiResult<Json<Vec<Player>>> {
    let players = state.service.list_players().await?;
    debug!("API: Returning {} players", players.len());
    Ok(Json(players))
}

pub async fn create_player(
    State(state): State<AppState>,
    payload: Result<Json<CreatePlayerRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Player>)> {
    let Json(request) = payload?;
    let player = state.service.register_player(&request.username).await?;
    Ok((StatusCode::CREATED, Json(player)))
}

pub async fn claim_points(
    State(state): State<AppState>,
    payload: Result<Json<ClaimPointsRequest>, JsonRejection>,
) -> ApiResult<Json<ClaimPointsResponse>> {
    let Json(request) = payload?;
    let response = state.service.claim_points(request.user_id.trim()).await?;
    Ok(Json(response))
}

pub async fn get_point_history(State(state): State<AppState>) -> ApiResult<Json<Vec<AwardRecord>>> {
    let history = state.service.list_award_history().await?;
    debug!("API: Returning {} award records", history.len());
    Ok(Json(history))
}
