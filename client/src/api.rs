use claimboard_common::*;
use reqwest::Response;

type ApiResult<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Turns a non-success response into an error carrying the server's message.
async fn error_from(response: Response) -> Box<dyn std::error::Error> {
    let status = response.status();
    match response.json::<ErrorResponse>().await {
        Ok(body) => format!("{} ({})", body.error, status).into(),
        Err(_) => format!("Server error: {status}").into(),
    }
}

pub async fn fetch_players(server_url: &str) -> ApiResult<Vec<Player>> {
    let url = format!("{server_url}/users");
    let response = reqwest::Client::new().get(&url).send().await?;

    if !response.status().is_success() {
        return Err(error_from(response).await);
    }

    Ok(response.json().await?)
}

pub async fn create_player(server_url: &str, username: &str) -> ApiResult<Player> {
    let url = format!("{server_url}/users");
    let request = CreatePlayerRequest {
        username: username.to_string(),
    };

    let response = reqwest::Client::new().post(&url).json(&request).send().await?;

    if !response.status().is_success() {
        return Err(error_from(response).await);
    }

    Ok(response.json().await?)
}

pub async fn claim_points(server_url: &str, user_id: &str) -> ApiResult<ClaimPointsResponse> {
    let url = format!("{server_url}/claim-points");
    let request = ClaimPointsRequest {
        user_id: user_id.to_string(),
    };

    let response = reqwest::Client::new().post(&url).json(&request).send().await?;

    if !response.status().is_success() {
        return Err(error_from(response).await);
    }

    Ok(response.json().await?)
}

pub async fn fetch_history(server_url: &str) -> ApiResult<Vec<AwardRecord>> {
    let url = format!("{server_url}/point-history");
    let response = reqwest::Client::new().get(&url).send().await?;

    if !response.status().is_success() {
        return Err(error_from(response).await);
    }

    Ok(response.json().await?)
}
