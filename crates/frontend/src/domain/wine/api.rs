use contracts::domain::catalog::wine::{Wine, WineListResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

pub async fn get_all() -> Result<Vec<Wine>, String> {
    let response = Request::get(&format!("{}/api/wines", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Loading wines failed: {}", response.status()));
    }

    response
        .json::<WineListResponse>()
        .await
        .map(|body| body.wines)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn get_by_id(id: i64) -> Result<Wine, String> {
    let response = Request::get(&format!("{}/api/wines/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Loading wine {} failed: {}", id, response.status()));
    }

    response
        .json::<Wine>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn top_rated(limit: u32) -> Result<Vec<Wine>, String> {
    let response = Request::get(&format!(
        "{}/api/wines/top-rated?limit={}",
        api_base(),
        limit
    ))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Loading top-rated wines failed: {}",
            response.status()
        ));
    }

    response
        .json::<WineListResponse>()
        .await
        .map(|body| body.wines)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn delete(id: i64) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/wines/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Deleting wine {} failed: {}",
            id,
            response.status()
        ));
    }

    Ok(())
}
