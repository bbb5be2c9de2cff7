use contracts::domain::catalog::coffee::{Coffee, CoffeeListResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

pub async fn get_all() -> Result<Vec<Coffee>, String> {
    let response = Request::get(&format!("{}/api/coffees", api_base()))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Loading coffees failed: {}", response.status()));
    }

    response
        .json::<CoffeeListResponse>()
        .await
        .map(|body| body.coffees)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn get_by_id(id: i64) -> Result<Coffee, String> {
    let response = Request::get(&format!("{}/api/coffees/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Loading coffee {} failed: {}",
            id,
            response.status()
        ));
    }

    response
        .json::<Coffee>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn top_rated(limit: u32) -> Result<Vec<Coffee>, String> {
    let response = Request::get(&format!(
        "{}/api/coffees/top-rated?limit={}",
        api_base(),
        limit
    ))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Loading top-rated coffees failed: {}",
            response.status()
        ));
    }

    response
        .json::<CoffeeListResponse>()
        .await
        .map(|body| body.coffees)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn delete(id: i64) -> Result<(), String> {
    let response = Request::delete(&format!("{}/api/coffees/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!(
            "Deleting coffee {} failed: {}",
            id,
            response.status()
        ));
    }

    Ok(())
}
