use contracts::domain::order::review::NewReview;
use contracts::domain::order::{
    OrderListResponse, OrderPayload, OrderResponse, OrderSummary, PaymentProfile,
    PaymentProfileResponse,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Submit a new order
pub async fn create(payload: &OrderPayload) -> Result<OrderResponse, String> {
    let response = Request::post(&format!("{}/api/orders", api_base()))
        .json(payload)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Placing order failed: {}", response.status()));
    }

    response
        .json::<OrderResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Order history for one customer
pub async fn by_user(user_id: i64) -> Result<Vec<OrderSummary>, String> {
    let response = Request::get(&format!("{}/api/orders/customer/{}", api_base(), user_id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Loading orders failed: {}", response.status()));
    }

    response
        .json::<OrderListResponse>()
        .await
        .map(|body| body.orders)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Last saved shipping/payment profile, if the customer has one
pub async fn payment_profile(user_id: i64) -> Result<Option<PaymentProfile>, String> {
    let response = Request::get(&format!(
        "{}/api/orders/payment-profile/{}",
        api_base(),
        user_id
    ))
    .send()
    .await
    .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Loading profile failed: {}", response.status()));
    }

    response
        .json::<PaymentProfileResponse>()
        .await
        .map(|body| body.profile)
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Post a product review
pub async fn submit_review(review: &NewReview) -> Result<(), String> {
    review.validate().map_err(|e| e.to_string())?;

    let response = Request::post(&format!("{}/api/reviews", api_base()))
        .json(review)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Submitting review failed: {}", response.status()));
    }

    Ok(())
}
