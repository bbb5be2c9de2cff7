use contracts::system::session::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse,
};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Login with username and password
pub async fn login(username: String, password: String) -> Result<LoginResponse, String> {
    let request = LoginRequest { username, password };

    let response = Request::post(&format!("{}/api/users/login", api_base()))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(match response.status() {
            401 => "Invalid username or password".to_string(),
            status => format!("Login failed: {}", status),
        });
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Register a new customer account
pub async fn register(
    username: String,
    email: Option<String>,
    password: String,
) -> Result<RegisterResponse, String> {
    let request = RegisterRequest {
        username,
        email,
        password,
    };

    let response = Request::post(&format!("{}/api/users/register", api_base()))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(match response.status() {
            409 => "Username or email already exists".to_string(),
            status => format!("Registration failed: {}", status),
        });
    }

    response
        .json::<RegisterResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
