use serde::{Deserialize, Serialize};

pub const REGISTERED_MESSAGE: &str = "User registered successfully";

/// Request body for buyer or seller registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
}

/// Request body for login. Only the email is looked up.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct RegisteredResponse {
    pub id: i64,
    pub message: &'static str,
}

/// Stored user fields echoed back on login.
#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}
