//! Wire schemas for the quote backend API
//!
//! Request and response structures for the three dependent backend
//! operations: user registration, property creation, and quote creation.

use serde::{Deserialize, Serialize};

/// Request body for user registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Registered user returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Request body for property creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyCreateRequest {
    pub address: String,
    pub state: String,
    pub zip_code: String,
    pub dwelling_limit: f64,
    pub year_built: i32,
}

/// Created property returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedProperty {
    pub id: String,
    #[serde(default)]
    pub address: Option<String>,
}

/// Request body for quote creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteCreateRequest {
    pub user_id: String,
    pub property_id: String,
    pub coverage_type: String,
}

/// Raw quote returned by the backend
///
/// All pricing fields are optional; absent fields stay absent through
/// normalization (no defaulting).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResponse {
    #[serde(default)]
    pub premium_monthly: Option<f64>,
    #[serde(default)]
    pub premium_annual: Option<f64>,
    #[serde(default)]
    pub dwelling_limit: Option<f64>,
    #[serde(default)]
    pub coverage: Option<String>,
}
