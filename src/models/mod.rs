//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod api;
pub mod quote;

// Re-export commonly used models
pub use api::{
    CreatedProperty, PropertyCreateRequest, QuoteCreateRequest, QuoteResponse,
    RegisterUserRequest, RegisteredUser,
};
pub use quote::QuoteSummary;
