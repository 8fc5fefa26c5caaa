//! Utility modules
//!
//! Common utilities including error handling, logging, and helper functions

pub mod errors;
pub mod helpers;
pub mod logging;

pub use errors::{ApiError, ApiResult, QuoteFlowError, Result};
