//! QuoteFlow - Conversational home insurance quote intake
//!
//! A chat-style intake flow that walks an applicant through a scripted
//! sequence of questions, collects their answers into a profile, and
//! submits the profile through a three-call backend pipeline to produce
//! a quote.

pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use state::{ConversationEngine, Pacing, UserAnswer};
pub use utils::errors::{QuoteFlowError, Result};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get application info string
pub fn app_info() -> String {
    format!("{} v{}", NAME, VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_info() {
        let info = app_info();
        assert!(info.contains(NAME));
        assert!(info.contains(VERSION));
    }
}
