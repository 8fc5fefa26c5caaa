//! Navigation service
//!
//! Handles the final routing decision once the conversation is complete.
//! The engine forwards recognized final actions to a [`Navigator`]
//! collaborator; everything else is ignored.

use tracing::info;

/// Route shown after a completed conversation
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// Recognized final actions at the end of a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalAction {
    Proceed,
    ViewDashboard,
}

impl FinalAction {
    /// Parse an action string; unrecognized values yield `None`
    pub fn parse(action: &str) -> Option<Self> {
        match action {
            "proceed" => Some(FinalAction::Proceed),
            "view_dashboard" => Some(FinalAction::ViewDashboard),
            _ => None,
        }
    }

    /// Target route for this action
    pub fn route(&self) -> &'static str {
        match self {
            FinalAction::Proceed | FinalAction::ViewDashboard => DASHBOARD_ROUTE,
        }
    }
}

/// External navigation collaborator
pub trait Navigator: Send + Sync {
    fn navigate_to(&self, route: &str);
}

/// Navigator that records the transition in the log.
///
/// Used by the terminal runner, where there is no real view layer to hand
/// control to.
#[derive(Debug, Clone, Default)]
pub struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn navigate_to(&self, route: &str) {
        info!(route = route, "Navigating");
    }
}
