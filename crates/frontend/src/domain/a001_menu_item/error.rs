//! Error taxonomy of the menu client.
//!
//! Gateway failures are terminal at the controller: each one ends in a
//! user-visible notification, nothing is retried.

use contracts::domain::a001_menu_item::ValidationError;
use contracts::enums::Category;
use std::fmt;
use thiserror::Error;

/// Failure of a single HTTP exchange with the menu API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("network error: {0}")]
    Transport(String),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("failed to encode request: {0}")]
    Encode(String),
}

/// One of the per-category reads of an aggregate load failed.
/// The whole load is discarded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not load the {category} menu: {source}")]
pub struct AggregateFetchError {
    pub category: Category,
    pub source: GatewayError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationAction {
    Create,
    Update,
    Delete,
}

impl MutationAction {
    pub fn verb(&self) -> &'static str {
        match self {
            MutationAction::Create => "add",
            MutationAction::Update => "update",
            MutationAction::Delete => "delete",
        }
    }
}

impl fmt::Display for MutationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// Create, update or delete was rejected by the API or never reached it
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not {action} the meal: {source}")]
pub struct MutationError {
    pub action: MutationAction,
    pub source: GatewayError,
}

impl MutationError {
    pub fn new(action: MutationAction, source: GatewayError) -> Self {
        Self { action, source }
    }
}

/// User action that the current view state does not accept
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("cannot {action} from the {state} view")]
    NotAllowed {
        action: &'static str,
        state: &'static str,
    },

    #[error("menu item has no id yet")]
    MissingItemId,
}

/// Outcome of a controller operation, for callers that need more than the notification
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Fetch(#[from] AggregateFetchError),

    #[error(transparent)]
    Mutation(#[from] MutationError),

    #[error(transparent)]
    Transition(#[from] TransitionError),
}
