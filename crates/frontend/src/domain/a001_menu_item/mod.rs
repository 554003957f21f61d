//! Restaurant menu: aggregate loading, the menu store and the view controller.
//!
//! - gateway.rs: boundary trait with the all-or-nothing aggregate read
//! - api.rs: HTTP implementation over gloo-net
//! - store.rs: in-memory snapshot, replaced wholesale by each load
//! - controller.rs: panel state machine and mutations
//! - ui/: Leptos page rendering the controller's signals

pub mod api;
pub mod controller;
pub mod error;
pub mod gateway;
pub mod state;
pub mod store;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_support;

pub use api::HttpMenuGateway;
pub use controller::{DeleteOutcome, MenuController};
pub use error::{AggregateFetchError, ControllerError, GatewayError, MutationError};
pub use gateway::MenuGateway;
pub use state::{MenuView, NoticeKind, ViewState};
pub use store::{MenuSnapshot, MenuStore};
