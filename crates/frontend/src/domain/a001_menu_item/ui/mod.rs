//! Menu page (Leptos CSR): renders the signals the controller emits.

mod page;
mod signals;

pub use page::MenuPage;
pub use signals::{MenuSignals, Notice};
