pub mod aggregate;
pub mod form;

pub use aggregate::{MenuItem, MenuItemDraft, MenuItemId, DEFAULT_IMAGE};
pub use form::{AddItemForm, EditItemForm, FormField, ValidationError};
