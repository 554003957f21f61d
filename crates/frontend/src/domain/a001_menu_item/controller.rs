//! View controller: the panel state machine and the side-effecting menu operations.
//!
//! All methods take `&self` so that one controller can be shared by every
//! event handler on the page. Interior borrows are never held across an
//! `.await`; two operations may interleave, and the store decides by load
//! ticket which refresh lands.

use super::error::{AggregateFetchError, ControllerError, TransitionError};
use super::gateway::MenuGateway;
use super::state::{EditTarget, MenuView, NoticeKind, ViewState};
use super::store::MenuStore;
use contracts::domain::a001_menu_item::{AddItemForm, EditItemForm, MenuItem, MenuItemId};
use contracts::enums::Category;
use std::cell::RefCell;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this meal?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Declined,
}

pub struct MenuController<G, V> {
    gateway: G,
    view: V,
    store: RefCell<MenuStore>,
    state: RefCell<ViewState>,
}

impl<G: MenuGateway, V: MenuView> MenuController<G, V> {
    pub fn new(gateway: G, view: V) -> Self {
        Self {
            gateway,
            view,
            store: RefCell::new(MenuStore::new()),
            state: RefCell::new(ViewState::Home),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    pub fn with_store<R>(&self, f: impl FnOnce(&MenuStore) -> R) -> R {
        f(&self.store.borrow())
    }

    // ------------------------------------------------------------------
    // Loading
    // ------------------------------------------------------------------

    /// Startup: show the home panel and load the whole menu
    pub async fn initial_load(&self) -> Result<(), AggregateFetchError> {
        self.enter(ViewState::Home);
        let result = self.refresh().await;
        if result.is_err() && !self.store.borrow().is_loaded() {
            self.view.render_category_list(&[]);
        }
        result
    }

    /// Reload every category and re-render whatever is open.
    /// On failure the previous snapshot stays in place.
    pub async fn refresh(&self) -> Result<(), AggregateFetchError> {
        let ticket = self.store.borrow_mut().begin_load();

        match self.gateway.fetch_all().await {
            Ok(snapshot) => {
                let total = snapshot.total_items();
                if self.store.borrow_mut().install(ticket, snapshot) {
                    log::info!("Menu loaded: {} items", total);
                    self.rerender();
                } else {
                    log::warn!("Discarding menu load {:?}: a newer load has landed", ticket);
                }
                Ok(())
            }
            Err(err) => {
                log::error!("Menu load failed: {}", err);
                self.view.notify(
                    "An error occurred while loading the menu. Please try again later.",
                    NoticeKind::Error,
                );
                Err(err)
            }
        }
    }

    fn rerender(&self) {
        let store = self.store.borrow();
        self.view.render_category_list(store.categories());
        if let Some(category) = self.state.borrow().open_category() {
            self.view.render_items(category, store.items(category));
        }
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    fn enter(&self, next: ViewState) {
        log::debug!("View: {} -> {}", self.state.borrow().label(), next.label());
        self.view.clear_items();
        self.view.show_panel(&next);
        *self.state.borrow_mut() = next;
    }

    fn not_allowed(&self, action: &'static str) -> TransitionError {
        let err = TransitionError::NotAllowed {
            action,
            state: self.state.borrow().label(),
        };
        log::warn!("{}", err);
        err
    }

    pub fn select_category(&self, category: Category) -> Result<(), TransitionError> {
        if !matches!(
            *self.state.borrow(),
            ViewState::Home | ViewState::CategoryDetail(_)
        ) {
            return Err(self.not_allowed("open a category"));
        }

        self.enter(ViewState::CategoryDetail(category));
        let store = self.store.borrow();
        self.view.render_items(category, store.items(category));
        Ok(())
    }

    /// Back button: an edit form returns to its category, everything else to home
    pub fn go_back(&self) {
        match self.state() {
            ViewState::Home => {}
            ViewState::EditForm(target) => {
                self.enter(ViewState::CategoryDetail(target.category));
                let store = self.store.borrow();
                self.view
                    .render_items(target.category, store.items(target.category));
            }
            ViewState::CategoryDetail(_) | ViewState::AddForm => self.enter(ViewState::Home),
        }
    }

    pub fn start_add(&self) -> Result<(), TransitionError> {
        if *self.state.borrow() != ViewState::Home {
            return Err(self.not_allowed("add an item"));
        }
        self.enter(ViewState::AddForm);
        Ok(())
    }

    pub fn start_edit(&self, item: &MenuItem, category: Category) -> Result<(), TransitionError> {
        if self.state.borrow().open_category().is_none() {
            return Err(self.not_allowed("edit an item"));
        }
        let id = item.id.ok_or(TransitionError::MissingItemId)?;

        self.enter(ViewState::EditForm(EditTarget {
            category,
            id,
            item: item.clone(),
        }));
        self.view.fill_edit_form(&item.to_draft());
        Ok(())
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Create an item from the add form. The form stays filled in on failure.
    pub async fn submit_add(&self, form: &AddItemForm) -> Result<MenuItem, ControllerError> {
        if *self.state.borrow() != ViewState::AddForm {
            return Err(self.not_allowed("submit a new item").into());
        }

        let (category, draft) = form.validate().map_err(|err| {
            self.view.notify(&err.to_string(), NoticeKind::Error);
            err
        })?;

        let created = match self.gateway.create_item(category, &draft).await {
            Ok(item) => item,
            Err(err) => {
                log::error!("{}", err);
                self.view.notify(&capitalize(&err.to_string()), NoticeKind::Error);
                return Err(err.into());
            }
        };
        log::info!("Created {:?} in {}", created.id, category);

        self.view.clear_add_form();
        // success first: a failing refresh notice must land last and stay visible
        self.view.notify("Meal added successfully!", NoticeKind::Info);
        let _ = self.refresh().await;
        Ok(created)
    }

    /// Update the bound edit target.
    ///
    /// On success the edit panel closes and the edited category is shown again
    /// with the refreshed items, so its back control stays visible rather than
    /// dropping the user on a bare home panel.
    pub async fn submit_edit(&self, form: &EditItemForm) -> Result<MenuItem, ControllerError> {
        let target = match self.state() {
            ViewState::EditForm(target) => target,
            _ => return Err(self.not_allowed("save an item").into()),
        };

        let draft = form.validate().map_err(|err| {
            self.view.notify(&err.to_string(), NoticeKind::Error);
            err
        })?;

        let updated = match self
            .gateway
            .update_item(target.category, target.id, &draft)
            .await
        {
            Ok(item) => item,
            Err(err) => {
                log::error!("{}", err);
                self.view.notify(&capitalize(&err.to_string()), NoticeKind::Error);
                return Err(err.into());
            }
        };
        log::info!("Updated {} in {}", target.id, target.category);

        self.view.notify("Meal updated successfully!", NoticeKind::Info);
        let _ = self.refresh().await;
        if matches!(*self.state.borrow(), ViewState::EditForm(ref t) if t.id == target.id) {
            self.go_back();
        }
        Ok(updated)
    }

    /// Delete after explicit confirmation. A failed delete leaves the store untouched.
    pub async fn request_delete(
        &self,
        category: Category,
        id: MenuItemId,
    ) -> Result<DeleteOutcome, ControllerError> {
        if self.state.borrow().open_category().is_none() {
            return Err(self.not_allowed("delete an item").into());
        }
        if !self.view.confirm(DELETE_PROMPT) {
            return Ok(DeleteOutcome::Declined);
        }

        if let Err(err) = self.gateway.delete_item(category, id).await {
            log::error!("{}", err);
            self.view.notify(&capitalize(&err.to_string()), NoticeKind::Error);
            return Err(err.into());
        }
        log::info!("Deleted {} from {}", id, category);

        self.view.notify("Meal deleted successfully!", NoticeKind::Info);
        let _ = self.refresh().await;
        Ok(DeleteOutcome::Deleted)
    }
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
