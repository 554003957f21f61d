//! In-memory gateway and recording view shared by the menu tests.

use super::error::{GatewayError, MutationAction, MutationError};
use super::gateway::MenuGateway;
use super::state::{MenuView, NoticeKind, ViewState};
use async_trait::async_trait;
use contracts::domain::a001_menu_item::{MenuItem, MenuItemDraft, MenuItemId};
use contracts::enums::Category;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

pub fn item(id: i64, name: &str) -> MenuItem {
    MenuItem {
        id: Some(MenuItemId(id)),
        name: name.to_string(),
        description: format!("{} description", name),
        image: Some(format!("{}.jpg", name.to_lowercase())),
    }
}

/// Backend stand-in: keeps collections in memory and records every request as `"METHOD /path"`
pub struct FakeGateway {
    menu: RefCell<HashMap<Category, Vec<MenuItem>>>,
    failing_reads: RefCell<HashSet<Category>>,
    failing_mutations: Cell<bool>,
    requests: RefCell<Vec<String>>,
    next_id: Cell<i64>,
}

impl FakeGateway {
    pub const FIRST_ASSIGNED_ID: MenuItemId = MenuItemId(100);

    pub fn with_menu(menu: Vec<(Category, Vec<MenuItem>)>) -> Self {
        Self {
            menu: RefCell::new(menu.into_iter().collect()),
            failing_reads: RefCell::new(HashSet::new()),
            failing_mutations: Cell::new(false),
            requests: RefCell::new(Vec::new()),
            next_id: Cell::new(Self::FIRST_ASSIGNED_ID.value()),
        }
    }

    pub fn set_category(&self, category: Category, items: Vec<MenuItem>) {
        self.menu.borrow_mut().insert(category, items);
    }

    pub fn fail_read(&self, category: Category) {
        self.failing_reads.borrow_mut().insert(category);
    }

    pub fn fail_mutations(&self) {
        self.failing_mutations.set(true);
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    fn record(&self, method: &str, path: String) -> String {
        self.requests.borrow_mut().push(format!("{} {}", method, path));
        path
    }

    fn check_mutation(&self, action: MutationAction, path: &str) -> Result<(), MutationError> {
        if self.failing_mutations.get() {
            return Err(MutationError::new(action, status(500, path)));
        }
        Ok(())
    }
}

fn status(code: u16, path: &str) -> GatewayError {
    GatewayError::Status {
        status: code,
        url: path.to_string(),
    }
}

fn from_draft(id: MenuItemId, draft: &MenuItemDraft) -> MenuItem {
    MenuItem {
        id: Some(id),
        name: draft.name.clone(),
        description: draft.description.clone(),
        image: Some(draft.image.clone()),
    }
}

#[async_trait(?Send)]
impl MenuGateway for FakeGateway {
    async fn fetch_category(&self, category: Category) -> Result<Vec<MenuItem>, GatewayError> {
        let path = self.record("GET", format!("/{}", category.code()));
        if self.failing_reads.borrow().contains(&category) {
            return Err(status(500, &path));
        }
        Ok(self.menu.borrow().get(&category).cloned().unwrap_or_default())
    }

    async fn create_item(
        &self,
        category: Category,
        draft: &MenuItemDraft,
    ) -> Result<MenuItem, MutationError> {
        let path = self.record("POST", format!("/{}", category.code()));
        self.check_mutation(MutationAction::Create, &path)?;

        let id = MenuItemId(self.next_id.get());
        self.next_id.set(id.value() + 1);
        let created = from_draft(id, draft);
        self.menu
            .borrow_mut()
            .entry(category)
            .or_default()
            .push(created.clone());
        Ok(created)
    }

    async fn update_item(
        &self,
        category: Category,
        id: MenuItemId,
        draft: &MenuItemDraft,
    ) -> Result<MenuItem, MutationError> {
        let path = self.record("PUT", format!("/{}/{}", category.code(), id));
        self.check_mutation(MutationAction::Update, &path)?;

        let mut menu = self.menu.borrow_mut();
        let existing = menu
            .get_mut(&category)
            .and_then(|items| items.iter_mut().find(|i| i.id == Some(id)))
            .ok_or_else(|| MutationError::new(MutationAction::Update, status(404, &path)))?;
        *existing = from_draft(id, draft);
        Ok(existing.clone())
    }

    async fn delete_item(&self, category: Category, id: MenuItemId) -> Result<(), MutationError> {
        let path = self.record("DELETE", format!("/{}/{}", category.code(), id));
        self.check_mutation(MutationAction::Delete, &path)?;

        let mut menu = self.menu.borrow_mut();
        let items = menu.entry(category).or_default();
        let before = items.len();
        items.retain(|i| i.id != Some(id));
        if items.len() == before {
            return Err(MutationError::new(MutationAction::Delete, status(404, &path)));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    CategoryList(Vec<Category>),
    Items(Category, Vec<MenuItem>),
    ClearItems,
    Panel(ViewState),
    Notice(String, NoticeKind),
    Confirm(String),
    FillEdit(MenuItemDraft),
    ClearAddForm,
}

/// Records outbound signals; `confirm` answers with a scripted value (yes by default)
pub struct RecordingView {
    events: RefCell<Vec<ViewEvent>>,
    confirm_answer: Cell<bool>,
}

impl Default for RecordingView {
    fn default() -> Self {
        Self {
            events: RefCell::new(Vec::new()),
            confirm_answer: Cell::new(true),
        }
    }
}

impl RecordingView {
    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    pub fn answer_confirm(&self, answer: bool) {
        self.confirm_answer.set(answer);
    }

    pub fn last_notice(&self) -> Option<(String, NoticeKind)> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            ViewEvent::Notice(message, kind) => Some((message.clone(), *kind)),
            _ => None,
        })
    }

    pub fn last_items(&self) -> Option<(Category, Vec<MenuItem>)> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            ViewEvent::Items(category, items) => Some((*category, items.clone())),
            _ => None,
        })
    }

    pub fn last_category_list(&self) -> Option<Vec<Category>> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            ViewEvent::CategoryList(categories) => Some(categories.clone()),
            _ => None,
        })
    }

    fn push(&self, event: ViewEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl MenuView for RecordingView {
    fn render_category_list(&self, categories: &[Category]) {
        self.push(ViewEvent::CategoryList(categories.to_vec()));
    }

    fn render_items(&self, category: Category, items: &[MenuItem]) {
        self.push(ViewEvent::Items(category, items.to_vec()));
    }

    fn clear_items(&self) {
        self.push(ViewEvent::ClearItems);
    }

    fn show_panel(&self, state: &ViewState) {
        self.push(ViewEvent::Panel(state.clone()));
    }

    fn notify(&self, message: &str, kind: NoticeKind) {
        self.push(ViewEvent::Notice(message.to_string(), kind));
    }

    fn confirm(&self, prompt: &str) -> bool {
        self.push(ViewEvent::Confirm(prompt.to_string()));
        self.confirm_answer.get()
    }

    fn fill_edit_form(&self, draft: &MenuItemDraft) {
        self.push(ViewEvent::FillEdit(draft.clone()));
    }

    fn clear_add_form(&self) {
        self.push(ViewEvent::ClearAddForm);
    }
}
