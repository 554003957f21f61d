use super::super::state::{MenuView, NoticeKind, ViewState};
use contracts::domain::a001_menu_item::{AddItemForm, EditItemForm, MenuItem, MenuItemDraft};
use contracts::enums::Category;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// Informational notices disappear after this delay; errors stay until replaced
const NOTICE_TIMEOUT_MS: u32 = 4000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
    pub kind: NoticeKind,
}

/// Reactive state of the menu page. The controller writes it through `MenuView`.
#[derive(Clone, Copy)]
pub struct MenuSignals {
    pub categories: RwSignal<Vec<Category>>,
    pub items: RwSignal<Option<(Category, Vec<MenuItem>)>>,
    pub state: RwSignal<ViewState>,
    pub notice: RwSignal<Option<Notice>>,
    pub add_form: RwSignal<AddItemForm>,
    pub edit_form: RwSignal<EditItemForm>,
    notice_seq: StoredValue<u64>,
}

impl MenuSignals {
    pub fn new() -> Self {
        Self {
            categories: RwSignal::new(Vec::new()),
            items: RwSignal::new(None),
            state: RwSignal::new(ViewState::Home),
            notice: RwSignal::new(None),
            add_form: RwSignal::new(AddItemForm::default()),
            edit_form: RwSignal::new(EditItemForm::default()),
            notice_seq: StoredValue::new(0),
        }
    }

    pub fn dismiss_notice(&self) {
        self.notice.set(None);
    }
}

impl Default for MenuSignals {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuView for MenuSignals {
    fn render_category_list(&self, categories: &[Category]) {
        self.categories.set(categories.to_vec());
    }

    fn render_items(&self, category: Category, items: &[MenuItem]) {
        self.items.set(Some((category, items.to_vec())));
    }

    fn clear_items(&self) {
        self.items.set(None);
    }

    fn show_panel(&self, state: &ViewState) {
        self.state.set(state.clone());
    }

    fn notify(&self, message: &str, kind: NoticeKind) {
        self.notice_seq.update_value(|seq| *seq += 1);
        let id = self.notice_seq.get_value();
        self.notice.set(Some(Notice {
            id,
            message: message.to_string(),
            kind,
        }));

        if kind == NoticeKind::Info {
            let notice = self.notice;
            wasm_bindgen_futures::spawn_local(async move {
                TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
                notice.try_update(|current| {
                    if current.as_ref().is_some_and(|n| n.id == id) {
                        *current = None;
                    }
                });
            });
        }
    }

    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }

    fn fill_edit_form(&self, draft: &MenuItemDraft) {
        self.edit_form.set(EditItemForm::from(draft.clone()));
    }

    fn clear_add_form(&self) {
        self.add_form.update(AddItemForm::clear_text);
    }
}
