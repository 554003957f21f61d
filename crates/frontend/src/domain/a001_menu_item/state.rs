use contracts::domain::a001_menu_item::{MenuItem, MenuItemDraft, MenuItemId};
use contracts::enums::Category;

/// Item bound to the edit form: the pending update goes to `(category, id)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTarget {
    pub category: Category,
    pub id: MenuItemId,
    pub item: MenuItem,
}

/// Which panel is presented. Exactly one at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Home,
    CategoryDetail(Category),
    AddForm,
    EditForm(EditTarget),
}

impl ViewState {
    pub fn label(&self) -> &'static str {
        match self {
            ViewState::Home => "home",
            ViewState::CategoryDetail(_) => "category",
            ViewState::AddForm => "add item",
            ViewState::EditForm(_) => "edit item",
        }
    }

    /// The add button is only offered on the home panel
    pub fn shows_add_button(&self) -> bool {
        matches!(self, ViewState::Home)
    }

    pub fn shows_back_button(&self) -> bool {
        !matches!(self, ViewState::Home)
    }

    pub fn open_category(&self) -> Option<Category> {
        match self {
            ViewState::CategoryDetail(category) => Some(*category),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Outbound signals of the controller, implemented by the presentation layer
pub trait MenuView {
    /// Home buttons, in registry order
    fn render_category_list(&self, categories: &[Category]);

    /// Items of the open category; an empty slice renders "no items"
    fn render_items(&self, category: Category, items: &[MenuItem]);

    /// Drop every rendered item list
    fn clear_items(&self);

    fn show_panel(&self, state: &ViewState);

    fn notify(&self, message: &str, kind: NoticeKind);

    fn confirm(&self, prompt: &str) -> bool;

    fn fill_edit_form(&self, draft: &MenuItemDraft);

    /// Clear the text fields of the add form after a successful create
    fn clear_add_form(&self);
}
