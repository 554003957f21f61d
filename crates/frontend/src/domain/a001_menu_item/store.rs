use contracts::domain::a001_menu_item::{MenuItem, MenuItemId};
use contracts::enums::Category;
use std::collections::HashMap;

/// Result of one successful aggregate load. Holds an entry for every category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuSnapshot {
    items: HashMap<Category, Vec<MenuItem>>,
}

impl MenuSnapshot {
    pub fn from_loaded(loaded: impl IntoIterator<Item = (Category, Vec<MenuItem>)>) -> Self {
        let mut items: HashMap<Category, Vec<MenuItem>> = Category::all()
            .iter()
            .map(|category| (*category, Vec::new()))
            .collect();
        for (category, list) in loaded {
            items.insert(category, list);
        }
        Self { items }
    }

    pub fn items(&self, category: Category) -> &[MenuItem] {
        self.items.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, category: Category) -> bool {
        self.items.contains_key(&category)
    }

    pub fn total_items(&self) -> usize {
        self.items.values().map(Vec::len).sum()
    }
}

/// Issued at the start of every reload; snapshots are installed newest-ticket-wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

/// In-memory menu, replaced wholesale by each successful aggregate load
#[derive(Debug, Default)]
pub struct MenuStore {
    snapshot: Option<MenuSnapshot>,
    issued: u64,
    installed: u64,
}

impl MenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued += 1;
        LoadTicket(self.issued)
    }

    /// Installs `snapshot` unless a load issued later has already been installed.
    /// Returns whether the snapshot was installed.
    pub fn install(&mut self, ticket: LoadTicket, snapshot: MenuSnapshot) -> bool {
        if ticket.0 <= self.installed {
            return false;
        }
        self.installed = ticket.0;
        self.snapshot = Some(snapshot);
        true
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn snapshot(&self) -> Option<&MenuSnapshot> {
        self.snapshot.as_ref()
    }

    /// Items of `category`; empty before the first successful load
    pub fn items(&self, category: Category) -> &[MenuItem] {
        self.snapshot
            .as_ref()
            .map(|snapshot| snapshot.items(category))
            .unwrap_or(&[])
    }

    pub fn find(&self, category: Category, id: MenuItemId) -> Option<&MenuItem> {
        self.items(category).iter().find(|item| item.id == Some(id))
    }

    /// Categories with working buttons: the whole registry once loaded, none before
    pub fn categories(&self) -> &'static [Category] {
        if self.is_loaded() {
            Category::all()
        } else {
            &[]
        }
    }
}
