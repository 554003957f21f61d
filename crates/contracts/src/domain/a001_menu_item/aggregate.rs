use serde::{Deserialize, Serialize};
use std::fmt;

/// Изображение, которое показывается, если у блюда нет своего
pub const DEFAULT_IMAGE: &str = "default-image.jpg";

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор блюда. Назначается только сервером.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(pub i64);

impl MenuItemId {
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Блюдо. Раздел меню не хранится в записи: он определяется тем,
/// в какой коллекции API блюдо лежит.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<MenuItemId>,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl MenuItem {
    /// Ссылка на изображение с подстановкой `DEFAULT_IMAGE`
    pub fn image_or_default(&self) -> &str {
        match self.image.as_deref() {
            Some(image) if !image.trim().is_empty() => image,
            _ => DEFAULT_IMAGE,
        }
    }

    /// Текущие значения полей для формы редактирования
    pub fn to_draft(&self) -> MenuItemDraft {
        MenuItemDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            image: self.image.clone().unwrap_or_default(),
        }
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Тело запросов POST /{category} и PUT /{category}/{id}
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemDraft {
    pub name: String,
    pub description: String,
    pub image: String,
}
