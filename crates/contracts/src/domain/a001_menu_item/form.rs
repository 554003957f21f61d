use super::aggregate::MenuItemDraft;
use crate::enums::Category;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Поле формы добавления/редактирования
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Description,
    Image,
    Category,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Description => "description",
            FormField::Image => "image",
            FormField::Category => "category",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Локальная ошибка проверки формы. До сервера не доходит.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields. Missing: {}", join_fields(.0))]
    MissingFields(Vec<FormField>),

    #[error("Unknown menu category: {0}")]
    UnknownCategory(String),
}

fn join_fields(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(FormField::label)
        .collect::<Vec<_>>()
        .join(", ")
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn check_text_fields(
    name: &str,
    description: &str,
    image: &str,
    missing: &mut Vec<FormField>,
) {
    if is_blank(name) {
        missing.push(FormField::Name);
    }
    if is_blank(description) {
        missing.push(FormField::Description);
    }
    if is_blank(image) {
        missing.push(FormField::Image);
    }
}

/// Значения формы добавления блюда. `category` содержит код раздела из выпадающего списка.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddItemForm {
    pub name: String,
    pub description: String,
    pub image: String,
    pub category: String,
}

impl AddItemForm {
    /// Проверка заполненности всех четырёх полей
    pub fn validate(&self) -> Result<(Category, MenuItemDraft), ValidationError> {
        let mut missing = Vec::new();
        check_text_fields(&self.name, &self.description, &self.image, &mut missing);
        if is_blank(&self.category) {
            missing.push(FormField::Category);
        }
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        let category = Category::from_code(self.category.trim())
            .ok_or_else(|| ValidationError::UnknownCategory(self.category.clone()))?;

        Ok((
            category,
            MenuItemDraft {
                name: self.name.clone(),
                description: self.description.clone(),
                image: self.image.clone(),
            },
        ))
    }

    /// Очистить текстовые поля, оставив выбранный раздел
    pub fn clear_text(&mut self) {
        self.name.clear();
        self.description.clear();
        self.image.clear();
    }
}

/// Значения формы редактирования. Раздел и id берутся из привязанной цели.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditItemForm {
    pub name: String,
    pub description: String,
    pub image: String,
}

impl EditItemForm {
    pub fn validate(&self) -> Result<MenuItemDraft, ValidationError> {
        let mut missing = Vec::new();
        check_text_fields(&self.name, &self.description, &self.image, &mut missing);
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        Ok(MenuItemDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
        })
    }
}

impl From<MenuItemDraft> for EditItemForm {
    fn from(draft: MenuItemDraft) -> Self {
        Self {
            name: draft.name,
            description: draft.description,
            image: draft.image,
        }
    }
}
