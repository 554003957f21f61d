use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Раздел меню. Набор фиксирован, порядок вариантов задаёт порядок отображения.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Breakfast,
    Lunch,
    Dinner,
    Dessert,
    Drinks,
}

const ALL: [Category; 5] = [
    Category::Breakfast,
    Category::Lunch,
    Category::Dinner,
    Category::Dessert,
    Category::Drinks,
];

impl Category {
    /// Код раздела, он же сегмент пути в API (`/breakfast`)
    pub fn code(&self) -> &'static str {
        match self {
            Category::Breakfast => "breakfast",
            Category::Lunch => "lunch",
            Category::Dinner => "dinner",
            Category::Dessert => "dessert",
            Category::Drinks => "drinks",
        }
    }

    /// Человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Breakfast => "Breakfast",
            Category::Lunch => "Lunch",
            Category::Dinner => "Dinner",
            Category::Dessert => "Dessert",
            Category::Drinks => "Drinks",
        }
    }

    /// Подпись кнопки на главной странице
    pub fn button_label(&self) -> String {
        format!("{} Menu", self.display_name())
    }

    /// Все разделы в порядке отображения
    pub fn all() -> &'static [Category] {
        &ALL
    }

    /// Парсинг из кода
    pub fn from_code(code: &str) -> Option<Self> {
        ALL.iter().copied().find(|c| c.code() == code)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::from_code(s.trim()).ok_or_else(|| format!("Unknown menu category: {}", s))
    }
}
