//! Общие типы списков: критерии фильтрации и параметры сортировки.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Значение фильтра, означающее "без ограничения"
pub const ALL: &str = "all";

/// Направление сортировки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Применяет направление к результату компаратора
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Asc
    }
}

/// Поле и направление сортировки
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }
}

/// Период для фильтра по дате
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DateBucket {
    #[default]
    All,
    Today,
    Yesterday,
    ThisWeek,
    ThisMonth,
    LastMonth,
}

impl DateBucket {
    pub fn code(&self) -> &'static str {
        match self {
            DateBucket::All => ALL,
            DateBucket::Today => "today",
            DateBucket::Yesterday => "yesterday",
            DateBucket::ThisWeek => "thisWeek",
            DateBucket::ThisMonth => "thisMonth",
            DateBucket::LastMonth => "lastMonth",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DateBucket::All => "All Time",
            DateBucket::Today => "Today",
            DateBucket::Yesterday => "Yesterday",
            DateBucket::ThisWeek => "This Week",
            DateBucket::ThisMonth => "This Month",
            DateBucket::LastMonth => "Last Month",
        }
    }

    pub fn all() -> Vec<DateBucket> {
        vec![
            DateBucket::All,
            DateBucket::Today,
            DateBucket::Yesterday,
            DateBucket::ThisWeek,
            DateBucket::ThisMonth,
            DateBucket::LastMonth,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            ALL => Some(DateBucket::All),
            "today" => Some(DateBucket::Today),
            "yesterday" => Some(DateBucket::Yesterday),
            "thisWeek" => Some(DateBucket::ThisWeek),
            "thisMonth" => Some(DateBucket::ThisMonth),
            "lastMonth" => Some(DateBucket::LastMonth),
            _ => None,
        }
    }
}

/// Значение категориального фильтра (статус, платформа).
///
/// На проводе это строка; "all" означает отсутствие ограничения.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn from_value(value: &str) -> Self {
        if value == ALL {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    /// Проверяет значение поля записи; отсутствующее поле не проходит
    pub fn accepts(&self, value: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(expected) => value == Some(expected.as_str()),
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        CategoryFilter::from_value(&value)
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        match value {
            CategoryFilter::All => ALL.to_string(),
            CategoryFilter::Only(v) => v,
        }
    }
}

/// Набор активных предикатов списка (объединяются через AND)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Поисковая строка, регистр не важен
    #[serde(default)]
    pub query: String,
    /// Имя поля -> допустимое значение
    #[serde(default)]
    pub categories: BTreeMap<String, CategoryFilter>,
    #[serde(default)]
    pub date_bucket: DateBucket,
}

impl FilterCriteria {
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, field: impl Into<String>, value: &str) -> Self {
        self.set_category(field, value);
        self
    }

    pub fn with_date_bucket(mut self, bucket: DateBucket) -> Self {
        self.date_bucket = bucket;
        self
    }

    /// Устанавливает значение фильтра; "all" снимает ограничение
    pub fn set_category(&mut self, field: impl Into<String>, value: &str) {
        let field = field.into();
        match CategoryFilter::from_value(value) {
            CategoryFilter::All => {
                self.categories.remove(&field);
            }
            filter => {
                self.categories.insert(field, filter);
            }
        }
    }

    pub fn category(&self, field: &str) -> &CategoryFilter {
        static ALL_FILTER: CategoryFilter = CategoryFilter::All;
        self.categories.get(field).unwrap_or(&ALL_FILTER)
    }

    /// Есть ли хоть один активный предикат
    pub fn is_active(&self) -> bool {
        !self.query.is_empty()
            || self.categories.values().any(|c| !c.is_all())
            || self.date_bucket != DateBucket::All
    }
}
