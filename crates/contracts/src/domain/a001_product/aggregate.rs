use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Статус товара в каталоге продавца
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Active,
    #[default]
    Draft,
    Archived,
}

impl ProductStatus {
    /// Код статуса (совпадает со значением фильтра)
    pub fn code(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::Draft => "draft",
            ProductStatus::Archived => "archived",
        }
    }

    /// Человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            ProductStatus::Active => "Active",
            ProductStatus::Draft => "Draft",
            ProductStatus::Archived => "Archived",
        }
    }

    pub fn all() -> Vec<ProductStatus> {
        vec![
            ProductStatus::Active,
            ProductStatus::Draft,
            ProductStatus::Archived,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "active" => Some(ProductStatus::Active),
            "draft" => Some(ProductStatus::Draft),
            "archived" => Some(ProductStatus::Archived),
            _ => None,
        }
    }
}

/// Цифровой товар продавца (ключ, подписка, пополнение кошелька)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Идентификатор вида "prod-7"
    pub id: String,
    pub name: String,
    /// Платформа активации (Steam, Epic Games, Windows ...)
    pub platform: String,
    /// Цена (USD)
    pub price: f64,
    /// Скидка в процентах
    pub discount: u8,
    /// Остаток, для цифровых товаров обычно "Unlimited"
    pub stock: String,
    pub status: ProductStatus,
    /// Количество продаж
    pub sales: u32,
    /// Дата добавления в каталог (YYYY-MM-DD)
    pub date_added: NaiveDate,
}

impl Product {
    /// Цена с учётом скидки
    pub fn discounted_price(&self) -> f64 {
        self.price * (100.0 - f64::from(self.discount)) / 100.0
    }
}

/// Данные формы создания товара (как их вводит пользователь)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub platform: String,
    pub category: String,
    /// Цена в виде введённой строки
    pub price: String,
    /// Скидка в виде введённой строки, пустая = 0
    pub discount: String,
    pub status: ProductStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes_roundtrip() {
        for status in ProductStatus::all() {
            assert_eq!(ProductStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(ProductStatus::from_code("deleted"), None);
    }

    #[test]
    fn test_product_wire_format() {
        let json = r#"{
            "id": "prod-1",
            "name": "Elden Ring",
            "platform": "Steam",
            "price": 59.99,
            "discount": 15,
            "stock": "Unlimited",
            "status": "active",
            "sales": 245,
            "dateAdded": "2023-01-15"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.status, ProductStatus::Active);
        assert_eq!(
            product.date_added,
            NaiveDate::from_ymd_opt(2023, 1, 15).unwrap()
        );
        assert!((product.discounted_price() - 50.9915).abs() < 1e-9);
    }
}
