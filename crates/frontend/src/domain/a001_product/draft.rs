//! Создание товара из формы "Add Product".

use chrono::NaiveDate;
use contracts::domain::a001_product::{Product, ProductDraft};
use thiserror::Error;

use crate::shared::list_store::ListStore;

/// Ошибки формы товара
#[derive(Debug, Error, PartialEq)]
pub enum ProductDraftError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Invalid discount: {0}")]
    InvalidDiscount(String),
}

/// Проверенные значения формы
#[derive(Debug, Clone, PartialEq)]
pub struct ValidDraft {
    pub price: f64,
    pub discount: u8,
}

pub fn validate(draft: &ProductDraft) -> Result<ValidDraft, ProductDraftError> {
    let required = [
        ("name", &draft.name),
        ("description", &draft.description),
        ("platform", &draft.platform),
        ("price", &draft.price),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(ProductDraftError::MissingField(*field));
    }

    let price = draft
        .price
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
        .ok_or_else(|| ProductDraftError::InvalidPrice(draft.price.clone()))?;

    let discount = match draft.discount.trim() {
        "" => 0,
        raw => raw
            .parse::<u8>()
            .ok()
            .filter(|d| *d <= 100)
            .ok_or_else(|| ProductDraftError::InvalidDiscount(draft.discount.clone()))?,
    };

    Ok(ValidDraft { price, discount })
}

/// Проверяет форму и добавляет товар в начало каталога
pub fn create_product(
    store: &mut ListStore<Product>,
    draft: &ProductDraft,
    today: NaiveDate,
) -> Result<Product, ProductDraftError> {
    let valid = match validate(draft) {
        Ok(valid) => valid,
        Err(err) => {
            log::warn!("Product form rejected: {}", err);
            return Err(err);
        }
    };

    let product = store.insert_front(|id| Product {
        id,
        name: draft.name.trim().to_string(),
        platform: draft.platform.trim().to_string(),
        price: valid.price,
        discount: valid.discount,
        stock: "Unlimited".to_string(),
        status: draft.status,
        sales: 0,
        date_added: today,
    });
    Ok(product.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::seed;
    use contracts::domain::a001_product::ProductStatus;

    fn draft() -> ProductDraft {
        ProductDraft {
            name: "Hades II".to_string(),
            description: "Roguelike".to_string(),
            platform: "Steam".to_string(),
            category: "games".to_string(),
            price: "29.99".to_string(),
            discount: String::new(),
            status: ProductStatus::Draft,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 4, 22).unwrap()
    }

    #[test]
    fn test_create_product_inserts_at_front() {
        let mut store = ListStore::seed(seed::products());
        let product = create_product(&mut store, &draft(), today()).unwrap();

        assert_eq!(product.id, "prod-8");
        assert_eq!(product.discount, 0);
        assert_eq!(product.sales, 0);
        assert_eq!(product.date_added, today());
        assert_eq!(store.records()[0].id, "prod-8");
        assert_eq!(store.len(), 8);
    }

    #[test]
    fn test_missing_fields_are_reported_in_form_order() {
        let mut d = draft();
        d.description = "  ".to_string();
        d.price.clear();
        assert_eq!(validate(&d), Err(ProductDraftError::MissingField("description")));
    }

    #[test]
    fn test_invalid_price_and_discount() {
        let mut d = draft();
        d.price = "free".to_string();
        assert_eq!(validate(&d), Err(ProductDraftError::InvalidPrice("free".to_string())));

        let mut d = draft();
        d.price = "-1".to_string();
        assert!(matches!(validate(&d), Err(ProductDraftError::InvalidPrice(_))));

        let mut d = draft();
        d.discount = "150".to_string();
        assert_eq!(validate(&d), Err(ProductDraftError::InvalidDiscount("150".to_string())));
    }

    #[test]
    fn test_rejected_draft_leaves_store_untouched() {
        let mut store = ListStore::seed(seed::products());
        let mut d = draft();
        d.name.clear();
        assert!(create_product(&mut store, &d, today()).is_err());
        assert_eq!(store.len(), 7);
    }
}
