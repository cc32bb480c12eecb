pub mod state;

use chrono::NaiveDate;
use contracts::domain::a002_sale::Sale;
use std::cmp::Ordering;

use crate::shared::list_store::ListRecord;
use crate::shared::list_utils::{compare_amount, compare_text, Searchable, Sortable};

impl ListRecord for Sale {
    const ID_PREFIX: &'static str = "sale-";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Sale {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.product.as_str(),
            self.order_id.as_str(),
            self.customer.as_str(),
        ]
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.code().to_string()),
            "platform" => Some(self.platform.clone()),
            _ => None,
        }
    }

    fn date_value(&self) -> Option<NaiveDate> {
        Some(self.date)
    }
}

impl Sortable for Sale {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "product" => compare_text(&self.product, &other.product),
            "amount" => compare_amount(self.amount, other.amount),
            "orderId" => compare_text(&self.order_id, &other.order_id),
            _ => self.date.cmp(&other.date),
        }
    }
}

/// Итоги по видимым продажам (карточка над таблицей)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SalesSummary {
    pub count: usize,
    pub total_amount: f64,
}

impl SalesSummary {
    pub fn from_sales(sales: &[Sale]) -> Self {
        Self {
            count: sales.len(),
            total_amount: sales.iter().map(|s| s.amount).sum(),
        }
    }

    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total_amount / self.count as f64
        }
    }
}
