pub mod state;

use chrono::NaiveDate;
use contracts::domain::a001_product::Product;
use std::cmp::Ordering;

use crate::shared::list_store::ListRecord;
use crate::shared::list_utils::{compare_amount, compare_text, Searchable, Sortable};

impl ListRecord for Product {
    const ID_PREFIX: &'static str = "prod-";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.code().to_string()),
            "platform" => Some(self.platform.clone()),
            _ => None,
        }
    }

    fn date_value(&self) -> Option<NaiveDate> {
        Some(self.date_added)
    }
}

impl Sortable for Product {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => compare_text(&self.name, &other.name),
            "price" => compare_amount(self.price, other.price),
            "sales" => self.sales.cmp(&other.sales),
            _ => self.date_added.cmp(&other.date_added),
        }
    }
}
