pub mod state;

use chrono::NaiveDate;
use contracts::domain::a003_withdrawal::Withdrawal;
use std::cmp::Ordering;

use crate::shared::list_store::ListRecord;
use crate::shared::list_utils::{compare_amount, compare_text, Searchable, Sortable};

impl ListRecord for Withdrawal {
    const ID_PREFIX: &'static str = "w-";

    fn id(&self) -> &str {
        &self.id
    }
}

impl Searchable for Withdrawal {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.reference.as_str(), self.method.as_str()]
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            "status" => Some(self.status.code().to_string()),
            "method" => Some(self.method.clone()),
            _ => None,
        }
    }

    fn date_value(&self) -> Option<NaiveDate> {
        Some(self.date)
    }
}

impl Sortable for Withdrawal {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "amount" => compare_amount(self.amount, other.amount),
            "method" => compare_text(&self.method, &other.method),
            "status" => self.status.code().cmp(other.status.code()),
            _ => self.date.cmp(&other.date),
        }
    }
}
