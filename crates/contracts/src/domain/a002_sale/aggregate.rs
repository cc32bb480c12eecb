use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Статус продажи
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaleStatus {
    Completed,
    Pending,
    Refunded,
}

impl SaleStatus {
    pub fn code(&self) -> &'static str {
        match self {
            SaleStatus::Completed => "completed",
            SaleStatus::Pending => "pending",
            SaleStatus::Refunded => "refunded",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SaleStatus::Completed => "Completed",
            SaleStatus::Pending => "Pending",
            SaleStatus::Refunded => "Refunded",
        }
    }

    pub fn all() -> Vec<SaleStatus> {
        vec![SaleStatus::Completed, SaleStatus::Pending, SaleStatus::Refunded]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "completed" => Some(SaleStatus::Completed),
            "pending" => Some(SaleStatus::Pending),
            "refunded" => Some(SaleStatus::Refunded),
            _ => None,
        }
    }
}

/// Продажа товара покупателю
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    /// Идентификатор вида "sale-3"
    pub id: String,
    /// Номер заказа (ORD-12345)
    pub order_id: String,
    /// Название проданного товара
    pub product: String,
    pub platform: String,
    /// Email покупателя
    pub customer: String,
    pub date: NaiveDate,
    /// Сумма продажи (USD)
    pub amount: f64,
    pub status: SaleStatus,
}
