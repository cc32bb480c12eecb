use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Статус заявки на вывод средств
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WithdrawalStatus {
    Completed,
    Processing,
    Rejected,
}

impl WithdrawalStatus {
    pub fn code(&self) -> &'static str {
        match self {
            WithdrawalStatus::Completed => "completed",
            WithdrawalStatus::Processing => "processing",
            WithdrawalStatus::Rejected => "rejected",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WithdrawalStatus::Completed => "Completed",
            WithdrawalStatus::Processing => "Processing",
            WithdrawalStatus::Rejected => "Rejected",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "completed" => Some(WithdrawalStatus::Completed),
            "processing" => Some(WithdrawalStatus::Processing),
            "rejected" => Some(WithdrawalStatus::Rejected),
            _ => None,
        }
    }
}

/// Вывод средств продавца
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Withdrawal {
    /// Идентификатор вида "w-2"
    pub id: String,
    pub amount: f64,
    /// Способ вывода ("Bank Transfer", "PayPal")
    pub method: String,
    pub status: WithdrawalStatus,
    pub date: NaiveDate,
    /// Референс платежа (WD-12345)
    pub reference: String,
    /// Причина отказа, только для rejected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Тип платёжного метода
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethodKind {
    Bank,
    Paypal,
}

impl PaymentMethodKind {
    /// Название способа вывода, которое попадает в запись Withdrawal
    pub fn withdrawal_method(&self) -> &'static str {
        match self {
            PaymentMethodKind::Bank => "Bank Transfer",
            PaymentMethodKind::Paypal => "PayPal",
        }
    }
}

/// Платёжный метод продавца
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: PaymentMethodKind,
    pub name: String,
    pub details: String,
    pub is_default: bool,
}

/// Баланс продавца
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerBalance {
    /// Доступно к выводу
    pub available: f64,
    /// В обработке
    pub pending: f64,
}

impl SellerBalance {
    pub fn total(&self) -> f64 {
        self.available + self.pending
    }
}
