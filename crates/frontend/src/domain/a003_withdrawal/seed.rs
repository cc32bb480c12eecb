use chrono::NaiveDate;
use contracts::domain::a003_withdrawal::{
    PaymentMethod, PaymentMethodKind, Withdrawal, WithdrawalStatus,
};

fn withdrawal(
    n: u32,
    amount: f64,
    method: &str,
    status: WithdrawalStatus,
    (y, m, d): (i32, u32, u32),
    reason: Option<&str>,
) -> Withdrawal {
    Withdrawal {
        id: format!("w-{}", n),
        amount,
        method: method.to_string(),
        status,
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        reference: format!("WD-{}", 12344 + n),
        reason: reason.map(str::to_string),
    }
}

/// История выводов при открытии страницы
pub fn withdrawals() -> Vec<Withdrawal> {
    use WithdrawalStatus::*;
    vec![
        withdrawal(1, 500.0, "Bank Transfer", Completed, (2023, 4, 10), None),
        withdrawal(2, 750.0, "PayPal", Processing, (2023, 4, 22), None),
        withdrawal(3, 1200.0, "Bank Transfer", Completed, (2023, 3, 15), None),
        withdrawal(4, 350.0, "PayPal", Completed, (2023, 3, 1), None),
        withdrawal(
            5,
            900.0,
            "Bank Transfer",
            Rejected,
            (2023, 2, 20),
            Some("Invalid bank account details"),
        ),
    ]
}

pub fn payment_methods() -> Vec<PaymentMethod> {
    vec![
        PaymentMethod {
            id: "pm-1".to_string(),
            kind: PaymentMethodKind::Bank,
            name: "Bank of America".to_string(),
            details: "Account ending in 4567".to_string(),
            is_default: true,
        },
        PaymentMethod {
            id: "pm-2".to_string(),
            kind: PaymentMethodKind::Paypal,
            name: "PayPal".to_string(),
            details: "john.doe@example.com".to_string(),
            is_default: false,
        },
    ]
}
