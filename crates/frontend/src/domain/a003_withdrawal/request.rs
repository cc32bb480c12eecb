//! Заявка на вывод средств.
//!
//! Проверка суммы и платёжного метода выполняется до изменения
//! хранилища; отклонённая заявка ничего не меняет.

use chrono::NaiveDate;
use contracts::domain::a003_withdrawal::{
    PaymentMethod, SellerBalance, Withdrawal, WithdrawalStatus,
};
use leptos::prelude::*;
use thiserror::Error;
use uuid::Uuid;

use super::list::state::WithdrawalsPageState;
use crate::shared::latency::deferred;
use crate::shared::list_store::ListStore;

/// Ошибки заявки на вывод
#[derive(Debug, Error, PartialEq)]
pub enum WithdrawalError {
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    #[error("Insufficient funds: requested {requested:.2}, available {available:.2}")]
    InsufficientFunds { requested: f64, available: f64 },

    #[error("Payment method required")]
    PaymentMethodRequired,

    #[error("Withdrawals page is no longer open")]
    PageClosed,
}

/// Данные диалога вывода
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WithdrawalForm {
    /// Сумма в виде введённой строки
    pub amount: String,
    pub payment_method_id: Option<String>,
}

/// Проверяет форму; порядок проверок: сумма, баланс, метод
pub fn validate<'a>(
    form: &WithdrawalForm,
    balance: &SellerBalance,
    methods: &'a [PaymentMethod],
) -> Result<(f64, &'a PaymentMethod), WithdrawalError> {
    let amount = form
        .amount
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|a| a.is_finite() && *a > 0.0)
        .ok_or_else(|| WithdrawalError::InvalidAmount(form.amount.clone()))?;

    if amount > balance.available {
        return Err(WithdrawalError::InsufficientFunds {
            requested: amount,
            available: balance.available,
        });
    }

    let method = form
        .payment_method_id
        .as_deref()
        .and_then(|id| methods.iter().find(|pm| pm.id == id))
        .ok_or(WithdrawalError::PaymentMethodRequired)?;

    Ok((amount, method))
}

/// Случайный референс вида WD-12345
pub fn generate_reference() -> String {
    let n = 10_000 + (Uuid::new_v4().as_u128() % 90_000);
    format!("WD-{}", n)
}

/// Создаёт заявку: запись в начале истории, перенос суммы в pending
pub fn request_withdrawal(
    store: &mut ListStore<Withdrawal>,
    balance: &mut SellerBalance,
    methods: &[PaymentMethod],
    form: &WithdrawalForm,
    today: NaiveDate,
) -> Result<Withdrawal, WithdrawalError> {
    let (amount, method) = match validate(form, balance, methods) {
        Ok(valid) => valid,
        Err(err) => {
            log::warn!("Withdrawal request rejected: {}", err);
            return Err(err);
        }
    };

    let withdrawal = store
        .insert_front(|id| Withdrawal {
            id,
            amount,
            method: method.kind.withdrawal_method().to_string(),
            status: WithdrawalStatus::Processing,
            date: today,
            reference: generate_reference(),
            reason: None,
        })
        .clone();

    balance.available -= amount;
    balance.pending += amount;
    log::info!(
        "Withdrawal {} requested: {:.2} via {}",
        withdrawal.reference,
        amount,
        withdrawal.method
    );

    Ok(withdrawal)
}

/// Заявка из диалога страницы после имитации задержки сети.
/// Неверная форма отклоняется сразу, без задержки и без записи в сигнал.
pub async fn request_withdrawal_deferred(
    state: RwSignal<WithdrawalsPageState>,
    form: WithdrawalForm,
    today: NaiveDate,
    latency_ms: u32,
) -> Result<Withdrawal, WithdrawalError> {
    let checked = state
        .try_with_untracked(|s| validate(&form, &s.balance, &s.payment_methods).map(|_| ()))
        .unwrap_or(Err(WithdrawalError::PageClosed));
    if let Err(err) = checked {
        log::warn!("Withdrawal request rejected: {}", err);
        return Err(err);
    }

    deferred(latency_ms, move || {
        state
            .try_update(|s| {
                request_withdrawal(
                    &mut s.list.store,
                    &mut s.balance,
                    &s.payment_methods,
                    &form,
                    today,
                )
            })
            .unwrap_or(Err(WithdrawalError::PageClosed))
    })
    .await
}
