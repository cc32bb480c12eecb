use contracts::domain::a003_withdrawal::{PaymentMethod, SellerBalance, Withdrawal};
use leptos::prelude::*;

use super::super::request::WithdrawalForm;
use super::super::seed;
use crate::shared::config::DashboardConfig;
use crate::shared::list_state::ListState;
use crate::shared::list_store::ListStore;

pub type WithdrawalsListState = ListState<Withdrawal>;

/// Страница выводов: история, баланс и платёжные методы
#[derive(Clone, Debug, PartialEq)]
pub struct WithdrawalsPageState {
    pub list: WithdrawalsListState,
    pub balance: SellerBalance,
    pub payment_methods: Vec<PaymentMethod>,
    /// Выбранный в диалоге платёжный метод
    pub selected_payment_method: Option<String>,
}

impl WithdrawalsPageState {
    pub fn default_payment_method(&self) -> Option<&PaymentMethod> {
        self.payment_methods
            .iter()
            .find(|pm| pm.is_default)
            .or_else(|| self.payment_methods.first())
    }

    /// Выбор метода в диалоге; неизвестный id игнорируется
    pub fn select_payment_method(&mut self, id: &str) -> bool {
        if !self.payment_methods.iter().any(|pm| pm.id == id) {
            return false;
        }
        self.selected_payment_method = Some(id.to_string());
        true
    }

    /// Форма заявки с методом, выбранным в диалоге
    pub fn withdrawal_form(&self, amount: impl Into<String>) -> WithdrawalForm {
        WithdrawalForm {
            amount: amount.into(),
            payment_method_id: self.selected_payment_method.clone(),
        }
    }
}

pub fn initial_state(config: &DashboardConfig) -> WithdrawalsPageState {
    let payment_methods = seed::payment_methods();
    let selected_payment_method = payment_methods.first().map(|pm| pm.id.clone());
    WithdrawalsPageState {
        list: ListState::new(
            ListStore::seed(seed::withdrawals()),
            config.lists.withdrawals.clone(),
        ),
        balance: SellerBalance {
            available: config.balance.available,
            pending: config.balance.pending,
        },
        payment_methods,
        selected_payment_method,
    }
}

pub fn create_state(config: &DashboardConfig) -> RwSignal<WithdrawalsPageState> {
    RwSignal::new(initial_state(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = initial_state(&DashboardConfig::default());
        assert_eq!(state.list.store.len(), 5);
        assert_eq!(state.selected_payment_method.as_deref(), Some("pm-1"));
        assert_eq!(state.default_payment_method().map(|pm| pm.id.as_str()), Some("pm-1"));
        assert!((state.balance.total() - 2450.75).abs() < 1e-9);
    }

    #[test]
    fn test_form_uses_selected_payment_method() {
        let mut state = initial_state(&DashboardConfig::default());
        let form = state.withdrawal_form("100");
        assert_eq!(form.amount, "100");
        assert_eq!(form.payment_method_id.as_deref(), Some("pm-1"));

        assert!(state.select_payment_method("pm-2"));
        assert!(!state.select_payment_method("pm-9"));
        assert_eq!(state.withdrawal_form("5").payment_method_id.as_deref(), Some("pm-2"));
    }
}
