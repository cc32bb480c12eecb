use chrono::NaiveDate;
use contracts::domain::a002_sale::Sale;
use leptos::prelude::*;

use super::super::seed;
use super::SalesSummary;
use crate::shared::config::DashboardConfig;
use crate::shared::list_state::ListState;
use crate::shared::list_store::ListStore;

pub type SalesListState = ListState<Sale>;

pub fn initial_state(config: &DashboardConfig) -> SalesListState {
    ListState::new(ListStore::seed(seed::sales()), config.lists.sales.clone())
}

pub fn create_state(config: &DashboardConfig) -> RwSignal<SalesListState> {
    RwSignal::new(initial_state(config))
}

pub fn summary(state: &SalesListState, today: NaiveDate) -> SalesSummary {
    SalesSummary::from_sales(&state.visible(today))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list::DateBucket;

    #[test]
    fn test_summary_follows_filters() {
        let today = NaiveDate::from_ymd_opt(2023, 4, 22).unwrap();
        let mut state = initial_state(&DashboardConfig::default());
        assert_eq!(summary(&state, today).count, 10);

        state.set_date_bucket(DateBucket::Today);
        let s = summary(&state, today);
        assert_eq!(s.count, 1);
        assert!((s.total_amount - 59.99).abs() < 1e-9);
    }

    #[test]
    fn test_default_order_newest_first() {
        let today = NaiveDate::from_ymd_opt(2023, 4, 22).unwrap();
        let state = initial_state(&DashboardConfig::default());
        let ids = state.visible_ids(today);
        assert_eq!(ids.first().map(String::as_str), Some("sale-1"));
        assert_eq!(ids.last().map(String::as_str), Some("sale-10"));
    }
}
