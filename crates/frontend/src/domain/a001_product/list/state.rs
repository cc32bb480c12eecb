use contracts::domain::a001_product::Product;
use leptos::prelude::*;

use super::super::seed;
use crate::shared::config::DashboardConfig;
use crate::shared::list_state::ListState;
use crate::shared::list_store::ListStore;

pub type ProductsListState = ListState<Product>;

pub fn initial_state(config: &DashboardConfig) -> ProductsListState {
    ListState::new(
        ListStore::seed(seed::products()),
        config.lists.products.clone(),
    )
}

pub fn create_state(config: &DashboardConfig) -> RwSignal<ProductsListState> {
    RwSignal::new(initial_state(config))
}
