//! Состояние страницы списка: хранилище, фильтры, сортировка.
//!
//! Одна реализация для товаров, продаж и выводов; различия задаются
//! реализациями `Searchable` / `Sortable` / `ListRecord` для записи.

use chrono::NaiveDate;
use contracts::shared::list::{DateBucket, FilterCriteria, SortSpec};
use leptos::prelude::*;

use super::latency::deferred;
use super::list_store::{ListRecord, ListStore};
use super::list_utils::{filter_list, sort_list, toggle_sort, Searchable, Sortable};

#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    pub store: ListStore<T>,

    // filters
    pub criteria: FilterCriteria,

    // client sorting
    pub sort: SortSpec,
    /// Сортировка по умолчанию (для сброса)
    pub default_sort: SortSpec,

    // load flag
    pub is_loaded: bool,
}

impl<T> ListState<T>
where
    T: ListRecord + Searchable + Sortable,
{
    pub fn new(store: ListStore<T>, default_sort: SortSpec) -> Self {
        Self {
            store,
            criteria: FilterCriteria::default(),
            sort: default_sort.clone(),
            default_sort,
            is_loaded: false,
        }
    }

    /// Отфильтрованные и отсортированные записи для отображения
    pub fn visible(&self, today: NaiveDate) -> Vec<T> {
        let filtered = filter_list(self.store.records(), &self.criteria, today);
        sort_list(&filtered, &self.sort)
    }

    pub fn visible_ids(&self, today: NaiveDate) -> Vec<String> {
        self.visible(today)
            .iter()
            .map(|r| r.id().to_string())
            .collect()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.criteria.query = query.into();
    }

    pub fn set_category(&mut self, field: &str, value: &str) {
        self.criteria.set_category(field, value);
    }

    pub fn set_date_bucket(&mut self, bucket: DateBucket) {
        self.criteria.date_bucket = bucket;
    }

    /// Клик по заголовку колонки
    pub fn toggle_sort(&mut self, field: &str) {
        toggle_sort(&mut self.sort, field);
    }

    pub fn reset_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.sort = self.default_sort.clone();
    }

    /// Чекбокс в заголовке: выбрать только то, что сейчас видно
    pub fn select_all_visible(&mut self, today: NaiveDate) {
        let ids = self.visible_ids(today);
        self.store.select_all(ids);
    }

    /// Состояние чекбокса в заголовке
    pub fn all_visible_selected(&self, today: NaiveDate) -> bool {
        let ids = self.visible_ids(today);
        !ids.is_empty() && ids.iter().all(|id| self.store.is_selected(id))
    }
}

/// Имитация загрузки: после задержки список помечается загруженным
pub async fn load<T>(state: RwSignal<ListState<T>>, latency_ms: u32)
where
    ListState<T>: Send + Sync + 'static,
{
    deferred(latency_ms, move || {
        state.update(|s| s.is_loaded = true);
    })
    .await
}

/// Удаление одной записи после задержки, возвращает число удалённых
pub async fn delete_one_deferred<T>(
    state: RwSignal<ListState<T>>,
    id: String,
    latency_ms: u32,
) -> usize
where
    T: ListRecord,
    ListState<T>: Send + Sync + 'static,
{
    deferred(latency_ms, move || {
        state
            .try_update(|s| s.store.delete_one(&id))
            .unwrap_or(0)
    })
    .await
}

/// Удаление выбранных записей после задержки
pub async fn delete_selected_deferred<T>(state: RwSignal<ListState<T>>, latency_ms: u32) -> usize
where
    T: ListRecord,
    ListState<T>: Send + Sync + 'static,
{
    deferred(latency_ms, move || {
        state
            .try_update(|s| s.store.delete_selected())
            .unwrap_or(0)
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list::SortDirection;
    use std::cmp::Ordering;

    #[derive(Debug, Clone, PartialEq)]
    struct Game {
        id: String,
        name: &'static str,
        status: &'static str,
    }

    impl ListRecord for Game {
        const ID_PREFIX: &'static str = "g-";

        fn id(&self) -> &str {
            &self.id
        }
    }

    impl Searchable for Game {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name]
        }

        fn get_field_value(&self, field: &str) -> Option<String> {
            match field {
                "status" => Some(self.status.to_string()),
                _ => None,
            }
        }
    }

    impl Sortable for Game {
        fn compare_by_field(&self, other: &Self, _field: &str) -> Ordering {
            self.name.cmp(other.name)
        }
    }

    fn state() -> ListState<Game> {
        let games = [
            ("g-1", "Elden Ring", "active"),
            ("g-2", "Cyberpunk 2077", "active"),
            ("g-3", "Elden Ring DLC", "draft"),
            ("g-4", "Minecraft", "active"),
        ]
        .into_iter()
        .map(|(id, name, status)| Game { id: id.to_string(), name, status })
        .collect();
        ListState::new(ListStore::seed(games), SortSpec::asc("name"))
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 4, 22).unwrap()
    }

    #[test]
    fn test_visible_applies_filter_then_sort() {
        let mut s = state();
        s.set_query("ring");
        s.sort.direction = SortDirection::Desc;
        assert_eq!(s.visible_ids(today()), vec!["g-3", "g-1"]);
        assert_eq!(s.store.len(), 4);
    }

    #[test]
    fn test_select_all_visible_only() {
        let mut s = state();
        s.set_category("status", "active");
        s.select_all_visible(today());
        let selected: Vec<_> = s.store.selected().iter().cloned().collect();
        assert_eq!(selected, vec!["g-1", "g-2", "g-4"]);
        assert!(s.all_visible_selected(today()));

        s.set_category("status", "all");
        assert!(!s.all_visible_selected(today()));
    }

    #[test]
    fn test_reset_filters_restores_default_sort() {
        let mut s = state();
        s.set_query("x");
        s.toggle_sort("name");
        s.reset_filters();
        assert_eq!(s.criteria, FilterCriteria::default());
        assert_eq!(s.sort, SortSpec::asc("name"));
    }

    #[test]
    fn test_deferred_operations_through_signal() {
        use futures::executor::block_on;

        let signal = RwSignal::new(state());
        signal.update(|s| s.store.select_all(["g-1", "g-2"]));

        assert_eq!(block_on(delete_selected_deferred(signal, 0)), 2);
        assert_eq!(block_on(delete_one_deferred(signal, "g-9".to_string(), 0)), 0);
        block_on(load(signal, 0));

        signal.with_untracked(|s| {
            assert!(s.is_loaded);
            assert_eq!(s.store.len(), 2);
            assert!(s.store.selected().is_empty());
        });
    }

    #[test]
    fn test_select_then_delete_one() {
        let mut s = state();
        s.store.select_all(["g-3", "g-4"]);
        s.store.delete_one("g-3");
        let selected: Vec<_> = s.store.selected().iter().cloned().collect();
        assert_eq!(selected, vec!["g-4"]);
    }
}
