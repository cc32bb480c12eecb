/// Универсальные утилиты для работы со списками (поиск, фильтры, сортировка)
use chrono::NaiveDate;
use contracts::shared::list::{DateBucket, FilterCriteria, SortDirection, SortSpec};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::date_utils::in_bucket;

/// Trait для типов данных, поддерживающих поиск и фильтрацию
pub trait Searchable {
    /// Текстовые поля, по которым идёт поиск
    fn search_fields(&self) -> Vec<&str>;

    /// Проверяет, соответствует ли объект поисковому запросу (без учёта регистра)
    fn matches_filter(&self, filter: &str) -> bool {
        if filter.is_empty() {
            return true;
        }
        let filter_lower = filter.to_lowercase();
        self.search_fields()
            .iter()
            .any(|value| value.to_lowercase().contains(&filter_lower))
    }

    /// Возвращает значение категориального поля (status, platform ...)
    fn get_field_value(&self, field: &str) -> Option<String>;

    /// Дата записи для фильтра по периоду
    fn date_value(&self) -> Option<NaiveDate> {
        None
    }
}

/// Trait для типов данных, поддерживающих сортировку
pub trait Sortable {
    /// Сравнивает два объекта по указанному полю.
    /// Неизвестное поле сравнивается по полю сортировки по умолчанию.
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Базовые буквы строки: NFD без диакритики, нижний регистр
fn collation_key(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Сравнение строк для сортировки, как в браузерном `localeCompare`:
/// базовые буквы, затем диакритика, затем регистр (строчные раньше)
pub fn compare_text(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| {
            let accents = |s: &str| s.to_lowercase().nfd().collect::<String>();
            accents(a).cmp(&accents(b))
        })
        .then_with(|| {
            a.chars()
                .map(char::is_uppercase)
                .cmp(b.chars().map(char::is_uppercase))
        })
        .then_with(|| a.cmp(b))
}

/// Сравнение сумм; NaN уходит в конец
pub fn compare_amount(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

/// Проверяет запись по всем активным предикатам
pub fn matches_criteria<T: Searchable>(
    item: &T,
    criteria: &FilterCriteria,
    today: NaiveDate,
) -> bool {
    if !item.matches_filter(&criteria.query) {
        return false;
    }

    let categories_ok = criteria
        .categories
        .iter()
        .all(|(field, filter)| filter.accepts(item.get_field_value(field).as_deref()));
    if !categories_ok {
        return false;
    }

    match criteria.date_bucket {
        DateBucket::All => true,
        bucket => item
            .date_value()
            .map(|date| in_bucket(date, bucket, today))
            .unwrap_or(false),
    }
}

/// Фильтрует список; порядок записей сохраняется, исходный срез не меняется
pub fn filter_list<T: Searchable + Clone>(
    items: &[T],
    criteria: &FilterCriteria,
    today: NaiveDate,
) -> Vec<T> {
    items
        .iter()
        .filter(|item| matches_criteria(*item, criteria, today))
        .cloned()
        .collect()
}

/// Сортирует копию списка по указанному полю.
/// Сортировка стабильная: равные записи сохраняют исходный порядок.
pub fn sort_list<T: Sortable + Clone>(items: &[T], spec: &SortSpec) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| spec.direction.apply(a.compare_by_field(b, &spec.field)));
    sorted
}

/// Переключение сортировки по клику на заголовок колонки
pub fn toggle_sort(spec: &mut SortSpec, field: &str) {
    if spec.field == field {
        spec.direction = spec.direction.toggled();
    } else {
        spec.field = field.to_string();
        spec.direction = SortDirection::Asc;
    }
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(spec: &SortSpec, field: &str) -> &'static str {
    if spec.field == field {
        if spec.direction.is_ascending() { " ▲" } else { " ▼" }
    } else {
        " ⇅"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: u32,
        name: &'static str,
        price: f64,
        platform: &'static str,
        date: NaiveDate,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name]
        }

        fn get_field_value(&self, field: &str) -> Option<String> {
            match field {
                "platform" => Some(self.platform.to_string()),
                _ => None,
            }
        }

        fn date_value(&self) -> Option<NaiveDate> {
            Some(self.date)
        }
    }

    impl Sortable for Row {
        fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
            match field {
                "name" => compare_text(self.name, other.name),
                "price" => compare_amount(self.price, other.price),
                _ => self.date.cmp(&other.date),
            }
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 4, d).unwrap()
    }

    fn row(id: u32, name: &'static str, price: f64, platform: &'static str, d: u32) -> Row {
        Row { id, name, price, platform, date: day(d) }
    }

    fn ids(rows: &[Row]) -> Vec<u32> {
        rows.iter().map(|r| r.id).collect()
    }

    fn rows() -> Vec<Row> {
        vec![
            row(1, "Elden Ring", 59.99, "Steam", 22),
            row(2, "Cyberpunk 2077", 49.99, "Epic Games", 21),
            row(3, "Elden Ring DLC", 29.99, "Steam", 10),
            row(4, "Minecraft", 29.99, "Java", 16),
        ]
    }

    #[test]
    fn test_sort_by_name_and_price() {
        let items = vec![row(1, "Zeta", 10.0, "Steam", 1), row(2, "Alpha", 20.0, "Steam", 2)];

        let by_name = sort_list(&items, &SortSpec::asc("name"));
        assert_eq!(by_name.iter().map(|r| r.name).collect::<Vec<_>>(), vec!["Alpha", "Zeta"]);

        let by_price = sort_list(&items, &SortSpec::desc("price"));
        assert_eq!(ids(&by_price), vec![2, 1]);
    }

    #[test]
    fn test_compare_text_orders_accented_letters_with_base_letters() {
        let mut names = vec!["Zeta", "Éclair", "Alpha", "eclair"];
        names.sort_by(|a, b| compare_text(a, b));
        assert_eq!(names, vec!["Alpha", "eclair", "Éclair", "Zeta"]);

        assert_eq!(compare_text("a", "A"), Ordering::Less);
        assert_eq!(compare_text("résumé", "resume"), Ordering::Greater);
        assert_eq!(compare_text("Straße", "Straße"), Ordering::Equal);
    }

    #[test]
    fn test_sort_by_accented_name() {
        let items = vec![
            row(1, "Zeta", 10.0, "Steam", 1),
            row(2, "Éclair", 10.0, "Steam", 2),
            row(3, "Alpha", 10.0, "Steam", 3),
        ];
        assert_eq!(ids(&sort_list(&items, &SortSpec::asc("name"))), vec![3, 2, 1]);
        assert_eq!(ids(&sort_list(&items, &SortSpec::desc("name"))), vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_is_stable_in_both_directions() {
        let items = rows();
        // 3 и 4 имеют одинаковую цену
        assert_eq!(ids(&sort_list(&items, &SortSpec::asc("price"))), vec![3, 4, 2, 1]);
        assert_eq!(ids(&sort_list(&items, &SortSpec::desc("price"))), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_sort_twice_is_same() {
        let spec = SortSpec::desc("price");
        let once = sort_list(&rows(), &spec);
        let twice = sort_list(&once, &spec);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unknown_sort_field_uses_default() {
        let items = rows();
        assert_eq!(
            sort_list(&items, &SortSpec::asc("no_such_field")),
            sort_list(&items, &SortSpec::asc("date"))
        );
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let criteria = FilterCriteria::default().with_query("RING");
        let filtered = filter_list(&rows(), &criteria, day(22));
        assert_eq!(ids(&filtered), vec![1, 3]);
    }

    #[test]
    fn test_filters_are_anded_and_keep_order() {
        let criteria = FilterCriteria::default()
            .with_query("e")
            .with_category("platform", "Steam");
        let filtered = filter_list(&rows(), &criteria, day(22));
        assert_eq!(ids(&filtered), vec![1, 3]);

        let again = filter_list(&filtered, &criteria, day(22));
        assert_eq!(again, filtered);
    }

    #[test]
    fn test_unknown_category_value_matches_nothing() {
        let criteria = FilterCriteria::default().with_category("platform", "Dreamcast");
        assert!(filter_list(&rows(), &criteria, day(22)).is_empty());
    }

    #[test]
    fn test_category_on_unknown_field_matches_nothing() {
        let criteria = FilterCriteria::default().with_category("color", "red");
        assert!(filter_list(&rows(), &criteria, day(22)).is_empty());
    }

    #[test]
    fn test_date_bucket_predicate() {
        let criteria = FilterCriteria::default().with_date_bucket(DateBucket::Today);
        assert_eq!(ids(&filter_list(&rows(), &criteria, day(21))), vec![2]);
    }

    #[test]
    fn test_toggle_sort() {
        let mut spec = SortSpec::desc("date");
        toggle_sort(&mut spec, "date");
        assert_eq!(spec, SortSpec::asc("date"));
        toggle_sort(&mut spec, "price");
        assert_eq!(spec, SortSpec::asc("price"));
        toggle_sort(&mut spec, "price");
        assert_eq!(spec, SortSpec::desc("price"));
    }

    #[test]
    fn test_sort_indicator() {
        let spec = SortSpec::asc("name");
        assert_eq!(get_sort_indicator(&spec, "name"), " ▲");
        assert_eq!(get_sort_indicator(&spec, "price"), " ⇅");
        assert_eq!(get_sort_indicator(&SortSpec::desc("name"), "name"), " ▼");
    }
}
