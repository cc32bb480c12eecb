//! Хранилище записей списка с набором выбранных идентификаторов.
//!
//! Выбор всегда является подмножеством идентификаторов хранилища:
//! удаление записи убирает её и из выбора в той же операции.

use std::collections::{BTreeSet, HashSet};

/// Запись, которую можно хранить в [`ListStore`]
pub trait ListRecord: Clone {
    /// Префикс идентификатора ("prod-", "sale-", "w-")
    const ID_PREFIX: &'static str;

    fn id(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListStore<T> {
    records: Vec<T>,
    selected: BTreeSet<String>,
    next_seq: u64,
}

impl<T: ListRecord> Default for ListStore<T> {
    fn default() -> Self {
        Self::seed(Vec::new())
    }
}

impl<T: ListRecord> ListStore<T> {
    /// Создаёт хранилище из начального набора.
    /// Повторяющиеся идентификаторы отбрасываются (остаётся первая запись).
    pub fn seed(records: Vec<T>) -> Self {
        let mut seen = HashSet::new();
        let mut unique = Vec::with_capacity(records.len());
        for record in records {
            if seen.insert(record.id().to_string()) {
                unique.push(record);
            } else {
                log::warn!("Duplicate id in seed data skipped: {}", record.id());
            }
        }

        let next_seq = unique
            .iter()
            .filter_map(|r| r.id().strip_prefix(T::ID_PREFIX))
            .filter_map(|suffix| suffix.parse::<u64>().ok())
            .max()
            .map_or(1, |max| max + 1);

        Self {
            records: unique,
            selected: BTreeSet::new(),
            next_seq,
        }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.iter().any(|r| r.id() == id)
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Выделяет новый идентификатор; идентификаторы не переиспользуются
    pub fn allocate_id(&mut self) -> String {
        loop {
            let candidate = format!("{}{}", T::ID_PREFIX, self.next_seq);
            self.next_seq += 1;
            if !self.contains(&candidate) {
                return candidate;
            }
        }
    }

    /// Добавляет запись в начало списка под новым идентификатором
    pub fn insert_front(&mut self, build: impl FnOnce(String) -> T) -> &T {
        let id = self.allocate_id();
        let record = build(id);
        log::info!("Record added: {}", record.id());
        self.records.insert(0, record);
        &self.records[0]
    }

    // ------------------------------------------------------------------
    // Выбор
    // ------------------------------------------------------------------

    pub fn selected(&self) -> &BTreeSet<String> {
        &self.selected
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Заменяет выбор ровно видимыми идентификаторами
    pub fn select_all<I, S>(&mut self, visible_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let selected = visible_ids
            .into_iter()
            .filter(|id| self.contains(id.as_ref()))
            .map(|id| id.as_ref().to_string())
            .collect();
        self.selected = selected;
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Добавляет или убирает один идентификатор.
    /// Возвращает false, если записи с таким id нет в хранилище.
    pub fn toggle(&mut self, id: &str, included: bool) -> bool {
        if !included {
            self.selected.remove(id);
            return true;
        }
        if !self.contains(id) {
            return false;
        }
        self.selected.insert(id.to_string());
        true
    }

    // ------------------------------------------------------------------
    // Удаление
    // ------------------------------------------------------------------

    /// Удаляет запись по id; отсутствующий id не является ошибкой
    pub fn delete_one(&mut self, id: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        self.selected.remove(id);
        let removed = before - self.records.len();
        log::info!("Deleted {} record(s) by id {}", removed, id);
        removed
    }

    /// Удаляет все записи с указанными id, возвращает число реально удалённых
    pub fn delete_many<I, S>(&mut self, ids: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids: HashSet<String> = ids.into_iter().map(|id| id.as_ref().to_string()).collect();
        let before = self.records.len();
        self.records.retain(|r| !ids.contains(r.id()));
        self.selected.retain(|id| !ids.contains(id));
        let removed = before - self.records.len();
        log::info!("Bulk delete: {} of {} requested id(s) removed", removed, ids.len());
        removed
    }

    /// Удаляет все выбранные записи и очищает выбор
    pub fn delete_selected(&mut self) -> usize {
        let ids = std::mem::take(&mut self.selected);
        self.delete_many(ids)
    }
}
