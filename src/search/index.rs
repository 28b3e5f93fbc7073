use std::collections::BTreeMap;
use tracing::debug;

use super::error::SearchError;
use super::history::SearchHistory;
use super::matcher::{matches, normalize_query, passes_filters};
use crate::models::{Category, CategorySpec, FieldValue, Record, SearchResult};

/// Field name to exact-match value. Empty values impose no constraint.
pub type Filters = BTreeMap<String, String>;

/// In-memory search over a fixed, ordered set of categories.
///
/// Categories are scanned in registration order and records in stored order;
/// result order is the concatenation of both and never re-ranked.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    categories: Vec<Category>,
    history: SearchHistory,
}

impl SearchIndex {
    /// Registers categories with empty snapshots.
    ///
    /// Fails if a filter field is not among the category's declared fields or
    /// if two categories share a name.
    pub fn new(specs: Vec<CategorySpec>) -> Result<Self, SearchError> {
        let mut categories: Vec<Category> = Vec::with_capacity(specs.len());

        for spec in specs {
            if categories.iter().any(|c| c.name() == spec.name) {
                return Err(SearchError::DuplicateCategory(spec.name));
            }

            if let Some(field) = spec.filter_fields.iter().find(|f| !spec.declares(f)) {
                return Err(SearchError::unknown_field(&spec.name, field));
            }

            categories.push(Category {
                spec,
                records: Vec::new(),
            });
        }

        Ok(Self {
            categories,
            history: SearchHistory::default(),
        })
    }

    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history = SearchHistory::with_capacity(limit);
        self
    }

    /// Replaces a category's snapshot wholesale.
    ///
    /// The whole snapshot is rejected if any record carries a field the
    /// category does not declare; the previous snapshot is kept in that case.
    pub fn replace_records(
        &mut self,
        category: &str,
        records: Vec<Record>,
    ) -> Result<(), SearchError> {
        let target = self.category_mut(category)?;

        for record in &records {
            if let Some(field) = record.field_names().find(|f| !target.spec.declares(f)) {
                return Err(SearchError::UndeclaredField {
                    category: category.to_string(),
                    field: field.to_string(),
                });
            }
        }

        debug!(category, count = records.len(), "Replaced category snapshot");
        target.records = records;
        Ok(())
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(Category::name)
    }

    pub fn record_count(&self, category: &str) -> Result<usize, SearchError> {
        Ok(self.category(category)?.records.len())
    }

    /// Searches every category and records the query in history.
    ///
    /// A blank query yields no results and leaves history untouched.
    pub fn search_global(&mut self, query: &str) -> Vec<SearchResult> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        let results = self.collect_global(query);
        self.history.record(query);

        debug!(query, results = results.len(), "Global search finished");
        results
    }

    fn collect_global(&self, query: &str) -> Vec<SearchResult> {
        let needle = normalize_query(query);

        self.categories
            .iter()
            .flat_map(|category| {
                let needle = needle.as_str();
                category
                    .records
                    .iter()
                    .filter(move |record| matches(record, &category.spec.fields, needle))
                    .map(move |record| {
                        let display = category.spec.display.render(record);
                        SearchResult {
                            kind: category.spec.kind.clone(),
                            title: display.title,
                            subtitle: display.subtitle,
                            link: display.link,
                            record: record.clone(),
                        }
                    })
            })
            .collect()
    }

    /// Searches one category, then applies `filters` as an AND of exact matches.
    ///
    /// Unlike [`Self::search_global`], an empty query matches every record and
    /// history is never touched.
    pub fn search_category(
        &self,
        category: &str,
        query: &str,
        filters: &Filters,
    ) -> Result<Vec<Record>, SearchError> {
        let target = self.category(category)?;

        let active: Vec<(&str, &str)> = filters
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(field, value)| (field.as_str(), value.as_str()))
            .collect();

        if let Some((field, _)) = active.iter().find(|(f, _)| !target.spec.declares(f)) {
            return Err(SearchError::unknown_field(category, field));
        }

        let needle = normalize_query(query);

        let results: Vec<Record> = target
            .records
            .iter()
            .filter(|record| needle.is_empty() || matches(record, &target.spec.fields, &needle))
            .filter(|record| passes_filters(record, active.iter().copied()))
            .cloned()
            .collect();

        debug!(
            category,
            query,
            filters = active.len(),
            results = results.len(),
            "Category search finished"
        );
        Ok(results)
    }

    pub fn filter_fields(&self, category: &str) -> Result<&[String], SearchError> {
        Ok(&self.category(category)?.spec.filter_fields)
    }

    /// Distinct values of `field` in first-seen order.
    ///
    /// Records that lack the field contribute a single `Null`.
    pub fn filter_values(
        &self,
        category: &str,
        field: &str,
    ) -> Result<Vec<FieldValue>, SearchError> {
        let target = self.category(category)?;
        if !target.spec.declares(field) {
            return Err(SearchError::unknown_field(category, field));
        }

        let mut values: Vec<FieldValue> = Vec::new();
        for record in &target.records {
            let value = record.get(field).cloned().unwrap_or(FieldValue::Null);
            if !values.contains(&value) {
                values.push(value);
            }
        }

        Ok(values)
    }

    pub fn record_history(&mut self, query: &str) {
        self.history.record(query);
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    #[must_use]
    pub fn history(&self) -> Vec<String> {
        self.history.entries()
    }

    fn category(&self, name: &str) -> Result<&Category, SearchError> {
        self.categories
            .iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| SearchError::UnknownCategory(name.to_string()))
    }

    fn category_mut(&mut self, name: &str) -> Result<&mut Category, SearchError> {
        self.categories
            .iter_mut()
            .find(|c| c.name() == name)
            .ok_or_else(|| SearchError::UnknownCategory(name.to_string()))
    }
}
