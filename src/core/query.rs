//! Generic search, sort, and pagination pipeline shared by every table.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::dates;
use crate::domain::{Contract, Withdrawal};

use super::derivation::ClientStats;
use super::ranking::Ranked;
use super::statement::LedgerEntry;

/// Rows per page across the dashboard tables.
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Row that can participate in the query pipeline.
pub trait QueryRow {
    /// Strings matched case-insensitively against the search term.
    fn search_fields(&self) -> Vec<String>;
    /// Numeric key used by value-ordered sorts.
    fn value_key(&self) -> f64;
    /// Raw date string used by date-ordered sorts, when the row has one.
    fn date_key(&self) -> Option<&str> {
        None
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortKey {
    Date,
    Value,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Sort selection for a table view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

/// One page of a filtered collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: usize,
}

/// Runs filter, then sort, then paginate over `items`.
///
/// An empty term matches everything and an empty result is a valid
/// single-page state. The requested page is not clamped here; a page
/// past the end yields an empty page rather than a panic.
pub fn query<T>(
    items: &[T],
    term: &str,
    sort: Option<SortSpec>,
    page: usize,
    page_size: usize,
) -> Page<T>
where
    T: QueryRow + Clone,
{
    let needle = term.trim().to_lowercase();
    let mut rows: Vec<T> = items
        .iter()
        .filter(|item| {
            needle.is_empty()
                || item
                    .search_fields()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect();

    if let Some(spec) = sort {
        rows.sort_by(|a, b| compare(a, b, spec));
    }

    let total_pages = total_page_count(rows.len(), page_size);
    let start = page.saturating_sub(1).saturating_mul(page_size);
    let items = if start >= rows.len() {
        Vec::new()
    } else {
        rows[start..(start + page_size).min(rows.len())].to_vec()
    };
    Page { items, total_pages }
}

/// Page count for a filtered collection; an empty result still has one
/// (empty) page.
pub fn total_page_count(filtered: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    ((filtered + page_size - 1) / page_size).max(1)
}

fn compare<T: QueryRow>(a: &T, b: &T, spec: SortSpec) -> Ordering {
    let ordering = match spec.key {
        SortKey::Date => {
            let left = dates::parse_br_date(a.date_key().unwrap_or_default());
            let right = dates::parse_br_date(b.date_key().unwrap_or_default());
            left.cmp(&right)
        }
        SortKey::Value => a
            .value_key()
            .partial_cmp(&b.value_key())
            .unwrap_or(Ordering::Equal),
    };
    match spec.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// Interactive state for one table: the persisted unit of view state.
///
/// Only parameters live here; rows are recomputed on demand from the
/// derived aggregates, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableView {
    pub search: String,
    pub sort: Option<SortSpec>,
    pub page: usize,
    pub page_size: usize,
}

impl TableView {
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            sort: None,
            page: 1,
            page_size,
        }
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Changing the term always returns the view to the first page.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
    }

    /// Changing the ordering always returns the view to the first page.
    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = Some(sort);
        self.page = 1;
    }

    /// Moves forward one page, never past the last.
    pub fn next_page(&mut self, total_pages: usize) {
        self.page = (self.page + 1).min(total_pages.max(1));
    }

    /// Moves back one page, never before the first.
    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Runs the pipeline with this view's parameters.
    pub fn apply<T: QueryRow + Clone>(&self, items: &[T]) -> Page<T> {
        query(items, &self.search, self.sort, self.page, self.page_size)
    }
}

impl Default for TableView {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl QueryRow for LedgerEntry {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.description.clone(),
            self.value.to_string(),
        ]
    }

    fn value_key(&self) -> f64 {
        self.value
    }

    fn date_key(&self) -> Option<&str> {
        Some(&self.date)
    }
}

impl QueryRow for Contract {
    fn search_fields(&self) -> Vec<String> {
        vec![self.id.to_string(), self.value.to_string()]
    }

    fn value_key(&self) -> f64 {
        self.value
    }

    fn date_key(&self) -> Option<&str> {
        Some(&self.start_date)
    }
}

impl QueryRow for Withdrawal {
    fn search_fields(&self) -> Vec<String> {
        vec![self.id.to_string(), self.value.to_string()]
    }

    fn value_key(&self) -> f64 {
        self.value
    }

    fn date_key(&self) -> Option<&str> {
        Some(&self.date)
    }
}

impl QueryRow for Ranked<ClientStats> {
    fn search_fields(&self) -> Vec<String> {
        vec![
            self.item.client.name.clone(),
            self.item.client.cpf.clone(),
            self.item.client.phone.clone(),
        ]
    }

    fn value_key(&self) -> f64 {
        self.item.total_invested
    }
}
