//! Search + category + status filtering shared by every list page.
//!
//! An item passes when all three predicates hold:
//! - the search term is empty, or one of the item's search fields contains it
//!   (case-insensitive);
//! - the category selector is [`FILTER_ALL`] or equals the item's category;
//! - the status selector is [`FILTER_ALL`] or equals the item's status code.

use serde::{Deserialize, Serialize};

/// Selector value that matches every category / status
pub const FILTER_ALL: &str = "all";

/// Types that can be narrowed by a [`ListFilter`]
pub trait Filterable {
    /// Text fields the search term is matched against
    fn search_fields(&self) -> Vec<&str>;

    /// Category value compared with the category selector
    fn category(&self) -> &str;

    /// Status code compared with the status selector
    fn status_code(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListFilter {
    pub search: String,
    pub category: String,
    pub status: String,
}

impl Default for ListFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: FILTER_ALL.to_string(),
            status: FILTER_ALL.to_string(),
        }
    }
}

impl ListFilter {
    pub fn new(
        search: impl Into<String>,
        category: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            search: search.into(),
            category: category.into(),
            status: status.into(),
        }
    }

    pub fn matches<T: Filterable>(&self, item: &T) -> bool {
        matches_search(&item.search_fields(), &self.search)
            && selector_matches(&self.category, item.category())
            && selector_matches(&self.status, item.status_code())
    }

    /// Returns the matching items, keeping their original order
    pub fn apply<T: Filterable + Clone>(&self, items: &[T]) -> Vec<T> {
        items
            .iter()
            .filter(|item| self.matches(*item))
            .cloned()
            .collect()
    }

    /// Number of predicates that currently narrow the list
    pub fn active_count(&self) -> usize {
        [
            !self.search.is_empty(),
            self.category != FILTER_ALL,
            self.status != FILTER_ALL,
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    pub fn is_active(&self) -> bool {
        self.active_count() > 0
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Case-insensitive substring match over any of `fields`; an empty term matches everything
pub fn matches_search(fields: &[&str], term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

pub fn selector_matches(selected: &str, value: &str) -> bool {
    selected == FILTER_ALL || selected == value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        title: &'static str,
        note: &'static str,
        category: &'static str,
        status: &'static str,
    }

    impl Filterable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.title, self.note]
        }

        fn category(&self) -> &str {
            self.category
        }

        fn status_code(&self) -> &str {
            self.status
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { title: "Wedding Arch", note: "floral", category: "wedding", status: "available" },
            Row { title: "Gala Lights", note: "Festive FLORAL accents", category: "holiday", status: "full" },
            Row { title: "Office Tables", note: "centerpieces", category: "corporate", status: "available" },
        ]
    }

    #[test]
    fn test_default_filter_keeps_everything_in_order() {
        let filter = ListFilter::default();
        assert_eq!(filter.apply(&rows()), rows());
        assert!(!filter.is_active());
    }

    #[test]
    fn test_search_is_case_insensitive_over_all_fields() {
        let filter = ListFilter::new("FLORAL", FILTER_ALL, FILTER_ALL);
        let titles: Vec<_> = filter.apply(&rows()).iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["Wedding Arch", "Gala Lights"]);
    }

    #[test]
    fn test_category_and_status_use_exact_equality() {
        let filter = ListFilter::new("", "corporate", "available");
        let titles: Vec<_> = filter.apply(&rows()).iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["Office Tables"]);

        let filter = ListFilter::new("", "Corporate", FILTER_ALL);
        assert!(filter.apply(&rows()).is_empty());
    }

    #[test]
    fn test_predicates_commute() {
        let items = rows();
        let combined = ListFilter::new("a", "wedding", "available").apply(&items);

        let by_status = ListFilter::new("", FILTER_ALL, "available").apply(&items);
        let by_category = ListFilter::new("", "wedding", FILTER_ALL).apply(&by_status);
        let by_search = ListFilter::new("a", FILTER_ALL, FILTER_ALL).apply(&by_category);
        assert_eq!(combined, by_search);

        let by_search = ListFilter::new("a", FILTER_ALL, FILTER_ALL).apply(&items);
        let by_status = ListFilter::new("", FILTER_ALL, "available").apply(&by_search);
        let by_category = ListFilter::new("", "wedding", FILTER_ALL).apply(&by_status);
        assert_eq!(combined, by_category);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let filter = ListFilter::new("zeppelin", FILTER_ALL, FILTER_ALL);
        assert!(filter.apply(&rows()).is_empty());
    }

    #[test]
    fn test_active_count_and_reset() {
        let mut filter = ListFilter::new("arch", "wedding", FILTER_ALL);
        assert_eq!(filter.active_count(), 2);
        filter.reset();
        assert_eq!(filter, ListFilter::default());
    }
}
