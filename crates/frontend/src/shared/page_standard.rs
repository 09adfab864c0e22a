//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_decoration--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity part searchable: copy the id from the
//! DOM inspector into the IDE and you land in `domain/a001_decoration/`.

/// List of records with filters (catalog, admin tables, wishlist).
pub const PAGE_CAT_LIST: &str = "list";

/// A single record (decoration detail).
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Overview with stat cards.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// System pages (not found).
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Free-form layout, exempt from the header/content structure.
pub const PAGE_CAT_CUSTOM: &str = "custom";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_SYSTEM,
    PAGE_CAT_CUSTOM,
];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a001_decoration--list"));
        assert!(is_valid_page_id("d400_admin_overview--dashboard"));
        assert!(!is_valid_page_id("a001_decoration"));
        assert!(!is_valid_page_id("--list"));
    }

    #[test]
    fn test_known_categories() {
        assert!(is_known_category("detail"));
        assert!(!is_known_category("usecase"));
    }
}
