use std::fmt;

use crate::*;

/// Validation error for a series document that breaks the scaffold invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyTitle,
    NoCategories,
    DuplicateBase { count: usize },
    BaseMismatch { field: &'static str },
    MissingField { index: usize, field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyTitle => write!(f, "series title is empty"),
            ValidationError::NoCategories => write!(f, "series has no categories"),
            ValidationError::DuplicateBase { count } => {
                write!(f, "{count} categories are named '{BASE_NAME}' (at most one allowed)")
            },
            ValidationError::BaseMismatch { field } => {
                write!(f, "base category field '{field}' differs from the fixed base record")
            },
            ValidationError::MissingField { index, field } => {
                write!(f, "category {index} has an empty {field}")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate the structural invariants of a series. Category indexes in errors are 1-based.
///
/// Uniqueness of prefixes and tab ids and the format of `odds` are deliberately not checked.
///
/// ```
/// use series_data::{Category, Series, validate_series};
///
/// let series = Series {
///     title: "Holiday 2024".into(),
///     categories: vec![
///         Category::base(),
///         Category::new("Insert", "tab-insert", "IN", true, Some("1:10".into())),
///     ],
/// };
/// assert!(validate_series(&series).is_empty());
/// ```
pub fn validate_series(series: &Series) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if series.title.trim().is_empty() {
        errors.push(ValidationError::EmptyTitle);
    }
    if series.categories.is_empty() {
        errors.push(ValidationError::NoCategories);
    }

    let base_count = series.categories.iter().filter(|c| c.is_base()).count();
    if base_count > 1 {
        errors.push(ValidationError::DuplicateBase { count: base_count });
    }

    for (idx, category) in series.categories.iter().enumerate() {
        if category.is_base() {
            check_base(category, &mut errors);
            continue;
        }
        let index = idx + 1;
        if category.name.trim().is_empty() {
            errors.push(ValidationError::MissingField { index, field: "name" });
        }
        if category.prefix.trim().is_empty() {
            errors.push(ValidationError::MissingField { index, field: "prefix" });
        }
    }

    errors
}

fn check_base(category: &Category, errors: &mut Vec<ValidationError>) {
    let fixed = Category::base();
    if category.tab_id != fixed.tab_id {
        errors.push(ValidationError::BaseMismatch { field: "tabId" });
    }
    if category.prefix != fixed.prefix {
        errors.push(ValidationError::BaseMismatch { field: "prefix" });
    }
    if category.show_prefix != fixed.show_prefix {
        errors.push(ValidationError::BaseMismatch { field: "showPrefix" });
    }
    if category.odds != fixed.odds {
        errors.push(ValidationError::BaseMismatch { field: "odds" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insert() -> Category {
        Category::new("Insert", "tab-insert", "IN", true, Some("1:10".into()))
    }

    fn series(categories: Vec<Category>) -> Series {
        Series {
            title: "Demo".into(),
            categories,
        }
    }

    #[test]
    fn accepts_series_without_base() {
        assert!(validate_series(&series(vec![insert()])).is_empty());
    }

    #[test]
    fn reports_empty_title_and_no_categories() {
        let errors = validate_series(&Series {
            title: "  ".into(),
            categories: Vec::new(),
        });
        assert_eq!(errors, vec![ValidationError::EmptyTitle, ValidationError::NoCategories]);
    }

    #[test]
    fn reports_duplicate_base() {
        let errors = validate_series(&series(vec![Category::base(), insert(), Category::base()]));
        assert_eq!(errors, vec![ValidationError::DuplicateBase { count: 2 }]);
    }

    #[test]
    fn reports_base_named_category_with_custom_fields() {
        let typed = Category::new("Base", "tab-base", "BS", true, None);
        let errors = validate_series(&series(vec![typed]));
        assert_eq!(
            errors,
            vec![
                ValidationError::BaseMismatch { field: "prefix" },
                ValidationError::BaseMismatch { field: "showPrefix" },
            ]
        );
    }

    #[test]
    fn reports_missing_name_and_prefix_with_one_based_index() {
        let blank = Category::new("", "tab-", " ", true, None);
        let errors = validate_series(&series(vec![insert(), blank]));
        assert_eq!(
            errors,
            vec![
                ValidationError::MissingField { index: 2, field: "name" },
                ValidationError::MissingField { index: 2, field: "prefix" },
            ]
        );
    }

    #[test]
    fn does_not_check_prefix_uniqueness_or_odds_format() {
        let a = Category::new("A", "tab-x", "XX", true, Some("whenever".into()));
        let b = Category::new("B", "tab-x", "XX", false, Some("???".into()));
        assert!(validate_series(&series(vec![a, b])).is_empty());
    }

    #[test]
    fn display_messages_are_descriptive() {
        let msg = ValidationError::MissingField { index: 3, field: "prefix" }.to_string();
        assert_eq!(msg, "category 3 has an empty prefix");
    }
}
