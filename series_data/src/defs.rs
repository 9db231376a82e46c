use serde::{Deserialize, Serialize};

/// Display name of the singleton base category.
pub const BASE_NAME: &str = "Base";
/// Tab id of the singleton base category.
pub const BASE_TAB_ID: &str = "tab-base";
/// Card prefix of the singleton base category.
pub const BASE_PREFIX: &str = "base";

/// Top-level card-set document written by the scaffolder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub title: String,
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// A named grouping of cards within a series.
///
/// Field order is the key order of the written JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub name: String,
    pub tab_id: String,
    pub prefix: String,
    pub show_prefix: bool,
    pub odds: Option<String>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Category {
    /// The fixed base category record.
    ///
    /// ```
    /// use series_data::Category;
    ///
    /// let base = Category::base();
    /// assert_eq!(base.tab_id, "tab-base");
    /// assert!(!base.show_prefix);
    /// assert!(base.odds.is_none());
    /// ```
    pub fn base() -> Self {
        Self {
            name: BASE_NAME.to_string(),
            tab_id: BASE_TAB_ID.to_string(),
            prefix: BASE_PREFIX.to_string(),
            show_prefix: false,
            odds: None,
            cards: Vec::new(),
        }
    }

    /// Build a regular (non-base) category with no cards yet.
    pub fn new(
        name: impl Into<String>,
        tab_id: impl Into<String>,
        prefix: impl Into<String>,
        show_prefix: bool,
        odds: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            tab_id: tab_id.into(),
            prefix: prefix.into(),
            show_prefix,
            odds,
            cards: Vec::new(),
        }
    }

    /// True if this category carries the reserved base name.
    pub fn is_base(&self) -> bool {
        self.name == BASE_NAME
    }
}

/// A single card entry. The page generator renders each card from its name alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card(pub String);

/// Default slug for a series title: lowercased, spaces replaced with underscores.
///
/// ```
/// assert_eq!(series_data::default_slug("Holiday 2024"), "holiday_2024");
/// ```
pub fn default_slug(title: &str) -> String {
    title.to_lowercase().replace(' ', "_")
}

/// Default tab id for a category name: `tab-` plus the name lowercased with spaces as hyphens.
///
/// ```
/// assert_eq!(series_data::default_tab_id("Rookie Auto"), "tab-rookie-auto");
/// ```
pub fn default_tab_id(name: &str) -> String {
    format!("tab-{}", name.to_lowercase().replace(' ', "-"))
}
