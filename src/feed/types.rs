use std::fmt;
use std::sync::Arc;
use thiserror::Error;

// ============================================================================
// Error Types
// ============================================================================

/// Errors raised while building a catalog, parsing a selector, or wiring a
/// session to the async runtime.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FeedError {
    /// Selector is neither a known category nor the wildcard
    #[error("Unknown category '{selector}' (expected one of: {})", .options.join(", "))]
    UnknownCategory {
        selector: String,
        options: Vec<String>,
    },

    /// Catalog was built without any category
    #[error("Category set is empty")]
    EmptyCategorySet,

    /// A category name is empty or whitespace only
    #[error("Category names must not be blank")]
    BlankCategory,

    /// The same category appears twice in the catalog
    #[error("Duplicate category: {0}")]
    DuplicateCategory(String),

    /// The wildcard label is empty or whitespace only
    #[error("Wildcard label must not be blank")]
    BlankWildcard,

    /// The wildcard label shadows a real category
    #[error("Wildcard '{0}' collides with a category of the same name")]
    WildcardCollision(String),

    /// Delayed work needs a tokio runtime and none was running
    #[error("No tokio runtime is running; build the session from async context")]
    NoRuntime,
}

// ============================================================================
// Category
// ============================================================================

/// A single category label.
///
/// Wraps `Arc<str>` so that tagging every generated item is a refcount bump,
/// not a string copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category(Arc<str>);

impl Category {
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Category {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for Category {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

// ============================================================================
// Feed Item
// ============================================================================

/// One generated news item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub id: u64,
    pub title: String,
    pub category: Category,
}

impl FeedItem {
    /// Build an item; the title is derived from the id.
    pub fn new(id: u64, category: Category) -> Self {
        Self {
            id,
            title: format!("Item #{}", id),
            category,
        }
    }
}

// ============================================================================
// Selector
// ============================================================================

/// A parsed category filter.
///
/// Obtained from [`CategoryCatalog::parse_selector`], so a `Selector` always
/// names something the catalog knows about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Pass every item through. Holds the wildcard label for formatting.
    Wildcard(Arc<str>),
    /// Pass only items of this category.
    Category(Category),
}

impl Selector {
    /// The exact label the consumer subscribed with.
    pub fn label(&self) -> &str {
        match self {
            Self::Wildcard(label) => label.as_ref(),
            Self::Category(category) => category.as_str(),
        }
    }

    pub fn matches(&self, item: &FeedItem) -> bool {
        match self {
            Self::Wildcard(_) => true,
            Self::Category(category) => item.category == *category,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard(_))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Category Catalog
// ============================================================================

/// Default category set.
pub const DEFAULT_CATEGORIES: [&str; 3] = ["Tech", "Health", "Sport"];

/// Default wildcard label.
pub const DEFAULT_WILDCARD: &str = "All";

/// The fixed category set plus the wildcard label.
///
/// Cheap to clone: both halves are reference counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCatalog {
    categories: Arc<[Category]>,
    wildcard: Arc<str>,
}

impl CategoryCatalog {
    /// Build a catalog, rejecting a blank wildcard and empty, blank, duplicate,
    /// or wildcard-shadowing category names.
    pub fn new<I, S>(categories: I, wildcard: &str) -> Result<Self, FeedError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if wildcard.trim().is_empty() {
            return Err(FeedError::BlankWildcard);
        }

        let mut seen: Vec<Category> = Vec::new();
        for name in categories {
            let name = name.as_ref();
            if name.trim().is_empty() {
                return Err(FeedError::BlankCategory);
            }
            if name == wildcard {
                return Err(FeedError::WildcardCollision(wildcard.to_string()));
            }
            if seen.iter().any(|c| c == name) {
                return Err(FeedError::DuplicateCategory(name.to_string()));
            }
            seen.push(Category::new(name));
        }

        if seen.is_empty() {
            return Err(FeedError::EmptyCategorySet);
        }

        Ok(Self {
            categories: seen.into(),
            wildcard: Arc::from(wildcard),
        })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn wildcard(&self) -> &str {
        &self.wildcard
    }

    pub fn contains(&self, name: &str) -> bool {
        self.categories.iter().any(|c| c == name)
    }

    /// Selector labels in display order: the wildcard, then every category.
    pub fn options(&self) -> Vec<String> {
        std::iter::once(self.wildcard.to_string())
            .chain(self.categories.iter().map(|c| c.to_string()))
            .collect()
    }

    /// Parse a consumer-supplied selector string.
    ///
    /// Matching is exact and case-sensitive.
    pub fn parse_selector(&self, selector: &str) -> Result<Selector, FeedError> {
        if selector == &*self.wildcard {
            return Ok(Selector::Wildcard(Arc::clone(&self.wildcard)));
        }

        self.categories
            .iter()
            .find(|c| *c == selector)
            .map(|c| Selector::Category(c.clone()))
            .ok_or_else(|| FeedError::UnknownCategory {
                selector: selector.to_string(),
                options: self.options(),
            })
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.iter().map(|c| Category::new(*c)).collect(),
            wildcard: Arc::from(DEFAULT_WILDCARD),
        }
    }
}
