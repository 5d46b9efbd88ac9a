use crate::core::inventory::part::Part;

/// Tab value meaning "every category".
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, part: &Part) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => part.category == *category,
        }
    }

    /// The tab label this filter corresponds to.
    pub fn as_tab(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(value: String) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value)
        }
    }
}

/// Search box text plus the selected category tab.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PartFilter {
    query: String,
    category: CategoryFilter,
}

impl PartFilter {
    pub fn new(query: impl Into<String>, category: impl Into<CategoryFilter>) -> Self {
        Self {
            query: query.into(),
            category: category.into(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_category(&mut self, category: impl Into<CategoryFilter>) {
        self.category = category.into();
    }

    pub fn is_search_active(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn matches(&self, part: &Part) -> bool {
        matches_query(part, &self.query.to_lowercase()) && self.category.matches(part)
    }

    /// Matching parts as a stable subsequence of `parts`.
    pub fn apply<'a>(&self, parts: &'a [Part]) -> Vec<&'a Part> {
        let needle = self.query.to_lowercase();
        parts
            .iter()
            .filter(|part| matches_query(part, &needle) && self.category.matches(part))
            .collect()
    }
}

fn matches_query(part: &Part, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let contains = |field: &str| field.to_lowercase().contains(needle);
    contains(&part.name)
        || part.sku.as_deref().is_some_and(contains)
        || contains(&part.location)
        || contains(&part.category)
        || contains(&part.make)
        || contains(&part.model)
}

pub fn filter_parts<'a>(parts: &'a [Part], query: &str, category: &str) -> Vec<&'a Part> {
    PartFilter::new(query, category).apply(parts)
}

/// `"all"` followed by each distinct category in first-seen order.
pub fn categories(parts: &[Part]) -> Vec<String> {
    let mut tabs = vec![ALL_CATEGORIES.to_string()];
    for part in parts {
        if !tabs.iter().any(|tab| *tab == part.category) {
            tabs.push(part.category.clone());
        }
    }
    tabs
}
