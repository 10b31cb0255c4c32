//! The content registry: an immutable mapping from category to its
//! authored sequence of posts, with the two read-only lookups the
//! site is built on.
//!
//! The registry is constructed once at startup from the literal table in
//! [`crate::content::catalog`] and never mutated afterwards, so any number
//! of concurrent readers can share it without locking.

use indexmap::IndexMap;
use serde::Serialize;
use thiserror::Error;

use crate::content::entry::ContentEntry;

/// Metadata for one blog category.
///
/// The set of categories is closed: it is fixed by the authored table at
/// build time. Lookups still accept arbitrary strings and degrade to
/// "nothing here" for unknown values.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    /// URL path segment identifying the category
    pub slug: String,
    /// Display name
    pub name: String,
    /// Short blurb shown on the blog index
    pub description: String,
}

impl Category {
    pub fn new(
        slug: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Errors detected while validating the authored content table.
///
/// These are data-authoring defects. They can only surface at process
/// startup, never while serving a request.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("duplicate category slug: {0}")]
    DuplicateCategory(String),

    #[error("duplicate post slug {slug:?} in category {category:?}")]
    DuplicateSlug { category: String, slug: String },

    #[error("post {slug:?} references unknown category {category:?}")]
    UnknownCategory { category: String, slug: String },

    #[error("post in category {category:?} has an empty {field} field")]
    EmptyField {
        category: String,
        field: &'static str,
    },

    #[error("category {0:?} has an empty {1} field")]
    EmptyCategoryField(String, &'static str),
}

struct Section {
    info: Category,
    entries: Vec<ContentEntry>,
}

/// The immutable category → posts table.
///
/// Insertion order is display order, for categories and for the posts
/// within each category. Built through [`Registry::builder`].
pub struct Registry {
    sections: IndexMap<String, Section>,
}

impl Registry {
    /// Start building a registry
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder {
            sections: IndexMap::new(),
        }
    }

    /// All known categories, in authored order
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.sections.values().map(|s| &s.info)
    }

    /// Number of known categories
    pub fn category_count(&self) -> usize {
        self.sections.len()
    }

    /// Metadata for a category, if it is one of the known set
    pub fn category(&self, category: &str) -> Option<&Category> {
        self.sections.get(category).map(|s| &s.info)
    }

    /// The posts of a category, in authored order.
    ///
    /// `category` is an untrusted string (typically a URL path segment).
    /// An unknown category yields an empty slice, never an error.
    pub fn list_by_category(&self, category: &str) -> &[ContentEntry] {
        self.sections
            .get(category)
            .map(|s| s.entries.as_slice())
            .unwrap_or(&[])
    }

    /// Find a post by exact slug within a category.
    ///
    /// Both arguments are untrusted strings. The slug comparison is
    /// case-sensitive with no trimming or normalization. Returns `None`
    /// when the category is unknown or no post in it carries the slug;
    /// the two causes are deliberately not distinguished.
    pub fn find_by_slug(&self, category: &str, slug: &str) -> Option<&ContentEntry> {
        self.list_by_category(category)
            .iter()
            .find(|e| e.slug == slug)
    }

    /// Total number of posts across all categories
    pub fn post_count(&self) -> usize {
        self.sections.values().map(|s| s.entries.len()).sum()
    }
}

/// Builder that assembles and validates the content table.
///
/// Each `category`/`post` call validates its input, so a malformed table
/// is rejected while it is being assembled and the process fails at
/// startup instead of serving broken lookups.
pub struct RegistryBuilder {
    sections: IndexMap<String, Section>,
}

impl RegistryBuilder {
    /// Declare a category. Posts must be added to a declared category.
    pub fn category(mut self, info: Category) -> Result<Self, RegistryError> {
        if info.slug.is_empty() {
            return Err(RegistryError::EmptyCategoryField(info.slug, "slug"));
        }
        if info.name.is_empty() {
            return Err(RegistryError::EmptyCategoryField(info.slug, "name"));
        }
        if self.sections.contains_key(&info.slug) {
            return Err(RegistryError::DuplicateCategory(info.slug));
        }
        self.sections.insert(
            info.slug.clone(),
            Section {
                info,
                entries: Vec::new(),
            },
        );
        Ok(self)
    }

    /// Append a post to a declared category. Authored call order is the
    /// display order.
    pub fn post(mut self, category: &str, entry: ContentEntry) -> Result<Self, RegistryError> {
        let section =
            self.sections
                .get_mut(category)
                .ok_or_else(|| RegistryError::UnknownCategory {
                    category: category.to_string(),
                    slug: entry.slug.clone(),
                })?;

        for (field, value) in [
            ("title", &entry.title),
            ("description", &entry.description),
            ("slug", &entry.slug),
        ] {
            if value.is_empty() {
                return Err(RegistryError::EmptyField {
                    category: category.to_string(),
                    field,
                });
            }
        }

        if section.entries.iter().any(|e| e.slug == entry.slug) {
            return Err(RegistryError::DuplicateSlug {
                category: category.to_string(),
                slug: entry.slug,
            });
        }

        section.entries.push(entry);
        Ok(self)
    }

    /// Finish building. All validation already happened in `category`/`post`,
    /// so this only seals the table.
    pub fn build(self) -> Registry {
        Registry {
            sections: self.sections,
        }
    }
}
