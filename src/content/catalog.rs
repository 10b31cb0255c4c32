//! The authored content table.
//!
//! Every post body is embedded at compile time, so editing content means
//! editing the markdown files under `posts/` and redeploying. There is no
//! runtime content source.

use crate::content::entry::{ContentEntry, PostBody};
use crate::content::registry::{Category, Registry, RegistryError};

/// Build the site's content registry.
///
/// Validation failures here are authoring mistakes (duplicate slugs,
/// empty fields) and abort startup.
pub fn builtin() -> Result<Registry, RegistryError> {
    let registry = Registry::builder()
        .category(Category::new(
            "system-design",
            "System Design",
            "Notes and summaries from System Design Interview book and practices.",
        ))?
        .post(
            "system-design",
            ContentEntry::new(
                "Breaking Down Chapter 1 of System Design Interview",
                "Summary and notes from System Design Interview book.",
                "chapter-1",
                "August 2025",
                PostBody::from_markdown(include_str!("posts/system-design/chapter-1.md")),
            ),
        )?
        .post(
            "system-design",
            ContentEntry::new(
                "Breaking Down Chapter 2 of System Design Interview",
                "Back-of-the-envelope estimations and QPS/storage calculations.",
                "chapter-2",
                "September 2025",
                PostBody::from_markdown(include_str!("posts/system-design/chapter-2.md")),
            ),
        )?
        .category(Category::new(
            "leetcode",
            "LeetCode",
            "Solutions and insights from algorithm challenges.",
        ))?
        .post(
            "leetcode",
            ContentEntry::new(
                "Understanding Heap and heapq in Python",
                "A practical guide to heaps, heapq operations, and top-K algorithms in Python.",
                "heapq-python",
                "November 2025",
                PostBody::from_markdown(include_str!("posts/leetcode/heapq-python.md")),
            ),
        )?
        .category(Category::new(
            "learning",
            "Books & Learning",
            "Other tech books and learning experiences.",
        ))?
        .post(
            "learning",
            ContentEntry::new(
                "My Journey Learning React Hook Form",
                "How I mastered form handling in React with React Hook Form.",
                "learning-react-hook-form",
                "May 2025",
                PostBody::from_markdown(include_str!("posts/learning/learning-react-hook-form.md")),
            ),
        )?
        .build();

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_registry_builds() {
        let registry = builtin().unwrap();
        let categories: Vec<_> = registry.categories().map(|c| c.slug.as_str()).collect();
        assert_eq!(categories, vec!["system-design", "leetcode", "learning"]);
        assert_eq!(registry.post_count(), 4);
    }

    #[test]
    fn test_builtin_entries_addressable() {
        let registry = builtin().unwrap();
        assert_eq!(registry.list_by_category("system-design").len(), 2);
        assert!(registry.find_by_slug("system-design", "chapter-2").is_some());
        assert!(registry.find_by_slug("leetcode", "heapq-python").is_some());
        assert!(registry
            .find_by_slug("learning", "learning-react-hook-form")
            .is_some());
    }

    #[test]
    fn test_builtin_bodies_nonempty() {
        let registry = builtin().unwrap();
        for category in registry.categories().map(|c| c.slug.clone()).collect::<Vec<_>>() {
            for post in registry.list_by_category(&category) {
                assert!(
                    !post.body.markdown().trim().is_empty(),
                    "empty body for {}/{}",
                    category,
                    post.slug
                );
            }
        }
    }
}
