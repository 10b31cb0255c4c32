//! List site content

use anyhow::Result;
use serde_json::json;

use crate::Folio;

/// Output format for the list command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    Text,
    Json,
}

/// List site content by type
pub fn run(folio: &Folio, content_type: &str, format: ListFormat) -> Result<()> {
    match content_type {
        "post" | "posts" => list_posts(folio, format),
        "category" | "categories" => list_categories(folio, format),
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, category",
                content_type
            );
        }
    }
}

fn list_posts(folio: &Folio, format: ListFormat) -> Result<()> {
    match format {
        ListFormat::Text => {
            println!("Posts ({}):", folio.registry.post_count());
            for category in folio.registry.categories() {
                for post in folio.registry.list_by_category(&category.slug) {
                    println!(
                        "  {} - {} [{}/{}]",
                        post.published, post.title, category.slug, post.slug
                    );
                }
            }
        }
        ListFormat::Json => {
            let posts: Vec<_> = folio
                .registry
                .categories()
                .flat_map(|category| {
                    folio
                        .registry
                        .list_by_category(&category.slug)
                        .iter()
                        .map(|post| {
                            json!({
                                "category": category.slug,
                                "slug": post.slug,
                                "title": post.title,
                                "description": post.description,
                                "published": post.published,
                            })
                        })
                        .collect::<Vec<_>>()
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&posts)?);
        }
    }
    Ok(())
}

fn list_categories(folio: &Folio, format: ListFormat) -> Result<()> {
    match format {
        ListFormat::Text => {
            println!("Categories ({}):", folio.registry.category_count());
            for category in folio.registry.categories() {
                let count = folio.registry.list_by_category(&category.slug).len();
                println!("  {} ({}) - {}", category.slug, count, category.name);
            }
        }
        ListFormat::Json => {
            let categories: Vec<_> = folio
                .registry
                .categories()
                .map(|category| {
                    json!({
                        "slug": category.slug,
                        "name": category.name,
                        "description": category.description,
                        "posts": folio.registry.list_by_category(&category.slug).len(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&categories)?);
        }
    }
    Ok(())
}
