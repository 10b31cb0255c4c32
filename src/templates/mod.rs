//! Built-in site templates using the Tera template engine
//!
//! All templates are embedded directly in the binary; there is no theme
//! directory to load at runtime.

use anyhow::Result;
use serde::Serialize;
use tera::{Context, Tera};

/// Template renderer with the embedded folio theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Autoescaping is off: the generator passes pre-rendered HTML for
        // post bodies and pre-escaped strings for anything user-supplied.
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("folio/layout.html")),
            ("home.html", include_str!("folio/home.html")),
            ("blog.html", include_str!("folio/blog.html")),
            ("category.html", include_str!("folio/category.html")),
            ("post.html", include_str!("folio/post.html")),
            ("not_found.html", include_str!("folio/not_found.html")),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// The embedded stylesheet, written next to the generated pages
pub const STYLESHEET: &str = include_str!("folio/main.css");

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct ConfigData {
    pub title: String,
    pub author: String,
    pub tagline: String,
    pub bio: String,
    pub email: String,
    pub url: String,
    pub root: String,
    pub github_username: String,
    pub linkedin_username: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryData {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostCardData {
    pub title: String,
    pub description: String,
    pub published: String,
    pub slug: String,
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_compile() {
        // add_raw_templates parses every embedded template
        TemplateRenderer::new().unwrap();
    }

    #[test]
    fn test_render_not_found() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut context = Context::new();
        context.insert(
            "config",
            &ConfigData {
                title: "Test".to_string(),
                author: "Test".to_string(),
                tagline: String::new(),
                bio: String::new(),
                email: String::new(),
                url: "https://example.com".to_string(),
                root: "/".to_string(),
                github_username: String::new(),
                linkedin_username: String::new(),
            },
        );
        let html = renderer.render("not_found.html", &context).unwrap();
        assert!(html.contains("Content not found"));
    }
}
