//! Generator module - renders site pages and writes the static HTML tree
//!
//! All pages are rendered from the in-memory content registry and the site
//! configuration. The server reuses the same rendering paths, so serve and
//! generate output are identical.

use anyhow::Result;
use std::fs;
use std::path::Path;
use tera::Context;

use crate::content::{html_escape, Category, ContentEntry, MarkdownRenderer};
use crate::helpers::url_for;
use crate::templates::{
    CategoryData, ConfigData, PostCardData, TemplateRenderer, STYLESHEET,
};
use crate::Folio;

/// Site page renderer and static generator
pub struct Generator {
    folio: Folio,
    renderer: TemplateRenderer,
    markdown: MarkdownRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(folio: &Folio) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;

        Ok(Self {
            folio: folio.clone(),
            renderer,
            markdown: MarkdownRenderer::new(),
        })
    }

    /// Generate the entire site
    pub fn generate(&self) -> Result<()> {
        let public_dir = &self.folio.public_dir;
        fs::create_dir_all(public_dir)?;

        // Stylesheet
        let css_dir = public_dir.join("css");
        fs::create_dir_all(&css_dir)?;
        fs::write(css_dir.join("main.css"), STYLESHEET)?;

        // Landing page
        write_page(&public_dir.join("index.html"), &self.render_home()?)?;

        // Blog index
        let blog_dir = public_dir.join("blog");
        fs::create_dir_all(&blog_dir)?;
        write_page(&blog_dir.join("index.html"), &self.render_blog_index()?)?;

        // Category listings and post pages
        let mut pages = 2;
        for category in self.folio.registry.categories() {
            let category_dir = blog_dir.join(&category.slug);
            fs::create_dir_all(&category_dir)?;
            write_page(
                &category_dir.join("index.html"),
                &self.render_category(&category.slug)?,
            )?;
            pages += 1;

            for post in self.folio.registry.list_by_category(&category.slug) {
                let post_dir = category_dir.join(&post.slug);
                fs::create_dir_all(&post_dir)?;
                let html = self.render_post(&category.slug, &post.slug)?.ok_or_else(|| {
                    anyhow::anyhow!("authored post missing: {}/{}", category.slug, post.slug)
                })?;
                write_page(&post_dir.join("index.html"), &html)?;
                pages += 1;
            }
        }

        // Not-found page for the hosting layer
        write_page(&public_dir.join("404.html"), &self.render_not_found()?)?;
        pages += 1;

        tracing::info!("Generated {} pages in {:?}", pages, public_dir);
        Ok(())
    }

    /// Render the landing page
    pub fn render_home(&self) -> Result<String> {
        let mut context = self.base_context();
        context.insert("projects", &self.folio.config.projects);
        context.insert("courses", &self.folio.config.courses);
        context.insert("profiles", &self.folio.config.profiles);
        self.renderer.render("home.html", &context)
    }

    /// Render the blog index: one card per known category
    pub fn render_blog_index(&self) -> Result<String> {
        let categories: Vec<CategoryData> = self
            .folio
            .registry
            .categories()
            .map(|c| self.category_data(c))
            .collect();

        let mut context = self.base_context();
        context.insert("categories", &categories);
        self.renderer.render("blog.html", &context)
    }

    /// Render a category listing.
    ///
    /// `category` is an untrusted path segment. An unknown category renders
    /// an empty listing with the (escaped) segment as heading, matching the
    /// lookup contract: unknown routes degrade to "nothing here".
    pub fn render_category(&self, category: &str) -> Result<String> {
        let (name, description) = match self.folio.registry.category(category) {
            Some(info) => (info.name.clone(), info.description.clone()),
            None => {
                let display = html_escape(&category.replace('-', " "));
                let lead = format!("A series of blogs on {}.", display);
                (display, lead)
            }
        };

        let posts: Vec<PostCardData> = self
            .folio
            .registry
            .list_by_category(category)
            .iter()
            .map(|post| self.post_card(category, post))
            .collect();

        let mut context = self.base_context();
        context.insert("category_name", &name);
        context.insert("category_description", &description);
        context.insert("posts", &posts);
        self.renderer.render("category.html", &context)
    }

    /// Render a single post page, or `None` when the (category, slug) pair
    /// does not address a post. Which of the two segments missed is not
    /// reported; the caller renders one generic not-found page either way.
    pub fn render_post(&self, category: &str, slug: &str) -> Result<Option<String>> {
        let Some(post) = self.folio.registry.find_by_slug(category, slug) else {
            return Ok(None);
        };

        let category_name = self
            .folio
            .registry
            .category(category)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| category.to_string());

        let content = self.markdown.render(post.body.markdown())?;

        let mut context = self.base_context();
        context.insert("post_title", &post.title);
        context.insert("post_published", &post.published);
        context.insert("post_content", &content);
        context.insert("category_name", &category_name);
        context.insert(
            "category_path",
            &url_for(&self.folio.config, &format!("blog/{}/", category)),
        );
        self.renderer.render("post.html", &context).map(Some)
    }

    /// Render the generic not-found page
    pub fn render_not_found(&self) -> Result<String> {
        let context = self.base_context();
        self.renderer.render("not_found.html", &context)
    }

    fn base_context(&self) -> Context {
        let mut context = Context::new();
        context.insert("config", &self.build_config_data());
        context
    }

    fn build_config_data(&self) -> ConfigData {
        let config = &self.folio.config;
        ConfigData {
            title: config.title.clone(),
            author: config.author.clone(),
            tagline: config.tagline.clone(),
            bio: config.bio.clone(),
            email: config.email.clone(),
            url: config.url.clone(),
            root: url_for(config, ""),
            github_username: config.github_username.clone(),
            linkedin_username: config.linkedin_username.clone(),
        }
    }

    fn category_data(&self, info: &Category) -> CategoryData {
        CategoryData {
            slug: info.slug.clone(),
            name: info.name.clone(),
            description: info.description.clone(),
            path: url_for(&self.folio.config, &format!("blog/{}/", info.slug)),
        }
    }

    fn post_card(&self, category: &str, post: &ContentEntry) -> PostCardData {
        PostCardData {
            title: post.title.clone(),
            description: post.description.clone(),
            published: post.published.clone(),
            slug: post.slug.clone(),
            path: url_for(
                &self.folio.config,
                &format!("blog/{}/{}/", category, post.slug),
            ),
        }
    }
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    fs::write(path, html)?;
    tracing::debug!("Wrote {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_folio() -> Folio {
        let dir = tempfile::tempdir().unwrap();
        Folio::new(dir.path()).unwrap()
    }

    #[test]
    fn test_render_home_contains_showcases() {
        let folio = test_folio();
        let generator = Generator::new(&folio).unwrap();
        let html = generator.render_home().unwrap();
        assert!(html.contains(&folio.config.author));
        assert!(html.contains("My Projects"));
        assert!(html.contains("Coding Competition Profiles"));
    }

    #[test]
    fn test_render_blog_index_lists_all_categories() {
        let folio = test_folio();
        let generator = Generator::new(&folio).unwrap();
        let html = generator.render_blog_index().unwrap();
        for category in folio.registry.categories() {
            assert!(html.contains(&category.name));
        }
    }

    #[test]
    fn test_render_category_preserves_order() {
        let folio = test_folio();
        let generator = Generator::new(&folio).unwrap();
        let html = generator.render_category("system-design").unwrap();
        let first = html.find("/blog/system-design/chapter-1/").unwrap();
        let second = html.find("/blog/system-design/chapter-2/").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_render_unknown_category_is_empty_listing() {
        let folio = test_folio();
        let generator = Generator::new(&folio).unwrap();
        let html = generator.render_category("nonexistent-category").unwrap();
        assert!(html.contains("Nothing here yet."));
        assert!(!html.contains("Read Blog"));
    }

    #[test]
    fn test_render_unknown_category_escapes_segment() {
        let folio = test_folio();
        let generator = Generator::new(&folio).unwrap();
        let html = generator.render_category("<script>x</script>").unwrap();
        assert!(!html.contains("<script>x"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_render_post_and_not_found() {
        let folio = test_folio();
        let generator = Generator::new(&folio).unwrap();

        let html = generator
            .render_post("system-design", "chapter-2")
            .unwrap()
            .unwrap();
        assert!(html.contains("Breaking Down Chapter 2 of System Design Interview"));
        assert!(html.contains("September 2025"));
        assert!(html.contains("System Design"));

        assert!(generator
            .render_post("system-design", "chapter-9")
            .unwrap()
            .is_none());
        assert!(generator
            .render_post("nonexistent-category", "chapter-1")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_generate_writes_full_tree() {
        let dir = tempfile::tempdir().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        let generator = Generator::new(&folio).unwrap();
        generator.generate().unwrap();

        let public = &folio.public_dir;
        assert!(public.join("index.html").exists());
        assert!(public.join("css/main.css").exists());
        assert!(public.join("blog/index.html").exists());
        assert!(public.join("404.html").exists());
        assert!(public
            .join("blog/system-design/chapter-1/index.html")
            .exists());
        assert!(public
            .join("blog/learning/learning-react-hook-form/index.html")
            .exists());

        let html =
            fs::read_to_string(public.join("blog/leetcode/heapq-python/index.html")).unwrap();
        assert!(html.contains("Understanding Heap and heapq in Python"));
    }
}
