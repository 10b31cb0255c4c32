//! folio-rs: a personal portfolio and blog site in a single binary
//!
//! All content is compiled into the program: the blog registry is built
//! from a literal table at startup and the post bodies are embedded
//! markdown. The binary can serve the site over HTTP or write a static
//! HTML tree.

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use content::Registry;

/// The main application: configuration plus the immutable content registry.
///
/// Built once at startup. The registry never changes afterwards, so the
/// whole struct is cheap to clone and safe to share across request
/// handlers without locking.
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// The content registry, validated at construction
    pub registry: Arc<Registry>,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
}

impl Folio {
    /// Create a new instance from a directory.
    ///
    /// Reads `_config.yml` when present, falls back to defaults otherwise,
    /// and builds the compiled-in content registry. A malformed content
    /// table fails here, before anything is served.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let registry = Arc::new(content::catalog::builtin()?);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            registry,
            base_dir,
            public_dir,
        })
    }

    /// Generate the static site
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_without_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        assert_eq!(folio.config.title, "Buya.dev");
        assert_eq!(folio.public_dir, dir.path().join("public"));
        assert_eq!(folio.registry.category_count(), 3);
    }

    #[test]
    fn test_new_reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("_config.yml"),
            "title: Custom\npublic_dir: out\n",
        )
        .unwrap();
        let folio = Folio::new(dir.path()).unwrap();
        assert_eq!(folio.config.title, "Custom");
        assert_eq!(folio.public_dir, dir.path().join("out"));
    }
}
