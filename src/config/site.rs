//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration.
///
/// Everything the presentation layer shows outside the blog registry
/// (landing page copy, showcase cards, social links) lives here so it can
/// be overridden from `_config.yml` without touching code. Defaults render
/// a complete site when no config file exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,
    pub tagline: String,
    pub bio: String,
    pub email: String,
    pub language: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub public_dir: String,

    // Social
    pub github_username: String,
    pub linkedin_username: String,

    // Landing page showcases
    pub projects: Vec<ShowcaseItem>,
    pub courses: Vec<ShowcaseItem>,
    pub profiles: Vec<ProfileLink>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Buya.dev".to_string(),
            author: "Buya".to_string(),
            tagline: "Software Engineer • Problem Solver • Learner".to_string(),
            bio: "I'm specialized in mobile and backend development. I build \
                  user-focused applications, streamline workflows, and solve \
                  complex problems. I enjoy experimenting with new technologies \
                  and continuously improving through projects, online courses, \
                  and coding challenges."
                .to_string(),
            email: "buyanjargal023@gmail.com".to_string(),
            language: "en".to_string(),

            url: "https://buya.dev".to_string(),
            root: "/".to_string(),

            public_dir: "public".to_string(),

            github_username: "Buya023".to_string(),
            linkedin_username: String::new(),

            projects: vec![
                ShowcaseItem::new(
                    "Flappy Bird",
                    "A Python PyGame project of the classic game.",
                    "",
                ),
                ShowcaseItem::new(
                    "Drum Kit",
                    "Press W A S D J K L to play drum sounds.",
                    "",
                ),
                ShowcaseItem::new(
                    "Dice Game",
                    "Spacebar triggers the game and shows a result.",
                    "",
                ),
            ],
            courses: vec![
                ShowcaseItem::new(
                    "Web Development Bootcamp",
                    "HTML, CSS, JS, React, Node basics.",
                    "",
                ),
                ShowcaseItem::new(
                    "Python Fundamentals",
                    "Python basics and Pygame projects.",
                    "",
                ),
                ShowcaseItem::new(
                    "Data Structures",
                    "Efficient problem solving approaches.",
                    "",
                ),
            ],
            profiles: vec![
                ProfileLink::new("AtCoder", "https://atcoder.jp/users/Buya"),
                ProfileLink::new("LeetCode", "https://leetcode.com/Buyanjargal/"),
                ProfileLink::new("Codeforces", "https://codeforces.com/profile/buya4"),
            ],
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// One card on the landing page (project or course)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ShowcaseItem {
    pub name: String,
    pub description: String,
    pub link: String,
}

impl ShowcaseItem {
    pub fn new(name: &str, description: &str, link: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            link: link.to_string(),
        }
    }
}

/// A coding-competition profile link
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProfileLink {
    pub name: String,
    pub url: String,
}

impl ProfileLink {
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Buya.dev");
        assert_eq!(config.root, "/");
        assert_eq!(config.projects.len(), 3);
        assert_eq!(config.profiles.len(), 3);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Site
author: Test User
url: https://example.com
root: /site/
projects:
  - name: Demo
    description: A demo project.
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Site");
        assert_eq!(config.author, "Test User");
        assert_eq!(config.root, "/site/");
        assert_eq!(config.projects.len(), 1);
        assert_eq!(config.projects[0].name, "Demo");
        // Unspecified fields fall back to defaults
        assert_eq!(config.public_dir, "public");
    }
}
