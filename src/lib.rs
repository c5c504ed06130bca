//! blog-index: content index for a bilingual (English/Turkish) blog
//!
//! Posts live on disk as `<content_dir>/<lang>/<slug>/index.mdx`, each with a
//! YAML front-matter header. This crate discovers, validates and indexes them
//! and provides the build tasks that run over the index (URL listing,
//! sitemap, SEO metadata).

pub mod commands;
pub mod config;
pub mod content;
pub mod generator;
pub mod helpers;
pub mod seo;

use anyhow::Result;
use std::path::{Path, PathBuf};

use content::ContentIndex;

/// A blog site rooted at a base directory
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content root holding one directory per language
    pub content_dir: PathBuf,
    /// Output directory for generated files
    pub public_dir: PathBuf,
}

impl Blog {
    /// Open a site, reading `_config.yml` from `base_dir` when present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No _config.yml in {:?}, using defaults", base_dir);
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Open a site with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Self {
            config,
            base_dir,
            content_dir,
            public_dir,
        }
    }

    /// The content index over this site's posts
    pub fn index(&self) -> ContentIndex {
        ContentIndex::new(&self.content_dir).with_document(self.config.document.as_str())
    }

    /// Write sitemap.xml and robots.txt
    pub fn generate(&self) -> Result<()> {
        commands::generate::run(self)
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
