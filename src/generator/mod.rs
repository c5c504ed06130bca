//! URL listing, sitemap and robots.txt generation

use anyhow::{Context, Result};
use std::fs;

use crate::content::{Lang, PostFrontmatter};
use crate::helpers::{date_w3c, full_url_for, home_path};
use crate::Blog;

/// One publishable URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteUrl {
    pub loc: String,
    /// `YYYY-MM-DD` of the post, when its date parses
    pub lastmod: Option<String>,
}

/// Every publishable URL of the site, sorted: the language home pages and
/// each post's permalink.
pub fn site_urls(blog: &Blog) -> Result<Vec<SiteUrl>> {
    let posts = blog.index().list_all(None)?;
    Ok(build_urls(blog, &posts))
}

fn build_urls(blog: &Blog, posts: &[PostFrontmatter]) -> Vec<SiteUrl> {
    let mut urls: Vec<SiteUrl> = Lang::ALL
        .into_iter()
        .map(|lang| SiteUrl {
            loc: full_url_for(&blog.config, &home_path(lang)),
            lastmod: None,
        })
        .collect();

    urls.extend(posts.iter().map(|post| SiteUrl {
        loc: full_url_for(&blog.config, &post.permalink),
        lastmod: post.published_at().map(|dt| date_w3c(&dt)),
    }));

    urls.sort_by_cached_key(|url| collation_key(&url.loc));
    urls
}

/// Punctuation in the order a root-locale collation ranks it, before digits
/// and letters
const PUNCTUATION: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

/// Sort key approximating a locale-aware comparison of URLs: punctuation,
/// then digits, then letters compared without case. Lowercase wins ties over
/// uppercase; the raw string breaks any remaining tie.
fn collation_key(s: &str) -> (Vec<(u8, u32)>, Vec<bool>, String) {
    let primary = s
        .chars()
        .map(|c| {
            if let Some(rank) = PUNCTUATION.find(c) {
                (0, rank as u32)
            } else if c.is_ascii_digit() {
                (1, c as u32)
            } else if c.is_alphabetic() {
                (2, c.to_lowercase().next().unwrap_or(c) as u32)
            } else {
                (3, c as u32)
            }
        })
        .collect();
    let case = s.chars().map(char::is_uppercase).collect();
    (primary, case, s.to_string())
}

/// Absolute URLs only, as consumed by external audit tools
pub fn all_urls(blog: &Blog) -> Result<Vec<String>> {
    Ok(site_urls(blog)?.into_iter().map(|u| u.loc).collect())
}

/// Writes the crawler-facing files into the public directory
pub struct Generator<'a> {
    blog: &'a Blog,
}

impl<'a> Generator<'a> {
    pub fn new(blog: &'a Blog) -> Self {
        Self { blog }
    }

    /// Generate sitemap.xml and robots.txt
    pub fn generate(&self) -> Result<usize> {
        let urls = site_urls(self.blog)?;

        fs::create_dir_all(&self.blog.public_dir)
            .with_context(|| format!("Failed to create {:?}", self.blog.public_dir))?;

        self.generate_sitemap(&urls)?;
        self.generate_robots()?;

        Ok(urls.len())
    }

    fn generate_sitemap(&self, urls: &[SiteUrl]) -> Result<()> {
        let output_path = self.blog.public_dir.join("sitemap.xml");
        fs::write(&output_path, render_sitemap(urls))?;
        tracing::info!("Generated sitemap.xml ({} urls)", urls.len());
        Ok(())
    }

    fn generate_robots(&self) -> Result<()> {
        let robots = format!(
            "# *\nUser-agent: *\nAllow: /\n\n# Host\nHost: {}\n\n# Sitemaps\nSitemap: {}\n",
            self.blog.config.url.trim_end_matches('/'),
            full_url_for(&self.blog.config, "sitemap.xml")
        );
        let output_path = self.blog.public_dir.join("robots.txt");
        fs::write(&output_path, robots)?;
        tracing::info!("Generated robots.txt");
        Ok(())
    }
}

fn render_sitemap(urls: &[SiteUrl]) -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">"#);
    xml.push('\n');

    for url in urls {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&url.loc)));
        if let Some(lastmod) = &url.lastmod {
            xml.push_str(&format!("    <lastmod>{}</lastmod>\n", lastmod));
        }
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Escape XML special characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
