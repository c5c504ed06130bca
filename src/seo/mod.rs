//! SEO metadata for language home pages and post pages
//!
//! The output mirrors what page heads need: canonical URL, alternate
//! language links, a Twitter card and Open Graph properties.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::SiteConfig;
use crate::content::{Lang, PostData};
use crate::helpers::{full_url_for, home_path, post_path};

/// Metadata of one page
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub alternates: Alternates,
    pub twitter: TwitterMeta,
    pub open_graph: OpenGraph,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Alternates {
    pub canonical: String,
    /// Absolute URL of the page in every language
    pub languages: BTreeMap<Lang, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwitterMeta {
    pub card: String,
    pub site: String,
    pub creator: String,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
    pub images: Vec<String>,
    pub description: String,
    pub site_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_time: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,
}

/// Metadata of a language's home page
pub fn home_meta(config: &SiteConfig, lang: Lang) -> PageMeta {
    let title = config.title.clone();
    let description = config.description(lang).to_string();
    let url = full_url_for(config, &home_path(lang));
    let languages = Lang::ALL
        .into_iter()
        .map(|l| (l, full_url_for(config, &home_path(l))))
        .collect();

    PageMeta {
        alternates: Alternates {
            canonical: url.clone(),
            languages,
        },
        twitter: twitter(config, &title, &description),
        open_graph: OpenGraph {
            title: title.clone(),
            kind: "article".to_string(),
            url,
            images: images(config),
            description: description.clone(),
            site_name: config.site_name.clone(),
            published_time: None,
            authors: Vec::new(),
        },
        title,
        description,
    }
}

/// Metadata of a post page.
///
/// Canonical and alternate links are built from the directory slug, which is
/// how post routes are generated; the Open Graph URL uses the permalink.
pub fn post_meta(config: &SiteConfig, post: &PostData) -> PageMeta {
    let fm = &post.frontmatter;
    let languages = Lang::ALL
        .into_iter()
        .map(|l| (l, full_url_for(config, &post_path(l, &post.slug))))
        .collect();

    PageMeta {
        title: fm.title.clone(),
        description: fm.description.clone(),
        alternates: Alternates {
            canonical: full_url_for(config, &post_path(fm.lang, &post.slug)),
            languages,
        },
        twitter: twitter(config, &fm.title, &fm.description),
        open_graph: OpenGraph {
            title: fm.title.clone(),
            kind: "article".to_string(),
            url: full_url_for(config, &fm.permalink),
            images: images(config),
            description: fm.description.clone(),
            site_name: config.site_name.clone(),
            published_time: Some(fm.date.clone()),
            authors: vec![config.author.clone()],
        },
    }
}

fn twitter(config: &SiteConfig, title: &str, description: &str) -> TwitterMeta {
    TwitterMeta {
        card: "summary".to_string(),
        site: config.title.clone(),
        creator: config.author.clone(),
        title: title.to_string(),
        description: description.to_string(),
        images: images(config),
    }
}

fn images(config: &SiteConfig) -> Vec<String> {
    if config.image.is_empty() {
        return Vec::new();
    }
    if config.image.starts_with("http://") || config.image.starts_with("https://") {
        vec![config.image.clone()]
    } else {
        vec![full_url_for(config, &config.image)]
    }
}
