//! Show a single post or page metadata as JSON

use anyhow::{bail, Result};

use crate::content::{Lang, PostData};
use crate::seo::{self, PageMeta};
use crate::Blog;

/// How a post is addressed on the command line
#[derive(Debug, Clone)]
pub enum PostRef {
    Permalink(String),
    Slug { lang: Lang, slug: String },
}

impl PostRef {
    fn resolve(&self, blog: &Blog) -> Result<PostData> {
        let index = blog.index();
        let post = match self {
            PostRef::Permalink(route) => index.get_by_permalink(route)?,
            PostRef::Slug { lang, slug } => index.get_by_slug(slug, *lang)?,
        };
        match post {
            Some(post) => Ok(post),
            None => bail!("No post found for {}", self),
        }
    }
}

impl std::fmt::Display for PostRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostRef::Permalink(route) => write!(f, "{}", route),
            PostRef::Slug { lang, slug } => write!(f, "{}/{}", lang, slug),
        }
    }
}

/// Print a post, including its body, as JSON
pub fn run(blog: &Blog, post: &PostRef) -> Result<()> {
    let post = post.resolve(blog)?;
    println!("{}", serde_json::to_string_pretty(&post)?);
    Ok(())
}

/// Page metadata for a route: `/en/` and `/tr/` are the home pages, anything
/// else is looked up as a post permalink
pub fn page_meta(blog: &Blog, route: &str) -> Result<PageMeta> {
    if let Ok(lang) = route.trim_matches('/').parse::<Lang>() {
        return Ok(seo::home_meta(&blog.config, lang));
    }

    let post = PostRef::Permalink(route.to_string()).resolve(blog)?;
    Ok(seo::post_meta(&blog.config, &post))
}

/// Print page metadata as JSON
pub fn meta(blog: &Blog, route: &str) -> Result<()> {
    let meta = page_meta(blog, route)?;
    println!("{}", serde_json::to_string_pretty(&meta)?);
    Ok(())
}
