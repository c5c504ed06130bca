//! List site content

use anyhow::Result;

use crate::content::Lang;
use crate::helpers::format_date;
use crate::Blog;

/// List posts newest first, optionally for one language
pub fn run(blog: &Blog, lang: Option<Lang>) -> Result<()> {
    let posts = blog.index().list_all(lang)?;

    println!("Posts ({}):", posts.len());
    for post in posts {
        let date = format_date(&post.date, post.lang).unwrap_or(post.date);
        println!("  {} - {} [{}]", date, post.title, post.permalink);
    }

    Ok(())
}

/// List the slugs of one language
pub fn slugs(blog: &Blog, lang: Lang) -> Result<()> {
    for slug in blog.index().list_slugs(lang)? {
        println!("{}", slug);
    }
    Ok(())
}

/// List every (language, slug) pair
pub fn params(blog: &Blog) -> Result<()> {
    for param in blog.index().list_params()? {
        println!("{}\t{}", param.lang, param.slug);
    }
    Ok(())
}
