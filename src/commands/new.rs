//! Create a new post

use anyhow::{bail, Result};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use crate::content::Lang;
use crate::Blog;

/// Front-matter written into a freshly created post
#[derive(Serialize)]
struct Scaffold<'a> {
    title: &'a str,
    description: &'a str,
    date: String,
    permalink: String,
}

/// Create `<lang>/<slug>/<document>` with a complete front-matter.
///
/// The slug defaults to the slugified title. The description starts out as
/// the title so the post passes validation right away.
pub fn create_post(blog: &Blog, lang: Lang, title: &str, slug: Option<&str>) -> Result<PathBuf> {
    let slug = match slug {
        Some(s) => s.to_string(),
        None => slug::slugify(title),
    };
    if slug.is_empty() {
        bail!("Cannot derive a slug from title {:?}; pass --slug", title);
    }

    let index = blog.index();
    let file_path = index.document_path(lang, &slug);
    if file_path.exists() {
        bail!("File already exists: {:?}", file_path);
    }

    let header = serde_yaml::to_string(&Scaffold {
        title,
        description: title,
        date: chrono::Local::now().format("%Y-%m-%d").to_string(),
        permalink: format!("/{}/", slug),
    })?;
    let content = format!("---\n{}---\n\n", header);

    if let Some(dir) = file_path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(&file_path, content)?;

    tracing::info!("Created {}/{}", lang, slug);
    Ok(file_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    #[test]
    fn test_create_post_is_loadable() {
        let tmp = TempDir::new().unwrap();
        let blog = Blog::with_config(tmp.path(), SiteConfig::default());

        let path = create_post(&blog, Lang::Tr, "Merhaba Dünya: \"ilk\"", None).unwrap();
        assert!(path.ends_with("tr/merhaba-dunya-ilk/index.mdx"));

        let post = blog
            .index()
            .get_by_slug("merhaba-dunya-ilk", Lang::Tr)
            .unwrap()
            .unwrap();
        assert_eq!(post.frontmatter.title, "Merhaba Dünya: \"ilk\"");
        assert_eq!(post.frontmatter.permalink, "/tr/merhaba-dunya-ilk/");
    }

    #[test]
    fn test_create_post_refuses_overwrite() {
        let tmp = TempDir::new().unwrap();
        let blog = Blog::with_config(tmp.path(), SiteConfig::default());

        create_post(&blog, Lang::En, "Hello", Some("hello")).unwrap();
        assert!(create_post(&blog, Lang::En, "Hello again", Some("hello")).is_err());
    }
}
