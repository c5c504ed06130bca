//! Site-level tasks over a temporary blog

use std::fs;

use blog_index::commands::{check, show};
use blog_index::generator::all_urls;
use blog_index::Blog;
use tempfile::TempDir;

fn write_post(blog: &Blog, lang: &str, slug: &str, permalink: &str, date: &str) {
    let dir = blog.content_dir.join(lang).join(slug);
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("index.mdx"),
        format!(
            "---\ntitle: \"{slug}\"\ndescription: \"About {slug}\"\ndate: \"{date}\"\npermalink: \"{permalink}\"\n---\nBody\n"
        ),
    )
    .unwrap();
}

fn sample_blog() -> (TempDir, Blog) {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("_config.yml"),
        "url: https://blog.example.com/\npublic_dir: public\n",
    )
    .unwrap();
    let blog = Blog::new(tmp.path()).unwrap();
    write_post(&blog, "en", "hello", "/hello/", "2024-03-01");
    write_post(&blog, "tr", "merhaba", "/tr/merhaba/", "2024-12-15");
    (tmp, blog)
}

#[test]
fn test_blog_reads_config() {
    let (tmp, blog) = sample_blog();
    assert_eq!(blog.config.url, "https://blog.example.com/");
    assert_eq!(blog.content_dir, tmp.path().join("content/posts"));
    assert_eq!(blog.public_dir, tmp.path().join("public"));
}

#[test]
fn test_blog_without_config_uses_defaults() {
    let tmp = TempDir::new().unwrap();
    let blog = Blog::new(tmp.path()).unwrap();
    assert_eq!(blog.config.url, "https://doganozturk.dev");
    assert!(blog.index().list_all(None).unwrap().is_empty());
}

#[test]
fn test_all_urls() {
    let (_tmp, blog) = sample_blog();
    assert_eq!(
        all_urls(&blog).unwrap(),
        vec![
            "https://blog.example.com/en/",
            "https://blog.example.com/en/hello/",
            "https://blog.example.com/tr/",
            "https://blog.example.com/tr/merhaba/",
        ]
    );
}

#[test]
fn test_generate_and_clean() {
    let (_tmp, blog) = sample_blog();
    blog.generate().unwrap();

    let sitemap = fs::read_to_string(blog.public_dir.join("sitemap.xml")).unwrap();
    assert!(sitemap.contains("<loc>https://blog.example.com/tr/merhaba/</loc>"));
    assert!(sitemap.contains("<lastmod>2024-12-15</lastmod>"));

    let robots = fs::read_to_string(blog.public_dir.join("robots.txt")).unwrap();
    assert!(robots.contains("Sitemap: https://blog.example.com/sitemap.xml"));

    blog.clean().unwrap();
    assert!(!blog.public_dir.exists());
}

#[test]
fn test_generate_fails_on_invalid_post() {
    let (_tmp, blog) = sample_blog();
    let dir = blog.content_dir.join("en").join("broken");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("index.mdx"), "---\ntitle: Broken\n---\n").unwrap();

    let err = blog.generate().unwrap_err();
    assert!(err.to_string().contains("Missing or invalid description in en/broken"));
    assert!(!blog.public_dir.join("sitemap.xml").exists());
}

#[test]
fn test_check_clean_tree() {
    let (_tmp, blog) = sample_blog();
    assert!(check::check(&blog).unwrap().is_empty());
}

#[test]
fn test_check_reports_problems() {
    let (_tmp, blog) = sample_blog();
    write_post(&blog, "en", "renamed", "/old name/", "later");
    write_post(&blog, "en", "zz-copy", "/hello/", "2024-01-01");

    let problems = check::check(&blog).unwrap();
    let messages: Vec<_> = problems
        .iter()
        .map(|p| format!("{}: {}", p.location, p.message))
        .collect();

    assert!(messages.contains(&"en/renamed: permalink /en/old name/ is not canonical".to_string()));
    assert!(messages.contains(&"en/renamed: date \"later\" cannot be parsed".to_string()));
    assert!(messages
        .contains(&"en/renamed: permalink /en/old name/ does not resolve back to directory renamed".to_string()));
    assert!(messages
        .iter()
        .any(|m| m.starts_with("en/zz-copy: permalink /en/hello/ is also used by en/hello")));
}

#[test]
fn test_page_meta() {
    let (_tmp, blog) = sample_blog();

    let home = show::page_meta(&blog, "/tr/").unwrap();
    assert_eq!(home.alternates.canonical, "https://blog.example.com/tr/");

    let post = show::page_meta(&blog, "/tr/merhaba/").unwrap();
    assert_eq!(post.title, "merhaba");
    assert_eq!(post.open_graph.url, "https://blog.example.com/tr/merhaba/");

    assert!(show::page_meta(&blog, "/en/missing/").is_err());
}
