//! Validate the content tree

use anyhow::{bail, Result};
use std::collections::HashMap;

use crate::content::{permalink, Lang};
use crate::Blog;

/// Something wrong with a post that still loads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    /// `lang/slug`
    pub location: String,
    pub message: String,
}

/// Load every post and collect problems that would break its URL or its
/// position in listings. Invalid front-matter is returned as an error.
pub fn check(blog: &Blog) -> Result<Vec<Problem>> {
    let index = blog.index();
    let mut problems = Vec::new();
    let mut seen: HashMap<String, String> = HashMap::new();

    for lang in Lang::ALL {
        for entry in index.scan(lang)? {
            let location = format!("{}/{}", lang, entry.slug);
            let Some(post) = index.get_by_slug(&entry.slug, lang)? else {
                continue;
            };
            let fm = &post.frontmatter;
            let mut report = |message: String| {
                problems.push(Problem {
                    location: location.clone(),
                    message,
                })
            };

            if !permalink::is_canonical(&fm.permalink) {
                report(format!("permalink {} is not canonical", fm.permalink));
            }
            if fm.published_at().is_none() {
                report(format!("date {:?} cannot be parsed", fm.date));
            }
            let (_, route_slug) = permalink::split_route(&fm.permalink);
            if route_slug != entry.slug {
                report(format!(
                    "permalink {} does not resolve back to directory {}",
                    fm.permalink, entry.slug
                ));
            }
            if let Some(other) = seen.insert(fm.permalink.clone(), location.clone()) {
                report(format!("permalink {} is also used by {}", fm.permalink, other));
            }
        }
    }

    Ok(problems)
}

/// Print problems and fail when there are any
pub fn run(blog: &Blog) -> Result<()> {
    let problems = check(blog)?;
    if problems.is_empty() {
        println!("All posts OK");
        return Ok(());
    }

    for problem in &problems {
        println!("  {}: {}", problem.location, problem.message);
    }
    bail!("{} problem(s) found", problems.len());
}
