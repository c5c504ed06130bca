//! Print every publishable URL

use anyhow::Result;

use crate::generator::all_urls;
use crate::Blog;

/// Print one absolute URL per line, sorted
pub fn run(blog: &Blog) -> Result<()> {
    for url in all_urls(blog)? {
        println!("{}", url);
    }
    Ok(())
}
