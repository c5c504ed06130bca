//! Generate crawler files

use anyhow::Result;

use crate::generator::Generator;
use crate::Blog;

/// Write sitemap.xml and robots.txt into the public directory
pub fn run(blog: &Blog) -> Result<()> {
    let start = std::time::Instant::now();

    let count = Generator::new(blog).generate()?;

    let duration = start.elapsed();
    tracing::info!(
        "Generated {} urls into {:?} in {:.2}s",
        count,
        blog.public_dir,
        duration.as_secs_f64()
    );

    Ok(())
}
