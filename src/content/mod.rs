//! Content module - languages, posts, front-matter and the content index

mod error;
mod frontmatter;
mod lang;
pub mod loader;
pub mod permalink;
mod post;

pub use error::ContentError;
pub use frontmatter::FrontMatter;
pub use lang::{Lang, UnknownLang};
pub use loader::{ContentIndex, PostEntry};
pub use post::{parse_date, PostData, PostFrontmatter, PostParams};
