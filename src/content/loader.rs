//! Content index - discovers and loads posts from the content tree
//!
//! The tree is laid out as `<root>/<lang>/<slug>/<document>`. Every call
//! scans the file system again; nothing is cached between calls.

use std::cmp::Reverse;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{permalink, ContentError, FrontMatter, Lang, PostData, PostFrontmatter, PostParams};

/// Default name of the document file inside a slug directory
pub const DEFAULT_DOCUMENT: &str = "index.mdx";

type Result<T> = std::result::Result<T, ContentError>;

/// A slug directory that holds a post document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostEntry {
    pub lang: Lang,
    pub slug: String,
    /// Full path of the document file
    pub path: PathBuf,
}

/// Read-only view over a content root
#[derive(Debug, Clone)]
pub struct ContentIndex {
    root: PathBuf,
    document: String,
}

impl ContentIndex {
    /// Create an index over `root`, expecting `index.mdx` documents
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            document: DEFAULT_DOCUMENT.to_string(),
        }
    }

    /// Use a different document filename inside slug directories
    pub fn with_document(mut self, document: impl Into<String>) -> Self {
        self.document = document.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding all posts of one language
    pub fn language_dir(&self, lang: Lang) -> PathBuf {
        self.root.join(lang.as_str())
    }

    /// Where the document for (`lang`, `slug`) would live
    pub fn document_path(&self, lang: Lang, slug: &str) -> PathBuf {
        self.language_dir(lang).join(slug).join(&self.document)
    }

    /// Enumerate the slug directories of one language that contain a
    /// document, in file-name order.
    ///
    /// A missing language directory yields no entries, and entries that
    /// cannot be inspected (such as dangling symlinks) are skipped. Documents
    /// are not read; this is the primitive every listing is built on.
    pub fn scan(&self, lang: Lang) -> Result<Vec<PostEntry>> {
        let dir = self.language_dir(lang);
        if !dir.exists() {
            tracing::debug!("No {} content at {:?}", lang, dir);
            return Ok(Vec::new());
        }

        let mut entries = Vec::new();
        for entry in WalkDir::new(&dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                // the language directory itself could not be read
                Err(e) if e.depth() == 0 => {
                    let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.clone());
                    return Err(ContentError::io(path, e.into()));
                }
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry in {:?}: {}", dir, e);
                    continue;
                }
            };

            let path = entry.path().join(&self.document);
            if !path.is_file() {
                continue;
            }

            let Some(slug) = entry.file_name().to_str() else {
                tracing::warn!("Skipping non UTF-8 post directory {:?}", entry.path());
                continue;
            };

            entries.push(PostEntry {
                lang,
                slug: slug.to_string(),
                path,
            });
        }

        Ok(entries)
    }

    /// Read and validate one document
    fn load(&self, lang: Lang, slug: &str, path: &Path) -> Result<(PostFrontmatter, String)> {
        tracing::debug!("Loading {}/{} from {:?}", lang, slug, path);

        let document = fs::read_to_string(path).map_err(|e| ContentError::io(path, e))?;
        let (fm, body) = FrontMatter::parse(&document).map_err(|source| {
            ContentError::FrontMatter {
                lang,
                slug: slug.to_string(),
                source,
            }
        })?;
        let frontmatter = fm.validate(lang, slug)?;

        Ok((frontmatter, body.to_string()))
    }

    /// Metadata of every post, newest first.
    ///
    /// `None` loads both languages. The first invalid document aborts the
    /// whole call. Posts whose date cannot be interpreted sort last.
    pub fn list_all(&self, lang: Option<Lang>) -> Result<Vec<PostFrontmatter>> {
        let languages: &[Lang] = match lang {
            Some(ref lang) => std::slice::from_ref(lang),
            None => &Lang::ALL,
        };

        let mut posts = Vec::new();
        for &language in languages {
            for entry in self.scan(language)? {
                let (frontmatter, _) = self.load(entry.lang, &entry.slug, &entry.path)?;
                posts.push(frontmatter);
            }
        }

        posts.sort_by_cached_key(|post| Reverse(post.published_at()));

        Ok(posts)
    }

    /// Slugs of one language that have a document. Metadata is not checked.
    pub fn list_slugs(&self, lang: Lang) -> Result<Vec<String>> {
        Ok(self.scan(lang)?.into_iter().map(|entry| entry.slug).collect())
    }

    /// Every publishable (language, slug) pair, English first
    pub fn list_params(&self) -> Result<Vec<PostParams>> {
        let mut params = Vec::new();
        for lang in Lang::ALL {
            params.extend(
                self.list_slugs(lang)?
                    .into_iter()
                    .map(|slug| PostParams::new(lang, slug)),
            );
        }
        Ok(params)
    }

    /// Load one post.
    ///
    /// `Ok(None)` when there is no document for the pair; a document that
    /// exists but fails validation is an error.
    pub fn get_by_slug(&self, slug: &str, lang: Lang) -> Result<Option<PostData>> {
        if !is_plain_slug(slug) {
            tracing::debug!("Rejecting slug {:?}", slug);
            return Ok(None);
        }

        let path = self.document_path(lang, slug);
        if !path.is_file() {
            return Ok(None);
        }

        let (frontmatter, content) = self.load(lang, slug, &path)?;
        Ok(Some(PostData {
            frontmatter,
            slug: slug.to_string(),
            content,
        }))
    }

    /// Load the post a route such as `/tr/merhaba/` points at
    pub fn get_by_permalink(&self, route: &str) -> Result<Option<PostData>> {
        let (lang, slug) = permalink::split_route(route);
        self.get_by_slug(slug, lang)
    }
}

/// A slug must name a single directory below the language root
fn is_plain_slug(slug: &str) -> bool {
    !slug.is_empty() && slug != "." && slug != ".." && !slug.contains(['/', '\\'])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        let index = ContentIndex::new("/site/content/posts");
        assert_eq!(
            index.language_dir(Lang::Tr),
            PathBuf::from("/site/content/posts/tr")
        );
        assert_eq!(
            index.document_path(Lang::En, "hello"),
            PathBuf::from("/site/content/posts/en/hello/index.mdx")
        );

        let index = index.with_document("index.md");
        assert_eq!(
            index.document_path(Lang::En, "hello"),
            PathBuf::from("/site/content/posts/en/hello/index.md")
        );
    }

    #[test]
    fn test_plain_slug() {
        assert!(is_plain_slug("hello-world"));
        assert!(is_plain_slug("merhaba_dünya"));
        assert!(!is_plain_slug(""));
        assert!(!is_plain_slug(".."));
        assert!(!is_plain_slug("nested/slug"));
        assert!(!is_plain_slug("..\\up"));
    }

    #[test]
    fn test_missing_root_is_empty() {
        let index = ContentIndex::new("/definitely/not/here");
        assert!(index.scan(Lang::En).unwrap().is_empty());
        assert!(index.list_all(None).unwrap().is_empty());
        assert!(index.list_params().unwrap().is_empty());
        assert!(index.get_by_slug("hello", Lang::En).unwrap().is_none());
    }
}
