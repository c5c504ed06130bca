//! Front-matter parsing and validation

use serde_yaml::{Mapping, Value};

use super::{permalink, ContentError, Lang, PostFrontmatter};

const DELIMITER: &str = "---";

/// The raw key/value header of a post document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    data: Mapping,
}

impl FrontMatter {
    /// Split a document into its front-matter and body.
    ///
    /// The header is a YAML mapping between a `---` line at the very start of
    /// the document and the next line starting with `---`. A document without
    /// an opening delimiter has an empty header and is all body. An empty or
    /// `null` header is an empty mapping.
    pub fn parse(document: &str) -> Result<(Self, &str), serde_yaml::Error> {
        let (yaml, body) = split(document);
        let data = match yaml {
            Some(yaml) if !yaml.trim().is_empty() => match serde_yaml::from_str::<Value>(yaml)? {
                Value::Null => Mapping::new(),
                Value::Mapping(map) => map,
                other => serde_yaml::from_value::<Mapping>(other)?,
            },
            _ => Mapping::new(),
        };
        Ok((Self { data }, body))
    }

    /// Look up a raw header value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// A header value that is present, a string, and not empty
    fn non_empty_str(&self, key: &str) -> Option<&str> {
        match self.get(key) {
            Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    /// Validate the required fields and build the post's metadata.
    ///
    /// `lang` comes from the directory the document was found in; a `lang`
    /// key in the header is ignored.
    ///
    /// An unquoted `date: 2025-01-01` counts as a string here. YAML loaders
    /// that resolve timestamps would reject it as a non-string date; quote
    /// dates to stay portable.
    pub fn validate(&self, lang: Lang, slug: &str) -> Result<PostFrontmatter, ContentError> {
        let required = |field: &'static str| {
            self.non_empty_str(field)
                .ok_or_else(|| ContentError::InvalidField {
                    field,
                    lang,
                    slug: slug.to_string(),
                })
        };

        let title = required("title")?;
        let description = required("description")?;
        let date = required("date")?;
        let raw_permalink = required("permalink")?;

        Ok(PostFrontmatter {
            title: title.to_string(),
            description: description.to_string(),
            date: date.to_string(),
            permalink: permalink::normalize(raw_permalink, lang),
            lang,
        })
    }
}

/// Returns (header, body). The header is `None` when the document does not
/// open with a delimiter line.
fn split(document: &str) -> (Option<&str>, &str) {
    let document = document.strip_prefix('\u{feff}').unwrap_or(document);

    let Some(rest) = document.strip_prefix(DELIMITER) else {
        return (None, document);
    };
    // `----` is a thematic break, not a delimiter
    if rest.starts_with('-') {
        return (None, document);
    }

    // Anything after the opening delimiter on its line is ignored
    let rest = match rest.find('\n') {
        Some(pos) => &rest[pos + 1..],
        None => "",
    };

    let close = if rest.starts_with(DELIMITER) {
        Some(0)
    } else {
        rest.find("\n---").map(|pos| pos + 1)
    };

    match close {
        Some(pos) => {
            let yaml = &rest[..pos];
            let after = &rest[pos + DELIMITER.len()..];
            let body = match after.find('\n') {
                Some(nl) => &after[nl + 1..],
                None => "",
            };
            (Some(yaml), body)
        }
        None => (Some(rest), ""),
    }
}
