//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::config::SiteConfig;
use crate::content::Lang;

/// Characters escaped inside a URL path (everything but `/` and unreserved)
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Generate a full URL including the domain
///
/// # Examples
/// ```ignore
/// full_url_for(&config, "/en/hello/") // -> "https://doganozturk.dev/en/hello/"
/// ```
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    let base = config.url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, encode_path(path))
}

/// Path of a language's home page
pub fn home_path(lang: Lang) -> String {
    format!("/{}/", lang)
}

/// Path of a post in a language
pub fn post_path(lang: Lang, slug: &str) -> String {
    format!("/{}/{}/", lang, slug)
}

/// Encode a URL path, keeping `/` separators
pub fn encode_path(path: &str) -> String {
    utf8_percent_encode(path, PATH).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        SiteConfig {
            url: "https://example.com/".to_string(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_full_url_for() {
        let config = test_config();
        assert_eq!(
            full_url_for(&config, "/en/hello/"),
            "https://example.com/en/hello/"
        );
        assert_eq!(full_url_for(&config, "tr/"), "https://example.com/tr/");
        assert_eq!(full_url_for(&config, ""), "https://example.com/");
    }

    #[test]
    fn test_paths() {
        assert_eq!(home_path(Lang::Tr), "/tr/");
        assert_eq!(post_path(Lang::En, "hello"), "/en/hello/");
    }

    #[test]
    fn test_encode_path() {
        assert_eq!(encode_path("/tr/merhaba dünya/"), "/tr/merhaba%20d%C3%BCnya/");
        assert_eq!(encode_path("/en/plain-slug/"), "/en/plain-slug/");
    }
}
