//! Permalink normalization and route parsing
//!
//! Permalinks end up in every generated URL, so the exact string shape
//! produced here is a compatibility contract with already published pages.

use lazy_static::lazy_static;
use regex::Regex;

use super::Lang;

lazy_static! {
    static ref CANONICAL: Regex = Regex::new(r"^/(en|tr)/[A-Za-z0-9_-]+/$").unwrap();
}

/// Build the canonical `/{lang}/{slug}/` permalink from an authored value.
///
/// One leading `/`, then one leading `tr/`, then one trailing `/` are removed
/// before the language prefix is applied. The `tr/` prefix is stripped no
/// matter which language directory the post came from: older posts were
/// authored under a single-language scheme that spelled it out.
pub fn normalize(raw: &str, lang: Lang) -> String {
    let rest = raw.strip_prefix('/').unwrap_or(raw);
    let rest = rest.strip_prefix("tr/").unwrap_or(rest);
    let rest = rest.strip_suffix('/').unwrap_or(rest);
    format!("/{}/{}/", lang, rest)
}

/// Split a route such as `/tr/merhaba/` into its language and slug.
///
/// Anything that does not start with `/tr/` is treated as English, including
/// malformed input; this is not a general route parser.
pub fn split_route(route: &str) -> (Lang, &str) {
    let lang = Lang::from_route(route);
    let slug = route
        .strip_prefix("/en/")
        .or_else(|| route.strip_prefix("/tr/"))
        .unwrap_or(route);
    let slug = slug.strip_suffix('/').unwrap_or(slug);
    (lang, slug)
}

/// Whether a permalink has the `/(en|tr)/<token>/` shape, where the token
/// holds only ASCII word characters and hyphens
pub fn is_canonical(permalink: &str) -> bool {
    CANONICAL.is_match(permalink)
}
