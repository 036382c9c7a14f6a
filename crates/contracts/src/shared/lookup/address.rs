//! Overlay-scoped content addresses.
//!
//! An address names the content target to load into and how the href is obtained:
//!
//! | form                   | meaning                                         |
//! |------------------------|-------------------------------------------------|
//! | `target::::/core/a/`   | load the href as is                             |
//! | `target::&page=2`      | merge the query into the target's current href  |
//! | `target::filters/`     | resolve relative to the target's current href   |

use std::fmt;

use super::error::LookupError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressPath {
    Absolute(String),
    Query(String),
    Relative(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentAddress {
    pub target: String,
    pub path: AddressPath,
}

impl ContentAddress {
    pub fn absolute(target: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            path: AddressPath::Absolute(href.into()),
        }
    }

    pub fn query(target: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            path: AddressPath::Query(query.into()),
        }
    }

    pub fn relative(target: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            path: AddressPath::Relative(path.into()),
        }
    }

    pub fn parse(address: &str) -> Result<Self, LookupError> {
        let malformed = || LookupError::MalformedAddress {
            address: address.to_string(),
        };
        let (target, rest) = address.split_once("::").ok_or_else(malformed)?;
        if target.is_empty() {
            return Err(malformed());
        }
        let path = if let Some(href) = rest.strip_prefix("::") {
            AddressPath::Absolute(href.to_string())
        } else if let Some(query) = rest.strip_prefix('&') {
            AddressPath::Query(query.to_string())
        } else {
            AddressPath::Relative(rest.to_string())
        };
        Ok(Self {
            target: target.to_string(),
            path,
        })
    }

    /// Concrete href to request, given the href currently shown in the target.
    pub fn resolve(&self, current: Option<&str>) -> String {
        match &self.path {
            AddressPath::Absolute(href) => href.clone(),
            AddressPath::Query(query) => merge_query(current.unwrap_or_default(), query),
            AddressPath::Relative(path) => {
                if path.starts_with('/') {
                    return path.clone();
                }
                let current = strip_fragment(current.unwrap_or_default());
                let (current_path, current_query) = match current.split_once('?') {
                    Some((p, q)) => (p, Some(q)),
                    None => (current, None),
                };
                let base = match current_path.rfind('/') {
                    Some(i) => &current_path[..=i],
                    None => "",
                };
                match current_query {
                    Some(q) if !q.is_empty() => format!("{base}{path}?{q}"),
                    _ => format!("{base}{path}"),
                }
            }
        }
    }
}

impl fmt::Display for ContentAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            AddressPath::Absolute(href) => write!(f, "{}::::{}", self.target, href),
            AddressPath::Query(query) => write!(f, "{}::&{}", self.target, query),
            AddressPath::Relative(path) => write!(f, "{}::{}", self.target, path),
        }
    }
}

/// Re-scope a paginator or filter link into `target`: a leading `?` becomes `target::&`.
///
/// Links that are not bare query strings are left alone (`None`).
pub fn rewrite_query_link(href: &str, target: &str) -> Option<ContentAddress> {
    href.strip_prefix('?')
        .map(|query| ContentAddress::query(target, query))
}

/// Record identifier of a listing row link (`../42/` → `42`).
pub fn record_id_from_href(href: &str) -> String {
    let trimmed = href.strip_suffix('/').unwrap_or(href);
    match trimmed.rfind('/') {
        Some(i) => trimmed[i + 1..].to_string(),
        None => trimmed.to_string(),
    }
}

fn strip_fragment(href: &str) -> &str {
    match href.find('#') {
        Some(i) => &href[..i],
        None => href,
    }
}

fn query_key(pair: &str) -> &str {
    pair.split_once('=').map(|(k, _)| k).unwrap_or(pair)
}

/// Merge `query` into the query string of `href`; same keys are replaced in place.
fn merge_query(href: &str, query: &str) -> String {
    let href = strip_fragment(href);
    let (path, existing) = match href.split_once('?') {
        Some((p, q)) => (p, q),
        None => (href, ""),
    };

    let mut pairs: Vec<&str> = existing.split('&').filter(|p| !p.is_empty()).collect();
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let key = query_key(pair);
        match pairs.iter().position(|p| query_key(p) == key) {
            Some(i) => pairs[i] = pair,
            None => pairs.push(pair),
        }
    }

    if pairs.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, pairs.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forms() {
        assert_eq!(
            ContentAddress::parse("lupicka-overlay::::../../core/author/?pop").unwrap(),
            ContentAddress::absolute("lupicka-overlay", "../../core/author/?pop")
        );
        assert_eq!(
            ContentAddress::parse("lupicka-overlay::&p=2").unwrap(),
            ContentAddress::query("lupicka-overlay", "p=2")
        );
        assert_eq!(
            ContentAddress::parse("lupicka-overlay::filters/").unwrap(),
            ContentAddress::relative("lupicka-overlay", "filters/")
        );
        assert!(ContentAddress::parse("no-target").is_err());
        assert!(ContentAddress::parse("::&p=2").is_err());
    }

    #[test]
    fn test_display_matches_parse() {
        let address = ContentAddress::query("lupicka-overlay", "q=jane");
        assert_eq!(address.to_string(), "lupicka-overlay::&q=jane");
        assert_eq!(ContentAddress::parse(&address.to_string()).unwrap(), address);
    }

    #[test]
    fn test_resolve_query_merges_keys() {
        let page2 = ContentAddress::query("o", "p=2");
        assert_eq!(
            page2.resolve(Some("/admin/core/author/?pop")),
            "/admin/core/author/?pop&p=2"
        );
        let page3 = ContentAddress::query("o", "p=3");
        assert_eq!(
            page3.resolve(Some("/admin/core/author/?pop&p=2")),
            "/admin/core/author/?pop&p=3"
        );
        assert_eq!(page3.resolve(None), "?p=3");
    }

    #[test]
    fn test_resolve_relative() {
        let filters = ContentAddress::relative("o", "filters/");
        assert_eq!(
            filters.resolve(Some("/admin/core/author/?pop#x")),
            "/admin/core/author/filters/?pop"
        );
        assert_eq!(
            ContentAddress::relative("o", "/abs/").resolve(Some("/admin/")),
            "/abs/"
        );
    }

    #[test]
    fn test_rewrite_query_link() {
        assert_eq!(
            rewrite_query_link("?p=2", "lupicka-overlay").unwrap().to_string(),
            "lupicka-overlay::&p=2"
        );
        assert_eq!(rewrite_query_link("/elsewhere/", "lupicka-overlay"), None);
    }

    #[test]
    fn test_record_id_from_href() {
        assert_eq!(record_id_from_href("42/"), "42");
        assert_eq!(record_id_from_href("../../core/author/42/"), "42");
        assert_eq!(record_id_from_href("42"), "42");
    }
}
