// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turn an index href into an absolute URL on the current origin.
//!
//! Index hrefs are written relative to the site root, with or without a
//! leading slash (`guide.html#x`, `/api/regex.html`). Both resolve to
//! `<origin>/<path>`. Dot segments are collapsed the way a browser would, and
//! `..` never climbs above the origin. Empty segments inside the path are
//! kept; leading slashes collapse into one.

/// Resolve `href` against `origin` (e.g. `https://docs.example.com`).
pub fn resolve_href(origin: &str, href: &str) -> String {
    let origin = origin.trim_end_matches('/');

    // Query and fragment are kept verbatim
    let split = href.find(['?', '#']).unwrap_or(href.len());
    let (path, suffix) = href.split_at(split);

    format!("{}{}{}", origin, normalize_path(path), suffix)
}

/// Root `path` and collapse `.` and `..` segments.
fn normalize_path(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    let parts: Vec<&str> = path.trim_start_matches('/').split('/').collect();

    for part in &parts {
        match *part {
            "." => {}
            ".." => {
                segments.pop();
            }
            part => segments.push(part),
        }
    }

    // A trailing dot segment still means "this directory"
    let trailing_dir = matches!(parts.last(), Some(&".") | Some(&".."));
    let mut out = format!("/{}", segments.join("/"));
    if trailing_dir && !out.ends_with('/') {
        out.push('/');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://docs.example.com";

    #[test]
    fn test_relative_href_is_rooted() {
        assert_eq!(resolve_href(ORIGIN, "docs/x"), "https://docs.example.com/docs/x");
    }

    #[test]
    fn test_absolute_path_href() {
        assert_eq!(resolve_href(ORIGIN, "/docs/y"), "https://docs.example.com/docs/y");
    }

    #[test]
    fn test_origin_trailing_slash() {
        assert_eq!(
            resolve_href("https://docs.example.com/", "docs/x"),
            "https://docs.example.com/docs/x"
        );
    }

    #[test]
    fn test_fragment_and_query_preserved() {
        assert_eq!(
            resolve_href(ORIGIN, "guide/install.html#install-guide"),
            "https://docs.example.com/guide/install.html#install-guide"
        );
        assert_eq!(
            resolve_href(ORIGIN, "search.html?q=a/../b"),
            "https://docs.example.com/search.html?q=a/../b"
        );
    }

    #[test]
    fn test_dot_segments() {
        assert_eq!(resolve_href(ORIGIN, "a/./b/../c"), "https://docs.example.com/a/c");
        assert_eq!(resolve_href(ORIGIN, "../../x"), "https://docs.example.com/x");
        assert_eq!(resolve_href(ORIGIN, "a/b/.."), "https://docs.example.com/a/");
    }

    #[test]
    fn test_double_slash_stays_on_origin() {
        assert_eq!(
            resolve_href(ORIGIN, "//evil.example/x"),
            "https://docs.example.com/evil.example/x"
        );
    }

    #[test]
    fn test_interior_empty_segment_is_kept() {
        assert_eq!(
            resolve_href(ORIGIN, "api//x.html"),
            "https://docs.example.com/api//x.html"
        );
        assert_eq!(resolve_href(ORIGIN, "a//../b"), "https://docs.example.com/a/b");
    }

    #[test]
    fn test_empty_href_is_root() {
        assert_eq!(resolve_href(ORIGIN, ""), "https://docs.example.com/");
        assert_eq!(resolve_href(ORIGIN, "#top"), "https://docs.example.com/#top");
    }

    #[test]
    fn test_directory_href_keeps_trailing_slash() {
        assert_eq!(resolve_href(ORIGIN, "guide/"), "https://docs.example.com/guide/");
    }
}
