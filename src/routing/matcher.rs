//! Page path matching.
//!
//! # Responsibilities
//! - Percent-decode the request path before matching
//! - Match `/(view|edit|save)/<title>` against the whole request path
//! - Validate the title (one or more ASCII alphanumerics)
//! - Extract the action and title on success
//!
//! # Design Decisions
//! - Matching is case-sensitive for the action segment
//! - No regex: a split and a character scan cover the grammar
//! - Any trailing or extra segment fails the match

use percent_encoding::percent_decode_str;
use std::fmt;
use std::str::FromStr;

/// The three page actions, one per route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    View,
    Edit,
    Save,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::View, Action::Edit, Action::Save];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::View => "view",
            Action::Edit => "edit",
            Action::Save => "save",
        }
    }

    /// URL of this action for `title`, e.g. `/edit/Home`.
    pub fn url_for(self, title: &str) -> String {
        format!("/{}/{}", self.as_str(), title)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view" => Ok(Action::View),
            "edit" => Ok(Action::Edit),
            "save" => Ok(Action::Save),
            _ => Err(()),
        }
    }
}

/// A request path that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePath {
    pub action: Action,
    pub title: String,
}

impl PagePath {
    /// Parse a request path. Returns `None` unless the entire path matches.
    pub fn parse(path: &str) -> Option<Self> {
        let rest = path.strip_prefix('/')?;
        let (action, title) = rest.split_once('/')?;
        let action = action.parse().ok()?;
        if !is_valid_title(title) {
            return None;
        }
        Some(Self {
            action,
            title: title.to_string(),
        })
    }

    /// Parse a path as it appears on the wire, decoding `%XX` escapes first.
    /// Escapes that decode to invalid UTF-8 fail the match.
    pub fn parse_encoded(raw: &str) -> Option<Self> {
        let decoded = percent_decode_str(raw).decode_utf8().ok()?;
        Self::parse(&decoded)
    }
}

/// True if `title` is one or more ASCII letters or digits.
pub fn is_valid_title(title: &str) -> bool {
    !title.is_empty() && title.bytes().all(|b| b.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_each_action() {
        for action in Action::ALL {
            let parsed = PagePath::parse(&action.url_for("Home42")).unwrap();
            assert_eq!(parsed.action, action);
            assert_eq!(parsed.title, "Home42");
        }
    }

    #[test]
    fn test_rejects_bad_titles() {
        let paths = [
            "/view/",
            "/view/has space",
            "/view/dash-ed",
            "/view/dot.txt",
            "/view/../etc",
            "/view/a/b",
            "/view/Home/",
            "/view/caf\u{e9}",
            "/view/%41",
        ];
        for path in paths {
            assert_eq!(PagePath::parse(path), None, "{path} should not match");
        }
    }

    #[test]
    fn test_rejects_unknown_shapes() {
        let paths = ["", "/", "/view", "view/Home", "/View/Home", "/delete/Home", "//Home"];
        for path in paths {
            assert_eq!(PagePath::parse(path), None, "{path} should not match");
        }
    }

    #[test]
    fn test_encoded_path_is_decoded() {
        let parsed = PagePath::parse_encoded("/view/%41bc").unwrap();
        assert_eq!(parsed.action, Action::View);
        assert_eq!(parsed.title, "Abc");

        assert_eq!(PagePath::parse_encoded("/%65dit/Home").unwrap().action, Action::Edit);
    }

    #[test]
    fn test_encoded_path_still_validated() {
        let paths = ["/view/a%2Fb", "/view/%2e%2e", "/view/a%20b", "/view/%ff", "/view/%"];
        for path in paths {
            assert_eq!(PagePath::parse_encoded(path), None, "{path} should not match");
        }
    }

    #[test]
    fn test_title_validation() {
        assert!(is_valid_title("a"));
        assert!(is_valid_title("ABCxyz0189"));
        assert!(!is_valid_title(""));
        assert!(!is_valid_title("under_score"));
    }
}
