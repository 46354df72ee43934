//! The page entity.

use serde::Serialize;
use std::borrow::Cow;

/// A titled page with an opaque byte body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub body: Vec<u8>,
}

impl Page {
    pub fn new(title: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// A page that has not been written yet: title only, empty body.
    pub fn blank(title: impl Into<String>) -> Self {
        Self::new(title, Vec::new())
    }

    /// Template context for this page.
    pub fn context(&self) -> PageContext<'_> {
        PageContext {
            title: &self.title,
            body: String::from_utf8_lossy(&self.body),
        }
    }
}

/// The data a template sees: `Title` and `Body`.
///
/// The body is decoded lossily; invalid UTF-8 renders as U+FFFD.
#[derive(Debug, Serialize)]
pub struct PageContext<'a> {
    #[serde(rename = "Title")]
    pub title: &'a str,
    #[serde(rename = "Body")]
    pub body: Cow<'a, str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_page_has_empty_body() {
        let page = Page::blank("Draft");
        assert_eq!(page.title, "Draft");
        assert!(page.body.is_empty());
    }

    #[test]
    fn test_context_decodes_lossily() {
        let page = Page::new("Bin", vec![b'o', b'k', 0xff]);
        let ctx = page.context();
        assert_eq!(ctx.title, "Bin");
        assert_eq!(ctx.body, "ok\u{fffd}");
    }
}
