use serde::{Deserialize, Serialize};

/// One page of a paginated listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page.
    pub content: Vec<T>,

    /// Zero-based page index.
    pub page: u32,

    /// Requested page size.
    pub size: u32,

    /// Number of pages available on the server.
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// An empty first page, shown before the first response arrives.
    #[must_use]
    pub const fn empty(size: u32) -> Self {
        Self {
            content: Vec::new(),
            page: 0,
            size,
            total_pages: 0,
        }
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 0
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page.saturating_add(1) < self.total_pages
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(page: u32, total_pages: u32) -> Page<u8> {
        Page {
            content: vec![1, 2, 3],
            page,
            size: 3,
            total_pages,
        }
    }

    #[test]
    fn test_first_page_navigation() {
        let first = page(0, 3);
        assert!(!first.has_previous());
        assert!(first.has_next());
    }

    #[test]
    fn test_middle_page_navigation() {
        let middle = page(1, 3);
        assert!(middle.has_previous());
        assert!(middle.has_next());
    }

    #[test]
    fn test_last_page_navigation() {
        let last = page(2, 3);
        assert!(last.has_previous());
        assert!(!last.has_next());
    }

    #[test]
    fn test_last_representable_page_has_no_next() {
        let last = page(u32::MAX, u32::MAX);
        assert!(last.has_previous());
        assert!(!last.has_next());
    }

    #[test]
    fn test_empty_page_has_no_navigation() {
        let empty = Page::<u8>::empty(3);
        assert!(!empty.has_previous());
        assert!(!empty.has_next());
        assert_eq!(empty.size, 3);
    }

    #[test]
    fn test_deserializes_camel_case_total_pages() {
        let json = r#"{"content":[4],"page":0,"size":3,"totalPages":2}"#;
        let page: Page<u8> = serde_json::from_str(json).unwrap();
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.content, vec![4]);
    }
}
