//! Page-to-path mapping.
//!
//! The pagination view never builds URLs itself: every href it emits comes
//! from a [`PageRouter`]. Sites plug in their own URL scheme either with a
//! closure or with the configurable [`SiteRouter`].

/// Maps a 1-based page number to the path of that page.
///
/// Implementations must map page 1 to the listing root and must be
/// injective, so two different pages never share a path.
pub trait PageRouter {
    fn page_to_path(&self, page: u32) -> String;
}

impl<F> PageRouter for F
where
    F: Fn(u32) -> String,
{
    fn page_to_path(&self, page: u32) -> String {
        self(page)
    }
}

/// Router for the common static-site layout where the first page lives at the
/// base path and every following page at `{base}{n}` or `{base}{segment}/{n}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRouter {
    base_path: String,
    page_segment: Option<String>,
}

impl Default for SiteRouter {
    fn default() -> Self {
        Self {
            base_path: "/".to_string(),
            page_segment: None,
        }
    }
}

impl SiteRouter {
    pub fn new(base_path: &str) -> Self {
        Self {
            base_path: normalize_base_path(base_path),
            page_segment: None,
        }
    }

    /// Place numbered pages under an extra segment, e.g. `/blog/page/2`.
    pub fn with_page_segment(mut self, segment: &str) -> Self {
        let segment = segment.trim_matches('/');
        self.page_segment = (!segment.is_empty()).then(|| segment.to_string());
        self
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn page_segment(&self) -> Option<&str> {
        self.page_segment.as_deref()
    }
}

impl PageRouter for SiteRouter {
    fn page_to_path(&self, page: u32) -> String {
        if page <= 1 {
            return self.base_path.clone();
        }
        match &self.page_segment {
            Some(segment) => format!("{}{segment}/{page}", self.base_path),
            None => format!("{}{page}", self.base_path),
        }
    }
}

/// Ensure the base path starts and ends with exactly one `/`.
fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}
