use crate::errors::{InvalidArgument, PaginationError};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Semantic relation of a navigation link to the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkRel {
    Prev,
    Next,
}

impl LinkRel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkRel::Prev => "prev",
            LinkRel::Next => "next",
        }
    }
}

impl Display for LinkRel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One navigable link produced by a render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDescriptor {
    pub href: String,
    pub label: String,
    pub rel: Option<LinkRel>,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl LinkDescriptor {
    pub fn numbered(page: u32, href: String, is_active: bool) -> Self {
        Self {
            href,
            label: page.to_string(),
            rel: None,
            is_active,
        }
    }

    pub fn relation(rel: LinkRel, label: impl Into<String>, href: String) -> Self {
        Self {
            href,
            label: label.into(),
            rel: Some(rel),
            is_active: false,
        }
    }

    /// Numbered links carry no relation; only prev/next do.
    pub fn is_numbered(&self) -> bool {
        self.rel.is_none()
    }
}

/// Literal text used for the previous/next links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkLabels {
    pub previous: String,
    pub next: String,
}

impl Default for LinkLabels {
    fn default() -> Self {
        Self {
            previous: "← Previous Page".to_string(),
            next: "Next Page →".to_string(),
        }
    }
}

impl LinkLabels {
    pub fn new(previous: impl Into<String>, next: impl Into<String>) -> Self {
        Self {
            previous: previous.into(),
            next: next.into(),
        }
    }
}

/// A page request that satisfies `1 <= current <= total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    current: u32,
    total: u32,
}

impl PageRequest {
    /// Validate a raw `(current, total)` pair.
    pub fn new(current: u32, total: u32) -> Result<Self, PaginationError> {
        if total == 0 {
            return Err(InvalidArgument::NoPages.into());
        }
        if current == 0 || current > total {
            return Err(InvalidArgument::CurrentOutOfRange { current, total }.into());
        }
        Ok(Self { current, total })
    }

    /// Snap a raw pair into range. The flag reports whether anything changed.
    pub fn clamped(current: u32, total: u32) -> (Self, bool) {
        let clamped_total = total.max(1);
        let clamped_current = current.clamp(1, clamped_total);
        let changed = clamped_total != total || clamped_current != current;
        (
            Self {
                current: clamped_current,
                total: clamped_total,
            },
            changed,
        )
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    pub fn is_last(&self) -> bool {
        self.current == self.total
    }

    pub fn previous(&self) -> Option<u32> {
        (!self.is_first()).then(|| self.current - 1)
    }

    pub fn next(&self) -> Option<u32> {
        (!self.is_last()).then(|| self.current + 1)
    }

    /// All page numbers, ascending.
    pub fn pages(&self) -> impl Iterator<Item = u32> {
        1..=self.total
    }
}
