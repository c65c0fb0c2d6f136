use crate::errors::PaginationError;
use crate::model::{LinkDescriptor, LinkLabels, LinkRel, PageRequest};
use crate::routing::{PageRouter, SiteRouter};
use serde::{Deserialize, Serialize};

/// How the view treats a `(current, total)` pair outside the valid range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundsPolicy {
    /// Reject the request with [`PaginationError::InvalidArgument`].
    #[default]
    Strict,
    /// Snap the request into range and log a warning.
    Clamp,
}

/// Builds the ordered list of pagination links for one page of a listing.
///
/// The output is always `prev? ++ 1..=total ++ next?`. Previous is omitted on
/// the first page, next on the last, and exactly one numbered link is
/// active. Every href comes from the injected [`PageRouter`].
///
/// # Examples
///
/// ```no_run
/// use pager::{PaginationView, SiteRouter};
///
/// let view = PaginationView::new(SiteRouter::new("/blog"));
/// let links = view.render(2, 3)?;
/// assert_eq!(links.first().map(|l| l.href.as_str()), Some("/blog/"));
/// # Ok::<(), pager::PaginationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PaginationView<R = SiteRouter> {
    router: R,
    labels: LinkLabels,
    policy: BoundsPolicy,
}

impl Default for PaginationView<SiteRouter> {
    fn default() -> Self {
        Self::new(SiteRouter::default())
    }
}

impl<R: PageRouter> PaginationView<R> {
    pub fn new(router: R) -> Self {
        Self {
            router,
            labels: LinkLabels::default(),
            policy: BoundsPolicy::default(),
        }
    }

    pub fn with_labels(mut self, labels: LinkLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_policy(mut self, policy: BoundsPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn router(&self) -> &R {
        &self.router
    }

    pub fn labels(&self) -> &LinkLabels {
        &self.labels
    }

    pub fn policy(&self) -> BoundsPolicy {
        self.policy
    }

    /// Resolve a raw pair into a request according to the bounds policy.
    pub fn request(&self, current: u32, total: u32) -> Result<PageRequest, PaginationError> {
        match self.policy {
            BoundsPolicy::Strict => PageRequest::new(current, total),
            BoundsPolicy::Clamp => {
                let (request, changed) = PageRequest::clamped(current, total);
                if changed {
                    log::warn!(
                        "Clamped page request {current}/{total} to {}/{}",
                        request.current(),
                        request.total()
                    );
                }
                Ok(request)
            }
        }
    }

    /// Render pagination links for `current` out of `total` pages.
    pub fn render(&self, current: u32, total: u32) -> Result<Vec<LinkDescriptor>, PaginationError> {
        let request = self.request(current, total)?;
        Ok(self.render_request(&request))
    }

    /// Render links for an already validated request. Infallible.
    pub fn render_request(&self, request: &PageRequest) -> Vec<LinkDescriptor> {
        let mut links = Vec::with_capacity(request.total() as usize + 2);

        if let Some(previous) = request.previous() {
            links.push(LinkDescriptor::relation(
                LinkRel::Prev,
                self.labels.previous.clone(),
                self.router.page_to_path(previous),
            ));
        }

        links.extend(request.pages().map(|page| {
            LinkDescriptor::numbered(
                page,
                self.router.page_to_path(page),
                page == request.current(),
            )
        }));

        if let Some(next) = request.next() {
            links.push(LinkDescriptor::relation(
                LinkRel::Next,
                self.labels.next.clone(),
                self.router.page_to_path(next),
            ));
        }

        log::trace!(
            "Rendered {} pagination links for page {}/{}",
            links.len(),
            request.current(),
            request.total()
        );
        links
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::InvalidArgument;
    use claims::{assert_err, assert_ok};

    fn labels(links: &[LinkDescriptor]) -> Vec<&str> {
        links.iter().map(|link| link.label.as_str()).collect()
    }

    fn active_labels(links: &[LinkDescriptor]) -> Vec<&str> {
        links
            .iter()
            .filter(|link| link.is_active)
            .map(|link| link.label.as_str())
            .collect()
    }

    #[test]
    fn test_single_page_has_no_prev_or_next() {
        let links = assert_ok!(PaginationView::default().render(1, 1));
        assert_eq!(
            links,
            vec![LinkDescriptor {
                href: "/".to_string(),
                label: "1".to_string(),
                rel: None,
                is_active: true,
            }]
        );
    }

    #[test]
    fn test_first_page_of_five() {
        let links = assert_ok!(PaginationView::default().render(1, 5));
        assert_eq!(labels(&links), vec!["1", "2", "3", "4", "5", "Next Page →"]);
        assert_eq!(active_labels(&links), vec!["1"]);

        let next = links.last().unwrap();
        assert_eq!(next.rel, Some(LinkRel::Next));
        assert_eq!(next.href, "/2");
    }

    #[test]
    fn test_middle_page_of_five() {
        let links = assert_ok!(PaginationView::default().render(3, 5));
        assert_eq!(
            labels(&links),
            vec!["← Previous Page", "1", "2", "3", "4", "5", "Next Page →"]
        );
        assert_eq!(active_labels(&links), vec!["3"]);
        assert_eq!(links[0].rel, Some(LinkRel::Prev));
        assert_eq!(links[0].href, "/2");
        assert_eq!(links[6].href, "/4");
    }

    #[test]
    fn test_last_page_of_five() {
        let links = assert_ok!(PaginationView::default().render(5, 5));
        assert_eq!(
            labels(&links),
            vec!["← Previous Page", "1", "2", "3", "4", "5"]
        );
        assert_eq!(active_labels(&links), vec!["5"]);
        assert_eq!(links[0].href, "/4");
    }

    #[test]
    fn test_previous_from_second_page_points_to_root() {
        let links = assert_ok!(PaginationView::default().render(2, 3));
        assert_eq!(links[0].rel, Some(LinkRel::Prev));
        assert_eq!(links[0].href, "/");
    }

    #[test]
    fn test_numbered_links_use_router() {
        let view = PaginationView::new(|page: u32| format!("/p/{page}.html"));
        let links = assert_ok!(view.render(1, 3));
        let hrefs: Vec<&str> = links.iter().map(|link| link.href.as_str()).collect();
        assert_eq!(hrefs, vec!["/p/1.html", "/p/2.html", "/p/3.html", "/p/2.html"]);
    }

    #[test]
    fn test_custom_labels() {
        let view = PaginationView::default().with_labels(LinkLabels::new("Newer", "Older"));
        let links = assert_ok!(view.render(2, 3));
        assert_eq!(links.first().unwrap().label, "Newer");
        assert_eq!(links.last().unwrap().label, "Older");
    }

    #[test]
    fn test_strict_policy_rejects_out_of_range() {
        let view = PaginationView::default();
        assert_eq!(
            assert_err!(view.render(6, 5)),
            PaginationError::InvalidArgument(InvalidArgument::CurrentOutOfRange {
                current: 6,
                total: 5
            })
        );
        assert_err!(view.render(0, 5));
        assert_eq!(
            assert_err!(view.render(1, 0)),
            PaginationError::InvalidArgument(InvalidArgument::NoPages)
        );
    }

    #[test]
    fn test_clamp_policy_snaps_into_range() {
        let view = PaginationView::default().with_policy(BoundsPolicy::Clamp);
        let high = assert_ok!(view.render(9, 5));
        assert_eq!(high, assert_ok!(view.render(5, 5)));

        let empty = assert_ok!(view.render(0, 0));
        assert_eq!(labels(&empty), vec!["1"]);
    }

    #[test]
    fn test_render_is_idempotent() {
        let view = PaginationView::new(SiteRouter::new("/blog").with_page_segment("page"));
        assert_eq!(
            assert_ok!(view.render(4, 9)),
            assert_ok!(view.render(4, 9))
        );
    }
}
