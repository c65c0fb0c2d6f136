use pager::LinkDescriptor;
use std::borrow::Cow;

/// Build an HTTP `Link` header value (RFC 8288) from the prev/next links.
///
/// Returns `None` when the page has neither neighbour, so callers can skip
/// the header entirely. Characters that would end the `<...>` target or split
/// the header into extra link values are percent-encoded.
pub fn render(links: &[LinkDescriptor]) -> Option<String> {
    let relations: Vec<String> = links
        .iter()
        .filter_map(|link| {
            link.rel
                .map(|rel| format!("<{}>; rel=\"{rel}\"", escape_target(&link.href)))
        })
        .collect();

    (!relations.is_empty()).then(|| relations.join(", "))
}

fn needs_escape(c: char) -> bool {
    matches!(c, '<' | '>' | '"' | ',' | ';' | ' ' | '\\')
        || c.is_control()
        || !c.is_ascii()
}

/// Percent-encode only the characters that break a `Link` header target,
/// leaving path separators and existing escapes alone.
fn escape_target(href: &str) -> Cow<'_, str> {
    if !href.chars().any(needs_escape) {
        return Cow::Borrowed(href);
    }

    let mut escaped = String::with_capacity(href.len() + 8);
    let mut utf8 = [0u8; 4];
    for c in href.chars() {
        if needs_escape(c) {
            escaped.push_str(&urlencoding::encode(c.encode_utf8(&mut utf8)));
        } else {
            escaped.push(c);
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pager::{PaginationView, SiteRouter};

    #[test]
    fn test_middle_page_has_both_relations() {
        let links = PaginationView::new(SiteRouter::new("/blog"))
            .render(2, 3)
            .unwrap();
        assert_eq!(
            render(&links).as_deref(),
            Some(r#"</blog/>; rel="prev", </blog/3>; rel="next""#)
        );
    }

    #[test]
    fn test_first_page_only_next() {
        let links = PaginationView::default().render(1, 4).unwrap();
        assert_eq!(render(&links).as_deref(), Some(r#"</2>; rel="next""#));
    }

    #[test]
    fn test_single_page_has_no_header() {
        let links = PaginationView::default().render(1, 1).unwrap();
        assert_eq!(render(&links), None);
    }

    #[test]
    fn test_router_output_cannot_break_header() {
        let view = PaginationView::new(|page: u32| format!("/a>b,c; d/{page}"));
        let links = view.render(2, 3).unwrap();

        let header = render(&links).unwrap();
        assert_eq!(
            header,
            r#"</a%3Eb%2Cc%3B%20d/1>; rel="prev", </a%3Eb%2Cc%3B%20d/3>; rel="next""#
        );
        assert_eq!(header.split(", ").count(), 2);
    }

    #[test]
    fn test_non_ascii_targets_are_utf8_encoded() {
        assert_eq!(escape_target("/café/2"), "/caf%C3%A9/2");
        assert_eq!(escape_target("/already%20escaped/"), "/already%20escaped/");
        assert!(matches!(escape_target("/blog/page/2"), Cow::Borrowed(_)));
    }
}
