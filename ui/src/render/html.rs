use crate::error::AppResult;
use askama::Template;
use pager::LinkDescriptor;

/// Default look of the pagination bar: boxed links floated side by side,
/// rounded outer corners, the active page in green.
pub const STYLESHEET: &str = "\
nav.pagination { text-align: center; }
nav.pagination div { display: inline-block; }
nav.pagination a {
  font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell;
  background: #fff;
  color: black;
  float: left;
  padding: 8px 16px;
  text-decoration: none;
  transition: background-color .3s;
  border: 1px solid #ddd;
  margin: 0 4px;
  box-shadow: rgba(39, 44, 49, 0.06) 8px 14px 38px, rgba(39, 44, 49, 0.03) 1px 3px 8px;
}
nav.pagination a:first-child { border-top-left-radius: 5px; border-bottom-left-radius: 5px; }
nav.pagination a:last-child { border-top-right-radius: 5px; border-bottom-right-radius: 5px; }
nav.pagination a.active { background-color: #4CAF50; color: white; border: 1px solid #4CAF50; }
nav.pagination a:hover:not(.active) { background-color: #ddd; }
";

#[derive(Template)]
#[template(path = "pagination.html")]
struct PaginationTemplate<'a> {
    links: &'a [LinkDescriptor],
    with_style: bool,
    stylesheet: &'a str,
}

/// Options for HTML output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Emit [`STYLESHEET`] in a `<style>` element before the links
    pub with_style: bool,
}

/// Render links as a `<nav class="pagination">` block.
///
/// Labels and hrefs are HTML-escaped; the current page carries
/// `class="active"` and prev/next carry their `rel`.
pub fn render(links: &[LinkDescriptor], options: &HtmlOptions) -> AppResult<String> {
    let template = PaginationTemplate {
        links,
        with_style: options.with_style,
        stylesheet: STYLESHEET,
    };
    Ok(template.render()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pager::{LinkLabels, PaginationView};

    #[test]
    fn test_html_contains_links_in_order() {
        let links = PaginationView::default().render(2, 3).unwrap();
        let html = render(&links, &HtmlOptions::default()).unwrap();

        let prev = html.find(r#"<a href="/" rel="prev">← Previous Page</a>"#).unwrap();
        let first = html.find(r#"<a href="/">1</a>"#).unwrap();
        let active = html.find(r#"<a href="/2" class="active">2</a>"#).unwrap();
        let third = html.find(r#"<a href="/3">3</a>"#).unwrap();
        let next = html.find(r#"<a href="/3" rel="next">Next Page →</a>"#).unwrap();

        assert!(prev < first && first < active && active < third && third < next);
        assert!(html.starts_with(r#"<nav class="pagination">"#));
        assert!(html.trim_end().ends_with("</nav>"));
        assert!(!html.contains("<style>"));
    }

    #[test]
    fn test_html_escapes_labels() {
        let view = PaginationView::default().with_labels(LinkLabels::new("<newer>", "older & more"));
        let links = view.render(2, 3).unwrap();
        let html = render(&links, &HtmlOptions::default()).unwrap();

        assert!(html.contains("&lt;newer&gt;"));
        assert!(html.contains("older &amp; more"));
        assert!(!html.contains("<newer>"));
    }

    #[test]
    fn test_html_with_style() {
        let links = PaginationView::default().render(1, 1).unwrap();
        let html = render(&links, &HtmlOptions { with_style: true }).unwrap();
        assert!(html.contains("<style>"));
        assert!(html.contains("a.active"));
    }
}
