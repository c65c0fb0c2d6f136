use pager::LinkDescriptor;

pub const SEPARATOR: &str = " | ";

/// Display label of a link; the active page is wrapped in brackets.
pub fn display_label(link: &LinkDescriptor) -> String {
    if link.is_active {
        format!("[{}]", link.label)
    } else {
        link.label.clone()
    }
}

/// Render links on one line, e.g. `← Previous Page | 1 | [2] | 3 | Next Page →`.
pub fn render(links: &[LinkDescriptor]) -> String {
    links
        .iter()
        .map(display_label)
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}
