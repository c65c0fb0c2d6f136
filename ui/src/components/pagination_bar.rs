use crate::error::{AppError, AppResult};
use crate::render::text::{SEPARATOR, display_label};
use pager::LinkDescriptor;
use tuirealm::props::{Alignment, Color};
use tuirealm::ratatui::buffer::Buffer;
use tuirealm::ratatui::layout::Rect;
use tuirealm::ratatui::style::{Modifier, Style};
use tuirealm::ratatui::text::{Line, Span, Text};
use tuirealm::ratatui::widgets::{Paragraph, Widget, Wrap};

/// Terminal rendering of a pagination link sequence.
///
/// Draws prev, numbered and next links as centered rows, highlighting the
/// active page and the prev/next relations. A link is never split across
/// rows; when the links do not fit on one row they continue on the next.
pub struct PaginationBar {
    links: Vec<LinkDescriptor>,
}

impl PaginationBar {
    pub fn new(links: Vec<LinkDescriptor>) -> Self {
        Self { links }
    }

    pub fn links(&self) -> &[LinkDescriptor] {
        &self.links
    }

    pub fn set_links(&mut self, links: Vec<LinkDescriptor>) {
        self.links = links;
    }

    fn span_for(link: &LinkDescriptor) -> Span<'static> {
        let label = display_label(link);
        if link.is_active {
            Span::styled(
                label,
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )
        } else if link.rel.is_some() {
            Span::styled(label, Style::default().fg(Color::Yellow))
        } else {
            Span::raw(label)
        }
    }

    fn separator() -> Span<'static> {
        Span::styled(SEPARATOR, Style::default().fg(Color::DarkGray))
    }

    /// Pack the links greedily into rows at most `width` columns wide.
    ///
    /// Separators only appear between links on the same row. A single label
    /// wider than `width` gets a row of its own.
    pub fn rows(&self, width: usize) -> Vec<Line<'static>> {
        let separator_width = Self::separator().width();
        let mut rows = Vec::new();
        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut used = 0usize;

        for link in &self.links {
            let span = Self::span_for(link);
            let span_width = span.width();

            if !spans.is_empty() && used + separator_width + span_width > width {
                rows.push(Line::from(std::mem::take(&mut spans)));
                used = 0;
            }
            if !spans.is_empty() {
                spans.push(Self::separator());
                used += separator_width;
            }
            spans.push(span);
            used += span_width;
        }

        if !spans.is_empty() || rows.is_empty() {
            rows.push(Line::from(spans));
        }
        rows
    }

    fn paragraph(rows: Vec<Line<'static>>) -> Paragraph<'static> {
        Paragraph::new(Text::from(rows))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
    }

    /// Render off-screen into a buffer `width` columns wide and as many rows
    /// as the links need.
    pub fn render_to_buffer(&self, width: u16) -> AppResult<Buffer> {
        let width = width.max(1);
        let columns = usize::from(width);
        let rows = self.rows(columns);

        // An overlong label word-wraps onto at most one row per column it spans.
        let needed: usize = rows
            .iter()
            .map(|row| {
                let row_width = row.width();
                if row_width <= columns { 1 } else { row_width }
            })
            .sum();
        let height = u16::try_from(needed).map_err(|_| {
            AppError::Render(format!(
                "{} links need {needed} terminal rows at width {width}, at most {} fit",
                self.links.len(),
                u16::MAX
            ))
        })?;

        let area = Rect::new(0, 0, width, height.max(1));
        let mut buffer = Buffer::empty(area);
        Self::paragraph(rows).render(area, &mut buffer);
        Ok(buffer)
    }

    /// Render off-screen and return the visible rows, trailing blanks removed.
    pub fn render_to_string(&self, width: u16) -> AppResult<String> {
        let buffer = self.render_to_buffer(width)?;
        let row_width = usize::from(buffer.area.width);

        let mut rows: Vec<String> = buffer
            .content()
            .chunks(row_width)
            .map(|row| {
                row.iter()
                    .map(|cell| cell.symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect();

        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }
        Ok(rows.join("\n"))
    }
}

impl Widget for &PaginationBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        PaginationBar::paragraph(self.rows(usize::from(area.width))).render(area, buf);
    }
}
