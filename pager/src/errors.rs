use thiserror::Error;

/// Errors produced while building pagination links.
///
/// The only failure mode of the pagination view is a page request that does
/// not describe a real page: either there are no pages at all, or the
/// current page lies outside `1..=total`.
///
/// # Examples
///
/// ```no_run
/// use pager::{PaginationError, PaginationView, InvalidArgument};
///
/// let view = PaginationView::default();
/// match view.render(7, 5) {
///     Ok(links) => println!("{} links", links.len()),
///     Err(PaginationError::InvalidArgument(InvalidArgument::CurrentOutOfRange { current, total })) => {
///         eprintln!("page {current} does not exist, only {total} pages available");
///     }
///     Err(other) => eprintln!("{other}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
}

/// Reasons a page request is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("page count must be at least 1")]
    NoPages,
    #[error("current page {current} is outside 1..={total}")]
    CurrentOutOfRange { current: u32, total: u32 },
}

impl PaginationError {
    /// Human readable explanation suitable for showing on the command line.
    pub fn user_message(&self) -> String {
        match self {
            PaginationError::InvalidArgument(InvalidArgument::NoPages) => {
                "There are no pages to paginate.\n\nThe total page count must be 1 or greater."
                    .to_string()
            }
            PaginationError::InvalidArgument(InvalidArgument::CurrentOutOfRange {
                current,
                total,
            }) => format!(
                "Page {current} does not exist.\n\nValid pages: 1 - {total}\n\nUse --clamp to snap out-of-range pages to the nearest valid page."
            ),
        }
    }
}
