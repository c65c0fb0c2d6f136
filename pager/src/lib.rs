//! # Pagenav Core Library
//!
//! Framework-neutral computation of pagination controls for statically
//! generated sites. Given the page currently being viewed and the total page
//! count, the library produces an ordered list of [`LinkDescriptor`]s that a
//! host UI layer turns into markup, terminal widgets or HTTP headers.
//!
//! ## Modules
//!
//! - [`errors`] - Error types for invalid page requests
//! - [`model`] - Link descriptors, labels and validated page requests
//! - [`routing`] - Page-to-path mapping collaborators
//! - [`view`] - The pagination view that assembles the link sequence

pub mod errors;
pub mod model;
pub mod routing;
pub mod view;

pub use errors::{InvalidArgument, PaginationError};
pub use model::{LinkDescriptor, LinkLabels, LinkRel, PageRequest};
pub use routing::{PageRouter, SiteRouter};
pub use view::{BoundsPolicy, PaginationView};
