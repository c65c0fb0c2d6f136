pub mod pagination_bar;

pub use pagination_bar::PaginationBar;
