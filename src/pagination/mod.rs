//! Pagination module
//!
//! Cursor connections over an already materialized, ordered list.
//!
//! # Overview
//!
//! Callers fetch, filter and sort their data, then hand the ordered items to
//! [`build_connection`] (or prebuilt edges to [`window_to_connection`]). The
//! result is a [`Connection`] whose edges are a contiguous run of the input
//! and whose [`PageInfo`] tells the client whether more pages exist.
//!
//! ```rust
//! use relay_kit::pagination::{build_connection, PageArgs};
//!
//! let items: Vec<String> = (1..=5).map(|i| i.to_string()).collect();
//! let connection = build_connection(items, &PageArgs::new().with_first(2));
//!
//! assert_eq!(connection.cursors(), vec!["1", "2"]);
//! assert!(connection.page_info.has_next_page);
//! ```

mod paginator;
mod types;
mod window;

pub use paginator::Paginator;
pub use types::{Boundary, Connection, Edge, Identifiable, PageArgs, PageInfo};
pub use window::{
    apply_cursor_window, build_connection, has_next_page, has_previous_page,
    window_to_connection,
};
