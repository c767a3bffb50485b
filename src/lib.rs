//! # Relay Kit
//!
//! Cursor connections and opaque global ids for GraphQL-style APIs.
//!
//! ## Features
//!
//! - **Connections**: Window an ordered list with `first`, `last`, `before`, `after`
//! - **Page Info**: `hasNextPage`/`hasPreviousPage` and start/end cursors
//! - **Global Ids**: Encode `(type, id)` pairs into opaque base64 tokens
//! - **Policies**: Optionally reject unmatched cursors and negative counts
//!
//! ## Quick Start
//!
//! ```rust
//! use relay_kit::global_id::{from_global_id, to_global_id};
//! use relay_kit::pagination::{build_connection, Identifiable, PageArgs};
//!
//! struct User {
//!     id: u32,
//! }
//!
//! impl Identifiable for User {
//!     fn id(&self) -> String {
//!         to_global_id("User", &self.id.to_string())
//!     }
//! }
//!
//! let users: Vec<User> = (1..=5).map(|id| User { id }).collect();
//! let connection = build_connection(users, &PageArgs::new().with_last(2));
//!
//! assert_eq!(connection.len(), 2);
//! assert!(connection.page_info.has_previous_page);
//!
//! let cursor = connection.page_info.end_cursor.unwrap();
//! let decoded = from_global_id(&cursor).unwrap();
//! assert_eq!((decoded.type_name.as_str(), decoded.id.as_str()), ("User", "5"));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────┐   ┌──────────────────────────┐
//! │          pagination          │   │        global_id         │
//! │  apply_cursor_window         │   │  to_global_id            │
//! │  window_to_connection        │   │  from_global_id          │
//! │  build_connection            │   │  GlobalId                │
//! │  Paginator ── config policy  │   │                          │
//! └──────────────────────────────┘   └──────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Pagination policy configuration
pub mod config;

/// Cursor connections
pub mod pagination;

/// Opaque global identifiers
pub mod global_id;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

pub use config::{load_config, load_config_from_str, CountPolicy, CursorPolicy, PaginationConfig};
pub use global_id::{from_global_id, to_global_id, GlobalId};
pub use pagination::{
    build_connection, window_to_connection, Connection, Edge, Identifiable, PageArgs, PageInfo,
    Paginator,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
