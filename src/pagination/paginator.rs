//! Policy-aware pagination
//!
//! The free functions in this module's siblings are permissive. A
//! [`Paginator`] applies a [`PaginationConfig`] first and can turn unmatched
//! cursors or negative counts into client errors.

use super::types::{Boundary, Connection, Edge, Identifiable, PageArgs};
use super::window::{connection_from_edges, locate_window, window_to_connection};
use crate::config::{CountPolicy, CursorPolicy, PaginationConfig};
use crate::error::{Error, Result};

/// Paginator with a configurable strictness policy
#[derive(Debug, Clone, Default)]
pub struct Paginator {
    config: PaginationConfig,
}

impl Paginator {
    /// Create a paginator with the given policy
    pub fn new(config: PaginationConfig) -> Self {
        Self { config }
    }

    /// Create a paginator that rejects unmatched cursors and negative counts
    pub fn strict() -> Self {
        Self::new(PaginationConfig::strict())
    }

    /// Active policy
    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Build a connection from ordered items after validating `args`
    pub fn paginate<T, I>(&self, items: I, args: &PageArgs) -> Result<Connection<T>>
    where
        T: Identifiable,
        I: IntoIterator<Item = T>,
    {
        let edges: Vec<Edge<T>> = items.into_iter().map(Edge::from_node).collect();
        self.validate(&edges, args)?;
        Ok(connection_from_edges(edges, args))
    }

    /// Window prebuilt edges after validating `args`
    pub fn window<N: Clone>(&self, all: &[Edge<N>], args: &PageArgs) -> Result<Connection<N>> {
        self.validate(all, args)?;
        Ok(window_to_connection(
            all,
            args.before.as_deref(),
            args.after.as_deref(),
            args.first,
            args.last,
        ))
    }

    /// Check `args` against the policy without building a connection
    pub fn validate<N>(&self, all: &[Edge<N>], args: &PageArgs) -> Result<()> {
        if self.config.negative_count == CountPolicy::Reject {
            for (argument, count) in [("first", args.first), ("last", args.last)] {
                if let Some(value) = count.filter(|count| *count < 0) {
                    return Err(Error::NegativeCount { argument, value });
                }
            }
        }

        if self.config.unmatched_cursor == CursorPolicy::Reject {
            let window = locate_window(all, args.before.as_deref(), args.after.as_deref());
            if let Some(boundary) = window.unmatched.first() {
                let cursor = match boundary {
                    Boundary::Before => args.before.as_deref(),
                    Boundary::After => args.after.as_deref(),
                };
                return Err(Error::unmatched_cursor(
                    *boundary,
                    cursor.unwrap_or_default(),
                ));
            }
        }

        Ok(())
    }
}
