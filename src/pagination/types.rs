//! Connection types
//!
//! Value types of the cursor connection contract. All of them serialize to
//! the GraphQL field names (`edges`, `pageInfo`, `hasNextPage`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;

/// An item that can name itself.
///
/// The returned identity becomes the edge cursor, so it must be stable and
/// unique within the ordered list being paginated.
pub trait Identifiable {
    /// Stable, unique identity of this node
    fn id(&self) -> String;
}

impl<T: Identifiable + ?Sized> Identifiable for &T {
    fn id(&self) -> String {
        (**self).id()
    }
}

impl<T: Identifiable + ?Sized> Identifiable for Box<T> {
    fn id(&self) -> String {
        (**self).id()
    }
}

impl Identifiable for String {
    fn id(&self) -> String {
        self.clone()
    }
}

/// A node paired with its cursor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<N> {
    /// The item itself
    pub node: N,
    /// Opaque position of the item in the ordered list
    pub cursor: String,
}

impl<N> Edge<N> {
    /// Create an edge with an explicit cursor
    pub fn new(node: N, cursor: impl Into<String>) -> Self {
        Self {
            node,
            cursor: cursor.into(),
        }
    }
}

impl<N: Identifiable> Edge<N> {
    /// Create an edge whose cursor is the node identity
    pub fn from_node(node: N) -> Self {
        let cursor = node.id();
        Self { node, cursor }
    }
}

/// Summary of the windowed result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub has_previous_page: bool,
    /// Cursor of the first returned edge
    pub start_cursor: Option<String>,
    /// Cursor of the last returned edge
    pub end_cursor: Option<String>,
}

/// Edges plus page info, the unit handed back to the API layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<N> {
    pub edges: Vec<Edge<N>>,
    pub page_info: PageInfo,
}

impl<N> Connection<N> {
    /// Number of returned edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Check if the window is empty
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterate over the returned nodes
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.edges.iter().map(|edge| &edge.node)
    }

    /// Cursors of the returned edges, in order
    pub fn cursors(&self) -> Vec<&str> {
        self.edges.iter().map(|edge| edge.cursor.as_str()).collect()
    }

    /// Transform every node, keeping cursors and page info
    pub fn map<M, F: FnMut(N) -> M>(self, mut f: F) -> Connection<M> {
        Connection {
            edges: self
                .edges
                .into_iter()
                .map(|edge| Edge {
                    node: f(edge.node),
                    cursor: edge.cursor,
                })
                .collect(),
            page_info: self.page_info,
        }
    }
}

/// Client-supplied pagination arguments
///
/// Every field is independently optional; `first: Some(0)` is not the same
/// as `first: None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageArgs {
    pub before: Option<String>,
    pub after: Option<String>,
    pub first: Option<i32>,
    pub last: Option<i32>,
}

impl PageArgs {
    /// Create empty arguments (the whole list)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `before` cursor
    #[must_use]
    pub fn with_before(mut self, cursor: impl Into<String>) -> Self {
        self.before = Some(cursor.into());
        self
    }

    /// Set the `after` cursor
    #[must_use]
    pub fn with_after(mut self, cursor: impl Into<String>) -> Self {
        self.after = Some(cursor.into());
        self
    }

    /// Set the `first` count
    #[must_use]
    pub fn with_first(mut self, count: i32) -> Self {
        self.first = Some(count);
        self
    }

    /// Set the `last` count
    #[must_use]
    pub fn with_last(mut self, count: i32) -> Self {
        self.last = Some(count);
        self
    }
}

/// Which cursor argument bounds the window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    Before,
    After,
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boundary::Before => f.write_str("before"),
            Boundary::After => f.write_str("after"),
        }
    }
}
