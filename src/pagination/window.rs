//! Cursor windowing
//!
//! Implements the connection pagination algorithm over an already ordered
//! list of edges. Every function here is total: unmatched cursors and
//! non-positive counts are skipped, never reported.

use super::types::{Boundary, Connection, Edge, Identifiable, PageArgs, PageInfo};
use std::ops::Range;
use tracing::{debug, trace};

// ============================================================================
// Cursor Window
// ============================================================================

/// Position of the cursor window inside the full edge list
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CursorWindow {
    /// Edges bounded by `after`/`before`, both inclusive
    pub range: Range<usize>,
    /// Cursors that were given but matched no edge
    pub unmatched: Vec<Boundary>,
}

/// Locate the window bounded by `after` and `before`.
///
/// `after` is searched over the whole list and the match becomes the first
/// edge of the window. `before` is searched inside what remains and the match
/// becomes the last edge.
pub(crate) fn locate_window<N>(
    all: &[Edge<N>],
    before: Option<&str>,
    after: Option<&str>,
) -> CursorWindow {
    let mut range = 0..all.len();
    let mut unmatched = Vec::new();

    if let Some(after) = after {
        match position_of(all, after) {
            Some(index) => range.start = index,
            None => unmatched.push(Boundary::After),
        }
    }

    if let Some(before) = before {
        match position_of(&all[range.clone()], before) {
            Some(index) => range.end = range.start + index + 1,
            None => unmatched.push(Boundary::Before),
        }
    }

    CursorWindow { range, unmatched }
}

fn position_of<N>(edges: &[Edge<N>], cursor: &str) -> Option<usize> {
    edges.iter().position(|edge| edge.cursor == cursor)
}

/// Counts of zero or below mean "no limit"
fn limit(count: Option<i32>) -> Option<usize> {
    count
        .filter(|count| *count > 0)
        .and_then(|count| usize::try_from(count).ok())
}

/// Apply `first`, then `last` on what `first` left
fn truncate(mut range: Range<usize>, first: Option<i32>, last: Option<i32>) -> Range<usize> {
    if let Some(first) = limit(first) {
        if first < range.len() {
            range.end = range.start + first;
        }
    }

    if let Some(last) = limit(last) {
        if last < range.len() {
            range.start = range.end - last;
        }
    }

    range
}

/// Page info for the final edges, given the length of the untruncated window
fn page_info<N>(
    edges: &[Edge<N>],
    window_len: usize,
    first: Option<i32>,
    last: Option<i32>,
) -> PageInfo {
    PageInfo {
        has_next_page: limit(first).is_some_and(|first| window_len > first),
        has_previous_page: limit(last).is_some_and(|last| window_len > last),
        start_cursor: edges.first().map(|edge| edge.cursor.clone()),
        end_cursor: edges.last().map(|edge| edge.cursor.clone()),
    }
}

/// Resolve the final slice of `all`, logging every argument that was ignored
fn resolve<N>(
    all: &[Edge<N>],
    before: Option<&str>,
    after: Option<&str>,
    first: Option<i32>,
    last: Option<i32>,
) -> (Range<usize>, Range<usize>) {
    let window = locate_window(all, before, after);

    for boundary in &window.unmatched {
        let cursor = match boundary {
            Boundary::Before => before,
            Boundary::After => after,
        };
        debug!(
            boundary = %boundary,
            cursor = cursor.unwrap_or_default(),
            "Ignoring cursor that matches no edge"
        );
    }
    for (argument, count) in [("first", first), ("last", last)] {
        if let Some(count) = count.filter(|count| *count <= 0) {
            debug!(argument, count, "Ignoring non-positive count");
        }
    }

    let range = truncate(window.range.clone(), first, last);
    trace!(
        total = all.len(),
        window = ?window.range,
        page = ?range,
        "Resolved connection window"
    );
    (window.range, range)
}

// ============================================================================
// Public Operations
// ============================================================================

/// Slice `all` down to the edges bounded by the `after` and `before` cursors.
///
/// Both matched edges stay in the result. A cursor that matches nothing is
/// ignored, and with neither cursor the whole slice comes back unchanged.
pub fn apply_cursor_window<'a, N>(
    all: &'a [Edge<N>],
    before: Option<&str>,
    after: Option<&str>,
) -> &'a [Edge<N>] {
    &all[locate_window(all, before, after).range]
}

/// Check whether edges exist before the returned window.
///
/// Only a positive `last` smaller than the cursor window answers `true`.
pub fn has_previous_page<N>(
    all: &[Edge<N>],
    before: Option<&str>,
    after: Option<&str>,
    last: Option<i32>,
) -> bool {
    let window = locate_window(all, before, after);
    limit(last).is_some_and(|last| window.range.len() > last)
}

/// Check whether edges exist after the returned window.
///
/// Only a positive `first` smaller than the cursor window answers `true`.
pub fn has_next_page<N>(
    all: &[Edge<N>],
    before: Option<&str>,
    after: Option<&str>,
    first: Option<i32>,
) -> bool {
    let window = locate_window(all, before, after);
    limit(first).is_some_and(|first| window.range.len() > first)
}

/// Window an ordered edge list into a connection.
///
/// The cursor window is applied first, then `first` keeps the leading edges
/// and `last` keeps the trailing edges of what `first` left.
pub fn window_to_connection<N: Clone>(
    all: &[Edge<N>],
    before: Option<&str>,
    after: Option<&str>,
    first: Option<i32>,
    last: Option<i32>,
) -> Connection<N> {
    let (window, range) = resolve(all, before, after, first, last);
    let edges = all[range].to_vec();
    let page_info = page_info(&edges, window.len(), first, last);

    Connection { edges, page_info }
}

/// Build a connection from ordered items, using each item's identity as its cursor.
pub fn build_connection<T, I>(items: I, args: &PageArgs) -> Connection<T>
where
    T: Identifiable,
    I: IntoIterator<Item = T>,
{
    let edges = items.into_iter().map(Edge::from_node).collect();
    connection_from_edges(edges, args)
}

/// Owned variant of [`window_to_connection`], moves nodes instead of cloning them
pub(crate) fn connection_from_edges<N>(mut edges: Vec<Edge<N>>, args: &PageArgs) -> Connection<N> {
    let (window, range) = resolve(
        &edges,
        args.before.as_deref(),
        args.after.as_deref(),
        args.first,
        args.last,
    );

    edges.truncate(range.end);
    edges.drain(..range.start);
    let page_info = page_info(&edges, window.len(), args.first, args.last);

    Connection { edges, page_info }
}
