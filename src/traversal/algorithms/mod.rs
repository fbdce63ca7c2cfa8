//! Ubiquitous algorithms for trees, implemented as [`Visitor`]s.
//!
//! This includes:
//! - Post-order traversal, optionally bounded by depth
//! - Exact-level traversal
//!
//! All of them only ever visit the *descendants* of the node they are started from, never that node itself. Depths are counted from the children of the starting node, which are at depth 0. The callback returns `true` to keep going and `false` to stop the traversal immediately; the visitors produce `false` if they were stopped this way and `true` if they ran to completion.
//!
//! [`Visitor`]: ../trait.Visitor.html " "

mod post_order;
mod exact_level;
pub use post_order::*;
pub use exact_level::*;

/// Where a visitor's last direction was sending the cursor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Phase {
    Start,
    Descending,
    Sideways,
    Ascending,
}
