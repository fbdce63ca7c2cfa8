//! An arena-allocated multiway tree whose nodes are addressed by *paths* of keys rather than by a single identifier.
//!
//! ------------------------
//!
//! # Overview
//! A [`PathTree`] stores values at locations like `["d", "c", "b"]`. Writing to a path creates every missing node along the way, reading from a path can either demand an exact match ([`fetch`]) or settle for the deepest node that exists ([`get`]), and deleting a node takes its whole subtree with it. Traversal comes in three flavors: full post-order, depth-bounded post-order and exact-level.
//!
//! ```rust
//! use pathtree::PathTree;
//!
//! let mut tree: PathTree<&str, u32> = PathTree::new();
//! tree.set("d/c/b/a".split('/'), 1);
//! tree.set(["d", "c"], 3);
//!
//! // Exact-match read:
//! assert_eq!(tree.fetch(&["d", "c"]), Some(&3));
//! assert_eq!(tree.fetch(&["d", "c", "x"]), None);
//! // Deepest-match read falls back to the closest existing ancestor:
//! assert_eq!(tree.get(&["d", "c", "x"]), (1, Some(&3)));
//!
//! // Post-order traversal visits the deepest nodes first:
//! let mut visited = Vec::new();
//! tree.range_all(|node| {
//!     visited.push(*node.key().unwrap());
//!     true
//! });
//! assert_eq!(visited, ["a", "b", "c", "d"]);
//! ```
//!
//! # Storage
//! Nodes are kept in an "arena" described by the [`Storage`] trait and link to each other through indices into it instead of pointers, as described by Ben Lovy in the [arena tree blog post]. Children of a node form an intrusive doubly linked list in insertion order, which is also the order in which every traversal visits them.
//!
//! The default storage is [`SparseVec`], a `Vec` wrapped in [`SparseStorage`]: removing a node punches a hole into the storage instead of shifting the elements after it, and the next insertion reuses the hole. A fixed-capacity [`ArrayVec`] can be used instead for trees with a known upper bound on their size.
//!
//! # Feature flags
//! - `std` (**enabled by default**): enables the full standard library, disabling `no_std` for the crate. Currently, this only adds [`Error`] trait implementations for the error types.
//! - `alloc` (**enabled by default**): adds `ListStorage` implementations for `Vec` and `VecDeque`, makes `SparseVec` the default storage and enables [`NodeRef::path`]. *Without it, the default storage is a sparse `ArrayVec` holding at most 64 nodes.*
//! - `doc_cfg`: annotates feature-gated items in the documentation. **Requires a nightly compiler.**
//!
//! # Public dependencies
//! - `arrayvec` (**required**): `^0.5`
//!
//! [`get`]: struct.PathTree.html#method.get " "
//! [`fetch`]: struct.PathTree.html#method.fetch " "
//! [`PathTree`]: path_tree/struct.PathTree.html " "
//! [`NodeRef::path`]: path_tree/struct.NodeRef.html#method.path " "
//! [`Storage`]: storage/trait.Storage.html " "
//! [`SparseStorage`]: storage/struct.SparseStorage.html " "
//! [`SparseVec`]: storage/type.SparseVec.html " "
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "
//! [`ArrayVec`]: https://docs.rs/arrayvec/*/arrayvec/struct.ArrayVec.html " "
//! [arena tree blog post]: https://dev.to/deciduously/no-more-tears-no-more-knots-arena-allocated-trees-in-rust-44k6 " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::fn_params_excessive_bools,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::invalid_upcast_comparisons,
    clippy::items_after_statements,
    clippy::large_stack_arrays,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wild_err_arm,
    clippy::match_wildcard_for_single_variants,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::same_functions_in_if_condition,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::string_add_assign,
    clippy::too_many_lines,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unicode_not_nfc,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    unsafe_code,
    clippy::exit,
)]
#![allow(clippy::use_self)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod storage;
#[doc(no_inline)]
pub use storage::{Storage, ListStorage, DefaultStorage};

pub mod path_tree;
#[doc(no_inline)]
pub use path_tree::{PathTree, NodeRef, NodeRefMut};

pub mod traversal;
#[doc(no_inline)]
pub use traversal::Traversable;

/// A prelude for using the crate, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::storage::{
        Storage as TreeStorage,
        SparseStorage as SparseTreeStorage,
        DefaultStorage as DefaultTreeStorage,
    };
    #[doc(no_inline)]
    pub use crate::path_tree::{
        PathTree,
        NodeRef as PathTreeNodeRef,
        NodeRefMut as PathTreeNodeRefMut,
    };
    #[doc(no_inline)]
    pub use crate::traversal::Traversable as TraversableTree;
    #[doc(no_inline)]
    pub use crate::TryDelError as TryDelPathError;
}

#[cfg(all(test, feature = "std"))]
mod proptests;

use core::fmt::{self, Formatter, Display};

/// The error type returned by [`try_del`], explaining why nothing was removed from the tree.
///
/// [`try_del`]: path_tree/struct.PathTree.html#method.try_del " "
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum TryDelError {
    /// The path was empty, which would name the root node. The root node cannot be removed.
    EmptyPath,
    /// No node is located at exactly the specified path.
    NotFound,
}
impl Display for TryDelError {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::EmptyPath => "cannot remove the root node of a tree",
            Self::NotFound => "no node exists at the specified path",
        })
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for TryDelError {}
