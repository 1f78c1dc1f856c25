//! Generic iteration over dense N-dimensional index ranges.
//!
//! Provides [`IndexSpace`], a rectangular range of integer multi-indices
//! whose dimensionality is a compile-time constant, together with the
//! traversal orders [`RowMajor`] and [`ColumnMajor`] and a static
//! partitioning operation ([`IndexSpace::partition`]) that divides one
//! dimension of a space into contiguous per-worker sub-ranges.
//!
//! The pieces compose as values: a space is (optionally) partitioned into
//! the slice owned by the calling worker, a traversal order wraps the
//! resulting space and hands out begin/end [`Cursor`]s, and iterating the
//! cursor yields coordinate arrays in the declared order.
//!
//! ```
//! use ndrange::RowMajor;
//! use ndrange::Traversal;
//!
//! let space = ndrange::space!(0..4, 0..4);
//! let owned = space.partition(0, 1, 2).unwrap();
//! for [i, j] in RowMajor::new(owned).iter() {
//!     assert!(owned.contains(&[i, j]));
//! }
//! ```

mod cursor;
pub use cursor::AdvanceFn;
pub use cursor::Cursor;

/// Dense index spaces and the errors produced when partitioning them.
pub mod space;
pub use space::IndexSpace;
pub use space::SpaceError;

/// Traversal-order strategies and the cursor-driven iterator.
pub mod traversal;
pub use traversal::ColumnMajor;
pub use traversal::Iter;
pub use traversal::RowMajor;
pub use traversal::Traversal;

mod partition;
