//! Generic containers: contiguous sequences and linked lists.
//!
//! # Containers
//!
//! | Container | Backing | Key Operations |
//! |-----------|---------|----------------|
//! | [`Vector`] | growable buffer, capacity doubles | amortized O(1) push, O(n) insert/erase |
//! | [`Array`] | exact-size buffer | O(1) index, resize reallocates exactly |
//! | [`List`] | slab node pool | O(1) push/pop at both ends, cursors |
//! | [`IntrusiveList`] | caller's [`Storage`] | O(1) link/unlink, never allocates |
//!
//! # Quick Start
//!
//! ```
//! use primer_collections::{Error, List, Vector};
//!
//! let mut v = Vector::new();
//! for x in [1000, -3000, 0, 57, -42] {
//!     v.push_back(x);
//! }
//! assert_eq!(v.len(), 5);
//! assert_eq!(v.at(5), Err(Error::IndexOutOfRange { index: 5, len: 5 }));
//!
//! let mut list: List<i32> = v.iter().copied().collect();
//! list.reverse();
//! assert_eq!(list.front(), Ok(&-42));
//! ```
//!
//! # Errors
//!
//! Every fallible operation returns [`Result`] with the shared [`Error`]
//! enum. `Index`/`IndexMut` on the sequences panic on a bad index like
//! slices do; `at` is the checked form.
//!
//! # Threading
//!
//! Containers are plain single-owner values. They are `Send`/`Sync` when `T`
//! is, and mutation always goes through `&mut`, so sharing one across
//! threads needs external synchronization such as a `Mutex`.
//!
//! # Feature Flags
//!
//! - `tracing` (default) - emit `trace!` events on buffer reallocation and
//!   on list clear/reverse

#![warn(missing_docs)]

pub mod array;
pub mod error;
pub mod intrusive;
pub mod key;
pub mod list;
pub mod storage;
pub mod vector;

pub use array::Array;
pub use error::{Error, Result};
pub use intrusive::{IntrusiveList, Linked};
pub use key::Key;
pub use list::{Cursor, CursorMut, List};
pub use storage::Storage;
pub use vector::Vector;
