//! # Flow Core
//!
//! Lazy, composable, single-pass traversal pipelines over sequences of
//! values, with unboxed specializations for the `i32`, `i64` and `f64`
//! element kinds.
//!
//! ## Architecture
//!
//! The library is organized into layers:
//!
//! 1. **Foundation Layer**: error handling, the size descriptor algebra and
//!    shared result types
//! 2. **Core Layer**: the [`Cursor`](crate::core::cursor::Cursor) contract, numeric
//!    kinds and materialization configuration
//! 3. **Sources**: cursors over arrays, collections, index functions and ranges
//! 4. **Operators**: decorators turning one cursor into another without
//!    evaluating anything
//! 5. **Consumers**: terminal algorithms draining a cursor into a value
//!
//! ## Example
//!
//! ```rust
//! use flow_core::prelude::*;
//!
//! let total = ints(&[1, 2, 3, 4, 5, 6])
//!     .filter(|x| x % 2 == 0)
//!     .map(|x| x * 10)
//!     .sum();
//! assert_eq!(total, 120);
//!
//! let words = over(vec!["flow", "core", "cursor"])
//!     .drop(1)
//!     .map(str::len)
//!     .to_vec();
//! assert_eq!(words, vec![4, 6]);
//! ```

#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    missing_docs,
    rustdoc::all
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::should_implement_trait
)]
#![forbid(unsafe_code)]

// Foundation layer modules
pub mod foundation {
    //! Errors, size descriptors and shared result types.

    pub mod error;
    pub mod size;
    pub mod types;
}

// Core layer modules
pub mod core {
    //! The cursor contract, numeric kinds and configuration.

    pub mod config;
    pub mod cursor;
    pub mod primitive;
}

pub mod sources {
    //! Cursors that originate elements.

    pub mod array;
    pub mod collection;
    pub mod empty;
    pub mod factories;
    pub mod function;
    pub mod range;
    pub mod wrap;
}

pub mod ops {
    //! Decorators wrapping exactly one or two upstream cursors.

    pub mod accumulate;
    pub mod append;
    pub mod drop;
    pub mod enumerate;
    pub mod filter;
    pub mod flatten;
    pub mod map;
    pub mod pair_fold;
    pub mod slice;
    pub mod take;
    pub mod zip;
}

pub mod consume {
    //! Terminal consumers.

    pub mod collection;
    pub mod min_max;
    pub mod predicate;
    pub mod reduction;
}

// Re-exports for convenience
pub mod prelude {
    //! Common imports for users of the library.
    pub use crate::core::{
        config::{MaterializeConfig, MaterializeConfigBuilder},
        cursor::{Cursor, Elements, IntoCursor},
        primitive::{NumericCursor, Primitive},
    };
    pub use crate::foundation::{
        error::{Error, Result},
        size::SizeDescriptor,
        types::{ElementKind, Groups, Partition},
    };
    pub use crate::sources::{
        factories::*,
        range::{between, between_step, partition, until},
    };
}

/// The version of the library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The minimum supported Rust version.
pub const MSRV: &str = "1.70.0";
