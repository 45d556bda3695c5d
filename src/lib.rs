//! `boundeque` provides a double-ended queue with an optional maximum length. Once a bounded deque
//! is full, every insertion at one end silently evicts one element from the other end, which makes
//! it a natural fit for sliding windows, "last N" histories, and ring-buffer style logs.
//!
//! <div class="warning">
//!
//! This crate is still in an early development phase, and the API is not stable. It can (and likely will) be subject to breaking changes before the 1.0.0 version release.
//!
//! </div>
//!
//! # Table of Contents
//! - [Key Features](#key-features)
//! - [Quick Start](#quick-start)
//! - [Shared Deques](#shared-deques)
//! - [Warnings](#warnings)
//!
//! # Key Features
//! * [`BoundedDeque`](core::BoundedDeque): O(1) insertion and removal at both ends on top of a
//!   ring buffer, with eviction from the opposite end when a maximum length is set.
//! * Value semantics: equality and lexicographic ordering only look at the elements, never at the
//!   maximum length.
//! * Repetition (`deque * n`), concatenation (`&a + &b`), rotation, and searching.
//! * [`SharedDeque`](core::SharedDeque): a reference-counted handle whose elements may safely
//!   modify the deque they live in, even while it is being formatted.
//! * [`serde`] support, with the maximum length re-applied when loading.
//!
//! # Quick Start
//!
//! ```rust
//! use boundeque::prelude::*;
//!
//! let mut d = BoundedDeque::from([0, 1, 2]);
//! d.append(1);
//! d.appendleft(3);
//! assert_eq!(d, BoundedDeque::from([3, 0, 1, 2, 1]));
//!
//! let mut window = BoundedDeque::with_maxlen(3);
//! window.extend([1, 2, 3, 4, 5]);
//! assert_eq!(window, BoundedDeque::from([3, 4, 5]));
//!
//! let repeated = BoundedDeque::from_iter_bounded([1, 2, 3], Some(4)) * 2;
//! assert_eq!(repeated, BoundedDeque::from([3, 1, 2, 3]));
//! ```
//!
//! # Shared Deques
//!
//! A [`SharedDeque`](core::SharedDeque) is a cheap-to-clone handle to one deque. Elements can hold
//! a [`WeakDeque`](core::WeakDeque) pointing back at their container and modify it from inside
//! their own [`Debug`](std::fmt::Debug) implementation without hanging or panicking the formatter:
//!
//! ```rust
//! use boundeque::prelude::*;
//!
//! let d = SharedDeque::with_maxlen(5);
//! d.extend([1, 2, 3]);
//! let alias = d.clone();
//! alias.pop();
//! assert_eq!(d.repr(), "deque([1, 2], maxlen=5)");
//! assert!(!d.copy().ptr_eq(&d));
//! ```
//!
//! # Warnings
//!
//! Suspicious situations (like a deque being modified while it is formatted) print a warning to
//! stderr. See [`should_warn`](core::should_warn) for the switches, including the
//! `BOUNDEQUE_WARNINGS` environment variable.
#![warn(
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::doc_markdown,
    clippy::doc_link_with_quotes,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::perf,
    clippy::style,
    missing_docs
)]

/// Module containing the deque types, their configuration, and errors.
pub mod core;
/// Module containing the traits shared by deque types.
pub mod traits;

/// Prelude module containing everything someone should need to use this crate for non-development
/// purposes
pub mod prelude {
    pub use crate::core::{BoundedDeque, DequeConfig, DequeError, SharedDeque, WeakDeque};
    pub use crate::traits::DoubleEnded;
}
