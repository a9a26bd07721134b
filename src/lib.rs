//! A small toolkit of general-purpose helpers: range normalisation and offset wrapping, an
//! escape-aware quote scanner, a collection addressed by wrapping offsets and a tagged scalar value
//! with explicit coercions.
//!
//! # Purpose
//! These are the pieces that tend to get rewritten in every project, usually as a handful of
//! loosely specified functions relying on implicit conversions. Here, each one has its rules
//! written down and its edge cases decided, so that behaviour can be relied upon.
//!
//! # Modules
//! - [`num`]: [`between`](num::between), [`limit`](num::limit),
//!   [`int_wrap`](num::int_wrap), [`num_wrap`](num::num_wrap) and
//!   [`offset_wrap`](num::offset_wrap).
//! - [`quote`]: [`is_escaped`](quote::is_escaped), [`find_next`](quote::find_next) and
//!   [`Quoter`](quote::Quoter).
//! - [`collections`]: [`Ary`](collections::Ary), a vector addressed by signed offsets.
//! - [`value`]: [`Value`](value::Value) and its coercions.
//!
//! Each module sits behind a feature of the same name (`ary` for [`collections`]), all of which
//! are enabled by default.
//!
//! # Error Handling
//! Two kinds of failure are distinguished. Misuse, such as a non-positive length, an unknown wrap
//! mode or an empty needle, is reported through a [`Result`] with a strongly typed error. These
//! errors are enums for static dispatch, composed of structs (often ZSTs) that implement
//! [`Error`](std::error::Error). A search or lookup which legitimately finds nothing isn't an error
//! and returns [`None`] instead.
//!
//! Indexing an [`Ary`](collections::Ary) with `[]` panics rather than returning an error, in the
//! same way as indexing a slice.
//!
//! # Logging
//! Rejected calls are logged at `debug` level and quote parsing traces its state transitions,
//! through [`tracing`]. The crate never installs a subscriber.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "ary")]
pub mod collections;
#[cfg(feature = "num")]
pub mod num;
#[cfg(feature = "quote")]
pub mod quote;
#[cfg(feature = "value")]
pub mod value;

pub(crate) mod util;
