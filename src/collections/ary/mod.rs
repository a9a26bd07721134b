//! A module containing [`Ary`], a vector addressed by wrapping signed offsets.
//!
//! [`Ary`] is also re-exported under the parent module.

mod ary;

pub use ary::*;
