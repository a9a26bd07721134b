//! Collection types built on [`offset_wrap`](crate::num::offset_wrap).
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves writing most of the plain indexed functionality again.

pub mod ary;

#[doc(inline)]
pub use ary::Ary;
