//! Numeric range normalisation and offset wrapping.
//!
//! The functions here all take a pair of bounds which may be provided in either order, as a
//! [`Range`] would normalise them. [`offset_wrap`] builds on these to map a possibly negative
//! offset onto a valid index, using one of the policies described by [`WrapMode`].
//!
//! # Errors
//! Misuse, such as a non-positive length or an unknown wrap mode, results in an error rather than
//! a coerced value. An offset which is simply out of range is only an error for
//! [`WrapMode::None`].

mod error;
mod mode;
mod range;
mod wrap;

pub use error::*;
pub use mode::*;
pub use range::*;
pub use wrap::*;
