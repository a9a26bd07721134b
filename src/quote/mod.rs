//! Escape-aware scanning for quoted text.
//!
//! The building blocks are [`is_escaped`] and [`find_next`], which locate delimiters while
//! skipping those preceded by an odd number of escape tokens. [`Quoter`] builds on them to split
//! text into [`Segment`]s, and provides some helpers for stripping, splitting and (un)quoting.
//!
//! All offsets are byte offsets into the scanned `str`.

mod error;
mod quoter;
mod scan;
mod segment;
mod tests;

pub use error::*;
pub use quoter::*;
pub use scan::*;
pub use segment::*;
