//! A tagged scalar [`Value`] with explicit coercions.
//!
//! Rather than converting implicitly wherever a value is used, every conversion goes through one
//! of [`Value::reduce`], `num_val`, `int_val`, `str_val` or `bool_val`, each of which documents how
//! it treats every variant.

mod value;

pub use value::*;
