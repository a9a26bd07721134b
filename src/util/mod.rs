pub mod panic;
#[cfg(feature = "ary")]
pub mod result;
