use derive_more::{Display, Error, From, IsVariant, TryInto};

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("length {length} is not positive, offsets require at least one element")]
pub struct InvalidLengthError {
    pub length: i64,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("offset {offset} out of bounds for length {length}")]
pub struct OffsetOutOfBounds {
    pub offset: i64,
    pub length: i64,
}

/// The error returned by [`offset_wrap`](super::offset_wrap) and anything built on it.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum OffsetError {
    InvalidLength(InvalidLengthError),
    OutOfBounds(OffsetOutOfBounds),
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("unrecognised wrap mode {value:?}")]
pub struct WrapModeError {
    pub value: String,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("floating point wrapping requires finite bounds and value")]
pub struct NonFiniteError;
