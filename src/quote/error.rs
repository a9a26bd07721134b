use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("no needles provided to search for")]
pub struct NoNeedlesError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("needle {index} is empty")]
pub struct EmptyNeedleError {
    pub index: usize,
}

/// The error returned when a scan is requested with unusable needles.
#[derive(Debug, Display, Error, From, IsVariant, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    NoNeedles(NoNeedlesError),
    EmptyNeedle(EmptyNeedleError),
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("a quoter requires at least one quote pair")]
pub struct NoPairsError;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("quote pair opened by {open:?} has no close delimiter")]
pub struct MissingCloseError {
    pub open: String,
}

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("quote delimiters can't be empty")]
pub struct EmptyDelimiterError;

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
#[display("escape token can't be empty, use no_escape instead")]
pub struct EmptyEscapeError;

/// The error returned by [`QuoterBuilder::build`](super::QuoterBuilder::build).
#[derive(Debug, Display, Error, From, IsVariant, Clone, PartialEq, Eq)]
pub enum ConfigError {
    NoPairs(NoPairsError),
    MissingClose(MissingCloseError),
    EmptyDelimiter(EmptyDelimiterError),
    EmptyEscape(EmptyEscapeError),
}
