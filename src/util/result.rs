use std::fmt::Display;

/// Turns the error of a [`Result`] into a panic, for APIs that mirror slice indexing.
pub(crate) trait OrPanic<T> {
    /// Returns the contained value, like [`Result::unwrap`], but panics with only the error's own
    /// message so that it reads like an out of bounds index.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn or_panic(self) -> T;
}

impl<T, E: Display> OrPanic<T> for Result<T, E> {
    #[track_caller]
    fn or_panic(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
