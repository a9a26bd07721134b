use std::fmt::{self, Debug, Formatter};
use std::ops::{Deref, DerefMut, Index, IndexMut};

use crate::num::{OffsetError, WrapMode, offset_wrap};
use crate::util::result::OrPanic;

/// A thin wrapper around [`Vec<T>`] which is addressed by signed offsets rather than indices.
///
/// Each Ary has a default [`WrapMode`] (initially [`WrapMode::None`]), which decides how offsets
/// are mapped onto elements. Negative offsets address elements from the end, so `-1` is the last
/// element. Ary implements [`Deref<Target = [T]>`](Deref), so the usual slice methods remain
/// available. Indexing with `[]` always takes an offset, so plain indices need an explicit deref,
/// as in `(*ary)[i]`.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Ary.
/// - `i`: The index that the offset maps to.
///
/// | Method | Complexity |
/// |-|-|
/// | `offset` | `O(1)` |
/// | `get` | `O(1)` |
/// | `push` | `O(1)`* |
/// | `remove` | `O(n-i)` |
/// | `rotate` | `O(n)` |
///
/// \* Amortized, as for [`Vec::push`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Ary<T> {
    items: Vec<T>,
    mode: WrapMode,
}

impl<T> Ary<T> {
    /// Creates a new, empty Ary using [`WrapMode::None`].
    pub const fn new() -> Ary<T> {
        Ary::with_mode(WrapMode::None)
    }

    /// Creates a new, empty Ary using `mode` for offset access.
    ///
    /// # Examples
    /// ```
    /// # use toolbelt::collections::Ary;
    /// # use toolbelt::num::WrapMode;
    /// let mut ary = Ary::with_mode(WrapMode::Wrap);
    /// ary.extend(['a', 'b', 'c']);
    /// assert_eq!(ary.get(4), Some(&'b'));
    /// assert_eq!(ary.get(-4), Some(&'c'));
    /// ```
    pub const fn with_mode(mode: WrapMode) -> Ary<T> {
        Ary {
            items: Vec::new(),
            mode,
        }
    }

    pub const fn mode(&self) -> WrapMode {
        self.mode
    }

    pub const fn set_mode(&mut self, mode: WrapMode) {
        self.mode = mode;
    }

    /// Consumes self, returning a new Ary with the same items using `mode`.
    pub fn into_mode(self, mode: WrapMode) -> Ary<T> {
        Ary { mode, ..self }
    }

    /// Maps `offset` onto an index using the Ary's mode.
    ///
    /// # Errors
    /// Returns an [`OffsetError`] if the Ary is empty, or if the mode is [`WrapMode::None`] and
    /// `offset` is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use toolbelt::collections::Ary;
    /// let ary = Ary::from(vec![10, 20, 30]);
    /// assert_eq!(ary.offset(-1), Ok(2));
    /// assert!(ary.offset(3).is_err());
    /// assert!(Ary::<u8>::new().offset(0).is_err());
    /// ```
    pub fn offset(&self, offset: i64) -> Result<usize, OffsetError> {
        self.offset_with(offset, self.mode)
    }

    /// Maps `offset` onto an index using `mode` rather than the Ary's mode.
    ///
    /// # Errors
    /// See [`Ary::offset`].
    pub fn offset_with(&self, offset: i64, mode: WrapMode) -> Result<usize, OffsetError> {
        // A Vec never holds more than isize::MAX elements.
        let length = i64::try_from(self.items.len()).unwrap_or(i64::MAX);
        offset_wrap(length, offset, mode)
    }

    /// Returns a reference to the element at `offset`, or `None` if `offset` can't be mapped.
    pub fn get(&self, offset: i64) -> Option<&T> {
        self.get_with(offset, self.mode)
    }

    pub fn get_with(&self, offset: i64, mode: WrapMode) -> Option<&T> {
        self.offset_with(offset, mode).ok().map(|index| &self.items[index])
    }

    pub fn get_mut(&mut self, offset: i64) -> Option<&mut T> {
        self.offset(offset).ok().map(|index| &mut self.items[index])
    }

    /// Returns a reference to the element at `offset`.
    ///
    /// # Errors
    /// See [`Ary::offset`].
    pub fn try_get(&self, offset: i64) -> Result<&T, OffsetError> {
        self.offset(offset).map(|index| &self.items[index])
    }

    /// Replaces the element at `offset` with `item`, returning the old element.
    ///
    /// # Errors
    /// See [`Ary::offset`].
    pub fn replace(&mut self, offset: i64, item: T) -> Result<T, OffsetError> {
        let index = self.offset(offset)?;
        Ok(std::mem::replace(&mut self.items[index], item))
    }

    /// Removes and returns the element at `offset`, shifting later elements down.
    ///
    /// # Errors
    /// See [`Ary::offset`].
    pub fn remove(&mut self, offset: i64) -> Result<T, OffsetError> {
        let index = self.offset(offset)?;
        Ok(self.items.remove(index))
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Rotates the Ary so that the element at `amount` becomes the first. The amount always wraps,
    /// regardless of the Ary's mode, and an empty Ary is left as is.
    ///
    /// # Examples
    /// ```
    /// # use toolbelt::collections::Ary;
    /// let mut ary = Ary::from(vec![1, 2, 3, 4]);
    /// ary.rotate(-1);
    /// assert_eq!(*ary, [4, 1, 2, 3]);
    /// ary.rotate(9);
    /// assert_eq!(*ary, [1, 2, 3, 4]);
    /// ```
    pub fn rotate(&mut self, amount: i64) {
        if let Ok(shift) = self.offset_with(amount, WrapMode::Wrap) {
            self.items.rotate_left(shift);
        }
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for Ary<T> {
    fn default() -> Ary<T> {
        Ary::new()
    }
}

impl<T> Deref for Ary<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T> DerefMut for Ary<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.items
    }
}

impl<T> Index<i64> for Ary<T> {
    type Output = T;

    /// # Panics
    /// Panics if `offset` can't be mapped with the Ary's mode, see [`Ary::offset`].
    fn index(&self, offset: i64) -> &Self::Output {
        self.try_get(offset).or_panic()
    }
}

impl<T> IndexMut<i64> for Ary<T> {
    /// # Panics
    /// Panics if `offset` can't be mapped with the Ary's mode, see [`Ary::offset`].
    fn index_mut(&mut self, offset: i64) -> &mut Self::Output {
        let index = self.offset(offset).or_panic();
        &mut self.items[index]
    }
}

impl<T> From<Vec<T>> for Ary<T> {
    fn from(items: Vec<T>) -> Ary<T> {
        Ary {
            items,
            mode: WrapMode::None,
        }
    }
}

impl<T> From<Ary<T>> for Vec<T> {
    fn from(ary: Ary<T>) -> Vec<T> {
        ary.items
    }
}

impl<T> FromIterator<T> for Ary<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Ary<T> {
        Ary::from(Vec::from_iter(iter))
    }
}

impl<T> Extend<T> for Ary<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Ary<T> {
    type Item = T;

    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Ary<T> {
    type Item = &'a T;

    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Debug> Debug for Ary<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ary")
            .field("mode", &self.mode)
            .field("items", &self.items)
            .finish()
    }
}
