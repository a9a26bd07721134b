use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use derive_more::IsVariant;

use super::WrapModeError;

/// The policy used to map an out-of-range offset back into `[0, length - 1]`.
///
/// | Mode | `offset_wrap(5, -14, _)` | `offset_wrap(5, 15, _)` |
/// |-|-|-|
/// | `None` | error | error |
/// | `Wrap` | `1` | `0` |
/// | `Restrict` | `0` | `4` |
/// | `Limit` | `0` | `4` |
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum WrapMode {
    /// Offsets outside of `[-length, length - 1]` are rejected. Negative offsets address elements
    /// from the end.
    #[default]
    None,
    /// Offsets wrap around modulo the length, in both directions.
    Wrap,
    /// Offsets are clamped to `[-length, length - 1]` and negative results then address elements
    /// from the end.
    Restrict,
    /// Offsets are clamped to `[0, length - 1]`. Negative offsets have no special meaning.
    Limit,
}

impl WrapMode {
    pub const ALL: [WrapMode; 4] = [WrapMode::None, WrapMode::Wrap, WrapMode::Restrict, WrapMode::Limit];

    /// Returns the lowercase name of the mode, as accepted by [`WrapMode::from_str`].
    pub const fn name(self) -> &'static str {
        match self {
            WrapMode::None => "none",
            WrapMode::Wrap => "wrap",
            WrapMode::Restrict => "restrict",
            WrapMode::Limit => "limit",
        }
    }

    /// Returns the integer flag for this mode, the inverse of [`WrapMode::try_from`].
    pub const fn flag(self) -> i64 {
        match self {
            WrapMode::None => 0,
            WrapMode::Wrap => 1,
            WrapMode::Restrict => 2,
            WrapMode::Limit => 3,
        }
    }
}

impl Display for WrapMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for WrapMode {
    type Err = WrapModeError;

    /// Parses a mode from its name, ignoring case and surrounding whitespace.
    ///
    /// # Examples
    /// ```
    /// # use toolbelt::num::WrapMode;
    /// assert_eq!("Wrap".parse::<WrapMode>(), Ok(WrapMode::Wrap));
    /// assert!("wrapped".parse::<WrapMode>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        WrapMode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                tracing::debug!(value = s, "rejected unknown wrap mode name");
                WrapModeError { value: s.to_owned() }
            })
    }
}

impl TryFrom<i64> for WrapMode {
    type Error = WrapModeError;

    fn try_from(flag: i64) -> Result<Self, Self::Error> {
        WrapMode::ALL
            .into_iter()
            .find(|mode| mode.flag() == flag)
            .ok_or_else(|| {
                tracing::debug!(flag, "rejected unknown wrap mode flag");
                WrapModeError { value: flag.to_string() }
            })
    }
}
