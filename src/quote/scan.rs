use tracing::debug;

use super::{EmptyNeedleError, NoNeedlesError, ScanError};

/// The earliest unescaped occurrence of one of several needles, as returned by [`find_next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NeedleMatch {
    /// The byte offset of the match within the haystack.
    pub position: usize,
    /// The index of the matching needle, in the order the needles were provided.
    pub index: usize,
    /// The byte length of the matching needle.
    pub len: usize,
}

impl NeedleMatch {
    /// Returns the byte offset directly after the match.
    pub const fn end(&self) -> usize {
        self.position + self.len
    }
}

/// Returns true if the character at `position` is escaped, meaning that it is directly preceded by
/// an odd number of consecutive `escape` tokens.
///
/// Without an escape token (`None` or an empty token), nothing is ever escaped. A `position` past
/// the end of `text` is treated as the end of `text`.
///
/// # Examples
/// ```
/// # use toolbelt::quote::is_escaped;
/// let text = r"a\'b\\'c";
/// assert!(is_escaped(text, 2, Some("\\")));
/// assert!(!is_escaped(text, 6, Some("\\")));
/// assert!(!is_escaped(text, 2, None));
/// ```
pub fn is_escaped(text: &str, position: usize, escape: Option<&str>) -> bool {
    let Some(escape) = escape.filter(|token| !token.is_empty()) else {
        return false;
    };

    // Bytes rather than chars, so a position inside a multi-byte char can't panic.
    let mut preceding = &text.as_bytes()[..position.min(text.len())];
    let mut count = 0_usize;
    while let Some(rest) = preceding.strip_suffix(escape.as_bytes()) {
        preceding = rest;
        count += 1;
    }

    count % 2 == 1
}

/// Finds the earliest unescaped occurrence of any of `needles` within `haystack`.
///
/// When several needles match at the same offset, the one provided first wins. Occurrences may
/// overlap, so an escaped match doesn't hide a later match which starts inside of it.
///
/// # Errors
/// Returns a [`ScanError`] if `needles` is empty or contains an empty needle.
///
/// # Examples
/// ```
/// # use toolbelt::quote::find_next;
/// let found = find_next(r#"isn\'t a "quoted" string"#, &["'", "\""], Some("\\")).unwrap();
/// assert_eq!(found.map(|m| (m.position, m.index)), Some((9, 1)));
///
/// assert_eq!(find_next("no quotes", &["'"], Some("\\")), Ok(None));
/// assert!(find_next("text", &[""], None).is_err());
/// ```
pub fn find_next<N: AsRef<str>>(
    haystack: &str,
    needles: &[N],
    escape: Option<&str>,
) -> Result<Option<NeedleMatch>, ScanError> {
    if needles.is_empty() {
        debug!("rejected scan without needles");
        return Err(NoNeedlesError.into());
    }
    if let Some(index) = needles.iter().position(|needle| needle.as_ref().is_empty()) {
        debug!(index, "rejected scan with an empty needle");
        return Err(EmptyNeedleError { index }.into());
    }

    Ok(scan(haystack, needles, escape))
}

/// The unchecked counterpart of [`find_next`]. Every needle must be non-empty.
pub(crate) fn scan<N: AsRef<str>>(
    haystack: &str,
    needles: &[N],
    escape: Option<&str>,
) -> Option<NeedleMatch> {
    needles
        .iter()
        .enumerate()
        .filter_map(|(index, needle)| {
            let needle = needle.as_ref();
            unescaped_from(haystack, needle, escape, 0).map(|position| NeedleMatch {
                position,
                index,
                len: needle.len(),
            })
        })
        .min_by_key(|found| (found.position, found.index))
}

/// Returns the position of the first unescaped `needle` at or after `from`. Escapes are counted
/// against the whole of `haystack`, not just the part being searched.
pub(crate) fn unescaped_from(
    haystack: &str,
    needle: &str,
    escape: Option<&str>,
    mut from: usize,
) -> Option<usize> {
    while let Some(found) = haystack[from..].find(needle) {
        let position = from + found;
        if !is_escaped(haystack, position, escape) {
            return Some(position);
        }
        // Step a single char so that overlapping occurrences are still considered.
        from = position + haystack[position..].chars().next().map_or(1, char::len_utf8);
    }
    None
}
