use tracing::debug;

use super::scan::unescaped_from;
use super::{
    ConfigError, EmptyDelimiterError, EmptyEscapeError, EmptyNeedleError, MissingCloseError,
    NoPairsError, ScanError, Segment, Segments,
};

const DEFAULT_ESCAPE: &str = "\\";

/// An open delimiter and the close delimiters which may end a span it opens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuotePair {
    pub open: String,
    pub close: Vec<String>,
}

impl QuotePair {
    /// Creates a pair which is closed by a single delimiter.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> QuotePair {
        QuotePair {
            open: open.into(),
            close: vec![close.into()],
        }
    }

    /// Creates a pair which may be closed by any of `close`. If several close delimiters match at
    /// the same offset, the first provided wins.
    pub fn with_closes<I, S>(open: impl Into<String>, close: I) -> QuotePair
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        QuotePair {
            open: open.into(),
            close: close.into_iter().map(Into::into).collect(),
        }
    }
}

/// A configured quote scanner, which splits text into quoted and unquoted [`Segment`]s.
///
/// A Quoter holds a set of [`QuotePair`]s and an optional escape token. While outside of quotes,
/// the earliest unescaped open delimiter starts a quoted span. Inside of a span, only the close
/// delimiters of the pair that opened it are searched for, so a mismatched close delimiter can't end
/// the span early.
///
/// # Examples
/// ```
/// # use toolbelt::quote::{Quoter, Segment};
/// let quoter = Quoter::default();
/// let segments: Vec<_> = quoter.parse("string 'with' quotes").collect();
///
/// assert_eq!(segments.len(), 3);
/// assert_eq!(segments[0], Segment::Unquoted("string "));
/// assert_eq!(segments[1].text(), "with");
/// assert_eq!(segments[2], Segment::Unquoted(" quotes"));
/// assert_eq!(segments.iter().map(Segment::raw).collect::<String>(), "string 'with' quotes");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quoter {
    pairs: Vec<QuotePair>,
    opens: Vec<String>,
    escape: Option<String>,
}

impl Quoter {
    /// Returns a [`QuoterBuilder`] with no quote pairs and `\` as the escape token.
    pub fn builder() -> QuoterBuilder {
        QuoterBuilder::default()
    }

    /// Returns the quote pairs, in the order they were declared.
    pub fn pairs(&self) -> &[QuotePair] {
        &self.pairs
    }

    pub(crate) fn opens(&self) -> &[String] {
        &self.opens
    }

    pub fn escape(&self) -> Option<&str> {
        self.escape.as_deref()
    }

    /// Lazily splits `text` into alternating unquoted runs and quoted spans.
    ///
    /// The segments cover `text` exactly and in order. Empty unquoted runs are skipped. A quote
    /// which is still open at the end of `text` produces a final span with no close delimiter, see
    /// [`Segment::is_unterminated`].
    pub fn parse<'q, 't>(&'q self, text: &'t str) -> Segments<'q, 't> {
        Segments::new(self, text)
    }

    /// Returns `text` with every quoted span, delimiters included, removed.
    ///
    /// # Examples
    /// ```
    /// # use toolbelt::quote::Quoter;
    /// let quoter = Quoter::default();
    /// assert_eq!(quoter.strip(r#"keep "drop" keep 'drop'"#), "keep  keep ");
    /// ```
    pub fn strip(&self, text: &str) -> String {
        self.parse(text)
            .filter(|segment| !segment.is_quoted())
            .map(|segment| segment.raw())
            .collect()
    }

    /// Splits `text` on every unescaped occurrence of `separator` outside of quotes.
    ///
    /// # Errors
    /// Returns a [`ScanError`] if `separator` is empty.
    ///
    /// # Examples
    /// ```
    /// # use toolbelt::quote::Quoter;
    /// let quoter = Quoter::default();
    /// assert_eq!(
    ///     quoter.split("a, 'b, c', d", ", ").unwrap(),
    ///     ["a", "'b, c'", "d"]
    /// );
    /// ```
    pub fn split<'t>(&self, text: &'t str, separator: &str) -> Result<Vec<&'t str>, ScanError> {
        if separator.is_empty() {
            debug!("rejected split on an empty separator");
            return Err(EmptyNeedleError { index: 0 }.into());
        }

        let mut parts = Vec::new();
        let mut start = 0;
        let mut offset = 0;

        for segment in self.parse(text) {
            if let Segment::Unquoted(run) = segment {
                let mut from = 0;
                while let Some(position) = unescaped_from(run, separator, self.escape(), from) {
                    parts.push(&text[start..offset + position]);
                    start = offset + position + separator.len();
                    from = position + separator.len();
                }
            }
            offset += segment.raw().len();
        }

        parts.push(&text[start..]);
        Ok(parts)
    }

    /// Returns the body of `text` if it consists of exactly one closed quoted span.
    ///
    /// # Examples
    /// ```
    /// # use toolbelt::quote::Quoter;
    /// let quoter = Quoter::default();
    /// assert_eq!(quoter.unquote("'body'"), Some("body"));
    /// assert_eq!(quoter.unquote("'body' tail"), None);
    /// assert_eq!(quoter.unquote("'body"), None);
    /// ```
    pub fn unquote<'t>(&self, text: &'t str) -> Option<&'t str> {
        let mut segments = self.parse(text);
        match (segments.next(), segments.next()) {
            (Some(Segment::Quoted(span)), None) if span.close.is_some() => Some(span.body),
            _ => None,
        }
    }

    /// Wraps `text` in the first declared quote pair, escaping escape tokens and the start of every
    /// close delimiter of that pair within it, so that the result parses back as a single span.
    ///
    /// Without an escape token, `text` is wrapped as is.
    ///
    /// # Examples
    /// ```
    /// # use toolbelt::quote::Quoter;
    /// let quoter = Quoter::default();
    /// let quoted = quoter.quote(r"it's a\b");
    /// assert_eq!(quoted, r"'it\'s a\\b'");
    /// assert_eq!(quoter.unescape(quoter.unquote(&quoted).unwrap()), r"it's a\b");
    /// ```
    pub fn quote(&self, text: &str) -> String {
        // Building a Quoter guarantees at least one pair with at least one close delimiter.
        let pair = &self.pairs[0];
        let last = &pair.close[0];
        let Some(escape) = self.escape() else {
            return format!("{}{text}{last}", pair.open);
        };

        let mut body = String::with_capacity(text.len() + 2);
        let mut rest = text;
        while let Some(c) = rest.chars().next() {
            if let Some(after) = rest.strip_prefix(escape) {
                body.push_str(escape);
                body.push_str(escape);
                rest = after;
                continue;
            }
            if pair.close.iter().any(|close| closes_at(rest, close, last)) {
                body.push_str(escape);
            }
            body.push(c);
            rest = &rest[c.len_utf8()..];
        }

        format!("{}{body}{last}", pair.open)
    }

    /// Removes escape tokens from `body`, keeping the character each one escapes.
    pub fn unescape(&self, body: &str) -> String {
        let Some(escape) = self.escape() else {
            return body.to_owned();
        };

        let mut result = String::with_capacity(body.len());
        let mut rest = body;
        while let Some(found) = rest.find(escape) {
            result.push_str(&rest[..found]);
            let after = &rest[found + escape.len()..];
            let escaped = after.chars().next().map_or(0, char::len_utf8);
            result.push_str(&after[..escaped]);
            rest = &after[escaped..];
        }
        result.push_str(rest);
        result
    }
}

/// Whether `close` matches at the start of `rest`, once the final `last` delimiter follows it.
fn closes_at(rest: &str, close: &str, last: &str) -> bool {
    if rest.len() >= close.len() {
        rest.starts_with(close)
    } else {
        close.strip_prefix(rest).is_some_and(|tail| last.starts_with(tail))
    }
}

impl Default for Quoter {
    /// A Quoter for `'...'` and `"..."`, with `\` as the escape token.
    fn default() -> Quoter {
        Quoter {
            pairs: vec![QuotePair::new("'", "'"), QuotePair::new("\"", "\"")],
            opens: vec![String::from("'"), String::from("\"")],
            escape: Some(String::from(DEFAULT_ESCAPE)),
        }
    }
}

/// A builder for [`Quoter`], created by [`Quoter::builder`].
///
/// # Examples
/// ```
/// # use toolbelt::quote::Quoter;
/// let quoter = Quoter::builder()
///     .pair("«", "»")
///     .pair_multi("<<", [">>", "END"])
///     .no_escape()
///     .build()
///     .unwrap();
/// assert_eq!(quoter.strip("a «b» c <<d END e"), "a  c  e");
/// ```
#[derive(Debug, Clone)]
pub struct QuoterBuilder {
    pairs: Vec<QuotePair>,
    escape: Option<String>,
}

impl Default for QuoterBuilder {
    fn default() -> QuoterBuilder {
        QuoterBuilder {
            pairs: Vec::new(),
            escape: Some(String::from(DEFAULT_ESCAPE)),
        }
    }
}

impl QuoterBuilder {
    /// Adds a pair with a single close delimiter.
    pub fn pair(mut self, open: impl Into<String>, close: impl Into<String>) -> QuoterBuilder {
        self.pairs.push(QuotePair::new(open, close));
        self
    }

    /// Adds a pair which may be closed by any of `close`.
    pub fn pair_multi<I, S>(mut self, open: impl Into<String>, close: I) -> QuoterBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pairs.push(QuotePair::with_closes(open, close));
        self
    }

    pub fn escape(mut self, token: impl Into<String>) -> QuoterBuilder {
        self.escape = Some(token.into());
        self
    }

    /// Disables escaping, so that every delimiter occurrence counts.
    pub fn no_escape(mut self) -> QuoterBuilder {
        self.escape = None;
        self
    }

    /// Validates the configuration and builds the [`Quoter`].
    ///
    /// # Errors
    /// Returns a [`ConfigError`] if no pairs were added, a pair has no close delimiter, any
    /// delimiter is empty or the escape token is empty.
    pub fn build(self) -> Result<Quoter, ConfigError> {
        if self.pairs.is_empty() {
            debug!("rejected quoter without pairs");
            return Err(NoPairsError.into());
        }

        for pair in &self.pairs {
            if pair.close.is_empty() {
                debug!(open = %pair.open, "rejected quote pair without close delimiters");
                return Err(MissingCloseError { open: pair.open.clone() }.into());
            }
            if pair.open.is_empty() || pair.close.iter().any(String::is_empty) {
                debug!(open = %pair.open, "rejected empty quote delimiter");
                return Err(EmptyDelimiterError.into());
            }
        }

        if self.escape.as_deref() == Some("") {
            debug!("rejected empty escape token");
            return Err(EmptyEscapeError.into());
        }

        Ok(Quoter {
            opens: self.pairs.iter().map(|pair| pair.open.clone()).collect(),
            pairs: self.pairs,
            escape: self.escape,
        })
    }
}
