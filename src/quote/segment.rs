use std::iter::FusedIterator;

use tracing::{debug, trace};

use super::scan::scan;
use super::{QuotePair, Quoter};

/// A run of text produced by [`Quoter::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment<'t> {
    /// Text outside of any quotes.
    Unquoted(&'t str),
    /// A quoted span, including its delimiters.
    Quoted(QuotedSpan<'t>),
}

/// A quoted span within parsed text. All fields borrow from the parsed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuotedSpan<'t> {
    /// The full span, delimiters included. Equal to `open + body + close`.
    pub raw: &'t str,
    pub open: &'t str,
    /// The text between the delimiters, with any escape tokens left in place.
    pub body: &'t str,
    /// The close delimiter, or `None` if the text ended before the quote was closed.
    pub close: Option<&'t str>,
}

impl<'t> Segment<'t> {
    /// Returns the exact source text of this segment. Concatenating the raw text of every segment
    /// produced by [`Quoter::parse`] gives back the parsed text.
    pub const fn raw(&self) -> &'t str {
        match *self {
            Segment::Unquoted(run) => run,
            Segment::Quoted(span) => span.raw,
        }
    }

    /// Returns the content of this segment, without delimiters if it is quoted.
    pub const fn text(&self) -> &'t str {
        match *self {
            Segment::Unquoted(run) => run,
            Segment::Quoted(span) => span.body,
        }
    }

    pub const fn is_quoted(&self) -> bool {
        matches!(self, Segment::Quoted(_))
    }

    /// Returns true if this is a quoted span which was never closed.
    pub const fn is_unterminated(&self) -> bool {
        matches!(self, Segment::Quoted(QuotedSpan { close: None, .. }))
    }
}

#[derive(Debug, Clone, Copy)]
enum State<'q> {
    Unquoted,
    Quoted(&'q QuotePair),
    Done,
}

/// An iterator over the [`Segment`]s of some text, see [`Quoter::parse`].
///
/// Cloning the iterator allows the remaining segments to be scanned again.
#[derive(Debug, Clone)]
pub struct Segments<'q, 't> {
    quoter: &'q Quoter,
    text: &'t str,
    cursor: usize,
    state: State<'q>,
}

impl<'q, 't> Segments<'q, 't> {
    pub(crate) const fn new(quoter: &'q Quoter, text: &'t str) -> Segments<'q, 't> {
        Segments {
            quoter,
            text,
            cursor: 0,
            state: State::Unquoted,
        }
    }

    /// Returns the text which hasn't been consumed yet.
    pub fn remainder(&self) -> &'t str {
        &self.text[self.cursor..]
    }

    fn next_unquoted(&mut self) -> Option<Segment<'t>> {
        let rest = self.remainder();
        if rest.is_empty() {
            self.state = State::Done;
            return None;
        }

        match scan(rest, self.quoter.opens(), self.quoter.escape()) {
            Some(found) => {
                let pair = &self.quoter.pairs()[found.index];
                trace!(offset = self.cursor + found.position, open = %pair.open, "quote opened");
                self.state = State::Quoted(pair);
                self.cursor += found.position;
                Some(Segment::Unquoted(&rest[..found.position]))
            },
            None => {
                self.state = State::Done;
                self.cursor = self.text.len();
                Some(Segment::Unquoted(rest))
            },
        }
    }

    fn next_quoted(&mut self, pair: &'q QuotePair) -> Segment<'t> {
        let rest = self.remainder();
        let (open, after) = rest.split_at(pair.open.len());

        // Scanning only `after` keeps escape tokens in the open delimiter from counting.
        match scan(after, pair.close.as_slice(), self.quoter.escape()) {
            Some(found) => {
                let end = open.len() + found.end();
                trace!(offset = self.cursor + end, "quote closed");
                self.state = State::Unquoted;
                self.cursor += end;
                Segment::Quoted(QuotedSpan {
                    raw: &rest[..end],
                    open,
                    body: &after[..found.position],
                    close: Some(&after[found.position..found.end()]),
                })
            },
            None => {
                debug!(offset = self.cursor, open = %pair.open, "quote left unterminated");
                self.state = State::Done;
                self.cursor = self.text.len();
                Segment::Quoted(QuotedSpan {
                    raw: rest,
                    open,
                    body: after,
                    close: None,
                })
            },
        }
    }
}

impl<'t> Iterator for Segments<'_, 't> {
    type Item = Segment<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.state {
                State::Done => return None,
                State::Quoted(pair) => return Some(self.next_quoted(pair)),
                State::Unquoted => match self.next_unquoted() {
                    // A quote directly at the cursor leaves an empty run, which isn't emitted.
                    Some(Segment::Unquoted("")) => continue,
                    other => return other,
                },
            }
        }
    }
}

impl FusedIterator for Segments<'_, '_> {}
