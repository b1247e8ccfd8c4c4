/// Blockquote line syntax: one or more `>` markers, optionally separated by
/// spaces, in front of the line text.
pub struct BlockQuote;

/// A line split into its quote depth and the text after the markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteLine<'a> {
    pub depth: usize,
    pub text: &'a str,
}

impl BlockQuote {
    pub const PREFIX: u8 = b'>';

    /// Counts the leading `>` markers of `line`.
    ///
    /// Accepts `> text`, `>> text` and `> > text`; one space after each marker
    /// is part of the marker. A depth of 0 means the line is not a quote.
    pub fn split(line: &str) -> QuoteLine<'_> {
        let b = line.as_bytes();
        let mut i = 0usize;
        let mut depth = 0usize;

        loop {
            let mut j = i;
            while j < b.len() && b[j] == b' ' {
                j += 1;
            }
            if j >= b.len() || b[j] != Self::PREFIX {
                break;
            }
            depth += 1;
            i = j + 1;
            if i < b.len() && b[i] == b' ' {
                i += 1;
            }
        }

        QuoteLine {
            depth,
            text: &line[i..],
        }
    }

    pub fn depth(line: &str) -> usize {
        Self::split(line).depth
    }
}
