//! # Inline Kinds
//!
//! The ordered pattern table of the inline tokenizer. Declaration order is
//! the tie-break when two patterns match at the same offset.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::ElementKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineKind {
    /// `#`..`####` followed by a space, anchored at the start of the text.
    Heading,
    /// `` `code` ``, a raw zone.
    Code,
    /// `![alt](src)`
    Image,
    /// `[text](href)`
    Link,
    /// `**bold**`
    Bold,
    /// `__italic__`
    Italic,
    /// `~~strike~~`
    Strike,
}

impl InlineKind {
    /// The element a match of this kind creates. Headings are resolved from
    /// the marker length instead.
    pub fn element(self) -> ElementKind {
        match self {
            Self::Heading => ElementKind::H1,
            Self::Code => ElementKind::Code,
            Self::Image => ElementKind::Image,
            Self::Link => ElementKind::Link,
            Self::Bold => ElementKind::Strong,
            Self::Italic => ElementKind::Italic,
            Self::Strike => ElementKind::Strike,
        }
    }
}

static INLINE_PATTERNS: Lazy<Vec<(InlineKind, Regex)>> = Lazy::new(|| {
    [
        (InlineKind::Heading, r"^(#{1,4}) (.*)$"),
        (InlineKind::Code, r"`(.*?)`"),
        (InlineKind::Image, r"!\[(.*?)\]\((.*?)\)"),
        (InlineKind::Link, r"\[(.*?)\]\((.*?)\)"),
        (InlineKind::Bold, r"\*\*(.*?)\*\*"),
        (InlineKind::Italic, r"__(.*?)__"),
        (InlineKind::Strike, r"~~(.*?)~~"),
    ]
    .into_iter()
    .map(|(kind, pattern)| (kind, Regex::new(pattern).unwrap()))
    .collect()
});

/// One pattern hit, with offsets relative to the searched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineMatch<'t> {
    pub kind: InlineKind,
    pub start: usize,
    pub end: usize,
    /// Captured body: link text, image alt, emphasised text, heading text.
    pub inner: &'t str,
    /// Link `href` or image `src`; empty for other kinds.
    pub target: &'t str,
    /// Number of `#` for headings, 0 otherwise.
    pub level: usize,
}

/// Finds the leftmost match among all inline patterns.
///
/// Ties go to the pattern declared first. Headings are only tried when
/// `allow_heading` is set.
pub fn leftmost(text: &str, allow_heading: bool) -> Option<InlineMatch<'_>> {
    let mut best: Option<InlineMatch<'_>> = None;

    for (kind, regex) in INLINE_PATTERNS.iter() {
        if *kind == InlineKind::Heading && !allow_heading {
            continue;
        }
        let Some(caps) = regex.captures(text) else {
            continue;
        };
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if best.is_some_and(|b| b.start <= whole.start()) {
            continue;
        }

        let group = |n: usize| caps.get(n).map_or("", |m| m.as_str());
        best = Some(match kind {
            InlineKind::Heading => InlineMatch {
                kind: *kind,
                start: whole.start(),
                end: whole.end(),
                inner: group(2),
                target: "",
                level: group(1).len(),
            },
            InlineKind::Image | InlineKind::Link => InlineMatch {
                kind: *kind,
                start: whole.start(),
                end: whole.end(),
                inner: group(1),
                target: group(2),
                level: 0,
            },
            _ => InlineMatch {
                kind: *kind,
                start: whole.start(),
                end: whole.end(),
                inner: group(1),
                target: "",
                level: 0,
            },
        });
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("**b**", InlineKind::Bold, "b")]
    #[case("__i__", InlineKind::Italic, "i")]
    #[case("~~s~~", InlineKind::Strike, "s")]
    #[case("`c`", InlineKind::Code, "c")]
    #[case("[t](u)", InlineKind::Link, "t")]
    #[case("![a](u)", InlineKind::Image, "a")]
    #[case("## h", InlineKind::Heading, "h")]
    fn single_construct(#[case] text: &str, #[case] kind: InlineKind, #[case] inner: &str) {
        let m = leftmost(text, true).unwrap();
        assert_eq!(m.kind, kind);
        assert_eq!(m.inner, inner);
        assert_eq!((m.start, m.end), (0, text.len()));
    }

    #[test]
    fn leftmost_match_wins() {
        let m = leftmost("a __i__ **b**", false).unwrap();
        assert_eq!(m.kind, InlineKind::Italic);
        assert_eq!(m.start, 2);
    }

    #[test]
    fn outer_match_wins_over_nested() {
        let m = leftmost("**a `c` b**", false).unwrap();
        assert_eq!(m.kind, InlineKind::Bold);
        assert_eq!(m.inner, "a `c` b");
    }

    #[test]
    fn code_span_wins_over_bold_inside_it() {
        let m = leftmost("`code**test**`", false).unwrap();
        assert_eq!(m.kind, InlineKind::Code);
        assert_eq!(m.inner, "code**test**");
    }

    #[test]
    fn image_beats_link_at_same_text() {
        let m = leftmost("![alt](img.png)", false).unwrap();
        assert_eq!(m.kind, InlineKind::Image);
        assert_eq!(m.target, "img.png");
    }

    #[test]
    fn captures_are_non_greedy() {
        let m = leftmost("**a** and **b**", false).unwrap();
        assert_eq!(m.inner, "a");
        assert_eq!(m.end, 5);
    }

    #[test]
    fn empty_captures_are_kept() {
        let m = leftmost("[text]()", false).unwrap();
        assert_eq!(m.inner, "text");
        assert_eq!(m.target, "");
    }

    #[rstest]
    #[case("# one", 1)]
    #[case("#### four", 4)]
    fn heading_levels(#[case] text: &str, #[case] level: usize) {
        assert_eq!(leftmost(text, true).unwrap().level, level);
    }

    #[rstest]
    #[case("##### five")]
    #[case("#nospace")]
    #[case("text # not heading")]
    fn not_headings(#[case] text: &str) {
        assert!(leftmost(text, true).is_none());
    }

    #[test]
    fn headings_are_skipped_when_not_allowed() {
        assert!(leftmost("# h", false).is_none());
    }

    #[test]
    fn plain_text_has_no_match() {
        assert!(leftmost("just words", true).is_none());
    }
}
