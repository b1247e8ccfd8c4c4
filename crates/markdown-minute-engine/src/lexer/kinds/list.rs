use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::ElementKind;

static BULLET_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^( *)[-*+] (.+)$").unwrap());
static ORDERED_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^( *)\d+\. (.+)$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMarker {
    /// `-`, `*` or `+`
    Bullet,
    /// `1.`, `2.`, ...
    Ordered,
}

impl ListMarker {
    /// The container a run of items with this marker opens.
    pub fn container(self) -> ElementKind {
        match self {
            Self::Bullet => ElementKind::UnorderedList,
            Self::Ordered => ElementKind::OrderedList,
        }
    }
}

/// A list line broken into indentation, marker and item text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListLine<'a> {
    pub indent: &'a str,
    pub marker: ListMarker,
    pub text: &'a str,
}

pub struct ListItem;

impl ListItem {
    pub fn parse(line: &str) -> Option<ListLine<'_>> {
        let (caps, marker) = if let Some(caps) = BULLET_REGEX.captures(line) {
            (caps, ListMarker::Bullet)
        } else {
            (ORDERED_REGEX.captures(line)?, ListMarker::Ordered)
        };
        Some(ListLine {
            indent: caps.get(1).map_or("", |m| m.as_str()),
            marker,
            text: caps.get(2).map_or("", |m| m.as_str()),
        })
    }

    pub fn matches(line: &str) -> bool {
        BULLET_REGEX.is_match(line) || ORDERED_REGEX.is_match(line)
    }
}
