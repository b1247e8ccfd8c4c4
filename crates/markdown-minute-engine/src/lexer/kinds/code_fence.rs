use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// A line made of a backtick fence and nothing but an optional language tag.
static FENCE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^```[ \t]*([^`\s]*)[ \t]*$").unwrap());

/// What a fence line tells us.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceSig {
    /// Language tag after the backticks, if any.
    pub language: Option<String>,
}

impl FenceSig {
    /// Only a bare fence closes an open block.
    pub fn is_closing(&self) -> bool {
        self.language.is_none()
    }
}

pub struct CodeFence;

impl CodeFence {
    pub fn sig(line: &str) -> Option<FenceSig> {
        let caps = FENCE_REGEX.captures(line)?;
        let language = caps
            .get(1)
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        Some(FenceSig { language })
    }

    /// Escapes `&`, `<`, `>` and `"` for a line inside a fence.
    pub fn escape(line: &str) -> Cow<'_, str> {
        html_escape::encode_double_quoted_attribute(line)
    }
}
