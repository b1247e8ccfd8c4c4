use once_cell::sync::Lazy;
use regex::Regex;

/// A line with at least one `|...|` column boundary, e.g. `|a|b|` or `x |a| y`.
static ROW_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\|.*\|").unwrap());

/// A row whose every cell is `-`, `:-`, `-:` or `:-:` (dashes may repeat).
static ALIGNMENT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\|(\s*:?-+:?\s*\|)+\s*$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }

    /// Reads one alignment cell. A plain `-` run carries no alignment.
    pub fn from_cell(cell: &str) -> Option<Self> {
        let cell = cell.trim();
        match (cell.starts_with(':'), cell.len() > 1 && cell.ends_with(':')) {
            (true, true) => Some(Self::Center),
            (true, false) => Some(Self::Left),
            (false, true) => Some(Self::Right),
            (false, false) => None,
        }
    }
}

pub struct TableRow;

impl TableRow {
    pub fn is_row(line: &str) -> bool {
        ROW_REGEX.is_match(line)
    }

    pub fn is_alignment(line: &str) -> bool {
        ALIGNMENT_REGEX.is_match(line)
    }

    /// Splits a row into trimmed cell texts, dropping the outer pipes.
    pub fn cells(line: &str) -> Vec<&str> {
        let line = line.trim();
        let line = line.strip_prefix('|').unwrap_or(line);
        let line = line.strip_suffix('|').unwrap_or(line);
        line.split('|').map(str::trim).collect()
    }

    pub fn alignments(line: &str) -> Vec<Option<Alignment>> {
        Self::cells(line)
            .into_iter()
            .map(Alignment::from_cell)
            .collect()
    }
}
