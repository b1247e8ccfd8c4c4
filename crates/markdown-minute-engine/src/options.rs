use serde::{Deserialize, Serialize};

/// Switches for behaviour that is off by default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Render every blank line outside a multi-line block as `<br />`.
    pub blank_line_breaks: bool,
}
