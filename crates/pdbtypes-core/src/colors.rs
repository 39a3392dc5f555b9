//! ANSI color codes for dump output.
//!
//! - Blue: section headers and type indices
//! - Green: rendered declarators
//! - Dim: leaf names
//! - Reset: return to default
//!
//! [`dump`](../pdbtypes/fn.dump.html) takes `Colors::ON` or `Colors::OFF`; there
//! is no terminal detection here.

/// ANSI color palette.
///
/// Uses only standard 16-color ANSI codes so output stays readable on
/// light and dark terminals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Colors {
    /// Colors enabled (ANSI escape codes).
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// Colors disabled (empty strings).
    pub const OFF: Self = Self {
        blue: "",
        green: "",
        dim: "",
        reset: "",
    };
}
