//! Line shapes recognized in boot ROM logs
//!
//! Two shapes exist:
//!
//! - DL record: `[DL] XXXXXXXX YYYYYYYY AABBCC`
//! - MSG record: `TT: XXXX YYYY` with an optional trailing ` [ZZZZ]`
//!
//! Both are searched for anywhere in a line. Hex digits are uppercase only.

use once_cell::sync::Lazy;
use regex::Regex;

/// Capture group names shared by both shapes
pub mod group {
    /// First numeric field
    pub const X: &str = "x";
    /// Second numeric field
    pub const Y: &str = "y";
    /// Optional bracketed field of a MSG record
    pub const Z: &str = "z";
    /// DL record trailing bytes
    pub const A: &str = "a";
    /// DL record trailing bytes
    pub const B: &str = "b";
    /// DL record trailing bytes
    pub const C: &str = "c";
    /// MSG record type tag
    pub const TYPE: &str = "type";
}

/// USB DL settings record
pub const DL_PATTERN: &str = r"\[DL\] (?P<x>[0-9A-F]{8}) (?P<y>[0-9A-F]{8}) (?P<a>[0-9A-F]{2})(?P<b>[0-9A-F]{2})(?P<c>[0-9A-F]{2})";

/// Generic two-letter message record
pub const MSG_PATTERN: &str =
    r"(?P<type>[0-9A-Z]{2}): (?P<x>[0-9A-F]{4}) (?P<y>[0-9A-F]{4})( \[(?P<z>[0-9A-F]{4})\])?";

// Constant patterns, checked by test_patterns_compile
static DL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(DL_PATTERN).unwrap());
static MSG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(MSG_PATTERN).unwrap());

/// A recognized line shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `[DL] ...` record
    Dl,
    /// `TT: ...` record
    Msg,
}

impl Shape {
    /// Shapes in the order they are tried; the first match wins
    pub const ALL: [Shape; 2] = [Shape::Dl, Shape::Msg];

    /// Compiled pattern for this shape
    pub fn regex(self) -> &'static Regex {
        match self {
            Shape::Dl => &DL_REGEX,
            Shape::Msg => &MSG_REGEX,
        }
    }
}
