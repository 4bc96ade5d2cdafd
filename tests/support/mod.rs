#![allow(dead_code)]

use backtick_guard::{LengthUnit, RepairOptions, is_unclosed};
use unicode_segmentation::UnicodeSegmentation;

pub const ZWSP: &str = "\u{200B}";
pub const TECHNOLOGIST: &str = "\u{1F9D1}\u{200D}\u{1F4BB}";

pub fn xs(n: usize) -> String {
    "X".repeat(n)
}

pub fn ticked(s: &str) -> String {
    format!("`{s}`")
}

/// First `n` units of `text`, without any ellipsis bookkeeping.
pub fn first_units(text: &str, n: usize, unit: LengthUnit) -> String {
    match unit {
        LengthUnit::Grapheme => text.graphemes(true).take(n).collect(),
        LengthUnit::Scalar => text.chars().take(n).collect(),
    }
}

/// Checks every guarantee a repaired message must give the display surface.
pub fn assert_surface_safe(fixed: &str, opts: &RepairOptions) {
    assert!(
        !is_unclosed(opts.visible_prefix(fixed)),
        "visible prefix of {fixed:?} has an open span"
    );
    assert!(!is_unclosed(fixed), "{fixed:?} has an open span");
    let head = first_units(fixed, opts.visible_limit, opts.unit);
    assert!(!head.contains("``"), "{head:?} contains an empty span");
}
