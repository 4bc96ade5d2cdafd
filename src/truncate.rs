//! Simulation of the display surface's own truncation.
//!
//! The surface counts units, keeps the first `limit` of them, and once it has to cut it also
//! gives up `ellipsis_width` units to its `...`. Cuts only ever land on unit boundaries.

use unicode_segmentation::UnicodeSegmentation;

use crate::options::{LengthUnit, RepairOptions};

/// Byte offset of the start of every unit in `text`.
pub(crate) fn unit_offsets(text: &str, unit: LengthUnit) -> Vec<usize> {
    match unit {
        LengthUnit::Grapheme => text.grapheme_indices(true).map(|(i, _)| i).collect(),
        LengthUnit::Scalar => text.char_indices().map(|(i, _)| i).collect(),
    }
}

/// Count units in `text` the way the surface does.
pub fn unit_len(text: &str, unit: LengthUnit) -> usize {
    match unit {
        LengthUnit::Grapheme => text.graphemes(true).count(),
        LengthUnit::Scalar => text.chars().count(),
    }
}

/// The part of `message` a surface with a `limit`-grapheme budget renders before its ellipsis.
///
/// Uses the default ellipsis width. See [`RepairOptions::visible_prefix`] for other surfaces.
pub fn visible_prefix(message: &str, limit: usize) -> &str {
    RepairOptions {
        visible_limit: limit,
        ..RepairOptions::default()
    }
    .visible_prefix(message)
}
