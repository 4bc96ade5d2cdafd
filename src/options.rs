use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::truncate::unit_offsets;

/// Visible length the target surface renders before it cuts a commit message.
pub const DEFAULT_VISIBLE_LIMIT: usize = 50;
/// Width the surface spends on its own `...` once it has cut.
pub const DEFAULT_ELLIPSIS_WIDTH: usize = 3;
/// Zero-width space placed between a closing and a reopening backtick.
pub const SEPARATOR_MARKER: char = '\u{200B}';
/// Blank used to push an opening backtick past the cut.
pub const DEFAULT_FILLER: char = ' ';

/// How the display surface counts "characters".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    /// Extended grapheme clusters; a compound emoji counts once.
    #[default]
    Grapheme,
    /// Unicode scalar values; a ZWJ emoji sequence counts once per code point.
    Scalar,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepairOptions {
    pub visible_limit: usize,
    pub ellipsis_width: usize,
    pub separator: char,
    pub filler: char,
    pub unit: LengthUnit,
}

impl Default for RepairOptions {
    fn default() -> Self {
        Self {
            visible_limit: DEFAULT_VISIBLE_LIMIT,
            ellipsis_width: DEFAULT_ELLIPSIS_WIDTH,
            separator: SEPARATOR_MARKER,
            filler: DEFAULT_FILLER,
            unit: LengthUnit::Grapheme,
        }
    }
}

impl RepairOptions {
    /// Reject settings the repairer cannot honour.
    ///
    /// The free functions never call this and stay total for any settings.
    pub fn validate(&self) -> Result<()> {
        if self.ellipsis_width >= self.visible_limit {
            return Err(Error::EllipsisTooWide {
                ellipsis_width: self.ellipsis_width,
                visible_limit: self.visible_limit,
            });
        }
        if self.separator == '`' {
            return Err(Error::BacktickMarker("separator"));
        }
        if self.filler == '`' {
            return Err(Error::BacktickMarker("filler"));
        }
        Ok(())
    }

    /// Number of units the surface keeps for a message `total_units` long.
    pub fn effective_limit(&self, total_units: usize) -> usize {
        if total_units > self.visible_limit {
            self.visible_limit.saturating_sub(self.ellipsis_width)
        } else {
            self.visible_limit
        }
    }

    /// The prefix of `message` the surface will actually render (ellipsis excluded).
    pub fn visible_prefix<'a>(&self, message: &'a str) -> &'a str {
        let units = unit_offsets(message, self.unit);
        let keep = self.effective_limit(units.len());
        match units.get(keep) {
            Some(&end) => &message[..end],
            None => message,
        }
    }
}
