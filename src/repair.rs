use tracing::{debug, trace};

use crate::options::RepairOptions;
use crate::syntax::{BACKTICK, is_unclosed};
use crate::truncate::unit_offsets;

/// Repair `message` for the default surface (50 graphemes, 3-wide ellipsis).
pub fn repair(message: &str) -> String {
    repair_with(message, &RepairOptions::default())
}

/// Make sure whatever prefix the surface keeps of `message` has balanced backticks.
///
/// The returned string is never truncated here; cutting is left to the surface. Only the
/// region around the cut is touched:
///
/// - an odd total backtick count is closed at the end first (preceded by the separator marker
///   when the message already ends with a backtick, so no empty span appears);
/// - an opening backtick in the last two visible units is pushed past the cut with fillers;
/// - otherwise the span is closed right before the last visible unit and reopened after a
///   separator marker, so that unit still renders as code.
pub fn repair_with(message: &str, opts: &RepairOptions) -> String {
    let mut out = String::with_capacity(message.len() + 8);
    out.push_str(message);

    if is_unclosed(&out) {
        if out.ends_with(BACKTICK) {
            out.push(opts.separator);
        }
        out.push(BACKTICK);
        debug!(len = out.len(), "closed unterminated inline code span");
    }

    let units = unit_offsets(&out, opts.unit);
    let keep = opts.effective_limit(units.len());
    let Some(&visible_end) = units.get(keep) else {
        // Nothing gets cut.
        return out;
    };
    if !is_unclosed(&out[..visible_end]) {
        return out;
    }

    // An odd visible count implies at least one visible unit, and a cut means `units[keep]`
    // exists, so every visible unit has an end offset.
    let visible = &units[..keep];
    let tail_from = keep.saturating_sub(2);
    // A grapheme may carry its backtick after a prepended mark (e.g. U+0600).
    let trailing_tick = (tail_from..keep)
        .rev()
        .find(|&i| out[units[i]..units[i + 1]].contains(BACKTICK));

    match trailing_tick {
        Some(i) => {
            let pad = keep - i;
            let at = visible[i];
            trace!(at, pad, "pushing opening backtick past the cut");
            let filler: String = std::iter::repeat_n(opts.filler, pad).collect();
            out.insert_str(at, &filler);
        }
        None => {
            let at = visible[keep - 1];
            trace!(at, "splitting inline code span at the cut");
            let mut split = String::with_capacity(2 + opts.separator.len_utf8());
            split.push(BACKTICK);
            split.push(opts.separator);
            split.push(BACKTICK);
            out.insert_str(at, &split);
        }
    }

    debug!(
        visible_units = keep,
        "repaired inline code span crossing the truncation point"
    );
    out
}
