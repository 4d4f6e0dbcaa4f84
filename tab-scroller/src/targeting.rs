use crate::{FocusCorrection, IndicatorStates, LayoutDirection, LayoutOutcome, TabStrip};

/// Scroll-target resolution.
///
/// Every method takes the current translate offset plus the frame width and
/// returns plain values; nothing here mutates the strip or talks to a host.
impl TabStrip {
    pub fn is_overflowing(&self, frame_width: u32) -> bool {
        self.total_width() > frame_width as u64
    }

    /// Upper bound for the translate offset: `total_width - frame_width`,
    /// saturating to 0 when the strip fits inside the frame.
    pub fn max_translate_offset(&self, frame_width: u32) -> u64 {
        self.total_width().saturating_sub(frame_width as u64)
    }

    /// Clamps an offset into `[0, max_translate_offset]`. The source of the
    /// algorithms only bounded the offset indirectly through target selection;
    /// clamping here avoids negative-reveal artifacts from rounding.
    pub fn clamp_translate_offset(&self, frame_width: u32, offset: u64) -> u64 {
        offset.min(self.max_translate_offset(frame_width))
    }

    /// Resolves the tab to align the leading edge to when scrolling backward
    /// (toward the start), revealing roughly one frame-width of hidden
    /// leading content.
    ///
    /// Scans from the last tab down to index 1, skipping tabs already at or
    /// past the view's start, and accumulates candidate widths; the first
    /// accumulation exceeding the frame width selects the tab after it.
    /// If every remaining hidden tab fits within one frame, falls back to
    /// tab 0 (scroll fully to the start). `None` only for an empty strip.
    pub fn resolve_back_target(
        &self,
        frame_width: u32,
        translate_offset: u64,
        direction: LayoutDirection,
    ) -> Option<usize> {
        if self.is_empty() {
            return None;
        }

        let mut accumulated = 0u64;
        for index in (1..self.len()).rev() {
            let coordinate = self.leading_coordinate(index, direction)?;
            if coordinate >= translate_offset {
                continue;
            }

            accumulated = accumulated.saturating_add(self.width(index)? as u64);
            if accumulated > frame_width as u64 {
                ttrace!(target_index = index + 1, "resolve_back_target");
                return Some(index + 1);
            }
        }

        ttrace!(target_index = 0usize, "resolve_back_target fallback");
        Some(0)
    }

    /// Resolves the tab to align the leading edge to when scrolling forward,
    /// revealing one frame-width of trailing content.
    ///
    /// The boundary is the coordinate just past the view's trailing edge; the
    /// first tab not fully contained within the current view becomes the
    /// target. `None` when the view already shows the last tab fully — the
    /// caller must treat that as a no-op (no commit, no scroll).
    pub fn resolve_forward_target(
        &self,
        frame_width: u32,
        translate_offset: u64,
        direction: LayoutDirection,
    ) -> Option<usize> {
        let boundary = translate_offset.saturating_add(frame_width as u64);
        if self.total_width() <= boundary {
            // Nothing left to reveal; with a clamped offset the equality edge
            // below would otherwise re-select the last tab forever.
            return None;
        }

        for index in 0..self.len() {
            let coordinate = self.leading_coordinate(index, direction)?;
            if coordinate.saturating_add(self.width(index)? as u64) >= boundary {
                ttrace!(target_index = index, "resolve_forward_target");
                return Some(index);
            }
        }

        None
    }

    /// The (clamped) translate offset realized by committing a scroll target:
    /// the target tab's directional leading coordinate.
    pub fn scroll_target_offset(
        &self,
        index: usize,
        frame_width: u32,
        direction: LayoutDirection,
    ) -> Option<u64> {
        let coordinate = self.leading_coordinate(index, direction)?;
        Some(self.clamp_translate_offset(frame_width, coordinate))
    }

    /// Runs both focus overflow checks for the tab at `index`.
    pub fn resolve_focus_correction(
        &self,
        frame_width: u32,
        translate_offset: u64,
        direction: LayoutDirection,
        index: usize,
    ) -> Option<FocusCorrection> {
        let leading = self.leading_coordinate(index, direction)?;
        let width = self.width(index)?;
        Some(focus_correction(
            frame_width,
            translate_offset,
            leading,
            width,
        ))
    }

    /// Derived indicator state; part of the core contract so it stays
    /// consistent with the scroll algorithms' notion of "fully scrolled".
    pub fn indicator_states(&self, frame_width: u32, translate_offset: u64) -> IndicatorStates {
        IndicatorStates {
            back_enabled: translate_offset != 0,
            forward_enabled: translate_offset.saturating_add(frame_width as u64)
                <= self.total_width(),
        }
    }

    /// Relayout pass after a resize or initial attach.
    ///
    /// Overflowing strips keep the (clamped) offset and become scrollable;
    /// otherwise the offset resets to 0 and the host applies a zero shift.
    pub fn relayout(&self, frame_width: u32, translate_offset: u64) -> LayoutOutcome {
        let scrollable = self.is_overflowing(frame_width);
        let translate_offset = if scrollable {
            let clamped = self.clamp_translate_offset(frame_width, translate_offset);
            if clamped != translate_offset {
                twarn!(translate_offset, clamped, "relayout found a stranded offset");
            }
            clamped
        } else {
            0
        };
        tdebug!(scrollable, translate_offset, "relayout");
        LayoutOutcome {
            scrollable,
            translate_offset,
            indicators: self.indicator_states(frame_width, translate_offset),
        }
    }
}

/// Focus overflow checks over plain measurements.
///
/// `leading` must already be the directional coordinate (raw for LTR,
/// RTL-normalized otherwise). Both checks are computed unconditionally.
pub fn focus_correction(
    frame_width: u32,
    translate_offset: u64,
    leading: u64,
    width: u32,
) -> FocusCorrection {
    let trailing = leading.saturating_add(width as u64);
    let view_trailing = translate_offset.saturating_add(frame_width as u64);
    FocusCorrection {
        scroll_forward: trailing > view_trailing,
        scroll_back: leading < translate_offset,
    }
}
