use tab_scroller::{IndicatorStates, LayoutDirection, ScrollerState, TabStrip};

use crate::{HandlerKind, PendingShift, TabScrollerAdapter};

/// An in-memory reference host.
///
/// Implements the full [`TabScrollerAdapter`] contract against value geometry
/// instead of real elements: useful for driving a
/// [`crate::TabScrollerFoundation`] in tests, simulations, and as a template
/// for real bindings. The host owns the scroll state, commits offsets
/// synchronously in [`TabScrollerAdapter::perform_scroll`], and applies the
/// visual shift on an explicit [`SimulatedHost::run_frame`] tick, mirroring a
/// UI runtime's read-then-deferred-write discipline.
///
/// Construction leaves an initial relayout pending, as a real component would
/// schedule one on attach.
#[derive(Clone, Debug)]
pub struct SimulatedHost {
    strip: TabStrip,
    frame_width: u32,
    direction: LayoutDirection,
    state: ScrollerState,
    scrollable: bool,
    indicators: IndicatorStates,
    pending_shift: PendingShift,
    relayout_requested: bool,
    last_applied_shift: Option<i64>,
    register_counts: [u32; 4],
    deregister_counts: [u32; 4],
}

impl SimulatedHost {
    pub fn new(strip: TabStrip, frame_width: u32, direction: LayoutDirection) -> Self {
        Self {
            strip,
            frame_width,
            direction,
            state: ScrollerState::default(),
            scrollable: false,
            indicators: IndicatorStates::default(),
            pending_shift: PendingShift::new(),
            relayout_requested: true,
            last_applied_shift: None,
            register_counts: [0; 4],
            deregister_counts: [0; 4],
        }
    }

    pub fn state(&self) -> ScrollerState {
        self.state
    }

    pub fn strip(&self) -> &TabStrip {
        &self.strip
    }

    pub fn indicators(&self) -> IndicatorStates {
        self.indicators
    }

    pub fn is_scrollable(&self) -> bool {
        self.scrollable
    }

    /// The shift most recently written by a frame tick: negative offsets
    /// under LTR, positive under RTL, matching a translateX-style transform.
    pub fn last_applied_shift(&self) -> Option<i64> {
        self.last_applied_shift
    }

    pub fn register_count(&self, kind: HandlerKind) -> u32 {
        self.register_counts[kind as usize]
    }

    pub fn deregister_count(&self, kind: HandlerKind) -> u32 {
        self.deregister_counts[kind as usize]
    }

    /// Net registered handlers across all kinds. Per-kind deregistrations in
    /// excess of registrations count as zero, not negative.
    pub fn residual_handlers(&self) -> u32 {
        HandlerKind::ALL
            .iter()
            .map(|&k| self.register_count(k).saturating_sub(self.deregister_count(k)))
            .sum()
    }

    /// Simulates a viewport resize; callers pair this with a relayout
    /// trigger, as a resize handler would.
    pub fn set_frame_width(&mut self, frame_width: u32) {
        self.frame_width = frame_width;
    }

    /// Replaces the measured strip, e.g. after tabs are added or restyled.
    pub fn set_strip(&mut self, strip: TabStrip) {
        self.strip = strip;
    }

    pub fn set_direction(&mut self, direction: LayoutDirection) {
        self.direction = direction;
    }

    /// Runs one animation-frame tick: performs a requested relayout, then
    /// applies at most one deferred shift. Returns the shift written this
    /// frame, if any.
    pub fn run_frame(&mut self) -> Option<i64> {
        let mut applied = None;
        if core::mem::take(&mut self.relayout_requested) {
            applied = self.relayout_now();
        }
        if self.pending_shift.take() {
            applied = Some(self.apply_shift());
        }
        applied
    }

    fn relayout_now(&mut self) -> Option<i64> {
        let outcome = self
            .strip
            .relayout(self.frame_width, self.state.translate_offset);
        let changed = outcome.translate_offset != self.state.translate_offset;
        self.scrollable = outcome.scrollable;
        self.state.translate_offset = outcome.translate_offset;
        self.indicators = outcome.indicators;

        if changed || !outcome.scrollable {
            // Non-overflowing strips get the zero shift applied immediately.
            Some(self.apply_shift())
        } else {
            None
        }
    }

    fn apply_shift(&mut self) -> i64 {
        let offset = self.state.translate_offset as i64;
        let shift = if self.direction.is_rtl() {
            offset
        } else {
            -offset
        };
        self.last_applied_shift = Some(shift);
        self.indicators = self
            .strip
            .indicator_states(self.frame_width, self.state.translate_offset);
        shift
    }
}

impl TabScrollerAdapter for SimulatedHost {
    fn is_rtl(&self) -> bool {
        self.direction.is_rtl()
    }

    fn register_handler(&mut self, kind: HandlerKind) {
        self.register_counts[kind as usize] += 1;
    }

    fn deregister_handler(&mut self, kind: HandlerKind) {
        self.deregister_counts[kind as usize] += 1;
    }

    fn trigger_relayout(&mut self) {
        self.relayout_requested = true;
    }

    fn tab_count(&self) -> usize {
        self.strip.len()
    }

    fn tab_width(&self, index: usize) -> u32 {
        self.strip.width(index).unwrap_or(0)
    }

    fn leading_offset(&self, index: usize) -> u64 {
        self.strip.leading_offset(index).unwrap_or(0)
    }

    fn strip_width(&self) -> u64 {
        self.strip.total_width()
    }

    fn frame_width(&self) -> u32 {
        self.frame_width
    }

    fn current_translate_offset(&self) -> u64 {
        self.state.translate_offset
    }

    fn set_scroll_target(&mut self, index: usize) {
        self.state.scroll_target = Some(index);
    }

    fn perform_scroll(&mut self) {
        let Some(target) = self.state.scroll_target else {
            return;
        };
        let Some(offset) = self
            .strip
            .scroll_target_offset(target, self.frame_width, self.direction)
        else {
            return;
        };
        // Offset updates synchronously; the style write waits for the frame.
        self.state.translate_offset = offset;
        self.pending_shift.schedule();
    }

    fn set_focused_target(&mut self, index: usize) {
        self.state.focused_target = Some(index);
    }

    fn focused_target(&self) -> Option<usize> {
        self.state.focused_target
    }
}
