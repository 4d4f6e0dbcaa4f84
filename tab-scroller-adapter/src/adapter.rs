/// The four interaction hooks a foundation wires during its lifecycle.
///
/// Registration is kind-parameterized rather than one method pair per hook;
/// hosts still see exactly one register and one deregister call per kind
/// across an init/destroy cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandlerKind {
    /// Click/activate on the back indicator control.
    BackIndicator = 0,
    /// Click/activate on the forward indicator control.
    ForwardIndicator = 1,
    /// Focus events bubbling up from tab elements.
    Focus = 2,
    /// Window (or container) resize.
    Resize = 3,
}

impl HandlerKind {
    pub const ALL: [HandlerKind; 4] = [
        HandlerKind::BackIndicator,
        HandlerKind::ForwardIndicator,
        HandlerKind::Focus,
        HandlerKind::Resize,
    ];
}

/// The capability set a hosting component provides to the foundation.
///
/// The foundation never touches UI objects: it reads geometry as plain values
/// through this trait and commits scroll decisions back through it. The host
/// owns element references, implements the measurements against real
/// geometry, and performs the actual style writes (deferred to its own frame
/// scheduling; see [`crate::PendingShift`]).
///
/// Completeness is checked at construction by the compiler: a partial
/// implementation does not typecheck, so there are no silent no-op defaults
/// to validate at call time.
///
/// All tab offsets are reported in natural (LTR) left-offset terms; the
/// `normalized_*` accessors expose the RTL view of the same geometry and are
/// provided in terms of the raw measurements.
pub trait TabScrollerAdapter {
    /// Current layout direction of the hosting component.
    fn is_rtl(&self) -> bool;

    /// Attaches the host-side listener that routes `kind` events to the
    /// foundation's entry points.
    fn register_handler(&mut self, kind: HandlerKind);

    /// Detaches the listener attached by [`Self::register_handler`].
    fn deregister_handler(&mut self, kind: HandlerKind);

    /// Schedules a relayout (re-measure frame and strip, recompute
    /// scrollability and indicator state) on the host's next frame.
    fn trigger_relayout(&mut self);

    /// Number of tabs currently laid out. Fixed for the duration of a layout
    /// pass; re-measured on relayout.
    fn tab_count(&self) -> usize;

    fn tab_width(&self, index: usize) -> u32;

    /// Raw leading offset of the tab relative to the strip's start.
    fn leading_offset(&self, index: usize) -> u64;

    /// Total width of the tab strip (the scrollable content).
    fn strip_width(&self) -> u64;

    /// Width of the visible scroll frame.
    fn frame_width(&self) -> u32;

    /// RTL-normalized leading offset: distance from the strip's right edge.
    fn normalized_leading_offset(&self, index: usize) -> u64 {
        self.strip_width()
            .saturating_sub(self.leading_offset(index).saturating_add(self.tab_width(index) as u64))
    }

    /// The translate offset currently applied to the strip.
    fn current_translate_offset(&self) -> u64;

    /// Commits the tab the next scroll aligns its leading edge to.
    fn set_scroll_target(&mut self, index: usize);

    /// Realizes the committed scroll target: updates the translate offset
    /// synchronously and defers the visual shift to the host's next frame.
    fn perform_scroll(&mut self);

    /// Records the tab that most recently received focus.
    fn set_focused_target(&mut self, index: usize);

    fn focused_target(&self) -> Option<usize>;

    fn focused_width(&self) -> Option<u32> {
        self.focused_target().map(|i| self.tab_width(i))
    }

    fn focused_leading_offset(&self) -> Option<u64> {
        self.focused_target().map(|i| self.leading_offset(i))
    }

    fn normalized_focused_leading_offset(&self) -> Option<u64> {
        self.focused_target()
            .map(|i| self.normalized_leading_offset(i))
    }
}
