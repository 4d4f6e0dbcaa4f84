/// Layout flow of the hosting UI.
///
/// Tab geometry is always measured in natural (LTR) left-offset terms; under
/// [`LayoutDirection::Rtl`] every leading-edge coordinate is normalized to a
/// distance from the strip's visual leading edge (the right edge).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutDirection {
    #[default]
    Ltr,
    Rtl,
}

impl LayoutDirection {
    pub fn is_rtl(self) -> bool {
        matches!(self, Self::Rtl)
    }
}

/// A single tab's measured geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tab {
    pub index: usize,
    /// Raw leading offset relative to the strip's start (LTR terms).
    pub leading: u64,
    /// Width in the scroll axis.
    pub width: u32,
}

impl Tab {
    pub fn trailing_edge(&self) -> u64 {
        self.leading.saturating_add(self.width as u64)
    }
}

/// Derived enabled/disabled state for the back/forward indicator controls.
///
/// Recomputed after every layout or scroll: the back indicator is disabled at
/// the offset floor, the forward indicator once no trailing content remains.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndicatorStates {
    pub back_enabled: bool,
    pub forward_enabled: bool,
}

/// Outcome of a focus check: which scroll actions would bring the focused tab
/// fully into view.
///
/// Both checks are computed unconditionally; they test opposite overflow
/// directions, so at most one fires for a properly sized frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FocusCorrection {
    /// The focused tab's trailing edge lies past the view's trailing boundary.
    pub scroll_forward: bool,
    /// The focused tab's leading edge lies before the current translate offset.
    pub scroll_back: bool,
}

impl FocusCorrection {
    pub fn is_noop(&self) -> bool {
        !self.scroll_forward && !self.scroll_back
    }
}

/// Result of a relayout pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutOutcome {
    /// Whether the strip overflows the frame (indicators visible).
    pub scrollable: bool,
    /// The translate offset to apply: reset to 0 when not scrollable,
    /// clamped to the valid range otherwise.
    pub translate_offset: u64,
    pub indicators: IndicatorStates,
}
