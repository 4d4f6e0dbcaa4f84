use alloc::vec::Vec;

use crate::{LayoutDirection, Tab};

/// Measured geometry for an ordered sequence of tabs.
///
/// Offsets are stored in natural (LTR) left-offset terms, exactly as a host
/// measures them. The strip itself never scrolls; it is a value snapshot that
/// the targeting algorithms interrogate.
///
/// The total width defaults to the last tab's trailing edge. Hosts that
/// measure the tab container directly (which may include trailing padding)
/// can override it with [`TabStrip::with_total_width`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabStrip {
    leadings: Vec<u64>,
    widths: Vec<u32>,
    total_width: u64,
}

impl TabStrip {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a strip of tabs packed edge to edge, leading offsets derived
    /// from the running width sum.
    pub fn from_widths(widths: impl IntoIterator<Item = u32>) -> Self {
        let widths: Vec<u32> = widths.into_iter().collect();
        let mut leadings = Vec::with_capacity(widths.len());
        let mut at = 0u64;
        for &w in &widths {
            leadings.push(at);
            at = at.saturating_add(w as u64);
        }
        Self {
            leadings,
            widths,
            total_width: at,
        }
    }

    /// Builds a strip from `(leading_offset, width)` pairs, as measured by a
    /// host (offsets may include inter-tab margins).
    pub fn from_tabs(tabs: impl IntoIterator<Item = (u64, u32)>) -> Self {
        let mut leadings = Vec::new();
        let mut widths = Vec::new();
        let mut total = 0u64;
        for (leading, width) in tabs {
            total = total.max(leading.saturating_add(width as u64));
            leadings.push(leading);
            widths.push(width);
        }
        Self {
            leadings,
            widths,
            total_width: total,
        }
    }

    /// Overrides the total strip width (never below the measured extent).
    pub fn with_total_width(mut self, total_width: u64) -> Self {
        self.total_width = self.total_width.max(total_width);
        self
    }

    /// Replaces all measurements, e.g. after a resize-triggered relayout.
    pub fn set_widths(&mut self, widths: impl IntoIterator<Item = u32>) {
        *self = Self::from_widths(widths);
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    pub fn total_width(&self) -> u64 {
        self.total_width
    }

    pub fn tab(&self, index: usize) -> Option<Tab> {
        Some(Tab {
            index,
            leading: *self.leadings.get(index)?,
            width: *self.widths.get(index)?,
        })
    }

    pub fn width(&self, index: usize) -> Option<u32> {
        self.widths.get(index).copied()
    }

    /// Raw leading offset: distance from the strip's start.
    pub fn leading_offset(&self, index: usize) -> Option<u64> {
        self.leadings.get(index).copied()
    }

    pub fn trailing_edge(&self, index: usize) -> Option<u64> {
        Some(self.tab(index)?.trailing_edge())
    }

    /// RTL-normalized leading offset: distance from the strip's visual
    /// leading edge under RTL flow, i.e. from the right edge.
    ///
    /// Self-consistent with the raw offset for every tab:
    /// `normalized + width + leading == total_width`.
    pub fn normalized_leading_offset(&self, index: usize) -> Option<u64> {
        let tab = self.tab(index)?;
        Some(self.total_width.saturating_sub(tab.trailing_edge()))
    }

    /// The leading coordinate used by all offset comparisons: raw under LTR,
    /// normalized under RTL.
    pub fn leading_coordinate(&self, index: usize, direction: LayoutDirection) -> Option<u64> {
        if direction.is_rtl() {
            self.normalized_leading_offset(index)
        } else {
            self.leading_offset(index)
        }
    }
}
