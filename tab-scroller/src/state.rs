/// A lightweight snapshot of the scroll state a host owns between operations.
///
/// The targeting algorithms are pure; this struct is the explicit state they
/// read from and produce into, so hosts can persist or replay it without any
/// UI objects. With `feature = "serde"`, it implements
/// `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollerState {
    /// Horizontal displacement applied to the strip, in `[0, total - frame]`.
    pub translate_offset: u64,
    /// The tab the next shift aligns its leading edge to. Computed fresh on
    /// every scroll request, never persisted past the operation that set it.
    pub scroll_target: Option<usize>,
    /// The tab that most recently received focus; overwritten by the next
    /// focus event, never explicitly cleared.
    pub focused_target: Option<usize>,
}
