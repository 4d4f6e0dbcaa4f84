/// A single-slot coalesced pending visual commit.
///
/// Scroll requests update the translate offset synchronously but defer the
/// actual style write to the host's next animation frame. Scheduling while a
/// commit is already pending does not create a second task; the frame
/// callback reads the then-current offset, so the last write before the frame
/// fires wins. The slot is not cancelable: once scheduled, the deferred shift
/// always applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PendingShift {
    pending: bool,
}

impl PendingShift {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules the deferred shift. Returns `false` when one was already
    /// pending (the request coalesces into it).
    pub fn schedule(&mut self) -> bool {
        let fresh = !self.pending;
        self.pending = true;
        fresh
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Consumes the slot at frame time. Returns whether a shift was pending;
    /// the caller applies the current offset exactly once per `true`.
    pub fn take(&mut self) -> bool {
        core::mem::replace(&mut self.pending, false)
    }
}
