use tab_scroller::{LayoutDirection, TabStrip, focus_correction};

use crate::{HandlerKind, TabScrollerAdapter};

/// Lifecycle of a foundation: destroyed is terminal, re-initialization after
/// destroy is not supported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Lifecycle {
    #[default]
    Uninitialized,
    Active,
    Destroyed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LifecycleError {
    #[error("foundation is already initialized")]
    AlreadyInitialized,
    #[error("foundation is not active")]
    NotActive,
    #[error("foundation has been destroyed")]
    Destroyed,
}

/// A focus event bubbled up from the tab bar.
///
/// `tab_index` is `None` when the event target is not a tab element (lacks
/// the tab marker); such events are ignored outright.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FocusEvent {
    pub tab_index: Option<usize>,
}

impl FocusEvent {
    pub fn tab(index: usize) -> Self {
        Self {
            tab_index: Some(index),
        }
    }

    pub fn non_tab() -> Self {
        Self { tab_index: None }
    }
}

/// The decision core of a scrollable tab bar.
///
/// Stateless between calls apart from the lifecycle: every scroll request
/// snapshots geometry from the adapter, resolves a target through the
/// `tab-scroller` algorithms, and commits it back through the adapter.
///
/// Hosts route their UI events here: indicator clicks to
/// [`Self::scroll_back`]/[`Self::scroll_forward`], bubbled focus to
/// [`Self::handle_focus`], and window resize to [`Self::handle_resize`].
/// Calling a scroll entry point outside the active state is a silent no-op;
/// only `init`/`destroy` report misuse.
#[derive(Clone, Debug)]
pub struct TabScrollerFoundation<A> {
    adapter: A,
    lifecycle: Lifecycle,
}

impl<A: TabScrollerAdapter> TabScrollerFoundation<A> {
    pub fn new(adapter: A) -> Self {
        Self {
            adapter,
            lifecycle: Lifecycle::Uninitialized,
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    pub fn into_adapter(self) -> A {
        self.adapter
    }

    pub fn is_rtl(&self) -> bool {
        self.adapter.is_rtl()
    }

    /// Registers one handler per [`HandlerKind`] and activates the
    /// foundation.
    pub fn init(&mut self) -> Result<(), LifecycleError> {
        match self.lifecycle {
            Lifecycle::Active => Err(LifecycleError::AlreadyInitialized),
            Lifecycle::Destroyed => Err(LifecycleError::Destroyed),
            Lifecycle::Uninitialized => {
                for kind in HandlerKind::ALL {
                    self.adapter.register_handler(kind);
                }
                self.lifecycle = Lifecycle::Active;
                tdebug!("foundation initialized");
                Ok(())
            }
        }
    }

    /// Deregisters exactly the handlers `init` registered, one per kind, and
    /// permanently deactivates the foundation.
    pub fn destroy(&mut self) -> Result<(), LifecycleError> {
        match self.lifecycle {
            Lifecycle::Uninitialized => Err(LifecycleError::NotActive),
            Lifecycle::Destroyed => Err(LifecycleError::Destroyed),
            Lifecycle::Active => {
                for kind in HandlerKind::ALL {
                    self.adapter.deregister_handler(kind);
                }
                self.lifecycle = Lifecycle::Destroyed;
                tdebug!("foundation destroyed");
                Ok(())
            }
        }
    }

    fn is_active(&self) -> bool {
        self.lifecycle == Lifecycle::Active
    }

    fn direction(&self) -> LayoutDirection {
        if self.adapter.is_rtl() {
            LayoutDirection::Rtl
        } else {
            LayoutDirection::Ltr
        }
    }

    fn snapshot_strip(&self) -> TabStrip {
        let count = self.adapter.tab_count();
        TabStrip::from_tabs(
            (0..count).map(|i| (self.adapter.leading_offset(i), self.adapter.tab_width(i))),
        )
        .with_total_width(self.adapter.strip_width())
    }

    /// Scrolls backward by roughly one frame-width of tabs.
    pub fn scroll_back(&mut self) {
        if !self.is_active() {
            twarn!("scroll_back ignored: foundation not active");
            return;
        }

        let strip = self.snapshot_strip();
        let Some(target) = strip.resolve_back_target(
            self.adapter.frame_width(),
            self.adapter.current_translate_offset(),
            self.direction(),
        ) else {
            return;
        };

        ttrace!(index = target, "scroll_back");
        self.adapter.set_scroll_target(target);
        self.adapter.perform_scroll();
    }

    /// Scrolls forward by one frame-width, revealing trailing content. No-op
    /// when the view already shows the last tab fully.
    pub fn scroll_forward(&mut self) {
        if !self.is_active() {
            twarn!("scroll_forward ignored: foundation not active");
            return;
        }

        let strip = self.snapshot_strip();
        let Some(target) = strip.resolve_forward_target(
            self.adapter.frame_width(),
            self.adapter.current_translate_offset(),
            self.direction(),
        ) else {
            return;
        };

        ttrace!(index = target, "scroll_forward");
        self.adapter.set_scroll_target(target);
        self.adapter.perform_scroll();
    }

    /// Focus-triggered correction: records the focused tab, then scrolls so
    /// the tab becomes visible when either of its edges lies outside the
    /// view. Non-tab events are ignored.
    pub fn handle_focus(&mut self, event: FocusEvent) {
        if !self.is_active() {
            return;
        }
        let Some(index) = event.tab_index else {
            return;
        };

        self.adapter.set_focused_target(index);

        let (Some(raw_leading), Some(width)) = (
            self.adapter.focused_leading_offset(),
            self.adapter.focused_width(),
        ) else {
            return;
        };
        let leading = if self.adapter.is_rtl() {
            match self.adapter.normalized_focused_leading_offset() {
                Some(leading) => leading,
                None => return,
            }
        } else {
            raw_leading
        };

        let correction = focus_correction(
            self.adapter.frame_width(),
            self.adapter.current_translate_offset(),
            leading,
            width,
        );
        ttrace!(index, ?correction, "handle_focus");

        // The checks are mutually exclusive for a properly sized frame, but
        // run both unconditionally rather than assuming that.
        if correction.scroll_forward {
            self.scroll_forward();
        }
        if correction.scroll_back {
            self.scroll_back();
        }
    }

    /// Resize entry point: defers to the host's relayout scheduling.
    pub fn handle_resize(&mut self) {
        if !self.is_active() {
            return;
        }
        self.adapter.trigger_relayout();
    }
}
