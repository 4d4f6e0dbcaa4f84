//! A headless scroll-target resolution engine for overflowing tab bars.
//!
//! For the adapter boundary (capability trait, foundation lifecycle, deferred
//! shift coalescing), see the `tab-scroller-adapter` crate.
//!
//! This crate focuses on the core decisions a horizontally scrolling tab bar
//! has to make: given the current translate offset, the tabs' widths and
//! positions, and the visible frame width, which tab should the strip scroll
//! to, and what do the back/forward indicators look like afterward. It also
//! handles RTL coordinate normalization and focus-driven correction so a
//! keyboard-focused tab becomes visible.
//!
//! It is UI-agnostic. A hosting component is expected to provide:
//! - per-tab width and leading offset measurements
//! - the visible frame width and layout direction
//! - the actual style/transform writes (deferred to its own frame scheduling)
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod state;
mod strip;
mod targeting;
mod types;


pub use state::ScrollerState;
pub use strip::TabStrip;
pub use targeting::focus_correction;
pub use types::{FocusCorrection, IndicatorStates, LayoutDirection, LayoutOutcome, Tab};
