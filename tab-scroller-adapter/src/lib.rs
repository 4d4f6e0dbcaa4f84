//! Adapter boundary for the `tab-scroller` crate.
//!
//! The `tab-scroller` crate is UI-agnostic and focuses on the targeting math.
//! This crate provides the pieces a hosting component plugs into:
//!
//! - [`TabScrollerAdapter`]: the capability set a host implements against its
//!   real geometry (measurements in, scroll commits out)
//! - [`TabScrollerFoundation`]: the init/destroy lifecycle and the event entry
//!   points that wire indicator clicks, focus, and resize to scroll actions
//! - [`PendingShift`]: a single-slot coalesced deferred-shift task
//! - [`SimulatedHost`]: an in-memory reference adapter for tests and demos
//!
//! This crate is intentionally framework-agnostic (no DOM/TUI bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod adapter;
mod foundation;
mod host;
mod shift;

#[cfg(test)]
mod tests;

pub use adapter::{HandlerKind, TabScrollerAdapter};
pub use foundation::{FocusEvent, Lifecycle, LifecycleError, TabScrollerFoundation};
pub use host::SimulatedHost;
pub use shift::PendingShift;
