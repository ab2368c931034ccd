//! A headless pull-to-refresh controller for scrollable list views.
//!
//! This crate holds the policy of a pull-to-refresh header: a small state machine
//! (idle → pulling → loading) driven by scroll events, the mapping from pull distance to
//! indicator progress, and declarative per-style animation tables.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - scroll offset and drag state of the list ([`PullRefresh::on_scroll`],
//!   [`PullRefresh::on_drag_ended`])
//! - a [`ScrollHost`] that owns the list's top content inset
//! - a [`Renderer`] that draws the indicator visuals
//! - optionally a [`RefreshDelegate`] that performs the actual data reload
//!
//! For inset tweening, deferred tasks and a recording renderer, see the `pull-refresh-adapter`
//! crate.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod color;
mod easing;
mod host;
mod options;
mod refresh;
mod style;
mod types;

#[cfg(test)]
mod tests;

pub use color::{ParseColorError, Rgba};
pub use easing::Easing;
pub use host::{RefreshDelegate, Renderer, ScrollHost};
pub use options::RefreshOptions;
pub use refresh::{
    HIDE_INSET_DURATION, LOADING_INSET, PullRefresh, SCRUB_DISTANCE, SHOW_INSET_DURATION,
    TRIGGER_OFFSET, loading_inset, scrub_fraction,
};
pub use style::{
    AnimatedProperty, AnimationGroup, INDICATOR_BOTTOM_INSET, INDICATOR_SIZE, Indicator,
    IndicatorShape, LineCap, LineJoin, Playback, PropertyAnimation, RefreshStyle, Repeat,
    ShapePath, indicator_position,
};
pub use types::{IndicatorKind, Point, Rect, RefreshState};
