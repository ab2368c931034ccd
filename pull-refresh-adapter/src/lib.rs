//! Adapter utilities for the `pull-refresh` crate.
//!
//! The `pull-refresh` crate is UI-agnostic and only decides when to change state and which
//! animation parameters to request. This crate provides small, framework-neutral helpers that an
//! adapter commonly needs to host it:
//!
//! - Inset tweening (`InsetAnimator`) for containers without native animation support
//! - A single-threaded deferred task queue (`TaskQueue`), e.g. to finish a refresh later
//! - A renderer that records the indicator scene (`RecordingRenderer`)
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod inset;
mod queue;
mod recorder;
mod tween;


pub use inset::InsetAnimator;
pub use queue::TaskQueue;
pub use recorder::{RecordingRenderer, RenderCommand};
pub use tween::Tween;
