use alloc::rc::Rc;
use core::cell::RefCell;
use core::time::Duration;

use crate::{AnimationGroup, Indicator, IndicatorKind, PullRefresh};

/// The scrollable container the refresh header is attached to.
///
/// Only the top content inset is touched; scroll offsets and drag state arrive as event
/// arguments.
pub trait ScrollHost {
    fn content_inset_top(&self) -> f32;

    /// Sets the top inset immediately.
    fn set_content_inset_top(&mut self, inset: f32);

    /// Animates the top inset to `inset` over `duration`.
    ///
    /// Hosts without animation support may apply the value immediately.
    fn animate_content_inset_top(&mut self, inset: f32, duration: Duration) {
        let _ = duration;
        self.set_content_inset_top(inset);
    }
}

/// The view-layer collaborator that draws indicator visuals.
///
/// Implementations own whatever native layers or timelines they need; the controller only tells
/// them what to show and how far a scrubbed animation has progressed.
pub trait Renderer {
    /// Adds an indicator visual with its animation installed according to `indicator.playback`.
    fn attach(&mut self, indicator: &Indicator);

    /// Removes an indicator visual. Detaching a visual that is not attached is a no-op.
    fn detach(&mut self, kind: IndicatorKind);

    /// Moves the paused pulling animation to `fraction` (in `[0, 1]`) of its duration.
    fn set_scrub(&mut self, fraction: f32);

    /// (Re)installs `animation` on an attached indicator.
    fn play(&mut self, kind: IndicatorKind, animation: &AnimationGroup);

    /// Removes every installed animation without detaching visuals.
    fn stop_all(&mut self);
}

/// Lets a host keep a handle to the renderer it hands to [`PullRefresh::attach`].
impl<R: Renderer + ?Sized> Renderer for Rc<RefCell<R>> {
    fn attach(&mut self, indicator: &Indicator) {
        self.borrow_mut().attach(indicator);
    }

    fn detach(&mut self, kind: IndicatorKind) {
        self.borrow_mut().detach(kind);
    }

    fn set_scrub(&mut self, fraction: f32) {
        self.borrow_mut().set_scrub(fraction);
    }

    fn play(&mut self, kind: IndicatorKind, animation: &AnimationGroup) {
        self.borrow_mut().play(kind, animation);
    }

    fn stop_all(&mut self) {
        self.borrow_mut().stop_all();
    }
}

/// Receives refresh requests from a [`PullRefresh`].
pub trait RefreshDelegate {
    /// The user released the list past the trigger offset.
    fn on_refresh_requested(&mut self, refresh: &PullRefresh);

    /// Whether the data source is already loading.
    ///
    /// While this returns `true`, pull gestures neither arm nor trigger a refresh. Delegates that
    /// cannot tell leave the default, which reports "not loading".
    fn is_data_source_loading(&self, refresh: &PullRefresh) -> bool {
        let _ = refresh;
        false
    }
}
