use alloc::boxed::Box;
use core::fmt;
use core::time::Duration;

use crate::{
    Indicator, IndicatorKind, Rect, RefreshDelegate, RefreshOptions, RefreshState, RefreshStyle,
    Renderer, Rgba, ScrollHost,
};

/// Content offset past which a drag arms the refresh and a release triggers it.
///
/// Both the arming and the relaxing comparison use this exact value.
pub const TRIGGER_OFFSET: f32 = -65.0;
/// Top inset reserved for the indicator while loading.
pub const LOADING_INSET: f32 = 60.0;
/// Pull distance that maps to a fully progressed pulling animation.
pub const SCRUB_DISTANCE: f32 = 60.0;
/// Duration of the inset animation when a refresh starts.
pub const SHOW_INSET_DURATION: Duration = Duration::from_millis(200);
/// Duration of the inset animation when a refresh finishes.
pub const HIDE_INSET_DURATION: Duration = Duration::from_millis(300);

/// Maps a pull distance onto the pulling animation's progress, clamped to `[0, 1]`.
pub fn scrub_fraction(pull_distance: f32) -> f32 {
    (pull_distance / SCRUB_DISTANCE).clamp(0.0, 1.0)
}

/// Top inset to keep while loading for a given content offset.
///
/// The inset follows the list as it is scrolled back up, but never exceeds [`LOADING_INSET`].
pub fn loading_inset(offset_y: f32) -> f32 {
    (-offset_y).max(0.0).min(LOADING_INSET)
}

/// A headless pull-to-refresh controller.
///
/// This type owns the control's state and its renderer, but not the scroll container: adapters
/// forward the container's scroll events (`on_scroll` / `on_drag_ended`) together with a
/// [`ScrollHost`] handle so the controller can adjust the top inset.
///
/// Lifecycle transitions are explicit: the owning screen calls `on_app_foreground` and
/// `on_app_background` from its own lifecycle handling.
pub struct PullRefresh {
    options: RefreshOptions,
    state: RefreshState,
    header: Rect,
    pulling: Option<Indicator>,
    loading_attached: bool,
    scrub: f32,
    renderer: Box<dyn Renderer>,
    delegate: Option<Box<dyn RefreshDelegate>>,
}

impl PullRefresh {
    /// Attaches a refresh header above a container occupying `container_frame`.
    ///
    /// The pulling indicator is attached immediately in scrubbed playback. If the style has no
    /// tables, no visual is attached and the controller runs without one.
    pub fn attach(
        options: RefreshOptions,
        container_frame: Rect,
        renderer: impl Renderer + 'static,
    ) -> Self {
        let header = container_frame.above();
        let pulling = options
            .style
            .indicator(IndicatorKind::Pulling, header, options.icon_color);
        if pulling.is_none() {
            rwarn!(
                style = %options.style,
                "PullRefresh::attach: unsupported style, no indicator will be shown"
            );
        }
        rdebug!(
            style = %options.style,
            width = header.width,
            height = header.height,
            "PullRefresh::attach"
        );

        let mut refresh = Self {
            options,
            state: RefreshState::Idle,
            header,
            pulling,
            loading_attached: false,
            scrub: 0.0,
            renderer: Box::new(renderer),
            delegate: None,
        };
        if let Some(indicator) = &refresh.pulling {
            refresh.renderer.attach(indicator);
            refresh.renderer.set_scrub(0.0);
        }
        refresh
    }

    pub fn options(&self) -> &RefreshOptions {
        &self.options
    }

    pub fn state(&self) -> RefreshState {
        self.state
    }

    pub fn style(&self) -> &RefreshStyle {
        &self.options.style
    }

    pub fn icon_color(&self) -> Rgba {
        self.options.icon_color
    }

    pub fn background_color(&self) -> Rgba {
        self.options.background_color
    }

    /// Frame of the header view, in the container's parent coordinates.
    pub fn header_frame(&self) -> Rect {
        self.header
    }

    /// The last scrub fraction sent to the renderer.
    pub fn scrub(&self) -> f32 {
        self.scrub
    }

    pub fn pulling_indicator(&self) -> Option<&Indicator> {
        self.pulling.as_ref()
    }

    pub fn is_loading_indicator_attached(&self) -> bool {
        self.loading_attached
    }

    pub fn renderer(&self) -> &dyn Renderer {
        self.renderer.as_ref()
    }

    pub fn renderer_mut(&mut self) -> &mut dyn Renderer {
        self.renderer.as_mut()
    }

    pub fn set_delegate(&mut self, delegate: impl RefreshDelegate + 'static) {
        self.delegate = Some(Box::new(delegate));
    }

    pub fn take_delegate(&mut self) -> Option<Box<dyn RefreshDelegate>> {
        self.delegate.take()
    }

    pub fn has_delegate(&self) -> bool {
        self.delegate.is_some()
    }

    /// Call this whenever the container's content offset changes.
    ///
    /// `offset_y` is the vertical content offset (negative when pulled past the top) and
    /// `is_dragging` whether the user's finger is currently on the container.
    pub fn on_scroll(
        &mut self,
        host: &mut (impl ScrollHost + ?Sized),
        offset_y: f32,
        is_dragging: bool,
    ) {
        if self.state == RefreshState::Loading {
            host.set_content_inset_top(loading_inset(offset_y));
            return;
        }
        if !is_dragging {
            return;
        }

        self.set_scrub(scrub_fraction(-offset_y));

        let loading = self.is_data_source_loading();
        if self.state == RefreshState::Pulling
            && offset_y > TRIGGER_OFFSET
            && offset_y < 0.0
            && !loading
        {
            self.set_state(RefreshState::Idle);
        } else if self.state == RefreshState::Idle && offset_y < TRIGGER_OFFSET && !loading {
            self.set_state(RefreshState::Pulling);
        }

        if host.content_inset_top() != 0.0 {
            host.set_content_inset_top(0.0);
        }
    }

    /// Call this when the user lifts their finger off the container.
    ///
    /// Starts a refresh if the release happened past the trigger offset and nothing is loading.
    pub fn on_drag_ended(&mut self, host: &mut (impl ScrollHost + ?Sized), offset_y: f32) {
        let loading = self.is_data_source_loading();
        if offset_y > TRIGGER_OFFSET || loading || self.state == RefreshState::Loading {
            return;
        }

        self.notify_refresh_requested();
        self.set_state(RefreshState::Loading);

        host.animate_content_inset_top(LOADING_INSET, SHOW_INSET_DURATION);
        self.set_scrub(1.0);

        let indicator = self.options.style.indicator(
            IndicatorKind::Loading,
            self.header,
            self.options.icon_color,
        );
        match indicator {
            Some(indicator) => {
                self.renderer.attach(&indicator);
                self.loading_attached = true;
            }
            None => {
                rwarn!(
                    style = %self.options.style,
                    "PullRefresh::on_drag_ended: unsupported style, no loading indicator"
                );
            }
        }
    }

    /// Call this once the data source has finished loading.
    ///
    /// Safe to call in any state; when already idle only the zero inset is re-applied.
    pub fn refresh_finished(&mut self, host: &mut (impl ScrollHost + ?Sized)) {
        host.animate_content_inset_top(0.0, HIDE_INSET_DURATION);
        self.detach_loading();
        self.set_state(RefreshState::Idle);
    }

    /// Restarts the pulling animation after the app returns to the foreground.
    ///
    /// Installed animations are not guaranteed to survive backgrounding on every platform.
    pub fn on_app_foreground(&mut self) {
        self.scrub = 0.0;
        let Some(indicator) = &self.pulling else {
            return;
        };
        self.renderer.set_scrub(0.0);
        self.renderer.play(IndicatorKind::Pulling, &indicator.animation);
        rdebug!("PullRefresh::on_app_foreground");
    }

    /// Stops every indicator animation and drops the loading indicator while not visible.
    pub fn on_app_background(&mut self) {
        self.renderer.stop_all();
        self.detach_loading();
        rdebug!("PullRefresh::on_app_background");
    }

    /// Removes every visual and ends the controller. Call this when the container is torn down.
    ///
    /// Any inset animation already handed to the host is left to the host to discard.
    pub fn teardown(mut self) {
        self.renderer.stop_all();
        self.detach_loading();
        if self.pulling.take().is_some() {
            self.renderer.detach(IndicatorKind::Pulling);
        }
        rdebug!(state = ?self.state, "PullRefresh::teardown");
    }

    fn set_state(&mut self, state: RefreshState) {
        if self.state != state {
            rdebug!(from = ?self.state, to = ?state, "PullRefresh::set_state");
        }
        self.state = state;
    }

    fn set_scrub(&mut self, fraction: f32) {
        self.scrub = fraction;
        if self.pulling.is_some() {
            rtrace!(fraction, "PullRefresh::set_scrub");
            self.renderer.set_scrub(fraction);
        }
    }

    fn detach_loading(&mut self) {
        if self.loading_attached {
            self.loading_attached = false;
            self.renderer.detach(IndicatorKind::Loading);
        }
    }

    fn is_data_source_loading(&self) -> bool {
        self.delegate
            .as_deref()
            .is_some_and(|d| d.is_data_source_loading(self))
    }

    fn notify_refresh_requested(&mut self) {
        let Some(mut delegate) = self.delegate.take() else {
            return;
        };
        delegate.on_refresh_requested(self);
        // The callback only sees `&PullRefresh`, so it cannot have installed a replacement.
        self.delegate = Some(delegate);
    }
}

impl fmt::Debug for PullRefresh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PullRefresh")
            .field("options", &self.options)
            .field("state", &self.state)
            .field("header", &self.header)
            .field("loading_attached", &self.loading_attached)
            .field("scrub", &self.scrub)
            .field("has_delegate", &self.delegate.is_some())
            .finish_non_exhaustive()
    }
}
