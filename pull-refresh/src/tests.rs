use crate::*;

use alloc::rc::Rc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};
use core::time::Duration;

#[derive(Clone, Debug, PartialEq)]
enum Call {
    Attach(IndicatorKind, Playback),
    Detach(IndicatorKind),
    Scrub(f32),
    Play(IndicatorKind),
    StopAll,
}

#[derive(Clone, Default)]
struct SpyRenderer {
    calls: Rc<RefCell<Vec<Call>>>,
}

impl SpyRenderer {
    fn take(&self) -> Vec<Call> {
        core::mem::take(&mut *self.calls.borrow_mut())
    }
}

impl Renderer for SpyRenderer {
    fn attach(&mut self, indicator: &Indicator) {
        self.calls
            .borrow_mut()
            .push(Call::Attach(indicator.kind, indicator.playback));
    }

    fn detach(&mut self, kind: IndicatorKind) {
        self.calls.borrow_mut().push(Call::Detach(kind));
    }

    fn set_scrub(&mut self, fraction: f32) {
        self.calls.borrow_mut().push(Call::Scrub(fraction));
    }

    fn play(&mut self, kind: IndicatorKind, _animation: &AnimationGroup) {
        self.calls.borrow_mut().push(Call::Play(kind));
    }

    fn stop_all(&mut self) {
        self.calls.borrow_mut().push(Call::StopAll);
    }
}

#[derive(Debug, Default)]
struct Host {
    inset: f32,
    animated: Vec<(f32, Duration)>,
}

impl ScrollHost for Host {
    fn content_inset_top(&self) -> f32 {
        self.inset
    }

    fn set_content_inset_top(&mut self, inset: f32) {
        self.inset = inset;
    }

    fn animate_content_inset_top(&mut self, inset: f32, duration: Duration) {
        self.inset = inset;
        self.animated.push((inset, duration));
    }
}

#[derive(Clone, Default)]
struct Screen {
    refreshes: Rc<Cell<usize>>,
    loading: Rc<Cell<bool>>,
}

impl RefreshDelegate for Screen {
    fn on_refresh_requested(&mut self, refresh: &PullRefresh) {
        assert_ne!(refresh.state(), RefreshState::Loading);
        self.refreshes.set(self.refreshes.get() + 1);
    }

    fn is_data_source_loading(&self, _refresh: &PullRefresh) -> bool {
        self.loading.get()
    }
}

/// A delegate that only implements the mandatory capability.
#[derive(Clone, Default)]
struct Minimal {
    refreshes: Rc<Cell<usize>>,
}

impl RefreshDelegate for Minimal {
    fn on_refresh_requested(&mut self, _refresh: &PullRefresh) {
        self.refreshes.set(self.refreshes.get() + 1);
    }
}

fn frame() -> Rect {
    Rect::new(0.0, 64.0, 320.0, 480.0)
}

fn setup() -> (PullRefresh, SpyRenderer, Screen, Host) {
    let renderer = SpyRenderer::default();
    let screen = Screen::default();
    let mut refresh = PullRefresh::attach(RefreshOptions::default(), frame(), renderer.clone());
    refresh.set_delegate(screen.clone());
    renderer.take();
    (refresh, renderer, screen, Host::default())
}

#[test]
fn attach_places_header_above_container_and_installs_scrubbed_indicator() {
    let renderer = SpyRenderer::default();
    let refresh = PullRefresh::attach(RefreshOptions::default(), frame(), renderer.clone());

    assert_eq!(refresh.state(), RefreshState::Idle);
    assert_eq!(refresh.header_frame(), Rect::new(0.0, -416.0, 320.0, 480.0));
    assert_eq!(
        renderer.take(),
        [
            Call::Attach(IndicatorKind::Pulling, Playback::Scrubbed),
            Call::Scrub(0.0)
        ]
    );

    let indicator = refresh.pulling_indicator().unwrap();
    assert_eq!(indicator.position, Point::new(160.0, 450.0));
    assert_eq!(indicator.shape.stroke, Rgba::WHITE);
}

#[test]
fn scrub_fraction_is_clamped_and_monotonic() {
    assert_eq!(scrub_fraction(0.0), 0.0);
    assert_eq!(scrub_fraction(30.0), 0.5);
    assert_eq!(scrub_fraction(60.0), 1.0);
    assert_eq!(scrub_fraction(240.0), 1.0);
    assert_eq!(scrub_fraction(-20.0), 0.0);

    let mut last = 0.0f32;
    for d in 0..200 {
        let f = scrub_fraction(d as f32 * 0.5);
        assert!(f >= last);
        assert!((0.0..=1.0).contains(&f));
        last = f;
    }
}

#[test]
fn loading_inset_follows_offset_up_to_resting_inset() {
    assert_eq!(loading_inset(10.0), 0.0);
    assert_eq!(loading_inset(0.0), 0.0);
    assert_eq!(loading_inset(-25.0), 25.0);
    assert_eq!(loading_inset(-60.0), 60.0);
    assert_eq!(loading_inset(-200.0), 60.0);
}

#[test]
fn drag_forwards_scrub_to_renderer() {
    let (mut refresh, renderer, _screen, mut host) = setup();

    refresh.on_scroll(&mut host, -30.0, true);
    assert_eq!(refresh.scrub(), 0.5);
    assert_eq!(renderer.take(), [Call::Scrub(0.5)]);

    refresh.on_scroll(&mut host, -90.0, true);
    assert_eq!(renderer.take(), [Call::Scrub(1.0)]);
}

#[test]
fn scroll_without_drag_is_ignored_while_idle() {
    let (mut refresh, renderer, _screen, mut host) = setup();
    host.inset = 12.0;

    refresh.on_scroll(&mut host, -100.0, false);

    assert_eq!(refresh.state(), RefreshState::Idle);
    assert_eq!(host.inset, 12.0);
    assert!(renderer.take().is_empty());
}

#[test]
fn drag_above_trigger_stays_idle() {
    let (mut refresh, _renderer, _screen, mut host) = setup();
    for offset in [-64.9f32, -40.0, -10.0, 0.0, 35.0] {
        refresh.on_scroll(&mut host, offset, true);
        assert_eq!(refresh.state(), RefreshState::Idle, "offset={offset}");
    }
}

#[test]
fn drag_past_trigger_arms_and_relaxing_disarms() {
    let (mut refresh, _renderer, _screen, mut host) = setup();

    refresh.on_scroll(&mut host, -70.0, true);
    assert_eq!(refresh.state(), RefreshState::Pulling);

    // Exactly at the trigger offset neither comparison holds.
    refresh.on_scroll(&mut host, -65.0, true);
    assert_eq!(refresh.state(), RefreshState::Pulling);

    refresh.on_scroll(&mut host, -50.0, true);
    assert_eq!(refresh.state(), RefreshState::Idle);

    refresh.on_scroll(&mut host, -120.0, true);
    assert_eq!(refresh.state(), RefreshState::Pulling);
}

#[test]
fn pulling_is_kept_when_scrolled_past_the_top() {
    let (mut refresh, _renderer, _screen, mut host) = setup();
    refresh.on_scroll(&mut host, -80.0, true);
    refresh.on_scroll(&mut host, 5.0, true);
    assert_eq!(refresh.state(), RefreshState::Pulling);
}

#[test]
fn loading_data_source_blocks_transitions() {
    let (mut refresh, _renderer, screen, mut host) = setup();

    screen.loading.set(true);
    refresh.on_scroll(&mut host, -100.0, true);
    assert_eq!(refresh.state(), RefreshState::Idle);

    screen.loading.set(false);
    refresh.on_scroll(&mut host, -100.0, true);
    assert_eq!(refresh.state(), RefreshState::Pulling);

    screen.loading.set(true);
    refresh.on_scroll(&mut host, -20.0, true);
    assert_eq!(refresh.state(), RefreshState::Pulling);

    refresh.on_drag_ended(&mut host, -100.0);
    assert_eq!(refresh.state(), RefreshState::Pulling);
    assert_eq!(screen.refreshes.get(), 0);
}

#[test]
fn dragging_resets_leftover_inset() {
    let (mut refresh, _renderer, _screen, mut host) = setup();
    host.inset = 40.0;
    refresh.on_scroll(&mut host, -10.0, true);
    assert_eq!(host.inset, 0.0);
    assert!(host.animated.is_empty());
}

#[test]
fn release_past_trigger_starts_loading_once() {
    let (mut refresh, renderer, screen, mut host) = setup();

    refresh.on_scroll(&mut host, -70.0, true);
    assert_eq!(refresh.state(), RefreshState::Pulling);
    renderer.take();

    refresh.on_drag_ended(&mut host, -70.0);
    assert_eq!(refresh.state(), RefreshState::Loading);
    assert_eq!(screen.refreshes.get(), 1);
    assert_eq!(host.animated, [(LOADING_INSET, SHOW_INSET_DURATION)]);
    assert_eq!(refresh.scrub(), 1.0);
    assert!(refresh.is_loading_indicator_attached());
    assert_eq!(
        renderer.take(),
        [
            Call::Scrub(1.0),
            Call::Attach(IndicatorKind::Loading, Playback::Running)
        ]
    );

    // A second release while loading must not request another refresh.
    refresh.on_drag_ended(&mut host, -90.0);
    assert_eq!(screen.refreshes.get(), 1);
    assert_eq!(host.animated.len(), 1);
    assert!(renderer.take().is_empty());
}

#[test]
fn release_exactly_at_trigger_starts_loading() {
    let (mut refresh, _renderer, screen, mut host) = setup();
    refresh.on_drag_ended(&mut host, TRIGGER_OFFSET);
    assert_eq!(refresh.state(), RefreshState::Loading);
    assert_eq!(screen.refreshes.get(), 1);
}

#[test]
fn release_above_trigger_does_nothing() {
    let (mut refresh, renderer, screen, mut host) = setup();
    refresh.on_scroll(&mut host, -64.0, true);
    renderer.take();

    refresh.on_drag_ended(&mut host, -64.0);

    assert_eq!(refresh.state(), RefreshState::Idle);
    assert_eq!(screen.refreshes.get(), 0);
    assert!(host.animated.is_empty());
    assert!(renderer.take().is_empty());
}

#[test]
fn scrolling_while_loading_clamps_inset() {
    let (mut refresh, renderer, _screen, mut host) = setup();
    refresh.on_drag_ended(&mut host, -80.0);
    renderer.take();

    refresh.on_scroll(&mut host, -30.0, false);
    assert_eq!(host.inset, 30.0);
    refresh.on_scroll(&mut host, -90.0, true);
    assert_eq!(host.inset, 60.0);
    refresh.on_scroll(&mut host, 120.0, true);
    assert_eq!(host.inset, 0.0);

    assert_eq!(refresh.state(), RefreshState::Loading);
    assert!(renderer.take().is_empty());
}

#[test]
fn full_refresh_cycle() {
    let (mut refresh, renderer, screen, mut host) = setup();

    refresh.on_scroll(&mut host, -70.0, true);
    assert_eq!(refresh.state(), RefreshState::Pulling);

    refresh.on_drag_ended(&mut host, -70.0);
    assert_eq!(refresh.state(), RefreshState::Loading);
    assert_eq!(host.inset, 60.0);
    renderer.take();

    screen.loading.set(false);
    refresh.refresh_finished(&mut host);
    assert_eq!(refresh.state(), RefreshState::Idle);
    assert_eq!(host.inset, 0.0);
    assert_eq!(host.animated.last(), Some(&(0.0, HIDE_INSET_DURATION)));
    assert!(!refresh.is_loading_indicator_attached());
    assert_eq!(renderer.take(), [Call::Detach(IndicatorKind::Loading)]);
}

#[test]
fn refresh_finished_is_idempotent() {
    let (mut refresh, renderer, _screen, mut host) = setup();
    host.inset = 5.0;

    refresh.refresh_finished(&mut host);
    refresh.refresh_finished(&mut host);

    assert_eq!(refresh.state(), RefreshState::Idle);
    assert_eq!(host.inset, 0.0);
    assert_eq!(host.animated.len(), 2);
    assert!(renderer.take().is_empty());
}

#[test]
fn refresh_finished_from_pulling_returns_to_idle() {
    let (mut refresh, _renderer, _screen, mut host) = setup();
    refresh.on_scroll(&mut host, -100.0, true);
    assert_eq!(refresh.state(), RefreshState::Pulling);

    refresh.refresh_finished(&mut host);
    assert_eq!(refresh.state(), RefreshState::Idle);
}

#[test]
fn missing_delegate_fails_open() {
    let renderer = SpyRenderer::default();
    let mut refresh = PullRefresh::attach(RefreshOptions::default(), frame(), renderer);
    let mut host = Host::default();
    assert!(!refresh.has_delegate());

    refresh.on_scroll(&mut host, -80.0, true);
    assert_eq!(refresh.state(), RefreshState::Pulling);
    refresh.on_drag_ended(&mut host, -80.0);
    assert_eq!(refresh.state(), RefreshState::Loading);
}

#[test]
fn delegate_without_loading_query_is_treated_as_not_loading() {
    let renderer = SpyRenderer::default();
    let minimal = Minimal::default();
    let mut refresh = PullRefresh::attach(RefreshOptions::default(), frame(), renderer);
    refresh.set_delegate(minimal.clone());
    let mut host = Host::default();

    refresh.on_scroll(&mut host, -80.0, true);
    refresh.on_drag_ended(&mut host, -80.0);

    assert_eq!(refresh.state(), RefreshState::Loading);
    assert_eq!(minimal.refreshes.get(), 1);
    assert!(refresh.has_delegate());
}

#[test]
fn take_delegate_detaches_it() {
    let (mut refresh, _renderer, screen, mut host) = setup();
    assert!(refresh.take_delegate().is_some());

    refresh.on_drag_ended(&mut host, -80.0);
    assert_eq!(refresh.state(), RefreshState::Loading);
    assert_eq!(screen.refreshes.get(), 0);
}

#[test]
fn lifecycle_hooks_restart_and_stop_animations() {
    let (mut refresh, renderer, _screen, mut host) = setup();
    refresh.on_drag_ended(&mut host, -80.0);
    renderer.take();

    refresh.on_app_background();
    assert_eq!(
        renderer.take(),
        [Call::StopAll, Call::Detach(IndicatorKind::Loading)]
    );
    assert!(!refresh.is_loading_indicator_attached());

    refresh.on_app_foreground();
    assert_eq!(
        renderer.take(),
        [Call::Scrub(0.0), Call::Play(IndicatorKind::Pulling)]
    );
    assert_eq!(refresh.scrub(), 0.0);

    // The loading indicator is already gone; finishing must not detach it twice.
    refresh.refresh_finished(&mut host);
    assert!(renderer.take().is_empty());
    assert_eq!(refresh.state(), RefreshState::Idle);
}

#[test]
fn teardown_detaches_every_visual() {
    let (mut refresh, renderer, screen, mut host) = setup();
    refresh.on_drag_ended(&mut host, -80.0);
    renderer.take();

    refresh.teardown();
    assert_eq!(
        renderer.take(),
        [
            Call::StopAll,
            Call::Detach(IndicatorKind::Loading),
            Call::Detach(IndicatorKind::Pulling)
        ]
    );

    // The controller, its renderer and its delegate are gone with it.
    assert_eq!(Rc::strong_count(&renderer.calls), 1);
    assert_eq!(Rc::strong_count(&screen.refreshes), 1);
    assert_eq!(screen.refreshes.get(), 1);
}

#[test]
fn teardown_while_idle_detaches_only_the_pulling_indicator() {
    let (refresh, renderer, _screen, _host) = setup();
    refresh.teardown();
    assert_eq!(
        renderer.take(),
        [Call::StopAll, Call::Detach(IndicatorKind::Pulling)]
    );
}

#[test]
fn unsupported_style_runs_without_visuals() {
    let renderer = SpyRenderer::default();
    let options = RefreshOptions::new(RefreshStyle::Named(String::from("ripple")));
    let mut refresh = PullRefresh::attach(options, frame(), renderer.clone());
    let mut host = Host::default();

    assert!(refresh.pulling_indicator().is_none());
    assert!(renderer.take().is_empty());

    refresh.on_scroll(&mut host, -80.0, true);
    assert_eq!(refresh.state(), RefreshState::Pulling);
    assert_eq!(refresh.scrub(), 1.0);

    refresh.on_drag_ended(&mut host, -80.0);
    assert_eq!(refresh.state(), RefreshState::Loading);
    assert!(!refresh.is_loading_indicator_attached());
    assert_eq!(host.animated, [(LOADING_INSET, SHOW_INSET_DURATION)]);

    refresh.on_app_foreground();
    assert_eq!(refresh.scrub(), 0.0);

    refresh.refresh_finished(&mut host);
    assert_eq!(refresh.state(), RefreshState::Idle);
    assert!(renderer.take().is_empty());
}

#[test]
fn circle_wave_tables() {
    let header = Rect::new(0.0, 0.0, 320.0, 480.0);
    let style = RefreshStyle::CircleWave;

    let shape = style.indicator_shape(Rgba::rgb(1, 2, 3)).unwrap();
    assert_eq!(shape.size, INDICATOR_SIZE);
    assert_eq!(shape.line_width, 3.0);
    assert_eq!(shape.fill, Rgba::CLEAR);
    assert_eq!(shape.line_cap, LineCap::Round);
    let ShapePath::Arc {
        radius, clockwise, ..
    } = shape.path;
    assert_eq!(radius, 15.0);
    assert!(clockwise);

    let pulling = style.pulling_animation(header).unwrap();
    assert_eq!(pulling.duration, Duration::from_secs(1));
    assert_eq!(pulling.repeat, Repeat::Once);
    assert_eq!(pulling.value_of(AnimatedProperty::PositionY, 0.0), Some(480.0));
    assert_eq!(pulling.value_of(AnimatedProperty::PositionY, 1.0), Some(450.0));
    assert_eq!(pulling.value_of(AnimatedProperty::Scale, 0.5), Some(0.5));
    assert_eq!(pulling.value_of(AnimatedProperty::StrokeEnd, 1.0), Some(1.0));
    assert_eq!(pulling.value_of(AnimatedProperty::Opacity, 1.0), None);

    let loading = style.loading_animation().unwrap();
    assert_eq!(loading.duration, Duration::from_millis(800));
    assert_eq!(loading.repeat, Repeat::Forever);
    assert_eq!(loading.easing, Easing::EaseInOutCubic);
    assert_eq!(loading.value_of(AnimatedProperty::Scale, 1.0), Some(1.5));
    assert_eq!(loading.value_of(AnimatedProperty::Opacity, 0.0), Some(1.0));
}

#[test]
fn named_style_has_no_tables() {
    let style: RefreshStyle = "ripple".parse().unwrap();
    assert_eq!(style, RefreshStyle::Named(String::from("ripple")));
    assert!(!style.is_supported());
    assert!(style.indicator_shape(Rgba::WHITE).is_none());
    assert!(style.loading_animation().is_none());
    assert!(
        style
            .indicator(IndicatorKind::Pulling, Rect::default(), Rgba::WHITE)
            .is_none()
    );

    let style: RefreshStyle = "circle-wave".parse().unwrap();
    assert_eq!(style, RefreshStyle::CircleWave);
    assert_eq!(style.name(), "circle_wave");
}

#[test]
fn animation_progress_wraps_for_repeating_groups() {
    let loading = RefreshStyle::CircleWave.loading_animation().unwrap();
    assert!((loading.progress_at(Duration::from_millis(400)) - 0.5).abs() < 1e-5);
    assert!((loading.progress_at(Duration::from_millis(1200)) - 0.5).abs() < 1e-5);

    let pulling = RefreshStyle::CircleWave
        .pulling_animation(Rect::default())
        .unwrap();
    assert_eq!(pulling.progress_at(Duration::from_millis(500)), 0.5);
    assert_eq!(pulling.progress_at(Duration::from_secs(3)), 1.0);
}

#[test]
fn easing_endpoints() {
    for easing in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOutCubic] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
        assert_eq!(easing.sample(-1.0), 0.0);
        assert_eq!(easing.sample(2.0), 1.0);
        assert!((easing.sample(0.5) - 0.5).abs() < 1e-6);
    }
}

#[test]
fn parse_colors() {
    assert_eq!("#fff".parse::<Rgba>(), Ok(Rgba::WHITE));
    assert_eq!("#808080".parse::<Rgba>(), Ok(Rgba::GRAY));
    assert_eq!("#00000000".parse::<Rgba>(), Ok(Rgba::CLEAR));
    assert_eq!(
        "#11223344".parse::<Rgba>(),
        Ok(Rgba::new(0x11, 0x22, 0x33, 0x44))
    );
    assert_eq!("fff".parse::<Rgba>(), Err(ParseColorError::MissingHash));
    assert_eq!(
        "#ffff".parse::<Rgba>(),
        Err(ParseColorError::InvalidLength(4))
    );
    assert_eq!(
        "#ggg".parse::<Rgba>(),
        Err(ParseColorError::InvalidDigit('g'))
    );

    assert_eq!(
        ParseColorError::MissingHash.to_string(),
        "color must start with '#'"
    );
    assert_eq!(
        ParseColorError::InvalidLength(4).to_string(),
        "expected 3, 6 or 8 hex digits, found 4"
    );
    assert_eq!(
        ParseColorError::InvalidDigit('g').to_string(),
        "invalid hex digit 'g'"
    );
}

#[test]
fn options_builders() {
    let options = RefreshOptions::default()
        .with_icon_color(Rgba::rgb(0, 0, 0))
        .with_background_color(Rgba::WHITE)
        .with_style(RefreshStyle::CircleWave);
    assert_eq!(options.icon_color, Rgba::rgb(0, 0, 0));
    assert_eq!(options.background_color, Rgba::WHITE);

    let refresh = PullRefresh::attach(options, frame(), SpyRenderer::default());
    assert_eq!(refresh.icon_color(), Rgba::rgb(0, 0, 0));
    assert_eq!(refresh.background_color(), Rgba::WHITE);
    assert_eq!(refresh.style(), &RefreshStyle::CircleWave);
    assert_eq!(
        refresh.pulling_indicator().unwrap().shape.stroke,
        Rgba::rgb(0, 0, 0)
    );
}
