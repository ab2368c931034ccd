use core::time::Duration;

use pull_refresh::{
    AnimationGroup, Indicator, IndicatorKind, PullRefresh, Rect, RefreshOptions, Renderer,
    ScrollHost,
};

struct PrintRenderer;

impl Renderer for PrintRenderer {
    fn attach(&mut self, indicator: &Indicator) {
        println!("attach {:?} ({:?})", indicator.kind, indicator.playback);
    }

    fn detach(&mut self, kind: IndicatorKind) {
        println!("detach {kind:?}");
    }

    fn set_scrub(&mut self, fraction: f32) {
        println!("scrub {fraction:.2}");
    }

    fn play(&mut self, kind: IndicatorKind, animation: &AnimationGroup) {
        println!("play {kind:?} for {:?}", animation.duration);
    }

    fn stop_all(&mut self) {
        println!("stop all");
    }
}

#[derive(Default)]
struct List {
    inset: f32,
}

impl ScrollHost for List {
    fn content_inset_top(&self) -> f32 {
        self.inset
    }

    fn set_content_inset_top(&mut self, inset: f32) {
        self.inset = inset;
    }

    fn animate_content_inset_top(&mut self, inset: f32, duration: Duration) {
        println!("inset {} -> {inset} over {duration:?}", self.inset);
        self.inset = inset;
    }
}

fn main() {
    let mut list = List::default();
    let mut refresh = PullRefresh::attach(
        RefreshOptions::default(),
        Rect::new(0.0, 0.0, 320.0, 480.0),
        PrintRenderer,
    );

    for offset in [-10.0, -40.0, -70.0] {
        refresh.on_scroll(&mut list, offset, true);
        println!("offset={offset} state={:?}", refresh.state());
    }

    refresh.on_drag_ended(&mut list, -70.0);
    println!("released: state={:?}", refresh.state());

    refresh.refresh_finished(&mut list);
    println!("finished: state={:?}", refresh.state());
}
