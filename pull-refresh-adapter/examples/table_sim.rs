use std::cell::{Cell, RefCell};
use std::rc::Rc;

use pull_refresh::{Easing, PullRefresh, Rect, RefreshDelegate, RefreshOptions, Rgba};
use pull_refresh_adapter::{InsetAnimator, RecordingRenderer, TaskQueue};

enum Task {
    DoneLoading,
}

/// The list screen: reloads its data for five seconds whenever a refresh is requested.
struct Screen {
    is_loading: Rc<Cell<bool>>,
    tasks: Rc<RefCell<TaskQueue<Task>>>,
    now_ms: Rc<Cell<u64>>,
}

impl RefreshDelegate for Screen {
    fn on_refresh_requested(&mut self, _refresh: &PullRefresh) {
        self.is_loading.set(true);
        self.tasks
            .borrow_mut()
            .schedule_after(self.now_ms.get(), 5_000, Task::DoneLoading);
    }

    fn is_data_source_loading(&self, _refresh: &PullRefresh) -> bool {
        self.is_loading.get()
    }
}

fn main() {
    // Example: a simulated list screen driving the refresh control from a frame loop.
    //
    // The loop:
    // - feeds scroll samples of a pull gesture (finger down, pull to -90, release)
    // - ticks the inset animator and applies its inset
    // - dispatches due tasks (the screen's delayed "done loading")
    let is_loading = Rc::new(Cell::new(false));
    let tasks = Rc::new(RefCell::new(TaskQueue::new()));
    let now_ms = Rc::new(Cell::new(0u64));
    let renderer = Rc::new(RefCell::new(RecordingRenderer::new()));

    let options = RefreshOptions::default()
        .with_background_color(Rgba::GRAY)
        .with_icon_color(Rgba::WHITE);
    let mut refresh = PullRefresh::attach(
        options,
        Rect::new(0.0, 64.0, 320.0, 504.0),
        renderer.clone(),
    );
    refresh.set_delegate(Screen {
        is_loading: is_loading.clone(),
        tasks: tasks.clone(),
        now_ms: now_ms.clone(),
    });
    let mut list = InsetAnimator::new(Easing::EaseInOutCubic);

    let gesture: Vec<f32> = (0..=9).map(|i| -(i as f32) * 10.0).collect();
    let mut frame = 0usize;
    let mut t = 0u64;
    while t <= 6_000 {
        now_ms.set(t);

        if let Some(&offset) = gesture.get(frame) {
            refresh.on_scroll(&mut list, offset, true);
            println!(
                "t={t} offset={offset} state={:?} scrub={:.2}",
                refresh.state(),
                renderer.borrow().scrub()
            );
        } else if frame == gesture.len() {
            refresh.on_drag_ended(&mut list, -90.0);
            println!("t={t} released state={:?}", refresh.state());
        }
        frame += 1;

        if let Some(inset) = list.tick(t) {
            println!("t={t} inset={inset:.1}");
        }

        let due = tasks.borrow_mut().pop_due(t);
        if let Some(Task::DoneLoading) = due {
            is_loading.set(false);
            refresh.refresh_finished(&mut list);
            println!("t={t} done loading state={:?}", refresh.state());
        }

        t += 16;
    }

    println!(
        "final: state={:?} inset={} render calls={}",
        refresh.state(),
        list.top(),
        renderer.borrow().log().len()
    );
}
