use core::time::Duration;

use pull_refresh::{Easing, ScrollHost};

use crate::Tween;

/// A [`ScrollHost`] that tweens its top inset on an adapter-driven clock.
///
/// Adapters call `tick(now_ms)` each frame/timer tick and apply the returned inset to the real
/// scroll container (if any). Immediate updates (`set_content_inset_top`) cancel a running tween.
#[derive(Clone, Debug)]
pub struct InsetAnimator {
    top: f32,
    now_ms: u64,
    easing: Easing,
    tween: Option<Tween>,
}

impl Default for InsetAnimator {
    fn default() -> Self {
        Self::new(Easing::SmoothStep)
    }
}

impl InsetAnimator {
    pub fn new(easing: Easing) -> Self {
        Self {
            top: 0.0,
            now_ms: 0,
            easing,
            tween: None,
        }
    }

    pub fn top(&self) -> f32 {
        self.top
    }

    /// The inset the running tween (if any) will settle on.
    pub fn target(&self) -> f32 {
        self.tween.map_or(self.top, |t| t.to)
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    /// Advances the clock.
    ///
    /// Returns the new inset while a tween is active, `None` otherwise.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        self.now_ms = self.now_ms.max(now_ms);
        let tween = self.tween?;

        self.top = tween.sample(self.now_ms);
        if tween.is_done(self.now_ms) {
            self.top = tween.to;
            self.tween = None;
        }
        Some(self.top)
    }
}

impl ScrollHost for InsetAnimator {
    fn content_inset_top(&self) -> f32 {
        self.top
    }

    fn set_content_inset_top(&mut self, inset: f32) {
        self.tween = None;
        self.top = inset;
    }

    fn animate_content_inset_top(&mut self, inset: f32, duration: Duration) {
        let duration_ms = duration.as_millis() as u64;
        match &mut self.tween {
            Some(tween) => tween.retarget(self.now_ms, inset, duration_ms),
            None => {
                self.tween = Some(Tween::new(
                    self.top,
                    inset,
                    self.now_ms,
                    duration_ms,
                    self.easing,
                ));
            }
        }
        adebug!(
            from = self.top,
            to = inset,
            duration_ms,
            "InsetAnimator::animate_content_inset_top"
        );
    }
}
