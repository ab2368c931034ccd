use alloc::vec::Vec;
use core::time::Duration;

use pull_refresh::{AnimatedProperty, AnimationGroup, Indicator, IndicatorKind, Renderer};

/// A renderer call, as seen by [`RecordingRenderer`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderCommand {
    Attach(Indicator),
    Detach(IndicatorKind),
    Scrub(f32),
    Play(IndicatorKind, AnimationGroup),
    StopAll,
}

/// A [`Renderer`] that keeps the current indicator scene and a log of every call.
///
/// Useful for headless hosts (e.g. TUIs that draw the indicator from the scene each frame) and
/// for tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingRenderer {
    pulling: Option<Indicator>,
    loading: Option<Indicator>,
    scrub: f32,
    animating: bool,
    log: Vec<RenderCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indicator(&self, kind: IndicatorKind) -> Option<&Indicator> {
        match kind {
            IndicatorKind::Pulling => self.pulling.as_ref(),
            IndicatorKind::Loading => self.loading.as_ref(),
        }
    }

    pub fn scrub(&self) -> f32 {
        self.scrub
    }

    /// Whether any animation is installed (false after `stop_all` until the next attach/play).
    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn log(&self) -> &[RenderCommand] {
        &self.log
    }

    pub fn take_log(&mut self) -> Vec<RenderCommand> {
        core::mem::take(&mut self.log)
    }

    /// Evaluates the pulling indicator at the current scrub position.
    pub fn pulling_frame(&self) -> Option<Vec<(AnimatedProperty, f32)>> {
        let indicator = self.pulling.as_ref()?;
        Some(indicator.animation.sample(self.scrub).collect())
    }

    /// Evaluates the loading indicator `elapsed` after it was attached.
    ///
    /// Returns `None` while no loading indicator is attached or animations are stopped.
    pub fn loading_frame(&self, elapsed: Duration) -> Option<Vec<(AnimatedProperty, f32)>> {
        if !self.animating {
            return None;
        }
        let indicator = self.loading.as_ref()?;
        let t = indicator.animation.progress_at(elapsed);
        Some(indicator.animation.sample(t).collect())
    }
}

impl Renderer for RecordingRenderer {
    fn attach(&mut self, indicator: &Indicator) {
        match indicator.kind {
            IndicatorKind::Pulling => self.pulling = Some(indicator.clone()),
            IndicatorKind::Loading => self.loading = Some(indicator.clone()),
        }
        self.animating = true;
        self.log.push(RenderCommand::Attach(indicator.clone()));
    }

    fn detach(&mut self, kind: IndicatorKind) {
        match kind {
            IndicatorKind::Pulling => self.pulling = None,
            IndicatorKind::Loading => self.loading = None,
        }
        self.log.push(RenderCommand::Detach(kind));
    }

    fn set_scrub(&mut self, fraction: f32) {
        self.scrub = fraction;
        self.log.push(RenderCommand::Scrub(fraction));
    }

    fn play(&mut self, kind: IndicatorKind, animation: &AnimationGroup) {
        let slot = match kind {
            IndicatorKind::Pulling => &mut self.pulling,
            IndicatorKind::Loading => &mut self.loading,
        };
        if let Some(indicator) = slot {
            indicator.animation = animation.clone();
        }
        self.animating = true;
        self.log.push(RenderCommand::Play(kind, animation.clone()));
    }

    fn stop_all(&mut self) {
        self.animating = false;
        self.log.push(RenderCommand::StopAll);
    }
}
