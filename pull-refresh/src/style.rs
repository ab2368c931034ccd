use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;
use core::f32::consts::PI;
use core::fmt;
use core::str::FromStr;
use core::time::Duration;

use crate::{Easing, IndicatorKind, Point, Rect, Rgba};

/// Side length of the square indicator frame.
pub const INDICATOR_SIZE: f32 = 30.0;
/// Distance between the indicator's resting center and the bottom edge of the header.
pub const INDICATOR_BOTTOM_INSET: f32 = 30.0;

const CIRCLE_LINE_WIDTH: f32 = 3.0;

/// Selects the animation-parameter table used for the indicator visuals.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RefreshStyle {
    /// A circle that strokes itself in while pulling and pulses outwards while loading.
    #[default]
    CircleWave,
    /// A style this build has no tables for.
    ///
    /// Controllers built with it run the state machine without any indicator visuals.
    Named(String),
}

impl RefreshStyle {
    pub fn name(&self) -> &str {
        match self {
            Self::CircleWave => "circle_wave",
            Self::Named(name) => name,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Named(_))
    }

    /// The shape shared by the pulling and loading indicators, stroked with `stroke`.
    pub fn indicator_shape(&self, stroke: Rgba) -> Option<IndicatorShape> {
        match self {
            Self::CircleWave => Some(IndicatorShape {
                size: INDICATOR_SIZE,
                path: ShapePath::Arc {
                    center: Point::new(INDICATOR_SIZE / 2.0, INDICATOR_SIZE / 2.0),
                    radius: INDICATOR_SIZE / 2.0,
                    start_angle: -PI / 2.0,
                    end_angle: 3.0 * PI / 2.0,
                    clockwise: true,
                },
                stroke,
                fill: Rgba::CLEAR,
                line_width: CIRCLE_LINE_WIDTH,
                line_cap: LineCap::Round,
                line_join: LineJoin::Round,
            }),
            Self::Named(_) => None,
        }
    }

    /// The animation scrubbed by the pull gesture.
    ///
    /// Position keyframes depend on the header height, so the table is evaluated per header.
    pub fn pulling_animation(&self, header: Rect) -> Option<AnimationGroup> {
        match self {
            Self::CircleWave => Some(AnimationGroup {
                animations: vec![
                    PropertyAnimation::new(
                        AnimatedProperty::PositionY,
                        header.height,
                        header.height - INDICATOR_BOTTOM_INSET,
                    ),
                    PropertyAnimation::new(AnimatedProperty::Scale, 0.0, 1.0),
                    PropertyAnimation::new(AnimatedProperty::StrokeEnd, 0.0, 1.0),
                ],
                duration: Duration::from_secs(1),
                repeat: Repeat::Once,
                easing: Easing::Linear,
            }),
            Self::Named(_) => None,
        }
    }

    /// The indeterminate animation shown while loading.
    pub fn loading_animation(&self) -> Option<AnimationGroup> {
        match self {
            Self::CircleWave => Some(AnimationGroup {
                animations: vec![
                    PropertyAnimation::new(AnimatedProperty::Scale, 1.0, 1.5),
                    PropertyAnimation::new(AnimatedProperty::Opacity, 1.0, 0.0),
                ],
                duration: Duration::from_millis(800),
                repeat: Repeat::Forever,
                easing: Easing::EaseInOutCubic,
            }),
            Self::Named(_) => None,
        }
    }

    /// Builds a complete indicator of `kind` for a header, or `None` if the style has no tables.
    pub fn indicator(&self, kind: IndicatorKind, header: Rect, stroke: Rgba) -> Option<Indicator> {
        let shape = self.indicator_shape(stroke)?;
        let (animation, playback) = match kind {
            IndicatorKind::Pulling => (self.pulling_animation(header)?, Playback::Scrubbed),
            IndicatorKind::Loading => (self.loading_animation()?, Playback::Running),
        };
        Some(Indicator {
            kind,
            shape,
            position: indicator_position(header),
            animation,
            playback,
        })
    }
}

impl fmt::Display for RefreshStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a style name. Unknown names become [`RefreshStyle::Named`].
impl FromStr for RefreshStyle {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "circle_wave" | "circle-wave" | "CircleWave" => Self::CircleWave,
            other => Self::Named(String::from(other)),
        })
    }
}

/// Resting center of an indicator inside the header.
pub fn indicator_position(header: Rect) -> Point {
    Point::new(header.width / 2.0, header.height - INDICATOR_BOTTOM_INSET)
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShapePath {
    /// An arc in the indicator's local coordinates. Angles are in radians.
    Arc {
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        clockwise: bool,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LineJoin {
    Miter,
    #[default]
    Round,
    Bevel,
}

/// A stroked shape drawn inside a square frame of `size` points.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndicatorShape {
    pub size: f32,
    pub path: ShapePath,
    pub stroke: Rgba,
    pub fill: Rgba,
    pub line_width: f32,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimatedProperty {
    /// Vertical center of the indicator in header coordinates.
    PositionY,
    /// Uniform scale around the indicator's center.
    Scale,
    /// Fraction of the path that is stroked.
    StrokeEnd,
    Opacity,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyAnimation {
    pub property: AnimatedProperty,
    pub from: f32,
    pub to: f32,
}

impl PropertyAnimation {
    pub const fn new(property: AnimatedProperty, from: f32, to: f32) -> Self {
        Self { property, from, to }
    }

    pub fn value_at(&self, progress: f32) -> f32 {
        self.from + (self.to - self.from) * progress
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Repeat {
    Once,
    Forever,
}

/// How a renderer should drive an attached indicator's animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Playback {
    /// Paused; progress comes from [`crate::Renderer::set_scrub`].
    Scrubbed,
    /// Runs on the renderer's own clock.
    Running,
}

/// A set of property animations sharing one duration and timing curve.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationGroup {
    pub animations: Vec<PropertyAnimation>,
    pub duration: Duration,
    pub repeat: Repeat,
    pub easing: Easing,
}

impl AnimationGroup {
    /// Evaluates every property at linear progress `t` (clamped to `[0, 1]`, then eased).
    ///
    /// Hosts without a native timeline can use this to render a scrubbed position directly.
    pub fn sample(&self, t: f32) -> impl Iterator<Item = (AnimatedProperty, f32)> + '_ {
        let progress = self.easing.sample(t);
        self.animations
            .iter()
            .map(move |a| (a.property, a.value_at(progress)))
    }

    /// Value of a single property at linear progress `t`, if the group animates it.
    pub fn value_of(&self, property: AnimatedProperty, t: f32) -> Option<f32> {
        self.sample(t)
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v)
    }

    /// Linear progress at `elapsed` time on the group's own clock.
    pub fn progress_at(&self, elapsed: Duration) -> f32 {
        let total = self.duration.as_secs_f32();
        if total <= 0.0 {
            return 1.0;
        }
        let t = elapsed.as_secs_f32() / total;
        match self.repeat {
            Repeat::Once => t.min(1.0),
            Repeat::Forever => t - (t as u64) as f32,
        }
    }
}

/// Everything a renderer needs to attach one indicator visual.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Indicator {
    pub kind: IndicatorKind,
    pub shape: IndicatorShape,
    /// Resting center in header coordinates.
    pub position: Point,
    pub animation: AnimationGroup,
    pub playback: Playback,
}
