/// The three states of a pull-to-refresh control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RefreshState {
    /// Resting; the indicator tracks the finger but no refresh is armed.
    #[default]
    Idle,
    /// Pulled past the trigger offset while dragging; releasing here starts a refresh.
    Pulling,
    /// A refresh was requested and has not been finished yet.
    Loading,
}

/// Identifies one of the two indicator visuals a renderer manages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IndicatorKind {
    Pulling,
    Loading,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in host points.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rect of the same size placed directly above `self`.
    ///
    /// The refresh header lives here so that it is only revealed when the list is pulled down
    /// past its top.
    pub fn above(&self) -> Self {
        Self {
            x: self.x,
            y: self.y - self.height,
            width: self.width,
            height: self.height,
        }
    }
}
