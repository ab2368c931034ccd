use crate::{RefreshStyle, Rgba};

/// Configuration for [`crate::PullRefresh`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`; missing fields fall
/// back to their defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RefreshOptions {
    /// Selects the animation-parameter table.
    pub style: RefreshStyle,
    /// Fill of the header view behind the indicator. Visual only.
    pub background_color: Rgba,
    /// Stroke color of the indicator.
    pub icon_color: Rgba,
}

impl Default for RefreshOptions {
    fn default() -> Self {
        Self {
            style: RefreshStyle::CircleWave,
            background_color: Rgba::GRAY,
            icon_color: Rgba::WHITE,
        }
    }
}

impl RefreshOptions {
    pub fn new(style: RefreshStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    pub fn with_style(mut self, style: RefreshStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_background_color(mut self, background_color: Rgba) -> Self {
        self.background_color = background_color;
        self
    }

    pub fn with_icon_color(mut self, icon_color: Rgba) -> Self {
        self.icon_color = icon_color;
        self
    }
}
