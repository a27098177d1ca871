use std::fmt;
use std::str::FromStr;

use crate::blend::{channel, color};
use crate::foundation::core::{ChannelBlendFn, ColorBlendFn};
use crate::foundation::error::BlendError;

/// Named color blend mode, one per W3C `mix-blend-mode` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    /// [`color::normal`]
    #[default]
    Normal,
    /// [`color::multiply`]
    Multiply,
    /// [`color::screen`]
    Screen,
    /// [`color::overlay`]
    Overlay,
    /// [`color::darken`]
    Darken,
    /// [`color::lighten`]
    Lighten,
    /// [`color::color_dodge`]
    ColorDodge,
    /// [`color::color_burn`]
    ColorBurn,
    /// [`color::hard_light`]
    HardLight,
    /// [`color::soft_light`]
    SoftLight,
    /// [`color::difference`]
    Difference,
    /// [`color::exclusion`]
    Exclusion,
    /// [`color::hue`]
    Hue,
    /// [`color::saturation`]
    Saturation,
    /// [`color::color`]
    Color,
    /// [`color::luminosity`]
    Luminosity,
}

impl BlendMode {
    /// Every mode, separable ones first.
    pub const ALL: [BlendMode; 16] = [
        BlendMode::Normal,
        BlendMode::Multiply,
        BlendMode::Screen,
        BlendMode::Overlay,
        BlendMode::Darken,
        BlendMode::Lighten,
        BlendMode::ColorDodge,
        BlendMode::ColorBurn,
        BlendMode::HardLight,
        BlendMode::SoftLight,
        BlendMode::Difference,
        BlendMode::Exclusion,
        BlendMode::Hue,
        BlendMode::Saturation,
        BlendMode::Color,
        BlendMode::Luminosity,
    ];

    /// Canonical kebab-case name, e.g. `"color-dodge"`.
    pub fn name(self) -> &'static str {
        match self {
            BlendMode::Normal => "normal",
            BlendMode::Multiply => "multiply",
            BlendMode::Screen => "screen",
            BlendMode::Overlay => "overlay",
            BlendMode::Darken => "darken",
            BlendMode::Lighten => "lighten",
            BlendMode::ColorDodge => "color-dodge",
            BlendMode::ColorBurn => "color-burn",
            BlendMode::HardLight => "hard-light",
            BlendMode::SoftLight => "soft-light",
            BlendMode::Difference => "difference",
            BlendMode::Exclusion => "exclusion",
            BlendMode::Hue => "hue",
            BlendMode::Saturation => "saturation",
            BlendMode::Color => "color",
            BlendMode::Luminosity => "luminosity",
        }
    }

    /// `true` when the mode treats each channel independently.
    pub fn is_separable(self) -> bool {
        self.channel_fn().is_some()
    }

    /// The per-channel function behind a separable mode.
    pub fn channel_fn(self) -> Option<ChannelBlendFn> {
        let f: ChannelBlendFn = match self {
            BlendMode::Normal => channel::normal,
            BlendMode::Multiply => channel::multiply,
            BlendMode::Screen => channel::screen,
            BlendMode::Overlay => channel::overlay,
            BlendMode::Darken => channel::darken,
            BlendMode::Lighten => channel::lighten,
            BlendMode::ColorDodge => channel::color_dodge,
            BlendMode::ColorBurn => channel::color_burn,
            BlendMode::HardLight => channel::hard_light,
            BlendMode::SoftLight => channel::soft_light,
            BlendMode::Difference => channel::difference,
            BlendMode::Exclusion => channel::exclusion,
            BlendMode::Hue | BlendMode::Saturation | BlendMode::Color | BlendMode::Luminosity => {
                return None;
            }
        };
        Some(f)
    }

    /// The color function implementing this mode.
    pub fn color_fn(self) -> ColorBlendFn {
        match self {
            BlendMode::Normal => color::normal,
            BlendMode::Multiply => color::multiply,
            BlendMode::Screen => color::screen,
            BlendMode::Overlay => color::overlay,
            BlendMode::Darken => color::darken,
            BlendMode::Lighten => color::lighten,
            BlendMode::ColorDodge => color::color_dodge,
            BlendMode::ColorBurn => color::color_burn,
            BlendMode::HardLight => color::hard_light,
            BlendMode::SoftLight => color::soft_light,
            BlendMode::Difference => color::difference,
            BlendMode::Exclusion => color::exclusion,
            BlendMode::Hue => color::hue,
            BlendMode::Saturation => color::saturation,
            BlendMode::Color => color::color,
            BlendMode::Luminosity => color::luminosity,
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlendMode {
    type Err = BlendError;

    /// Case-insensitive; `color-dodge`, `color_dodge` and `colorDodge` all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = compact_name(s);
        if key.is_empty() {
            return Err(BlendError::validation("blend mode must be non-empty"));
        }
        BlendMode::ALL
            .into_iter()
            .find(|m| compact_name(m.name()) == key)
            .ok_or_else(|| BlendError::validation(format!("unknown blend mode '{}'", s.trim())))
    }
}

/// Lowercase `s` and drop `-`, `_` and whitespace.
pub(crate) fn compact_name(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_') && !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/blend/mode.rs"]
mod tests;
