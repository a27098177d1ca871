use std::fmt;
use std::str::FromStr;

use crate::blend::mode::{BlendMode, compact_name};
use crate::composite::method::{BlendMethod, CompositeMethod};
use crate::composite::porter_duff::PorterDuff;
use crate::foundation::error::BlendError;

/// Named compositing operator, as in the canvas `globalCompositeOperation` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompositeOp {
    /// Transparent black everywhere.
    Clear,
    /// Source only.
    Copy,
    /// Backdrop only.
    Destination,
    /// Source over backdrop.
    #[default]
    SourceOver,
    /// Backdrop over source.
    DestinationOver,
    /// Source where the backdrop is.
    SourceIn,
    /// Backdrop where the source is.
    DestinationIn,
    /// Source where the backdrop is not.
    SourceOut,
    /// Backdrop where the source is not.
    DestinationOut,
    /// Source inside the backdrop, backdrop elsewhere.
    SourceAtop,
    /// Backdrop inside the source, source elsewhere.
    DestinationAtop,
    /// Non-overlapping parts of both.
    Xor,
    /// Sum of both.
    Lighter,
}

impl CompositeOp {
    /// Every operator, bypass operators first.
    pub const ALL: [CompositeOp; 13] = [
        CompositeOp::Clear,
        CompositeOp::Copy,
        CompositeOp::Destination,
        CompositeOp::SourceOver,
        CompositeOp::DestinationOver,
        CompositeOp::SourceIn,
        CompositeOp::DestinationIn,
        CompositeOp::SourceOut,
        CompositeOp::DestinationOut,
        CompositeOp::SourceAtop,
        CompositeOp::DestinationAtop,
        CompositeOp::Xor,
        CompositeOp::Lighter,
    ];

    /// Canonical kebab-case name, e.g. `"source-over"`.
    pub fn name(self) -> &'static str {
        match self {
            CompositeOp::Clear => "clear",
            CompositeOp::Copy => "copy",
            CompositeOp::Destination => "destination",
            CompositeOp::SourceOver => "source-over",
            CompositeOp::DestinationOver => "destination-over",
            CompositeOp::SourceIn => "source-in",
            CompositeOp::DestinationIn => "destination-in",
            CompositeOp::SourceOut => "source-out",
            CompositeOp::DestinationOut => "destination-out",
            CompositeOp::SourceAtop => "source-atop",
            CompositeOp::DestinationAtop => "destination-atop",
            CompositeOp::Xor => "xor",
            CompositeOp::Lighter => "lighter",
        }
    }

    /// The composite method behind this name.
    pub fn method(self) -> CompositeMethod {
        match self {
            CompositeOp::Clear => CompositeMethod::Clear,
            CompositeOp::Copy => CompositeMethod::Copy,
            CompositeOp::Destination => CompositeMethod::Destination,
            CompositeOp::SourceOver => PorterDuff::SOURCE_OVER.into(),
            CompositeOp::DestinationOver => PorterDuff::DESTINATION_OVER.into(),
            CompositeOp::SourceIn => PorterDuff::SOURCE_IN.into(),
            CompositeOp::DestinationIn => PorterDuff::DESTINATION_IN.into(),
            CompositeOp::SourceOut => PorterDuff::SOURCE_OUT.into(),
            CompositeOp::DestinationOut => PorterDuff::DESTINATION_OUT.into(),
            CompositeOp::SourceAtop => PorterDuff::SOURCE_ATOP.into(),
            CompositeOp::DestinationAtop => PorterDuff::DESTINATION_ATOP.into(),
            CompositeOp::Xor => PorterDuff::XOR.into(),
            CompositeOp::Lighter => PorterDuff::LIGHTER.into(),
        }
    }

    /// Shorthand for `self.method().with_blend(mode.color_fn())`.
    pub fn with_blend(self, mode: BlendMode) -> BlendMethod {
        BlendMethod::new(self, mode)
    }
}

impl fmt::Display for CompositeOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CompositeOp {
    type Err = BlendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = compact_name(s);
        if key.is_empty() {
            return Err(BlendError::validation("composite operator must be non-empty"));
        }
        CompositeOp::ALL
            .into_iter()
            .find(|op| compact_name(op.name()) == key)
            .ok_or_else(|| {
                BlendError::validation(format!("unknown composite operator '{}'", s.trim()))
            })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composite/op.rs"]
mod tests;
