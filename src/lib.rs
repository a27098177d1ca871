//! W3C blend modes and Porter-Duff compositing for straight-alpha RGBA8 buffers.
//!
//! The crate follows [Compositing and Blending Level 1](https://www.w3.org/TR/compositing-1/)
//! and is layered leaves-first:
//!
//! 1. **Channel blending** ([`channel`]): `f(below, above)` on one channel value in `[0, 1]`.
//! 2. **Color blending** ([`color`], [`BlendMode`]): the twelve separable modes lifted
//!    onto RGB, plus hue, saturation, color and luminosity.
//! 3. **Compositing** ([`PorterDuff`], [`CompositeMethod`], [`CompositeOp`]): the
//!    Porter-Duff equation with a blend step, bound into a per-pixel [`BlendMethod`].
//! 4. **Buffer merge** ([`Blender`]): composites a whole overlay onto a canvas at an
//!    offset, clipping to the overlap.
//!
//! All color math works on straight (non-premultiplied) `f32` channels; bytes are
//! decoded as `v / 255` and encoded with clamping and rounding.
//!
//! ```
//! use rgba_blend::{BlendMode, Blender, CompositeOp};
//!
//! let base = image::RgbaImage::from_pixel(2, 2, image::Rgba([255, 0, 0, 255]));
//! let overlay = image::RgbaImage::from_pixel(2, 2, image::Rgba([0, 0, 255, 255]));
//!
//! let mut blender = Blender::from_image(&base)?;
//! let method = CompositeOp::SourceOver.with_blend(BlendMode::Multiply);
//! blender.merge(&overlay, 0, 0, &method)?;
//! let out = blender.into_image()?;
//! assert_eq!(out.get_pixel(0, 0).0, [0, 0, 0, 255]);
//! # Ok::<(), rgba_blend::BlendError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod blend;
mod composite;
mod foundation;
mod merge;

/// Pixel helpers: channel extraction, weighting and channel-wise mapping.
pub mod util;

/// Separable blend functions on single channel values.
pub mod channel {
    pub use crate::blend::channel::*;
}

/// Blend functions on RGB colors, including the non-separable modes.
pub mod color {
    pub use crate::blend::color::*;
}

pub use blend::mode::BlendMode;
pub use composite::method::{BlendMethod, CompositeMethod, PixelBlend};
pub use composite::op::CompositeOp;
pub use composite::porter_duff::{PorterDuff, PorterDuffArg, raw_porter_duff};
pub use foundation::core::{ChannelBlendFn, ColorBlendFn, Rgb, Rgba, TRANSPARENT};
pub use foundation::error::{BlendError, BlendResult};
pub use image::RgbaImage;
pub use merge::blender::{Blender, BlenderOpts};
pub use merge::region::MergeRegion;
