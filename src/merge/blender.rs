use std::fmt;

use rayon::prelude::*;

use crate::composite::method::PixelBlend;
use crate::foundation::core::{check_rgba8_len, rgba8_len};
use crate::foundation::error::{BlendError, BlendResult};
use crate::foundation::math::{read_px, write_px};
use crate::merge::region::MergeRegion;

/// Options controlling how a [`Blender`] runs its merges.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BlenderOpts {
    /// Split merge rows across a dedicated rayon thread pool.
    pub parallel: bool,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
    /// Overlaps with fewer rows than this stay on the calling thread.
    pub min_parallel_rows: usize,
}

impl Default for BlenderOpts {
    fn default() -> Self {
        Self {
            parallel: false,
            threads: None,
            min_parallel_rows: 64,
        }
    }
}

/// Buffer-merge engine over a straight-alpha RGBA8 canvas.
///
/// Holds the current canvas plus a scratch buffer of the same size. Every
/// merge reads the current canvas, writes the scratch buffer, then the two
/// swap roles, so a merge never reads its own partial output.
pub struct Blender {
    width: u32,
    height: u32,
    buffers: [Vec<u8>; 2],
    primary: usize,
    opts: BlenderOpts,
    pool: Option<rayon::ThreadPool>,
}

impl Blender {
    /// Transparent black canvas of the given size.
    pub fn new(width: u32, height: u32) -> BlendResult<Self> {
        let len = rgba8_len(width, height)?;
        Ok(Self::from_parts(width, height, vec![0; len]))
    }

    /// Canvas initialized with a copy of `base`.
    pub fn from_image(base: &image::RgbaImage) -> BlendResult<Self> {
        let (width, height) = base.dimensions();
        Self::from_rgba8(width, height, image_bytes(base)?)
    }

    /// Canvas initialized with a copy of raw RGBA8 rows.
    ///
    /// Fails unless `data.len() == width * height * 4`.
    pub fn from_rgba8(width: u32, height: u32, data: &[u8]) -> BlendResult<Self> {
        check_rgba8_len(data, width, height)?;
        Ok(Self::from_parts(width, height, data.to_vec()))
    }

    fn from_parts(width: u32, height: u32, data: Vec<u8>) -> Self {
        let scratch = vec![0; data.len()];
        Self {
            width,
            height,
            buffers: [data, scratch],
            primary: 0,
            opts: BlenderOpts::default(),
            pool: None,
        }
    }

    /// Apply `opts`, building the worker pool when `opts.parallel` is set.
    pub fn with_opts(mut self, opts: BlenderOpts) -> BlendResult<Self> {
        self.pool = if opts.parallel {
            Some(build_thread_pool(opts.threads)?)
        } else {
            validate_threads(opts.threads)?;
            None
        };
        self.opts = opts;
        Ok(self)
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Active options.
    pub fn opts(&self) -> &BlenderOpts {
        &self.opts
    }

    /// Current canvas bytes.
    pub fn as_rgba8(&self) -> &[u8] {
        &self.buffers[self.primary]
    }

    /// Composite `overlay`, placed at `(dx, dy)`, onto the canvas.
    ///
    /// Returns the overlap that was written; pixels outside it are untouched.
    pub fn merge<M>(
        &mut self,
        overlay: &image::RgbaImage,
        dx: i32,
        dy: i32,
        method: &M,
    ) -> BlendResult<MergeRegion>
    where
        M: PixelBlend + Sync + ?Sized,
    {
        let (w, h) = overlay.dimensions();
        self.merge_rgba8(image_bytes(overlay)?, w, h, dx, dy, method)
    }

    /// Like [`Blender::merge`], with the overlay given as raw RGBA8 rows.
    #[tracing::instrument(
        level = "debug",
        skip(self, overlay, method),
        fields(base_width = self.width, base_height = self.height)
    )]
    pub fn merge_rgba8<M>(
        &mut self,
        overlay: &[u8],
        overlay_width: u32,
        overlay_height: u32,
        dx: i32,
        dy: i32,
        method: &M,
    ) -> BlendResult<MergeRegion>
    where
        M: PixelBlend + Sync + ?Sized,
    {
        check_rgba8_len(overlay, overlay_width, overlay_height)?;

        let region = MergeRegion::compute(
            self.width,
            self.height,
            overlay_width,
            overlay_height,
            dx,
            dy,
        );
        if region.is_empty() {
            tracing::debug!("overlay misses the canvas, nothing to merge");
            return Ok(region);
        }
        tracing::debug!(?region, "merging overlay");

        let (front, back) = split_front_back(&mut self.buffers, self.primary);
        back.copy_from_slice(front);
        let rows = RowSource {
            front,
            overlay,
            base_stride: self.width as usize * 4,
            overlay_stride: overlay_width as usize * 4,
            region,
        };

        let first = region.below_y as usize;
        let count = region.height as usize;
        match &self.pool {
            Some(pool) if count >= self.opts.min_parallel_rows => pool.install(|| {
                back.par_chunks_exact_mut(rows.base_stride)
                    .enumerate()
                    .skip(first)
                    .take(count)
                    .for_each(|(y, dst)| rows.merge_row(y, dst, method));
            }),
            _ => back
                .chunks_exact_mut(rows.base_stride)
                .enumerate()
                .skip(first)
                .take(count)
                .for_each(|(y, dst)| rows.merge_row(y, dst, method)),
        }

        self.primary ^= 1;
        tracing::trace!(primary = self.primary, "swapped canvas buffers");
        Ok(region)
    }

    /// Move the canvas out as an image, consuming the blender.
    pub fn into_image(self) -> BlendResult<image::RgbaImage> {
        let (width, height) = (self.width, self.height);
        image::RgbaImage::from_raw(width, height, self.into_rgba8())
            .ok_or_else(|| BlendError::buffer("canvas does not fit an rgba image"))
    }

    /// Copy the canvas into a new image.
    pub fn to_image(&self) -> BlendResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.as_rgba8().to_vec())
            .ok_or_else(|| BlendError::buffer("canvas does not fit an rgba image"))
    }

    /// Move the canvas bytes out, consuming the blender.
    pub fn into_rgba8(self) -> Vec<u8> {
        let [a, b] = self.buffers;
        if self.primary == 0 { a } else { b }
    }
}

impl fmt::Debug for Blender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blender")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("primary", &self.primary)
            .field("opts", &self.opts)
            .finish_non_exhaustive()
    }
}

/// Read-only inputs shared by every row of one merge.
#[derive(Clone, Copy)]
struct RowSource<'a> {
    front: &'a [u8],
    overlay: &'a [u8],
    base_stride: usize,
    overlay_stride: usize,
    region: MergeRegion,
}

impl RowSource<'_> {
    /// Merge base row `y` of the overlap into `dst`, the matching scratch row.
    fn merge_row<M>(&self, y: usize, dst: &mut [u8], method: &M)
    where
        M: PixelBlend + ?Sized,
    {
        let r = self.region;
        let oy = y - r.below_y as usize + r.above_y as usize;
        let below_row = &self.front[y * self.base_stride..(y + 1) * self.base_stride];
        let above_row = &self.overlay[oy * self.overlay_stride..(oy + 1) * self.overlay_stride];

        let span = r.width as usize * 4;
        let bx = r.below_x as usize * 4;
        let ax = r.above_x as usize * 4;
        for ((d, below), above) in dst[bx..bx + span]
            .chunks_exact_mut(4)
            .zip(below_row[bx..bx + span].chunks_exact(4))
            .zip(above_row[ax..ax + span].chunks_exact(4))
        {
            write_px(d, method.blend_pixel(read_px(below), read_px(above)));
        }
    }
}

fn split_front_back(buffers: &mut [Vec<u8>; 2], primary: usize) -> (&[u8], &mut [u8]) {
    let [a, b] = buffers;
    if primary == 0 {
        (a.as_slice(), b.as_mut_slice())
    } else {
        (b.as_slice(), a.as_mut_slice())
    }
}

/// The tightly packed prefix of an image's backing store.
fn image_bytes(img: &image::RgbaImage) -> BlendResult<&[u8]> {
    let len = rgba8_len(img.width(), img.height())?;
    img.as_raw()
        .get(..len)
        .ok_or_else(|| BlendError::buffer("image backing store is shorter than width*height*4"))
}

fn validate_threads(threads: Option<usize>) -> BlendResult<()> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(BlendError::validation(
            "blender 'threads' must be >= 1 when set",
        ));
    }
    Ok(())
}

fn build_thread_pool(threads: Option<usize>) -> BlendResult<rayon::ThreadPool> {
    validate_threads(threads)?;
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    let pool = builder
        .build()
        .map_err(|e| anyhow::Error::new(e).context("failed to build rayon thread pool"))?;
    tracing::debug!(threads = pool.current_num_threads(), "built merge thread pool");
    Ok(pool)
}

#[cfg(test)]
#[path = "../../tests/unit/merge/blender.rs"]
mod tests;
