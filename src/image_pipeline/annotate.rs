//! Brush edits on loaded rasters.
//!
//! Masked annotation only ever changes the channel a site's filter actually captured,
//! combining it with the brush color through [`blend_masked`]. The plain brush used for
//! non-RAW images overwrites whole pixels.

use std::ops::Range;

use tracing::trace;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::common::types::{Color, PixelPos};
use crate::image_pipeline::raster::{MosaicBuffer, RgbRaster, check_bounds};
use crate::image_pipeline::raw::types::BayerPattern;

/// Combines a stored sample with a brush component: bitwise AND, so it can only darken.
/// Painting with 255 leaves a sample unchanged.
#[inline]
pub fn blend_masked(existing: u8, target: u8) -> u8 {
    existing & target
}

/// Square window `[c - r, c + r]` on both axes, clipped to the image.
fn brush_window(pos: PixelPos, radius: usize, width: usize, height: usize) -> (Range<usize>, Range<usize>) {
    let xs = pos.x.saturating_sub(radius)..pos.x.saturating_add(radius).saturating_add(1).min(width);
    let ys = pos.y.saturating_sub(radius)..pos.y.saturating_add(radius).saturating_add(1).min(height);
    (xs, ys)
}

/// Applies a filter-aware brush to a mosaic.
pub fn annotate_mosaic(
    mosaic: &mut MosaicBuffer,
    pattern: BayerPattern,
    pos: PixelPos,
    color: Color,
    radius: usize,
) -> Result<()> {
    check_bounds(pos, mosaic.width(), mosaic.height())?;
    let (xs, ys) = brush_window(pos, radius, mosaic.width(), mosaic.height());
    trace!(?xs, ?ys, "Masked annotation on mosaic");

    let target = color.to_array();
    for y in ys {
        let row = mosaic.row_mut(y);
        for x in xs.clone() {
            let channel = pattern.color_at(x, y).channel();
            row[x] = blend_masked(row[x], target[channel]);
        }
    }
    Ok(())
}

/// Applies the same filter-aware brush to a demosaiced view.
///
/// On a raster produced by `demosaic(m, pattern)` this matches running
/// [`annotate_mosaic`] on `m` and demosaicing again.
pub fn annotate_rgb(
    raster: &mut RgbRaster,
    pattern: BayerPattern,
    pos: PixelPos,
    color: Color,
    radius: usize,
) -> Result<()> {
    check_bounds(pos, raster.width(), raster.height())?;
    let (xs, ys) = brush_window(pos, radius, raster.width(), raster.height());
    trace!(?xs, ?ys, "Masked annotation on RGB view");

    let target = color.to_array();
    for y in ys {
        let row = raster.row_mut(y);
        for x in xs.clone() {
            let channel = pattern.color_at(x, y).channel();
            let i = x * 3 + channel;
            row[i] = blend_masked(row[i], target[channel]);
        }
    }
    Ok(())
}

/// Overwrites every pixel in the brush window with `color`.
pub fn paint_square(raster: &mut RgbRaster, pos: PixelPos, color: Color, radius: usize) -> Result<()> {
    check_bounds(pos, raster.width(), raster.height())?;
    let (xs, ys) = brush_window(pos, radius, raster.width(), raster.height());

    let rgb = color.to_array();
    for y in ys {
        let row = raster.row_mut(y);
        for px in row[xs.start * 3..xs.end * 3].chunks_exact_mut(3) {
            px.copy_from_slice(&rgb);
        }
    }
    Ok(())
}
