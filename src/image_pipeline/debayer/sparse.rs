use crate::image_pipeline::raster::{MosaicBuffer, RgbRaster};
use crate::image_pipeline::raw::types::BayerPattern;

/// Spreads each mosaic sample into the RGB channel of its filter color.
pub fn demosaic(mosaic: &MosaicBuffer, pattern: BayerPattern) -> RgbRaster {
    let (width, height) = (mosaic.width(), mosaic.height());
    let mut rgb = vec![0u8; width * height * 3];

    for (y, (src, dst)) in mosaic.rows().zip(rgb.chunks_exact_mut(width * 3)).enumerate() {
        for (x, (&sample, px)) in src.iter().zip(dst.chunks_exact_mut(3)).enumerate() {
            px[pattern.color_at(x, y).channel()] = sample;
        }
    }

    RgbRaster::from_parts(width, height, rgb)
}

/// Collapses an RGB raster to one sample per site, read from the site's filter channel.
///
/// The other two channels are discarded, so `remosaic(demosaic(m, p), p) == m`.
pub fn remosaic(raster: &RgbRaster, pattern: BayerPattern) -> MosaicBuffer {
    let (width, height) = (raster.width(), raster.height());
    let mut mosaic = vec![0u8; width * height];

    for (y, (src, dst)) in raster.rows().zip(mosaic.chunks_exact_mut(width)).enumerate() {
        for (x, (px, sample)) in src.chunks_exact(3).zip(dst.iter_mut()).enumerate() {
            *sample = px[pattern.color_at(x, y).channel()];
        }
    }

    MosaicBuffer::from_parts(width, height, mosaic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::common::types::PixelPos;

    fn ramp(width: usize, height: usize) -> MosaicBuffer {
        let data = (0..width * height).map(|v| (v * 7 % 256) as u8).collect();
        MosaicBuffer::new(width, height, data).unwrap()
    }

    #[test]
    fn rggb_sites_land_in_their_channels() {
        let mosaic = MosaicBuffer::new(4, 4, (0..16).collect()).unwrap();
        let rgb = demosaic(&mosaic, BayerPattern::RGGB);

        assert_eq!(rgb.pixel(PixelPos::new(0, 0)).unwrap(), [0, 0, 0]);
        assert_eq!(rgb.pixel(PixelPos::new(1, 0)).unwrap(), [0, 1, 0]);
        assert_eq!(rgb.pixel(PixelPos::new(0, 1)).unwrap(), [0, 4, 0]);
        assert_eq!(rgb.pixel(PixelPos::new(1, 1)).unwrap(), [0, 0, 5]);
        assert_eq!(rgb.pixel(PixelPos::new(2, 2)).unwrap(), [10, 0, 0]);
    }

    #[test]
    fn at_most_one_channel_is_populated() {
        for pattern in BayerPattern::ALL {
            let mosaic = MosaicBuffer::new(3, 3, vec![200; 9]).unwrap();
            let rgb = demosaic(&mosaic, pattern);
            for px in rgb.as_bytes().chunks_exact(3) {
                assert_eq!(px.iter().filter(|&&c| c != 0).count(), 1, "{pattern}");
            }
        }
    }

    #[test]
    fn remosaic_inverts_demosaic_for_every_pattern() {
        for (w, h) in [(4, 4), (5, 3), (1, 1), (7, 2)] {
            let mosaic = ramp(w, h);
            for pattern in BayerPattern::ALL {
                assert_eq!(remosaic(&demosaic(&mosaic, pattern), pattern), mosaic, "{pattern} {w}x{h}");
            }
        }
    }

    #[test]
    fn remosaic_ignores_foreign_channels() {
        let mut rgb = RgbRaster::zeroed(2, 1).unwrap();
        rgb.set_pixel(PixelPos::new(0, 0), [9, 99, 199]).unwrap();
        rgb.set_pixel(PixelPos::new(1, 0), [8, 88, 188]).unwrap();

        assert_eq!(remosaic(&rgb, BayerPattern::GBRG).as_bytes(), &[99, 188]);
        assert_eq!(remosaic(&rgb, BayerPattern::RGGB).as_bytes(), &[9, 88]);
    }
}
