use image::DynamicImage;
use xcap::Monitor;

use super::ScreenGrabber;
use crate::common::{OcrError, Region};

/// Grabs from the monitor that contains the region's top-left corner.
#[derive(Debug, Default, Clone, Copy)]
pub struct XcapGrabber;

impl ScreenGrabber for XcapGrabber {
    fn grab(&self, region: &Region) -> Result<DynamicImage, OcrError> {
        let fail = |reason: String| OcrError::Capture {
            region: *region,
            reason,
        };

        let monitor = Monitor::from_point(region.left, region.top)
            .map_err(|e| fail(format!("no monitor at {},{}: {}", region.left, region.top, e)))?;
        let bounds = Region::new(monitor.x(), monitor.y(), monitor.width(), monitor.height());
        log::debug!("Capturing {} from monitor at {}", region, bounds);

        let screen = monitor
            .capture_image()
            .map_err(|e| fail(format!("monitor capture failed: {}", e)))?;

        // capture is in physical pixels, monitor bounds may be logical
        let scale = if bounds.width == 0 {
            1.0
        } else {
            screen.width() as f64 / bounds.width as f64
        };

        let (x, y, width, height) =
            clip_to_bounds(region, &bounds).ok_or_else(|| fail("region is off screen".into()))?;
        let scaled = |v: u32| (v as f64 * scale).round() as u32;
        let (x, y) = (scaled(x), scaled(y));
        let width = scaled(width).min(screen.width().saturating_sub(x));
        let height = scaled(height).min(screen.height().saturating_sub(y));
        if width == 0 || height == 0 {
            return Err(fail("region is off screen".into()));
        }

        let cropped = image::imageops::crop_imm(&screen, x, y, width, height).to_image();
        Ok(DynamicImage::ImageRgba8(cropped))
    }
}

/// Offset and size of `region` inside `bounds`, relative to the bounds'
/// origin, or `None` when they do not overlap.
pub fn clip_to_bounds(region: &Region, bounds: &Region) -> Option<(u32, u32, u32, u32)> {
    let left = (region.left as i64).max(bounds.left as i64);
    let top = (region.top as i64).max(bounds.top as i64);
    let right = region.right().min(bounds.right());
    let bottom = region.bottom().min(bounds.bottom());
    if right <= left || bottom <= top {
        return None;
    }
    Some((
        (left - bounds.left as i64) as u32,
        (top - bounds.top as i64) as u32,
        (right - left) as u32,
        (bottom - top) as u32,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_inside_monitor_is_offset_to_monitor_origin() {
        let monitor = Region::new(1920, 0, 1280, 1024);
        assert_eq!(
            clip_to_bounds(&Region::new(2000, 100, 300, 40), &monitor),
            Some((80, 100, 300, 40))
        );
    }

    #[test]
    fn region_crossing_the_edge_is_clipped() {
        let monitor = Region::new(0, 0, 800, 600);
        assert_eq!(
            clip_to_bounds(&Region::new(700, 550, 300, 100), &monitor),
            Some((700, 550, 100, 50))
        );
        assert_eq!(
            clip_to_bounds(&Region::new(-50, -10, 100, 20), &monitor),
            Some((0, 0, 50, 10))
        );
    }

    #[test]
    fn region_off_monitor_is_rejected() {
        let monitor = Region::new(0, 0, 800, 600);
        assert_eq!(clip_to_bounds(&Region::new(800, 0, 10, 10), &monitor), None);
        assert_eq!(clip_to_bounds(&Region::new(10, 10, 0, 10), &monitor), None);
    }
}
