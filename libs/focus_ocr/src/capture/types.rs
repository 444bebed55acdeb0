use image::DynamicImage;

use crate::common::{OcrError, Region};

/// Source of screen pixels. The pixels come back untouched: no scaling,
/// no colour conversion.
pub trait ScreenGrabber {
    fn grab(&self, region: &Region) -> Result<DynamicImage, OcrError>;
}
