use crate::classifier::interface::ClassifyError;
use image::DynamicImage;

/// Channel intensities of one sampled pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelSample {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// Sampling aims for roughly this many pixels per image, whatever the
/// resolution. The stride grows with the pixel count.
pub const TARGET_SAMPLE_COUNT: usize = 8_000;

/// Subsample the image into a pixel stream for scoring.
///
/// Rejects zero-dimension images before touching any pixel data.
pub fn sample_pixels(image: &DynamicImage) -> Result<Vec<PixelSample>, ClassifyError> {
    if image.width() == 0 || image.height() == 0 {
        return Err(ClassifyError::InvalidImage(
            "image has zero width or height".to_string(),
        ));
    }

    let rgb = image.to_rgb8();
    let total_pixels = rgb.width() as usize * rgb.height() as usize;
    let stride = (total_pixels / TARGET_SAMPLE_COUNT).max(1);

    let samples = rgb
        .pixels()
        .step_by(stride)
        .map(|pixel| PixelSample {
            red: pixel[0],
            green: pixel[1],
            blue: pixel[2],
        })
        .collect();

    Ok(samples)
}
