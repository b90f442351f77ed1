use image::RgbaImage;

use crate::core::models::MonitorError;

/// One RGBA capture of the monitored region.
#[derive(Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    raw_data: Vec<u8>,
}

impl std::fmt::Debug for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Frame")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl Frame {
    pub fn build_from_raw_data(width_pixels: u32, height_pixels: u32, raw_rgba_data: Vec<u8>) -> Self {
        Self {
            width: width_pixels,
            height: height_pixels,
            raw_data: raw_rgba_data,
        }
    }

    pub fn build_from_rgba_image(image: RgbaImage) -> Self {
        let width_pixels = image.width();
        let height_pixels = image.height();
        Self::build_from_raw_data(width_pixels, height_pixels, image.into_raw())
    }

    pub fn empty() -> Self {
        Self::build_from_raw_data(0, 0, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns true when any channel of any pixel differs from `previous`.
    ///
    /// Two empty frames never count as changed.
    pub fn detect_change(&self, previous: &Frame) -> Result<bool, MonitorError> {
        if self.dimensions() != previous.dimensions() {
            return Err(MonitorError::DimensionMismatch {
                previous: previous.dimensions(),
                current: self.dimensions(),
            });
        }

        Ok(self.raw_data != previous.raw_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_frame(width: u32, height: u32, value: u8) -> Frame {
        Frame::build_from_raw_data(width, height, vec![value; (width * height * 4) as usize])
    }

    #[test]
    fn test_identical_frames_report_no_change() {
        let previous = solid_frame(40, 20, 128);
        let current = solid_frame(40, 20, 128);

        assert_eq!(current.detect_change(&previous), Ok(false));
    }

    #[test]
    fn test_single_channel_difference_reports_change() {
        let previous = solid_frame(40, 20, 128);
        let mut raw = vec![128u8; 40 * 20 * 4];
        raw[40 * 4 * 7 + 13] = 129;
        let current = Frame::build_from_raw_data(40, 20, raw);

        assert_eq!(current.detect_change(&previous), Ok(true));
    }

    #[test]
    fn test_alpha_only_difference_reports_change() {
        let previous = solid_frame(2, 2, 0);
        let mut raw = vec![0u8; 16];
        raw[15] = 255;
        let current = Frame::build_from_raw_data(2, 2, raw);

        assert_eq!(current.detect_change(&previous), Ok(true));
    }

    #[test]
    fn test_mismatched_dimensions_fail_with_both_sizes() {
        let previous = solid_frame(40, 20, 0);
        let current = solid_frame(20, 40, 0);

        assert_eq!(
            current.detect_change(&previous),
            Err(MonitorError::DimensionMismatch {
                previous: (40, 20),
                current: (20, 40),
            })
        );
    }

    #[test]
    fn test_empty_frames_compare_as_unchanged() {
        let previous = Frame::empty();
        let current = Frame::empty();

        assert!(current.is_empty());
        assert_eq!(current.detect_change(&previous), Ok(false));
    }

    #[test]
    fn test_build_from_rgba_image_keeps_dimensions() {
        let image = RgbaImage::from_pixel(7, 3, image::Rgba([1, 2, 3, 4]));

        let frame = Frame::build_from_rgba_image(image);

        assert_eq!(frame.dimensions(), (7, 3));
        assert!(!frame.is_empty());
    }

    #[test]
    fn test_debug_output_omits_pixel_data() {
        let frame = solid_frame(3, 3, 9);

        let debug = format!("{:?}", frame);

        assert_eq!(debug, "Frame { width: 3, height: 3 }");
    }
}
