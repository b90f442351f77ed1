use anyhow::{Context, Result};

use crate::core::models::{Frame, MonitorGeometry, PixelRect, ScreenRegion};
use crate::core::ports::ScreenCapturer;
use crate::global_constants::{
    ERROR_CONTEXT_CAPTURE_MONITOR, ERROR_CONTEXT_FIND_MONITOR, ERROR_CONTEXT_MONITOR_GEOMETRY,
    LOG_TAG_CAPTURE,
};

pub struct XcapScreenCapturer;

impl XcapScreenCapturer {
    pub fn initialize() -> Self {
        log::debug!("{} initializing xcap screen capturer", LOG_TAG_CAPTURE);
        Self
    }

    fn get_monitor_for_region(&self, region: &ScreenRegion) -> Result<xcap::Monitor> {
        xcap::Monitor::from_point(region.left(), region.top()).with_context(|| {
            format!(
                "{} at ({}, {})",
                ERROR_CONTEXT_FIND_MONITOR,
                region.left(),
                region.top()
            )
        })
    }

    fn read_monitor_geometry(&self, monitor: &xcap::Monitor) -> Result<MonitorGeometry> {
        Ok(MonitorGeometry {
            x: monitor.x().context(ERROR_CONTEXT_MONITOR_GEOMETRY)?,
            y: monitor.y().context(ERROR_CONTEXT_MONITOR_GEOMETRY)?,
            width: monitor.width().context(ERROR_CONTEXT_MONITOR_GEOMETRY)?,
            height: monitor.height().context(ERROR_CONTEXT_MONITOR_GEOMETRY)?,
        })
    }

    fn capture_monitor_image(&self, monitor: &xcap::Monitor) -> Result<image::RgbaImage> {
        monitor
            .capture_image()
            .with_context(|| ERROR_CONTEXT_CAPTURE_MONITOR)
    }

    fn crop_image_to_frame(&self, image: &image::RgbaImage, pixel_rect: PixelRect) -> Frame {
        let cropped = image::imageops::crop_imm(
            image,
            pixel_rect.x,
            pixel_rect.y,
            pixel_rect.width,
            pixel_rect.height,
        )
        .to_image();

        Frame::build_from_rgba_image(cropped)
    }
}

impl ScreenCapturer for XcapScreenCapturer {
    fn capture_region(&self, region: &ScreenRegion) -> Result<Frame> {
        if region.is_degenerate() {
            return Ok(Frame::empty());
        }

        let monitor = self.get_monitor_for_region(region)?;
        let geometry = self.read_monitor_geometry(&monitor)?;
        let captured_image = self.capture_monitor_image(&monitor)?;

        let pixel_rect = geometry
            .region_to_image_pixels(region, captured_image.width(), captured_image.height())
            .with_context(|| format!("Region {} is outside monitor {:?}", region, geometry))?;

        log::trace!(
            "{} captured {}x{} monitor image, cropping to {:?}",
            LOG_TAG_CAPTURE,
            captured_image.width(),
            captured_image.height(),
            pixel_rect
        );

        Ok(self.crop_image_to_frame(&captured_image, pixel_rect))
    }

    fn monitor_geometry_at(&self, x: i32, y: i32) -> Result<MonitorGeometry> {
        let monitor = xcap::Monitor::from_point(x, y)
            .with_context(|| format!("{} at ({}, {})", ERROR_CONTEXT_FIND_MONITOR, x, y))?;
        self.read_monitor_geometry(&monitor)
    }
}
