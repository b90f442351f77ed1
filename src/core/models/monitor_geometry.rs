use crate::core::models::ScreenRegion;

/// Position and size of a monitor in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorGeometry {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Pixel rectangle inside a captured monitor image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl MonitorGeometry {
    /// Maps a point on a surface of `surface_size` covering this monitor to
    /// screen coordinates.
    pub fn surface_to_screen(&self, point: (f32, f32), surface_size: (f32, f32)) -> (i32, i32) {
        let (scale_x, scale_y) = self.surface_scale(surface_size);
        (
            self.x + (point.0 * scale_x).round() as i32,
            self.y + (point.1 * scale_y).round() as i32,
        )
    }

    pub fn screen_to_surface(&self, point: (i32, i32), surface_size: (f32, f32)) -> (f32, f32) {
        let (scale_x, scale_y) = self.surface_scale(surface_size);
        (
            (point.0 - self.x) as f32 / scale_x,
            (point.1 - self.y) as f32 / scale_y,
        )
    }

    /// Translates `region` into the pixel grid of an image captured from
    /// this monitor, clamped to the image. Returns `None` when nothing of the
    /// region lies on the image.
    pub fn region_to_image_pixels(
        &self,
        region: &ScreenRegion,
        image_width: u32,
        image_height: u32,
    ) -> Option<PixelRect> {
        if self.width == 0 || self.height == 0 {
            return None;
        }

        let scale_x = image_width as f64 / self.width as f64;
        let scale_y = image_height as f64 / self.height as f64;

        let left = ((region.left() - self.x) as f64 * scale_x).round();
        let top = ((region.top() - self.y) as f64 * scale_y).round();
        let right = left + (region.width() as f64 * scale_x).round();
        let bottom = top + (region.height() as f64 * scale_y).round();

        let clamped_left = left.clamp(0.0, image_width as f64) as u32;
        let clamped_top = top.clamp(0.0, image_height as f64) as u32;
        let clamped_right = right.clamp(0.0, image_width as f64) as u32;
        let clamped_bottom = bottom.clamp(0.0, image_height as f64) as u32;

        if clamped_right <= clamped_left || clamped_bottom <= clamped_top {
            return None;
        }

        Some(PixelRect {
            x: clamped_left,
            y: clamped_top,
            width: clamped_right - clamped_left,
            height: clamped_bottom - clamped_top,
        })
    }

    fn surface_scale(&self, surface_size: (f32, f32)) -> (f32, f32) {
        let scale_x = if surface_size.0 > 0.0 {
            self.width as f32 / surface_size.0
        } else {
            1.0
        };
        let scale_y = if surface_size.1 > 0.0 {
            self.height as f32 / surface_size.1
        } else {
            1.0
        };
        (scale_x, scale_y)
    }
}
