use anyhow::Result;

use crate::core::models::{Frame, MonitorGeometry, ScreenRegion};

pub trait ScreenCapturer: Send + Sync {
    fn capture_region(&self, region: &ScreenRegion) -> Result<Frame>;

    fn monitor_geometry_at(&self, x: i32, y: i32) -> Result<MonitorGeometry>;
}
