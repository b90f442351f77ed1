use crate::core::models::{MonitorError, ScreenRegion};
use crate::global_constants::LOG_TAG_SELECTION;

/// Press-drag-release state for picking a region, in screen coordinates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionGesture {
    start: Option<(i32, i32)>,
    current: Option<(i32, i32)>,
    completed: Option<ScreenRegion>,
}

impl SelectionGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, x: i32, y: i32) {
        log::debug!("{} gesture started at ({}, {})", LOG_TAG_SELECTION, x, y);
        self.start = Some((x, y));
        self.current = Some((x, y));
        self.completed = None;
    }

    /// Only used for live feedback; has no effect before `begin`.
    pub fn drag(&mut self, x: i32, y: i32) {
        if self.is_dragging() {
            self.current = Some((x, y));
        }
    }

    pub fn end(&mut self, x: i32, y: i32) -> Option<ScreenRegion> {
        let (start_x, start_y) = self.start.take()?;
        self.current = None;

        let region = ScreenRegion::from_corners(start_x, start_y, x, y);
        log::debug!("{} gesture finished with region {}", LOG_TAG_SELECTION, region);
        self.completed = Some(region);
        Some(region)
    }

    pub fn cancel(&mut self) {
        self.start = None;
        self.current = None;
        self.completed = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.start.is_some()
    }

    /// Rectangle currently being dragged, for drawing the outline.
    pub fn preview(&self) -> Option<ScreenRegion> {
        match (self.start, self.current) {
            (Some((x1, y1)), Some((x2, y2))) => Some(ScreenRegion { x1, y1, x2, y2 }),
            _ => None,
        }
    }

    pub fn into_selection(self) -> Result<ScreenRegion, MonitorError> {
        self.completed.ok_or(MonitorError::SelectionAborted)
    }
}
