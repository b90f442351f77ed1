use std::fmt;

use crate::global_constants::LOG_TAG_SCREEN_REGION;

/// Rectangle of the screen to monitor, in absolute screen coordinates.
///
/// The corners are kept exactly as the user dragged them, so `x1` may be
/// greater than `x2`. Use the normalized accessors for capture math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenRegion {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl ScreenRegion {
    pub fn from_corners(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        log::debug!(
            "{} creating region ({}, {}) -> ({}, {})",
            LOG_TAG_SCREEN_REGION,
            x1,
            y1,
            x2,
            y2
        );

        Self { x1, y1, x2, y2 }
    }

    pub fn left(&self) -> i32 {
        self.x1.min(self.x2)
    }

    pub fn top(&self) -> i32 {
        self.y1.min(self.y2)
    }

    pub fn width(&self) -> u32 {
        self.x1.abs_diff(self.x2)
    }

    pub fn height(&self) -> u32 {
        self.y1.abs_diff(self.y2)
    }

    pub fn is_degenerate(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }
}

impl fmt::Display for ScreenRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} at ({}, {})",
            self.width(),
            self.height(),
            self.left(),
            self.top()
        )
    }
}
