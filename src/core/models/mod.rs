mod frame;
mod monitor_error;
mod monitor_event;
mod monitor_geometry;
mod sample_window;
mod screen_region;
mod selection_gesture;
mod user_settings;

pub use frame::Frame;
pub use monitor_error::MonitorError;
pub use monitor_event::MonitorEvent;
pub use monitor_geometry::{MonitorGeometry, PixelRect};
pub use sample_window::{EmittedMetric, SampleWindow, WindowPeriod};
pub use screen_region::ScreenRegion;
pub use selection_gesture::SelectionGesture;
pub use user_settings::{ThemeMode, UserSettings};
