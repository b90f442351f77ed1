mod mouse_position_provider;
mod screen_capturer;

pub use mouse_position_provider::{MousePosition, MousePositionProvider};
pub use screen_capturer::ScreenCapturer;
