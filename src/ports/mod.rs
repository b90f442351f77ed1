mod mouse_position_provider;
mod xcap_screen_capturer;

pub use mouse_position_provider::SystemMousePositionProvider;
pub use xcap_screen_capturer::XcapScreenCapturer;
