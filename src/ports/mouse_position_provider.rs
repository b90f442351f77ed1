use crate::core::ports::{MousePosition, MousePositionProvider};
use crate::global_constants::{LOG_TAG_MOUSE, MESSAGE_MOUSE_POSITION_FAILED};
use mouse_position::mouse_position::Mouse;

pub struct SystemMousePositionProvider;

impl SystemMousePositionProvider {
    pub fn initialize() -> Self {
        log::debug!("{} initializing mouse position provider", LOG_TAG_MOUSE);
        Self
    }

    fn query_system_mouse_position(&self) -> Mouse {
        Mouse::get_mouse_position()
    }

    fn convert_mouse_result(&self, mouse_result: Mouse) -> Result<MousePosition, String> {
        match mouse_result {
            Mouse::Position { x, y } => {
                log::debug!("{} current position: ({}, {})", LOG_TAG_MOUSE, x, y);
                Ok(MousePosition { x, y })
            }
            Mouse::Error => {
                log::warn!("{} {}", LOG_TAG_MOUSE, MESSAGE_MOUSE_POSITION_FAILED);
                Err(MESSAGE_MOUSE_POSITION_FAILED.to_string())
            }
        }
    }
}

impl MousePositionProvider for SystemMousePositionProvider {
    fn get_current_mouse_position(&self) -> Result<MousePosition, String> {
        let mouse_position_result = self.query_system_mouse_position();
        self.convert_mouse_result(mouse_position_result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_mouse_result_with_valid_position_returns_ok() {
        let provider = SystemMousePositionProvider::initialize();

        let result = provider.convert_mouse_result(Mouse::Position { x: 100, y: 200 });

        assert_eq!(result, Ok(MousePosition { x: 100, y: 200 }));
    }

    #[test]
    fn test_convert_mouse_result_with_error_returns_err() {
        let provider = SystemMousePositionProvider::initialize();

        let result = provider.convert_mouse_result(Mouse::Error);

        assert!(result.unwrap_err().contains("mouse position"));
    }

    #[test]
    fn test_convert_mouse_result_handles_negative_coordinates() {
        let provider = SystemMousePositionProvider::initialize();

        let result = provider.convert_mouse_result(Mouse::Position { x: -50, y: -100 });

        assert_eq!(result, Ok(MousePosition { x: -50, y: -100 }));
    }
}
