#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MousePosition {
    pub x: i32,
    pub y: i32,
}

pub trait MousePositionProvider: Send + Sync {
    fn get_current_mouse_position(&self) -> Result<MousePosition, String>;
}
