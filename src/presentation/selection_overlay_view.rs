use iced::mouse;
use iced::widget::{canvas, container};
use iced::{Color, Element, Length, Point, Rectangle, Size};

use crate::core::models::{MonitorError, MonitorGeometry, ScreenRegion, SelectionGesture};
use crate::global_constants::LOG_TAG_OVERLAY;

/// Full-monitor translucent overlay that turns a drag into a `ScreenRegion`.
pub struct SelectionOverlayView {
    geometry: MonitorGeometry,
    gesture: SelectionGesture,
    overlay_opacity: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionOverlayMessage {
    GestureStarted(i32, i32),
    GestureDragged(i32, i32),
    GestureFinished(i32, i32),
    CancelRequested,
}

impl SelectionOverlayView {
    pub fn build(geometry: MonitorGeometry, overlay_opacity: f32) -> Self {
        log::debug!("{} building overlay for {:?}", LOG_TAG_OVERLAY, geometry);
        Self {
            geometry,
            gesture: SelectionGesture::new(),
            overlay_opacity,
        }
    }

    /// Returns the region once the gesture has been released.
    pub fn update(&mut self, message: SelectionOverlayMessage) -> Option<ScreenRegion> {
        match message {
            SelectionOverlayMessage::GestureStarted(x, y) => {
                self.gesture.begin(x, y);
                None
            }
            SelectionOverlayMessage::GestureDragged(x, y) => {
                self.gesture.drag(x, y);
                None
            }
            SelectionOverlayMessage::GestureFinished(x, y) => self.gesture.end(x, y),
            SelectionOverlayMessage::CancelRequested => {
                self.gesture.cancel();
                None
            }
        }
    }

    pub fn into_selection(self) -> Result<ScreenRegion, MonitorError> {
        self.gesture.into_selection()
    }

    pub fn render_ui(&self) -> Element<'_, SelectionOverlayMessage> {
        container(canvas(self).width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn to_screen(&self, position: Point, bounds: Rectangle) -> (i32, i32) {
        self.geometry
            .surface_to_screen((position.x, position.y), (bounds.width, bounds.height))
    }

    fn preview_rectangle(&self, bounds: Rectangle) -> Option<(Point, Size)> {
        let preview = self.gesture.preview()?;
        let surface_size = (bounds.width, bounds.height);
        let (start_x, start_y) = self
            .geometry
            .screen_to_surface((preview.x1, preview.y1), surface_size);
        let (end_x, end_y) = self
            .geometry
            .screen_to_surface((preview.x2, preview.y2), surface_size);

        Some((
            Point::new(start_x.min(end_x), start_y.min(end_y)),
            Size::new((start_x - end_x).abs(), (start_y - end_y).abs()),
        ))
    }
}

impl canvas::Program<SelectionOverlayMessage> for SelectionOverlayView {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<canvas::Action<SelectionOverlayMessage>> {
        match event {
            iced::Event::Mouse(mouse_event) => {
                let position = cursor.position_in(bounds)?;
                let (x, y) = self.to_screen(position, bounds);

                match mouse_event {
                    mouse::Event::ButtonPressed(mouse::Button::Left) => Some(
                        canvas::Action::publish(SelectionOverlayMessage::GestureStarted(x, y)),
                    ),
                    mouse::Event::CursorMoved { .. } if self.gesture.is_dragging() => Some(
                        canvas::Action::publish(SelectionOverlayMessage::GestureDragged(x, y)),
                    ),
                    mouse::Event::ButtonReleased(mouse::Button::Left)
                        if self.gesture.is_dragging() =>
                    {
                        Some(canvas::Action::publish(
                            SelectionOverlayMessage::GestureFinished(x, y),
                        ))
                    }
                    _ => None,
                }
            }
            iced::Event::Keyboard(iced::keyboard::Event::KeyPressed {
                key: iced::keyboard::Key::Named(iced::keyboard::key::Named::Escape),
                ..
            }) => Some(canvas::Action::publish(
                SelectionOverlayMessage::CancelRequested,
            )),
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry<iced::Renderer>> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgba(0.0, 0.0, 0.0, self.overlay_opacity),
        );

        if let Some((top_left, size)) = self.preview_rectangle(bounds) {
            let selection_path = canvas::Path::rectangle(top_left, size);
            frame.stroke(
                &selection_path,
                canvas::Stroke::default()
                    .with_color(Color::from_rgb(1.0, 0.0, 0.0))
                    .with_width(2.0),
            );
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_overlay() -> SelectionOverlayView {
        SelectionOverlayView::build(
            MonitorGeometry {
                x: 0,
                y: 0,
                width: 1920,
                height: 1080,
            },
            0.3,
        )
    }

    #[test]
    fn test_release_completes_selection() {
        let mut overlay = test_overlay();

        assert!(overlay
            .update(SelectionOverlayMessage::GestureStarted(100, 100))
            .is_none());
        assert!(overlay
            .update(SelectionOverlayMessage::GestureDragged(150, 120))
            .is_none());
        let region = overlay.update(SelectionOverlayMessage::GestureFinished(400, 300));

        assert_eq!(region, Some(ScreenRegion::from_corners(100, 100, 400, 300)));
        assert_eq!(overlay.into_selection(), region.ok_or(MonitorError::SelectionAborted));
    }

    #[test]
    fn test_cancel_leaves_nothing_selected() {
        let mut overlay = test_overlay();
        overlay.update(SelectionOverlayMessage::GestureStarted(100, 100));

        overlay.update(SelectionOverlayMessage::CancelRequested);

        assert_eq!(overlay.into_selection(), Err(MonitorError::SelectionAborted));
    }

    #[test]
    fn test_preview_rectangle_maps_back_to_surface() {
        let mut overlay = test_overlay();
        overlay.update(SelectionOverlayMessage::GestureStarted(400, 300));
        overlay.update(SelectionOverlayMessage::GestureDragged(200, 100));
        let bounds = Rectangle::new(Point::ORIGIN, Size::new(960.0, 540.0));

        let (top_left, size) = overlay.preview_rectangle(bounds).unwrap();

        assert_eq!(top_left, Point::new(100.0, 50.0));
        assert_eq!(size, Size::new(100.0, 100.0));
    }

    #[test]
    fn test_to_screen_scales_canvas_point() {
        let overlay = test_overlay();
        let bounds = Rectangle::new(Point::ORIGIN, Size::new(960.0, 540.0));

        assert_eq!(overlay.to_screen(Point::new(10.0, 20.0), bounds), (20, 40));
    }
}
