use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

use crate::core::models::{ThemeMode, WindowPeriod};

const BUTTON_RADIUS: f32 = 5.0;
const PANE_RADIUS: f32 = 5.0;

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.0, 0.0, 0.0),
                text: Color::from_rgb(1.0, 1.0, 1.0),
                primary: Color::from_rgb(0.333, 0.333, 0.333),
                success: Color::from_rgb(0.2, 0.9, 0.4),
                danger: Color::from_rgb(1.0, 0.3, 0.3),
                warning: Color::from_rgb(1.0, 0.9, 0.0),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.95, 0.95, 0.97),
                text: Color::from_rgb(0.1, 0.1, 0.1),
                primary: Color::from_rgb(0.6, 0.6, 0.6),
                success: Color::from_rgb(0.1, 0.6, 0.2),
                danger: Color::from_rgb(0.8, 0.1, 0.1),
                warning: Color::from_rgb(0.7, 0.55, 0.0),
            },
        ),
    }
}

/// Value colour of each pane: red for 2s, yellow for 5s, green for 10s.
pub fn pane_text_color(mode: &ThemeMode, period: WindowPeriod) -> Color {
    let palette = get_theme(mode).palette();
    match period {
        WindowPeriod::TwoSeconds => palette.danger,
        WindowPeriod::FiveSeconds => palette.warning,
        WindowPeriod::TenSeconds => palette.success,
    }
}

pub fn pane_container_style(mode: &ThemeMode) -> container::Style {
    let background = match mode {
        ThemeMode::Dark => Color::from_rgb(0.2, 0.2, 0.2),
        ThemeMode::Light => Color::from_rgb(0.88, 0.88, 0.9),
    };

    container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: background,
            width: 0.0,
            radius: PANE_RADIUS.into(),
        },
        ..Default::default()
    }
}

pub fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    shaded_button_style(
        status,
        Color::from_rgb(0.333, 0.333, 0.333),
        Color::from_rgb(0.42, 0.42, 0.42),
        Color::from_rgb(0.25, 0.25, 0.25),
        Color::WHITE,
    )
}

pub fn secondary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    shaded_button_style(
        status,
        Color::from_rgb(0.25, 0.25, 0.25),
        Color::from_rgb(0.35, 0.35, 0.35),
        Color::from_rgb(0.2, 0.2, 0.2),
        Color::from_rgb(0.85, 0.85, 0.85),
    )
}

fn shaded_button_style(
    status: button::Status,
    active: Color,
    hovered: Color,
    pressed: Color,
    text_color: Color,
) -> button::Style {
    let (background, text_color, snap) = match status {
        button::Status::Active => (active, text_color, false),
        button::Status::Hovered => (hovered, text_color, false),
        button::Status::Pressed => (pressed, text_color, true),
        button::Status::Disabled => (
            Color::from_rgb(0.3, 0.3, 0.3),
            Color::from_rgb(0.5, 0.5, 0.5),
            false,
        ),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: background,
            width: 1.0,
            radius: BUTTON_RADIUS.into(),
        },
        shadow: Shadow::default(),
        snap,
    }
}
