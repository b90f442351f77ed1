use std::collections::VecDeque;

use iced::widget::{column, container, scrollable, text, Column, Row};
use iced::{Alignment, Element, Length};

use crate::core::models::{MonitorEvent, ThemeMode, WindowPeriod};
use crate::presentation::app_theme;

/// Newest-first history of one pane.
#[derive(Debug, Default)]
struct PaneHistory {
    lines: VecDeque<String>,
}

/// The three side-by-side result panes of the main window.
#[derive(Debug)]
pub struct MetricPanes {
    two_seconds: PaneHistory,
    five_seconds: PaneHistory,
    ten_seconds: PaneHistory,
    history_limit: usize,
}

impl MetricPanes {
    pub fn build(history_limit: usize) -> Self {
        Self {
            two_seconds: PaneHistory::default(),
            five_seconds: PaneHistory::default(),
            ten_seconds: PaneHistory::default(),
            history_limit: history_limit.max(1),
        }
    }

    pub fn record(&mut self, event: &MonitorEvent) {
        let history_limit = self.history_limit;
        let pane = self.pane_mut(event.period());
        pane.lines.push_front(event.display_text());
        pane.lines.truncate(history_limit);
    }

    pub fn clear(&mut self) {
        for period in WindowPeriod::ALL {
            self.pane_mut(period).lines.clear();
        }
    }

    pub fn lines(&self, period: WindowPeriod) -> Vec<&str> {
        self.pane(period).lines.iter().map(String::as_str).collect()
    }

    pub fn render_ui<'a, Message: 'a>(&'a self, theme_mode: &ThemeMode) -> Element<'a, Message> {
        let labels = Row::with_children(WindowPeriod::ALL.iter().map(
            |period| -> Element<'a, Message> {
                container(text(period.label()).size(18))
                    .center_x(Length::FillPortion(1))
                    .into()
            },
        ))
        .spacing(8);

        let panes = Row::with_children(
            WindowPeriod::ALL
                .iter()
                .map(|period| self.render_pane(*period, theme_mode)),
        )
        .spacing(8)
        .height(Length::Fill);

        column![labels, panes]
            .spacing(6)
            .align_x(Alignment::Center)
            .into()
    }

    fn render_pane<'a, Message: 'a>(
        &'a self,
        period: WindowPeriod,
        theme_mode: &ThemeMode,
    ) -> Element<'a, Message> {
        let value_color = app_theme::pane_text_color(theme_mode, period);

        let lines = Column::with_children(self.pane(period).lines.iter().map(
            |line| -> Element<'a, Message> {
                text(line.as_str())
                    .size(20)
                    .style(move |_theme: &iced::Theme| iced::widget::text::Style {
                        color: Some(value_color),
                    })
                    .into()
            },
        ))
        .spacing(2)
        .width(Length::Fill);

        let theme_mode = theme_mode.clone();

        container(scrollable(lines).height(Length::Fill))
            .padding(10)
            .width(Length::FillPortion(1))
            .height(Length::Fill)
            .style(move |_theme| app_theme::pane_container_style(&theme_mode))
            .into()
    }

    fn pane(&self, period: WindowPeriod) -> &PaneHistory {
        match period {
            WindowPeriod::TwoSeconds => &self.two_seconds,
            WindowPeriod::FiveSeconds => &self.five_seconds,
            WindowPeriod::TenSeconds => &self.ten_seconds,
        }
    }

    fn pane_mut(&mut self, period: WindowPeriod) -> &mut PaneHistory {
        match period {
            WindowPeriod::TwoSeconds => &mut self.two_seconds,
            WindowPeriod::FiveSeconds => &mut self.five_seconds,
            WindowPeriod::TenSeconds => &mut self.ten_seconds,
        }
    }
}
