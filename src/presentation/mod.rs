pub mod app_theme;
mod metric_panes;
mod selection_overlay_view;


pub use metric_panes::MetricPanes;
pub use selection_overlay_view::{SelectionOverlayMessage, SelectionOverlayView};
