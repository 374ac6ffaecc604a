pub mod figure_ui;

pub use figure_ui::{FigureView, ZoomMode};
