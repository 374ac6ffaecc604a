use egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot};

use crate::plotter::Figure;

/// Axes the navigation toolbar lets the user zoom.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ZoomMode {
    Off,
    X,
    Y,
    Both,
}

impl ZoomMode {
    fn axes(self) -> egui::Vec2b {
        match self {
            ZoomMode::Off => egui::Vec2b::new(false, false),
            ZoomMode::X => egui::Vec2b::new(true, false),
            ZoomMode::Y => egui::Vec2b::new(false, true),
            ZoomMode::Both => egui::Vec2b::new(true, true),
        }
    }
}

// Default matplotlib colour cycle, so a series keeps one colour across its segments.
const PALETTE: [(u8, u8, u8); 10] = [
    (31, 119, 180),
    (255, 127, 14),
    (44, 160, 44),
    (214, 39, 40),
    (148, 103, 189),
    (140, 86, 75),
    (227, 119, 194),
    (127, 127, 127),
    (188, 189, 34),
    (23, 190, 207),
];

pub fn series_color(index: usize) -> Color32 {
    let (r, g, b) = PALETTE[index % PALETTE.len()];
    Color32::from_rgb(r, g, b)
}

/// A displayed figure together with its navigation toolbar state.
pub struct FigureView {
    figure: Figure,
    pub zoom_mode: ZoomMode,
    pub pan: bool,
    reset_view: bool,
    pointer: Option<[f64; 2]>,
}

impl FigureView {
    pub fn new(figure: Figure) -> Self {
        Self {
            figure,
            zoom_mode: ZoomMode::Both,
            pan: true,
            reset_view: false,
            pointer: None,
        }
    }

    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    /// Fit the view to the data again on the next frame.
    pub fn request_reset(&mut self) {
        self.reset_view = true;
    }

    pub fn render(&mut self, ui: &mut Ui) {
        egui::TopBottomPanel::bottom("fnplot_navigation")
            .show_inside(ui, |ui| self.render_toolbar(ui));
        egui::CentralPanel::default().show_inside(ui, |ui| {
            ui.vertical_centered(|ui| ui.heading(&self.figure.style.title));
            self.render_plot(ui);
        });
    }

    fn render_toolbar(&mut self, ui: &mut Ui) {
        use egui_phosphor::regular::{ARROWS_OUT_CARDINAL, HOUSE, MAGNIFYING_GLASS_PLUS};

        ui.horizontal(|ui| {
            if ui
                .button(HOUSE)
                .on_hover_text("Reset original view")
                .clicked()
            {
                self.request_reset();
            }
            ui.toggle_value(&mut self.pan, ARROWS_OUT_CARDINAL)
                .on_hover_text("Pan with left mouse button");
            ui.separator();
            ui.label(MAGNIFYING_GLASS_PLUS);
            ui.selectable_value(&mut self.zoom_mode, ZoomMode::Off, "Off");
            ui.selectable_value(&mut self.zoom_mode, ZoomMode::X, "X");
            ui.selectable_value(&mut self.zoom_mode, ZoomMode::Y, "Y");
            ui.selectable_value(&mut self.zoom_mode, ZoomMode::Both, "Both");
            ui.separator();
            if let Some([x, y]) = self.pointer {
                ui.monospace(format!("x={:.4}  y={:.4}", x, y));
            }
        });
    }

    fn render_plot(&mut self, ui: &mut Ui) {
        let style = &self.figure.style;
        let mut plot = Plot::new("fnplot_figure")
            .x_axis_label(style.x_label.clone())
            .y_axis_label(style.y_label.clone())
            .allow_drag(self.pan)
            .allow_scroll(self.pan)
            .allow_zoom(self.zoom_mode.axes())
            .allow_boxed_zoom(self.zoom_mode != ZoomMode::Off);
        if style.show_legend {
            plot = plot.legend(Legend::default());
        }
        if std::mem::take(&mut self.reset_view) {
            plot = plot.reset();
        }

        let width = style.line_width;
        let series = &self.figure.series;
        let resp = plot.show(ui, |plot_ui| {
            for (i, s) in series.iter().enumerate() {
                let color = series_color(i);
                for segment in s.segments() {
                    plot_ui.line(
                        Line::new(s.label.as_str(), segment.to_vec())
                            .color(color)
                            .width(width),
                    );
                }
            }
            plot_ui.pointer_coordinate().map(|p| [p.x, p.y])
        });
        self.pointer = resp.inner;
    }
}
