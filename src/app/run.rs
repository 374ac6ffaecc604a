//! Top-level entry point for running the plotter as a native window.

use eframe::egui;

use crate::config::FnPlotConfig;
use crate::dialog::NativePrompter;

use super::FnPlotApp;

/// Open the main window and run the event loop until it is closed.
pub fn run_fnplot(config: FnPlotConfig) -> eframe::Result<()> {
    let title = config.title.clone();
    let [w, h] = config.window_size;
    let mut viewport = egui::ViewportBuilder::default()
        .with_title(title.clone())
        .with_inner_size(egui::vec2(w, h));
    if let Some(icon) = load_app_icon_svg() {
        viewport = viewport.with_icon(icon);
    }
    let opts = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let app = FnPlotApp::new(config, Box::new(NativePrompter));
    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            // Phosphor icons are used by the navigation toolbar.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}

/// Render the bundled `icon.svg` into an [`egui::IconData`].
///
/// Returns `None` if the file does not exist or cannot be parsed/rendered.
fn load_app_icon_svg() -> Option<egui::IconData> {
    let svg_path = concat!(env!("CARGO_MANIFEST_DIR"), "/icon.svg");
    let data = std::fs::read(svg_path).ok()?;

    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(&data, &opt).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    let mut canvas = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::default(), &mut canvas);
    let rgba = pixmap.take();
    Some(egui::IconData {
        rgba,
        width: size.width(),
        height: size.height(),
    })
}
