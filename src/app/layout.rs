use eframe::egui;

use crate::commands::Command;
use crate::data::hotkeys::format_button_tooltip;

use super::FnPlotApp;

impl FnPlotApp {
    /// Commands whose shortcut was pressed this frame.
    ///
    /// Matching key events are consumed before any text field runs, so Enter
    /// and Ctrl+A reach the command rather than the focused field.
    fn take_shortcuts(&self, ctx: &egui::Context) -> Vec<Command> {
        let bindings: Vec<_> = self.buttons.bindings().collect();
        ctx.input_mut(|input| {
            bindings
                .iter()
                .filter(|(hk, _)| hk.consume(input))
                .map(|(_, cmd)| *cmd)
                .collect()
        })
    }

    fn render_menu(&mut self, ctx: &egui::Context) -> Option<Command> {
        if self.file_menu.is_empty() {
            return None;
        }
        let mut clicked = None;
        egui::TopBottomPanel::top("fnplot_menu").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    for item in &self.file_menu {
                        let mut button = egui::Button::new(item.label.as_str());
                        if let Some(hk) = self.buttons.hotkey_for(item.command) {
                            button = button.shortcut_text(hk.to_string());
                        }
                        if ui.add(button).clicked() {
                            clicked = Some(item.command);
                            ui.close();
                        }
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });
        clicked
    }

    fn render_fields(&mut self, ctx: &egui::Context) -> Option<Command> {
        let mut clicked = None;
        egui::SidePanel::left("fnplot_fields")
            .resizable(true)
            .default_width(320.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                let focus_request = self.entries.take_focus_request();
                let mut focused = None;
                let mut edited = false;
                egui::ScrollArea::vertical()
                    .max_height((ui.available_height() - 40.0).max(0.0))
                    .show(ui, |ui| {
                        for field in self.entries.fields_mut() {
                            let id = field.id();
                            let resp = ui.add(
                                egui::TextEdit::singleline(&mut field.text)
                                    .id(id.egui_id())
                                    .hint_text("f(x), e.g. sin(x)")
                                    .desired_width(f32::INFINITY),
                            );
                            if focus_request == Some(id) {
                                resp.request_focus();
                            }
                            if resp.has_focus() {
                                focused = Some(id);
                            }
                            edited |= resp.changed();
                        }
                    });
                if let Some(id) = focused {
                    self.entries.note_focus(id);
                }
                // The displayed chart no longer matches the fields.
                if edited && !self.buttons.contains(Command::Plot) {
                    self.entries.refresh_plot_button(&mut self.buttons);
                }

                ui.separator();
                ui.horizontal_wrapped(|ui| {
                    for button in self.buttons.iter() {
                        let hk = self.buttons.hotkey_for(button.command);
                        if ui
                            .button(button.label.as_str())
                            .on_hover_text(format_button_tooltip(&button.label, hk.as_ref()))
                            .clicked()
                        {
                            clicked = Some(button.command);
                        }
                    }
                });
            });
        clicked
    }

    fn render_figure(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| match self.router.view_mut() {
            Some(view) => view.render(ui),
            None => {
                ui.centered_and_justified(|ui| {
                    ui.weak("Enter functions of x and press Plot");
                });
            }
        });
    }
}

impl eframe::App for FnPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if ctx.input(|i| i.viewport().close_requested()) {
            tracing::info!("window closed, exiting");
            return;
        }

        for command in self.take_shortcuts(ctx) {
            self.execute(command);
        }

        let menu_command = self.render_menu(ctx);
        let button_command = self.render_fields(ctx);
        self.render_figure(ctx);

        for command in menu_command.into_iter().chain(button_command) {
            self.execute(command);
        }
        if menu_command.is_some() || button_command.is_some() {
            ctx.request_repaint();
        }
    }
}
