//! The closed set of user commands and the router that runs them.
//!
//! Buttons, shortcuts and menu entries all resolve to a [`Command`]; the
//! [`CommandRouter`] owns the session (the expression list recorded at the last
//! plot or load) and the displayed figure.

use std::fmt;

use crate::buttons::ButtonRegistry;
use crate::data::session::{self, Session};
use crate::dialog::{ConfirmationDialog, Prompter};
use crate::entries::{EntryCollection, RemoveOutcome};
use crate::panels::figure_ui::FigureView;
use crate::plotter::{ExpressionPlotter, Figure};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    Plot,
    AddFunc,
    RmFunc,
    SaveAs,
    LoadFile,
}

impl Command {
    pub const ALL: [Command; 5] = [
        Command::Plot,
        Command::AddFunc,
        Command::RmFunc,
        Command::SaveAs,
        Command::LoadFile,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::Plot => "plot",
            Command::AddFunc => "add_func",
            Command::RmFunc => "rm_func",
            Command::SaveAs => "save_as",
            Command::LoadFile => "load_file",
        }
    }

    pub fn from_name(name: &str) -> Option<Command> {
        Command::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Default text for the button or menu entry.
    pub fn label(self) -> &'static str {
        match self {
            Command::Plot => "Plot",
            Command::AddFunc => "Add function",
            Command::RmFunc => "Remove function",
            Command::SaveAs => "Save as...",
            Command::LoadFile => "Load file",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything a command may touch besides the router's own state.
pub struct Workspace<'a> {
    pub entries: &'a mut EntryCollection,
    pub buttons: &'a mut ButtonRegistry,
    pub plotter: &'a ExpressionPlotter,
    pub dialogs: &'a mut dyn Prompter,
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

#[derive(Default)]
pub struct CommandRouter {
    session: Session,
    view: Option<FigureView>,
}

impl CommandRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn execute(&mut self, command: Command, ws: Workspace<'_>) {
        tracing::info!(command = command.name(), "executing command");
        match command {
            Command::Plot => self.plot(ws),
            Command::AddFunc => self.add_func(ws),
            Command::RmFunc => self.rm_func(ws),
            Command::SaveAs => self.save_as(ws),
            Command::LoadFile => self.load_from_file(ws),
        }
    }

    /// Record every field into the session and plot the non-blank ones.
    ///
    /// At most one "empty line" notice is shown per call. On an evaluation
    /// error the previous figure and the Plot button stay as they are.
    pub fn plot(&mut self, mut ws: Workspace<'_>) {
        self.session.reset();
        let mut expressions = Vec::new();
        let mut blank_reported = false;
        for text in ws.entries.texts() {
            self.session.push(text);
            if !is_blank(text) {
                expressions.push(text.to_string());
            } else if !blank_reported {
                ws.dialogs.show(&ConfirmationDialog::info(
                    "Empty line",
                    "One of the fields is empty. It is skipped when plotting, \
                     nothing else needs to be done. Just press OK :)",
                ));
                blank_reported = true;
            }
        }

        match ws.plotter.plot(&expressions) {
            Ok(figure) => {
                tracing::info!(series = figure.series.len(), "plotted");
                self.view = Some(FigureView::new(figure));
                ws.buttons.remove(Command::Plot);
            }
            Err(e) => {
                tracing::warn!("plot failed: {}", e);
                ws.dialogs
                    .show(&ConfirmationDialog::error("Plot failed", e.to_string()));
            }
        }
    }

    pub fn add_func(&mut self, mut ws: Workspace<'_>) {
        self.discard_figure();
        ws.entries.add_entry(ws.buttons);
    }

    pub fn rm_func(&mut self, mut ws: Workspace<'_>) {
        self.discard_figure();
        let outcome = ws.entries.remove_entry(ws.dialogs, ws.buttons);
        if outcome != RemoveOutcome::Removed {
            tracing::debug!(?outcome, "field not removed");
        }
    }

    /// Write the session to a user-chosen file. Cancelling the picker is a no-op.
    pub fn save_as(&mut self, mut ws: Workspace<'_>) {
        let Some(path) = ws.dialogs.pick_save_path(&session::default_file_name()) else {
            tracing::info!("save cancelled");
            return;
        };
        let path = session::with_default_extension(path);
        match self.session.save_to_path(&path) {
            Ok(()) => tracing::info!(path = %path.display(), "session saved"),
            Err(e) => {
                tracing::warn!("saving session failed: {}", e);
                ws.dialogs
                    .show(&ConfirmationDialog::error("Save failed", e.to_string()));
            }
        }
    }

    /// Replace all fields with the expressions of a user-chosen session file.
    ///
    /// Cancelling the picker or a file that fails to load leaves everything as it was.
    pub fn load_from_file(&mut self, mut ws: Workspace<'_>) {
        let Some(path) = ws.dialogs.pick_open_path() else {
            tracing::info!("load cancelled");
            return;
        };
        let loaded = match Session::load_from_path(&path) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!("loading session failed: {}", e);
                ws.dialogs
                    .show(&ConfirmationDialog::error("Load failed", e.to_string()));
                return;
            }
        };
        tracing::info!(path = %path.display(), functions = loaded.len(), "session loaded");

        self.session = loaded;
        self.discard_figure();
        ws.entries.reset_list();
        for expression in &self.session.list_of_function {
            ws.entries.add_entry_with_text(expression.clone(), ws.buttons);
        }
        if ws.entries.is_empty() {
            ws.entries.add_entry(ws.buttons);
        }
        ws.entries.focus_first();
    }

    fn discard_figure(&mut self) {
        if self.view.take().is_some() {
            tracing::debug!("figure discarded");
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn figure(&self) -> Option<&Figure> {
        self.view.as_ref().map(FigureView::figure)
    }

    pub fn view_mut(&mut self) -> Option<&mut FigureView> {
        self.view.as_mut()
    }
}
