//! The main window: owns the fields, buttons, plotter and command router and
//! wires UI events to commands.
//!
//! | Sub-module | Responsibility |
//! | ---------- | -------------- |
//! | [`layout`] | Per-frame rendering: menu bar, field column, figure, shortcut dispatch |
//! | [`run`]    | Native window setup and the [`run_fnplot()`] entry point |

mod layout;
mod run;

pub use run::run_fnplot;

use crate::buttons::ButtonRegistry;
use crate::commands::{Command, CommandRouter, Workspace};
use crate::config::FnPlotConfig;
use crate::data::hotkeys::Hotkey;
use crate::dialog::Prompter;
use crate::entries::EntryCollection;
use crate::plotter::ExpressionPlotter;

/// An entry of the File menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub command: Command,
}

pub struct FnPlotApp {
    pub entries: EntryCollection,
    pub buttons: ButtonRegistry,
    pub plotter: ExpressionPlotter,
    pub router: CommandRouter,
    dialogs: Box<dyn Prompter>,
    file_menu: Vec<MenuItem>,
    config: FnPlotConfig,
}

impl FnPlotApp {
    /// Build the window contents: Add/Remove buttons, one empty field and the
    /// File menu.
    pub fn new(config: FnPlotConfig, dialogs: Box<dyn Prompter>) -> Self {
        let hotkeys = config.hotkeys.clone();
        let mut app = Self {
            entries: EntryCollection::new(hotkeys.plot),
            buttons: ButtonRegistry::new(),
            plotter: ExpressionPlotter::new(config.domain, config.figure.clone()),
            router: CommandRouter::new(),
            dialogs,
            file_menu: Vec::new(),
            config,
        };
        app.add_button(Command::AddFunc.label(), Command::AddFunc, hotkeys.add_func);
        app.add_button(Command::RmFunc.label(), Command::RmFunc, hotkeys.rm_func);
        app.entries.add_entry(&mut app.buttons);
        app.create_menu();
        app
    }

    /// Show a button for `command` and bind `hotkey` to it window-wide.
    pub fn add_button(&mut self, label: &str, command: Command, hotkey: Option<Hotkey>) {
        self.buttons.add(command, label, hotkey);
    }

    /// File menu with "Save as..." and "Load file", plus their shortcuts.
    pub fn create_menu(&mut self) {
        self.file_menu = vec![
            MenuItem {
                label: Command::SaveAs.label().to_string(),
                command: Command::SaveAs,
            },
            MenuItem {
                label: Command::LoadFile.label().to_string(),
                command: Command::LoadFile,
            },
        ];
        for item in &self.file_menu {
            if let Some(hk) = self.config.hotkeys.get(item.command) {
                self.buttons.bind(item.command, hk);
            }
        }
    }

    pub fn file_menu(&self) -> &[MenuItem] {
        &self.file_menu
    }

    pub fn config(&self) -> &FnPlotConfig {
        &self.config
    }

    pub fn execute(&mut self, command: Command) {
        let ws = Workspace {
            entries: &mut self.entries,
            buttons: &mut self.buttons,
            plotter: &self.plotter,
            dialogs: self.dialogs.as_mut(),
        };
        self.router.execute(command, ws);
    }
}
