//! Command-bound buttons and keyboard shortcuts shown in the main window.

use crate::commands::Command;
use crate::data::hotkeys::Hotkey;

/// A clickable control bound to exactly one command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Button {
    pub command: Command,
    pub label: String,
}

/// Live buttons, keyed by the command they trigger, in layout order.
///
/// Re-adding a button removes the old one first and appends the new one at the
/// end, so at most one control per command is ever live. Shortcut bindings are
/// kept separately and outlive their button: removing the Plot button after a
/// plot keeps Enter bound.
#[derive(Clone, Debug, Default)]
pub struct ButtonRegistry {
    buttons: Vec<Button>,
    bindings: Vec<(Hotkey, Command)>,
}

impl ButtonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a button for `command`, replacing any existing one, and bind
    /// `hotkey` to it if given.
    pub fn add(&mut self, command: Command, label: impl Into<String>, hotkey: Option<Hotkey>) {
        if self.remove(command) {
            tracing::debug!(button = command.name(), "replacing button");
        }
        self.buttons.push(Button {
            command,
            label: label.into(),
        });
        if let Some(hk) = hotkey {
            self.bind(command, hk);
        }
    }

    /// Take the button for `command` off the window. Returns whether one existed.
    pub fn remove(&mut self, command: Command) -> bool {
        let before = self.buttons.len();
        self.buttons.retain(|b| b.command != command);
        self.buttons.len() != before
    }

    pub fn get(&self, command: Command) -> Option<&Button> {
        self.buttons.iter().find(|b| b.command == command)
    }

    pub fn contains(&self, command: Command) -> bool {
        self.get(command).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Button> {
        self.buttons.iter()
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Bind a window-wide shortcut. A command has at most one shortcut; binding
    /// again replaces it, and a hotkey triggers at most one command.
    pub fn bind(&mut self, command: Command, hotkey: Hotkey) {
        self.bindings
            .retain(|(hk, cmd)| *cmd != command && *hk != hotkey);
        self.bindings.push((hotkey, command));
    }

    pub fn bindings(&self) -> impl Iterator<Item = (Hotkey, Command)> + '_ {
        self.bindings.iter().copied()
    }

    pub fn hotkey_for(&self, command: Command) -> Option<Hotkey> {
        self.bindings
            .iter()
            .find(|(_, cmd)| *cmd == command)
            .map(|(hk, _)| *hk)
    }
}
