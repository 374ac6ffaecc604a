//! Modal prompts: message boxes and file pickers.
//!
//! Commands receive a [`Prompter`] instead of reaching for a window handle, so
//! the same command code runs against native dialogs in the app and against
//! scripted answers in tests. Every call blocks until the user dismisses the
//! prompt and then returns the outcome.

use std::path::PathBuf;

use crate::data::session::SESSION_EXTENSION;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogLevel {
    Info,
    Warning,
    Error,
}

/// Button set of a [`ConfirmationDialog`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogButtons {
    /// A single acknowledge button.
    Ok(String),
    /// Accept / reject pair.
    YesNo { yes: String, no: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogResult {
    /// OK or yes was pressed.
    Accepted,
    /// No was pressed, or the dialog was closed.
    Rejected,
}

impl DialogResult {
    pub fn accepted(self) -> bool {
        self == DialogResult::Accepted
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmationDialog {
    pub title: String,
    pub text: String,
    pub level: DialogLevel,
    pub buttons: DialogButtons,
}

impl ConfirmationDialog {
    /// Informational box with a single OK button.
    pub fn info(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            level: DialogLevel::Info,
            buttons: DialogButtons::Ok("OK".to_string()),
        }
    }

    pub fn error(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            level: DialogLevel::Error,
            ..Self::info(title, text)
        }
    }

    /// Yes/no question.
    pub fn confirm(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            level: DialogLevel::Warning,
            buttons: DialogButtons::YesNo {
                yes: "Yes".to_string(),
                no: "No".to_string(),
            },
        }
    }

    /// Text shown when the caller passed none.
    pub fn text_or_default(&self) -> &str {
        if self.text.is_empty() {
            "Default text"
        } else {
            &self.text
        }
    }
}

/// Dialog capability injected into commands.
pub trait Prompter {
    /// Show `dialog` and block until a button is pressed or it is closed.
    fn show(&mut self, dialog: &ConfirmationDialog) -> DialogResult;

    /// Ask for a destination file. `None` when cancelled.
    fn pick_save_path(&mut self, default_name: &str) -> Option<PathBuf>;

    /// Ask for a source file. `None` when cancelled.
    fn pick_open_path(&mut self) -> Option<PathBuf>;
}

/// Native message boxes and file pickers via `rfd`.
#[derive(Debug, Default)]
pub struct NativePrompter;

impl Prompter for NativePrompter {
    fn show(&mut self, dialog: &ConfirmationDialog) -> DialogResult {
        use rfd::{MessageButtons, MessageDialogResult, MessageLevel};

        let level = match dialog.level {
            DialogLevel::Info => MessageLevel::Info,
            DialogLevel::Warning => MessageLevel::Warning,
            DialogLevel::Error => MessageLevel::Error,
        };
        let (buttons, yes_label) = match &dialog.buttons {
            DialogButtons::Ok(label) => (MessageButtons::OkCustom(label.clone()), label.clone()),
            DialogButtons::YesNo { yes, no } => (
                MessageButtons::OkCancelCustom(yes.clone(), no.clone()),
                yes.clone(),
            ),
        };
        let result = rfd::MessageDialog::new()
            .set_level(level)
            .set_title(&dialog.title)
            .set_description(dialog.text_or_default())
            .set_buttons(buttons)
            .show();
        match result {
            MessageDialogResult::Ok | MessageDialogResult::Yes => DialogResult::Accepted,
            MessageDialogResult::Custom(label) if label == yes_label => DialogResult::Accepted,
            _ => DialogResult::Rejected,
        }
    }

    fn pick_save_path(&mut self, default_name: &str) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .add_filter("JSON", &[SESSION_EXTENSION])
            .set_file_name(default_name)
            .save_file()
    }

    fn pick_open_path(&mut self) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .add_filter("JSON", &[SESSION_EXTENSION])
            .add_filter("All files", &["*"])
            .pick_file()
    }
}
