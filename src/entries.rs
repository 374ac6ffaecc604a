//! The ordered set of expression input fields and their focus.

use crate::buttons::ButtonRegistry;
use crate::commands::Command;
use crate::data::hotkeys::Hotkey;
use crate::dialog::{ConfirmationDialog, Prompter};

/// Label of the button that triggers [`Command::Plot`].
pub const PLOT_LABEL: &str = "Plot";

/// Stable identity of a field; survives removal of other fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldId(u64);

impl FieldId {
    /// Widget id used to address the field's text edit.
    pub fn egui_id(self) -> egui::Id {
        egui::Id::new(("fnplot_field", self.0))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputField {
    id: FieldId,
    pub text: String,
}

impl InputField {
    pub fn id(&self) -> FieldId {
        self.id
    }
}

/// What [`EntryCollection::remove_entry`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    /// Only one field left; the user was told it cannot be removed.
    Refused,
    /// The user declined to remove a non-empty field.
    Cancelled,
    /// Focus was not on a tracked field.
    NoTarget,
}

#[derive(Debug)]
pub struct EntryCollection {
    fields: Vec<InputField>,
    next_id: u64,
    /// Most recently focused field. Kept while a button has keyboard focus.
    focused: Option<FieldId>,
    /// Focus to hand to the widget on the next frame.
    focus_request: Option<FieldId>,
    plot_hotkey: Option<Hotkey>,
}

impl EntryCollection {
    pub fn new(plot_hotkey: Option<Hotkey>) -> Self {
        Self {
            fields: Vec::new(),
            next_id: 0,
            focused: None,
            focus_request: None,
            plot_hotkey,
        }
    }

    /// Append an empty field, focus it and make Plot available.
    pub fn add_entry(&mut self, buttons: &mut ButtonRegistry) -> FieldId {
        self.add_entry_with_text(String::new(), buttons)
    }

    pub fn add_entry_with_text(
        &mut self,
        text: impl Into<String>,
        buttons: &mut ButtonRegistry,
    ) -> FieldId {
        let id = FieldId(self.next_id);
        self.next_id += 1;
        self.fields.push(InputField {
            id,
            text: text.into(),
        });
        self.focus(id);
        self.refresh_plot_button(buttons);
        id
    }

    /// Remove the focused field, asking first when it has content.
    ///
    /// The last remaining field is never removed. Focus moves to the previous
    /// field (or the first one).
    pub fn remove_entry(
        &mut self,
        dialogs: &mut dyn Prompter,
        buttons: &mut ButtonRegistry,
    ) -> RemoveOutcome {
        let Some(index) = self.focused.and_then(|id| self.index_of(id)) else {
            return RemoveOutcome::NoTarget;
        };
        if self.fields.len() < 2 {
            dialogs.show(&ConfirmationDialog::info(
                "",
                "Deleting the last input field is not possible",
            ));
            return RemoveOutcome::Refused;
        }
        if !self.fields[index].text.is_empty() {
            let answer = dialogs.show(&ConfirmationDialog::confirm(
                "",
                "Do you really want to delete a non-empty field?",
            ));
            if !answer.accepted() {
                return RemoveOutcome::Cancelled;
            }
        }
        let removed = self.fields.remove(index);
        tracing::debug!(field = ?removed.id, "field removed");
        let prev = self.fields[index.saturating_sub(1)].id;
        self.focus(prev);
        self.refresh_plot_button(buttons);
        RemoveOutcome::Removed
    }

    /// Drop every field (before bulk-loading a session).
    pub fn reset_list(&mut self) {
        self.fields.clear();
        self.focused = None;
        self.focus_request = None;
    }

    /// Re-create the Plot button so it sits after the current fields.
    pub fn refresh_plot_button(&self, buttons: &mut ButtonRegistry) {
        buttons.add(Command::Plot, PLOT_LABEL, self.plot_hotkey);
    }

    /// Give `id` keyboard focus. Returns false for an unknown field.
    pub fn focus(&mut self, id: FieldId) -> bool {
        if self.index_of(id).is_none() {
            return false;
        }
        self.focused = Some(id);
        self.focus_request = Some(id);
        true
    }

    pub fn focus_first(&mut self) -> bool {
        match self.fields.first() {
            Some(f) => {
                let id = f.id;
                self.focus(id)
            }
            None => false,
        }
    }

    /// Record that the widget for `id` holds focus (set by the UI).
    pub fn note_focus(&mut self, id: FieldId) {
        if self.index_of(id).is_some() {
            self.focused = Some(id);
        }
    }

    pub fn focused(&self) -> Option<FieldId> {
        self.focused
    }

    pub fn take_focus_request(&mut self) -> Option<FieldId> {
        self.focus_request.take()
    }

    pub fn index_of(&self, id: FieldId) -> Option<usize> {
        self.fields.iter().position(|f| f.id == id)
    }

    pub fn get(&self, id: FieldId) -> Option<&InputField> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn set_text(&mut self, id: FieldId, text: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|f| f.id == id) {
            Some(f) => {
                f.text = text.into();
                true
            }
            None => false,
        }
    }

    pub fn fields(&self) -> &[InputField] {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut [InputField] {
        &mut self.fields
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.text.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
