#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::rc::Rc;

use fnplot::dialog::{ConfirmationDialog, DialogResult, Prompter};
use fnplot::{FnPlotApp, FnPlotConfig};

/// Answers queued by a test and the dialogs the app showed.
#[derive(Default)]
pub struct Script {
    pub shown: Vec<ConfirmationDialog>,
    pub answers: VecDeque<DialogResult>,
    pub save_paths: VecDeque<Option<PathBuf>>,
    pub open_paths: VecDeque<Option<PathBuf>>,
}

#[derive(Clone, Default)]
pub struct ScriptedPrompter(pub Rc<RefCell<Script>>);

impl Prompter for ScriptedPrompter {
    fn show(&mut self, dialog: &ConfirmationDialog) -> DialogResult {
        let mut s = self.0.borrow_mut();
        s.shown.push(dialog.clone());
        s.answers.pop_front().unwrap_or(DialogResult::Accepted)
    }

    fn pick_save_path(&mut self, _default_name: &str) -> Option<PathBuf> {
        self.0.borrow_mut().save_paths.pop_front().flatten()
    }

    fn pick_open_path(&mut self) -> Option<PathBuf> {
        self.0.borrow_mut().open_paths.pop_front().flatten()
    }
}

pub fn app() -> (FnPlotApp, Rc<RefCell<Script>>) {
    let prompter = ScriptedPrompter::default();
    let script = prompter.0.clone();
    (FnPlotApp::new(FnPlotConfig::default(), Box::new(prompter)), script)
}

/// Replace the field contents with `texts`, adding fields as needed.
pub fn fill(app: &mut FnPlotApp, texts: &[&str]) {
    while app.entries.len() < texts.len() {
        app.execute(fnplot::Command::AddFunc);
    }
    let ids: Vec<_> = app.entries.fields().iter().map(|f| f.id()).collect();
    for (id, text) in ids.into_iter().zip(texts) {
        app.entries.set_text(id, *text);
    }
}

pub fn texts(app: &FnPlotApp) -> Vec<String> {
    app.entries.texts().map(str::to_string).collect()
}
