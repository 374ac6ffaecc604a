//! fnplot crate root: module wiring and re-exports.
//!
//! A desktop function plotter built on egui/eframe. Expressions of `x` are
//! typed into a column of fields, plotted overlaid on one chart, and the list
//! of expressions can be saved to and loaded from a JSON session file.
//!
//! - `data`: expression evaluation, hotkeys and session persistence
//! - `plotter`: sampling domain and figure construction
//! - `entries` / `buttons`: the field column and command-bound controls
//! - `dialog`: modal prompts, injected into commands as a capability
//! - `commands`: the command set and the router that executes it
//! - `app`: the main window and the `run_fnplot` entry point

pub mod app;
pub mod buttons;
pub mod commands;
pub mod config;
pub mod data;
pub mod dialog;
pub mod entries;
pub mod panels;
pub mod plotter;

pub use app::{run_fnplot, FnPlotApp};
pub use commands::{Command, CommandRouter};
pub use config::FnPlotConfig;
pub use data::session::Session;
pub use dialog::{ConfirmationDialog, DialogResult, NativePrompter, Prompter};
pub use plotter::{Domain, ExpressionPlotter, Figure, FigureStyle};
