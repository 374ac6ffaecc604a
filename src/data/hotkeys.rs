//! Keyboard shortcuts: representation, parsing and matching against egui input.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::commands::Command;

/// Modifier keys (combinations) used for hotkeys.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modifier {
    None,
    Ctrl,
    Alt,
    Shift,
    CtrlAlt,
    CtrlShift,
    AltShift,
    CtrlAltShift,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Modifier::None => "",
            Modifier::Ctrl => "Ctrl",
            Modifier::Alt => "Alt",
            Modifier::Shift => "Shift",
            Modifier::CtrlAlt => "Ctrl+Alt",
            Modifier::CtrlShift => "Ctrl+Shift",
            Modifier::AltShift => "Alt+Shift",
            Modifier::CtrlAltShift => "Ctrl+Alt+Shift",
        };
        write!(f, "{}", s)
    }
}

impl Modifier {
    /// egui modifier set for this combination. `Ctrl` maps to the platform
    /// command key (Cmd on macOS).
    pub fn to_egui(self) -> egui::Modifiers {
        use egui::Modifiers as M;
        match self {
            Modifier::None => M::NONE,
            Modifier::Ctrl => M::COMMAND,
            Modifier::Alt => M::ALT,
            Modifier::Shift => M::SHIFT,
            Modifier::CtrlAlt => M::COMMAND | M::ALT,
            Modifier::CtrlShift => M::COMMAND | M::SHIFT,
            Modifier::AltShift => M::ALT | M::SHIFT,
            Modifier::CtrlAltShift => M::COMMAND | M::ALT | M::SHIFT,
        }
    }
}

/// Key char used to represent the Enter/Return key.
pub const ENTER: char = '\n';

/// A single hotkey consisting of optional modifier(s) and a key.
///
/// Letters are stored upper-case; `'\n'` stands for Enter and `' '` for Space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hotkey {
    pub modifier: Modifier,
    pub key: char,
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self.key {
            ' ' => "Space".to_string(),
            ENTER => "Enter".to_string(),
            other => other.to_string(),
        };

        if self.modifier == Modifier::None {
            write!(f, "{}", key)
        } else {
            write!(f, "{}+{}", self.modifier, key)
        }
    }
}

impl FromStr for Hotkey {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("empty hotkey".to_string());
        }
        // Accept formats like "Ctrl+O", "Enter" or "Ctrl+Alt+X"
        let parts: Vec<&str> = s.split('+').map(|p| p.trim()).collect();
        let (last, mods) = match parts.split_last() {
            Some(split) => split,
            None => return Err("invalid hotkey".to_string()),
        };
        let ch = match last.to_lowercase().as_str() {
            "space" => ' ',
            "enter" | "return" => ENTER,
            lower => {
                let mut chars = lower.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => c.to_ascii_uppercase(),
                    (None, _) => return Err("no key char".to_string()),
                    (Some(_), Some(_)) => return Err(format!("unknown key '{}'", last)),
                }
            }
        };
        if key_from_char(ch).is_none() {
            return Err(format!("unsupported key '{}'", last));
        }
        let mut lowers: Vec<String> = mods.iter().map(|m| m.to_lowercase()).collect();
        for m in lowers.iter_mut() {
            if m == "control" {
                *m = "ctrl".to_string();
            }
        }
        lowers.sort();
        lowers.dedup();
        let lowers: Vec<&str> = lowers.iter().map(String::as_str).collect();
        let modifier = match lowers.as_slice() {
            [] => Modifier::None,
            ["ctrl"] => Modifier::Ctrl,
            ["alt"] => Modifier::Alt,
            ["shift"] => Modifier::Shift,
            ["alt", "ctrl"] => Modifier::CtrlAlt,
            ["ctrl", "shift"] => Modifier::CtrlShift,
            ["alt", "shift"] => Modifier::AltShift,
            ["alt", "ctrl", "shift"] => Modifier::CtrlAltShift,
            _ => return Err(format!("unknown modifier combo '{:?}'", mods)),
        };
        Ok(Hotkey { modifier, key: ch })
    }
}

impl TryFrom<String> for Hotkey {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Hotkey> for String {
    fn from(hk: Hotkey) -> Self {
        hk.to_string()
    }
}

impl Hotkey {
    pub fn new(modifier: Modifier, key: char) -> Self {
        Self { modifier, key }
    }

    pub fn ctrl(key: char) -> Self {
        Self::new(Modifier::Ctrl, key)
    }

    pub fn enter() -> Self {
        Self::new(Modifier::None, ENTER)
    }

    /// The egui key this hotkey listens for, if the key char is supported.
    pub fn egui_key(&self) -> Option<egui::Key> {
        key_from_char(self.key)
    }

    /// Consume a matching key press from `input`.
    ///
    /// Consuming removes the event before text fields process it, so a shortcut
    /// like Ctrl+A fires even while a field has keyboard focus.
    pub fn consume(&self, input: &mut egui::InputState) -> bool {
        let Some(key) = self.egui_key() else {
            return false;
        };
        input.consume_key(self.modifier.to_egui(), key)
    }
}

/// Shortcut assignment for every bindable command.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hotkeys {
    pub plot: Option<Hotkey>,
    pub add_func: Option<Hotkey>,
    pub rm_func: Option<Hotkey>,
    pub save_as: Option<Hotkey>,
    pub load_file: Option<Hotkey>,
}

impl Default for Hotkeys {
    fn default() -> Self {
        Self {
            plot: Some(Hotkey::enter()),
            add_func: Some(Hotkey::ctrl('A')),
            rm_func: Some(Hotkey::ctrl('D')),
            save_as: None,
            load_file: Some(Hotkey::ctrl('O')),
        }
    }
}

impl Hotkeys {
    pub fn get(&self, command: Command) -> Option<Hotkey> {
        match command {
            Command::Plot => self.plot,
            Command::AddFunc => self.add_func,
            Command::RmFunc => self.rm_func,
            Command::SaveAs => self.save_as,
            Command::LoadFile => self.load_file,
        }
    }
}

/// Menu/tooltip text: the description, followed by the hotkey in brackets if one is bound.
pub fn format_button_tooltip(description: &str, hotkey: Option<&Hotkey>) -> String {
    match hotkey {
        Some(hk) => format!("{} [{}]", description, hk),
        None => description.to_string(),
    }
}

fn key_from_char(c: char) -> Option<egui::Key> {
    match c.to_ascii_uppercase() {
        'A' => Some(egui::Key::A),
        'B' => Some(egui::Key::B),
        'C' => Some(egui::Key::C),
        'D' => Some(egui::Key::D),
        'E' => Some(egui::Key::E),
        'F' => Some(egui::Key::F),
        'G' => Some(egui::Key::G),
        'H' => Some(egui::Key::H),
        'I' => Some(egui::Key::I),
        'J' => Some(egui::Key::J),
        'K' => Some(egui::Key::K),
        'L' => Some(egui::Key::L),
        'M' => Some(egui::Key::M),
        'N' => Some(egui::Key::N),
        'O' => Some(egui::Key::O),
        'P' => Some(egui::Key::P),
        'Q' => Some(egui::Key::Q),
        'R' => Some(egui::Key::R),
        'S' => Some(egui::Key::S),
        'T' => Some(egui::Key::T),
        'U' => Some(egui::Key::U),
        'V' => Some(egui::Key::V),
        'W' => Some(egui::Key::W),
        'X' => Some(egui::Key::X),
        'Y' => Some(egui::Key::Y),
        'Z' => Some(egui::Key::Z),
        '0' => Some(egui::Key::Num0),
        '1' => Some(egui::Key::Num1),
        '2' => Some(egui::Key::Num2),
        '3' => Some(egui::Key::Num3),
        '4' => Some(egui::Key::Num4),
        '5' => Some(egui::Key::Num5),
        '6' => Some(egui::Key::Num6),
        '7' => Some(egui::Key::Num7),
        '8' => Some(egui::Key::Num8),
        '9' => Some(egui::Key::Num9),
        ' ' => Some(egui::Key::Space),
        ENTER => Some(egui::Key::Enter),
        _ => None,
    }
}
