use fnplot::buttons::ButtonRegistry;
use fnplot::data::hotkeys::*;
use fnplot::Command;

#[test]
fn tooltip_with_no_hotkey_returns_description_only() {
    let text = format_button_tooltip("Add function", None);
    assert_eq!(text, "Add function");
}

#[test]
fn tooltip_with_ctrl_hotkey() {
    let hk = Hotkey::ctrl('A');
    let text = format_button_tooltip("Add function", Some(&hk));
    assert_eq!(text, "Add function [Ctrl+A]");
}

#[test]
fn parses_and_displays_named_keys() {
    let hk: Hotkey = "Enter".parse().unwrap();
    assert_eq!(hk, Hotkey::enter());
    assert_eq!(hk.to_string(), "Enter");
    assert_eq!("return".parse::<Hotkey>().unwrap(), Hotkey::enter());

    let hk: Hotkey = "shift + ctrl + o".parse().unwrap();
    assert_eq!(hk, Hotkey::new(Modifier::CtrlShift, 'O'));
    assert_eq!(hk.to_string(), "Ctrl+Shift+O");
}

#[test]
fn rejects_unknown_keys_and_modifiers() {
    assert!("".parse::<Hotkey>().is_err());
    assert!("Ctrl+F5".parse::<Hotkey>().is_err());
    assert!("Meta+A".parse::<Hotkey>().is_err());
    assert!("Ctrl+#".parse::<Hotkey>().is_err());
}

#[test]
fn defaults_cover_the_documented_shortcuts() {
    let hk = Hotkeys::default();
    assert_eq!(hk.get(Command::AddFunc), Some(Hotkey::ctrl('A')));
    assert_eq!(hk.get(Command::RmFunc), Some(Hotkey::ctrl('D')));
    assert_eq!(hk.get(Command::LoadFile), Some(Hotkey::ctrl('O')));
    assert_eq!(hk.get(Command::Plot), Some(Hotkey::enter()));
    assert_eq!(hk.get(Command::SaveAs), None);
}

#[test]
fn hotkeys_round_trip_through_yaml_as_strings() {
    let hk = Hotkeys::default();
    let yaml = serde_yaml::to_string(&hk).unwrap();
    assert!(yaml.contains("Ctrl+O"));
    let back: Hotkeys = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(back, hk);
}

#[test]
fn readding_a_button_replaces_it() {
    let mut reg = ButtonRegistry::new();
    reg.add(Command::Plot, "Plot", Some(Hotkey::enter()));
    reg.add(Command::AddFunc, "Add", None);
    reg.add(Command::Plot, "Plot again", Some(Hotkey::enter()));
    let labels: Vec<&str> = reg.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["Add", "Plot again"]);
    assert_eq!(reg.bindings().count(), 1);
}

#[test]
fn binding_outlives_removed_button() {
    let mut reg = ButtonRegistry::new();
    reg.add(Command::Plot, "Plot", Some(Hotkey::enter()));
    assert!(reg.remove(Command::Plot));
    assert!(!reg.remove(Command::Plot));
    assert!(reg.is_empty());
    assert_eq!(reg.hotkey_for(Command::Plot), Some(Hotkey::enter()));
}

#[test]
fn a_hotkey_triggers_one_command() {
    let mut reg = ButtonRegistry::new();
    reg.bind(Command::LoadFile, Hotkey::ctrl('O'));
    reg.bind(Command::SaveAs, Hotkey::ctrl('O'));
    let bound: Vec<_> = reg.bindings().collect();
    assert_eq!(bound, vec![(Hotkey::ctrl('O'), Command::SaveAs)]);
}

#[test]
fn command_names_resolve() {
    for cmd in Command::ALL {
        assert_eq!(Command::from_name(cmd.name()), Some(cmd));
    }
    assert_eq!(Command::from_name("nope"), None);
}
