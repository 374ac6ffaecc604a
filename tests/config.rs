use fnplot::config::{ConfigError, FnPlotConfig};
use fnplot::data::hotkeys::Hotkey;
use fnplot::plotter::Domain;

#[test]
fn partial_yaml_keeps_defaults() {
    let cfg = FnPlotConfig::from_yaml("domain:\n  min: -5\n").unwrap();
    assert_eq!(cfg.domain, Domain::new(-5.0, 20.0, 0.01));
    assert_eq!(cfg.figure, FnPlotConfig::default().figure);
    assert_eq!(cfg.hotkeys.load_file, Some(Hotkey::ctrl('O')));
}

#[test]
fn hotkeys_are_configurable() {
    let cfg = FnPlotConfig::from_yaml("hotkeys:\n  save_as: Ctrl+S\n  plot: ~\n").unwrap();
    assert_eq!(cfg.hotkeys.save_as, Some(Hotkey::ctrl('S')));
    assert_eq!(cfg.hotkeys.plot, None);
}

#[test]
fn invalid_domain_is_rejected() {
    let err = FnPlotConfig::from_yaml("domain:\n  step: 0\n").unwrap_err();
    assert!(matches!(err, ConfigError::Domain(_)));
}

#[test]
fn yaml_round_trip() {
    let cfg = FnPlotConfig::default();
    let yaml = serde_yaml::to_string(&cfg).unwrap();
    assert_eq!(FnPlotConfig::from_yaml(&yaml).unwrap(), cfg);
}

#[test]
fn domain_with_too_many_samples_is_rejected() {
    let err = FnPlotConfig::from_yaml("domain:\n  min: 0\n  max: 1.0e300\n  step: 1.0e-300\n")
        .unwrap_err();
    assert!(matches!(err, ConfigError::Domain(_)));
    let err = FnPlotConfig::from_yaml("domain:\n  step: 1.0e-9\n").unwrap_err();
    assert!(matches!(err, ConfigError::Domain(_)));
}

#[test]
fn saved_config_is_loaded_from_home() {
    let home = tempfile::tempdir().unwrap();
    // Only test in this binary that reads HOME.
    std::env::set_var("HOME", home.path());

    assert_eq!(FnPlotConfig::load_from_default_path().unwrap(), None);

    let mut cfg = FnPlotConfig::default();
    cfg.title = "Saved".to_string();
    cfg.hotkeys.save_as = Some(Hotkey::ctrl('S'));
    cfg.save_to_default_path().unwrap();

    assert!(home.path().join(".fnplot").join("config.yaml").exists());
    assert_eq!(FnPlotConfig::load_from_default_path().unwrap(), Some(cfg.clone()));
    assert_eq!(FnPlotConfig::load_or_default(), cfg);
}
