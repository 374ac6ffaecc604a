mod common;

use std::path::PathBuf;

use common::{app, fill, texts};
use fnplot::data::session::{with_default_extension, Session, SessionError};
use fnplot::dialog::DialogLevel;
use fnplot::Command;

#[test]
fn file_round_trip_preserves_order_and_blanks() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("s.json");
    let session = Session::new(vec!["sin(x)".into(), "".into(), "x**2".into()]);
    session.save_to_path(&path).unwrap();
    assert_eq!(Session::load_from_path(&path).unwrap(), session);
}

#[test]
fn missing_or_null_key_loads_empty() {
    assert!(Session::from_json("{}").unwrap().is_empty());
    assert!(Session::from_json(r#"{"list_of_function": null}"#)
        .unwrap()
        .is_empty());
}

#[test]
fn malformed_json_is_an_error() {
    assert!(matches!(
        Session::from_json("{\"list_of_function\": [1, 2"),
        Err(SessionError::Json(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Session::load_from_path(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, SessionError::Io { .. }));
}

#[test]
fn extension_is_added_only_when_missing() {
    assert_eq!(
        with_default_extension(PathBuf::from("/tmp/funcs")),
        PathBuf::from("/tmp/funcs.json")
    );
    assert_eq!(
        with_default_extension(PathBuf::from("/tmp/funcs.txt")),
        PathBuf::from("/tmp/funcs.txt")
    );
}

#[test]
fn load_replaces_fields_and_focuses_first() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("load.json");
    std::fs::write(&path, r#"{"list_of_function": ["x", "x^2"]}"#).unwrap();

    let (mut app, script) = app();
    fill(&mut app, &["a", "b", "c"]);
    app.execute(Command::Plot);
    assert!(app.router.figure().is_some());

    script.borrow_mut().open_paths.push_back(Some(path));
    app.execute(Command::LoadFile);

    assert_eq!(texts(&app), vec!["x", "x^2"]);
    assert_eq!(app.entries.focused(), Some(app.entries.fields()[0].id()));
    assert!(app.router.figure().is_none());
    assert!(app.buttons.contains(Command::Plot));
    assert_eq!(app.router.session().list_of_function, vec!["x", "x^2"]);
}

#[test]
fn save_then_load_restores_fields_exactly() {
    let dir = tempfile::tempdir().unwrap();
    let chosen = dir.path().join("session");

    let (mut app, script) = app();
    fill(&mut app, &["sin(x)", "", "x**2"]);
    app.execute(Command::Plot);
    script.borrow_mut().save_paths.push_back(Some(chosen.clone()));
    app.execute(Command::SaveAs);

    let written = chosen.with_extension("json");
    assert!(written.exists(), "default extension applied");

    fill(&mut app, &["changed", "", ""]);
    script.borrow_mut().open_paths.push_back(Some(written));
    app.execute(Command::LoadFile);
    assert_eq!(texts(&app), vec!["sin(x)", "", "x**2"]);
}

#[test]
fn cancelled_pickers_change_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let (mut app, script) = app();
    fill(&mut app, &["x", "2"]);
    let before = texts(&app);

    script.borrow_mut().save_paths.push_back(None);
    app.execute(Command::SaveAs);
    script.borrow_mut().open_paths.push_back(None);
    app.execute(Command::LoadFile);

    assert_eq!(texts(&app), before);
    assert!(script.borrow().shown.is_empty());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn malformed_file_is_reported_and_fields_kept() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "not json").unwrap();

    let (mut app, script) = app();
    fill(&mut app, &["x"]);
    script.borrow_mut().open_paths.push_back(Some(path));
    app.execute(Command::LoadFile);

    assert_eq!(texts(&app), vec!["x"]);
    let s = script.borrow();
    assert_eq!(s.shown.len(), 1);
    assert_eq!(s.shown[0].level, DialogLevel::Error);
}

#[test]
fn empty_session_still_leaves_one_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");
    std::fs::write(&path, "{}").unwrap();

    let (mut app, script) = app();
    fill(&mut app, &["x", "y"]);
    script.borrow_mut().open_paths.push_back(Some(path));
    app.execute(Command::LoadFile);

    assert_eq!(texts(&app), vec![""]);
    assert!(app.entries.focused().is_some());
}
