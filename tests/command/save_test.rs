//! Tests save, the exit-time save confirmation, and failure reporting.

use draco::command::Outcome;
use draco::internal::storage;
use tempfile::tempdir;

use super::*;

#[test]
fn save_writes_a_loadable_collection_file() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("dragons.json");
    let mut interp = interpreter_with(&file, Vec::<String>::new());
    interp.collection_mut().add(sample_dragon("Errol", 3, 1.0));
    interp.collection_mut().add(sample_dragon("Smaug", 171, 9.0));

    assert_eq!(interp.dispatch("save"), Outcome::Continue);

    let loaded = storage::load(&file).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded.list()[1].name, "Smaug");
}

#[test]
fn exit_saves_only_on_a_yes_answer() {
    let dir = tempdir().unwrap();

    let file = dir.path().join("yes.json");
    let mut interp = interpreter_with(&file, ["y"]);
    interp.collection_mut().add(sample_dragon("Errol", 3, 1.0));
    assert_eq!(interp.dispatch("exit"), Outcome::Exit);
    assert!(file.exists());

    let file = dir.path().join("no.json");
    let mut interp = interpreter_with(&file, ["n"]);
    interp.collection_mut().add(sample_dragon("Errol", 3, 1.0));
    assert_eq!(interp.dispatch("exit"), Outcome::Exit);
    assert!(!file.exists());
}

#[test]
fn exit_with_a_closed_input_stream_still_terminates_without_saving() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("dragons.json");
    let mut interp = interpreter_with(&file, Vec::<String>::new());
    assert_eq!(interp.dispatch("exit"), Outcome::Exit);
    assert!(!file.exists());
}

#[test]
fn a_failing_save_during_exit_still_terminates() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("missing-subdir").join("dragons.json");
    let mut interp = interpreter_with(&file, ["y"]);
    interp.collection_mut().add(sample_dragon("Errol", 3, 1.0));

    assert_eq!(interp.dispatch("exit"), Outcome::Exit);
    assert!(!file.exists());
}

#[test]
fn a_failing_save_is_reported_and_recovered_in_the_loop() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("missing-subdir").join("dragons.json");
    let mut interp = interpreter_with(&file, Vec::<String>::new());

    assert_eq!(interp.dispatch("save"), Outcome::Continue);
    // the interpreter keeps going
    assert_eq!(interp.dispatch("info"), Outcome::Continue);
}
