//! Tests the update command: the silent no-op on absent ids and the full
//! field replacement on present ones.

use draco::command::Outcome;

use super::*;

#[test]
fn update_of_an_absent_id_is_a_silent_no_op() {
    // no scripted answers: if update prompted, the command would fail;
    // it must not even reach the prompter
    let mut interp = interpreter();
    interp.collection_mut().add(sample_dragon("Errol", 3, 1.0));

    assert_eq!(interp.dispatch("update 42"), Outcome::Continue);

    let dragon = &interp.collection().list()[0];
    assert_eq!(dragon.name, "Errol");
    assert_eq!(dragon.age, 3);
}

#[test]
fn update_replaces_every_field_but_keeps_the_id() {
    let answers = ["fafnir", "120", "25", "9.5", "8", "white", "chaotic", "77"];
    let mut interp = interpreter_with("dragons.json", answers);
    let id = interp.collection_mut().add(sample_dragon("Errol", 3, 1.0));

    assert_eq!(interp.dispatch(&format!("update {id}")), Outcome::Continue);

    let dragon = &interp.collection().list()[0];
    assert_eq!(dragon.id, id);
    assert_eq!(dragon.name, "Fafnir");
    assert_eq!(dragon.age, 120);
    assert_eq!(dragon.wingspan, 25);
    assert_eq!(dragon.coordinates, Coordinates { x: 9.5, y: 8.0 });
    assert_eq!(dragon.color, Color::White);
    assert_eq!(dragon.character, DragonCharacter::Chaotic);
    assert_eq!(dragon.cave.depth, 77.0);
}

#[test]
fn a_non_positive_prompted_age_aborts_the_update() {
    let answers = ["fafnir", "-5"];
    let mut interp = interpreter_with("dragons.json", answers);
    let id = interp.collection_mut().add(sample_dragon("Errol", 3, 1.0));

    assert_eq!(interp.dispatch(&format!("update {id}")), Outcome::Continue);

    // the record is untouched
    let dragon = &interp.collection().list()[0];
    assert_eq!(dragon.name, "Errol");
    assert_eq!(dragon.age, 3);
}

#[test]
fn a_malformed_id_argument_is_rejected() {
    let mut interp = interpreter();
    assert_eq!(interp.dispatch("update forty-two"), Outcome::Continue);
    assert!(interp.collection().is_empty());
}
