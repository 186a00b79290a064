//! Tests the add family: plain add, quoted names, argument validation,
//! and the conditional add_if_max / add_if_min variants.

use draco::command::Outcome;

use super::*;

#[test]
fn add_inserts_exactly_one_record_with_prompted_fields() {
    let mut interp = interpreter_with("dragons.json", field_answers());

    assert_eq!(interp.dispatch("add smaug 171 30"), Outcome::Continue);

    let list = interp.collection().list();
    assert_eq!(list.len(), 1);
    let dragon = &list[0];
    assert_eq!(dragon.id, 1);
    assert_eq!(dragon.name, "Smaug");
    assert_eq!(dragon.age, 171);
    assert_eq!(dragon.wingspan, 30);
    assert_eq!(dragon.coordinates, Coordinates { x: 1.5, y: -2.0 });
    assert_eq!(dragon.color, Color::Red);
    assert_eq!(dragon.character, DragonCharacter::Wise);
    assert_eq!(dragon.cave.depth, 40.5);
}

#[test]
fn a_quoted_name_is_one_argument() {
    let mut interp = interpreter_with("dragons.json", field_answers());
    interp.dispatch("add \"red dragon\" 5 10");
    assert_eq!(interp.collection().list()[0].name, "Red dragon");
}

#[test]
fn the_name_is_capitalized() {
    let mut interp = interpreter_with("dragons.json", field_answers());
    interp.dispatch("add errol 3 4");
    assert_eq!(interp.collection().list()[0].name, "Errol");
}

#[test]
fn invalid_primitives_are_rejected_before_any_prompting() {
    // no scripted answers: touching the prompter would fail the test
    // through an unexpected error path, but the parse failures come first
    let mut interp = interpreter();
    interp.dispatch("add smaug seventeen 30");
    interp.dispatch("add smaug 171 wide");
    interp.dispatch("add smaug -1 30");
    interp.dispatch("add \" \" 171 30");
    assert!(interp.collection().is_empty());
}

#[test]
fn retried_prompt_answers_still_land_in_the_record() {
    let answers = ["not-a-number", "1.5", "-2", "mauve", "red", "wise", "40.5"];
    let mut interp = interpreter_with("dragons.json", answers);
    assert_eq!(interp.dispatch("add smaug 171 30"), Outcome::Continue);
    let dragon = &interp.collection().list()[0];
    assert_eq!(dragon.coordinates, Coordinates { x: 1.5, y: -2.0 });
    assert_eq!(dragon.color, Color::Red);
}

#[test]
fn add_if_max_requires_a_strictly_older_dragon() {
    let answers = [field_answers(), field_answers()].concat();
    let mut interp = interpreter_with("dragons.json", answers);

    interp.dispatch("add first 100 10");
    assert_eq!(interp.collection().len(), 1);

    // younger and equal ages are rejected without prompting
    interp.dispatch("add_if_max young 50 10");
    interp.dispatch("add_if_max peer 100 10");
    assert_eq!(interp.collection().len(), 1);

    interp.dispatch("add_if_max elder 200 10");
    assert_eq!(interp.collection().len(), 2);
}

#[test]
fn add_if_max_inserts_into_an_empty_collection() {
    let mut interp = interpreter_with("dragons.json", field_answers());
    interp.dispatch("add_if_max lonely 1 10");
    assert_eq!(interp.collection().len(), 1);
}

#[test]
fn add_if_min_requires_a_strictly_younger_dragon() {
    let answers = [field_answers(), field_answers()].concat();
    let mut interp = interpreter_with("dragons.json", answers);

    interp.dispatch("add first 100 10");

    interp.dispatch("add_if_min old 150 10");
    interp.dispatch("add_if_min peer 100 10");
    assert_eq!(interp.collection().len(), 1);

    interp.dispatch("add_if_min young 3 10");
    assert_eq!(interp.collection().len(), 2);
}

#[test]
fn add_if_min_inserts_into_an_empty_collection() {
    let mut interp = interpreter_with("dragons.json", field_answers());
    interp.dispatch("add_if_min lonely 500 10");
    assert_eq!(interp.collection().len(), 1);
}
