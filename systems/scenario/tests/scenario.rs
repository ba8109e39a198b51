use treasure_hunt_core::{CellCoord, Direction};
use treasure_hunt_system_scenario::{parse, ScenarioError};
use treasure_hunt_world::query;

fn lara_scenario() -> Vec<&'static str> {
    vec![
        "C - 3 - 4",
        "M - 1 - 0",
        "M - 2 - 1",
        "T - 0 - 3 - 2",
        "T - 1 - 3 - 3",
        "A - Lara - 1 - 1 - S - AADADAGGA",
    ]
}

#[test]
fn parses_every_entity_in_declaration_order() {
    let terrain = parse(lara_scenario()).expect("scenario parses");

    assert_eq!(query::dimensions(&terrain), (3, 4));
    let mountains: Vec<_> = query::mountains(&terrain)
        .iter()
        .map(|mountain| mountain.cell())
        .collect();
    assert_eq!(mountains, vec![CellCoord::new(1, 0), CellCoord::new(2, 1)]);

    let treasures: Vec<_> = query::treasures(&terrain)
        .iter()
        .map(|treasure| (treasure.cell(), treasure.amount()))
        .collect();
    assert_eq!(
        treasures,
        vec![(CellCoord::new(0, 3), 2), (CellCoord::new(1, 3), 3)]
    );

    let adventurers = query::adventurers(&terrain);
    assert_eq!(adventurers.len(), 1);
    assert_eq!(adventurers[0].name(), "Lara");
    assert_eq!(adventurers[0].cell(), CellCoord::new(1, 1));
    assert_eq!(adventurers[0].direction(), Direction::South);
    assert_eq!(adventurers[0].treasures_collected(), 0);
}

#[test]
fn spacing_fits_the_longest_name() {
    let terrain = parse(lara_scenario()).expect("scenario parses");
    assert_eq!(query::spacing(&terrain), 7);

    let terrain = parse(["C - 2 - 1", "M - 0 - 0"]).expect("scenario parses");
    assert_eq!(query::spacing(&terrain), 4);
}

#[test]
fn names_may_contain_spaces() {
    let terrain =
        parse(["C - 4 - 4", "A - Lara Croft - 0 - 0 - E - A"]).expect("scenario parses");
    assert_eq!(query::adventurers(&terrain)[0].name(), "Lara Croft");
    assert_eq!(query::spacing(&terrain), 13);
}

#[test]
fn blank_and_comment_lines_are_skipped() {
    let terrain = parse([
        "# Treasure map",
        "",
        "C - 5 - 1",
        "   ",
        "#Hello world you shouldn't see me",
        "M - 3 - 0",
    ])
    .expect("scenario parses");
    assert_eq!(query::mountains(&terrain).len(), 1);
}

#[test]
fn entities_may_precede_dimensions() {
    let terrain = parse(["M - 3 - 0", "C - 5 - 1"]).expect("scenario parses");
    assert_eq!(query::mountains(&terrain)[0].cell(), CellCoord::new(3, 0));
}

#[test]
fn empty_input_is_rejected() {
    let lines: Vec<String> = Vec::new();
    assert_eq!(parse(lines).unwrap_err(), ScenarioError::EmptyInput);
    assert_eq!(parse(["", "  "]).unwrap_err(), ScenarioError::EmptyInput);
}

#[test]
fn missing_dimensions_are_rejected() {
    assert_eq!(
        parse(["# only a comment", "M - 0 - 0"]).unwrap_err(),
        ScenarioError::MissingDimensions
    );
}

#[test]
fn duplicate_dimensions_are_rejected() {
    assert_eq!(
        parse(["C - 3 - 3", "M - 0 - 0", "C - 4 - 4"]).unwrap_err(),
        ScenarioError::DuplicateDimensions { line: 3 }
    );
}

#[test]
fn arity_mismatch_names_the_tag() {
    assert_eq!(
        parse(["C - 3 - 3", "T - 1 - 1"]).unwrap_err(),
        ScenarioError::InvalidInput { line: 2, tag: 'T' }
    );
    assert_eq!(
        parse(["C - 3", "T - 1 - 1 - 1"]).unwrap_err(),
        ScenarioError::InvalidInput { line: 1, tag: 'C' }
    );
    assert_eq!(
        parse(["C - 3 - 3", "A - Lara - 1 - 1 - S"]).unwrap_err(),
        ScenarioError::InvalidInput { line: 2, tag: 'A' }
    );
}

#[test]
fn unknown_tag_is_rejected() {
    assert_eq!(
        parse(["C - 3 - 3", "Z - 1 - 1"]).unwrap_err(),
        ScenarioError::InvalidInput { line: 2, tag: 'Z' }
    );
}

#[test]
fn entities_outside_the_grid_are_rejected() {
    assert_eq!(
        parse(["C - 3 - 3", "T - 3 - 0 - 1"]).unwrap_err(),
        ScenarioError::InvalidCoordinates {
            line: 2,
            column: 3,
            row: 0
        }
    );
    assert_eq!(
        parse(["C - 3 - 3", "A - Lara - 0 - 7 - N - A"]).unwrap_err(),
        ScenarioError::InvalidCoordinates {
            line: 2,
            column: 0,
            row: 7
        }
    );
}

#[test]
fn non_positive_dimensions_are_rejected() {
    assert_eq!(
        parse(["C - 0 - 0"]).unwrap_err(),
        ScenarioError::InvalidCoordinates {
            line: 1,
            column: 0,
            row: 0
        }
    );
}

#[test]
fn overlapping_adventurers_are_rejected() {
    assert_eq!(
        parse([
            "C - 3 - 3",
            "A - Lara - 1 - 1 - N - A",
            "A - Indy - 1 - 1 - S - A",
        ])
        .unwrap_err(),
        ScenarioError::OccupiedCell {
            line: 3,
            column: 1,
            row: 1
        }
    );
    assert_eq!(
        parse(["C - 3 - 3", "M - 2 - 2", "A - Lara - 2 - 2 - N - A"]).unwrap_err(),
        ScenarioError::OccupiedCell {
            line: 3,
            column: 2,
            row: 2
        }
    );
}

#[test]
fn invalid_direction_is_rejected() {
    assert_eq!(
        parse(["C - 3 - 3", "A - Lara - 1 - 1 - Q - A"]).unwrap_err(),
        ScenarioError::InvalidDirection {
            line: 2,
            value: "Q".to_owned()
        }
    );
}

#[test]
fn invalid_move_command_is_rejected() {
    assert_eq!(
        parse(["C - 3 - 3", "A - Lara - 1 - 1 - N - AAXD"]).unwrap_err(),
        ScenarioError::InvalidMoveCommand {
            line: 2,
            command: 'X',
            index: 2
        }
    );
}

#[test]
fn numeric_overflow_is_reported() {
    assert_eq!(
        parse(["C - 3 - 3", "T - 1 - 1 - 4294967296"]).unwrap_err(),
        ScenarioError::NumericParseFailure {
            line: 2,
            value: "4294967296".to_owned()
        }
    );
}

#[test]
fn errors_name_the_failing_line() {
    let error = parse(["C - 3 - 3", "A - Lara - 1 - 1 - N - AAXD"]).unwrap_err();
    assert_eq!(
        error.to_string(),
        "line 2: invalid move command `X` at position 2"
    );
}

#[test]
fn maximal_grid_parses_without_allocating_cells() {
    let terrain = parse([
        "C - 4294967295 - 4294967295",
        "M - 0 - 0",
        "A - Lara - 4294967294 - 4294967294 - N - A",
    ])
    .expect("scenario parses");

    assert_eq!(query::dimensions(&terrain), (u32::MAX, u32::MAX));
    assert_eq!(
        query::adventurers(&terrain)[0].cell(),
        CellCoord::new(u32::MAX - 1, u32::MAX - 1)
    );
}

#[test]
fn maximal_grid_still_rejects_overlaps() {
    assert_eq!(
        parse([
            "C - 4294967295 - 4294967295",
            "M - 4294967294 - 7",
            "A - Lara - 4294967294 - 7 - N - A",
        ])
        .unwrap_err(),
        ScenarioError::OccupiedCell {
            line: 3,
            column: u32::MAX - 1,
            row: 7
        }
    );
}
