#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Scenario parser that turns tagged text lines into a populated terrain.
//!
//! Each line starts with a tag: `C` declares the grid, `M` a mountain, `T` a
//! treasure, `A` an adventurer and `#` a comment. Lines are first classified
//! into [`Record`] values, then replayed against a fresh [`Terrain`] through
//! the world's `apply` entry point so placement rules live in one place.

mod error;
mod fields;

use treasure_hunt_core::{
    AdventurerRecord, CellCoord, Command, Direction, Event, MoveCommand, PlacementError, Record,
};
use treasure_hunt_world::{self as world, Terrain};
use tracing::debug;

pub use crate::error::ScenarioError;

/// Parses a full scenario into a terrain ready for play.
pub fn parse<I, S>(lines: I) -> Result<Terrain, ScenarioError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut dimensions: Option<(u32, u32)> = None;
    let mut entities: Vec<(usize, Record)> = Vec::new();
    let mut saw_content = false;

    for (index, line) in lines.into_iter().enumerate() {
        let line_number = index + 1;
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }
        saw_content = true;

        match parse_line(line_number, line)? {
            Record::Dimensions { width, height } => {
                if dimensions.is_some() {
                    return Err(ScenarioError::DuplicateDimensions { line: line_number });
                }
                dimensions = Some((width, height));
            }
            Record::Comment => {}
            record => entities.push((line_number, record)),
        }
    }

    if !saw_content {
        return Err(ScenarioError::EmptyInput);
    }
    let (width, height) = dimensions.ok_or(ScenarioError::MissingDimensions)?;

    let mut terrain = Terrain::new(width, height);
    let mut events = Vec::new();
    for (line, record) in entities {
        let Some((cell, command)) = placement_command(record) else {
            continue;
        };
        events.clear();
        world::apply(&mut terrain, command, &mut events);
        if let Some(reason) = rejection(&events) {
            return Err(placement_error(line, cell, reason));
        }
    }

    debug!(
        width,
        height,
        mountains = world::query::mountains(&terrain).len(),
        treasures = world::query::treasures(&terrain).len(),
        adventurers = world::query::adventurers(&terrain).len(),
        "scenario parsed"
    );
    Ok(terrain)
}

/// Classifies a single line. `line` is the 1-based number used in errors.
pub fn parse_line(line: usize, text: &str) -> Result<Record, ScenarioError> {
    let trimmed = text.trim_start();
    let Some(tag) = trimmed.chars().next() else {
        return Ok(Record::Comment);
    };

    match tag {
        'C' => {
            let [width, height] = fields::numbers::<2>(line, tag, trimmed)?;
            if width == 0 || height == 0 {
                return Err(ScenarioError::InvalidCoordinates {
                    line,
                    column: width,
                    row: height,
                });
            }
            Ok(Record::Dimensions { width, height })
        }
        'M' => {
            let [column, row] = fields::numbers::<2>(line, tag, trimmed)?;
            Ok(Record::Mountain {
                cell: CellCoord::new(column, row),
            })
        }
        'T' => {
            let [column, row, amount] = fields::numbers::<3>(line, tag, trimmed)?;
            Ok(Record::Treasure {
                cell: CellCoord::new(column, row),
                amount,
            })
        }
        'A' => parse_adventurer(line, tag, trimmed).map(Record::Adventurer),
        '#' => Ok(Record::Comment),
        other => Err(ScenarioError::InvalidInput { line, tag: other }),
    }
}

fn parse_adventurer(line: usize, tag: char, text: &str) -> Result<AdventurerRecord, ScenarioError> {
    let [column, row] = fields::numbers::<2>(line, tag, text)?;
    let [_, name, direction, script] = fields::words::<4>(line, tag, text)?;

    let direction =
        Direction::from_letter(direction).ok_or_else(|| ScenarioError::InvalidDirection {
            line,
            value: direction.to_owned(),
        })?;
    let script = script
        .chars()
        .enumerate()
        .map(|(index, command)| {
            MoveCommand::from_char(command).ok_or(ScenarioError::InvalidMoveCommand {
                line,
                command,
                index,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AdventurerRecord {
        name: name.to_owned(),
        cell: CellCoord::new(column, row),
        direction,
        script,
    })
}

fn placement_command(record: Record) -> Option<(CellCoord, Command)> {
    match record {
        Record::Mountain { cell } => Some((cell, Command::PlaceMountain { cell })),
        Record::Treasure { cell, amount } => Some((cell, Command::PlaceTreasure { cell, amount })),
        Record::Adventurer(AdventurerRecord {
            name,
            cell,
            direction,
            script,
        }) => Some((
            cell,
            Command::SpawnAdventurer {
                name,
                cell,
                direction,
                script,
            },
        )),
        Record::Dimensions { .. } | Record::Comment => None,
    }
}

fn rejection(events: &[Event]) -> Option<PlacementError> {
    events.iter().find_map(|event| match event {
        Event::PlacementRejected { reason, .. } => Some(*reason),
        _ => None,
    })
}

fn placement_error(line: usize, cell: CellCoord, reason: PlacementError) -> ScenarioError {
    match reason {
        PlacementError::OutOfBounds => ScenarioError::InvalidCoordinates {
            line,
            column: cell.column(),
            row: cell.row(),
        },
        PlacementError::Occupied => ScenarioError::OccupiedCell {
            line,
            column: cell.column(),
            row: cell.row(),
        },
    }
}
